//! Data model for network ACL expansion.
//!
//! Compact rule rows (`100,6,allow,0.0.0.0/0,443`) are tokenized into
//! [`RuleRow`]s; the address column becomes an [`Address`] and the port column
//! a [`PortRange`]. Fragments and the macro envelope stay close to the JSON
//! CloudFormation exchanges.

mod address;
mod direction;
mod event;
mod fragment;
mod port_range;
mod resource_kind;
mod rule_row;

pub use address::{Address, CIDR_BLOCK, IPV6_CIDR_BLOCK, IPV6_CIDR_MARKER};
pub use direction::Direction;
pub use event::{MacroRequest, MacroResponse, MacroStatus};
pub use fragment::{
    CONDITION, Fragment, PROPERTIES, RESOURCES, TYPE, condition, properties, reference,
    resource_type,
};
pub use port_range::{ALL, PortRange};
pub use resource_kind::ResourceKind;
pub use rule_row::{DEFAULT_QUOTE, RULE_FIELDS, RuleRow};
