// src/lib.rs
pub use config::{ExpanderConfig, ExpanderConfigBuilder};
pub use error::MacroError;
pub use expander::{ASSOCIATION, NaclExpander};
pub use logical_id::is_valid_logical_id;
pub use synth::{association_name, entry_name};
pub use types::{
    Address, Direction, Fragment, MacroRequest, MacroResponse, MacroStatus, PortRange,
    ResourceKind, RuleRow,
};

mod config;
mod error;
mod expander;
mod logical_id;
mod synth;
pub mod types;
