//! Address field classification.
//!
//! The address column of a rule row is one of:
//! - an IPv6 CIDR literal, recognised by the `::/` substring,
//! - a serialized template expression (anything else containing a colon),
//!   e.g. `{"Fn::GetAtt": ["VPC", "CidrBlock"]}`,
//! - an IPv4 CIDR literal.
//!
//! The colon check is content based. A literal that contains a colon but is
//! neither an IPv6 CIDR nor an expression is still parsed as an expression
//! and fails there.

use serde_json::Value;

use crate::error::MacroError;

/// Marker that identifies an IPv6 CIDR block.
pub const IPV6_CIDR_MARKER: &str = "::/";

/// Property key for IPv4 blocks and expressions.
pub const CIDR_BLOCK: &str = "CidrBlock";

/// Property key for IPv6 blocks.
pub const IPV6_CIDR_BLOCK: &str = "Ipv6CidrBlock";

#[derive(Debug, Clone, PartialEq)]
pub enum Address {
    Ipv4(String),
    Ipv6(String),
    /// A template expression, kept opaque and copied structurally.
    Expression(Value),
}

impl Address {
    /// Classify the raw address field of a rule row.
    pub fn classify(raw: &str) -> Result<Self, MacroError> {
        if raw.contains(IPV6_CIDR_MARKER) {
            return Ok(Address::Ipv6(raw.to_string()));
        }
        if raw.contains(':') {
            let value = serde_json::from_str(raw).map_err(|e| MacroError::ExpressionError {
                address: raw.to_string(),
                reason: e.to_string(),
            })?;
            return Ok(Address::Expression(value));
        }
        Ok(Address::Ipv4(raw.to_string()))
    }

    /// The entry property this address is written under.
    pub fn property_key(&self) -> &'static str {
        match self {
            Address::Ipv6(_) => IPV6_CIDR_BLOCK,
            Address::Ipv4(_) | Address::Expression(_) => CIDR_BLOCK,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Address::Ipv4(cidr) | Address::Ipv6(cidr) => Value::String(cidr),
            Address::Expression(value) => value,
        }
    }
}
