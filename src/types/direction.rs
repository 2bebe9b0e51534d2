//! Traffic direction of a network ACL rule.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Which way a rule applies. The variant name doubles as the property key
/// holding the compact rule rows and as the infix of synthesized entry names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    pub fn from_egress(is_egress: bool) -> Self {
        if is_egress {
            Direction::Outbound
        } else {
            Direction::Inbound
        }
    }

    /// Value of the `Egress` property on a synthesized entry.
    pub fn is_egress(self) -> bool {
        matches!(self, Direction::Outbound)
    }

    /// Name of the parent property carrying the rule rows for this direction.
    pub fn property(self) -> &'static str {
        match self {
            Direction::Inbound => "Inbound",
            Direction::Outbound => "Outbound",
        }
    }
}
