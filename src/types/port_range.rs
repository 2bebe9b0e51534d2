//! Port specifications of rule rows.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MacroError;

/// Sentinel meaning "all ports" (and, in the protocol column, "all protocols").
pub const ALL: &str = "-1";

/// A `PortRange` property value. Bounds are carried as text and never
/// validated or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortRange {
    pub from: String,
    pub to: String,
}

impl PortRange {
    pub fn all() -> Self {
        Self::single(ALL)
    }

    pub fn single(port: impl Into<String>) -> Self {
        let port = port.into();
        Self {
            from: port.clone(),
            to: port,
        }
    }

    pub fn is_all(&self) -> bool {
        self.from == ALL && self.to == ALL
    }

    /// Resolve a port spec: the sentinel, `443`, or `443-446`.
    pub fn resolve(spec: &str) -> Self {
        if spec == ALL {
            return Self::all();
        }
        let parts: Vec<&str> = spec.split('-').collect();
        match parts.as_slice() {
            [from, to] => Self {
                from: from.to_string(),
                to: to.to_string(),
            },
            // Anything but a pair collapses to the first bound.
            _ => Self::single(parts[0]),
        }
    }
}

impl FromStr for PortRange {
    type Err = MacroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PortRange::resolve(s))
    }
}

impl Display for PortRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.from == self.to {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{}-{}", self.from, self.to)
        }
    }
}
