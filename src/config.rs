//! Expander configuration.

use crate::types::{DEFAULT_QUOTE, ResourceKind};

/// Resource type tags and tokenizer dialect used by the expander.
///
/// The default matches CloudFormation's EC2 types and single-quoted rule rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpanderConfig {
    acl_type: String,
    entry_type: String,
    association_type: String,
    quote: u8,
}

impl Default for ExpanderConfig {
    fn default() -> Self {
        Self {
            acl_type: ResourceKind::NetworkAcl.to_string(),
            entry_type: ResourceKind::NetworkAclEntry.to_string(),
            association_type: ResourceKind::SubnetNetworkAclAssociation.to_string(),
            quote: DEFAULT_QUOTE,
        }
    }
}

impl ExpanderConfig {
    pub fn builder() -> ExpanderConfigBuilder {
        ExpanderConfigBuilder::default()
    }

    /// Type of resources whose rule rows get expanded.
    pub fn acl_type(&self) -> &str {
        &self.acl_type
    }

    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    pub fn association_type(&self) -> &str {
        &self.association_type
    }

    pub fn quote(&self) -> u8 {
        self.quote
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExpanderConfigBuilder {
    config: ExpanderConfig,
}

impl ExpanderConfigBuilder {
    pub fn acl_type(mut self, acl_type: impl Into<String>) -> Self {
        self.config.acl_type = acl_type.into();
        self
    }

    pub fn entry_type(mut self, entry_type: impl Into<String>) -> Self {
        self.config.entry_type = entry_type.into();
        self
    }

    pub fn association_type(mut self, association_type: impl Into<String>) -> Self {
        self.config.association_type = association_type.into();
        self
    }

    pub fn quote(mut self, quote: u8) -> Self {
        self.config.quote = quote;
        self
    }

    pub fn build(self) -> ExpanderConfig {
        self.config
    }
}
