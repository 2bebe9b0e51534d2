//! CloudFormation resource type tags consumed and produced by the expander.

use strum_macros::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
pub enum ResourceKind {
    /// The expandable parent carrying `Inbound`/`Outbound`/`Association`.
    #[strum(serialize = "AWS::EC2::NetworkAcl")]
    NetworkAcl,
    #[strum(serialize = "AWS::EC2::NetworkAclEntry")]
    NetworkAclEntry,
    #[strum(serialize = "AWS::EC2::SubnetNetworkAclAssociation")]
    SubnetNetworkAclAssociation,
}
