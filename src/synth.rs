//! Synthesis of `NetworkAclEntry` and `SubnetNetworkAclAssociation` resources.

use serde_json::{Map, Value};

use crate::config::ExpanderConfig;
use crate::error::MacroError;
use crate::types::{
    ALL, Address, CONDITION, Direction, PROPERTIES, PortRange, RuleRow, TYPE, reference,
};

/// Name of the entry synthesized for `rule_number` on `parent`, e.g.
/// `NaclPublicInbound100`.
pub fn entry_name(parent: &str, direction: Direction, rule_number: &str) -> String {
    format!("{parent}{direction}{rule_number}")
}

/// Name of the association between `subnet` and `parent`, e.g. `SubnetANaclPublic`.
pub fn association_name(subnet: &str, parent: &str) -> String {
    format!("{subnet}{parent}")
}

/// Build the entry resource for one rule row of `parent`.
///
/// `PortRange` is omitted only when the protocol is the all-protocols
/// sentinel; an all-ports rule on a specific protocol keeps `-1`/`-1`.
pub fn rule_entry(
    config: &ExpanderConfig,
    parent: &str,
    direction: Direction,
    rule: &RuleRow,
    condition: Option<&Value>,
) -> Result<(String, Value), MacroError> {
    let address = Address::classify(&rule.address)?;

    let mut properties = Map::new();
    properties.insert("Egress".to_string(), Value::Bool(direction.is_egress()));
    properties.insert("NetworkAclId".to_string(), reference(parent));
    properties.insert("Protocol".to_string(), Value::String(rule.protocol.clone()));
    properties.insert("RuleAction".to_string(), Value::String(rule.action.clone()));
    properties.insert(
        "RuleNumber".to_string(),
        Value::String(rule.rule_number.clone()),
    );
    properties.insert(address.property_key().to_string(), address.into_value());
    if rule.protocol != ALL {
        let ports = PortRange::resolve(&rule.port_spec);
        properties.insert(
            "PortRange".to_string(),
            serde_json::to_value(ports).map_err(|e| MacroError::InvalidFormat(e.to_string()))?,
        );
    }

    let name = entry_name(parent, direction, &rule.rule_number);
    Ok((
        name,
        resource_body(config.entry_type(), condition, properties),
    ))
}

/// Build the association resource linking `subnet` to `parent`.
pub fn association(
    config: &ExpanderConfig,
    parent: &str,
    subnet: &str,
    condition: Option<&Value>,
) -> (String, Value) {
    let mut properties = Map::new();
    properties.insert("SubnetId".to_string(), reference(subnet));
    properties.insert("NetworkAclId".to_string(), reference(parent));

    (
        association_name(subnet, parent),
        resource_body(config.association_type(), condition, properties),
    )
}

fn resource_body(kind: &str, condition: Option<&Value>, properties: Map<String, Value>) -> Value {
    let mut body = Map::new();
    body.insert(TYPE.to_string(), Value::String(kind.to_string()));
    if let Some(condition) = condition {
        body.insert(CONDITION.to_string(), condition.clone());
    }
    body.insert(PROPERTIES.to_string(), Value::Object(properties));
    Value::Object(body)
}
