//! Template fragments.
//!
//! A fragment is kept as a `serde_json::Value` so that anything the expander
//! does not understand (intrinsic functions, unknown properties, `Outputs`,
//! `Conditions`) passes through untouched and in its original order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use utoipa::ToSchema;

use crate::error::MacroError;

pub const RESOURCES: &str = "Resources";
pub const TYPE: &str = "Type";
pub const CONDITION: &str = "Condition";
pub const PROPERTIES: &str = "Properties";

/// A CloudFormation template fragment as handed to a macro. Serializes as
/// the bare JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Fragment(Value);

impl Fragment {
    pub fn new(value: Value) -> Self {
        Fragment(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// The `Resources` mapping.
    pub fn resources(&self) -> Result<&Map<String, Value>, MacroError> {
        self.0
            .get(RESOURCES)
            .and_then(Value::as_object)
            .ok_or_else(missing_resources)
    }

    pub(crate) fn resources_mut(&mut self) -> Result<&mut Map<String, Value>, MacroError> {
        self.0
            .get_mut(RESOURCES)
            .and_then(Value::as_object_mut)
            .ok_or_else(missing_resources)
    }

    pub fn resource(&self, name: &str) -> Option<&Value> {
        self.0.get(RESOURCES).and_then(|resources| resources.get(name))
    }
}

impl From<Value> for Fragment {
    fn from(value: Value) -> Self {
        Fragment(value)
    }
}

fn missing_resources() -> MacroError {
    MacroError::InvalidFormat("fragment has no Resources mapping".to_string())
}

/// Declared `Type` of a resource, if any.
pub fn resource_type(resource: &Value) -> Option<&str> {
    resource.get(TYPE).and_then(Value::as_str)
}

/// The resource's `Condition`, unless absent, null or an empty string.
pub fn condition(resource: &Value) -> Option<&Value> {
    match resource.get(CONDITION) {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) if name.is_empty() => None,
        Some(value) => Some(value),
    }
}

/// The resource's `Properties` mapping. A missing block reads as `None`; a
/// block that is not a mapping is an error.
pub fn properties<'a>(
    name: &str,
    resource: &'a Value,
) -> Result<Option<&'a Map<String, Value>>, MacroError> {
    match resource.get(PROPERTIES) {
        None => Ok(None),
        Some(Value::Object(properties)) => Ok(Some(properties)),
        Some(_) => Err(MacroError::InvalidFormat(format!(
            "Properties of resource '{name}' is not a mapping"
        ))),
    }
}

/// A `{"Ref": name}` expression.
pub fn reference(name: &str) -> Value {
    json!({ "Ref": name })
}
