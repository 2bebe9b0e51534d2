use serde_json::Value;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use crate::config::ExpanderConfig;
use crate::error::MacroError;
use crate::logical_id::is_valid_logical_id;
use crate::synth;
use crate::types::{
    Direction, Fragment, MacroRequest, MacroResponse, PROPERTIES, RuleRow, condition, properties,
    resource_type,
};

/// Property listing the subnets to associate with the ACL.
pub const ASSOCIATION: &str = "Association";

/// Expands compact network ACL rules in a template fragment into standalone
/// entry and association resources.
#[derive(Debug, Clone, Default)]
pub struct NaclExpander {
    config: ExpanderConfig,
}

/// Resources synthesized for one ACL, plus the parent properties they replace.
#[derive(Debug, Default)]
struct AclExpansion {
    resources: Vec<(String, Value)>,
    consumed: Vec<&'static str>,
}

impl NaclExpander {
    pub fn new(config: ExpanderConfig) -> Self {
        NaclExpander { config }
    }

    pub fn config(&self) -> &ExpanderConfig {
        &self.config
    }

    /// Handle one macro invocation. The request id is echoed back and the
    /// status is always `success`; errors propagate to the caller, which can
    /// turn them into [`MacroResponse::failure`].
    pub fn handle(&self, request: MacroRequest) -> Result<MacroResponse, MacroError> {
        debug!(
            event = "Request",
            phase = "Received",
            request_id = request.request_id,
            region = request.region.as_deref().unwrap_or_default()
        );
        let fragment = self.expand(&request.fragment)?;
        Ok(MacroResponse::success(request.request_id, fragment))
    }

    /// Expand every ACL resource in `fragment`, returning the rewritten copy.
    ///
    /// The input is never modified. Any malformed rule fails the whole call.
    pub fn expand(&self, fragment: &Fragment) -> Result<Fragment, MacroError> {
        let mut output = fragment.clone();
        let mut synthesized = 0usize;

        for (name, resource) in fragment.resources()? {
            if !resource.is_object() {
                return Err(MacroError::InvalidFormat(format!(
                    "resource '{name}' is not a mapping"
                )));
            }
            if resource_type(resource) != Some(self.config.acl_type()) {
                continue;
            }

            let expansion = self.expand_acl(name, resource)?;
            if expansion.consumed.is_empty() {
                continue;
            }
            debug!(
                event = "Expand",
                phase = "Acl",
                resource = name,
                consumed = expansion.consumed.join(","),
                synthesized = expansion.resources.len()
            );

            let resources = output.resources_mut()?;
            if let Some(Value::Object(parent)) = resources
                .get_mut(name.as_str())
                .and_then(|parent| parent.get_mut(PROPERTIES))
            {
                for key in &expansion.consumed {
                    parent.shift_remove(*key);
                }
            }

            synthesized += expansion.resources.len();
            for (id, body) in expansion.resources {
                if !is_valid_logical_id(&id) {
                    warn!(
                        event = "Expand",
                        phase = "Name",
                        resource = id,
                        "synthesized name is not a valid logical ID"
                    );
                }
                if resources.insert(id.clone(), body).is_some() {
                    warn!(
                        event = "Expand",
                        phase = "Collision",
                        resource = id,
                        "synthesized resource replaced an existing one"
                    );
                }
            }
        }

        info!(event = "Expand", phase = "Done", synthesized = synthesized);
        Ok(output)
    }

    fn expand_acl(&self, name: &str, resource: &Value) -> Result<AclExpansion, MacroError> {
        let mut expansion = AclExpansion::default();
        let Some(props) = properties(name, resource)? else {
            return Ok(expansion);
        };
        let guard = condition(resource);

        for direction in Direction::iter() {
            let Some(rows) = props.get(direction.property()) else {
                continue;
            };
            for row in sequence(name, direction.property(), rows)? {
                let text = row.as_str().ok_or_else(|| {
                    MacroError::InvalidFormat(format!(
                        "{direction} rule of resource '{name}' is not a string"
                    ))
                })?;
                let rule = RuleRow::parse_with_quote(text, self.config.quote())?;
                let (id, body) = synth::rule_entry(&self.config, name, direction, &rule, guard)?;
                debug!(
                    event = "Expand",
                    phase = "Entry",
                    resource = id,
                    rule = rule.to_string()
                );
                expansion.resources.push((id, body));
            }
            expansion.consumed.push(direction.property());
        }

        if let Some(subnets) = props.get(ASSOCIATION) {
            for subnet in sequence(name, ASSOCIATION, subnets)? {
                let subnet = subnet.as_str().ok_or_else(|| {
                    MacroError::InvalidFormat(format!(
                        "Association of resource '{name}' lists a non-string subnet"
                    ))
                })?;
                let (id, body) = synth::association(&self.config, name, subnet, guard);
                debug!(
                    event = "Expand",
                    phase = "Association",
                    resource = id,
                    subnet = subnet
                );
                expansion.resources.push((id, body));
            }
            expansion.consumed.push(ASSOCIATION);
        }

        Ok(expansion)
    }
}

fn sequence<'a>(name: &str, property: &str, value: &'a Value) -> Result<&'a Vec<Value>, MacroError> {
    value.as_array().ok_or_else(|| {
        MacroError::InvalidFormat(format!(
            "{property} of resource '{name}' is not a list"
        ))
    })
}

#[cfg(test)]
mod tests;
