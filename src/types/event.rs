//! Macro invocation envelope.
//!
//! CloudFormation hands a macro a request and expects a response echoing the
//! `requestId`. Unknown request fields (`accountId`, `params`, ...) are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::error::MacroError;

use super::fragment::Fragment;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MacroRequest {
    pub request_id: String,
    pub fragment: Fragment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_parameter_values: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MacroStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MacroResponse {
    pub request_id: String,
    pub status: MacroStatus,
    pub fragment: Option<Fragment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl MacroResponse {
    pub fn success(request_id: impl Into<String>, fragment: Fragment) -> Self {
        Self {
            request_id: request_id.into(),
            status: MacroStatus::Success,
            fragment: Some(fragment),
            error_message: None,
        }
    }

    /// Failure envelope for an expansion error. No fragment is returned, so
    /// a partially expanded template can never reach CloudFormation.
    pub fn failure(request_id: impl Into<String>, error: &MacroError) -> Self {
        Self {
            request_id: request_id.into(),
            status: MacroStatus::Failure,
            fragment: None,
            error_message: Some(error.to_string()),
        }
    }
}
