use once_cell::sync::Lazy;
use regex::Regex;

/// CloudFormation logical IDs are alphanumeric.
static LOGICAL_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("logical id pattern compiles"));

/// Upper bound on logical ID length.
pub const MAX_LOGICAL_ID_LEN: usize = 255;

/// Whether `name` can be used as a logical ID in a template.
pub fn is_valid_logical_id(name: &str) -> bool {
    name.len() <= MAX_LOGICAL_ID_LEN && LOGICAL_ID.is_match(name)
}
