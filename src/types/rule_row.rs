//! Compact rule rows.
//!
//! A row is five comma separated fields:
//! `<RuleNumber>,<Protocol>,<Action>,<Address>,<PortSpec>`.
//! A field wrapped in the quote character (a single quote by default) may
//! contain commas, which is how embedded expressions such as
//! `'{"Fn::GetAtt": ["VPC", "CidrBlock"]}'` are written. Quotes are stripped
//! from the field value; a doubled quote inside a quoted field stands for one
//! literal quote.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use csv::ReaderBuilder;
use itertools::Itertools;

use crate::error::MacroError;

/// Number of positional fields in a rule row.
pub const RULE_FIELDS: usize = 5;

/// Quote character used unless configured otherwise.
pub const DEFAULT_QUOTE: u8 = b'\'';

/// One tokenized rule row. All fields are kept as raw text; meaning is
/// assigned later by the address classifier and the port range resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleRow {
    pub rule_number: String,
    pub protocol: String,
    pub action: String,
    pub address: String,
    pub port_spec: String,
}

impl RuleRow {
    /// Tokenize `row` with the default single-quote dialect.
    pub fn parse(row: &str) -> Result<Self, MacroError> {
        Self::parse_with_quote(row, DEFAULT_QUOTE)
    }

    /// Tokenize `row`, treating `quote` as the field quote character.
    ///
    /// Fails if the row is empty, reads as more than one record, or does not
    /// have exactly [`RULE_FIELDS`] fields.
    pub fn parse_with_quote(row: &str, quote: u8) -> Result<Self, MacroError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quote(quote)
            .from_reader(row.as_bytes());

        let mut records = reader.records();
        let record = records
            .next()
            .ok_or_else(|| MacroError::RuleParseError("empty rule row".to_string()))??;

        if records.next().is_some() {
            return Err(MacroError::RuleParseError(format!(
                "rule '{row}' spans more than one line"
            )));
        }

        let found = record.len();
        let field_count_error = || MacroError::FieldCount {
            row: row.to_string(),
            expected: RULE_FIELDS,
            found,
        };
        if found != RULE_FIELDS {
            return Err(field_count_error());
        }

        let (rule_number, protocol, action, address, port_spec) = record
            .iter()
            .map(str::to_string)
            .collect_tuple()
            .ok_or_else(field_count_error)?;

        Ok(RuleRow {
            rule_number,
            protocol,
            action,
            address,
            port_spec,
        })
    }
}

impl FromStr for RuleRow {
    type Err = MacroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleRow::parse(s)
    }
}

/// Renders the row back in compact form, quoting the address when it holds a comma.
impl Display for RuleRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let address = if self.address.contains(',') {
            format!("'{}'", self.address.replace('\'', "''"))
        } else {
            self.address.clone()
        };
        write!(
            f,
            "{},{},{},{},{}",
            self.rule_number, self.protocol, self.action, address, self.port_spec
        )
    }
}
