//! Rule-specific parameters given as `name=value` pairs
//!
//! Values are typed on parse: integer if possible, else float, else text.
//! Lookups fall back to the rule's default when a key is absent; keys a rule
//! does not read are ignored.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::io::error::{GenerationError, Result, invalid_parameter, malformed};

/// A single parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    /// Integer literal
    Int(i64),
    /// Floating point literal
    Float(f64),
    /// Anything else
    Text(String),
}

impl ParameterValue {
    /// Type a raw value: integer, then float, then text
    pub fn parse(raw: &str) -> Self {
        raw.parse::<i64>().map_or_else(
            |_| {
                raw.parse::<f64>()
                    .map_or_else(|_| Self::Text(raw.to_string()), Self::Float)
            },
            Self::Int,
        )
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Mapping from parameter name to value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleParameters {
    values: BTreeMap<String, ParameterValue>,
}

impl RuleParameters {
    /// Empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value
    #[must_use]
    pub fn with(mut self, name: &str, value: ParameterValue) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }

    /// Raw value of a parameter
    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values.get(name)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameter was given
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Non-negative integer parameter
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an integer or is negative
    pub fn count(&self, name: &'static str, default: usize) -> Result<usize> {
        match self.get(name) {
            None => Ok(default),
            Some(ParameterValue::Int(value)) => usize::try_from(*value)
                .map_err(|e| invalid_parameter(name, value, &format!("must not be negative: {e}"))),
            Some(other) => Err(invalid_parameter(name, other, &"must be an integer")),
        }
    }

    /// Numeric parameter; integers are widened
    ///
    /// # Errors
    ///
    /// Returns an error if the value is text
    pub fn number(&self, name: &'static str, default: f64) -> Result<f64> {
        match self.get(name) {
            None => Ok(default),
            Some(ParameterValue::Int(value)) => Ok(*value as f64),
            Some(ParameterValue::Float(value)) => Ok(*value),
            Some(other @ ParameterValue::Text(_)) => {
                Err(invalid_parameter(name, other, &"must be a number"))
            }
        }
    }

    /// Text parameter; numbers are rendered back to text
    pub fn text(&self, name: &str, default: &str) -> String {
        self.get(name)
            .map_or_else(|| default.to_string(), ToString::to_string)
    }
}

/// Parses `"p=8,l=0.1,mode=rectangle"`; the empty string gives no parameters
impl FromStr for RuleParameters {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parameters = Self::new();
        if s.trim().is_empty() {
            return Ok(parameters);
        }

        for entry in s.split(',') {
            let Some((name, value)) = entry.split_once('=') else {
                return Err(malformed(s, &format!("'{entry}' is not of the form name=value")));
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(malformed(s, &format!("'{entry}' has an empty name")));
            }
            parameters
                .values
                .insert(name.to_string(), ParameterValue::parse(value.trim()));
        }

        Ok(parameters)
    }
}
