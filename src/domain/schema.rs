//! Typed parsing of untyped JSON payloads.
//!
//! Every payload that reaches a store goes through [`Schema::parse`]. Parsing
//! either yields the typed record, with optional fields normalized to `""`, or
//! a [`ValidationErrors`] listing every failing field together with the rule it
//! broke. Parsing never stops at the first problem.
//!
//! The serialized error mirrors what the admin UI already understands:
//!
//! ```json
//! { "formErrors": [], "fieldErrors": { "heroTitle": ["String must contain at least 3 character(s)"] } }
//! ```

use crate::utils::validation::is_valid_email;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required,
    ExpectedString,
    ExpectedArray,
    ExpectedObject,
    MinLength(usize),
    Email,
    InvalidTimestamp,
    InvalidJson(String),
}

impl Rule {
    pub fn message(&self) -> String {
        match self {
            Rule::Required => "Required".to_string(),
            Rule::ExpectedString => "Expected string".to_string(),
            Rule::ExpectedArray => "Expected array".to_string(),
            Rule::ExpectedObject => "Expected object".to_string(),
            Rule::MinLength(min) => format!("String must contain at least {} character(s)", min),
            Rule::Email => "Invalid email".to_string(),
            Rule::InvalidTimestamp => "Invalid ISO-8601 timestamp".to_string(),
            Rule::InvalidJson(reason) => format!("Invalid JSON body: {}", reason),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.message())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    form_errors: Vec<Rule>,
    field_errors: BTreeMap<String, Vec<Rule>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(rule: Rule) -> Self {
        let mut errors = Self::new();
        errors.push_form(rule);
        errors
    }

    pub fn push_form(&mut self, rule: Rule) {
        self.form_errors.push(rule);
    }

    pub fn push_field(&mut self, path: impl Into<String>, rule: Rule) {
        self.field_errors.entry(path.into()).or_default().push(rule);
    }

    pub fn is_empty(&self) -> bool {
        self.form_errors.is_empty() && self.field_errors.is_empty()
    }

    pub fn form_errors(&self) -> &[Rule] {
        &self.form_errors
    }

    pub fn has_field(&self, path: &str) -> bool {
        self.field_errors.contains_key(path)
    }

    pub fn rules_for(&self, path: &str) -> &[Rule] {
        self.field_errors
            .get(path)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.field_errors.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.form_errors.iter().map(Rule::message).collect();
        for (path, rules) in &self.field_errors {
            for rule in rules {
                parts.push(format!("{}: {}", path, rule));
            }
        }
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub trait Schema: Sized {
    fn parse(value: &Value) -> Result<Self, ValidationErrors>;
}

/// Parses a top-level object with `build`, collecting every field error.
pub fn parse_object<T>(
    value: &Value,
    build: impl FnOnce(&mut Fields<'_>) -> T,
) -> Result<T, ValidationErrors> {
    let Value::Object(object) = value else {
        return Err(ValidationErrors::form(Rule::ExpectedObject));
    };

    let mut errors = ValidationErrors::new();
    let parsed = {
        let mut fields = Fields {
            object,
            prefix: String::new(),
            errors: &mut errors,
        };
        build(&mut fields)
    };

    if errors.is_empty() {
        Ok(parsed)
    } else {
        Err(errors)
    }
}

/// Cursor over one JSON object. Each accessor records its own violations and
/// returns a placeholder so that parsing can continue to the next field.
pub struct Fields<'a> {
    object: &'a Map<String, Value>,
    prefix: String,
    errors: &'a mut ValidationErrors,
}

impl<'a> Fields<'a> {
    fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.prefix, key)
        }
    }

    fn raw_string(&mut self, key: &str) -> Option<&'a str> {
        let object = self.object;
        match object.get(key) {
            None => {
                let path = self.path(key);
                self.errors.push_field(path, Rule::Required);
                None
            }
            Some(Value::String(s)) => Some(s.as_str()),
            Some(_) => {
                let path = self.path(key);
                self.errors.push_field(path, Rule::ExpectedString);
                None
            }
        }
    }

    /// Required string with at least `min` UTF-16 code units, the length a
    /// browser reports for the same text.
    pub fn string(&mut self, key: &str, min: usize) -> String {
        let Some(value) = self.raw_string(key) else {
            return String::new();
        };
        if value.encode_utf16().count() < min {
            let path = self.path(key);
            self.errors.push_field(path, Rule::MinLength(min));
        }
        value.to_string()
    }

    pub fn email(&mut self, key: &str) -> String {
        let Some(value) = self.raw_string(key) else {
            return String::new();
        };
        if !is_valid_email(value) {
            let path = self.path(key);
            self.errors.push_field(path, Rule::Email);
        }
        value.to_string()
    }

    /// RFC 3339 timestamp, normalized to UTC.
    pub fn timestamp(&mut self, key: &str) -> DateTime<Utc> {
        let Some(value) = self.raw_string(key) else {
            return DateTime::<Utc>::default();
        };
        match DateTime::parse_from_rfc3339(value) {
            Ok(parsed) => parsed.with_timezone(&Utc),
            Err(_) => {
                let path = self.path(key);
                self.errors.push_field(path, Rule::InvalidTimestamp);
                DateTime::<Utc>::default()
            }
        }
    }

    /// Absent means `""`. A present value must still be a string.
    pub fn optional_string(&mut self, key: &str) -> String {
        let object = self.object;
        match object.get(key) {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                let path = self.path(key);
                self.errors.push_field(path, Rule::ExpectedString);
                String::new()
            }
        }
    }

    /// Required array of objects, each parsed with `item`. Item errors are
    /// reported under `key.index.field`.
    pub fn list<T>(&mut self, key: &str, mut item: impl FnMut(&mut Fields<'_>) -> T) -> Vec<T> {
        let object = self.object;
        let entries = match object.get(key) {
            None => {
                let path = self.path(key);
                self.errors.push_field(path, Rule::Required);
                return Vec::new();
            }
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                let path = self.path(key);
                self.errors.push_field(path, Rule::ExpectedArray);
                return Vec::new();
            }
        };

        let mut parsed = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let entry_path = format!("{}.{}", self.path(key), index);
            let Value::Object(object) = entry else {
                self.errors.push_field(entry_path, Rule::ExpectedObject);
                continue;
            };
            let mut nested = Fields {
                object,
                prefix: entry_path,
                errors: &mut *self.errors,
            };
            parsed.push(item(&mut nested));
        }
        parsed
    }
}
