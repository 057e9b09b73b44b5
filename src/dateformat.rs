use crate::error::{CalculatorError, CalculatorResult};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Format-role name to pattern-string map.
///
/// Roles are looked up by the exact key the bundle carried them under
/// (`vacation-format` and friends).
#[derive(Debug, Clone, Default)]
pub struct DateFormatMap {
    patterns: HashMap<String, String>,
}

impl DateFormatMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: impl Into<String>, pattern: impl Into<String>) {
        self.patterns.insert(role.into(), pattern.into());
    }

    /// Resolve the pattern for a format role.
    pub fn resolve(&self, role: &str) -> CalculatorResult<&str> {
        self.patterns
            .get(role)
            .map(String::as_str)
            .ok_or_else(|| CalculatorError::MissingFormat(role.to_string()))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Translate a bundle date pattern (`yyyy-MM-dd` family) into a chrono
/// format string. Alphabetic runs become directives, everything else is a
/// literal; an unrecognized run is a configuration error.
pub fn to_chrono_format(pattern: &str) -> CalculatorResult<String> {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if !c.is_ascii_alphabetic() {
            if c == '%' {
                out.push_str("%%");
            } else {
                out.push(c);
            }
            continue;
        }
        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        let directive = match (c, run) {
            ('y', 4) => "%Y",
            ('y', 2) => "%y",
            ('M', 2) => "%m",
            ('M', 1) => "%-m",
            ('d', 2) => "%d",
            ('d', 1) => "%-d",
            _ => {
                return Err(CalculatorError::InvalidConfig(format!(
                    "unsupported token '{}' in date pattern '{pattern}'",
                    c.to_string().repeat(run)
                )));
            }
        };
        out.push_str(directive);
    }
    Ok(out)
}

/// Parse a raw date string against a bundle pattern.
pub fn parse_date(value: &str, pattern: &str) -> CalculatorResult<NaiveDate> {
    let format = to_chrono_format(pattern)?;
    NaiveDate::parse_from_str(value, &format).map_err(|_| CalculatorError::DateFormat {
        value: value.to_string(),
        pattern: pattern.to_string(),
    })
}
