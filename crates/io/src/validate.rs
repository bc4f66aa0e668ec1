//! Accumulated header validation.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus the header checks run before
//! any data row is converted.

use std::collections::HashSet;

use crate::arff::Header;
use crate::error::IoError;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
///
/// Create a collector, push zero or more error messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or a
/// single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Checks the header and resolves the class attribute's position.
///
/// With `class_attribute == None` the last declared attribute is the class.
pub(crate) fn validate_header(
    header: &Header,
    class_attribute: Option<&str>,
) -> Result<usize, IoError> {
    let mut c = ValidationCollector::new();

    if !header.has_data {
        c.push("no @data section");
    }
    if header.attributes.is_empty() {
        c.push("no attributes declared");
    } else if header.attributes.len() == 1 {
        c.push("no feature attributes besides the class");
    }

    let mut seen = HashSet::new();
    for attr in &header.attributes {
        if !seen.insert(attr.name.as_str()) {
            c.push(format!("attribute '{}' declared more than once", attr.name));
        }
    }

    let class_index = match class_attribute {
        Some(name) => {
            let found = header.attributes.iter().position(|a| a.name == name);
            if found.is_none() {
                c.push(format!("class attribute '{name}' not declared"));
            }
            found
        }
        None => header.attributes.len().checked_sub(1),
    };

    c.finish()?;
    class_index.ok_or_else(|| IoError::Validation {
        count: 1,
        details: "no class attribute".to_string(),
    })
}
