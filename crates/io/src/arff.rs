//! Line-level ARFF syntax: header declarations and raw data rows.
//!
//! This module only splits the text into attributes and string values.
//! Turning values into feature vectors and labels happens in `reader.rs`.

use crate::error::IoError;

/// Declared type of an attribute.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AttributeKind {
    /// `numeric`, `real` or `integer`.
    Numeric,
    /// `{a, b, c}`; values in declaration order.
    Nominal(Vec<String>),
}

/// One `@attribute` declaration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Attribute {
    pub(crate) name: String,
    pub(crate) kind: AttributeKind,
}

/// Everything declared before the first data row.
#[derive(Debug, Clone, Default)]
pub(crate) struct Header {
    pub(crate) relation: Option<String>,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) has_data: bool,
}

/// A data row split into raw values.
#[derive(Debug, Clone)]
pub(crate) struct Row {
    /// 1-based line number, for error messages.
    pub(crate) line: usize,
    pub(crate) values: Vec<String>,
}

/// Splits ARFF text into its header and data rows.
pub(crate) fn parse(text: &str) -> Result<(Header, Vec<Row>), IoError> {
    let mut header = Header::default();
    let mut rows = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }

        if trimmed.starts_with('@') {
            let (keyword, rest) = split_keyword(trimmed);
            match keyword.to_ascii_lowercase().as_str() {
                "@relation" if !header.has_data => {
                    header.relation = Some(unquote(rest));
                }
                "@attribute" if !header.has_data => {
                    header.attributes.push(parse_attribute(rest, line)?);
                }
                "@data" if !header.has_data => header.has_data = true,
                "@end" => {
                    return Err(IoError::Unsupported {
                        line,
                        feature: "relational attributes".to_string(),
                    });
                }
                other => {
                    return Err(IoError::Parse {
                        line,
                        reason: format!("unexpected declaration '{other}'"),
                    });
                }
            }
            continue;
        }

        if !header.has_data {
            return Err(IoError::Parse {
                line,
                reason: "data row before @data".to_string(),
            });
        }
        if trimmed.starts_with('{') {
            return Err(IoError::Unsupported {
                line,
                feature: "sparse data rows".to_string(),
            });
        }
        rows.push(Row {
            line,
            values: split_values(trimmed, line)?,
        });
    }

    Ok((header, rows))
}

/// Splits `@keyword rest` at the first whitespace.
fn split_keyword(line: &str) -> (&str, &str) {
    match line.find(char::is_whitespace) {
        Some(pos) => (&line[..pos], line[pos..].trim()),
        None => (line, ""),
    }
}

fn parse_attribute(rest: &str, line: usize) -> Result<Attribute, IoError> {
    let (name, type_spec) = split_name(rest, line)?;
    if name.is_empty() || type_spec.is_empty() {
        return Err(IoError::Parse {
            line,
            reason: "expected '@attribute <name> <type>'".to_string(),
        });
    }

    let kind = if let Some(inner) = type_spec.strip_prefix('{') {
        let inner = inner.strip_suffix('}').ok_or_else(|| IoError::Parse {
            line,
            reason: format!("unterminated nominal list for attribute '{name}'"),
        })?;
        let values = split_values(inner, line)?;
        if values.iter().all(String::is_empty) {
            return Err(IoError::Parse {
                line,
                reason: format!("empty nominal list for attribute '{name}'"),
            });
        }
        AttributeKind::Nominal(values)
    } else {
        let lower = type_spec.to_ascii_lowercase();
        match lower.split_whitespace().next().unwrap_or_default() {
            "numeric" | "real" | "integer" => AttributeKind::Numeric,
            other @ ("string" | "date" | "relational") => {
                return Err(IoError::Unsupported {
                    line,
                    feature: format!("{other} attribute '{name}'"),
                });
            }
            other => {
                return Err(IoError::Parse {
                    line,
                    reason: format!("unknown type '{other}' for attribute '{name}'"),
                });
            }
        }
    };

    Ok(Attribute { name, kind })
}

/// Reads a possibly quoted attribute name, returning it and the remainder.
fn split_name(rest: &str, line: usize) -> Result<(String, &str), IoError> {
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, q @ ('\'' | '"'))) => {
            let end = chars
                .find(|&(_, c)| c == q)
                .map(|(pos, _)| pos)
                .ok_or_else(|| IoError::Parse {
                    line,
                    reason: "unterminated quoted attribute name".to_string(),
                })?;
            Ok((rest[1..end].to_string(), rest[end + 1..].trim()))
        }
        Some(_) => {
            let (name, type_spec) = split_keyword(rest);
            Ok((name.to_string(), type_spec))
        }
        None => Ok((String::new(), "")),
    }
}

/// Strips one level of matching single or double quotes.
fn unquote(s: &str) -> String {
    let s = s.trim();
    for q in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return s[1..s.len() - 1].to_string();
        }
    }
    s.to_string()
}

/// Splits a comma-separated list, honouring single and double quotes.
///
/// Unquoted values are trimmed; quoted values keep their inner whitespace
/// and may contain commas or backslash-escaped characters.
pub(crate) fn split_values(s: &str, line: usize) -> Result<Vec<String>, IoError> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut quoted = false;
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        match quote {
            Some(q) => {
                if ch == '\\' {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                } else if ch == q {
                    quote = None;
                } else {
                    current.push(ch);
                }
            }
            None => match ch {
                ',' => {
                    values.push(take_token(&mut current, quoted));
                    quoted = false;
                }
                '\'' | '"' if !quoted && current.trim().is_empty() => {
                    current.clear();
                    quote = Some(ch);
                    quoted = true;
                }
                c if quoted && c.is_whitespace() => {}
                c => current.push(c),
            },
        }
    }

    if quote.is_some() {
        return Err(IoError::Parse {
            line,
            reason: "unterminated quote".to_string(),
        });
    }
    values.push(take_token(&mut current, quoted));
    Ok(values)
}

fn take_token(current: &mut String, quoted: bool) -> String {
    let token = if quoted {
        current.clone()
    } else {
        current.trim().to_string()
    };
    current.clear();
    token
}
