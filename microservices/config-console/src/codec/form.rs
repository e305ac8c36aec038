//! Flat form representation

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

pub type CodecResult<T> = Result<T, CodecError>;

/// Codec errors
#[derive(Debug, Error)]
pub enum CodecError {
    /// A bound value was neither a string nor an array of strings. This is
    /// a contract violation by the form layer, not a user error.
    #[error("form field `{field}` is neither a string nor an array of strings")]
    AmbiguousShape { field: String },
}

/// A bound form value: one row submitted (`One`) or several (`Many`).
///
/// The distinction is structural, not name-based; downstream code calls
/// [`FormValue::values`] and only ever sees a sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    One(String),
    Many(Vec<String>),
}

impl FormValue {
    /// Whether the field arrived as a repeated group
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    /// Normalized view: a scalar is a one-element sequence
    pub fn values(&self) -> &[String] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    /// First bound value, empty for an empty repeated group
    pub fn first(&self) -> &str {
        self.values().first().map(String::as_str).unwrap_or("")
    }
}

/// Flat mapping from dotted field name to bound value
#[derive(Debug, Clone, Default)]
pub struct FormMap {
    fields: HashMap<String, FormValue>,
}

const NO_VALUES: &[String] = &[];

impl FormMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value. A second bind for the same field upgrades the scalar
    /// to an array, which is exactly how repeated form inputs arrive.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        match self.fields.remove(&field) {
            None => {
                self.fields.insert(field, FormValue::One(value));
            }
            Some(FormValue::One(existing)) => {
                self.fields.insert(field, FormValue::Many(vec![existing, value]));
            }
            Some(FormValue::Many(mut values)) => {
                values.push(value);
                self.fields.insert(field, FormValue::Many(values));
            }
        }
    }

    /// Build from urlencoded key/value pairs in submission order
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut form = Self::new();
        for (field, value) in pairs {
            form.insert(field, value);
        }
        form
    }

    /// Build from a JSON document of `string | [string]` bindings.
    ///
    /// Any other value shape is an [`CodecError::AmbiguousShape`] contract
    /// error.
    pub fn from_json(document: &Value) -> CodecResult<Self> {
        let object = document.as_object().ok_or_else(|| CodecError::AmbiguousShape {
            field: "(root)".to_string(),
        })?;

        let mut form = Self::new();
        for (field, bound) in object {
            match bound {
                Value::String(value) => {
                    form.fields
                        .insert(field.clone(), FormValue::One(value.clone()));
                }
                Value::Array(items) => {
                    let mut values = Vec::with_capacity(items.len());
                    for item in items {
                        let value = item.as_str().ok_or_else(|| CodecError::AmbiguousShape {
                            field: field.clone(),
                        })?;
                        values.push(value.to_string());
                    }
                    form.fields.insert(field.clone(), FormValue::Many(values));
                }
                _ => {
                    return Err(CodecError::AmbiguousShape {
                        field: field.clone(),
                    })
                }
            }
        }
        Ok(form)
    }

    pub fn get(&self, field: &str) -> Option<&FormValue> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Whether any bound field starts with the given dotted prefix
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.fields.keys().any(|field| field.starts_with(prefix))
    }

    /// First value of a field, empty when unbound
    pub fn scalar(&self, field: &str) -> &str {
        self.get(field).map(FormValue::first).unwrap_or("")
    }

    /// Normalized sequence view of a field, empty when unbound
    pub fn values(&self, field: &str) -> &[String] {
        self.get(field).map(FormValue::values).unwrap_or(NO_VALUES)
    }

    /// Value at `index` within a field's sequence, empty when out of range
    pub fn slot(&self, field: &str, index: usize) -> &str {
        self.values(field)
            .get(index)
            .map(String::as_str)
            .unwrap_or("")
    }
}
