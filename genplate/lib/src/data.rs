//! Template data loading.
//!
//! Data comes from one of two places:
//!
//! - a JSON document (a file path, or `-` for stdin), passed to the template
//!   as-is;
//! - a list of `key=value` definitions, collected into a JSON object whose
//!   values are all strings.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::GenplateError;

/// Data a template is rendered against.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateData(Value);

impl TemplateData {
    /// Wraps an already decoded JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Reads and decodes a JSON document. A path of `-` reads stdin.
    ///
    /// ## Errors
    ///
    /// Returns `ReadData` if the file cannot be read and `InvalidJson` if it
    /// does not decode.
    pub fn from_json_path(path: &Path) -> Result<Self, GenplateError> {
        let read_err = |source: io::Error| GenplateError::ReadData {
            path: path.to_path_buf(),
            source,
        };

        let contents = if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(read_err)?;
            buf
        } else {
            fs::read_to_string(path).map_err(read_err)?
        };

        let value = serde_json::from_str(&contents).map_err(|source| GenplateError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loaded JSON template data");
        Ok(Self(value))
    }

    /// Builds a string → string object from `key=value` definitions.
    ///
    /// Each definition is split on its first `=`, so values may themselves
    /// contain `=`. A repeated key keeps the last value.
    ///
    /// ## Errors
    ///
    /// Returns `InvalidDefinition` for an argument without `=` or with an
    /// empty key.
    pub fn from_definitions<I, S>(definitions: I) -> Result<Self, GenplateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pairs = BTreeMap::new();

        for definition in definitions {
            let (key, value) = parse_definition(definition.as_ref())?;
            pairs.insert(key.to_string(), value.to_string());
        }

        debug!(count = pairs.len(), "collected key=value template data");
        let object: Map<String, Value> = pairs
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();

        Ok(Self(Value::Object(object)))
    }

    /// Interprets command-line data arguments.
    ///
    /// A single argument without `=` is a JSON document path. Otherwise every
    /// argument must be a `key=value` definition; a lone path that contains
    /// `=` is read as a definition, so such files go through stdin (`-`).
    ///
    /// ## Errors
    ///
    /// Returns `MissingData` for an empty list and `MixedData` when a path is
    /// combined with definitions, in addition to the errors of
    /// [`from_json_path`](Self::from_json_path) and
    /// [`from_definitions`](Self::from_definitions).
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, GenplateError> {
        match args {
            [] => Err(GenplateError::MissingData),
            [single] if !single.as_ref().contains('=') => {
                Self::from_json_path(Path::new(single.as_ref()))
            }
            many => {
                let with_eq = many.iter().filter(|arg| arg.as_ref().contains('=')).count();
                if with_eq > 0 && with_eq < many.len() {
                    return Err(GenplateError::MixedData);
                }
                Self::from_definitions(many)
            }
        }
    }

    /// Borrows the data as a JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwraps the data into its JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

fn parse_definition(arg: &str) -> Result<(&str, &str), GenplateError> {
    let invalid = |reason: &str| GenplateError::InvalidDefinition {
        arg: arg.to_string(),
        reason: reason.to_string(),
    };

    let (key, value) = arg.split_once('=').ok_or_else(|| invalid("expected key=value"))?;
    if key.is_empty() {
        return Err(invalid("key must not be empty"));
    }

    Ok((key, value))
}
