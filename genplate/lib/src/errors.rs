//! Error types for genplate.

use std::path::PathBuf;

use thiserror::Error;

use crate::casing::Convention;

/// Errors raised by the case-convention helpers.
///
/// These are the only failures a template function can produce. The template
/// engine turns them into a render error, which aborts the whole render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// The input matches none of camelCase, PascalCase or snake_case.
    #[error("cannot convert `{input}` to {target}")]
    UnrecognizedConvention {
        /// The offending identifier.
        input: String,
        /// The convention the caller asked for.
        target: Convention,
    },

    /// The pluralizer was handed an empty string.
    #[error("cannot pluralize an empty string")]
    EmptyInput,
}

/// Errors that can occur while loading data, rendering a template or writing
/// the output.
#[derive(Debug, Error)]
pub enum GenplateError {
    /// Failed to read the template source
    #[error("Failed to read template '{path}': {source}")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the data document
    #[error("Failed to read data file '{path}': {source}")]
    ReadData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data document is not valid JSON
    #[error("Invalid JSON in '{path}': {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A `key=value` argument could not be parsed.
    #[error("Invalid definition '{arg}': {reason}")]
    InvalidDefinition {
        /// The raw argument as given on the command line.
        arg: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A JSON data path was combined with `key=value` definitions.
    #[error("Template data must be either a single JSON file or key=value pairs, not both")]
    MixedData,

    /// No template data was supplied at all.
    #[error("No template data supplied")]
    MissingData,

    /// The template source could not be parsed
    #[error("Template parse failed: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Rendering failed, including failures raised by template functions
    #[error("Render failed: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
