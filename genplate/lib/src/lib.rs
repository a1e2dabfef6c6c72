//! Template-driven code generation with identifier case helpers.
//!
//! `genplate` renders a Handlebars template against JSON data (or a set of
//! `key=value` definitions) and writes the result to a file. Templates get
//! four helpers for reshaping identifiers:
//!
//! | Helper | Example |
//! |---|---|
//! | `Pluralize` | `category` → `categories` |
//! | `CamelCase` | `user_profile` → `userProfile` |
//! | `PascalCase` | `user_profile` → `UserProfile` |
//! | `SnakeCase` | `UserProfile` → `user_profile` |
//!
//! A helper that cannot handle its input (an identifier with digits or
//! hyphens, an empty string to pluralize) fails the whole render; nothing is
//! written in that case.
//!
//! ## Modules
//!
//! - [`casing`] - Convention classification and conversion
//! - [`pluralize`](mod@pluralize) - The suffix-based pluralizer
//! - [`functions`] - The name → function map exposed to templates
//! - [`data`] - Loading template data
//! - [`output`] - Rendering and atomic output writing
//! - [`errors`] - Error types
//!
//! ## Example Usage
//!
//! ```
//! use genplate::{RenderOptions, Renderer, TemplateData, TemplateFunctions};
//!
//! let renderer = Renderer::new(&TemplateFunctions::builtin(), &RenderOptions::default());
//! let data = TemplateData::from_definitions(["entity=order_entry"]).unwrap();
//!
//! let code = renderer
//!     .render_str("pub struct {{PascalCase entity}};\nconst TABLE: &str = \"{{Pluralize entity}}\";", &data)
//!     .unwrap();
//!
//! assert_eq!(code, "pub struct OrderEntry;\nconst TABLE: &str = \"order_entries\";");
//! ```

pub mod casing;
pub mod data;
pub mod errors;
pub mod functions;
pub mod output;
pub mod pluralize;

pub use casing::Convention;
pub use data::TemplateData;
pub use errors::{CaseError, GenplateError};
pub use functions::{TemplateFn, TemplateFunctions};
pub use output::{RenderOptions, Renderer, generate, write_atomic};
pub use pluralize::pluralize;
