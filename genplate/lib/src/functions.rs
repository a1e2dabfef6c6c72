//! The functions templates can call, and their registration as helpers.
//!
//! [`TemplateFunctions`] is a plain name → function map. It is built once at
//! startup and handed to the [`Renderer`](crate::output::Renderer), which
//! registers every entry as a Handlebars helper. Templates call them with one
//! string argument:
//!
//! ```text
//! pub struct {{PascalCase name}} { ... }
//! pub fn list_{{SnakeCase (Pluralize name)}}() { ... }
//! ```

use std::collections::BTreeMap;

use handlebars::{
    Context, Handlebars, Helper, HelperDef, RenderContext, RenderError, RenderErrorReason,
    ScopedJson,
};
use serde_json::Value;

use crate::casing::{to_camel_case, to_pascal_case, to_snake_case};
use crate::errors::CaseError;
use crate::pluralize::pluralize;

/// A template-callable function: one string in, one string or a failure out.
pub type TemplateFn = fn(&str) -> Result<String, CaseError>;

/// Name → function map exposed to templates.
#[derive(Debug, Clone)]
pub struct TemplateFunctions {
    functions: BTreeMap<&'static str, TemplateFn>,
}

impl TemplateFunctions {
    /// A map with no functions in it.
    pub fn empty() -> Self {
        Self {
            functions: BTreeMap::new(),
        }
    }

    /// The standard set: `Pluralize`, `CamelCase`, `PascalCase` and `SnakeCase`.
    pub fn builtin() -> Self {
        Self::empty()
            .with("Pluralize", pluralize)
            .with("CamelCase", to_camel_case)
            .with("PascalCase", to_pascal_case)
            .with("SnakeCase", to_snake_case)
    }

    /// Adds `function` under `name`, replacing any previous entry.
    pub fn with(mut self, name: &'static str, function: TemplateFn) -> Self {
        self.functions.insert(name, function);
        self
    }

    /// Looks up a function by the name templates call it with.
    pub fn get(&self, name: &str) -> Option<TemplateFn> {
        self.functions.get(name).copied()
    }

    /// Registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether no functions are registered.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registers every function as a helper on `registry`.
    pub fn register(&self, registry: &mut Handlebars<'_>) {
        for (&name, &function) in &self.functions {
            registry.register_helper(name, Box::new(FunctionHelper { name, function }));
        }
    }
}

impl Default for TemplateFunctions {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Adapts a [`TemplateFn`] to the Handlebars helper interface.
///
/// Implementing `call_inner` rather than `call` lets the helper be used both
/// directly (`{{SnakeCase name}}`) and as a subexpression
/// (`{{SnakeCase (Pluralize name)}}`).
struct FunctionHelper {
    name: &'static str,
    function: TemplateFn,
}

impl HelperDef for FunctionHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let param = h
            .param(0)
            .ok_or(RenderErrorReason::ParamNotFoundForIndex(self.name, 0))?;

        let input = param.value().as_str().ok_or_else(|| {
            RenderErrorReason::ParamTypeMismatchForName(
                self.name,
                param.relative_path().cloned().unwrap_or_else(|| "0".to_string()),
                "string".to_string(),
            )
        })?;

        let output = (self.function)(input)
            .map_err(|err| RenderErrorReason::Other(format!("{}: {err}", self.name)))?;

        Ok(ScopedJson::Derived(Value::String(output)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> Handlebars<'static> {
        let mut hb = Handlebars::new();
        hb.register_escape_fn(handlebars::no_escape);
        TemplateFunctions::builtin().register(&mut hb);
        hb
    }

    #[test]
    fn builtin_has_exactly_four_functions() {
        let functions = TemplateFunctions::builtin();
        assert_eq!(
            functions.names().collect::<Vec<_>>(),
            vec!["CamelCase", "PascalCase", "Pluralize", "SnakeCase"]
        );
        assert_eq!(functions.len(), 4);
    }

    #[test]
    fn get_returns_callable_function() {
        let functions = TemplateFunctions::builtin();
        let snake = functions.get("SnakeCase").unwrap();
        assert_eq!(snake("HelloWorld").unwrap(), "hello_world");
        assert!(functions.get("KebabCase").is_none());
    }

    #[test]
    fn with_replaces_existing_entry() {
        fn shout(s: &str) -> Result<String, CaseError> {
            Ok(s.to_uppercase())
        }
        let functions = TemplateFunctions::builtin().with("Pluralize", shout);
        assert_eq!(functions.len(), 4);
        assert_eq!(functions.get("Pluralize").unwrap()("cat").unwrap(), "CAT");
    }

    #[test]
    fn empty_registry_has_nothing() {
        assert!(TemplateFunctions::empty().is_empty());
    }

    #[test]
    fn helpers_render_inline() {
        let out = registry()
            .render_template(
                "{{CamelCase name}} {{PascalCase name}} {{SnakeCase name}} {{Pluralize name}}",
                &json!({"name": "order_entry"}),
            )
            .unwrap();
        assert_eq!(out, "orderEntry OrderEntry order_entry order_entries");
    }

    #[test]
    fn helpers_nest_as_subexpressions() {
        let out = registry()
            .render_template("{{SnakeCase (Pluralize name)}}", &json!({"name": "OrderEntry"}))
            .unwrap();
        assert_eq!(out, "order_entries");
    }

    #[test]
    fn helpers_accept_string_literals() {
        let out = registry()
            .render_template("{{PascalCase \"user_id\"}}", &json!({}))
            .unwrap();
        assert_eq!(out, "UserId");
    }

    #[test]
    fn helper_failure_aborts_render() {
        let err = registry()
            .render_template("before {{SnakeCase name}} after", &json!({"name": "foo-bar"}))
            .unwrap_err();
        assert!(err.to_string().contains("cannot convert `foo-bar` to snake_case"));
    }

    #[test]
    fn pluralize_empty_aborts_render() {
        let err = registry()
            .render_template("{{Pluralize name}}", &json!({"name": ""}))
            .unwrap_err();
        assert!(err.to_string().contains("cannot pluralize an empty string"));
    }

    #[test]
    fn missing_argument_is_an_error() {
        assert!(registry().render_template("{{CamelCase}}", &json!({})).is_err());
    }

    #[test]
    fn non_string_argument_is_an_error() {
        assert!(
            registry()
                .render_template("{{CamelCase count}}", &json!({"count": 3}))
                .is_err()
        );
    }
}
