use crate::{error::Result, ioutils::path_to_str};
pub use cruet::case::{
    camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
    screaming_snake::to_screaming_snake_case, snake::to_snake_case,
};
use minijinja::Environment;
use std::path::Path;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;

    /// Renders a path with the given context.
    fn render_path(
        &self,
        template_path: &Path,
        context: &serde_json::Value,
    ) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

/// Left-pads an integer with zeros, e.g. `5 | zero_pad(2)` renders `05`.
fn zero_pad_filter(value: u64, width: usize) -> String {
    format!("{value:0width$}")
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("zero_pad", zero_pad_filter);

        Self { env }
    }

    fn render_internal(
        &self,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("temp", template)?;

        let tmpl = env.get_template("temp")?;
        Ok(tmpl.render(context)?)
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.render_internal(template, context)
    }

    fn render_path(
        &self,
        template_path: &Path,
        context: &serde_json::Value,
    ) -> Result<String> {
        let path_str = path_to_str(template_path)?;
        self.render_internal(path_str, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_simple_variables() {
        let engine = MiniJinjaRenderer::new();
        let out = engine
            .render("crate {{ package_name }}", &json!({"package_name": "day_05"}))
            .unwrap();
        assert_eq!(out, "crate day_05");
    }

    #[test]
    fn renders_paths_with_variables() {
        let engine = MiniJinjaRenderer::new();
        let out = engine
            .render_path(
                Path::new("src/bin/{{ package_name }}.rs.j2"),
                &json!({"package_name": "day_05"}),
            )
            .unwrap();
        assert_eq!(out, "src/bin/day_05.rs.j2");
    }

    #[test]
    fn zero_pad_filter_pads_single_digits() {
        let engine = MiniJinjaRenderer::new();
        let out =
            engine.render("day_{{ day | zero_pad(2) }}", &json!({"day": 5})).unwrap();
        assert_eq!(out, "day_05");

        let out =
            engine.render("day_{{ day | zero_pad(2) }}", &json!({"day": 14})).unwrap();
        assert_eq!(out, "day_14");
    }

    #[test]
    fn rendering_is_deterministic() {
        let engine = MiniJinjaRenderer::new();
        let ctx = json!({"package_name": "day_09", "display_name": "Day 09"});
        let template = "{{ display_name }} lives in {{ package_name }}";
        let first = engine.render(template, &ctx).unwrap();
        let second = engine.render(template, &ctx).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn case_filters_are_available() {
        let engine = MiniJinjaRenderer::new();
        let out = engine
            .render("{{ name | pascal_case }}", &json!({"name": "day_five"}))
            .unwrap();
        assert_eq!(out, "DayFive");
    }

    #[test]
    fn unknown_variables_render_empty() {
        // Minijinja's default is lenient lookup; the integration tests catch
        // leftover tokens instead.
        let engine = MiniJinjaRenderer::new();
        let out = engine.render("x{{ missing }}x", &json!({})).unwrap();
        assert_eq!(out, "xx");
    }
}
