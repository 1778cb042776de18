//! Pre-compiled template renderer.

use minijinja::{Environment, Error};
use serde::Serialize;

use super::filters::register_filters;
use crate::registry::CounterStyles;

/// A renderer with pre-registered templates and counter filters.
///
/// Use this when your application renders numbered output repeatedly.
/// Templates are compiled once and reused.
///
/// # Example
///
/// ```rust
/// use counterstyle::{CounterStyles, Renderer};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Outline { chapters: Vec<String> }
///
/// let mut renderer = Renderer::new(CounterStyles::predefined()).unwrap();
/// renderer
///     .add_template(
///         "toc",
///         r#"{% for c in chapters %}{{ loop.index | counter("upper-roman") }} {{ c }}
/// {% endfor %}"#,
///     )
///     .unwrap();
///
/// let out = renderer
///     .render("toc", &Outline { chapters: vec!["Intro".into(), "Usage".into()] })
///     .unwrap();
/// assert_eq!(out, "I Intro\nII Usage\n");
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer whose `counter` and `marker` filters look up
    /// names in `styles`.
    ///
    /// # Errors
    ///
    /// Fails when an alias in `styles` is dangling or cyclic.
    pub fn new(styles: CounterStyles) -> Result<Self, Error> {
        styles
            .validate()
            .map_err(|e| Error::new(minijinja::ErrorKind::InvalidOperation, e.to_string()))?;

        let mut env = Environment::new();
        register_filters(&mut env, styles);
        Ok(Self { env })
    }

    /// Compiles `source` and stores it under `name`, replacing any earlier
    /// template of that name.
    ///
    /// Style names passed to `counter` or `marker` are looked up when the
    /// template renders, so an unknown name does not fail here.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders the template stored under `name` against `data`.
    ///
    /// # Errors
    ///
    /// Fails when no template has that name, or when a `counter` or `marker`
    /// filter names a style the registry cannot resolve.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predefined::DECIMAL;
    use crate::CounterStyle;

    #[derive(Serialize)]
    struct Steps {
        steps: Vec<&'static str>,
    }

    #[test]
    fn test_renderer_add_and_render() {
        let mut renderer = Renderer::new(CounterStyles::predefined()).unwrap();
        renderer
            .add_template(
                "steps",
                r#"{% for s in steps %}[{{ loop.index | counter("lower-greek") }}] {{ s }} {% endfor %}"#,
            )
            .unwrap();

        let output = renderer
            .render(
                "steps",
                &Steps {
                    steps: vec!["mix", "bake"],
                },
            )
            .unwrap();
        assert_eq!(output, "[α] mix [β] bake ");
    }

    #[test]
    fn test_renderer_unknown_template_error() {
        let renderer = Renderer::new(CounterStyles::predefined()).unwrap();
        let result = renderer.render("nonexistent", &Steps { steps: vec![] });
        assert!(result.is_err());
    }

    #[test]
    fn test_renderer_custom_style() {
        let styles = CounterStyles::new().add("zero-pad", DECIMAL.pad_left(3, "0"));
        let mut renderer = Renderer::new(styles).unwrap();
        renderer
            .add_template("id", r#"{{ 7 | counter("zero-pad") }}"#)
            .unwrap();
        assert_eq!(renderer.render("id", &minijinja::context! {}).unwrap(), "007");
    }

    #[test]
    fn test_renderer_unknown_style_fails_at_render() {
        let mut renderer = Renderer::new(CounterStyles::predefined()).unwrap();
        renderer
            .add_template("bad", r#"{{ 3 | counter("no-such-style") }}"#)
            .unwrap();
        let err = renderer.render("bad", &minijinja::context! {}).unwrap_err();
        assert!(err.to_string().contains("no-such-style"));
    }

    #[test]
    fn test_renderer_fails_with_invalid_aliases() {
        let styles = CounterStyles::new().add("orphan", "missing");
        assert!(Renderer::new(styles).is_err());
    }

    #[test]
    fn test_renderer_succeeds_with_valid_aliases() {
        let styles = CounterStyles::new()
            .add("base", CounterStyle::decimal())
            .add("alias", "base");
        assert!(Renderer::new(styles).is_ok());
    }
}
