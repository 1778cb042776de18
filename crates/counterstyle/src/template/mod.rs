//! Composing counters with literal text.
//!
//! This module provides:
//!
//! - [`Template`]: Literal fragments interleaved with counters, rendered for
//!   one index at a time (`"{upper-roman}.{decimal}"`)
//! - [`sty`]: The fragment/counter form of the same composition
//! - [`TemplateError`]: Errors from parsing template strings
//! - [`Renderer`] and [`register_filters`]: MiniJinja integration exposing
//!   counter styles as a `counter` filter

mod error;
mod filters;
mod renderer;

pub use error::TemplateError;
pub use filters::register_filters;
pub use renderer::Renderer;

use std::sync::Arc;

use crate::registry::CounterStyles;
use crate::style::{CounterFormatter, CounterStyle};

#[derive(Clone)]
enum Part {
    Text(String),
    Counter(Arc<dyn CounterFormatter>),
}

/// Literal fragments interleaved with counters.
///
/// Every counter renders the same index, so a template is itself a
/// [`CounterFormatter`].
///
/// # Example
///
/// ```rust
/// use counterstyle::{CounterFormatter, Template};
/// use counterstyle::predefined::{DECIMAL, UPPER_ROMAN};
///
/// let heading = Template::new()
///     .text("Part ")
///     .counter(UPPER_ROMAN.clone())
///     .text(", section ")
///     .counter(DECIMAL.clone());
/// assert_eq!(heading.format(4), "Part IV, section 4");
/// ```
#[derive(Clone, Default)]
pub struct Template {
    parts: Vec<Part>,
}

impl Template {
    /// Creates an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a literal fragment.
    pub fn text(mut self, fragment: &str) -> Self {
        if !fragment.is_empty() {
            self.parts.push(Part::Text(fragment.to_string()));
        }
        self
    }

    /// Appends a counter.
    pub fn counter<F>(mut self, counter: F) -> Self
    where
        F: CounterFormatter + 'static,
    {
        self.parts.push(Part::Counter(Arc::new(counter)));
        self
    }

    fn counter_shared(mut self, counter: Arc<dyn CounterFormatter>) -> Self {
        self.parts.push(Part::Counter(counter));
        self
    }

    /// Parses a template string whose placeholders name styles in `styles`.
    ///
    /// `{name}` renders the named style; `{{` and `}}` stand for literal
    /// braces.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown style names, empty or unterminated
    /// placeholders, and stray closing braces.
    ///
    /// # Example
    ///
    /// ```rust
    /// use counterstyle::{CounterFormatter, CounterStyles, Template};
    ///
    /// let styles = CounterStyles::predefined();
    /// let label = Template::parse("{upper-alpha}.{lower-roman})", &styles).unwrap();
    /// assert_eq!(label.format(3), "C.iii)");
    /// ```
    pub fn parse(source: &str, styles: &CounterStyles) -> Result<Self, TemplateError> {
        let mut template = Template::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if chars.peek().map(|(_, next)| *next) == Some('{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek().map(|(_, next)| *next) == Some('}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(TemplateError::Unterminated { offset });
                    }

                    let name = name.trim();
                    if name.is_empty() {
                        return Err(TemplateError::EmptyPlaceholder { offset });
                    }
                    let style = styles.get(name).ok_or_else(|| TemplateError::UnknownStyle {
                        name: name.to_string(),
                    })?;

                    template = template.text(&literal).counter(style);
                    literal.clear();
                }
                '}' => return Err(TemplateError::UnmatchedBrace { offset }),
                c => literal.push(c),
            }
        }

        Ok(template.text(&literal))
    }

    /// Returns true if the template has neither text nor counters.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Wraps the template as a style so it can be decorated further.
    ///
    /// The resulting style always renders; its fallback is never used.
    pub fn into_style(self) -> CounterStyle {
        CounterStyle::raw(move |index, _| Some(self.format(index)))
    }
}

impl CounterFormatter for Template {
    fn format(&self, index: i64) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Text(text) => out.push_str(text),
                Part::Counter(counter) => out.push_str(&counter.format(index)),
            }
        }
        out
    }
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for part in &self.parts {
            match part {
                Part::Text(text) => list.entry(text),
                Part::Counter(_) => list.entry(&format_args!("<counter>")),
            };
        }
        list.finish()
    }
}

/// Joins literal fragments and counters as `f0 c0 f1 c1 ... fn`.
///
/// Missing trailing fragments count as empty; fragments beyond the last
/// counter are appended in order.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use counterstyle::{sty, CounterFormatter};
///
/// let this: Arc<dyn CounterFormatter> = Arc::new(|i: i64| i.to_string());
/// let next: Arc<dyn CounterFormatter> = Arc::new(|i: i64| (i + 1).to_string());
/// let range = sty(&["", "/", "."], [this, next]);
/// assert_eq!(range.format(5), "5/6.");
/// assert_eq!(range.format(-1), "-1/0.");
/// ```
pub fn sty<I>(fragments: &[&str], counters: I) -> Template
where
    I: IntoIterator<Item = Arc<dyn CounterFormatter>>,
{
    let mut fragments = fragments.iter();
    let mut template = Template::new().text(fragments.next().copied().unwrap_or_default());
    for counter in counters {
        template = template
            .counter_shared(counter)
            .text(fragments.next().copied().unwrap_or_default());
    }
    fragments.fold(template, |template, fragment| template.text(fragment))
}
