//! The counter style value and its decorators.

use std::sync::Arc;

use super::system::MAX_LABEL_BYTES;
use crate::util::{char_len, fill};

/// Partial renderer threaded through a decorator chain.
///
/// The second argument is the decorator length: the number of characters
/// that outer decorators will add around the rendered label.
pub(crate) type RenderFn = dyn Fn(i64, usize) -> Option<String> + Send + Sync;

/// Anything that turns an index into a label, without failing.
///
/// Implemented by [`CounterStyle`], by [`Template`](crate::Template), and by
/// any `Fn(i64) -> String` closure, so all three can serve as fallbacks
/// and as template counters.
pub trait CounterFormatter: Send + Sync {
    /// Renders the label for `index`.
    fn format(&self, index: i64) -> String;
}

impl<F> CounterFormatter for F
where
    F: Fn(i64) -> String + Send + Sync,
{
    fn format(&self, index: i64) -> String {
        self(index)
    }
}

fn decimal_digits(index: i64) -> String {
    index.to_string()
}

/// An immutable mapping from integer index to label.
///
/// A style pairs a partial renderer with a total fallback. The renderer may
/// decline an index (out of range, not representable); [`format`](Self::format)
/// then defers to the fallback, which defaults to plain decimal digits.
///
/// Decorators never modify the receiver. Each one returns a new style that
/// shares the previous renderer, so a base style stays usable after a
/// decorated style has been derived from it. Cloning is cheap.
///
/// # Example
///
/// ```rust
/// use counterstyle::CounterStyle;
///
/// let padded = CounterStyle::decimal().pad_left(3, "0").negative("-", "");
/// assert_eq!(padded.format(7), "007");
/// assert_eq!(padded.format(-5), "-05");
/// assert_eq!(padded.format(4000), "4000");
/// ```
#[derive(Clone)]
pub struct CounterStyle {
    render: Arc<RenderFn>,
    fallback: Arc<dyn CounterFormatter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PadSide {
    Start,
    End,
}

impl CounterStyle {
    /// Creates a style from a raw renderer, with decimal digits as fallback.
    ///
    /// The renderer receives the index and the decorator length. Returning
    /// `None` means "cannot render", which sends the index to the fallback.
    pub fn raw<R>(render: R) -> Self
    where
        R: Fn(i64, usize) -> Option<String> + Send + Sync + 'static,
    {
        Self::from_parts(Arc::new(render), Arc::new(decimal_digits))
    }

    /// Creates a style from a raw renderer and an explicit fallback.
    pub fn raw_with_fallback<R, F>(render: R, fallback: F) -> Self
    where
        R: Fn(i64, usize) -> Option<String> + Send + Sync + 'static,
        F: CounterFormatter + 'static,
    {
        Self::from_parts(Arc::new(render), Arc::new(fallback))
    }

    /// The plain base-10 style.
    ///
    /// Renders every index, negative ones included, with the standard
    /// library's integer formatting.
    pub fn decimal() -> Self {
        Self::raw(|index, _| Some(index.to_string()))
    }

    fn from_parts(render: Arc<RenderFn>, fallback: Arc<dyn CounterFormatter>) -> Self {
        Self { render, fallback }
    }

    fn wrap<R>(&self, render: R) -> Self
    where
        R: Fn(i64, usize) -> Option<String> + Send + Sync + 'static,
    {
        Self::from_parts(Arc::new(render), Arc::clone(&self.fallback))
    }

    /// Runs the primary renderer chain only, without the fallback.
    ///
    /// Returns `None` when the style cannot represent `index`.
    pub fn render(&self, index: i64) -> Option<String> {
        (self.render)(index, 0)
    }

    /// Runs the fallback renderer only.
    pub fn render_fallback(&self, index: i64) -> String {
        self.fallback.format(index)
    }

    /// Renders `index`, deferring to the fallback when the style declines.
    pub fn format(&self, index: i64) -> String {
        self.render(index)
            .unwrap_or_else(|| self.render_fallback(index))
    }

    /// True when both handles share the same renderer and fallback.
    pub(crate) fn same_as(&self, other: &CounterStyle) -> bool {
        Arc::ptr_eq(&self.render, &other.render) && Arc::ptr_eq(&self.fallback, &other.fallback)
    }

    /// Restricts the style to `min..=max`; other indices use the fallback.
    #[must_use]
    pub fn range(&self, min: i64, max: i64) -> Self {
        let inner = Arc::clone(&self.render);
        self.wrap(move |index, decorator_len| {
            if (min..=max).contains(&index) {
                inner(index, decorator_len)
            } else {
                None
            }
        })
    }

    /// Restricts the style to `min..=max` and replaces its fallback.
    #[must_use]
    pub fn range_with_fallback<F>(&self, min: i64, max: i64, fallback: F) -> Self
    where
        F: CounterFormatter + 'static,
    {
        self.range(min, max).fallback(fallback)
    }

    /// Replaces the fallback renderer, keeping the primary chain.
    #[must_use]
    pub fn fallback<F>(&self, fallback: F) -> Self
    where
        F: CounterFormatter + 'static,
    {
        Self::from_parts(Arc::clone(&self.render), Arc::new(fallback))
    }

    /// Wraps negative indices as `prefix + label(-index) + suffix`.
    ///
    /// Non-negative indices pass through untouched. Padding decorators
    /// applied before this one reserve room for the prefix and suffix, so
    /// the whole label reaches the requested width.
    #[must_use]
    pub fn negative(&self, prefix: &str, suffix: &str) -> Self {
        let inner = Arc::clone(&self.render);
        let prefix = prefix.to_owned();
        let suffix = suffix.to_owned();
        let affix_len = char_len(&prefix) + char_len(&suffix);

        self.wrap(move |index, decorator_len| {
            if index < 0 {
                let magnitude = index.checked_neg()?;
                let body = inner(magnitude, decorator_len + affix_len)?;
                Some(format!("{}{}{}", prefix, body, suffix))
            } else {
                inner(index, decorator_len)
            }
        })
    }

    /// Pads labels shorter than `length` characters on the left.
    ///
    /// Padding that would push the label past [`MAX_LABEL_BYTES`] is
    /// declined, so the fallback renders instead.
    #[must_use]
    pub fn pad_left(&self, length: usize, pad: &str) -> Self {
        self.padded(length, pad, PadSide::Start)
    }

    /// Pads labels shorter than `length` characters on the right.
    #[must_use]
    pub fn pad_right(&self, length: usize, pad: &str) -> Self {
        self.padded(length, pad, PadSide::End)
    }

    fn padded(&self, length: usize, pad: &str, side: PadSide) -> Self {
        let inner = Arc::clone(&self.render);
        let pad = pad.to_owned();

        self.wrap(move |index, decorator_len| {
            // The inner label is measured bare; outer affixes shrink the target.
            let body = inner(index, 0)?;
            let target = length.saturating_sub(decorator_len);
            let current = char_len(&body);
            if current >= target {
                return Some(body);
            }

            let missing = target - current;
            let widest = pad.chars().map(char::len_utf8).max().unwrap_or(0);
            if missing.checked_mul(widest)? > MAX_LABEL_BYTES.saturating_sub(body.len()) {
                return None;
            }

            let padding = fill(&pad, missing);
            Some(match side {
                PadSide::Start => padding + &body,
                PadSide::End => body + &padding,
            })
        })
    }
}

impl CounterFormatter for CounterStyle {
    fn format(&self, index: i64) -> String {
        CounterStyle::format(self, index)
    }
}

impl std::fmt::Debug for CounterStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterStyle").finish_non_exhaustive()
    }
}
