//! MiniJinja filter registration.

use minijinja::{Environment, Error, ErrorKind};

use crate::registry::CounterStyles;

/// Registers the counter filters on a minijinja environment.
///
/// - `counter(name)` renders an integer with the named style:
///   `{{ n | counter("lower-roman") }}`
/// - `marker(name, suffix)` does the same and appends a suffix, for list
///   items: `{{ loop.index | marker("decimal", ". ") }}`
pub fn register_filters(env: &mut Environment<'static>, styles: CounterStyles) {
    let counter_styles = styles.clone();
    env.add_filter("counter", move |index: i64, name: String| -> Result<String, Error> {
        counter_styles
            .format(&name, index)
            .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
    });

    env.add_filter(
        "marker",
        move |index: i64, name: String, suffix: Option<String>| -> Result<String, Error> {
            let label = styles
                .format(&name, index)
                .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))?;
            Ok(label + suffix.as_deref().unwrap_or(". "))
        },
    );
}
