//! CSS counter styles for Rust.
//!
//! `counterstyle` turns integers into list markers the way CSS
//! `@counter-style` does: `iv`, `D`, `٣`, `十二`, `•`. Styles are immutable
//! values that can be decorated, composed with text, registered under
//! names, and loaded from YAML or JSON.
//!
//! # Core Concepts
//!
//! - [`CounterStyle`]: A partial renderer plus a total fallback. Built from
//!   one of six counter systems (cyclic, fixed, symbolic, alphabetic,
//!   numeric, additive) and refined with decorators (range, negative,
//!   padding, fallback)
//! - [`predefined`]: Every style named by CSS Counter Styles Level 3, plus
//!   CJK and Korean "item" variants
//! - [`Template`] and [`sty`]: Literal text interleaved with counters
//! - [`CounterStyles`]: A registry of named styles and aliases
//! - [`StyleSheet`]: Style definitions loaded from YAML or JSON
//! - [`Renderer`]: MiniJinja templates with `counter` and `marker` filters
//! - [`markers`]: A column of markers padded to a common width
//!
//! # Quick Start
//!
//! ```rust
//! use counterstyle::{CounterFormatter, CounterStyle, Template};
//! use counterstyle::predefined::{LOWER_ROMAN, UPPER_ALPHA};
//!
//! assert_eq!(LOWER_ROMAN.format(1999), "mcmxcix");
//! assert_eq!(UPPER_ALPHA.format(28), "AB");
//!
//! let binary = CounterStyle::numeric(["0", "1"])
//!     .unwrap()
//!     .pad_left(4, "0")
//!     .negative("-", "");
//! assert_eq!(binary.format(5), "0101");
//! assert_eq!(binary.format(-5), "-101");
//!
//! let heading = Template::new()
//!     .text("Appendix ")
//!     .counter(UPPER_ALPHA.clone())
//!     .text(":");
//! assert_eq!(heading.format(3), "Appendix C:");
//! ```
//!
//! # Named Styles
//!
//! ```rust
//! use counterstyle::{CounterStyles, StyleSheet};
//!
//! let sheet = StyleSheet::from_yaml(
//!     r#"
//! chapter: upper-roman
//! step:
//!   system: extends
//!   base: decimal
//!   decorate:
//!     - { kind: pad-left, length: 2, pad: "0" }
//! "#,
//! )
//! .unwrap();
//!
//! let styles = sheet.apply(&CounterStyles::predefined()).unwrap();
//! assert_eq!(styles.format("chapter", 4).unwrap(), "IV");
//! assert_eq!(styles.format("step", 7).unwrap(), "07");
//! ```

pub mod config;
pub mod list;
pub mod predefined;
pub mod registry;
pub mod style;
pub mod template;
mod util;

pub use config::{ConfigError, StyleSheet};
pub use list::markers;
pub use registry::{CounterStyles, CounterValue, RegistryError};
pub use style::{CounterFormatter, CounterStyle, CounterStyleError, System, MAX_LABEL_BYTES};
pub use template::{register_filters, sty, Renderer, Template, TemplateError};
pub use util::{display_width, pad_to_width, Align};
