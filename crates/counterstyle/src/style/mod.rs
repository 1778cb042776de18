//! Counter style engine.
//!
//! This module provides the core rendering primitives:
//!
//! - [`CounterStyle`]: An immutable mapping from integer index to label
//! - [`CounterFormatter`]: The total "index to string" capability shared by
//!   styles, templates, and plain closures
//! - [`System`]: The primitive algorithm a style is built from
//! - [`CounterStyleError`]: Errors from malformed symbol tables
//!
//! Styles are built from a primitive system and refined by chaining
//! decorators (range, fallback, negative, padding), each of which returns a
//! new style wrapping the previous one.

mod counter;
mod error;
mod system;

pub use counter::{CounterFormatter, CounterStyle};
pub use error::CounterStyleError;
pub use system::{System, MAX_LABEL_BYTES};
