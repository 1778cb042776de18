//! Utility functions for measuring and padding labels.

use unicode_width::UnicodeWidthStr;

/// Horizontal alignment of a label inside a wider column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Label first, padding after.
    #[default]
    Left,
    /// Padding first, label after.
    Right,
}

/// Number of Unicode scalar values in `s`.
///
/// This is the length counter style padding works with.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Repeats `unit` until exactly `count` characters are produced.
///
/// A multi-character unit is cut off mid-way if needed; an empty unit
/// produces nothing.
pub(crate) fn fill(unit: &str, count: usize) -> String {
    unit.chars().cycle().take(count).collect()
}

/// Returns the display width of a string in terminal columns.
///
/// East Asian wide characters count as two columns, so a CJK marker and a
/// Latin marker of the same character length may differ in width.
///
/// # Example
///
/// ```rust
/// use counterstyle::display_width;
///
/// assert_eq!(display_width("iv"), 2);
/// assert_eq!(display_width("十二"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pads `s` with spaces to at least `width` terminal columns.
///
/// Strings already at or beyond `width` are returned unchanged.
///
/// # Example
///
/// ```rust
/// use counterstyle::{pad_to_width, Align};
///
/// assert_eq!(pad_to_width("ii", 4, Align::Right), "  ii");
/// assert_eq!(pad_to_width("ii", 4, Align::Left), "ii  ");
/// assert_eq!(pad_to_width("viii", 2, Align::Left), "viii");
/// ```
pub fn pad_to_width(s: &str, width: usize, align: Align) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }

    let padding = " ".repeat(width - current);
    match align {
        Align::Left => format!("{}{}", s, padding),
        Align::Right => format!("{}{}", padding, s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_scalars() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("マイナス"), 4);
    }

    #[test]
    fn test_fill_exact_count() {
        assert_eq!(fill("0", 3), "000");
        assert_eq!(fill("ab", 3), "aba");
        assert_eq!(fill("ab", 0), "");
        assert_eq!(fill("", 5), "");
    }

    #[test]
    fn test_display_width_wide_chars() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("xii"), 3);
        assert_eq!(display_width("一"), 2);
        assert_eq!(display_width("あい"), 4);
    }

    #[test]
    fn test_pad_to_width_alignments() {
        assert_eq!(pad_to_width("a", 3, Align::Left), "a  ");
        assert_eq!(pad_to_width("a", 3, Align::Right), "  a");
    }

    #[test]
    fn test_pad_to_width_wide_chars() {
        assert_eq!(pad_to_width("一", 3, Align::Right), " 一");
    }

    #[test]
    fn test_pad_to_width_exact_fit() {
        assert_eq!(pad_to_width("abc", 3, Align::Left), "abc");
    }
}
