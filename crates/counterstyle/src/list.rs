//! Aligned marker columns for ordered lists.

use crate::style::CounterFormatter;
use crate::util::{display_width, pad_to_width, Align};

/// Formats each index and pads every marker to the widest one.
///
/// Widths are measured in terminal columns, so markers mixing wide and
/// narrow characters still line up.
///
/// # Example
///
/// ```rust
/// use counterstyle::{markers, Align};
/// use counterstyle::predefined::LOWER_ROMAN;
///
/// let column = markers(&*LOWER_ROMAN, 1..=4, Align::Right);
/// assert_eq!(column, vec!["  i", " ii", "iii", " iv"]);
/// ```
pub fn markers<F, I>(formatter: &F, indices: I, align: Align) -> Vec<String>
where
    F: CounterFormatter + ?Sized,
    I: IntoIterator<Item = i64>,
{
    let labels: Vec<String> = indices
        .into_iter()
        .map(|index| formatter.format(index))
        .collect();
    let width = labels
        .iter()
        .map(|label| display_width(label))
        .max()
        .unwrap_or(0);

    labels
        .iter()
        .map(|label| pad_to_width(label, width, align))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predefined::{CJK_DECIMAL, DECIMAL};
    use crate::template::Template;

    #[test]
    fn test_markers_left_aligned() {
        let column = markers(&*DECIMAL, [1, 10, 100], Align::Left);
        assert_eq!(column, vec!["1  ", "10 ", "100"]);
    }

    #[test]
    fn test_markers_empty() {
        let column = markers(&*DECIMAL, std::iter::empty(), Align::Left);
        assert!(column.is_empty());
    }

    #[test]
    fn test_markers_wide_characters() {
        let column = markers(&*CJK_DECIMAL, [1, 10], Align::Right);
        assert_eq!(column, vec!["  一", "一〇"]);
    }

    #[test]
    fn test_markers_with_template() {
        let item = Template::new().counter(DECIMAL.clone()).text(".");
        let column = markers(&item, 9..=10, Align::Right);
        assert_eq!(column, vec![" 9.", "10."]);
    }

    #[test]
    fn test_markers_with_trait_object() {
        let formatter: Box<dyn CounterFormatter> = Box::new(|i: i64| "#".repeat(i as usize));
        let column = markers(formatter.as_ref(), [1, 3], Align::Left);
        assert_eq!(column, vec!["#  ", "###"]);
    }
}
