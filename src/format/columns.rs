//! Two-column splitting of ordered content lists

/// Split an ordered list into left and right halves for two-column display.
///
/// The midpoint is `ceil(len / 2)`, so with an odd count the left column
/// gets the extra item. An empty input yields two empty columns.
#[must_use]
pub fn split_columns<T: Clone>(items: &[T]) -> (Vec<T>, Vec<T>) {
    let midpoint = items.len().div_ceil(2);
    (items[..midpoint].to_vec(), items[midpoint..].to_vec())
}
