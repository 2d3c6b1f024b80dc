//! Non-mutating reorder primitives
//!
//! Both operations copy the input and edit the copy. Index handling follows
//! splice rules: out-of-range positions clamp or do nothing rather than panic.

/// Move the element at `from` to position `to`, returning a new vector
///
/// A negative `to` counts back from the end of the *original* length and is
/// then applied to the shortened vector, so `-1` puts the element last.
/// Positions past the end clamp to the end; positions that are still negative
/// count back from the shortened end once more and clamp to the front.
///
/// When `from` is out of range there is nothing to move and the copy comes
/// back unchanged.
/// `from` is unsigned, so a source position counted back from the end has no
/// form here; resolve it against `items.len()` before calling.
///
/// # Examples
///
/// ```
/// use movable_core::move_item;
///
/// let items = ["a", "b", "c"];
/// assert_eq!(move_item(&items, 0, -1), ["b", "c", "a"]);
/// assert_eq!(move_item(&items, 2, 0), ["c", "a", "b"]);
/// assert_eq!(items, ["a", "b", "c"]);
/// ```
pub fn move_item<T: Clone>(items: &[T], from: usize, to: isize) -> Vec<T> {
    let mut moved = items.to_vec();
    let target = if to < 0 {
        moved.len() as isize + to
    } else {
        to
    };

    if from >= moved.len() {
        return moved;
    }

    let item = moved.remove(from);
    let remaining = moved.len() as isize;
    let index = if target < 0 {
        (remaining + target).max(0)
    } else {
        target.min(remaining)
    };
    moved.insert(index as usize, item);
    moved
}

/// Copy of `items` without the element at `index`
///
/// An out-of-range index removes nothing.
/// `index` is unsigned; a position counted back from the end must be resolved
/// by the caller.
///
/// # Examples
///
/// ```
/// use movable_core::remove_item;
///
/// let items = vec!['a', 'b', 'c'];
/// assert_eq!(remove_item(&items, 1), vec!['a', 'c']);
/// assert_eq!(remove_item(&items, 9), items);
/// ```
pub fn remove_item<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    let mut remaining = items.to_vec();
    if index < remaining.len() {
        remaining.remove(index);
    }
    remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_counted_from_end_resolved_by_caller() {
        let items = vec!["a", "b", "c", "d"];
        let from = items.len() - 1;
        assert_eq!(move_item(&items, from, 0), vec!["d", "a", "b", "c"]);
        assert_eq!(remove_item(&items, items.len() - 2), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_move_to_end_with_negative_index() {
        let items = vec!["a", "b", "c"];
        assert_eq!(move_item(&items, 0, -1), vec!["b", "c", "a"]);
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_to_front() {
        let items = vec!["a", "b", "c"];
        assert_eq!(move_item(&items, 2, 0), vec!["c", "a", "b"]);
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_forward_and_back() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(move_item(&items, 1, 3), vec![1, 3, 4, 2, 5]);
        assert_eq!(move_item(&items, 3, 1), vec![1, 4, 2, 3, 5]);
        assert_eq!(move_item(&items, 2, 2), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_move_negative_index_uses_original_length() {
        let items = [1, 2, 3, 4];
        // 4 + (-2) = 2, inserted into [2, 3, 4]
        assert_eq!(move_item(&items, 0, -2), vec![2, 3, 1, 4]);
        // 4 + (-1) = 3, already the end of the shortened vector
        assert_eq!(move_item(&items, 3, -1), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_move_clamps_out_of_range_target() {
        let items = [1, 2, 3];
        assert_eq!(move_item(&items, 0, 99), vec![2, 3, 1]);
        // 3 + (-5) = -2, then 2 + (-2) = 0
        assert_eq!(move_item(&items, 2, -5), vec![3, 1, 2]);
        // 3 + (-9) = -6, then 2 + (-6) clamps to 0
        assert_eq!(move_item(&items, 1, -9), vec![2, 1, 3]);
    }

    #[test]
    fn test_move_out_of_range_source_is_copy() {
        let items = [1, 2, 3];
        assert_eq!(move_item(&items, 3, 0), vec![1, 2, 3]);
        assert!(move_item::<u8>(&[], 0, 0).is_empty());
    }

    #[test]
    fn test_remove() {
        let items = vec!["a", "b", "c"];
        assert_eq!(remove_item(&items, 1), vec!["a", "c"]);
        assert_eq!(remove_item(&items, 0), vec!["b", "c"]);
        assert_eq!(remove_item(&items, 2), vec!["a", "b"]);
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_out_of_range_is_copy() {
        let items = vec![String::from("only")];
        assert_eq!(remove_item(&items, 1), items);
        assert!(remove_item::<i32>(&[], 0).is_empty());
    }
}
