//! Slot search over item boundaries
//!
//! A slot is the index of the boundary interval `[b[g], b[g + 1]]` that holds
//! a target coordinate. The last index has no upper neighbour and claims
//! everything the search reaches past it.

/// Find the slot for `target` in a non-decreasing `boundaries` sequence
///
/// Binary search where index `g` matches when it is the last index or when
/// `boundaries[g] <= target <= boundaries[g + 1]`. Returns `None` when the
/// window empties without a match: an empty sequence, or a target below the
/// first boundary.
///
/// Ordering is assumed, not checked. When several intervals touch `target`
/// (repeated boundaries) the first one on the search path wins, which is not
/// necessarily the lowest index.
///
/// # Examples
///
/// ```
/// use movable_core::locate;
///
/// let tops = [0.0, 40.0, 80.0, 120.0];
/// assert_eq!(locate(&tops, 55.0), Some(1));
/// assert_eq!(locate(&tops, 500.0), Some(3));
/// assert_eq!(locate(&tops, -5.0), None);
/// ```
pub fn locate(boundaries: &[f64], target: f64) -> Option<usize> {
    let mut min: isize = 0;
    let mut max: isize = boundaries.len() as isize - 1;

    while min <= max {
        let guess = (min + max) / 2;
        let g = guess as usize;
        let lower = boundaries[g];

        let Some(&upper) = boundaries.get(g + 1) else {
            return Some(g);
        };

        if lower <= target && upper >= target {
            return Some(g);
        } else if lower < target && upper < target {
            min = guess + 1;
        } else {
            max = guess - 1;
        }
    }

    None
}

/// Convert a slot to the `-1`-for-missing integer convention
#[inline]
pub fn slot_to_raw(slot: Option<usize>) -> isize {
    slot.map_or(-1, |g| g as isize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_none() {
        assert_eq!(locate(&[], 0.0), None);
        assert_eq!(locate(&[], -10.0), None);
        assert_eq!(locate(&[], f64::MAX), None);
    }

    #[test]
    fn test_single_boundary_is_always_zero() {
        for target in [-100.0, 0.0, 5.0, 1e9] {
            assert_eq!(locate(&[5.0], target), Some(0), "target {}", target);
        }
    }

    #[test]
    fn test_interior_targets() {
        let b = [0.0, 10.0, 20.0, 30.0, 40.0];
        assert_eq!(locate(&b, 5.0), Some(0));
        assert_eq!(locate(&b, 15.0), Some(1));
        assert_eq!(locate(&b, 25.0), Some(2));
        assert_eq!(locate(&b, 35.0), Some(3));
    }

    #[test]
    fn test_past_last_boundary_is_last_slot() {
        let b = [0.0, 10.0, 20.0];
        assert_eq!(locate(&b, 20.5), Some(2));
        assert_eq!(locate(&b, 999.0), Some(2));
    }

    #[test]
    fn test_below_first_boundary() {
        let b = [10.0, 20.0, 30.0];
        assert_eq!(locate(&b, 9.0), None);
        assert_eq!(slot_to_raw(locate(&b, 9.0)), -1);
    }

    #[test]
    fn test_exact_boundary_hits_containing_interval() {
        let b = [0.0, 10.0, 20.0, 30.0];
        // g = 1 is probed first and both 10 and 20 sit on its interval
        assert_eq!(locate(&b, 20.0), Some(1));
        assert_eq!(locate(&b, 10.0), Some(1));
        // g = 1 misses, g = 2 claims the shared boundary from below
        assert_eq!(locate(&b, 30.0), Some(2));
    }

    #[test]
    fn test_zero_valued_upper_boundary_is_an_ordinary_boundary() {
        let b = [-30.0, -20.0, 0.0, 10.0];
        assert_eq!(locate(&b, 5.0), Some(2));
        assert_eq!(locate(&b, -25.0), Some(0));
    }

    #[test]
    fn test_slot_to_raw() {
        assert_eq!(slot_to_raw(None), -1);
        assert_eq!(slot_to_raw(Some(0)), 0);
        assert_eq!(slot_to_raw(Some(7)), 7);
    }
}
