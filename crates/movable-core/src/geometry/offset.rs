//! Item pitch and displacement along the list axis
//!
//! The host measures each item (extent plus margins) and hands the numbers in
//! as [`BoxMetrics`]. Nothing here touches a real layout.

use serde::{Deserialize, Serialize};

/// Measured size of one item along the list axis
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxMetrics {
    /// Border-box size along the axis
    pub extent: f64,
    /// Margin before the item
    pub margin_start: f64,
    /// Margin after the item
    pub margin_end: f64,
}

impl BoxMetrics {
    pub fn new(extent: f64, margin_start: f64, margin_end: f64) -> Self {
        Self {
            extent,
            margin_start,
            margin_end,
        }
    }

    /// Item with no margins
    pub fn plain(extent: f64) -> Self {
        Self::new(extent, 0.0, 0.0)
    }
}

/// Distance siblings travel when this item is lifted out of the flow
///
/// Adjacent margins collapse, so only the larger one counts.
#[inline]
pub fn translate_offset(metrics: &BoxMetrics) -> f64 {
    metrics.margin_start.max(metrics.margin_end) + metrics.extent
}

/// Cumulative start offset of every item, beginning at `origin`
///
/// The result is non-decreasing for non-negative metrics and is the
/// boundary sequence [`locate`](super::slot::locate) expects.
pub fn boundaries(items: &[BoxMetrics], origin: f64) -> Vec<f64> {
    items
        .iter()
        .scan(origin, |cursor, metrics| {
            let start = *cursor;
            *cursor += translate_offset(metrics);
            Some(start)
        })
        .collect()
}

/// Displacement of the item at `index` while another item travels `from -> to`
///
/// Items the dragged one passes over make room for it: they move back by
/// `offset` when it travels forward, and forward when it travels back. The
/// dragged item itself and everything outside the span stay put.
pub fn sibling_shift(index: usize, from: usize, to: usize, offset: f64) -> f64 {
    if index == from {
        0.0
    } else if from < to && index > from && index <= to {
        -offset
    } else if to < from && index >= to && index < from {
        offset
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_offset_collapses_margins() {
        assert_eq!(translate_offset(&BoxMetrics::new(40.0, 4.0, 10.0)), 50.0);
        assert_eq!(translate_offset(&BoxMetrics::new(40.0, 10.0, 4.0)), 50.0);
        assert_eq!(translate_offset(&BoxMetrics::plain(3.0)), 3.0);
    }

    #[test]
    fn test_boundaries_accumulate() {
        let items = [
            BoxMetrics::plain(1.0),
            BoxMetrics::plain(3.0),
            BoxMetrics::new(2.0, 1.0, 0.0),
        ];
        assert_eq!(boundaries(&items, 0.0), vec![0.0, 1.0, 4.0]);
        assert_eq!(boundaries(&items, 10.0), vec![10.0, 11.0, 14.0]);
        assert!(boundaries(&[], 5.0).is_empty());
    }

    #[test]
    fn test_sibling_shift_forward_drag() {
        // item 1 dragged down to slot 3
        let shifts: Vec<f64> = (0..5).map(|i| sibling_shift(i, 1, 3, 2.0)).collect();
        assert_eq!(shifts, vec![0.0, 0.0, -2.0, -2.0, 0.0]);
    }

    #[test]
    fn test_sibling_shift_backward_drag() {
        // item 3 dragged up to slot 0
        let shifts: Vec<f64> = (0..5).map(|i| sibling_shift(i, 3, 0, 2.0)).collect();
        assert_eq!(shifts, vec![2.0, 2.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_sibling_shift_in_place() {
        assert!((0..4).all(|i| sibling_shift(i, 2, 2, 5.0) == 0.0));
    }
}
