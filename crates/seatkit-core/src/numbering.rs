//! Seat numbering conventions: row labels, next-row suggestion, and gap
//! detection.
//!
//! Rows are labeled alphabetically, `A..Z` then `AA, AB, .. AZ, BA ..` —
//! bijective base-26, so the sequence is deterministic well past `AA`
//! (`ZZ` is followed by `AAA`). Within a row, seat numbers start at 1.
//!
//! Gap detection is a diagnostic for the layout overview: duplicate or
//! non-contiguous seat numbers are tolerated, only flagged.

use std::collections::BTreeSet;

use crate::model::VenueLayout;

/// A suggested row/number pair for the next seat to place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextSeat {
    pub row: String,
    pub number: u32,
}

/// Returns the row label for a zero-based row index.
///
/// Index 0 is `A`, 25 is `Z`, 26 is `AA`, 51 is `AZ`, 52 is `BA`.
pub fn row_label(index: usize) -> String {
    let mut n = index as i64;
    let mut out = Vec::new();
    loop {
        out.push(b'A' + (n % 26) as u8);
        n = n / 26 - 1;
        if n < 0 {
            break;
        }
    }
    out.reverse();
    // Safe: only ASCII letters pushed above.
    String::from_utf8(out).unwrap_or_default()
}

/// First row label not already used by a seat in the layout.
pub fn next_available_row(layout: &VenueLayout) -> String {
    let used = layout.used_row_labels();
    for index in 0.. {
        let label = row_label(index);
        if !used.iter().any(|r| *r == label) {
            return label;
        }
    }
    unreachable!("row label space is unbounded")
}

/// Suggests where the next seat goes: first unused row, seat number 1.
pub fn next_seat(layout: &VenueLayout) -> NextSeat {
    NextSeat {
        row: next_available_row(layout),
        number: 1,
    }
}

/// Missing seat numbers within a row, between the row's min and max.
///
/// A gap is any integer in `[min(seatNumber), max(seatNumber)]` not present
/// among the row's existing seat numbers. Rows with fewer than two distinct
/// numbers report no gaps.
pub fn row_gaps(layout: &VenueLayout, row: &str) -> Vec<u32> {
    let numbers: BTreeSet<u32> = layout
        .seats_in_row(row)
        .filter_map(|s| s.seat_number)
        .collect();
    let (Some(&min), Some(&max)) = (numbers.first(), numbers.last()) else {
        return Vec::new();
    };
    (min..=max).filter(|n| !numbers.contains(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LayoutItem;

    #[test]
    fn labels_roll_over_like_spreadsheet_columns() {
        assert_eq!(row_label(0), "A");
        assert_eq!(row_label(25), "Z");
        assert_eq!(row_label(26), "AA");
        assert_eq!(row_label(27), "AB");
        assert_eq!(row_label(51), "AZ");
        assert_eq!(row_label(52), "BA");
        assert_eq!(row_label(26 + 26 * 26 - 1), "ZZ");
        assert_eq!(row_label(26 + 26 * 26), "AAA");
    }

    #[test]
    fn next_row_skips_used_rows() {
        let mut layout = VenueLayout::new("test");
        layout.items.push(LayoutItem::seat(0.0, 0.0, 20.0, 20.0, "A", 1));
        layout.items.push(LayoutItem::seat(20.0, 0.0, 20.0, 20.0, "A", 2));
        layout.items.push(LayoutItem::seat(0.0, 20.0, 20.0, 20.0, "B", 1));
        assert_eq!(next_available_row(&layout), "C");
        assert_eq!(next_seat(&layout), NextSeat { row: "C".into(), number: 1 });
    }

    #[test]
    fn next_row_on_empty_layout_is_a() {
        let layout = VenueLayout::new("test");
        assert_eq!(next_available_row(&layout), "A");
    }

    #[test]
    fn next_row_fills_holes_first() {
        let mut layout = VenueLayout::new("test");
        layout.items.push(LayoutItem::seat(0.0, 0.0, 20.0, 20.0, "B", 1));
        assert_eq!(next_available_row(&layout), "A");
    }

    #[test]
    fn gap_detection_reports_missing_numbers() {
        let mut layout = VenueLayout::new("test");
        layout.items.push(LayoutItem::seat(0.0, 0.0, 20.0, 20.0, "A", 1));
        layout.items.push(LayoutItem::seat(40.0, 0.0, 20.0, 20.0, "A", 3));
        assert_eq!(row_gaps(&layout, "A"), vec![2]);
    }

    #[test]
    fn contiguous_row_has_no_gaps() {
        let mut layout = VenueLayout::new("test");
        for n in 1..=4 {
            layout
                .items
                .push(LayoutItem::seat(n as f64 * 20.0, 0.0, 20.0, 20.0, "A", n));
        }
        assert!(row_gaps(&layout, "A").is_empty());
    }

    #[test]
    fn duplicates_are_tolerated() {
        let mut layout = VenueLayout::new("test");
        layout.items.push(LayoutItem::seat(0.0, 0.0, 20.0, 20.0, "A", 2));
        layout.items.push(LayoutItem::seat(20.0, 0.0, 20.0, 20.0, "A", 2));
        layout.items.push(LayoutItem::seat(40.0, 0.0, 20.0, 20.0, "A", 4));
        assert_eq!(row_gaps(&layout, "A"), vec![3]);
    }

    #[test]
    fn unknown_row_has_no_gaps() {
        let layout = VenueLayout::new("test");
        assert!(row_gaps(&layout, "Q").is_empty());
    }
}
