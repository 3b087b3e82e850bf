//! Decor overlay rendering.
//!
//! Decor items are fixed, non-bookable markers (stage, screens, entry/exit,
//! washroom) fetched per event, independently of the layout document. The
//! overlay is cosmetic: missing or empty data renders nothing, and no error
//! ever surfaces to the end user. Feed normalization happens at the
//! ingestion boundary (see `seatkit_core::model::decor`), so this module
//! only sees well-formed items.

use std::fmt::Write as _;

use seatkit_core::DecorItem;

use crate::svg::default_fill;

/// Renders decor markers as an SVG group fragment. Returns an empty string
/// when there is nothing to draw.
pub fn render_decor_overlay(decor: &[DecorItem]) -> String {
    if decor.is_empty() {
        return String::new();
    }
    let mut out = String::from("<g class=\"decor\" opacity=\"0.9\">");
    for item in decor {
        let _ = write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"2\"/>",
            item.x,
            item.y,
            item.w,
            item.h,
            default_fill(item.item_type)
        );
        if let Some(label) = &item.label {
            let _ = write!(
                out,
                "<text x=\"{}\" y=\"{}\" font-size=\"10\" fill=\"#f8fafc\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>",
                item.x + item.w / 2.0,
                item.y + item.h / 2.0,
                crate::svg::xml_escape(label)
            );
        }
    }
    out.push_str("</g>");
    out
}
