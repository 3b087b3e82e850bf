//! SVG projection of a venue layout.
//!
//! Renders the canvas at `canvasW x canvasH` inside a `viewBox`, scaled to
//! its container with the aspect ratio preserved. Seats project as circles,
//! everything else as rectangles; rotation is applied about each item's own
//! center. Items are emitted in layout order, which is the z-order.

use std::fmt::Write as _;

use seatkit_core::pricing::{effective_price, format_price};
use seatkit_core::{DecorItem, ItemType, LayoutItem, SeatCategory, VenueLayout};

/// Fixed fill used when an item's category does not resolve.
pub fn default_fill(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Seat => "#4ade80",
        ItemType::Table => "#f59e0b",
        ItemType::Booth => "#7dd3fc",
        ItemType::Stage => "#1e293b",
        ItemType::Screen => "#475569",
        ItemType::Entry | ItemType::Exit => "#6b7280",
        ItemType::Washroom => "#9ca3af",
    }
}

pub(crate) fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Tooltip text: label (or type), category name when resolved, effective
/// price when set.
fn tooltip(item: &LayoutItem, category: Option<&SeatCategory>, price: Option<f64>) -> String {
    let mut parts = vec![format!(
        "{} ({})",
        item.display_label(),
        item.item_type.display_name()
    )];
    if let Some(cat) = category {
        parts.push(cat.name.clone());
    }
    if price.is_some() {
        parts.push(format_price(price));
    }
    parts.join(" | ")
}

fn render_item(
    out: &mut String,
    item: &LayoutItem,
    categories: &std::collections::HashMap<&str, &SeatCategory>,
) {
    let category = item
        .category_id
        .as_deref()
        .and_then(|id| categories.get(id).copied());
    let fill = category
        .map(|c| c.color.as_str())
        .unwrap_or_else(|| default_fill(item.item_type));
    let price = effective_price(item, categories);
    let center = item.center();

    let transform = if item.rotation != 0.0 {
        format!(
            " transform=\"rotate({} {} {})\"",
            item.rotation, center.x, center.y
        )
    } else {
        String::new()
    };

    let _ = write!(out, "<g{}>", transform);
    let _ = write!(
        out,
        "<title>{}</title>",
        xml_escape(&tooltip(item, category, price))
    );
    if item.item_type == ItemType::Seat {
        let radius = item.w.min(item.h) / 2.0;
        let _ = write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            center.x, center.y, radius, xml_escape(fill)
        );
    } else {
        let _ = write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            item.x, item.y, item.w, item.h, xml_escape(fill)
        );
    }
    let font_size = (item.w.min(item.h) * 0.35).clamp(6.0, 16.0);
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>",
        center.x,
        center.y,
        font_size,
        xml_escape(&item.display_label())
    );
    out.push_str("</g>");
}

/// Renders the whole layout as a standalone SVG document.
pub fn render_layout(layout: &VenueLayout) -> String {
    render_layout_with_decor(layout, &[])
}

/// Renders the layout with a per-event decor overlay on top. An empty decor
/// slice renders exactly like [`render_layout`].
pub fn render_layout_with_decor(layout: &VenueLayout, decor: &[DecorItem]) -> String {
    let categories = layout.categories_by_id();
    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" preserveAspectRatio=\"xMidYMid meet\">",
        layout.canvas_w, layout.canvas_h
    );
    for item in &layout.items {
        render_item(&mut out, item, &categories);
    }
    out.push_str(&crate::decor::render_decor_overlay(decor));
    out.push_str("</svg>");
    out
}
