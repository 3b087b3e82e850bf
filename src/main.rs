//! Diagnostic CLI over a layout document: summarize a layout JSON file and
//! optionally render it to SVG.
//!
//! Usage: `seatkit <layout.json> [--svg <out.svg>]`

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use tracing::info;

use seatkit::{
    build_legend, init_logging, next_available_row, render_layout, row_gaps, VenueLayout,
};

fn main() -> Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(input) = args.first() else {
        eprintln!("seatkit {} (built {})", env!("CARGO_PKG_VERSION"), env!("BUILD_DATE"));
        eprintln!("Usage: seatkit <layout.json> [--svg <out.svg>]");
        std::process::exit(2);
    };

    let text = std::fs::read_to_string(input).with_context(|| format!("reading {input}"))?;
    let layout: VenueLayout =
        serde_json::from_str(&text).with_context(|| format!("parsing {input}"))?;
    info!(name = %layout.name, items = layout.items.len(), "layout loaded");

    print_summary(&layout);

    if let Some(pos) = args.iter().position(|a| a == "--svg") {
        let Some(out) = args.get(pos + 1) else {
            bail!("--svg requires an output path");
        };
        let svg = render_layout(&layout);
        std::fs::write(out, svg).with_context(|| format!("writing {out}"))?;
        println!("SVG written to {out}");
    }
    Ok(())
}

fn print_summary(layout: &VenueLayout) {
    println!("{} ({}x{})", layout.name, layout.canvas_w, layout.canvas_h);

    let mut counts: BTreeMap<_, usize> = BTreeMap::new();
    for item in &layout.items {
        *counts.entry(item.item_type).or_insert(0) += 1;
    }
    for (item_type, count) in &counts {
        println!("  {:<9} {count}", item_type.display_name());
    }

    println!("Categories:");
    for category in &layout.categories {
        println!(
            "  {} ({}) price {:.2}",
            category.name, category.color, category.price
        );
    }

    println!("Rows:");
    for row in layout.used_row_labels() {
        let gaps = row_gaps(layout, &row);
        if gaps.is_empty() {
            println!("  {row}: complete");
        } else {
            println!("  {row}: missing seats {gaps:?}");
        }
    }
    println!("Next row: {}", next_available_row(layout));

    let legend = build_legend(layout);
    if !legend.is_empty() {
        println!(
            "Legend: {} seat categories, {} non-seat categories",
            legend.seat_categories.len(),
            legend.non_seat_categories.len()
        );
    }
}
