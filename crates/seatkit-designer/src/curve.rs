//! Curve arrangement: repositions a group of items so their centers lie
//! evenly spaced along a circular arc.
//!
//! The arc's chord connects the centers of the first and last selected items
//! (in current layout order); those two endpoints stay where they are. The
//! curvature parameter controls the sagitta — the bulge height at the middle
//! of the chord — as a fraction of half the chord length: `0.0` is a straight
//! line, `1.0` a semicircle, negative values bow the other way.
//!
//! Given the same items and parameters the arrangement is idempotent, since
//! it only depends on the two fixed endpoints and the item count.

use std::collections::HashSet;

use tracing::debug;

use seatkit_core::{normalize_angle, rotate_point, LayoutError, Point, Result, VenueLayout};

/// Parameters for a curve arrangement.
#[derive(Debug, Clone, Copy)]
pub struct CurveArrangeParams {
    /// Sagitta as a fraction of half the chord length. Sign picks the side
    /// of the chord the arc bows toward.
    pub curvature: f64,
    /// Also rotate each item to face along the arc's tangent.
    pub orient_to_tangent: bool,
}

impl CurveArrangeParams {
    pub fn new(curvature: f64) -> Self {
        Self {
            curvature,
            orient_to_tangent: false,
        }
    }

    pub fn with_tangent_rotation(curvature: f64) -> Self {
        Self {
            curvature,
            orient_to_tangent: true,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.curvature.is_finite()
    }
}

/// Arranges the selected items' centers along an arc.
///
/// Items are processed in current layout order; the first and last keep
/// their positions. Fewer than two resolvable items is an error; a
/// zero-length chord (first and last centers coincide) is a no-op.
pub fn arrange_along_arc(
    layout: &mut VenueLayout,
    ids: &HashSet<String>,
    params: CurveArrangeParams,
) -> Result<()> {
    if !params.is_valid() {
        return Err(LayoutError::InvalidNumericInput {
            input: params.curvature.to_string(),
        });
    }
    let indices: Vec<usize> = layout
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| ids.contains(&item.id))
        .map(|(idx, _)| idx)
        .collect();
    if indices.len() < 2 {
        return Err(LayoutError::TooFewItems {
            count: indices.len(),
        });
    }

    let first = layout.items[indices[0]].center();
    let last = layout.items[indices[indices.len() - 1]].center();
    let chord = first.distance_to(&last);
    if chord < 1e-9 {
        debug!("curve arrangement: degenerate zero-length chord, skipping");
        return Ok(());
    }

    let centers = arc_centers(first, last, params.curvature, indices.len());
    for (&idx, placed) in indices.iter().zip(&centers) {
        let item = &mut layout.items[idx];
        item.x = placed.position.x - item.w / 2.0;
        item.y = placed.position.y - item.h / 2.0;
        if params.orient_to_tangent {
            item.rotation = normalize_angle(placed.tangent_degrees);
        }
    }
    Ok(())
}

struct PlacedCenter {
    position: Point,
    tangent_degrees: f64,
}

/// Evenly spaced points from `first` to `last` along the arc with the given
/// relative sagitta, with the travel-direction tangent angle at each point.
fn arc_centers(first: Point, last: Point, curvature: f64, count: usize) -> Vec<PlacedCenter> {
    let chord = first.distance_to(&last);
    let dir_x = (last.x - first.x) / chord;
    let dir_y = (last.y - first.y) / chord;
    let line_angle = dir_y.atan2(dir_x).to_degrees();

    let sagitta = curvature * chord / 2.0;
    if sagitta.abs() < 1e-9 {
        // Straight line: plain interpolation along the chord.
        return (0..count)
            .map(|k| {
                let t = k as f64 / (count - 1) as f64;
                PlacedCenter {
                    position: Point::new(
                        first.x + (last.x - first.x) * t,
                        first.y + (last.y - first.y) * t,
                    ),
                    tangent_degrees: line_angle,
                }
            })
            .collect();
    }

    let s = sagitta.abs();
    let radius = s / 2.0 + chord * chord / (8.0 * s);
    // Left-hand normal of the chord; the signed sagitta picks the side.
    let normal = Point::new(-dir_y, dir_x);
    let side = sagitta.signum();
    let mid = Point::new((first.x + last.x) / 2.0, (first.y + last.y) / 2.0);
    // Circle center sits opposite the apex; (radius - s) goes negative for
    // arcs larger than a semicircle, which flips it to the apex side.
    let center = Point::new(
        mid.x - normal.x * side * (radius - s),
        mid.y - normal.y * side * (radius - s),
    );

    let half = (chord / (2.0 * radius)).clamp(-1.0, 1.0).asin();
    let total = if s <= chord / 2.0 {
        2.0 * half
    } else {
        2.0 * (std::f64::consts::PI - half)
    };
    let total_deg = total.to_degrees();

    // Pick the sweep direction that actually lands on `last`.
    let forward = rotate_point(first, center, total_deg);
    let sweep = if forward.distance_to(&last) <= 1e-6 * radius.max(1.0) {
        total_deg
    } else {
        -total_deg
    };

    (0..count)
        .map(|k| {
            let t = k as f64 / (count - 1) as f64;
            let position = rotate_point(first, center, sweep * t);
            let radial = (position.y - center.y).atan2(position.x - center.x).to_degrees();
            PlacedCenter {
                position,
                tangent_degrees: radial + 90.0 * sweep.signum(),
            }
        })
        .collect()
}
