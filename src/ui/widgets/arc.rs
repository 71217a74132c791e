//! Circular progress arc drawn on a braille canvas.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock. Canvas
//! coordinates are unit-less with the circle centered on the origin.

use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};

/// Samples per full turn on the outermost ring.
///
pub const ARC_RESOLUTION: usize = 720;

/// Radial step between concentric rings of a thick arc.
///
const RING_STEP: f64 = 0.012;

/// Points along an arc of `radius` from `start_degrees` over `sweep_degrees`.
///
pub fn arc_points(
    radius: f64,
    start_degrees: f64,
    sweep_degrees: f64,
    steps: usize,
) -> Vec<(f64, f64)> {
    let sweep = sweep_degrees.clamp(0.0, 360.0);
    if sweep <= 0.0 || radius <= 0.0 {
        return vec![];
    }
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let theta = (start_degrees + sweep * i as f64 / steps as f64).to_radians();
            (radius * theta.sin(), radius * theta.cos())
        })
        .collect()
}

/// Thick arc between `inner_radius` and `outer_radius`.
///
#[derive(Debug, Clone)]
pub struct ArcShape {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_degrees: f64,
    pub sweep_degrees: f64,
    pub color: Color,
}

impl ArcShape {
    /// Full ring.
    ///
    pub fn ring(inner_radius: f64, outer_radius: f64, color: Color) -> Self {
        ArcShape {
            inner_radius,
            outer_radius,
            start_degrees: 0.0,
            sweep_degrees: 360.0,
            color,
        }
    }

    /// Filled disc.
    ///
    pub fn disc(radius: f64, color: Color) -> Self {
        ArcShape::ring(0.0, radius, color)
    }

    /// Arc starting at 12 o'clock and sweeping clockwise.
    ///
    pub fn progress(inner_radius: f64, outer_radius: f64, sweep_degrees: f64, color: Color) -> Self {
        ArcShape {
            inner_radius,
            outer_radius,
            start_degrees: 0.0,
            sweep_degrees,
            color,
        }
    }

    fn radii(&self) -> Vec<f64> {
        let mut radii = vec![];
        let mut radius = self.outer_radius;
        while radius >= self.inner_radius && radius > 0.0 {
            radii.push(radius);
            radius -= RING_STEP;
        }
        if radii.is_empty() {
            radii.push(self.outer_radius);
        }
        radii
    }
}

impl Shape for ArcShape {
    fn draw(&self, painter: &mut Painter) {
        if self.sweep_degrees <= 0.0 {
            return;
        }
        for radius in self.radii() {
            let steps = (ARC_RESOLUTION as f64 * radius * self.sweep_degrees / 360.0).ceil() as usize;
            for (x, y) in arc_points(radius, self.start_degrees, self.sweep_degrees, steps) {
                if let Some((px, py)) = painter.get_point(x, y) {
                    painter.paint(px, py, self.color);
                }
            }
        }
    }
}
