//! Closed-form Green coordinates of a point relative to a polygonal cage.
//!
//! For an edge `v1 -> v2` and a point `p`, with `a = v2 - v1` and
//! `b = v1 - p`, the boundary integrals along `b + t * a` reduce to logs and
//! arctangents of the quadratic `|b + t a|^2 = S + R t + Q t^2`.

use std::f64::consts::PI;

use crate::field::{CoefField, CoefFormat};
use crate::geometry::{Cage, PixelRect};
use crate::math::polygon_2d::is_on_line;
use crate::math::Point2;

/// Contributions of a single cage edge to one point's coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeTerms {
    /// Edge coefficient, zero when the formula produced NaN.
    pub edge: f64,
    /// Amount added to the coefficient of the edge's start vertex.
    pub start: f64,
    /// Amount added to the coefficient of the edge's end vertex.
    pub end: f64,
    /// The point lies on the line through the edge; `start` and `end` are
    /// zero and must not be applied.
    pub collinear: bool,
}

/// Evaluates the edge and vertex terms of edge `v1 -> v2` at `p`.
///
/// A negative discriminant from round-off turns `A0`/`A1` into NaN. The edge
/// coefficient is guarded against it; the vertex terms are returned as
/// computed.
#[must_use]
pub fn edge_terms(v1: &Point2, v2: &Point2, p: &Point2) -> EdgeTerms {
    let a = v2 - v1;
    let b = v1 - p;
    let q = a.norm_squared();
    let s = b.norm_squared();
    let r = 2.0 * a.dot(&b);
    let ba = b.x * a.y - b.y * a.x;
    let srt = (4.0 * s * q - r * r).sqrt();

    let l0 = s.ln();
    let l1 = (s + q + r).ln();
    let a0 = r.atan2(srt) / srt;
    let a1 = (2.0 * q + r).atan2(srt) / srt;
    let a10 = a1 - a0;
    let l10 = l1 - l0;

    let mut edge =
        (1.0 / (4.0 * PI)) * ((4.0 * s - (r * r) / q) * a10 + (r / (2.0 * q)) * l10 + l1 - 2.0);
    if edge.is_nan() {
        edge = 0.0;
    }

    if is_on_line(v1, v2, p) {
        return EdgeTerms {
            edge,
            start: 0.0,
            end: 0.0,
            collinear: true,
        };
    }

    let k = ba / (2.0 * PI);
    EdgeTerms {
        edge,
        start: k * (l10 / (2.0 * q) - a10 * (2.0 + r / q)),
        end: -k * (l10 / (2.0 * q) - a10 * (r / q)),
        collinear: false,
    }
}

/// Accumulates the `2n` coefficients of point `p` into `out`.
///
/// `out` must be zeroed and hold `2 * cage.vertex_count()` channels. Edges are
/// visited in order `0..n`; each adds into the slots of its two endpoints.
/// With `guard_vertex_nan` set, NaN vertex terms are dropped instead of
/// poisoning the accumulated coefficients.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn pixel_coefficients(
    cage: &Cage,
    p: &Point2,
    out: &mut [f32],
    guard_vertex_nan: bool,
) {
    let n = cage.vertex_count();
    debug_assert_eq!(out.len(), 2 * n);

    for j in 0..n {
        let (v1, v2) = cage.edge(j);
        let terms = edge_terms(&v1, &v2, p);
        out[n + j] = terms.edge as f32;

        if terms.collinear {
            continue;
        }
        if guard_vertex_nan && (terms.start.is_nan() || terms.end.is_nan()) {
            continue;
        }
        out[j] += terms.start as f32;
        out[(j + 1) % n] += terms.end as f32;
    }
}

/// Computes the coefficient field of `region` sequentially.
///
/// Pixels outside the cage keep all channels at zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn compute_region(cage: &Cage, region: PixelRect, guard_vertex_nan: bool) -> CoefField {
    let format = CoefFormat::new(cage.vertex_count());
    let mut field = CoefField::zeroed(region, format);
    if region.is_empty() {
        return field;
    }

    let width = region.width as usize;
    for (i, out) in field
        .as_mut_slice()
        .chunks_exact_mut(format.channels())
        .enumerate()
    {
        let x = region.x + (i % width) as i32;
        let y = region.y + (i / width) as i32;
        let (px, py) = (f64::from(x), f64::from(y));
        if cage.contains(px, py) {
            pixel_coefficients(cage, &Point2::new(px, py), out, guard_vertex_nan);
        }
    }
    field
}
