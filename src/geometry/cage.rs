use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{bounds, point_in_polygon, signed_area_2d};
use crate::math::{Point2, TOLERANCE};

use super::PixelRect;

/// A closed polygonal cage driving a deformation.
///
/// Edge `j` connects vertex `j` to vertex `(j + 1) % n`. The vertex count is
/// fixed once the cage is built.
#[derive(Debug, Clone)]
pub struct Cage {
    vertices: Vec<Point2>,
    reversed: bool,
}

impl Cage {
    /// Creates a cage, normalizing its winding for coefficient computation.
    ///
    /// The coefficient formulas form a positive partition of unity only when
    /// the polygon has a negative shoelace area. A cage with positive area has
    /// its vertex order reversed (vertex `i` becomes vertex `n - 1 - i`); use
    /// [`Cage::source_index`] to map channels back to the input order.
    ///
    /// # Errors
    ///
    /// - `GeometryError::TooFewVertices` if fewer than 3 vertices are given
    /// - `GeometryError::NonFinite` if any coordinate is NaN or infinite
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        let mut cage = Self::with_orientation_kept(vertices)?;
        if cage.signed_area() > 0.0 {
            tracing::debug!(
                vertices = cage.vertices.len(),
                "reversing cage winding for coefficient computation"
            );
            cage.vertices.reverse();
            cage.reversed = true;
        }
        Ok(cage)
    }

    /// Creates a cage keeping the vertex order exactly as given.
    ///
    /// With the opposite winding every vertex coefficient changes sign.
    ///
    /// # Errors
    ///
    /// Same as [`Cage::new`].
    pub fn with_orientation_kept(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()).into());
        }
        if let Some((index, v)) = vertices
            .iter()
            .enumerate()
            .find(|(_, v)| !v.x.is_finite() || !v.y.is_finite())
        {
            return Err(GeometryError::NonFinite {
                index,
                x: v.x,
                y: v.y,
            }
            .into());
        }

        let n = vertices.len();
        for j in 0..n {
            let v1 = vertices[j];
            let v2 = vertices[(j + 1) % n];
            if (v2 - v1).norm_squared() < TOLERANCE * TOLERANCE {
                tracing::warn!(
                    edge = j,
                    x = v1.x,
                    y = v1.y,
                    "degenerate cage edge, its edge coefficient will be zero"
                );
            }
        }

        Ok(Self {
            vertices,
            reversed: false,
        })
    }

    /// Number of vertices (and of edges).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The vertices in coefficient channel order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns vertex `i`, wrapping around the cage.
    #[must_use]
    pub fn vertex(&self, i: usize) -> Point2 {
        self.vertices[i % self.vertices.len()]
    }

    /// Returns the endpoints of edge `j`.
    #[must_use]
    pub fn edge(&self, j: usize) -> (Point2, Point2) {
        (self.vertex(j), self.vertex(j + 1))
    }

    /// Whether [`Cage::new`] reversed the input order.
    #[must_use]
    pub fn was_reversed(&self) -> bool {
        self.reversed
    }

    /// Maps a vertex channel index back to the index in the caller's input.
    #[must_use]
    pub fn source_index(&self, i: usize) -> usize {
        if self.reversed {
            self.vertices.len() - 1 - i
        } else {
            i
        }
    }

    /// Shoelace area of the cage polygon.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Even-odd containment test.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        point_in_polygon(&self.vertices, x, y)
    }

    /// Smallest integer pixel rectangle covering every vertex.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn bounding_box(&self) -> PixelRect {
        let Some((min, max)) = bounds(&self.vertices) else {
            return PixelRect::default();
        };
        let x0 = min.x.floor();
        let y0 = min.y.floor();
        let x1 = max.x.ceil();
        let y1 = max.y.ceil();
        PixelRect::new(x0 as i32, y0 as i32, (x1 - x0) as u32, (y1 - y0) as u32)
    }
}
