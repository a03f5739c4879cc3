use crate::error::{OperationError, Result};
use crate::math::Point2;

use super::CoefFormat;

/// Borrowed view of one pixel's coefficients.
#[derive(Debug, Clone, Copy)]
pub struct CoefSample<'a> {
    format: CoefFormat,
    data: &'a [f32],
}

impl<'a> CoefSample<'a> {
    pub(crate) fn new(format: CoefFormat, data: &'a [f32]) -> Self {
        Self { format, data }
    }

    /// All `2n` channels.
    #[must_use]
    pub fn channels(&self) -> &'a [f32] {
        self.data
    }

    /// Per-vertex coefficients, in cage vertex order.
    #[must_use]
    pub fn vertex_coefs(&self) -> &'a [f32] {
        &self.data[self.format.vertex_channels()]
    }

    /// Per-edge coefficients, edge `j` running from vertex `j` to `j + 1`.
    #[must_use]
    pub fn edge_coefs(&self) -> &'a [f32] {
        &self.data[self.format.edge_channels()]
    }

    /// Sum of the vertex coefficients, close to 1 for interior points.
    #[must_use]
    pub fn vertex_sum(&self) -> f64 {
        self.vertex_coefs().iter().map(|&c| f64::from(c)).sum()
    }

    /// Whether every channel is exactly zero (pixels outside the cage).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&c| c == 0.0)
    }

    /// Reconstructs the point these coefficients were computed for, relative
    /// to a moved cage.
    ///
    /// `p' = sum_i phi_i * v'_i + sum_j psi_j * (t'_j.y, -t'_j.x)` with
    /// `t'_j = v'_{j+1} - v'_j`. The edge coefficients already carry the source
    /// edge length, so the length-scaled normal of the moved edge is just the
    /// rotated edge vector.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `moved` does not have one
    /// vertex per vertex coefficient.
    pub fn deform(&self, moved: &[Point2]) -> Result<Point2> {
        let n = self.format.vertex_count();
        if moved.len() != n {
            return Err(OperationError::InvalidInput(format!(
                "moved cage has {} vertices, coefficients expect {n}",
                moved.len()
            ))
            .into());
        }

        let mut x = 0.0;
        let mut y = 0.0;
        for (v, &phi) in moved.iter().zip(self.vertex_coefs()) {
            x += f64::from(phi) * v.x;
            y += f64::from(phi) * v.y;
        }
        for (j, &psi) in self.edge_coefs().iter().enumerate() {
            let t = moved[(j + 1) % n] - moved[j];
            x += f64::from(psi) * t.y;
            y -= f64::from(psi) * t.x;
        }
        Ok(Point2::new(x, y))
    }
}
