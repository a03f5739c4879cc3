use std::ops::Range;

/// Channel layout of a coefficient field for a cage of `vertex_count` vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoefFormat {
    vertex_count: usize,
}

impl CoefFormat {
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self { vertex_count }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Channels per pixel: one per vertex plus one per edge.
    #[must_use]
    pub fn channels(&self) -> usize {
        2 * self.vertex_count
    }

    /// Channel range holding the vertex coefficients.
    #[must_use]
    pub fn vertex_channels(&self) -> Range<usize> {
        0..self.vertex_count
    }

    /// Channel range holding the edge coefficients.
    #[must_use]
    pub fn edge_channels(&self) -> Range<usize> {
        self.vertex_count..self.channels()
    }

    /// Size of one pixel in bytes (32-bit float channels).
    #[must_use]
    pub fn bytes_per_pixel(&self) -> usize {
        self.channels() * std::mem::size_of::<f32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_for_square_cage() {
        let format = CoefFormat::new(4);
        assert_eq!(format.channels(), 8);
        assert_eq!(format.vertex_channels(), 0..4);
        assert_eq!(format.edge_channels(), 4..8);
        assert_eq!(format.bytes_per_pixel(), 32);
    }
}
