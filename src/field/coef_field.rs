use crate::error::{OperationError, Result};
use crate::geometry::PixelRect;

use super::{CoefFormat, CoefSample};

/// A row-major buffer of coefficient samples covering a pixel rectangle.
///
/// Pixels are addressed in absolute coordinates; the sample for `(x, y)`
/// starts at `((y - region.y) * width + (x - region.x)) * channels`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefField {
    region: PixelRect,
    format: CoefFormat,
    data: Vec<f32>,
}

impl CoefField {
    /// Allocates a field with every channel set to zero.
    #[must_use]
    pub fn zeroed(region: PixelRect, format: CoefFormat) -> Self {
        Self {
            region,
            format,
            data: vec![0.0; region.area() * format.channels()],
        }
    }

    #[must_use]
    pub fn region(&self) -> PixelRect {
        self.region
    }

    #[must_use]
    pub fn format(&self) -> CoefFormat {
        self.format
    }

    /// Raw samples in scanline order, channels interleaved per pixel.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the field, returning the raw samples.
    #[must_use]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    #[allow(clippy::cast_sign_loss)]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if !self.region.contains(x, y) {
            return None;
        }
        let col = (i64::from(x) - i64::from(self.region.x)) as usize;
        let row = (i64::from(y) - i64::from(self.region.y)) as usize;
        Some((row * self.region.width as usize + col) * self.format.channels())
    }

    /// The sample at absolute pixel `(x, y)`, `None` outside the region.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<CoefSample<'_>> {
        let start = self.offset(x, y)?;
        let end = start + self.format.channels();
        Some(CoefSample::new(self.format, &self.data[start..end]))
    }

    /// Mutable channels of absolute pixel `(x, y)`.
    pub fn pixel_mut(&mut self, x: i32, y: i32) -> Option<&mut [f32]> {
        let start = self.offset(x, y)?;
        let end = start + self.format.channels();
        Some(&mut self.data[start..end])
    }

    /// Iterates over scanlines, yielding each row's `y` and its channels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn rows(&self) -> impl Iterator<Item = (i32, &[f32])> + '_ {
        let row_len = (self.region.width as usize * self.format.channels()).max(1);
        self.data
            .chunks_exact(row_len)
            .enumerate()
            .map(move |(i, row)| (self.region.y + i as i32, row))
    }

    /// Iterates over all samples in scanline order with their pixel coordinates.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn samples(&self) -> impl Iterator<Item = (i32, i32, CoefSample<'_>)> + '_ {
        let width = self.region.width as usize;
        let channels = self.format.channels().max(1);
        self.data
            .chunks_exact(channels)
            .enumerate()
            .map(move |(i, chunk)| {
                let x = self.region.x + (i % width) as i32;
                let y = self.region.y + (i / width) as i32;
                (x, y, CoefSample::new(self.format, chunk))
            })
    }

    /// Copies `tile` into the matching pixels of this field.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the formats differ or the
    /// tile is not contained in this field's region.
    pub fn blit(&mut self, tile: &CoefField) -> Result<()> {
        if tile.format != self.format {
            return Err(OperationError::InvalidInput(format!(
                "cannot blit a {}-channel tile into a {}-channel field",
                tile.format.channels(),
                self.format.channels()
            ))
            .into());
        }
        if !self.region.contains_rect(&tile.region) {
            return Err(OperationError::InvalidInput(format!(
                "tile {:?} lies outside field region {:?}",
                tile.region, self.region
            ))
            .into());
        }
        if tile.region.is_empty() {
            return Ok(());
        }

        let row_len = tile.region.width as usize * self.format.channels();
        for (row, src) in tile.data.chunks_exact(row_len).enumerate() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let y = tile.region.y + row as i32;
            let Some(start) = self.offset(tile.region.x, y) else {
                continue;
            };
            self.data[start..start + row_len].copy_from_slice(src);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CageFieldError;

    #[test]
    fn zeroed_has_expected_len() {
        let field = CoefField::zeroed(PixelRect::new(2, 3, 4, 5), CoefFormat::new(3));
        assert_eq!(field.as_slice().len(), 4 * 5 * 6);
        assert!(field.as_slice().iter().all(|&c| c == 0.0));
    }

    #[test]
    fn pixel_addressing_is_absolute() {
        let mut field = CoefField::zeroed(PixelRect::new(-1, 10, 3, 2), CoefFormat::new(3));
        field.pixel_mut(1, 11).unwrap()[4] = 2.5;
        assert!(field.pixel(2, 11).is_none());
        assert!(field.pixel(-2, 10).is_none());
        // Last pixel of the second row, channel 4.
        assert!((field.as_slice()[5 * 6 + 4] - 2.5).abs() < f32::EPSILON);
        assert!((field.pixel(1, 11).unwrap().edge_coefs()[1] - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn samples_in_scanline_order() {
        let field = CoefField::zeroed(PixelRect::new(5, 7, 2, 2), CoefFormat::new(3));
        let coords: Vec<(i32, i32)> = field.samples().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(5, 7), (6, 7), (5, 8), (6, 8)]);
    }

    #[test]
    fn rows_yield_scanlines() {
        let mut field = CoefField::zeroed(PixelRect::new(4, -2, 3, 2), CoefFormat::new(3));
        field.pixel_mut(5, -1).unwrap()[0] = 7.0;
        let rows: Vec<(i32, &[f32])> = field.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, -2);
        assert_eq!(rows[1].0, -1);
        assert_eq!(rows[1].1.len(), 3 * 6);
        assert!(rows[0].1.iter().all(|&c| c == 0.0));
        assert!((rows[1].1[6] - 7.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rows_of_empty_field() {
        let field = CoefField::zeroed(PixelRect::new(0, 0, 0, 3), CoefFormat::new(3));
        assert_eq!(field.rows().count(), 0);
    }

    #[test]
    fn blit_copies_rows() {
        let format = CoefFormat::new(3);
        let mut field = CoefField::zeroed(PixelRect::new(0, 0, 4, 4), format);
        let mut tile = CoefField::zeroed(PixelRect::new(2, 1, 2, 2), format);
        for c in tile.as_mut_slice() {
            *c = 1.0;
        }
        field.blit(&tile).unwrap();
        assert!(field.pixel(2, 1).unwrap().vertex_coefs().iter().all(|&c| c == 1.0));
        assert!(field.pixel(3, 2).unwrap().edge_coefs().iter().all(|&c| c == 1.0));
        assert!(field.pixel(1, 1).unwrap().is_zero());
        assert!(field.pixel(2, 3).unwrap().is_zero());
    }

    #[test]
    fn blit_rejects_outside_tile() {
        let format = CoefFormat::new(3);
        let mut field = CoefField::zeroed(PixelRect::new(0, 0, 4, 4), format);
        let tile = CoefField::zeroed(PixelRect::new(3, 3, 2, 2), format);
        assert!(matches!(
            field.blit(&tile),
            Err(CageFieldError::Operation(OperationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn blit_rejects_format_mismatch() {
        let mut field = CoefField::zeroed(PixelRect::new(0, 0, 4, 4), CoefFormat::new(3));
        let tile = CoefField::zeroed(PixelRect::new(0, 0, 2, 2), CoefFormat::new(4));
        assert!(field.blit(&tile).is_err());
    }
}
