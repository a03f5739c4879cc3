/// An integer pixel rectangle: origin plus extent.
///
/// Covers the pixels `x..x + width` by `y..y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    /// Left column.
    pub x: i32,
    /// Top row.
    pub y: i32,
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl PixelRect {
    /// Creates a new rectangle.
    #[must_use]
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels covered.
    #[must_use]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// One past the rightmost column.
    #[must_use]
    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// One past the bottom row.
    #[must_use]
    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    /// Whether pixel `(x, y)` lies in the rectangle.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && i64::from(x) < self.right()
            && i64::from(y) < self.bottom()
    }

    /// Whether `other` lies entirely inside this rectangle.
    #[must_use]
    pub fn contains_rect(&self, other: &PixelRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Overlap of two rectangles, `None` when they do not overlap.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn intersect(&self, other: &PixelRect) -> Option<PixelRect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= i64::from(x0) || y1 <= i64::from(y0) {
            return None;
        }
        Some(PixelRect::new(
            x0,
            y0,
            (x1 - i64::from(x0)) as u32,
            (y1 - i64::from(y0)) as u32,
        ))
    }

    /// Partitions the rectangle into disjoint tiles in row-major order.
    ///
    /// Tiles on the right and bottom edges are clipped. Zero tile sizes are
    /// treated as 1.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn tiles(&self, tile_width: u32, tile_height: u32) -> Vec<PixelRect> {
        if self.is_empty() {
            return Vec::new();
        }
        let tw = tile_width.max(1);
        let th = tile_height.max(1);
        let mut tiles = Vec::with_capacity(
            self.width.div_ceil(tw) as usize * self.height.div_ceil(th) as usize,
        );
        let mut dy = 0;
        while dy < self.height {
            let h = th.min(self.height - dy);
            let mut dx = 0;
            while dx < self.width {
                let w = tw.min(self.width - dx);
                tiles.push(PixelRect::new(
                    self.x + dx as i32,
                    self.y + dy as i32,
                    w,
                    h,
                ));
                dx += w;
            }
            dy += h;
        }
        tiles
    }
}
