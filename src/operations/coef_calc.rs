use rayon::prelude::*;

use crate::error::{OperationError, Result};
use crate::field::{CoefField, CoefFormat};
use crate::geometry::{Cage, PixelRect};

use super::green_coords::compute_region;

/// Parameters controlling how a coefficient field is computed.
#[derive(Debug, Clone, Copy)]
pub struct CoefCalcParams {
    /// Width and height of the tiles handed to worker threads.
    pub tile_size: (u32, u32),
    /// Worker thread count; `None` uses rayon's default.
    pub threads: Option<usize>,
    /// Drop NaN vertex contributions instead of accumulating them.
    ///
    /// Edge coefficients are always NaN-guarded. Vertex coefficients are not
    /// by default, so a round-off NaN surfaces in the output instead of
    /// silently biasing the weights.
    pub guard_vertex_nan: bool,
}

impl Default for CoefCalcParams {
    fn default() -> Self {
        Self {
            tile_size: (64, 64),
            threads: None,
            guard_vertex_nan: false,
        }
    }
}

/// Computes the Green-coordinate coefficient field of a cage over a pixel
/// region.
///
/// Every pixel inside the cage receives `n` vertex coefficients followed by
/// `n` edge coefficients; pixels outside keep all `2n` channels at zero.
///
/// # Example
///
/// ```
/// use cagefield::geometry::{Cage, PixelRect};
/// use cagefield::math::Point2;
/// use cagefield::operations::CageCoefCalc;
///
/// let cage = Cage::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(0.0, 10.0),
/// ])?;
/// let field = CageCoefCalc::new()
///     .with_cage(&cage)
///     .execute(PixelRect::new(0, 0, 20, 20))?;
/// let center = field.pixel(5, 5).expect("inside region");
/// assert!((center.vertex_sum() - 1.0).abs() < 1e-4);
/// # Ok::<(), cagefield::CageFieldError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CageCoefCalc<'a> {
    cage: Option<&'a Cage>,
    params: CoefCalcParams,
}

impl<'a> CageCoefCalc<'a> {
    /// Creates a calculator with default parameters and no cage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cage configuration.
    #[must_use]
    pub fn with_cage(mut self, cage: &'a Cage) -> Self {
        self.cage = Some(cage);
        self
    }

    /// Sets custom computation parameters.
    #[must_use]
    pub fn with_params(mut self, params: CoefCalcParams) -> Self {
        self.params = params;
        self
    }

    fn cage(&self) -> Result<&'a Cage> {
        self.cage.ok_or_else(|| OperationError::MissingCage.into())
    }

    /// Declares the output channel layout (`2n` floats per pixel).
    ///
    /// # Errors
    ///
    /// Returns `OperationError::MissingCage` if no cage is set.
    pub fn prepare(&self) -> Result<CoefFormat> {
        Ok(CoefFormat::new(self.cage()?.vertex_count()))
    }

    /// The region where coefficients can be non-zero.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::MissingCage` if no cage is set.
    pub fn bounding_box(&self) -> Result<PixelRect> {
        Ok(self.cage()?.bounding_box())
    }

    /// Computes the coefficient field for `region`.
    ///
    /// The region is split into tiles computed on a thread pool; the result is
    /// identical to a sequential pass for any tile size.
    ///
    /// # Errors
    ///
    /// - `OperationError::MissingCage` if no cage is set
    /// - `OperationError::InvalidInput` if `threads` is `Some(0)`
    /// - `OperationError::Failed` if the thread pool cannot be built
    #[tracing::instrument(skip(self))]
    pub fn execute(&self, region: PixelRect) -> Result<CoefField> {
        let cage = self.cage()?;
        let guard = self.params.guard_vertex_nan;
        let (tile_w, tile_h) = self.params.tile_size;
        let tiles = region.tiles(tile_w, tile_h);

        if tiles.len() <= 1 {
            return Ok(compute_region(cage, region, guard));
        }

        let pool = build_thread_pool(self.params.threads)?;
        tracing::debug!(
            tiles = tiles.len(),
            threads = pool.current_num_threads(),
            vertices = cage.vertex_count(),
            "computing cage coefficients"
        );

        let computed = pool.install(|| {
            tiles
                .par_iter()
                .map(|tile| compute_region(cage, *tile, guard))
                .collect::<Vec<_>>()
        });

        let mut field = CoefField::zeroed(region, CoefFormat::new(cage.vertex_count()));
        for tile in &computed {
            field.blit(tile)?;
        }
        Ok(field)
    }
}

fn build_thread_pool(threads: Option<usize>) -> Result<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(OperationError::InvalidInput(
            "thread count must be >= 1 when set".to_owned(),
        )
        .into());
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| {
            OperationError::Failed(format!("failed to build rayon thread pool: {e}")).into()
        })
}
