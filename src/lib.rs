//! Green-coordinate coefficient fields for cage-based image deformation.
//!
//! A [`geometry::Cage`] describes a closed polygon. [`operations::CageCoefCalc`]
//! computes, for every pixel of a [`geometry::PixelRect`] inside the cage, one
//! coefficient per vertex and one per edge. A deformation stage later
//! reconstructs each pixel from those coefficients and the moved cage
//! ([`field::CoefSample::deform`]).

pub mod error;
pub mod field;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{CageFieldError, Result};
