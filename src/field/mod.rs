//! The per-pixel coefficient buffer and its channel layout.
//!
//! Each pixel stores `2n` `f32` channels for an `n`-vertex cage:
//! `[vertex_0 .. vertex_{n-1}, edge_0 .. edge_{n-1}]`.

mod coef_field;
mod format;
mod sample;

pub use coef_field::CoefField;
pub use format::CoefFormat;
pub use sample::CoefSample;
