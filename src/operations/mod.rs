mod coef_calc;
pub mod green_coords;

pub use coef_calc::{CageCoefCalc, CoefCalcParams};
