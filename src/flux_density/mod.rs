// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversions between flux densities and AB magnitudes.

mod error;

pub use error::FluxDensityError;

use crate::constants::AB_REFERENCE_FLUX_NJY;

/// Convert a flux density \[nJy\] to an AB magnitude. Definition from Oke &
/// Gunn (1983).
///
/// The flux density must be positive; anything else cannot sit on a
/// logarithmic magnitude scale.
///
/// # Examples
///
/// ```
/// # use abmag::flux_density::*;
/// # use approx::*;
/// # fn main() -> Result<(), FluxDensityError> {
/// let mag = nanojansky_to_ab_mag(3631e9)?;
/// assert_abs_diff_eq!(mag, 0.0, epsilon = 1e-3);
/// # Ok(())
/// # }
/// ```
pub fn nanojansky_to_ab_mag(flux_njy: f64) -> Result<f64, FluxDensityError> {
    if flux_njy <= 0.0 {
        return Err(FluxDensityError::NonPositiveFlux(flux_njy));
    }
    Ok(-2.5 * (flux_njy / *AB_REFERENCE_FLUX_NJY).log10())
}

/// Convert an AB magnitude to a flux density \[nJy\]. Defined for any
/// magnitude; the result is always positive.
///
/// # Examples
///
/// ```
/// # use abmag::flux_density::*;
/// # use approx::*;
/// let flux_njy = ab_mag_to_nanojansky(31.4);
/// assert_abs_diff_eq!(flux_njy, 1.0, epsilon = 1e-9);
/// ```
pub fn ab_mag_to_nanojansky(mag: f64) -> f64 {
    *AB_REFERENCE_FLUX_NJY * 10_f64.powf(mag / -2.5)
}

/// Propagate a flux-density uncertainty \[nJy\] to an AB magnitude
/// uncertainty, to first order.
pub fn nanojansky_to_ab_mag_error(
    flux_njy: f64,
    flux_err_njy: f64,
) -> Result<f64, FluxDensityError> {
    if flux_njy <= 0.0 {
        return Err(FluxDensityError::NonPositiveFlux(flux_njy));
    }
    if flux_err_njy < 0.0 {
        return Err(FluxDensityError::NegativeFluxError(flux_err_njy));
    }
    Ok(2.5 / std::f64::consts::LN_10 * (flux_err_njy / flux_njy))
}
