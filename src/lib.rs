// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Conversions between astronomical flux densities and AB magnitudes.

The AB magnitude system is defined by Oke & Gunn (1983): a source with a flux
density of ~3631 Jy has magnitude 0 in every band.
 */

pub mod constants;
mod error;
pub mod flux_density;
pub mod unit_parsing;

// Re-exports.
pub use constants::*;
pub use error::AbmagError;
pub use flux_density::*;
pub use unit_parsing::{parse_flux_density, parse_flux_density_njy, FluxDensityFormat};

/// Parse a flux-density string (e.g. "3631 Jy", "250uJy", "1e5") and convert
/// it to an AB magnitude. A naked number is taken as being in nJy.
///
/// # Examples
///
/// ```
/// # use approx::*;
/// # fn main() -> Result<(), abmag::AbmagError> {
/// let mag = abmag::str_to_ab_mag("3631 Jy")?;
/// assert_abs_diff_eq!(mag, 0.0, epsilon = 1e-3);
/// # Ok(())
/// # }
/// ```
pub fn str_to_ab_mag(s: &str) -> Result<f64, AbmagError> {
    let flux_njy = unit_parsing::parse_flux_density_njy(s)?;
    let mag = flux_density::nanojansky_to_ab_mag(flux_njy)?;
    Ok(mag)
}
