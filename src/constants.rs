// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Useful constants.
//!
//! All constants *must* be double precision. `abmag` does all of its
//! calculations in double precision.

/// The AB magnitude zero point \[mag\]. Oke & Gunn (1983) define
/// m_AB = -2.5 log10(f_nu) - 48.6, where f_nu is in erg s^-1 cm^-2 Hz^-1.
pub const AB_ZERO_POINT_MAG: f64 = 48.6;

/// Converts a flux density in erg s^-1 cm^-2 Hz^-1 to Jy.
pub const CGS_TO_JY: f64 = 1e23;

/// Converts a flux density in Jy to nJy.
pub const JY_TO_NJY: f64 = 1e9;

// `powf` can't be used in a `const` expression; the derived zero-point flux
// is computed on first use instead.
lazy_static::lazy_static! {
    /// The flux density corresponding to AB magnitude 0 \[nJy\]. Commonly
    /// approximated as 3631 Jy.
    pub static ref AB_REFERENCE_FLUX_NJY: f64 =
        CGS_TO_JY * 10_f64.powf(AB_ZERO_POINT_MAG / -2.5) * JY_TO_NJY;
}
