// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to parse strings into plain numbers or some quantity with a unit.

mod error;
#[cfg(test)]
mod tests;

pub use error::UnitParseError;

use log::debug;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::constants::JY_TO_NJY;

#[derive(Debug, Clone, Copy, PartialEq, EnumIter, EnumString, IntoStaticStr)]
#[allow(non_camel_case_types)]
pub enum FluxDensityFormat {
    /// Janskys
    Jy,

    /// milliJanskys
    mJy,

    /// microJanskys
    uJy,

    /// nanoJanskys
    nJy,
}

impl FluxDensityFormat {
    /// The multiplier that takes a quantity in this unit to nJy.
    fn to_njy(self) -> f64 {
        match self {
            FluxDensityFormat::Jy => JY_TO_NJY,
            FluxDensityFormat::mJy => 1e6,
            FluxDensityFormat::uJy => 1e3,
            FluxDensityFormat::nJy => 1.0,
        }
    }
}

/// Parse a string that may have a unit of flux density attached to it.
pub fn parse_flux_density(s: &str) -> Result<(f64, Option<FluxDensityFormat>), UnitParseError> {
    // Try to parse a naked number.
    let maybe_number: Option<f64> = s.trim().parse().ok();
    if let Some(number) = maybe_number {
        return Ok((number, None));
    };

    // That didn't work; let's search over our supported formats.
    for format in FluxDensityFormat::iter() {
        let format_str: &'static str = format.into();
        let suffix = s
            .trim()
            .trim_start_matches(|c| char::is_numeric(c) || c == '.' || c == '-')
            .trim();
        if suffix.to_uppercase() == format_str.to_uppercase() {
            let prefix = s.trim().trim_end_matches(char::is_alphabetic).trim();
            let number: f64 = match prefix.parse() {
                Ok(n) => n,
                Err(_) => {
                    return Err(UnitParseError::GotFluxUnitButCantParse {
                        input: s.to_string(),
                        unit: format_str,
                    })
                }
            };
            return Ok((number, Some(format)));
        }
    }

    // If we made it this far, we don't know how to parse the string.
    Err(UnitParseError::Unknown {
        input: s.to_string(),
        unit_type: "flux density",
    })
}

/// Parse a string that may have a unit of flux density attached to it,
/// returning the quantity in nJy. A naked number is taken as already being in
/// nJy.
pub fn parse_flux_density_njy(s: &str) -> Result<f64, UnitParseError> {
    let (number, format) = parse_flux_density(s)?;
    match format {
        Some(f) => Ok(number * f.to_njy()),
        None => {
            debug!("No unit on flux density '{}'; assuming nJy", s);
            Ok(number)
        }
    }
}
