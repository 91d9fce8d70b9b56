// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all abmag-related errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbmagError {
    #[error("{0}")]
    FluxDensity(#[from] crate::flux_density::FluxDensityError),

    #[error("{0}")]
    UnitParse(#[from] crate::unit_parsing::UnitParseError),
}
