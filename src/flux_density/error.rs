// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FluxDensityError {
    #[error("Cannot convert a non-positive flux density to an AB magnitude; got {0:?} nJy")]
    NonPositiveFlux(f64),

    #[error("A flux-density uncertainty cannot be negative; got {0:?} nJy")]
    NegativeFluxError(f64),
}
