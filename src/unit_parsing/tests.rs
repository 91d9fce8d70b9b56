// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::*;

use approx::assert_abs_diff_eq;

#[test]
fn test_parse_flux_density_str_without_units() {
    let result = parse_flux_density("20");
    assert!(result.is_ok(), "{:?}", result.unwrap_err());
    let pair = result.unwrap();
    assert_abs_diff_eq!(pair.0, 20.0);
    assert_eq!(pair.1, None);

    let result = parse_flux_density("40.0");
    assert!(result.is_ok(), "{:?}", result.unwrap_err());
    let pair = result.unwrap();
    assert_abs_diff_eq!(pair.0, 40.0);
    assert_eq!(pair.1, None);

    let result = parse_flux_density(" 40.0 ");
    assert!(result.is_ok(), "{:?}", result.unwrap_err());
    let pair = result.unwrap();
    assert_abs_diff_eq!(pair.0, 40.0);
    assert_eq!(pair.1, None);
}

#[test]
fn test_parse_flux_density_str_with_units() {
    // Iterate over all possible units.
    for format in FluxDensityFormat::iter() {
        let format_str: &'static str = format.into();
        for format_str in [format_str.to_lowercase(), format_str.to_uppercase()] {
            let result = parse_flux_density(&format!("20{}", format_str));
            assert!(result.is_ok(), "{:?}", result.unwrap_err());
            let pair = result.unwrap();
            assert_abs_diff_eq!(pair.0, 20.0);
            assert_eq!(pair.1, Some(format));

            let result = parse_flux_density(&format!("1.0{}", format_str));
            assert!(result.is_ok(), "{:?}", result.unwrap_err());
            let pair = result.unwrap();
            assert_abs_diff_eq!(pair.0, 1.0);
            assert_eq!(pair.1, Some(format));

            let result = parse_flux_density(&format!(" 1.0{} ", format_str));
            assert!(result.is_ok(), "{:?}", result.unwrap_err());
            let pair = result.unwrap();
            assert_abs_diff_eq!(pair.0, 1.0);
            assert_eq!(pair.1, Some(format));

            let result = parse_flux_density(&format!(" 1.0 {} ", format_str));
            assert!(result.is_ok(), "{:?}", result.unwrap_err());
            let pair = result.unwrap();
            assert_abs_diff_eq!(pair.0, 1.0);
            assert_eq!(pair.1, Some(format));
        }
    }
}

#[test]
fn test_parse_negative_flux_density() {
    // Negative quantities parse fine here; rejecting them is the conversion's
    // job.
    let result = parse_flux_density("-5Jy");
    assert!(result.is_ok(), "{:?}", result.unwrap_err());
    let pair = result.unwrap();
    assert_abs_diff_eq!(pair.0, -5.0);
    assert_eq!(pair.1, Some(FluxDensityFormat::Jy));
}

#[test]
fn test_scale_to_njy() {
    let flux = parse_flux_density_njy("3631 Jy").unwrap();
    assert_abs_diff_eq!(flux, 3.631e12);

    let flux = parse_flux_density_njy("1.5mJy").unwrap();
    assert_abs_diff_eq!(flux, 1.5e6);

    let flux = parse_flux_density_njy("250 uJy").unwrap();
    assert_abs_diff_eq!(flux, 250e3);

    let flux = parse_flux_density_njy("7nJy").unwrap();
    assert_abs_diff_eq!(flux, 7.0);

    let flux = parse_flux_density_njy("123.4").unwrap();
    assert_abs_diff_eq!(flux, 123.4);
}

#[test]
fn test_unknown_unit() {
    let result = parse_flux_density("5 parsecs");
    assert!(matches!(result, Err(UnitParseError::Unknown { .. })));
}

#[test]
fn test_bad_numerical_component() {
    let result = parse_flux_density("1.2.3Jy");
    assert!(matches!(
        result,
        Err(UnitParseError::GotFluxUnitButCantParse { .. })
    ));
}
