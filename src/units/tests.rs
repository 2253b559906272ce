#[cfg(test)]
mod tests {
    use super::super::converter::{apply_rounding, parse_input, ConversionModel};
    use super::super::error::UnitError;
    use super::super::formatter::format_value;
    use super::super::types::LengthUnit::*;
    use super::super::types::*;
    use super::super::{convert, convert_factors, round2};
    use approx::assert_abs_diff_eq;

    const SAMPLES: [&str; 7] = ["0", "1", "2.5", "-7.25", "123.456", "1000", "0.3"];

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(convert("", Meters, Meters), "0.0");
        assert_eq!(convert("   ", Feet, Centimeters), "0.0");
    }

    #[test]
    fn test_non_numeric_matches_empty() {
        assert_eq!(
            convert("abc", Centimeters, Meters),
            convert("", Centimeters, Meters)
        );
        assert_eq!(convert("12abc", Meters, Feet), "0.0");
        assert_eq!(convert("1,5", Meters, Meters), "0.0");
    }

    #[test]
    fn test_non_finite_input_is_zero() {
        assert_eq!(convert("inf", Meters, Meters), "0.0");
        assert_eq!(convert("NaN", Feet, Meters), "0.0");
    }

    #[test]
    fn test_known_conversions() {
        assert_eq!(convert("100", Centimeters, Meters), "1.0");
        assert_eq!(convert("1", Meters, Centimeters), "100.0");
        assert_eq!(convert("1", Feet, Millimeters), "304.8");
        assert_eq!(convert("10", Millimeters, Centimeters), "1.0");
        assert_eq!(convert("1", Meters, Feet), "3.28");
        assert_eq!(convert("-50", Centimeters, Meters), "-0.5");
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(convert(" 100 ", Centimeters, Meters), "1.0");
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        assert_eq!(convert("1.236", Meters, Meters), "1.24");
        assert_eq!(convert("1.234", Meters, Meters), "1.23");
        assert_eq!(convert("-1.236", Meters, Meters), "-1.24");
    }

    #[test]
    fn test_tiny_negative_is_plain_zero() {
        assert_eq!(convert("-0.001", Meters, Meters), "0.0");
    }

    #[test]
    fn test_identity() {
        for unit in LengthUnit::ALL {
            for sample in SAMPLES {
                let expected =
                    format_value(round2(parse_input(sample)), RoundingMode::Hundredths);
                assert_eq!(convert(sample, unit, unit), expected, "{} {}", sample, unit);
            }
        }
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for a in LengthUnit::ALL {
            for b in LengthUnit::ALL {
                for sample in SAMPLES {
                    let there = convert(sample, a, b);
                    let back = convert(&there, b, a);
                    let x = parse_input(sample);
                    // Half a hundredth lost on each leg, the first one scaled into `a`
                    let tolerance = 0.005 * b.factor() / a.factor() + 0.005 + 1e-9;
                    assert_abs_diff_eq!(parse_input(&back), x, epsilon = tolerance);
                }
            }
        }
    }

    #[test]
    fn test_convert_factors_matches_typed() {
        for a in LengthUnit::ALL {
            for b in LengthUnit::ALL {
                assert_eq!(
                    convert_factors("42.42", a.factor(), b.factor()),
                    convert("42.42", a, b)
                );
            }
        }
    }

    #[test]
    fn test_try_convert_factors_rejects_bad_factors() {
        let model = ConversionModel::new();
        assert_eq!(
            model.try_convert_factors("1", 0.0, 1.0),
            Err(UnitError::InvalidFactor(0.0))
        );
        assert_eq!(
            model.try_convert_factors("1", 1.0, -2.0),
            Err(UnitError::InvalidFactor(-2.0))
        );
        assert!(model.try_convert_factors("1", 1.0, f64::NAN).is_err());
        assert_eq!(model.try_convert_factors("2", 1.0, 0.5), Ok("4.0".to_string()));
    }

    #[test]
    fn test_truncate_mode_drops_cents() {
        let model = ConversionModel::with_rounding(RoundingMode::Truncate);
        assert_eq!(model.convert("1.236", Meters, Meters), "1");
        assert_eq!(model.convert("100", Centimeters, Meters), "1");
        assert_eq!(model.convert("1", Feet, Millimeters), "304");
        assert_eq!(model.convert("", Meters, Meters), "0");
        assert_eq!(model.convert("-1.5", Meters, Meters), "-1");
    }

    #[test]
    fn test_truncate_mode_large_values() {
        let model = ConversionModel::with_rounding(RoundingMode::Truncate);
        assert_eq!(model.convert("1e20", Meters, Meters), "100000000000000000000");
        assert_eq!(model.convert("1e308", Meters, Millimeters), "inf");
        assert_eq!(ConversionModel::new().convert("1e308", Meters, Millimeters), "inf");
    }

    #[test]
    fn test_truncate_mode_ties_round_up() {
        let model = ConversionModel::with_rounding(RoundingMode::Truncate);
        assert_eq!(model.convert("-0.995", Meters, Meters), "0");
        assert_eq!(model.convert("0.995", Meters, Meters), "1");
    }

    #[test]
    fn test_apply_rounding() {
        assert_eq!(apply_rounding(2.345678, RoundingMode::Hundredths), 2.35);
        assert_eq!(apply_rounding(2.999, RoundingMode::Truncate), 3.0);
        assert_eq!(apply_rounding(2.994, RoundingMode::Truncate), 2.0);
    }

    #[test]
    fn test_round2_huge_values_pass_through() {
        assert_eq!(round2(1e307), 1e307);
    }

    #[test]
    fn test_convert_request() {
        let model = ConversionModel::new();
        let request = ConversionRequest::new("250", Centimeters, Meters);
        let result = model.convert_request(&request);
        assert_eq!(result.formatted_value, "2.5");
        assert_eq!(result.value, 2.5);
        assert_eq!(result.target, Meters);
    }
}
