// src/analytics/rating.rs

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+\.?[0-9]*)").expect("numeral pattern is valid")
});

/// Pulls the first ASCII decimal numeral out of a free-form rating.
///
/// `"7/10"` → 7.0, `"7.5 out of 10"` → 7.5. Missing, empty or numeral-free
/// input yields 0.0, as does a numeral too long to be finite; this never fails.
/// The rating column is text, so numeric ratings arrive here already as strings.
pub fn parse_rating(raw: Option<&str>) -> f64 {
    let Some(text) = raw.filter(|s| !s.is_empty()) else {
        return 0.0;
    };

    NUMERAL
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_rating_shapes() {
        assert_eq!(parse_rating(Some("7/10")), 7.0);
        assert_eq!(parse_rating(Some("7")), 7.0);
        assert_eq!(parse_rating(Some("7.5")), 7.5);
        assert_eq!(parse_rating(Some("7.5 out of 10")), 7.5);
        assert_eq!(parse_rating(Some("Rating: 9/10")), 9.0);
        assert_eq!(parse_rating(Some("10")), 10.0);
    }

    #[test]
    fn trailing_dot_is_accepted() {
        assert_eq!(parse_rating(Some("8. Good answer")), 8.0);
    }

    #[test]
    fn missing_or_malformed_degrades_to_zero() {
        assert_eq!(parse_rating(None), 0.0);
        assert_eq!(parse_rating(Some("")), 0.0);
        assert_eq!(parse_rating(Some("n/a")), 0.0);
        assert_eq!(parse_rating(Some("   ")), 0.0);
    }

    #[test]
    fn only_ascii_digits_count() {
        assert_eq!(parse_rating(Some("٧/10")), 10.0);
        assert_eq!(parse_rating(Some("７ out of 10")), 10.0);
        assert_eq!(parse_rating(Some("７")), 0.0);
    }

    #[test]
    fn huge_numerals_stay_finite() {
        assert_eq!(parse_rating(Some("99999999999999999999")), 1e20);
        assert_eq!(parse_rating(Some(&"9".repeat(400))), 0.0);
    }

    #[test]
    fn reparsing_a_parsed_value_is_stable() {
        for raw in ["7/10", "6.5", "4", "0", "9.25 of 10", "garbage"] {
            let once = parse_rating(Some(raw));
            let twice = parse_rating(Some(&once.to_string()));
            assert_eq!(once, twice, "unstable for {raw:?}");
        }
    }
}
