use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::StateCode;

static ZIP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("valid zip regex"));

// Half-open [low, high) prefix ranges, sorted and disjoint.
const ZIP_RANGES: &[(u32, u32, StateCode)] = &[
    (500, 599, StateCode::new("NY")),
    (600, 699, StateCode::new("PA")),
    (700, 729, StateCode::new("DC")),
    (730, 799, StateCode::new("VA")),
    (800, 899, StateCode::new("NC")),
    (900, 999, StateCode::new("SC")),
    (1000, 2799, StateCode::new("MA")),
    (2800, 2999, StateCode::new("RI")),
    (3000, 3899, StateCode::new("NH")),
    (3900, 4999, StateCode::new("ME")),
    (5000, 5999, StateCode::new("VT")),
    (6000, 6999, StateCode::new("CT")),
    (7000, 8999, StateCode::new("NJ")),
    (10000, 14999, StateCode::new("NY")),
    (15000, 19699, StateCode::new("PA")),
    (19700, 19999, StateCode::new("DE")),
    (20000, 20599, StateCode::new("DC")),
    (20600, 21999, StateCode::new("MD")),
    (22000, 24699, StateCode::new("VA")),
    (24700, 26999, StateCode::new("WV")),
    (27000, 28999, StateCode::new("NC")),
    (29000, 29999, StateCode::new("SC")),
    (30000, 31999, StateCode::new("GA")),
    (32000, 34999, StateCode::new("FL")),
    (35000, 36999, StateCode::new("AL")),
    (37000, 38599, StateCode::new("TN")),
    (38600, 39799, StateCode::new("MS")),
    (39800, 39999, StateCode::new("GA")),
    (40000, 42799, StateCode::new("KY")),
    (43000, 45999, StateCode::new("OH")),
    (46000, 47999, StateCode::new("IN")),
    (48000, 49999, StateCode::new("MI")),
    (50000, 52999, StateCode::new("IA")),
    (53000, 54999, StateCode::new("WI")),
    (55000, 56799, StateCode::new("MN")),
    (57000, 57999, StateCode::new("SD")),
    (58000, 58999, StateCode::new("ND")),
    (59000, 59999, StateCode::new("MT")),
    (60000, 62999, StateCode::new("IL")),
    (63000, 65999, StateCode::new("MO")),
    (66000, 67999, StateCode::new("KS")),
    (68000, 69999, StateCode::new("NE")),
    (70000, 71599, StateCode::new("LA")),
    (71600, 72999, StateCode::new("AR")),
    (73000, 74999, StateCode::new("OK")),
    (75000, 79999, StateCode::new("TX")),
    (80000, 81699, StateCode::new("CO")),
    (82000, 83199, StateCode::new("WY")),
    (83200, 83999, StateCode::new("ID")),
    (84000, 84999, StateCode::new("UT")),
    (85000, 86599, StateCode::new("AZ")),
    (87000, 88499, StateCode::new("NM")),
    (88500, 89999, StateCode::new("NV")),
    (90000, 96199, StateCode::new("CA")),
    (96700, 96899, StateCode::new("HI")),
    (97000, 97999, StateCode::new("OR")),
    (98000, 99499, StateCode::new("WA")),
    (99500, 99999, StateCode::new("AK")),
];

pub fn is_valid_zip(zip: &str) -> bool {
    ZIP_PATTERN.is_match(zip.trim())
}

pub fn extract_zip5(zip: &str) -> &str {
    let trimmed = zip.trim();
    match trimmed.char_indices().nth(5) {
        Some((end, _)) => &trimmed[..end],
        None => trimmed,
    }
}

pub fn state_for(zip: &str) -> Option<StateCode> {
    let prefix = extract_zip5(zip).parse::<u32>().ok()?;

    let index = ZIP_RANGES.partition_point(|(_, high, _)| *high <= prefix);
    ZIP_RANGES
        .get(index)
        .filter(|(low, _, _)| *low <= prefix)
        .map(|(_, _, state)| *state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_zip_shapes() {
        assert!(is_valid_zip("10001"));
        assert!(is_valid_zip("10001-1234"));
        assert!(is_valid_zip(" 10001 "));
        assert!(is_valid_zip("\t90210\n"));
        assert!(!is_valid_zip("1000"));
        assert!(!is_valid_zip("ABCDE"));
        assert!(!is_valid_zip("100011"));
        assert!(!is_valid_zip("10001-123"));
        assert!(!is_valid_zip("10001 1234"));
        assert!(!is_valid_zip(""));
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        assert!(!is_valid_zip("١٠٠٠١"));
        assert!(!is_valid_zip("１０００１"));
        assert_eq!(state_for("١٠٠٠١"), None);
    }

    #[test]
    fn extracts_first_five() {
        assert_eq!(extract_zip5(" 10001-1234 "), "10001");
        assert_eq!(extract_zip5("90210"), "90210");
        assert_eq!(extract_zip5("123"), "123");
    }

    #[test]
    fn maps_known_prefixes() {
        assert_eq!(state_for("10001"), Some(StateCode::new("NY")));
        assert_eq!(state_for("90210").unwrap(), "CA");
        assert_eq!(state_for("60601").unwrap(), "IL");
        assert_eq!(state_for("33101").unwrap(), "FL");
        assert_eq!(state_for("02101").unwrap(), "MA");
        assert_eq!(state_for("20500").unwrap(), "DC");
        assert_eq!(state_for("39850").unwrap(), "GA");
        assert_eq!(state_for("10001-1234").unwrap(), "NY");
    }

    #[test]
    fn range_bounds_are_half_open() {
        assert_eq!(state_for("99500").unwrap(), "AK");
        assert_eq!(state_for("99998").unwrap(), "AK");
        assert_eq!(state_for("99999"), None);
        assert_eq!(state_for("14998").unwrap(), "NY");
        assert_eq!(state_for("14999"), None);
        assert_eq!(state_for("00599"), None);
    }

    #[test]
    fn untabulated_prefixes_miss() {
        assert_eq!(state_for("00100"), None);
        assert_eq!(state_for("00000"), None);
        assert_eq!(state_for("96813"), None);
        assert_eq!(state_for("09001"), None);
        assert_eq!(state_for("ABCDE"), None);
        assert_eq!(state_for(""), None);
    }

    #[test]
    fn ranges_are_sorted_and_disjoint() {
        for window in ZIP_RANGES.windows(2) {
            let (low, high, _) = window[0];
            let (next_low, _, _) = window[1];
            assert!(low < high);
            assert!(high <= next_low);
        }
    }

    #[test]
    fn binary_search_agrees_with_linear_scan() {
        for prefix in (0..100_000u32).step_by(7) {
            let zip = format!("{prefix:05}");
            let linear = ZIP_RANGES
                .iter()
                .find(|(low, high, _)| (*low..*high).contains(&prefix))
                .map(|(_, _, state)| *state);
            assert_eq!(state_for(&zip), linear, "zip {zip}");
        }
    }
}
