use once_cell::sync::Lazy;
use regex::Regex;

/// Zero, one or two leading 3-digit groups followed by a 4-digit group.
static VALID_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{3} )?([0-9]{3} )?([0-9]{4})$").expect("phone shape pattern is valid")
});

/// Check that a formatted phone number is complete.
///
/// Accepts `dddd`, `ddd dddd` and `ddd ddd dddd`. The two leading groups are
/// independently optional, so a 7-digit `ddd dddd` passes as well.
pub fn is_valid_phone_number(formatted: &str) -> bool {
    VALID_PHONE.is_match(formatted)
}

#[cfg(test)]
mod tests {
    use super::is_valid_phone_number;

    #[test]
    fn accepts_the_three_complete_shapes() {
        assert!(is_valid_phone_number("4567"));
        assert!(is_valid_phone_number("123 4567"));
        assert!(is_valid_phone_number("098 123 4567"));
    }

    #[test]
    fn rejects_partial_numbers() {
        assert!(!is_valid_phone_number(""));
        assert!(!is_valid_phone_number("12"));
        assert!(!is_valid_phone_number("098 1"));
        assert!(!is_valid_phone_number("098 123 456"));
    }

    #[test]
    fn rejects_wrong_separators_and_extra_groups() {
        assert!(!is_valid_phone_number("0981234567"));
        assert!(!is_valid_phone_number("098  123 4567"));
        assert!(!is_valid_phone_number(" 098 123 4567"));
        assert!(!is_valid_phone_number("098 123 4567 "));
        assert!(!is_valid_phone_number("098-123-4567"));
        assert!(!is_valid_phone_number("123 098 123 4567"));
    }

    #[test]
    fn rejects_non_digits() {
        assert!(!is_valid_phone_number("098 12a 4567"));
        assert!(!is_valid_phone_number("098 123 456٧"));
    }
}
