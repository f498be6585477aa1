//! Field validators shared by every form. They are pure predicates over the raw
//! input and never panic; an empty string is always rejected. These checks
//! only drive form feedback and must not be treated as a security boundary.

use regex::Regex;

/// Minimum password length accepted by [`validate_password`].
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Symbols a password must draw at least one character from.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

// Browser `\s`: ECMAScript WhiteSpace plus LineTerminator. Unlike Unicode
// White_Space it includes U+FEFF and excludes U+0085.
const BROWSER_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Basic `local@domain.tld` shape check. Lenient on purpose: consecutive dots
/// and similar oddities are accepted.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    let part = format!("[^@{BROWSER_WHITESPACE}]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).is_ok_and(|regex| regex.is_match(email))
}

/// Password complexity check: at least [`PASSWORD_MIN_LENGTH`] characters from
/// the alphanumeric-plus-symbol alphabet, with a digit and a symbol.
#[must_use]
pub fn validate_password(password: &str) -> bool {
    // The alphabet is ASCII-only, so byte length equals character count here.
    Regex::new(r"^[A-Za-z0-9@$!%*?&]+$").is_ok_and(|regex| regex.is_match(password))
        && password.len() >= PASSWORD_MIN_LENGTH
        && Regex::new(r"[0-9]").is_ok_and(|regex| regex.is_match(password))
        && Regex::new(r"[@$!%*?&]").is_ok_and(|regex| regex.is_match(password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn email_accepts_basic_shape() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("first.last@clinic.co.uk"));
        assert!(validate_email("vet+alerts@nxvet.io"));
    }

    #[test]
    fn email_rejects_missing_parts() {
        assert!(!validate_email(""));
        assert!(!validate_email("a.b.com"));
        assert!(!validate_email("a@bcom"));
        assert!(!validate_email("@b.com"));
        assert!(!validate_email("a@.com"));
        assert!(!validate_email("a@b."));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@b@c.com"));
        assert!(!validate_email(" a@b.com"));
    }

    #[test]
    fn email_whitespace_follows_browser_rules() {
        assert!(!validate_email("a\u{FEFF}@b.com"));
        assert!(!validate_email("a@b\u{3000}.com"));
        assert!(!validate_email("a@b.co\u{A0}m"));
        assert!(validate_email("a\u{85}@b.com"));
    }

    #[test]
    fn email_stays_lenient() {
        assert!(validate_email("a@b..com"));
        assert!(validate_email("a..b@c.d"));
    }

    #[test]
    fn password_accepts_complex_values() {
        assert!(validate_password("abc123!@"));
        assert!(validate_password("Passw0rd?"));
        assert!(validate_password("12345678&"));
    }

    #[test]
    fn password_rejects_missing_requirements() {
        assert!(!validate_password(""));
        assert!(!validate_password("abc12345"));
        assert!(!validate_password("abcdefg!"));
        assert!(!validate_password("ab1!"));
        assert!(!validate_password("abc1!@#x"));
        assert!(!validate_password("abc1 !@x"));
        assert!(!validate_password("ábc123!@"));
    }

    #[test]
    fn password_digit_must_be_ascii() {
        assert!(!validate_password("abc١٢٣!@x"));
    }

    proptest! {
        #[test]
        fn email_without_at_is_rejected(value in "[^@]*") {
            prop_assert!(!validate_email(&value));
        }

        #[test]
        fn email_without_dot_after_at_is_rejected(
            local in "[^@]*",
            domain in "[^.]*",
        ) {
            let value = format!("{local}@{domain}");
            prop_assert!(!validate_email(&value));
        }

        #[test]
        fn password_with_digit_and_symbol_is_accepted(
            body in "[A-Za-z0-9@$!%*?&]{6,24}",
            digit in "[0-9]",
            symbol in "[@$!%*?&]",
        ) {
            let value = format!("{body}{digit}{symbol}");
            prop_assert!(validate_password(&value));
        }

        #[test]
        fn short_password_is_rejected(value in ".{0,7}") {
            prop_assume!(value.chars().count() < PASSWORD_MIN_LENGTH);
            prop_assert!(!validate_password(&value));
        }
    }
}
