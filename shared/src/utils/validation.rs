//! Common validation utilities
//!
//! Account field rules used by both the registration DTO validation and the
//! core auth service.

/// Minimum username length
pub const USERNAME_MIN_LEN: usize = 4;

/// Maximum username length
pub const USERNAME_MAX_LEN: usize = 64;

/// Minimum password length
pub const PASSWORD_MIN_LEN: usize = 8;

/// Check if a string is not empty after trimming
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length is within bounds (inclusive)
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// Check if a username satisfies the account rules
pub fn is_valid_username(username: &str) -> bool {
    length_between(username, USERNAME_MIN_LEN, USERNAME_MAX_LEN)
}

/// Check if a password satisfies the account rules
///
/// Requires at least `PASSWORD_MIN_LEN` characters with at least one
/// uppercase letter, one lowercase letter and one digit.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN && password_has_required_classes(password)
}

/// Check for the required character classes (upper, lower, digit)
pub fn password_has_required_classes(password: &str) -> bool {
    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;

    for c in password.chars() {
        has_upper |= c.is_ascii_uppercase();
        has_lower |= c.is_ascii_lowercase();
        has_digit |= c.is_ascii_digit();
    }

    has_upper && has_lower && has_digit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty("a"));
        assert!(!not_empty(""));
        assert!(!not_empty("   "));
    }

    #[test]
    fn test_username_rules() {
        assert!(!is_valid_username("abc"));
        assert!(is_valid_username("abcd"));
        assert!(is_valid_username("jane.doe"));
        assert!(!is_valid_username(&"x".repeat(USERNAME_MAX_LEN + 1)));
    }

    #[test]
    fn test_password_rules() {
        // Too short
        assert!(!is_valid_password("Ab1"));
        // Missing digit
        assert!(!is_valid_password("Abcdefgh"));
        // Missing uppercase
        assert!(!is_valid_password("abcdefg1"));
        // Missing lowercase
        assert!(!is_valid_password("ABCDEFG1"));
        // All classes present
        assert!(is_valid_password("Abcdefg1"));
    }

    #[test]
    fn test_length_between_counts_chars() {
        assert!(length_between("àbcd", 4, 4));
    }
}
