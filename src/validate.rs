//! Name validation for bunches and packages
//!
//! Package names end up as arguments to the package manager, so these
//! predicates are the only guard on what gets passed to it.

/// Returns true if every character of `name` is an ASCII letter, digit, `_`, `-` or `.`.
///
/// The empty string passes, since no character fails.
pub fn valid_bunch_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Returns true if every character of `name` is a lowercase ASCII letter, digit, `+`, `-` or `.`.
pub fn valid_package_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bunch_names() {
        for name in ["dev", "Dev-Tools", "web_stack.2", "A", "...", "_-."] {
            assert!(valid_bunch_name(name), "{name} should be valid");
        }
    }

    #[test]
    fn test_empty_bunch_name_is_valid() {
        assert!(valid_bunch_name(""));
    }

    #[test]
    fn test_invalid_bunch_names() {
        for name in [
            "dev tools",
            "dev/tools",
            "../etc",
            "tools+",
            "tools;rm",
            "naïve",
            "tab\there",
        ] {
            assert!(!valid_bunch_name(name), "{name} should be invalid");
        }
    }

    #[test]
    fn test_valid_package_names() {
        for name in ["curl", "g++", "libc6-dev", "python3.12", "0ad", "+-."] {
            assert!(valid_package_name(name), "{name} should be valid");
        }
    }

    #[test]
    fn test_empty_package_name_is_valid() {
        assert!(valid_package_name(""));
    }

    #[test]
    fn test_uppercase_invalidates_package_name() {
        for name in ["Curl", "curL", "BAD", "libX11"] {
            assert!(!valid_package_name(name), "{name} should be invalid");
        }
    }

    #[test]
    fn test_invalid_package_characters() {
        for name in [
            "curl wget",
            "curl;reboot",
            "$(id)",
            "lib_foo",
            "pkg/name",
            "vim:amd64",
            "ünicode",
        ] {
            assert!(!valid_package_name(name), "{name} should be invalid");
        }
    }

    #[test]
    fn test_every_allowed_bunch_character() {
        let all: String = ('a'..='z')
            .chain('A'..='Z')
            .chain('0'..='9')
            .chain(['_', '-', '.'])
            .collect();
        assert!(valid_bunch_name(&all));

        for c in (0u8..=127).map(char::from) {
            let expected = all.contains(c);
            assert_eq!(valid_bunch_name(&format!("x{c}")), expected, "char {c:?}");
        }
    }

    #[test]
    fn test_every_allowed_package_character() {
        let all: String = ('a'..='z').chain('0'..='9').chain(['+', '-', '.']).collect();
        assert!(valid_package_name(&all));

        for c in (0u8..=127).map(char::from) {
            let expected = all.contains(c);
            assert_eq!(valid_package_name(&format!("x{c}")), expected, "char {c:?}");
        }
    }
}
