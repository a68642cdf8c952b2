//! Product-code format parsing and generation.
//!
//! A format string is an optional alphabetic prefix followed by a run of
//! `1` placeholders, one per random digit: `"EUK111111"` means `EUK` plus
//! six digits. The digit source is injected so generation is
//! deterministic under test; the frontend passes a `Math.random` adapter.

/// Default format used when the user asks for an auto-generated code.
pub const PRODUCT_CODE_FORMAT: &str = "EUK111111";

const DEFAULT_DIGITS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFormat {
    prefix: String,
    digits: usize,
}

impl CodeFormat {
    /// Parse a format string. A format without a `1` run falls back to
    /// no prefix and six digits.
    pub fn parse(fmt: &str) -> Self {
        let prefix: String = fmt.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
        let digits = fmt
            .chars()
            .skip(prefix.chars().count())
            .take_while(|c| *c == '1')
            .count();

        if digits == 0 {
            return Self {
                prefix: String::new(),
                digits: DEFAULT_DIGITS,
            };
        }

        Self { prefix, digits }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn digit_count(&self) -> usize {
        self.digits
    }

    /// Build a code from the injected digit source. Each call to `digit`
    /// yields one decimal digit (taken modulo 10).
    pub fn generate_with(&self, mut digit: impl FnMut() -> u8) -> String {
        let mut code = String::with_capacity(self.prefix.len() + self.digits);
        code.push_str(&self.prefix);
        for _ in 0..self.digits {
            code.push(char::from(b'0' + digit() % 10));
        }
        code
    }

    /// Generate a code not already taken. Retries are bounded; after
    /// `MAX_ATTEMPTS` collisions the last candidate is returned as-is.
    pub fn generate_unique_with(
        &self,
        is_taken: impl Fn(&str) -> bool,
        mut digit: impl FnMut() -> u8,
    ) -> String {
        const MAX_ATTEMPTS: usize = 1000;

        let mut candidate = self.generate_with(&mut digit);
        for _ in 1..MAX_ATTEMPTS {
            if !is_taken(&candidate) {
                break;
            }
            candidate = self.generate_with(&mut digit);
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_format() {
        let fmt = CodeFormat::parse(PRODUCT_CODE_FORMAT);
        assert_eq!(fmt.prefix(), "EUK");
        assert_eq!(fmt.digit_count(), 6);
    }

    #[test]
    fn format_without_placeholders_falls_back() {
        let fmt = CodeFormat::parse("EUK");
        assert_eq!(fmt.prefix(), "");
        assert_eq!(fmt.digit_count(), 6);

        let empty = CodeFormat::parse("");
        assert_eq!(empty.prefix(), "");
        assert_eq!(empty.digit_count(), 6);
    }

    #[test]
    fn placeholder_run_stops_at_first_other_char() {
        let fmt = CodeFormat::parse("AB1123");
        assert_eq!(fmt.prefix(), "AB");
        assert_eq!(fmt.digit_count(), 2);
    }

    #[test]
    fn generates_prefix_plus_digits() {
        let fmt = CodeFormat::parse("EUK111111");
        let mut next = 0u8;
        let code = fmt.generate_with(|| {
            next += 1;
            next
        });
        assert_eq!(code, "EUK123456");
    }

    #[test]
    fn digit_source_is_reduced_modulo_ten() {
        let fmt = CodeFormat::parse("11");
        let code = fmt.generate_with(|| 27);
        assert_eq!(code, "77");
    }

    #[test]
    fn unique_generation_skips_taken_codes() {
        let fmt = CodeFormat::parse("X11");
        let mut next = 0u8;
        let code = fmt.generate_unique_with(
            |candidate| candidate == "X12",
            || {
                next += 1;
                next
            },
        );
        assert_eq!(code, "X34");
    }
}
