use std::fmt;

/// Display adapter for phone numbers in log lines.
/// Only the last four digits are shown; separators are dropped.
pub struct MaskedPhone<'a>(pub &'a str);

impl fmt::Display for MaskedPhone<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: Vec<char> = self.0.chars().filter(char::is_ascii_digit).collect();
        if digits.len() <= 4 {
            return f.write_str("****");
        }
        let hidden = digits.len() - 4;
        for _ in 0..hidden {
            f.write_str("*")?;
        }
        for d in &digits[hidden..] {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for MaskedPhone<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_last_four_digits() {
        assert_eq!(MaskedPhone("(11) 99999-8888").to_string(), "*******8888");
    }

    #[test]
    fn short_numbers_are_fully_hidden() {
        assert_eq!(MaskedPhone("123").to_string(), "****");
        assert_eq!(format!("{:?}", MaskedPhone("")), "****");
    }
}
