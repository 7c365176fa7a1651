/// Extracts the digit characters that follow the last occurrence of a separator.
pub trait DigitsAfterLast {
    /// Returns the ASCII digits found after the last `separator`, in order.
    /// Empty when the separator is absent or nothing numeric follows it.
    fn digits_after_last(&self, separator: char) -> String;
}

impl DigitsAfterLast for str {
    fn digits_after_last(&self, separator: char) -> String {
        let Some(idx) = self.rfind(separator) else {
            return String::new();
        };

        self[idx + separator.len_utf8()..]
            .chars()
            .filter(char::is_ascii_digit)
            .collect()
    }
}

impl DigitsAfterLast for String {
    fn digits_after_last(&self, separator: char) -> String {
        self.as_str().digits_after_last(separator)
    }
}

impl DigitsAfterLast for &str {
    fn digits_after_last(&self, separator: char) -> String {
        (*self).digits_after_last(separator)
    }
}

/// Digits after the last `'.'`, e.g. `"file.v1.23"` -> `"23"`.
pub fn digits_after_last_separator(s: &str) -> String {
    s.digits_after_last('.')
}
