use std::fmt;

/// Integer displayed with `'` between groups of three digits, e.g. `1'048'576`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NiceInt(i128);

impl NiceInt {
    pub fn from(value: impl Into<i128>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as i128)
    }
}

impl fmt::Display for NiceInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut result = String::with_capacity(digits.len() * 4 / 3 + 1);
        if self.0 < 0 {
            result.push('-');
        }
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                result.push('\'');
            }
            result.push(c);
        }
        f.write_str(&result)
    }
}
