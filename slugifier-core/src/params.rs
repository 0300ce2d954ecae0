//! Slug parameters: the separator set and the length limit, with the
//! coercion rules applied to raw user input.
//!
//! Nothing in here fails. Out-of-set separators and unreadable limits fall
//! back to their defaults; a limit below [`LIMIT_MIN`] is only raised when the
//! caller asks for it via [`clamp_limit`], which the form does on blur.

use std::fmt;

/// Smallest limit accepted once editing is complete.
pub const LIMIT_MIN: i64 = 10;

/// Limit used when the input is empty, zero, or not a number.
pub const LIMIT_DEFAULT: i64 = 60;

// ── Separator ─────────────────────────────────────────────────────────────────

/// Character placed between words of a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Separator {
    #[default]
    Dash,
    Underscore,
}

impl Separator {
    /// The allowed set, in display order.
    pub const ALL: [Separator; 2] = [Separator::Dash, Separator::Underscore];

    pub fn as_char(self) -> char {
        match self {
            Separator::Dash => '-',
            Separator::Underscore => '_',
        }
    }

    /// Human-readable name shown in the separator picker.
    pub fn label(self) -> &'static str {
        match self {
            Separator::Dash => "Dash",
            Separator::Underscore => "Underscore",
        }
    }

    /// Map raw input to a separator, falling back to the default for anything
    /// outside the allowed set.
    pub fn coerce(input: &str) -> Separator {
        Self::ALL
            .into_iter()
            .find(|s| {
                let mut chars = input.chars();
                chars.next() == Some(s.as_char()) && chars.next().is_none()
            })
            .unwrap_or_default()
    }

    /// Returns `true` if `c` is any member of the allowed set.
    pub fn is_separator_like(c: char) -> bool {
        Self::ALL.iter().any(|s| s.as_char() == c)
    }

    /// The next separator in display order, wrapping around.
    pub fn next(self) -> Separator {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous separator in display order, wrapping around.
    pub fn prev(self) -> Separator {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ── Limit ─────────────────────────────────────────────────────────────────────

/// Parse a limit the way a number field reports it while the user types.
///
/// Leading whitespace is skipped, an optional sign and the run of digits that
/// follows are read, and anything after is ignored (`"12abc"` is 12). Input
/// with no digits, or a value of zero, yields [`LIMIT_DEFAULT`]. Negative values
/// are returned unchanged.
pub fn parse_limit(input: &str) -> i64 {
    match leading_integer(input) {
        Some(0) | None => LIMIT_DEFAULT,
        Some(n) => n,
    }
}

/// The optionally signed integer at the start of `input`, or `None` when no
/// digit follows the sign. Saturates at the `i64` bounds.
pub fn leading_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Raise a limit to [`LIMIT_MIN`] if it falls below it.
pub fn clamp_limit(limit: i64) -> i64 {
    limit.max(LIMIT_MIN)
}

/// Convert an entered limit into a character count for truncation.
/// Negative limits (only reachable mid-edit) truncate to nothing.
pub fn effective_limit(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}
