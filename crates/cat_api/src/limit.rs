use std::fmt;

pub const MIN_LIMIT: usize = 6;
pub const MAX_LIMIT: usize = 10;
pub const DEFAULT_LIMIT: usize = 6;

/// How many images a caller gets back, always within
/// `MIN_LIMIT..=MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestLimit(usize);

impl RequestLimit {
    /// Absent and zero fall back to the default before clamping.
    pub fn new(desired_count: Option<i64>) -> Self {
        let value = match desired_count {
            Some(n) if n != 0 => n,
            _ => DEFAULT_LIMIT as i64,
        };
        let clamped = value.clamp(MIN_LIMIT as i64, MAX_LIMIT as i64);
        Self(clamped as usize)
    }

    /// Parse untyped input, then clamp. Anything without a leading integer
    /// ends up as the default.
    pub fn parse(raw: Option<&str>) -> Self {
        Self::new(raw.and_then(parse_leading_int))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for RequestLimit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

impl From<i64> for RequestLimit {
    fn from(n: i64) -> Self {
        Self::new(Some(n))
    }
}

impl fmt::Display for RequestLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn effective_limit(desired_count: Option<i64>) -> usize {
    RequestLimit::new(desired_count).get()
}

/// Reads an optional sign and the longest run of digits after any leading
/// whitespace, ignoring whatever follows: " 8 cats" is 8, "3.7" is 3.
/// Digit runs too large for an i64 saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    if digits.is_empty() {
        return None;
    }

    let value = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -value } else { value })
}
