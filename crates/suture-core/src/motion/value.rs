//! Interpolatable values.
//!
//! Scroll-linked effects animate plain numbers and CSS strings that carry
//! numbers inside them (`"-75%"`, `"brightness(0.6) blur(10px)"`,
//! `"rgba(255, 0, 0, 0.5)"`). A [`StyleValue`] splits such a string into
//! literal text and numeric slots so that two values with the same text can
//! be blended slot by slot.
//!
//! Hex colours (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) are read as four
//! channel slots and written back as `rgba(r, g, b, a)`, so `"#000000"` and
//! `"#001100"` blend channel by channel.

use std::fmt;
use std::str::FromStr;

use crate::error::{SutureError, SutureResult};

/// Linear blending between two values of the same kind.
pub trait Lerp: Sized {
    /// Blend `a` towards `b` by `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;

    /// Whether `a` and `b` can be blended at all.
    fn check_compatible(_a: &Self, _b: &Self) -> SutureResult<()> {
        Ok(())
    }
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// A CSS value with numeric slots.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleValue {
    /// Text around the numbers; always one longer than `numbers`
    literals: Vec<String>,
    numbers: Vec<f64>,
}

impl StyleValue {
    /// Build a single-number value with a unit suffix, e.g. `(−75.0, "%")`.
    pub fn with_unit(value: f64, unit: &str) -> Self {
        Self {
            literals: vec![String::new(), unit.to_string()],
            numbers: vec![value],
        }
    }

    /// Numeric slots in order of appearance.
    pub fn numbers(&self) -> &[f64] {
        &self.numbers
    }

    /// The first numeric slot. Every value has at least one.
    pub fn first(&self) -> f64 {
        self.numbers[0]
    }

    fn same_shape(&self, other: &Self) -> bool {
        self.literals == other.literals
    }
}

impl FromStr for StyleValue {
    type Err = SutureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let mut literals = Vec::new();
        let mut numbers = Vec::new();
        let mut literal = String::new();
        let mut i = 0;

        while i < chars.len() {
            if let Some((end, channels)) = hex_color(&chars, i, s)? {
                literal.push_str("rgba(");
                for (k, channel) in channels.into_iter().enumerate() {
                    if k > 0 {
                        literal.push_str(", ");
                    }
                    literals.push(std::mem::take(&mut literal));
                    numbers.push(channel);
                }
                literal.push(')');
                i = end;
            } else if let Some(end) = number_end(&chars, i) {
                let token: String = chars[i..end].iter().collect();
                let value = token
                    .parse::<f64>()
                    .map_err(|_| SutureError::InvalidStyleValue(s.to_string()))?;
                literals.push(std::mem::take(&mut literal));
                numbers.push(value);
                i = end;
            } else {
                literal.push(chars[i]);
                i += 1;
            }
        }
        literals.push(literal);

        if numbers.is_empty() {
            return Err(SutureError::InvalidStyleValue(s.to_string()));
        }
        Ok(Self { literals, numbers })
    }
}

/// A hex colour starting at `start`: its end index and `[r, g, b, a]`.
///
/// `#` followed by something other than 3, 4, 6 or 8 hex digits is an
/// error. A bare `#` is plain text.
fn hex_color(
    chars: &[char],
    start: usize,
    source: &str,
) -> SutureResult<Option<(usize, [f64; 4])>> {
    if chars[start] != '#' {
        return Ok(None);
    }
    let end = chars[start + 1..]
        .iter()
        .position(|c| !c.is_alphanumeric())
        .map_or(chars.len(), |n| start + 1 + n);
    let digits = &chars[start + 1..end];
    if digits.is_empty() {
        return Ok(None);
    }

    let invalid = || SutureError::InvalidStyleValue(source.to_string());
    let nibbles = digits
        .iter()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(invalid)?;

    let bytes: Vec<u8> = match nibbles.len() {
        3 | 4 => nibbles.iter().map(|n| n * 17).collect(),
        6 | 8 => nibbles.chunks(2).map(|pair| pair[0] * 16 + pair[1]).collect(),
        _ => return Err(invalid()),
    };
    let alpha = bytes.get(3).map_or(1.0, |a| f64::from(*a) / 255.0);
    Ok(Some((
        end,
        [
            f64::from(bytes[0]),
            f64::from(bytes[1]),
            f64::from(bytes[2]),
            alpha,
        ],
    )))
}

/// End index of a number starting at `start`, if one starts there.
///
/// A leading `-` only counts as a sign when it is not glued to a word,
/// so `"brightness(0.6)"` has one slot while `"-75%"` has a negative one.
fn number_end(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start;
    if chars[i] == '-' {
        let glued = start > 0 && chars[start - 1].is_alphanumeric();
        if glued {
            return None;
        }
        i += 1;
    } else if start > 0 && chars[start - 1].is_alphabetic() {
        // digits inside identifiers such as `h1` or `rotate3d`
        return None;
    }

    let digits_start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    let mut has_digits = i > digits_start;
    if i < chars.len() && chars[i] == '.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
        if j > frac_start {
            has_digits = true;
            i = j;
        }
    }
    has_digits.then_some(i)
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (literal, number) in self.literals.iter().zip(&self.numbers) {
            f.write_str(literal)?;
            f.write_str(&format_number(*number))?;
        }
        if let Some(tail) = self.literals.last() {
            f.write_str(tail)?;
        }
        Ok(())
    }
}

/// Format a number for CSS: at most four decimals, no trailing zeros.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{rounded:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}

impl Lerp for StyleValue {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            literals: a.literals.clone(),
            numbers: a
                .numbers
                .iter()
                .zip(&b.numbers)
                .map(|(x, y)| f64::lerp(x, y, t))
                .collect(),
        }
    }

    fn check_compatible(a: &Self, b: &Self) -> SutureResult<()> {
        if a.same_shape(b) {
            Ok(())
        } else {
            Err(SutureError::IncompatibleValues {
                from: a.to_string(),
                to: b.to_string(),
            })
        }
    }
}
