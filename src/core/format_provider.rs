//! Locale-style number formatting used when rendering scalar values
//!
//! Supported numeric format strings:
//! - `D<n>`: integer digits, zero-padded to `n`
//! - `X<n>` / `x<n>`: hexadecimal, zero-padded to `n`
//! - `F<n>`: fixed point with `n` decimals (default 2)
//! - `N<n>`: fixed point with group separators (default 2 decimals)
//! - `E<n>` / `e<n>`: exponential with `n` decimals (default 6)
//!
//! Anything else falls back to the default textual form.

use std::fmt;

/// Supplies culture-specific symbols for number rendering
pub trait FormatProvider: Send + Sync {
    /// Separator between integral and fractional digits
    fn decimal_separator(&self) -> char {
        '.'
    }

    /// Separator between groups of three integral digits
    fn group_separator(&self) -> char {
        ','
    }
}

/// Culture-independent formatting (`.` decimals, `,` groups)
#[derive(Debug, Clone, Copy, Default)]
pub struct InvariantFormat;

impl FormatProvider for InvariantFormat {}

/// Number formatting with configurable separators
///
/// # Example
///
/// ```
/// use rust_log_capture::NumberFormat;
///
/// let german = NumberFormat::new(',', '.');
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NumberFormat {
    decimal_separator: char,
    group_separator: char,
}

impl NumberFormat {
    pub fn new(decimal_separator: char, group_separator: char) -> Self {
        Self {
            decimal_separator,
            group_separator,
        }
    }
}

impl FormatProvider for NumberFormat {
    fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    fn group_separator(&self) -> char {
        self.group_separator
    }
}

/// Split a format string such as `N2` into its specifier and precision
fn parse_format(format: &str) -> Option<(char, Option<usize>)> {
    let mut chars = format.chars();
    let specifier = chars.next().filter(char::is_ascii_alphabetic)?;
    let rest = chars.as_str();
    if rest.is_empty() {
        return Some((specifier, None));
    }
    let precision = rest.parse::<usize>().ok().filter(|p| *p <= 99)?;
    Some((specifier, Some(precision)))
}

fn separators(provider: Option<&dyn FormatProvider>) -> (char, char) {
    match provider {
        Some(p) => (p.decimal_separator(), p.group_separator()),
        None => ('.', ','),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// An integer decomposed for formatting
///
/// `bits` holds the two's complement representation masked to the source
/// type's width, which is what hexadecimal output prints for negative values.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IntegerParts {
    pub negative: bool,
    pub magnitude: u128,
    pub bits: u128,
}

impl IntegerParts {
    pub fn signed(value: i128, width: u32) -> Self {
        let mask = if width >= 128 { u128::MAX } else { (1u128 << width) - 1 };
        Self {
            negative: value < 0,
            magnitude: value.unsigned_abs(),
            bits: (value as u128) & mask,
        }
    }

    pub fn unsigned(value: u128) -> Self {
        Self {
            negative: false,
            magnitude: value,
            bits: value,
        }
    }
}

/// Render an integer with a format string
///
/// Returns `None` when the format is not understood so the caller can fall
/// back to the default form.
pub(crate) fn format_integer(
    out: &mut dyn fmt::Write,
    value: IntegerParts,
    format: &str,
    provider: Option<&dyn FormatProvider>,
) -> Option<fmt::Result> {
    let (specifier, precision) = parse_format(format)?;
    let (decimal, group) = separators(provider);
    let sign = if value.negative { "-" } else { "" };

    let text = match specifier {
        'D' | 'd' => format!("{}{:0>width$}", sign, value.magnitude, width = precision.unwrap_or(0)),
        'X' => format!("{:0>width$X}", value.bits, width = precision.unwrap_or(0)),
        'x' => format!("{:0>width$x}", value.bits, width = precision.unwrap_or(0)),
        'F' | 'f' | 'N' | 'n' => {
            let digits = value.magnitude.to_string();
            let integral = if specifier.eq_ignore_ascii_case(&'N') {
                group_digits(&digits, group)
            } else {
                digits
            };
            let decimals = precision.unwrap_or(2);
            if decimals == 0 {
                format!("{}{}", sign, integral)
            } else {
                format!("{}{}{}{}", sign, integral, decimal, "0".repeat(decimals))
            }
        }
        'E' | 'e' => {
            let as_float = value.magnitude as f64 * if value.negative { -1.0 } else { 1.0 };
            return format_float(out, as_float, format, provider);
        }
        _ => return None,
    };

    Some(out.write_str(&text))
}

/// Render a float with a format string, `None` when not understood
pub(crate) fn format_float(
    out: &mut dyn fmt::Write,
    value: f64,
    format: &str,
    provider: Option<&dyn FormatProvider>,
) -> Option<fmt::Result> {
    let (specifier, precision) = parse_format(format)?;
    if !value.is_finite() {
        return None;
    }
    let (decimal, group) = separators(provider);

    let text = match specifier {
        'F' | 'f' | 'N' | 'n' => {
            let fixed = format!("{:.*}", precision.unwrap_or(2), value.abs());
            let (integral, fraction) = match fixed.split_once('.') {
                Some((i, f)) => (i.to_string(), Some(f.to_string())),
                None => (fixed, None),
            };
            let integral = if specifier.eq_ignore_ascii_case(&'N') {
                group_digits(&integral, group)
            } else {
                integral
            };
            let sign = if value.is_sign_negative() && value != 0.0 { "-" } else { "" };
            match fraction {
                Some(f) => format!("{}{}{}{}", sign, integral, decimal, f),
                None => format!("{}{}", sign, integral),
            }
        }
        'E' => format!("{:.*E}", precision.unwrap_or(6), value).replace('.', &decimal.to_string()),
        'e' => format!("{:.*e}", precision.unwrap_or(6), value).replace('.', &decimal.to_string()),
        _ => return None,
    };

    Some(out.write_str(&text))
}

/// Default float rendering, honoring the provider's decimal separator
pub(crate) fn write_float_default(
    out: &mut dyn fmt::Write,
    text: String,
    provider: Option<&dyn FormatProvider>,
) -> fmt::Result {
    match provider.map(|p| p.decimal_separator()) {
        Some(sep) if sep != '.' => out.write_str(&text.replace('.', &sep.to_string())),
        _ => out.write_str(&text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i128, format: &str, provider: Option<&dyn FormatProvider>) -> Option<String> {
        let mut out = String::new();
        format_integer(&mut out, IntegerParts::signed(value, 32), format, provider)
            .map(|r| r.map(|_| out))
            .and_then(|r| r.ok())
    }

    fn float(value: f64, format: &str, provider: Option<&dyn FormatProvider>) -> Option<String> {
        let mut out = String::new();
        format_float(&mut out, value, format, provider)
            .map(|r| r.map(|_| out))
            .and_then(|r| r.ok())
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("D5"), Some(('D', Some(5))));
        assert_eq!(parse_format("x"), Some(('x', None)));
        assert_eq!(parse_format(""), None);
        assert_eq!(parse_format("5D"), None);
        assert_eq!(parse_format("Dabc"), None);
    }

    #[test]
    fn test_integer_formats() {
        assert_eq!(int(42, "D5", None).as_deref(), Some("00042"));
        assert_eq!(int(-42, "D4", None).as_deref(), Some("-0042"));
        assert_eq!(int(255, "X", None).as_deref(), Some("FF"));
        assert_eq!(int(255, "x4", None).as_deref(), Some("00ff"));
        assert_eq!(int(-1, "X", None).as_deref(), Some("FFFFFFFF"));
        assert_eq!(int(1234567, "N0", None).as_deref(), Some("1,234,567"));
        assert_eq!(int(12, "F", None).as_deref(), Some("12.00"));
        assert_eq!(int(12, "Q", None), None);
    }

    #[test]
    fn test_float_formats() {
        assert_eq!(float(3.14159, "F2", None).as_deref(), Some("3.14"));
        assert_eq!(float(-1234.5, "N1", None).as_deref(), Some("-1,234.5"));
        assert_eq!(float(1500.0, "E2", None).as_deref(), Some("1.50E3"));
        assert_eq!(float(f64::NAN, "F2", None), None);
    }

    #[test]
    fn test_provider_separators() {
        let german = NumberFormat::new(',', '.');
        assert_eq!(float(1234.5, "N2", Some(&german)).as_deref(), Some("1.234,50"));
        assert_eq!(int(1234567, "N0", Some(&german)).as_deref(), Some("1.234.567"));

        let mut out = String::new();
        write_float_default(&mut out, 2.5f64.to_string(), Some(&german)).unwrap();
        assert_eq!(out, "2,5");
    }
}
