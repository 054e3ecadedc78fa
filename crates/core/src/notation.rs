//! String renderings of decimal values.
//!
//! A value is viewed as `sign × coefficient × 10^exponent`. The engineering and
//! scientific strings follow the usual decimal-arithmetic conventions: plain notation
//! while the exponent is non-positive and the value is not too small, otherwise a
//! mantissa with an `E±n` suffix (a multiple of three in engineering form).

use rust_decimal::Decimal;

/// Sign, coefficient digits, and power-of-ten exponent of a decimal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalParts {
    pub negative: bool,
    pub digits: String,
    pub exponent: i64,
}

impl DecimalParts {
    pub fn from_decimal(value: Decimal) -> Self {
        Self {
            negative: value.is_sign_negative() && !value.is_zero(),
            digits: value.mantissa().unsigned_abs().to_string(),
            exponent: -i64::from(value.scale()),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.digits.bytes().all(|b| b == b'0')
    }

    /// Strip trailing zeros from the coefficient into the exponent. Zero becomes `0`.
    pub fn normalize(mut self) -> Self {
        if self.is_zero() {
            self.digits = "0".to_string();
            self.exponent = 0;
            self.negative = false;
            return self;
        }
        let trimmed = self.digits.trim_end_matches('0').len();
        self.exponent += (self.digits.len() - trimmed) as i64;
        self.digits.truncate(trimmed);
        self
    }

    pub fn to_sci_string(&self) -> String {
        self.render(false)
    }

    pub fn to_eng_string(&self) -> String {
        self.render(true)
    }

    fn render(&self, engineering: bool) -> String {
        let len = self.digits.len() as i64;
        let leftdigits = self.exponent + len;

        let dotplace = if self.exponent <= 0 && leftdigits > -6 {
            leftdigits
        } else if !engineering {
            1
        } else if self.is_zero() {
            (leftdigits + 1).rem_euclid(3) - 1
        } else {
            (leftdigits - 1).rem_euclid(3) + 1
        };

        let (intpart, fracpart) = if dotplace <= 0 {
            (
                "0".to_string(),
                format!(".{}{}", "0".repeat((-dotplace) as usize), self.digits),
            )
        } else if dotplace >= len {
            (
                format!("{}{}", self.digits, "0".repeat((dotplace - len) as usize)),
                String::new(),
            )
        } else {
            let (int, frac) = self.digits.split_at(dotplace as usize);
            (int.to_string(), format!(".{frac}"))
        };

        let exp = if leftdigits == dotplace {
            String::new()
        } else {
            format!("E{:+}", leftdigits - dotplace)
        };
        let sign = if self.negative { "-" } else { "" };
        format!("{sign}{intpart}{fracpart}{exp}")
    }
}

/// Engineering-notation string of the value as stored (`0.2333…3`, `1.52`).
pub fn to_eng_string(value: Decimal) -> String {
    DecimalParts::from_decimal(value).to_eng_string()
}

/// Engineering-notation string of the normalized value (`150000000` → `150E+6`).
pub fn normalized_eng_string(value: Decimal) -> String {
    DecimalParts::from_decimal(value).normalize().to_eng_string()
}

/// Default decimal string of the value as stored.
pub fn to_sci_string(value: Decimal) -> String {
    DecimalParts::from_decimal(value).to_sci_string()
}

/// Exponential format with one leading digit and `fraction_digits` rounded (half-even)
/// fractional digits: `format_exponential(78000000, 5)` is `7.80000e+7`.
pub fn format_exponential(value: Decimal, fraction_digits: usize) -> String {
    let parts = DecimalParts::from_decimal(value);
    let places = fraction_digits + 1;

    let (digits, adjusted) = if parts.is_zero() {
        // `Decimal` drops the positive exponent of zero, so this prints `0.00000e+0`
        // where a zero carried at `E+11` would print `0.00000e+11`
        ("0".repeat(places), 0)
    } else {
        let adjusted = parts.exponent + parts.digits.len() as i64 - 1;
        round_half_even(&parts.digits, places, adjusted)
    };

    let sign = if parts.negative { "-" } else { "" };
    let (lead, frac) = digits.split_at(1);
    if frac.is_empty() {
        format!("{sign}{lead}e{adjusted:+}")
    } else {
        format!("{sign}{lead}.{frac}e{adjusted:+}")
    }
}

/// Round a coefficient to exactly `places` digits, carrying into the adjusted exponent.
fn round_half_even(digits: &str, places: usize, adjusted: i64) -> (String, i64) {
    if digits.len() <= places {
        return (format!("{digits:0<places$}"), adjusted);
    }

    let (kept, rest) = digits.split_at(places);
    let mut out: Vec<u8> = kept.bytes().collect();
    let first = rest.as_bytes()[0];
    let tail_nonzero = rest.bytes().skip(1).any(|b| b != b'0');
    let last_odd = (out[places - 1] - b'0') % 2 == 1;
    let round_up = first > b'5' || (first == b'5' && (tail_nonzero || last_odd));

    if !round_up {
        return (String::from_utf8_lossy(&out).into_owned(), adjusted);
    }

    for digit in out.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return (String::from_utf8_lossy(&out).into_owned(), adjusted);
        }
    }
    // every kept digit was 9: 99999|9 -> 100000 with the exponent bumped
    out.insert(0, b'1');
    out.truncate(places);
    (String::from_utf8_lossy(&out).into_owned(), adjusted + 1)
}
