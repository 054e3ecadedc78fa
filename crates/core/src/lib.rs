//! Core units, constants, and decimal primitives for the Space Travel Simulator workspace.
//!
//! Every quantity in the workspace is an exact `rust_decimal::Decimal`; nothing here
//! goes through binary floating point.

pub mod notation;

/// Physical constants.
pub mod constants {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    /// Propagation speed of light in vacuum (m/s).
    pub const SPEED_OF_LIGHT_M_S: Decimal = dec!(299792458);
    /// Metres per kilometre.
    pub const METERS_PER_KM: Decimal = dec!(1000);
}

/// Basic unit conversion helpers.
pub mod units {
    use rust_decimal::Decimal;

    use super::constants::{METERS_PER_KM, SPEED_OF_LIGHT_M_S};

    /// Convert metres per second to kilometres per second.
    #[inline]
    pub fn ms_to_kms(v: Decimal) -> Decimal {
        v / METERS_PER_KM
    }

    /// Speed of light expressed in km/s (299 792.458).
    #[inline]
    pub fn speed_of_light_kms() -> Decimal {
        ms_to_kms(SPEED_OF_LIGHT_M_S)
    }
}

/// Parsing and precision handling for decimal literals and quotients.
pub mod decimal {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use thiserror::Error;

    /// Significant digits kept by division results.
    pub const PRECISION: u32 = 28;

    #[derive(Debug, Error)]
    #[error("invalid decimal literal `{literal}`: {source}")]
    pub struct DecimalParseError {
        pub literal: String,
        #[source]
        pub source: rust_decimal::Error,
    }

    /// Parse a decimal literal in plain (`11.19`) or scientific (`35e6`, `1.5E+8`) form.
    pub fn parse(literal: &str) -> Result<Decimal, DecimalParseError> {
        let trimmed = literal.trim().replace('_', "");
        let result = if trimmed.contains(['e', 'E']) {
            Decimal::from_scientific(&trimmed.to_ascii_lowercase().replace("e+", "e"))
        } else {
            Decimal::from_str(&trimmed)
        };
        result.map_err(|source| DecimalParseError {
            literal: literal.to_string(),
            source,
        })
    }

    /// Quotient correctly rounded (half-even) to `PRECISION` significant digits.
    ///
    /// Exact quotients carry no more trailing zeros than the operands' scales call for:
    /// `228e6 / 150e6` is `1.52` and `150e6 / 150e6` is `1`. `None` on a zero divisor or
    /// a result outside `Decimal`'s range.
    pub fn divide(dividend: Decimal, divisor: Decimal) -> Option<Decimal> {
        if divisor.is_zero() {
            return None;
        }
        let negative = dividend.is_sign_negative() != divisor.is_sign_negative();
        let ideal = i64::from(divisor.scale()) - i64::from(dividend.scale());
        if dividend.is_zero() {
            // zero cannot carry a positive exponent here: 0 / 299792.458 is `0`, not `0E+3`
            return assemble(false, 0, ideal.clamp(-MAX_SCALE, 0));
        }

        let numerator = dividend.mantissa().unsigned_abs();
        let denominator = divisor.mantissa().unsigned_abs();
        let precision = PRECISION as usize;

        // integer part, then one fractional digit at a time; remainder < 2^96 so `* 10` fits
        let quotient = numerator / denominator;
        let mut digits: Vec<u8> = if quotient == 0 {
            Vec::new()
        } else {
            quotient.to_string().bytes().map(|b| b - b'0').collect()
        };
        let mut remainder = numerator % denominator;
        let mut last_exponent = ideal;
        while remainder != 0 && digits.len() <= precision && last_exponent > -MAX_SCALE - 1 {
            remainder *= 10;
            let digit = (remainder / denominator) as u8;
            remainder %= denominator;
            if !(digits.is_empty() && digit == 0) {
                digits.push(digit);
            }
            last_exponent -= 1;
        }

        let exact = remainder == 0;
        let len = digits.len();
        let below_range = usize::try_from(-MAX_SCALE - last_exponent).unwrap_or(0);
        let keep = len.min(precision).min(len.saturating_sub(below_range));
        let (kept, dropped) = digits.split_at(keep);
        let mut coefficient = kept.iter().fold(0u128, |acc, d| acc * 10 + u128::from(*d));
        let mut exponent = last_exponent + (len - keep) as i64;

        if exact && dropped.is_empty() {
            while exponent < ideal && coefficient != 0 && coefficient % 10 == 0 {
                coefficient /= 10;
                exponent += 1;
            }
        } else {
            let guard = dropped.first().copied().unwrap_or(0);
            let sticky = !exact || dropped.iter().skip(1).any(|d| *d != 0);
            let odd = coefficient % 2 == 1;
            if guard > 5 || (guard == 5 && (sticky || odd)) {
                coefficient += 1;
                if coefficient == 10u128.pow(PRECISION) {
                    coefficient /= 10;
                    exponent += 1;
                }
            }
        }

        assemble(negative, coefficient, exponent)
    }

    const MAX_SCALE: i64 = 28;

    fn assemble(negative: bool, coefficient: u128, exponent: i64) -> Option<Decimal> {
        let (magnitude, scale) = if exponent > 0 {
            let factor = 10u128.checked_pow(u32::try_from(exponent).ok()?)?;
            (coefficient.checked_mul(factor)?, 0)
        } else {
            (coefficient, u32::try_from(-exponent).ok()?)
        };
        let magnitude = i128::try_from(magnitude).ok()?;
        let signed = if negative && magnitude != 0 {
            -magnitude
        } else {
            magnitude
        };
        Decimal::try_from_i128_with_scale(signed, scale).ok()
    }
}
