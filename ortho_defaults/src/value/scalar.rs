//! Scalar implementations: booleans, numbers, characters and text.

use std::num::{IntErrorKind, ParseFloatError, ParseIntError};
use std::str::FromStr;

use crate::error::{DefaultsError, DefaultsResult, ValueError};
use crate::literal::{self, Literal};
use crate::schema::Kind;

use super::DefaultValue;

const TRUE_TOKENS: [&str; 6] = ["1", "t", "T", "TRUE", "true", "True"];
const FALSE_TOKENS: [&str; 6] = ["0", "f", "F", "FALSE", "false", "False"];

/// First integer past `u64::MAX`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;
/// `i64::MIN`.
const I64_FLOOR: f64 = -9_223_372_036_854_775_808.0;

fn parse_integer<T>(spec: &str) -> DefaultsResult<T>
where
    T: FromStr<Err = ParseIntError>,
{
    let token = spec.trim();
    token.parse::<T>().map_err(|err| {
        let reason = match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValueError::OutOfRange {
                value: token.to_owned(),
            },
            _ => ValueError::InvalidToken {
                token: token.to_owned(),
                expected: "integer",
                reason: err.to_string(),
            },
        };
        DefaultsError::parse::<T>(spec, reason)
    })
}

fn integer_from_literal<T>(literal: &Literal) -> DefaultsResult<T>
where
    T: TryFrom<i64> + TryFrom<u64>,
{
    let Literal::Number(number) = literal else {
        return Err(literal::mismatch::<T>(literal, "integer"));
    };
    let converted = if let Some(signed) = number.as_i64() {
        <T as TryFrom<i64>>::try_from(signed).ok()
    } else if let Some(unsigned) = number.as_u64() {
        <T as TryFrom<u64>>::try_from(unsigned).ok()
    } else if number
        .as_f64()
        .is_some_and(|wide| wide >= U64_LIMIT || wide < I64_FLOOR)
    {
        None
    } else {
        return Err(DefaultsError::parse::<T>(
            number.to_string(),
            ValueError::InvalidToken {
                token: number.to_string(),
                expected: "integer",
                reason: "fractional or exponent notation".to_owned(),
            },
        ));
    };
    converted.ok_or_else(|| {
        DefaultsError::parse::<T>(
            number.to_string(),
            ValueError::OutOfRange {
                value: number.to_string(),
            },
        )
    })
}

macro_rules! integer_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DefaultValue for $ty {
                const KIND: Kind = Kind::Scalar;

                fn parse_default(spec: &str) -> DefaultsResult<Self> {
                    parse_integer(spec)
                }

                fn from_literal(literal: &Literal) -> DefaultsResult<Self> {
                    integer_from_literal(literal)
                }
            }
        )*
    };
}

integer_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

/// Whether `token` names infinity explicitly, as `inf` or `infinity`.
fn spells_infinity(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn parse_float<T>(spec: &str) -> DefaultsResult<T>
where
    T: FromStr<Err = ParseFloatError> + Into<f64> + Copy,
{
    let token = spec.trim();
    let value = token.parse::<T>().map_err(|err| {
        DefaultsError::parse::<T>(
            spec,
            ValueError::InvalidToken {
                token: token.to_owned(),
                expected: "float",
                reason: err.to_string(),
            },
        )
    })?;
    // Overflowing digits saturate to infinity instead of failing.
    if Into::<f64>::into(value).is_infinite() && !spells_infinity(token) {
        return Err(DefaultsError::parse::<T>(
            spec,
            ValueError::OutOfRange {
                value: token.to_owned(),
            },
        ));
    }
    Ok(value)
}

fn float_from_literal<T: ?Sized>(literal: &Literal) -> DefaultsResult<f64> {
    literal
        .as_f64()
        .ok_or_else(|| literal::mismatch::<T>(literal, "number"))
}

impl DefaultValue for f64 {
    const KIND: Kind = Kind::Scalar;

    fn parse_default(spec: &str) -> DefaultsResult<Self> {
        parse_float(spec)
    }

    fn from_literal(literal: &Literal) -> DefaultsResult<Self> {
        float_from_literal::<Self>(literal)
    }
}

impl DefaultValue for f32 {
    const KIND: Kind = Kind::Scalar;

    fn parse_default(spec: &str) -> DefaultsResult<Self> {
        parse_float(spec)
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "range is checked before narrowing; precision loss is accepted"
    )]
    fn from_literal(literal: &Literal) -> DefaultsResult<Self> {
        let wide = float_from_literal::<Self>(literal)?;
        if wide.abs() > f64::from(Self::MAX) {
            return Err(DefaultsError::parse::<Self>(
                literal.to_string(),
                ValueError::OutOfRange {
                    value: literal.to_string(),
                },
            ));
        }
        Ok(wide as Self)
    }
}

impl DefaultValue for bool {
    const KIND: Kind = Kind::Scalar;

    fn parse_default(spec: &str) -> DefaultsResult<Self> {
        let token = spec.trim();
        if TRUE_TOKENS.contains(&token) {
            Ok(true)
        } else if FALSE_TOKENS.contains(&token) {
            Ok(false)
        } else {
            Err(DefaultsError::parse::<Self>(
                spec,
                ValueError::InvalidToken {
                    token: token.to_owned(),
                    expected: "boolean",
                    reason: "expected true or false".to_owned(),
                },
            ))
        }
    }

    fn from_literal(literal: &Literal) -> DefaultsResult<Self> {
        literal
            .as_bool()
            .ok_or_else(|| literal::mismatch::<Self>(literal, "boolean"))
    }
}

impl DefaultValue for char {
    const KIND: Kind = Kind::Scalar;

    fn parse_default(spec: &str) -> DefaultsResult<Self> {
        let mut chars = spec.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ch),
            _ => Err(DefaultsError::parse::<Self>(
                spec,
                ValueError::InvalidToken {
                    token: spec.to_owned(),
                    expected: "character",
                    reason: "expected exactly one character".to_owned(),
                },
            )),
        }
    }

    fn from_literal(literal: &Literal) -> DefaultsResult<Self> {
        Self::parse_default(literal::expect_str::<Self>(literal)?)
    }
}

impl DefaultValue for String {
    const KIND: Kind = Kind::Scalar;

    fn parse_default(spec: &str) -> DefaultsResult<Self> {
        Ok(spec.to_owned())
    }

    fn from_literal(literal: &Literal) -> DefaultsResult<Self> {
        literal::expect_str::<Self>(literal).map(str::to_owned)
    }
}
