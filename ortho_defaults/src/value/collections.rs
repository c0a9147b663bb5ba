//! Sequence and mapping implementations.
//!
//! Collections are defaulted as whole values from their own literal.
//! Elements are decoded through [`DefaultValue::from_literal`], which puts
//! composite elements through the full defaulting pipeline as they are
//! built. A collection the caller already populated is never merged with
//! its specification, so the default `descend` is kept.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};
use std::str::FromStr;

use crate::error::{DefaultsError, DefaultsResult, ValueError};
use crate::literal::{self, Literal};
use crate::schema::Kind;

use super::DefaultValue;

fn parse_key<K>(raw: &str) -> DefaultsResult<K>
where
    K: FromStr,
    K::Err: Display,
{
    raw.parse::<K>().map_err(|err| {
        DefaultsError::parse::<K>(
            raw,
            ValueError::InvalidToken {
                token: raw.to_owned(),
                expected: "map key",
                reason: err.to_string(),
            },
        )
        .at_key(raw)
    })
}

fn decode_entries<K, V, M>(literal: &Literal) -> DefaultsResult<M>
where
    K: FromStr,
    K::Err: Display,
    V: DefaultValue,
    M: FromIterator<(K, V)>,
{
    literal::expect_object::<M>(literal)?
        .iter()
        .map(|(raw_key, node)| -> DefaultsResult<(K, V)> {
            let key = parse_key::<K>(raw_key)?;
            let value = V::from_literal(node).map_err(|err| err.at_key(raw_key))?;
            Ok((key, value))
        })
        .collect()
}

impl<T: DefaultValue> DefaultValue for Vec<T> {
    const KIND: Kind = Kind::Sequence;

    fn parse_default(spec: &str) -> DefaultsResult<Self> {
        Self::from_literal(&literal::parse::<Self>(spec)?)
    }

    fn from_literal(literal: &Literal) -> DefaultsResult<Self> {
        literal::expect_array::<Self>(literal)?
            .iter()
            .enumerate()
            .map(|(index, node)| T::from_literal(node).map_err(|err| err.at_index(index)))
            .collect()
    }
}

impl<K, V, S> DefaultValue for HashMap<K, V, S>
where
    K: FromStr + Eq + Hash,
    K::Err: Display,
    V: DefaultValue,
    S: BuildHasher + Default,
{
    const KIND: Kind = Kind::Mapping;

    fn parse_default(spec: &str) -> DefaultsResult<Self> {
        Self::from_literal(&literal::parse::<Self>(spec)?)
    }

    fn from_literal(literal: &Literal) -> DefaultsResult<Self> {
        decode_entries::<K, V, Self>(literal)
    }
}

impl<K, V> DefaultValue for BTreeMap<K, V>
where
    K: FromStr + Ord,
    K::Err: Display,
    V: DefaultValue,
{
    const KIND: Kind = Kind::Mapping;

    fn parse_default(spec: &str) -> DefaultsResult<Self> {
        Self::from_literal(&literal::parse::<Self>(spec)?)
    }

    fn from_literal(literal: &Literal) -> DefaultsResult<Self> {
        decode_entries::<K, V, Self>(literal)
    }
}
