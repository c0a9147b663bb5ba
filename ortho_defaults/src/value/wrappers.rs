//! `Option<T>` and `Box<T>` implementations.

use tracing::trace;

use crate::error::DefaultsResult;
use crate::literal::Literal;
use crate::schema::Kind;

use super::DefaultValue;

impl<T: DefaultValue> DefaultValue for Option<T> {
    const KIND: Kind = Kind::Optional;

    fn parse_default(spec: &str) -> DefaultsResult<Self> {
        T::parse_default(spec).map(Some)
    }

    fn from_literal(literal: &Literal) -> DefaultsResult<Self> {
        if literal.is_null() {
            return Ok(None);
        }
        T::from_literal(literal).map(Some)
    }

    fn descend(&mut self) -> DefaultsResult<()> {
        match self {
            Some(inner) => inner.descend(),
            None => Ok(()),
        }
    }

    fn fill_unset(&mut self) -> DefaultsResult<()> {
        if self.is_some() || T::KIND != Kind::Composite {
            return Ok(());
        }
        trace!(
            target_type = std::any::type_name::<T>(),
            "allocating optional composite"
        );
        let mut inner = T::default();
        inner.fill_unset()?;
        *self = Some(inner);
        Ok(())
    }
}

impl<T: DefaultValue> DefaultValue for Box<T> {
    const KIND: Kind = T::KIND;

    fn parse_default(spec: &str) -> DefaultsResult<Self> {
        T::parse_default(spec).map(Self::new)
    }

    fn from_literal(literal: &Literal) -> DefaultsResult<Self> {
        T::from_literal(literal).map(Self::new)
    }

    fn descend(&mut self) -> DefaultsResult<()> {
        (**self).descend()
    }

    fn fill_unset(&mut self) -> DefaultsResult<()> {
        (**self).fill_unset()
    }
}
