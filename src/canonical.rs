//! Hand-written case paths for the foundational two-variant sum types and
//! for value-level bridges. `Option` and `Result` get explicit matches here
//! rather than going through the runtime extractor.

use std::convert::Infallible;
use std::str::FromStr;

use crate::CasePath;

impl<T> CasePath<Option<T>, T>
where
    T: Clone + 'static,
{
    /// Targets the present value of an `Option`.
    pub fn for_some() -> Self {
        CasePath::new(Some, |root: &Option<T>| root.clone()).with_path(&["Option", "Some"])
    }
}

impl<T> CasePath<Option<T>, ()>
where
    T: 'static,
{
    /// Targets absence. Embeds the unit payload as `None`.
    pub fn for_none() -> Self {
        CasePath::new(
            |_unit| None,
            |root: &Option<T>| match root {
                None => Some(()),
                Some(_) => None,
            },
        )
        .with_path(&["Option", "None"])
    }
}

impl<T, E> CasePath<Result<T, E>, T>
where
    T: Clone + 'static,
    E: 'static,
{
    /// Targets the success value of a `Result`.
    pub fn for_ok() -> Self {
        CasePath::new(Ok, |root: &Result<T, E>| root.as_ref().ok().cloned())
            .with_path(&["Result", "Ok"])
    }
}

impl<T, E> CasePath<Result<T, E>, E>
where
    T: 'static,
    E: Clone + 'static,
{
    /// Targets the error value of a `Result`.
    pub fn for_err() -> Self {
        CasePath::new(Err, |root: &Result<T, E>| root.as_ref().err().cloned())
            .with_path(&["Result", "Err"])
    }
}

impl<Root> CasePath<Root, Infallible>
where
    Root: 'static,
{
    /// A case path that never matches. Extraction is always `None`; embed
    /// can never be called because no `Infallible` value exists.
    pub fn for_never() -> Self {
        CasePath::new(|value: Infallible| match value {}, |_root: &Root| None)
    }
}

impl<Value> CasePath<(), Value>
where
    Value: Clone + Send + Sync + 'static,
{
    /// For a unit root: always extracts a clone of `value`, and embedding
    /// discards its input.
    pub fn for_constant(value: Value) -> Self {
        CasePath::new(|_value| (), move |_root: &()| Some(value.clone()))
    }
}

impl<Root, Value> CasePath<Root, Value>
where
    Root: Clone + 'static,
    Value: TryFrom<Root> + Into<Root> + 'static,
{
    /// Validating conversion bridge: extraction attempts `TryFrom`, embed is
    /// the total `Into` projection.
    pub fn for_conversion() -> Self {
        CasePath::new(Into::into, |root: &Root| Value::try_from(root.clone()).ok())
    }
}

impl<Value> CasePath<String, Value>
where
    Value: FromStr + ToString + 'static,
{
    /// String bridge: extraction is a validating parse, embed renders back.
    pub fn for_parse() -> Self {
        CasePath::new(|value: Value| value.to_string(), |root: &String| root.parse().ok())
    }
}
