use std::any::{Any, TypeId};
use std::sync::Arc;

use crate::CasePath;

/// Case path with the `Value` type hidden but `Root` kept visible.
///
/// Useful for storing one collection of case paths covering every variant of
/// an enum. Extraction goes through `Box<dyn Any>`; use
/// [`extract_as`](Self::extract_as) when the payload type is known.
pub struct PartialCasePath<Root> {
    name: &'static str,
    value_type_id: TypeId,
    is_match: Arc<dyn Fn(&Root) -> bool + Send + Sync>,
    extract_any: Arc<dyn Fn(&Root) -> Option<Box<dyn Any>> + Send + Sync>,
    embed_any: Arc<dyn Fn(Box<dyn Any>) -> Option<Root> + Send + Sync>,
}

impl<Root> Clone for PartialCasePath<Root> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            value_type_id: self.value_type_id,
            is_match: Arc::clone(&self.is_match),
            extract_any: Arc::clone(&self.extract_any),
            embed_any: Arc::clone(&self.embed_any),
        }
    }
}

impl<Root: 'static> PartialCasePath<Root> {
    /// Erase the payload type of a case path.
    ///
    /// The case label is taken from the path's last symbolic component;
    /// unlabeled paths report `"_"`.
    pub fn new<Value: Any>(case_path: CasePath<Root, Value>) -> Self {
        let name = case_path
            .path()
            .and_then(|components| components.last().copied())
            .unwrap_or("_");
        let matcher = case_path.clone();
        let extractor = case_path.clone();
        let embedder = case_path;
        Self {
            name,
            value_type_id: TypeId::of::<Value>(),
            is_match: Arc::new(move |root| matcher.matches(root)),
            extract_any: Arc::new(move |root| {
                extractor
                    .extract(root)
                    .map(|value| Box::new(value) as Box<dyn Any>)
            }),
            embed_any: Arc::new(move |value: Box<dyn Any>| {
                value
                    .downcast::<Value>()
                    .ok()
                    .map(|value| embedder.embed(*value))
            }),
        }
    }

    /// The case label this accessor targets.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `TypeId` of the hidden `Value` type.
    pub fn value_type_id(&self) -> TypeId {
        self.value_type_id
    }

    /// Does `root` currently hold the targeted variant?
    pub fn matches(&self, root: &Root) -> bool {
        (self.is_match)(root)
    }

    /// Extract the payload as a boxed `Any`.
    pub fn extract(&self, root: &Root) -> Option<Box<dyn Any>> {
        (self.extract_any)(root)
    }

    /// Extract and downcast in one step. `None` on a variant mismatch or
    /// when `Value` is not the hidden payload type.
    pub fn extract_as<Value: Any>(&self, root: &Root) -> Option<Value> {
        if self.value_type_id != TypeId::of::<Value>() {
            return None;
        }
        self.extract(root)?
            .downcast::<Value>()
            .ok()
            .map(|value| *value)
    }

    /// Embed a boxed payload. `None` when the box does not hold the hidden
    /// payload type.
    pub fn embed(&self, value: Box<dyn Any>) -> Option<Root> {
        (self.embed_any)(value)
    }
}

/// Case path with both `Root` and `Value` hidden.
///
/// The fully type-erased form, for heterogeneous registries. Every access is
/// checked against the stored `TypeId`s.
pub struct AnyCasePath {
    root_type_id: TypeId,
    value_type_id: TypeId,
    extract_any: Arc<dyn Fn(&dyn Any) -> Option<Box<dyn Any>> + Send + Sync>,
    embed_any: Arc<dyn Fn(Box<dyn Any>) -> Option<Box<dyn Any>> + Send + Sync>,
}

impl Clone for AnyCasePath {
    fn clone(&self) -> Self {
        Self {
            root_type_id: self.root_type_id,
            value_type_id: self.value_type_id,
            extract_any: Arc::clone(&self.extract_any),
            embed_any: Arc::clone(&self.embed_any),
        }
    }
}

impl AnyCasePath {
    /// Erase both sides of a case path.
    pub fn new<Root: Any, Value: Any>(case_path: CasePath<Root, Value>) -> Self {
        let extractor = case_path.clone();
        let embedder = case_path;
        Self {
            root_type_id: TypeId::of::<Root>(),
            value_type_id: TypeId::of::<Value>(),
            extract_any: Arc::new(move |root: &dyn Any| {
                let root = root.downcast_ref::<Root>()?;
                extractor
                    .extract(root)
                    .map(|value| Box::new(value) as Box<dyn Any>)
            }),
            embed_any: Arc::new(move |value: Box<dyn Any>| {
                value
                    .downcast::<Value>()
                    .ok()
                    .map(|value| Box::new(embedder.embed(*value)) as Box<dyn Any>)
            }),
        }
    }

    /// `TypeId` of the hidden `Root` type.
    pub fn root_type_id(&self) -> TypeId {
        self.root_type_id
    }

    /// `TypeId` of the hidden `Value` type.
    pub fn value_type_id(&self) -> TypeId {
        self.value_type_id
    }

    /// Extract from an erased root.
    pub fn extract(&self, root: &dyn Any) -> Option<Box<dyn Any>> {
        (self.extract_any)(root)
    }

    /// Typed extraction, checked against both stored `TypeId`s.
    pub fn extract_as<Root: Any, Value: Any>(&self, root: &Root) -> Option<Value> {
        if self.root_type_id != TypeId::of::<Root>() || self.value_type_id != TypeId::of::<Value>()
        {
            return None;
        }
        self.extract(root)?
            .downcast::<Value>()
            .ok()
            .map(|value| *value)
    }

    /// Typed embedding, checked against both stored `TypeId`s.
    pub fn embed_as<Root: Any, Value: Any>(&self, value: Value) -> Option<Root> {
        if self.root_type_id != TypeId::of::<Root>() || self.value_type_id != TypeId::of::<Value>()
        {
            return None;
        }
        (self.embed_any)(Box::new(value))?
            .downcast::<Root>()
            .ok()
            .map(|root| *root)
    }
}

impl<Root: 'static, Value: Any> CasePath<Root, Value> {
    /// Convert to a [`PartialCasePath`], hiding the `Value` type.
    pub fn to_partial(self) -> PartialCasePath<Root> {
        PartialCasePath::new(self)
    }

    /// Convert to an [`AnyCasePath`], hiding both types.
    pub fn to_any(self) -> AnyCasePath
    where
        Root: Any,
    {
        AnyCasePath::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Shape {
        Circle(f64),
        Square(f64),
    }

    fn circle() -> CasePath<Shape, f64> {
        CasePath::new(Shape::Circle, |s: &Shape| match s {
            Shape::Circle(r) => Some(*r),
            _ => None,
        })
        .with_path(&["Shape", "Circle"])
    }

    #[test]
    fn partial_keeps_name_and_type() {
        let partial = circle().to_partial();
        assert_eq!(partial.name(), "Circle");
        assert_eq!(partial.value_type_id(), TypeId::of::<f64>());
        assert!(partial.matches(&Shape::Circle(1.0)));
        assert!(!partial.matches(&Shape::Square(1.0)));
        assert_eq!(partial.extract_as::<f64>(&Shape::Circle(2.0)), Some(2.0));
        assert_eq!(partial.extract_as::<f32>(&Shape::Circle(2.0)), None);
    }

    #[test]
    fn partial_embed_checks_payload_type() {
        let partial = circle().to_partial();
        assert_eq!(partial.embed(Box::new(3.0f64)), Some(Shape::Circle(3.0)));
        assert_eq!(partial.embed(Box::new("oops")), None);
    }

    #[test]
    fn any_checks_both_sides() {
        let any = circle().to_any();
        assert_eq!(any.root_type_id(), TypeId::of::<Shape>());
        assert_eq!(any.extract_as::<Shape, f64>(&Shape::Circle(2.0)), Some(2.0));
        assert_eq!(any.extract_as::<Shape, f64>(&Shape::Square(2.0)), None);
        assert_eq!(any.extract_as::<u8, f64>(&0u8), None);
        assert_eq!(any.embed_as::<Shape, f64>(1.5), Some(Shape::Circle(1.5)));
        assert_eq!(any.embed_as::<u8, f64>(1.5), None::<u8>);
    }
}
