use std::any::type_name;
use std::fmt;
use std::sync::Arc;

/// A composable accessor for one variant of an enum.
///
/// Pairs a total `embed` (payload in, enum out) with a partial `extract`
/// (enum in, payload out when the variant matches). Both halves are stored
/// behind `Arc`, so cloning a case path is cheap and a clone is always safe
/// to hand to another thread.
pub struct CasePath<Root, Value> {
    embed: Arc<dyn Fn(Value) -> Root + Send + Sync>,
    extract: Arc<dyn Fn(&Root) -> Option<Value> + Send + Sync>,
    path: Option<Vec<&'static str>>,
}

impl<Root, Value> Clone for CasePath<Root, Value> {
    fn clone(&self) -> Self {
        Self {
            embed: Arc::clone(&self.embed),
            extract: Arc::clone(&self.extract),
            path: self.path.clone(),
        }
    }
}

impl<Root, Value> CasePath<Root, Value> {
    /// Build a case path from an embed/extract pair.
    ///
    /// The pair is stored verbatim; nothing is validated here. Callers are
    /// trusted to uphold the round-trip law: whenever
    /// `extract(&root) == Some(value)`, re-embedding `value` must produce a
    /// root that extracts to the same value again.
    pub fn new<E, X>(embed: E, extract: X) -> Self
    where
        E: Fn(Value) -> Root + Send + Sync + 'static,
        X: Fn(&Root) -> Option<Value> + Send + Sync + 'static,
    {
        Self {
            embed: Arc::new(embed),
            extract: Arc::new(extract),
            path: None,
        }
    }

    /// Attach symbolic component names, root type label first.
    ///
    /// Only affects `Debug` output and [`same_path`](Self::same_path).
    pub fn with_path(mut self, components: &[&'static str]) -> Self {
        self.path = Some(components.to_vec());
        self
    }

    /// Wrap a payload into the targeted variant. Always succeeds.
    pub fn embed(&self, value: Value) -> Root {
        (self.embed)(value)
    }

    /// Recover the payload from `root`, or `None` if it holds a different
    /// variant.
    pub fn extract(&self, root: &Root) -> Option<Value> {
        (self.extract)(root)
    }

    /// Does `root` currently hold the targeted variant?
    pub fn matches(&self, root: &Root) -> bool {
        (self.extract)(root).is_some()
    }

    /// Update the payload in place: extract, apply `update`, embed back.
    ///
    /// Leaves `root` untouched and returns `false` when the variant does not
    /// match.
    pub fn modify<F>(&self, root: &mut Root, update: F) -> bool
    where
        F: FnOnce(&mut Value),
    {
        match (self.extract)(root) {
            Some(mut value) => {
                update(&mut value);
                *root = (self.embed)(value);
                true
            }
            None => false,
        }
    }

    /// Replace the payload if `root` currently holds the targeted variant.
    pub fn set(&self, root: &mut Root, value: Value) -> bool {
        if self.matches(root) {
            *root = (self.embed)(value);
            true
        } else {
            false
        }
    }

    /// Chain into a case path on the extracted payload.
    ///
    /// Embedding composes back-to-front; extraction short-circuits on the
    /// first mismatch. `then` is associative and [`identity`](Self::identity)
    /// is neutral on either side, so arbitrarily long chains reduce by
    /// repeated `then` with no special N-ary support.
    pub fn then<Next>(self, next: CasePath<Value, Next>) -> CasePath<Root, Next>
    where
        Root: 'static,
        Value: 'static,
        Next: 'static,
    {
        let path = match (&self.path, &next.path) {
            // drop the appended path's root label; it names the join point
            (Some(first), Some(second)) => {
                let mut joined = first.clone();
                joined.extend(second.iter().skip(1));
                Some(joined)
            }
            _ => None,
        };
        let embed_first = self.embed;
        let embed_second = next.embed;
        let extract_first = self.extract;
        let extract_second = next.extract;
        CasePath {
            embed: Arc::new(move |appended| embed_first(embed_second(appended))),
            extract: Arc::new(move |root: &Root| {
                extract_first(root).and_then(|value| extract_second(&value))
            }),
            path,
        }
    }

    /// The symbolic components, if this path carries any.
    pub fn path(&self) -> Option<&[&'static str]> {
        self.path.as_deref()
    }

    /// Fast syntactic identity check: `true` only when both paths carry
    /// components and the sequences are equal. Paths without components
    /// never compare equal, even to themselves.
    pub fn same_path(&self, other: &Self) -> bool {
        matches!((&self.path, &other.path), (Some(a), Some(b)) if a == b)
    }
}

impl<T> CasePath<T, T>
where
    T: Clone + 'static,
{
    /// The neutral element of [`then`](Self::then): embed and extract are
    /// both the identity function.
    pub fn identity() -> Self {
        CasePath::new(|value| value, |root: &T| Some(root.clone()))
    }
}

impl<Root, Value> fmt::Debug for CasePath<Root, Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(components) => write!(f, "CasePath({})", components.join(".")),
            None => write!(
                f,
                "CasePath<{}, {}>",
                type_name::<Root>(),
                type_name::<Value>()
            ),
        }
    }
}
