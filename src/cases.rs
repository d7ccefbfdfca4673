use std::any::{Any, TypeId};
use std::mem::{self, Discriminant};
use std::sync::{Arc, OnceLock};

use crate::CasePath;

/// Runtime view of an enum's variant layout.
///
/// This is the one capability [`CasePath::case`] needs from a root type:
/// read the active variant's tag label and borrow its payload slot. Derive
/// it with `#[derive(Cases)]` from casepaths-proc, or implement it by hand
/// for enums you don't own — the impl is a single `match` per method.
pub trait Cases {
    /// Total number of variants.
    const CASES: usize;

    /// Tag label of the active variant.
    fn case_name(&self) -> &'static str;

    /// Borrow the active variant's payload slot.
    ///
    /// `None` for payload-less variants. A `Box`ed payload is unwrapped one
    /// level so descent sees the boxed value itself. Variants carrying more
    /// than one field have no single slot and report `None`; use derived
    /// accessors for those.
    fn payload(&self) -> Option<&dyn Any>;
}

impl<Root, Value> CasePath<Root, Value>
where
    Root: Cases + PartialEq + Any,
    Value: Any + Clone,
{
    /// Build a case path from a variant constructor alone.
    ///
    /// Extraction is synthesized against the [`Cases`] layout of `Root`:
    ///
    /// 1. If `Root` and `Value` are the same type, try the whole root as the
    ///    candidate; accept immediately when re-embedding it reproduces the
    ///    original root. This covers identity-like embeddings and falls
    ///    through for recursive constructors such as
    ///    `|e| Expr::Paren(Box::new(e))`.
    /// 2. Otherwise descend into the active payload slot and downcast it to
    ///    `Value`.
    /// 3. For a payload-less variant, synthesize the unit payload instead.
    ///    Uninhabited payload types can never be synthesized and always
    ///    extract to `None`.
    /// 4. Cross-check: re-embed a clone of the candidate and require its
    ///    discriminant to equal the root's. Two variants sharing a payload
    ///    type therefore never cross-match.
    ///
    /// The constructor's discriminant is fixed, so the first re-embed stores
    /// it in a write-once cell and later extractions skip the re-embed.
    /// Racing first uses recompute the same value; extra writes are
    /// discarded.
    ///
    /// Best effort: calling this with a closure that is not a genuine
    /// variant constructor of `Root` degrades to extractions that return
    /// `None`, never to a wrong payload or a panic.
    pub fn case<E>(embed: E) -> Self
    where
        E: Fn(Value) -> Root + Send + Sync + 'static,
    {
        let embed = Arc::new(embed);
        let embed_for_extract = Arc::clone(&embed);
        let tag: Arc<OnceLock<Discriminant<Root>>> = Arc::new(OnceLock::new());
        CasePath::new(
            move |value| embed(value),
            move |root: &Root| {
                if TypeId::of::<Root>() == TypeId::of::<Value>() {
                    if let Some(candidate) = (root as &dyn Any).downcast_ref::<Value>() {
                        let trial = embed_for_extract(candidate.clone());
                        if trial == *root {
                            return Some(candidate.clone());
                        }
                    }
                }
                let candidate: Value = match root.payload() {
                    Some(slot) => slot.downcast_ref::<Value>()?.clone(),
                    // payload-less variant: the payload is the unit value
                    None => *(Box::new(()) as Box<dyn Any>).downcast::<Value>().ok()?,
                };
                let target = tag
                    .get_or_init(|| mem::discriminant(&embed_for_extract(candidate.clone())));
                if mem::discriminant(root) == *target {
                    Some(candidate)
                } else {
                    None
                }
            },
        )
    }
}
