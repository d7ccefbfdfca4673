//! Case paths for Rust: keypaths for enum variants.
//!
//! A [`CasePath<Root, Value>`] pairs two functions targeting one variant of an
//! enum: `embed`, which wraps a payload into that variant, and `extract`,
//! which recovers the payload from an arbitrary instance, returning `None`
//! when the instance is a different variant. Case paths compose with
//! [`then`](CasePath::then) across nested enums and structs, exactly like
//! field keypaths compose across struct fields.
//!
//! Use with [casepaths-proc]: derive `Casepaths` on your enums to get one
//! accessor per variant, or implement [`Cases`] by hand for enums you don't
//! own and let [`CasePath::case`] work out extraction from the constructor
//! alone.
//!
//! [casepaths-proc]: https://docs.rs/casepaths-proc
//!
//! # Examples
//!
//! ```
//! use rust_case_paths::CasePath;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Status {
//!     Active(String),
//!     Inactive,
//! }
//!
//! let active = CasePath::new(Status::Active, |s: &Status| match s {
//!     Status::Active(name) => Some(name.clone()),
//!     _ => None,
//! });
//!
//! assert_eq!(active.extract(&Status::Active("on".into())), Some("on".into()));
//! assert_eq!(active.extract(&Status::Inactive), None);
//! assert_eq!(active.embed("off".into()), Status::Active("off".into()));
//! ```

mod canonical;
mod case_path;
mod cases;
mod partial;

pub use case_path::CasePath;
pub use cases::Cases;
pub use partial::{AnyCasePath, PartialCasePath};
