//! Statement builders.
//!
//! ## Design
//!
//! - Builders are owned values moved through the chain (`fn x(self) -> Self`).
//! - Setters never fail; validation runs once, at `build`.
//! - Every statement renders either terminal (`;`) or as an embeddable
//!   fragment. [`UnionBuilder`] and [`WithBuilder`](crate::WithBuilder) use the
//!   fragment form for inner members.

pub mod select;
pub mod traits;
pub mod union;

pub use select::SelectBuilder;
pub use traits::SqlBuilder;
pub use union::{UnionBuilder, UnionKind};
