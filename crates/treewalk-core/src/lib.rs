//! # treewalk-core
//!
//! An ordered JSON-like document tree and a stateless depth-first
//! **navigator** that reports each step of a walk to a caller-supplied
//! [`Visitor`]. Renderers are just visitors: the compact and pretty JSON
//! writers in [`render`] need no knowledge of tree semantics beyond the
//! callbacks they receive.
//!
//! Two policies are baked into the navigator:
//!
//! - **Null object members are invisible.** A member whose value is `Null`
//!   produces no callback and does not count as the first member.
//! - **Null array slots are reported.** Each one produces
//!   `visit_null_array_member` followed by a nested `visit_null`, so a
//!   renderer keeps its position and separator.
//!
//! ## Quick start
//!
//! ```rust
//! use treewalk_core::{to_compact_string, Value};
//!
//! let doc = Value::from_json_str(r#"{"a":1,"b":null,"c":[2,null]}"#).unwrap();
//! assert_eq!(to_compact_string(&doc).unwrap(), r#"{"a":1,"c":[2,null]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value`, `Primitive`, and insertion-ordered `Members`
//! - [`visitor`]: the `Visitor` callback trait
//! - [`navigator`]: depth-first traversal with a nesting limit
//! - [`render`](mod@render): compact and pretty JSON writers
//! - [`stats`]: shape statistics collected by traversal
//! - [`error`]: error types

pub mod error;
pub mod navigator;
pub mod render;
pub mod stats;
pub mod value;
pub mod visitor;

pub use error::{NavigateError, Result, TreeError};
pub use navigator::{navigate, Navigator, DEFAULT_MAX_DEPTH};
pub use render::{render, to_compact_string, to_pretty_string, CompactWriter, Format, PrettyWriter};
pub use stats::TreeStats;
pub use value::{Members, Primitive, Value, ValueKind};
pub use visitor::Visitor;
