//! # lambars-iter
//!
//! Iteration helpers for Rust: small, composable functions over lazy
//! sequences of values (`Iterator<Item = V>`) and of key/value pairs
//! (`Iterator<Item = (K, V)>`).
//!
//! ## Overview
//!
//! - **Construction**: [`var!`], [`var2!`], [`construct::var2_any`], empty and channel sequences
//! - **Projection**: single-value to pair sequences and back, keys and values
//! - **Equality**: element-wise comparison with default or custom equality
//! - **Traversal**: sequential and concurrent for-each with cooperative cancellation
//! - **Collection**: pair sequences into vectors
//! - **Formatting**: sequences rendered as strings
//!
//! Inputs that may be absent are taken as `Option`s. An absent sequence,
//! action, selector or equality function is reported as an [`IterError`]
//! before any element is pulled.
//!
//! ## Feature Flags
//!
//! - `traverse`: sequential traversal
//! - `concurrent`: concurrent traversal on rayon
//! - `async`: traversal of `futures` streams on tokio
//! - `format`: string rendering
//! - `serde`: `Serialize`/`Deserialize` for [`format::Format`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_iter::prelude::*;
//!
//! let token = CancelToken::new();
//! let result = for_each(&token, Some(var![1, 2, 3]), Some(|value: i32| {
//!     if value > 0 { Ok(()) } else { Err("not positive") }
//! }));
//! assert!(result.is_ok());
//!
//! assert_eq!(string_def(Some(var![1, 2, 3])), "[1 2 3]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the helpers, the error type and the cancellation types.
///
/// # Usage
///
/// ```rust
/// use lambars_iter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cancel::*;
    pub use crate::collect::*;
    pub use crate::construct::*;
    pub use crate::equal::*;
    pub use crate::error::IterError;
    pub use crate::project::*;
    pub use crate::{var, var2};

    #[cfg(feature = "format")]
    pub use crate::format::*;

    #[cfg(feature = "traverse")]
    pub use crate::traverse::*;
}

pub mod cancel;
pub mod collect;
pub mod construct;
pub mod equal;
mod error;
pub mod project;

#[cfg(feature = "format")]
pub mod format;

#[cfg(feature = "traverse")]
pub mod traverse;

pub use error::IterError;
