//! # lazylist
//!
//! Persistent singly-linked lists that can be strict or lazy, with
//! combinators that behave the same way on both.
//!
//! ## Overview
//!
//! A [`List`] is always one of three shapes:
//!
//! - **`Empty`**: the end of every list
//! - **`EagerCons`**: a head and an already materialized tail
//! - **`LazyCons`**: a head and a [`Thunk`] that computes the tail on demand
//!
//! Lazy lists may be infinite. Lazy combinators ([`List::map_lazy`],
//! [`List::filter_lazy`]) never force more of their source than the caller
//! asks for, so they compose with unbounded generators such as
//! [`List::unbounded`]. [`List::take`] materializes a finite prefix.
//!
//! Tails of lazy nodes are **not memoized**: asking a `LazyCons` for its tail
//! twice runs the suspension twice.
//!
//! ## Modules
//!
//! - [`combinator`]: free-function forms of the list combinators
//! - [`sort`]: quicksort over ordered elements
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`List`]
//!
//! ## Example
//!
//! ```rust
//! use lazylist::prelude::*;
//!
//! let naturals = List::unbounded(0, 1);
//! let evens = naturals.filter_lazy(|n| n % 2 == 0);
//! let squares = evens.map_lazy(|n| n * n);
//!
//! let prefix = squares.take(4).unwrap();
//! assert_eq!(prefix, List::from_slice(&[0, 4, 16, 36]));
//! assert_eq!(fold_left(|sum, n| sum + n, 0, &prefix), 56);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the list types, the free combinators, and the sorters.
///
/// # Usage
///
/// ```rust
/// use lazylist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::*;
    pub use crate::error::{EmptyAccessError, ListResult};
    pub use crate::list::{EagerNode, LazyNode, List, ListIterator};
    pub use crate::range::Numeric;
    pub use crate::sort::{qsort, qsort_descending};
    pub use crate::thunk::Thunk;
}

/// Reference-counted smart pointer shared by list nodes and suspensions.
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

pub mod combinator;
mod error;
mod list;
mod range;
pub mod sort;
mod thunk;

pub use error::{EmptyAccessError, ListResult};
pub use list::{EagerNode, LazyNode, List, ListIterator};
pub use range::Numeric;
pub use thunk::Thunk;
