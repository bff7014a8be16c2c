//! Suspensions that produce the tail of a lazy list on demand.
//!
//! A [`Thunk`] wraps one of a closed set of suspensions:
//!
//! - **list adapter**: replays an eager list one lazy node at a time
//! - **mapping suspension**: applies a function to each node of another suspension
//! - **filtering suspension**: skips nodes of another suspension that fail a predicate
//! - **bounded ranges** (ascending and descending) and the **unbounded range**,
//!   defined in the range module
//!
//! Forcing is never memoized. Every call to [`Thunk::force`] runs the
//! suspension again, so a thunk can describe an infinite sequence without
//! holding on to the part of it that has already been visited.
//!
//! # Examples
//!
//! ```rust
//! use lazylist::{List, Thunk};
//!
//! let thunk = Thunk::from_list(List::from_slice(&[1, 2, 3])).map(|x| x * 2);
//! let list = thunk.force();
//! assert!(list.is_lazy());
//! assert_eq!(list, List::from_slice(&[2, 4, 6]));
//! ```

use std::fmt;

use crate::ReferenceCounter;
use crate::list::List;

/// Internal trait for the suspensions a [`Thunk`] can hold.
///
/// Erases the source element type of a mapping suspension so that thunks
/// over different sources share one type. Not implementable outside the
/// crate.
pub(crate) trait Suspension<A> {
    /// Runs the suspension, producing the next list node.
    fn force(&self) -> List<A>;

    /// Hands over the list this suspension keeps alive, leaving it empty.
    ///
    /// Only called while dropping, so that nested chains are unlinked
    /// iteratively.
    fn release(&mut self) -> List<A> {
        List::Empty
    }
}

/// Shared element transformer of a mapping suspension.
pub(crate) type Transform<A, B> = ReferenceCounter<dyn Fn(&A) -> B>;

/// Shared predicate of a filtering suspension.
pub(crate) type Predicate<A> = ReferenceCounter<dyn Fn(&A) -> bool>;

/// A deferred computation that yields a [`List`] when forced.
///
/// Cloning a thunk shares the suspension; it does not copy any state.
pub struct Thunk<A> {
    suspension: ReferenceCounter<dyn Suspension<A>>,
}

impl<A> Thunk<A> {
    pub(crate) fn from_suspension<S>(suspension: S) -> Self
    where
        S: Suspension<A> + 'static,
    {
        Self {
            suspension: ReferenceCounter::new(suspension),
        }
    }

    /// Runs the suspension and returns the list it produces.
    ///
    /// The result is not cached: forcing the same thunk twice runs its
    /// suspension, and any function it captured, twice.
    #[inline]
    #[must_use]
    pub fn force(&self) -> List<A> {
        self.suspension.force()
    }

    /// Takes the list held by the suspension if this thunk is its only
    /// owner. Returns `Empty` otherwise.
    pub(crate) fn release(&mut self) -> List<A> {
        ReferenceCounter::get_mut(&mut self.suspension)
            .map_or(List::Empty, |suspension| suspension.release())
    }
}

impl<A: Clone + 'static> Thunk<A> {
    /// Wraps a list so that forcing replays it as lazy nodes.
    ///
    /// Forcing yields `Empty` for an empty list, a lazy node holding the head
    /// and a new adapter over the tail for an eager list, and an already
    /// lazy list unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::{List, Thunk};
    ///
    /// let list = Thunk::from_list(List::from_slice(&[1, 2])).force();
    /// assert!(list.is_lazy());
    /// assert!(list.tail().unwrap().is_lazy());
    /// assert!(list.tail().unwrap().tail().unwrap().is_empty());
    /// ```
    #[must_use]
    pub fn from_list(list: List<A>) -> Self {
        Self::from_suspension(ListAdapter { list })
    }

    /// Returns a thunk whose list is this thunk's list with `function`
    /// applied to every element, lazily.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Thunk<B>
    where
        B: 'static,
        F: Fn(&A) -> B + 'static,
    {
        Thunk::from_suspension(MapSuspension {
            function: ReferenceCounter::new(function),
            inner: self,
        })
    }

    /// Returns a thunk whose list keeps only the elements of this thunk's
    /// list that satisfy `predicate`, lazily.
    ///
    /// Forcing it does not return if no element of an infinite source ever
    /// satisfies `predicate`.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        Self::from_suspension(FilterSuspension {
            predicate: ReferenceCounter::new(predicate),
            inner: self,
        })
    }
}

impl<A> Clone for Thunk<A> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            suspension: ReferenceCounter::clone(&self.suspension),
        }
    }
}

impl<A> fmt::Debug for Thunk<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Thunk").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Thunk<i32>: Clone);
static_assertions::assert_not_impl_any!(Thunk<i32>: Send, Sync);

// =============================================================================
// List Adapter
// =============================================================================

struct ListAdapter<A> {
    list: List<A>,
}

impl<A: Clone + 'static> Suspension<A> for ListAdapter<A> {
    fn force(&self) -> List<A> {
        match &self.list {
            List::Empty => List::Empty,
            List::EagerCons(node) => {
                List::lazy_cons(node.head().clone(), Thunk::from_list(node.tail().clone()))
            }
            List::LazyCons(_) => self.list.clone(),
        }
    }

    fn release(&mut self) -> List<A> {
        std::mem::take(&mut self.list)
    }
}

/// Returns the continuation of a non-empty node as a thunk, adapting an
/// eager tail.
fn continuation<A: Clone + 'static>(list: &List<A>) -> Option<(&A, Thunk<A>)> {
    match list {
        List::Empty => None,
        List::EagerCons(node) => Some((node.head(), Thunk::from_list(node.tail().clone()))),
        List::LazyCons(node) => Some((node.head(), node.thunk().clone())),
    }
}

// =============================================================================
// Mapping Suspension
// =============================================================================

struct MapSuspension<A, B> {
    function: Transform<A, B>,
    inner: Thunk<A>,
}

impl<A: Clone + 'static, B: 'static> Suspension<B> for MapSuspension<A, B> {
    fn force(&self) -> List<B> {
        map_node(&self.function, &self.inner.force())
    }
}

/// Maps the head of `list` and suspends the mapping of its continuation.
pub(crate) fn map_node<A, B>(function: &Transform<A, B>, list: &List<A>) -> List<B>
where
    A: Clone + 'static,
    B: 'static,
{
    match continuation(list) {
        None => List::Empty,
        Some((head, inner)) => List::lazy_cons(
            function(head),
            Thunk::from_suspension(MapSuspension {
                function: ReferenceCounter::clone(function),
                inner,
            }),
        ),
    }
}

// =============================================================================
// Filtering Suspension
// =============================================================================

struct FilterSuspension<A> {
    predicate: Predicate<A>,
    inner: Thunk<A>,
}

impl<A: Clone + 'static> Suspension<A> for FilterSuspension<A> {
    fn force(&self) -> List<A> {
        filter_from(&self.predicate, self.inner.force())
    }

    fn release(&mut self) -> List<A> {
        self.inner.release()
    }
}

/// Advances through `list` until an element satisfies `predicate`, then
/// suspends filtering of whatever follows it.
///
/// Nothing after the first match is forced.
pub(crate) fn filter_from<A: Clone + 'static>(predicate: &Predicate<A>, list: List<A>) -> List<A> {
    let mut current = list;
    let mut skipped: usize = 0;
    loop {
        let Some((head, inner)) = continuation(&current) else {
            tracing::trace!(skipped, "filtering suspension exhausted its source");
            return List::Empty;
        };
        if predicate(head) {
            if skipped > 0 {
                tracing::trace!(skipped, "filtering suspension skipped elements");
            }
            return List::lazy_cons(
                head.clone(),
                Thunk::from_suspension(FilterSuspension {
                    predicate: ReferenceCounter::clone(predicate),
                    inner,
                }),
            );
        }
        skipped += 1;
        current = inner.force();
    }
}
