//! Persistent singly-linked list with eager and lazy nodes.
//!
//! This module provides [`List`], an immutable cons list whose nodes are
//! either fully materialized ([`EagerNode`]) or carry a suspended tail
//! ([`LazyNode`]).
//!
//! # Overview
//!
//! | Shape       | Head        | Tail                                  |
//! |-------------|-------------|---------------------------------------|
//! | `Empty`     | none        | none                                  |
//! | `EagerCons` | stored      | stored [`List`]                       |
//! | `LazyCons`  | stored      | [`Thunk`], forced on every [`List::tail`] call |
//!
//! Nodes are reference counted, so every operation returns a new list that
//! may share nodes with its input:
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lazylist::List;
//!
//! let list = List::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Ok(&1));
//! assert_eq!(list.length(), 3);
//!
//! let lazy = list.into_lazy();
//! assert!(lazy.is_lazy());
//! assert_eq!(lazy, list);
//! ```

use std::fmt;
use std::iter::FromIterator;

use crate::ReferenceCounter;
use crate::error::{EmptyAccessError, ListResult};
use crate::thunk::Thunk;

/// A materialized cons cell: a head and a list tail.
pub struct EagerNode<A> {
    head: A,
    tail: List<A>,
}

impl<A> EagerNode<A> {
    /// Returns a reference to the element stored in this node.
    #[inline]
    #[must_use]
    pub const fn head(&self) -> &A {
        &self.head
    }

    /// Returns the materialized rest of the list.
    #[inline]
    #[must_use]
    pub const fn tail(&self) -> &List<A> {
        &self.tail
    }
}

/// Unlinks uniquely owned successors one at a time so that dropping a long
/// eager chain does not recurse once per node.
impl<A> Drop for EagerNode<A> {
    fn drop(&mut self) {
        unlink(std::mem::take(&mut self.tail));
    }
}

/// Drops `list` node by node, stopping at the first node that is still
/// shared. Each unwrapped node is left with an empty successor, so its own
/// `Drop` has nothing left to do.
fn unlink<A>(list: List<A>) {
    let mut next = list;
    loop {
        next = match next {
            List::Empty => break,
            List::EagerCons(node) => match ReferenceCounter::try_unwrap(node) {
                Ok(mut owned) => std::mem::take(&mut owned.tail),
                Err(_) => break,
            },
            List::LazyCons(node) => match ReferenceCounter::try_unwrap(node) {
                Ok(mut owned) => owned.thunk.release(),
                Err(_) => break,
            },
        };
    }
}

/// A cons cell whose tail is computed on demand.
pub struct LazyNode<A> {
    head: A,
    thunk: Thunk<A>,
}

impl<A> LazyNode<A> {
    /// Returns a reference to the element stored in this node.
    #[inline]
    #[must_use]
    pub const fn head(&self) -> &A {
        &self.head
    }

    /// Returns the suspension that produces the rest of the list.
    #[inline]
    #[must_use]
    pub const fn thunk(&self) -> &Thunk<A> {
        &self.thunk
    }
}

/// Releases the list an unshared suspension holds and unlinks it, so that a
/// lazy chain built from adapted lazy lists drops iteratively as well.
impl<A> Drop for LazyNode<A> {
    fn drop(&mut self) {
        unlink(self.thunk.release());
    }
}

/// A persistent list that is either empty, an eager cons, or a lazy cons.
///
/// Cloning a `List` is O(1): only the reference to the first node is copied.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `cons`       | O(1)       |
/// | `head`       | O(1)       |
/// | `tail`       | O(1) eager, one suspension step lazy |
/// | `length`     | O(n)       |
/// | `take`       | O(count)   |
/// | `drop_first` | O(count)   |
/// | `concat`     | O(n)       |
/// | `reverse`    | O(n)       |
///
/// # Examples
///
/// ```rust
/// use lazylist::List;
///
/// let list = List::from_slice(&["foo", "bar"]);
/// match &list {
///     List::EagerCons(node) => assert_eq!(*node.head(), "foo"),
///     List::Empty | List::LazyCons(_) => unreachable!(),
/// }
/// ```
pub enum List<A> {
    /// The zero-length list.
    Empty,
    /// A node whose tail is already materialized.
    EagerCons(ReferenceCounter<EagerNode<A>>),
    /// A node whose tail is produced by forcing a [`Thunk`].
    LazyCons(ReferenceCounter<LazyNode<A>>),
}

impl<A> List<A> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let list: List<i32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::Empty
    }

    /// Creates an eager list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: A) -> Self {
        Self::prepend(element, Self::Empty)
    }

    /// Prepends an element to the front of the list.
    ///
    /// The new eager node shares the whole of `self` as its tail.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let list = List::new().cons(2).cons(1);
    /// let extended = list.cons(0);
    /// assert_eq!(list.length(), 2);
    /// assert_eq!(extended.length(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: A) -> Self {
        Self::prepend(element, self.clone())
    }

    /// Creates a lazy node from a head and the suspension for its tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::{List, Thunk};
    ///
    /// let list = List::lazy_cons(1, Thunk::from_list(List::singleton(2)));
    /// assert!(list.is_lazy());
    /// assert_eq!(list.length(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn lazy_cons(element: A, thunk: Thunk<A>) -> Self {
        Self::LazyCons(ReferenceCounter::new(LazyNode {
            head: element,
            thunk,
        }))
    }

    #[inline]
    pub(crate) fn prepend(element: A, tail: Self) -> Self {
        Self::EagerCons(ReferenceCounter::new(EagerNode {
            head: element,
            tail,
        }))
    }

    /// Builds an eager list from a Vec, preserving order.
    ///
    /// Uses `Vec::pop()` to consume elements from the end.
    pub(crate) fn build_from_vec(elements: Vec<A>) -> Self {
        Self::prepend_all(elements, Self::Empty)
    }

    /// Places `elements` in front of `tail`, which is shared, not copied.
    pub(crate) fn prepend_all(mut elements: Vec<A>, tail: Self) -> Self {
        let mut result = tail;
        while let Some(element) = elements.pop() {
            result = Self::prepend(element, result);
        }
        result
    }

    /// Returns `true` only for the empty list.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` only for a lazy node, whose tail has not been forced.
    ///
    /// The head of a lazy node is always available.
    #[inline]
    #[must_use]
    pub const fn is_lazy(&self) -> bool {
        matches!(self, Self::LazyCons(_))
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccessError`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let list = List::new().cons(2).cons(1);
    /// assert_eq!(list.head(), Ok(&1));
    /// assert!(List::<i32>::new().head().is_err());
    /// ```
    #[inline]
    pub fn head(&self) -> ListResult<&A> {
        self.first().ok_or_else(|| EmptyAccessError::new("head"))
    }

    /// Returns the list without its first element.
    ///
    /// On an eager node this shares the stored tail. On a lazy node the
    /// suspension is forced, and it is forced again on every call.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccessError`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let naturals = List::unbounded(0, 1);
    /// assert_eq!(naturals.tail().unwrap().head(), Ok(&1));
    /// ```
    #[inline]
    pub fn tail(&self) -> ListResult<Self> {
        self.rest().ok_or_else(|| EmptyAccessError::new("tail"))
    }

    #[inline]
    pub(crate) fn first(&self) -> Option<&A> {
        match self {
            Self::Empty => None,
            Self::EagerCons(node) => Some(&node.head),
            Self::LazyCons(node) => Some(&node.head),
        }
    }

    pub(crate) fn rest(&self) -> Option<Self> {
        match self {
            Self::Empty => None,
            Self::EagerCons(node) => Some(node.tail.clone()),
            Self::LazyCons(node) => Some(node.thunk.force()),
        }
    }

    /// Returns the number of elements.
    ///
    /// Does not return if the list is infinite.
    ///
    /// # Complexity
    ///
    /// O(n), forcing every lazy tail once
    #[must_use]
    pub fn length(&self) -> usize {
        let mut count = 0;
        let mut current = self.clone();
        while let Some(rest) = current.rest() {
            count += 1;
            current = rest;
        }
        count
    }

    /// Discards the first `count` elements.
    ///
    /// The remaining list is shared with `self`. Dropping zero elements
    /// returns the list unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccessError`] if the list runs out before `count`
    /// elements were discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let naturals = List::unbounded(1, 1);
    /// assert_eq!(naturals.drop_first(5).unwrap().head(), Ok(&6));
    /// assert!(List::<i32>::new().drop_first(1).is_err());
    /// ```
    pub fn drop_first(&self, count: usize) -> ListResult<Self> {
        let mut current = self.clone();
        for _ in 0..count {
            current = current
                .rest()
                .ok_or_else(|| EmptyAccessError::new("drop_first"))?;
        }
        Ok(current)
    }
}

impl<A: Clone> List<A> {
    /// Creates an eager list from a slice, preserving order.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `slice.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let list = List::from_slice(&["foo"]);
    /// assert_eq!(list.length(), 1);
    /// assert_eq!(list.head(), Ok(&"foo"));
    /// assert_eq!(list.last(), Ok("foo"));
    /// assert!(List::<&str>::from_slice(&[]).is_empty());
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[A]) -> Self {
        slice
            .iter()
            .rev()
            .fold(Self::Empty, |tail, element| Self::prepend(element.clone(), tail))
    }

    /// Splits the list into a copy of its head and its tail.
    ///
    /// Returns `None` if the list is empty.
    #[must_use]
    pub fn uncons(&self) -> Option<(A, Self)> {
        let head = self.first()?.clone();
        self.rest().map(|tail| (head, tail))
    }

    /// Returns an iterator over copies of the elements.
    ///
    /// Lazy tails are forced one step at a time, only when the next element
    /// is requested, so the iterator is safe on infinite lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let first: Vec<u64> = List::unbounded(1, 2).iter().take(3).collect();
    /// assert_eq!(first, vec![1, 3, 5]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> ListIterator<A> {
        ListIterator {
            current: self.clone(),
            advance: false,
        }
    }

    /// Returns the final element.
    ///
    /// Does not return if the list is infinite.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccessError`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// assert_eq!(List::range(0, 5, 25).last(), Ok(25));
    /// ```
    pub fn last(&self) -> ListResult<A> {
        self.iter()
            .last()
            .ok_or_else(|| EmptyAccessError::new("last"))
    }

    /// Returns the first `count` elements as a new eager list.
    ///
    /// This is the way to materialize a finite prefix of an infinite list:
    /// exactly `count - 1` tails are forced. Taking zero elements yields the
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccessError`] if the list has fewer than `count`
    /// elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let prefix = List::unbounded(1, 1).take(5).unwrap();
    /// assert!(!prefix.is_lazy());
    /// assert_eq!(prefix.head(), Ok(&1));
    /// assert_eq!(prefix.last(), Ok(5));
    /// ```
    pub fn take(&self, count: usize) -> ListResult<Self> {
        if count == 0 {
            return Ok(Self::Empty);
        }

        let mut elements = Vec::new();
        let mut current = self.clone();
        loop {
            let head = current
                .first()
                .ok_or_else(|| EmptyAccessError::new("take"))?;
            elements.push(head.clone());
            if elements.len() == count {
                return Ok(Self::build_from_vec(elements));
            }
            current = current
                .rest()
                .ok_or_else(|| EmptyAccessError::new("take"))?;
        }
    }

    /// Returns every element except the last as a new eager list.
    ///
    /// Does not return if the list is infinite.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccessError`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let list = List::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.init(), Ok(List::from_slice(&[1, 2])));
    /// ```
    pub fn init(&self) -> ListResult<Self> {
        if self.is_empty() {
            return Err(EmptyAccessError::new("init"));
        }
        let mut elements: Vec<A> = self.iter().collect();
        elements.pop();
        Ok(Self::build_from_vec(elements))
    }

    /// Appends `other` to this list.
    ///
    /// The elements of `self` are copied into new eager nodes; `other` is
    /// shared as the suffix, whatever its shape. If `self` is empty, `other`
    /// is returned unchanged. Does not return if `self` is infinite.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.length()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let combined = List::from_slice(&[1, 2]).concat(&List::from_slice(&[3, 4]));
    /// assert_eq!(combined, List::from_slice(&[1, 2, 3, 4]));
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        Self::prepend_all(self.iter().collect(), other.clone())
    }

    /// Returns a new eager list with the elements in reverse order.
    ///
    /// Does not return if the list is infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let reversed = List::range(1, 1, 10).reverse();
    /// assert_eq!(reversed.head(), Ok(&10));
    /// assert_eq!(reversed.last(), Ok(1));
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Self::Empty, |reversed, element| Self::prepend(element, reversed))
    }
}

impl<A: Clone + 'static> List<A> {
    /// Keeps the elements that satisfy `predicate`, in their original order.
    ///
    /// The result has the shape of the receiver: filtering an eager list
    /// walks it completely and returns an eager list, while filtering a lazy
    /// list returns a lazy list (see [`List::filter_lazy`]).
    ///
    /// Only the first node decides. An eager prefix in front of a lazy
    /// suffix, as built by [`List::cons`] or [`List::concat`], is filtered
    /// eagerly all the way through, which does not return if the suffix is
    /// infinite. Use [`List::filter_lazy`] for such lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let big = List::from_slice(&[6, 7, 8]).filter(|x| *x > 7);
    /// assert!(!big.is_lazy());
    /// assert_eq!(big, List::singleton(8));
    ///
    /// let evens = List::unbounded(0, 1).filter(|x| x % 2 == 0);
    /// assert!(evens.is_lazy());
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        match self {
            Self::LazyCons(_) => self.filter_lazy(predicate),
            Self::Empty | Self::EagerCons(_) => {
                Self::build_from_vec(self.iter().filter(|element| predicate(element)).collect())
            }
        }
    }

    /// Promotes the list to the lazy representation.
    ///
    /// An eager list is wrapped node by node in a list adapter suspension;
    /// an already lazy list is returned unchanged.
    #[must_use]
    pub fn into_lazy(&self) -> Self {
        Thunk::from_list(self.clone()).force()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over copies of the elements of a [`List`].
///
/// The tail of the current node is only forced when the following element
/// is requested.
pub struct ListIterator<A> {
    current: List<A>,
    advance: bool,
}

impl<A: Clone> Iterator for ListIterator<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance {
            self.current = self.current.rest()?;
        }
        self.advance = true;
        self.current.first().cloned()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A> Clone for List<A> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::EagerCons(node) => Self::EagerCons(node.clone()),
            Self::LazyCons(node) => Self::LazyCons(node.clone()),
        }
    }
}

impl<A> Default for List<A> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<A> FromIterator<A> for List<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<A> From<Vec<A>> for List<A> {
    #[inline]
    fn from(elements: Vec<A>) -> Self {
        Self::build_from_vec(elements)
    }
}

impl<A: Clone> IntoIterator for List<A> {
    type Item = A;
    type IntoIter = ListIterator<A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ListIterator {
            current: self,
            advance: false,
        }
    }
}

impl<A: Clone> IntoIterator for &List<A> {
    type Item = A;
    type IntoIter = ListIterator<A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Element-wise equality. Forces both lists; does not return if both are
/// infinite and agree on every element.
impl<A: PartialEq + Clone> PartialEq for List<A> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<A: Eq + Clone> Eq for List<A> {}

/// Prints the materialized prefix without forcing anything; an unforced
/// tail is shown as `..`.
impl<A: fmt::Debug> fmt::Debug for List<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = formatter.debug_list();
        let mut current = self;
        loop {
            match current {
                Self::Empty => break,
                Self::EagerCons(node) => {
                    entries.entry(&node.head);
                    current = &node.tail;
                }
                Self::LazyCons(node) => {
                    entries.entry(&node.head);
                    entries.entry(&format_args!(".."));
                    break;
                }
            }
        }
        entries.finish()
    }
}

/// Prints every element, forcing lazy tails along the way.
impl<A: fmt::Display + Clone> fmt::Display for List<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<A: fmt::Debug> fmt::Debug for EagerNode<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EagerNode")
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

impl<A: fmt::Debug> fmt::Debug for LazyNode<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LazyNode")
            .field("head", &self.head)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(List<i32>: Clone, Default);
static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

/// Serializes as a sequence. Forces the whole list.
#[cfg(feature = "serde")]
impl<A: serde::Serialize + Clone> serde::Serialize for List<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(None)?;
        for element in self {
            seq.serialize_element(&element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ListVisitor<A> {
    marker: std::marker::PhantomData<A>,
}

#[cfg(feature = "serde")]
impl<A> ListVisitor<A> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, A> serde::de::Visitor<'de> for ListVisitor<A>
where
    A: serde::Deserialize<'de>,
{
    type Value = List<A>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
    where
        S: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(List::build_from_vec(elements))
    }
}

/// Deserializes a sequence into an eager list.
#[cfg(feature = "serde")]
impl<'de, A> serde::Deserialize<'de> for List<A>
where
    A: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    // =========================================================================
    // Display / Debug Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_list() {
        let list: List<i32> = List::new();
        assert_eq!(format!("{list}"), "[]");
    }

    #[rstest]
    fn test_display_forces_lazy_list() {
        let list = List::range(1, 1, 3);
        assert_eq!(format!("{list}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_debug_stops_at_unforced_tail() {
        let eager = List::from_slice(&[1, 2]);
        assert_eq!(format!("{eager:?}"), "[1, 2]");

        let lazy = List::unbounded(0, 1);
        assert_eq!(format!("{lazy:?}"), "[0, ..]");

        let mixed = List::unbounded(5, 1).cons(4);
        assert_eq!(format!("{mixed:?}"), "[4, 5, ..]");
    }

    // =========================================================================
    // Shape Tests
    // =========================================================================

    #[rstest]
    fn test_shapes_report_emptiness_and_laziness() {
        let empty: List<i32> = List::new();
        assert!(empty.is_empty());
        assert!(!empty.is_lazy());

        let eager = List::singleton(1);
        assert!(!eager.is_empty());
        assert!(!eager.is_lazy());

        let lazy = List::lazy_cons(1, Thunk::from_list(List::new()));
        assert!(!lazy.is_empty());
        assert!(lazy.is_lazy());
    }

    #[rstest]
    fn test_cons_shares_tail() {
        let list = List::from_slice(&[2, 3]);
        let extended = list.cons(1);
        match (&extended, &list) {
            (List::EagerCons(node), List::EagerCons(original)) => match node.tail() {
                List::EagerCons(shared) => assert!(ReferenceCounter::ptr_eq(shared, original)),
                _ => panic!("tail should be eager"),
            },
            _ => panic!("both lists should be eager"),
        }
    }

    // =========================================================================
    // Non-memoization
    // =========================================================================

    #[rstest]
    fn test_lazy_tail_is_recomputed_on_every_call() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let list = List::from_slice(&[1, 2, 3]).map_lazy(move |x| {
            counter.set(counter.get() + 1);
            x * 10
        });
        assert_eq!(calls.get(), 1);

        assert_eq!(list.tail().unwrap().head(), Ok(&20));
        assert_eq!(calls.get(), 2);
        assert_eq!(list.tail().unwrap().head(), Ok(&20));
        assert_eq!(calls.get(), 3);
    }

    // =========================================================================
    // Iterator Tests
    // =========================================================================

    #[rstest]
    fn test_iter_does_not_force_past_last_requested_element() {
        let forced = Rc::new(Cell::new(0));
        let counter = Rc::clone(&forced);
        let list = List::unbounded(0, 1).map_lazy(move |x| {
            counter.set(counter.get() + 1);
            *x
        });
        let taken: Vec<i32> = list.iter().take(3).collect();
        assert_eq!(taken, vec![0, 1, 2]);
        assert_eq!(forced.get(), 3);
    }

    #[rstest]
    fn test_into_iter_of_empty_list() {
        let list: List<i32> = List::new();
        assert_eq!(list.into_iter().next(), None);
    }

    // =========================================================================
    // Drop Tests
    // =========================================================================

    #[rstest]
    fn test_dropping_long_eager_list_does_not_overflow() {
        let list: List<u32> = (0..200_000).collect();
        assert_eq!(list.length(), 200_000);
        drop(list);
    }

    #[rstest]
    fn test_dropping_long_lazy_chain_does_not_overflow() {
        let mut list = List::new();
        for index in 0..200_000_u32 {
            list = List::lazy_cons(index, Thunk::from_list(list));
        }
        assert_eq!(list.length(), 200_000);
        drop(list);
    }

    #[rstest]
    fn test_dropping_lazy_chain_with_filter_does_not_overflow() {
        let mut list = List::new();
        for index in 0..200_000_u32 {
            list = List::lazy_cons(index, Thunk::from_list(list).filter(|_| true));
        }
        assert_eq!(list.head(), Ok(&199_999));
        drop(list);
    }

    #[rstest]
    fn test_drop_of_lazy_chain_keeps_shared_suffix_alive() {
        let suffix = List::range(1, 1, 3);
        let list = List::lazy_cons(0, Thunk::from_list(suffix.clone()));
        drop(list);
        assert_eq!(suffix, List::from_slice(&[1, 2, 3]));
    }

    #[rstest]
    fn test_drop_keeps_shared_suffix_alive() {
        let suffix = List::from_slice(&[3, 4]);
        let list = suffix.cons(2).cons(1);
        drop(list);
        assert_eq!(suffix, List::from_slice(&[3, 4]));
    }

    // =========================================================================
    // Error Tests
    // =========================================================================

    #[rstest]
    fn test_empty_access_names_the_operation() {
        let empty: List<i32> = List::new();
        assert_eq!(empty.head(), Err(EmptyAccessError::new("head")));
        assert_eq!(empty.tail().unwrap_err().operation(), "tail");
        assert_eq!(empty.last().unwrap_err().operation(), "last");
        assert_eq!(empty.init().unwrap_err().operation(), "init");
        assert_eq!(empty.take(1).unwrap_err().operation(), "take");
        assert_eq!(empty.drop_first(1).unwrap_err().operation(), "drop_first");
    }

    #[rstest]
    fn test_take_and_drop_zero_never_fail() {
        let empty: List<i32> = List::new();
        assert_eq!(empty.take(0), Ok(List::new()));
        assert_eq!(empty.drop_first(0), Ok(List::new()));
    }
}
