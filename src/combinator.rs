//! List combinators.
//!
//! Every combinator exists both as a [`List`] method and as a free function
//! taking its function argument first and the list last, so it reads well
//! in pipelines and in partial application.
//!
//! Combinators come in two families:
//!
//! - **eager** (`map`, `filter` on an eager list, `fold_left`, `fold_right`,
//!   `scan`, `concat`, `reverse`, `init`, `last`, `length`): walk the whole
//!   input and build eager lists. They do not return on infinite input.
//! - **lazy** (`map_lazy`, `filter_lazy`, `filter` on a lazy list): build
//!   suspension chains and are safe on infinite input.
//!
//! `take` and `drop_first` work on both and only force what they need.
//!
//! # Examples
//!
//! ```rust
//! use lazylist::List;
//! use lazylist::combinator::{fold_left, scan, take, filter_lazy};
//!
//! let words = List::from_slice(&["foo", "bar", "baz"]);
//! let total = |length: usize, word: &&str| length + word.len();
//! assert_eq!(fold_left(total, 0, &words), 9);
//! assert_eq!(scan(total, 0, &words), List::from_slice(&[0, 3, 6, 9]));
//!
//! let evens = filter_lazy(|n: &u32| n % 2 == 0, &List::unbounded(0, 1));
//! assert_eq!(take(3, &evens), Ok(List::from_slice(&[0, 2, 4])));
//! ```

use crate::ReferenceCounter;
use crate::error::ListResult;
use crate::list::List;
use crate::thunk::{Predicate, Transform, filter_from, map_node};

impl<A: Clone> List<A> {
    /// Applies `function` to every element, first to last, returning a new
    /// eager list of the same length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let doubled = List::from_slice(&[3, 4]).map(|x| x * 2);
    /// assert_eq!(doubled, List::from_slice(&[6, 8]));
    /// assert!(List::<i32>::new().map(|x| x.to_string()).is_empty());
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, mut function: F) -> List<B>
    where
        F: FnMut(&A) -> B,
    {
        List::build_from_vec(self.iter().map(|element| function(&element)).collect())
    }

    /// Left-associative fold: `accumulator = function(accumulator, element)`
    /// for each element in order. Returns `init` for the empty list.
    ///
    /// Runs in constant stack space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let list = List::from_slice(&[1, 2, 3, 4]);
    /// assert_eq!(list.fold_left(0, |accumulator, x| accumulator * 10 + x), 1234);
    /// ```
    pub fn fold_left<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        self.iter()
            .fold(init, |accumulator, element| function(accumulator, &element))
    }

    /// Right-associative fold: `function(x1, function(x2, ... function(xn, init)))`.
    ///
    /// `function` is applied from the last element back to the first, the
    /// same order as the naive recursive definition, without using the call
    /// stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let list = List::from_slice(&[1, 2, 3, 4]);
    /// // 1 - (2 - (3 - (4 - 0)))
    /// assert_eq!(list.fold_right(0, |x, accumulator| x - accumulator), -2);
    /// ```
    pub fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&A, B) -> B,
    {
        let elements: Vec<A> = self.iter().collect();
        elements
            .iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    /// Returns every intermediate accumulator of a left fold, starting with
    /// `init` and ending with the full fold result.
    ///
    /// The result has one more element than the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let scanned = List::from_slice(&[1, 2, 3, 4]).scan(0, |accumulator, x| accumulator + x);
    /// assert_eq!(scanned, List::from_slice(&[0, 1, 3, 6, 10]));
    /// assert_eq!(List::<i32>::new().scan(0, |accumulator, x| accumulator + x), List::singleton(0));
    /// ```
    #[must_use]
    pub fn scan<B, F>(&self, init: B, mut function: F) -> List<B>
    where
        B: Clone,
        F: FnMut(B, &A) -> B,
    {
        let mut results = vec![init.clone()];
        let mut accumulator = init;
        for element in self {
            accumulator = function(accumulator, &element);
            results.push(accumulator.clone());
        }
        List::build_from_vec(results)
    }
}

impl<A: Clone + 'static> List<A> {
    /// Applies `function` to every element lazily.
    ///
    /// The result is always a lazy list, whatever the shape of the input:
    /// the first element is mapped immediately and each further element when
    /// its node is forced. Safe on infinite lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let lengths = List::from_slice(&["foo", "bar", "bazz"]).map_lazy(|word| word.len());
    /// assert!(lengths.is_lazy());
    /// assert_eq!(lengths.head(), Ok(&3));
    /// assert_eq!(lengths.last(), Ok(4));
    ///
    /// let squares = List::unbounded(1_u64, 1).map_lazy(|n| n * n);
    /// assert_eq!(squares.take(3), Ok(List::from_slice(&[1, 4, 9])));
    /// ```
    #[must_use]
    pub fn map_lazy<B, F>(&self, function: F) -> List<B>
    where
        B: 'static,
        F: Fn(&A) -> B + 'static,
    {
        let function: Transform<A, B> = ReferenceCounter::new(function);
        map_node(&function, self)
    }

    /// Keeps the elements that satisfy `predicate`, lazily.
    ///
    /// The list is scanned up to its first satisfying element; everything
    /// after that is filtered only when forced. The result is lazy unless it
    /// is empty. Forcing does not return if an infinite source has no
    /// further satisfying element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let evens = List::unbounded(0, 1).filter_lazy(|x| x % 2 == 0);
    /// assert_eq!(evens.take(3), Ok(List::from_slice(&[0, 2, 4])));
    ///
    /// let all = List::from_slice(&[0, 1]).filter_lazy(|_| true);
    /// assert!(all.is_lazy());
    /// assert_eq!(all.head(), Ok(&0));
    /// ```
    #[must_use]
    pub fn filter_lazy<P>(&self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        let predicate: Predicate<A> = ReferenceCounter::new(predicate);
        filter_from(&predicate, self.clone())
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Eager map. See [`List::map`].
#[must_use]
pub fn map<A, B, F>(function: F, list: &List<A>) -> List<B>
where
    A: Clone,
    F: FnMut(&A) -> B,
{
    list.map(function)
}

/// Lazy map, safe on infinite lists. See [`List::map_lazy`].
#[must_use]
pub fn map_lazy<A, B, F>(function: F, list: &List<A>) -> List<B>
where
    A: Clone + 'static,
    B: 'static,
    F: Fn(&A) -> B + 'static,
{
    list.map_lazy(function)
}

/// Filter keeping the shape of the input. See [`List::filter`].
#[must_use]
pub fn filter<A, P>(predicate: P, list: &List<A>) -> List<A>
where
    A: Clone + 'static,
    P: Fn(&A) -> bool + 'static,
{
    list.filter(predicate)
}

/// Lazy filter, productive on infinite lists. See [`List::filter_lazy`].
#[must_use]
pub fn filter_lazy<A, P>(predicate: P, list: &List<A>) -> List<A>
where
    A: Clone + 'static,
    P: Fn(&A) -> bool + 'static,
{
    list.filter_lazy(predicate)
}

/// Left fold. See [`List::fold_left`].
pub fn fold_left<A, B, F>(function: F, init: B, list: &List<A>) -> B
where
    A: Clone,
    F: FnMut(B, &A) -> B,
{
    list.fold_left(init, function)
}

/// Right fold. See [`List::fold_right`].
pub fn fold_right<A, B, F>(function: F, init: B, list: &List<A>) -> B
where
    A: Clone,
    F: FnMut(&A, B) -> B,
{
    list.fold_right(init, function)
}

/// Running left fold. See [`List::scan`].
#[must_use]
pub fn scan<A, B, F>(function: F, init: B, list: &List<A>) -> List<B>
where
    A: Clone,
    B: Clone,
    F: FnMut(B, &A) -> B,
{
    list.scan(init, function)
}

/// Appends `second` to `first`. See [`List::concat`].
#[must_use]
pub fn concat<A: Clone>(first: &List<A>, second: &List<A>) -> List<A> {
    first.concat(second)
}

/// Reverses a finite list. See [`List::reverse`].
#[must_use]
pub fn reverse<A: Clone>(list: &List<A>) -> List<A> {
    list.reverse()
}

/// First `count` elements as an eager list. See [`List::take`].
///
/// # Errors
///
/// Returns [`crate::EmptyAccessError`] if the list has fewer than `count`
/// elements.
pub fn take<A: Clone>(count: usize, list: &List<A>) -> ListResult<List<A>> {
    list.take(count)
}

/// Discards the first `count` elements. See [`List::drop_first`].
///
/// # Errors
///
/// Returns [`crate::EmptyAccessError`] if the list has fewer than `count`
/// elements.
pub fn drop_first<A>(count: usize, list: &List<A>) -> ListResult<List<A>> {
    list.drop_first(count)
}

/// All but the last element. See [`List::init`].
///
/// # Errors
///
/// Returns [`crate::EmptyAccessError`] if the list is empty.
pub fn init<A: Clone>(list: &List<A>) -> ListResult<List<A>> {
    list.init()
}

/// The last element. See [`List::last`].
///
/// # Errors
///
/// Returns [`crate::EmptyAccessError`] if the list is empty.
pub fn last<A: Clone>(list: &List<A>) -> ListResult<A> {
    list.last()
}

/// Number of elements. See [`List::length`].
#[must_use]
pub fn length<A>(list: &List<A>) -> usize {
    list.length()
}

/// Builds an eager list from a slice in O(n), preserving order.
///
/// # Examples
///
/// ```rust
/// use lazylist::combinator::{from_slice, length};
///
/// assert!(from_slice::<String>(&[]).is_empty());
/// assert_eq!(length(&from_slice(&["foo", "bar"])), 2);
/// ```
#[must_use]
pub fn from_slice<A: Clone>(slice: &[A]) -> List<A> {
    List::from_slice(slice)
}

/// Chains two functions: the result applies `first`, then `second`.
///
/// # Examples
///
/// ```rust
/// use lazylist::combinator::compose;
///
/// let square_then_increment = compose(|x: i32| x * x, |x: i32| x + 1);
/// assert_eq!(square_then_increment(5), 26);
/// ```
pub fn compose<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |value| second(first(value))
}
