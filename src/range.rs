//! Arithmetic-progression generators.
//!
//! Bounded ranges stop at the last value that does not cross `end` and are
//! always non-empty: the start value is emitted even when it already lies
//! past `end`. The unbounded range never stops; integer overflow wraps
//! around. A zero step produces an infinite list in every direction.

use crate::list::List;
use crate::thunk::{Suspension, Thunk};

/// Element types a range can count with.
///
/// Implemented for every primitive integer and float type.
pub trait Numeric: Copy + PartialOrd + 'static {
    /// `self + step`, or `None` if the sum does not fit in the type.
    fn checked_increment(self, step: Self) -> Option<Self>;

    /// `self - step`, or `None` if the difference does not fit in the type.
    fn checked_decrement(self, step: Self) -> Option<Self>;

    /// `self + step`, wrapping around at the boundary of the type.
    #[must_use]
    fn wrapping_increment(self, step: Self) -> Self;
}

macro_rules! impl_numeric_for_integer {
    ($($numeric:ty),*) => {
        $(
            impl Numeric for $numeric {
                #[inline]
                fn checked_increment(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }

                #[inline]
                fn checked_decrement(self, step: Self) -> Option<Self> {
                    self.checked_sub(step)
                }

                #[inline]
                fn wrapping_increment(self, step: Self) -> Self {
                    self.wrapping_add(step)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_for_float {
    ($($numeric:ty),*) => {
        $(
            impl Numeric for $numeric {
                #[inline]
                fn checked_increment(self, step: Self) -> Option<Self> {
                    Some(self + step)
                }

                #[inline]
                fn checked_decrement(self, step: Self) -> Option<Self> {
                    Some(self - step)
                }

                #[inline]
                fn wrapping_increment(self, step: Self) -> Self {
                    self + step
                }
            }
        )*
    };
}

impl_numeric_for_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);
impl_numeric_for_float!(f32, f64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Ascending,
    Descending,
}

#[derive(Clone, Copy)]
struct BoundedRange<A> {
    start: A,
    step: A,
    end: A,
    direction: Direction,
}

impl<A: Numeric> Suspension<A> for BoundedRange<A> {
    fn force(&self) -> List<A> {
        let next = match self.direction {
            Direction::Ascending => self
                .start
                .checked_increment(self.step)
                .filter(|next| *next <= self.end),
            Direction::Descending => self
                .start
                .checked_decrement(self.step)
                .filter(|next| *next >= self.end),
        };
        match next {
            None => List::singleton(self.start),
            Some(next) => List::lazy_cons(
                self.start,
                Thunk::from_suspension(Self {
                    start: next,
                    ..*self
                }),
            ),
        }
    }
}

#[derive(Clone, Copy)]
struct UnboundedRange<A> {
    start: A,
    step: A,
}

impl<A: Numeric> Suspension<A> for UnboundedRange<A> {
    fn force(&self) -> List<A> {
        List::lazy_cons(
            self.start,
            Thunk::from_suspension(Self {
                start: self.start.wrapping_increment(self.step),
                step: self.step,
            }),
        )
    }
}

impl<A: Numeric> Thunk<A> {
    /// Counts up from `start` by `step` while the value does not exceed `end`.
    #[must_use]
    pub fn range(start: A, step: A, end: A) -> Self {
        Self::from_suspension(BoundedRange {
            start,
            step,
            end,
            direction: Direction::Ascending,
        })
    }

    /// Counts down from `start` by `step` while the value is not below `end`.
    #[must_use]
    pub fn range_descending(start: A, step: A, end: A) -> Self {
        Self::from_suspension(BoundedRange {
            start,
            step,
            end,
            direction: Direction::Descending,
        })
    }

    /// Counts up from `start` by `step` forever.
    #[must_use]
    pub fn unbounded(start: A, step: A) -> Self {
        Self::from_suspension(UnboundedRange { start, step })
    }
}

impl<A: Numeric> List<A> {
    /// The lazy list `start, start + step, ...` up to and including the last
    /// value not greater than `end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let list = List::range(0, 5, 25);
    /// assert_eq!(list.length(), 6);
    /// assert_eq!(list.last(), Ok(25));
    /// ```
    #[must_use]
    pub fn range(start: A, step: A, end: A) -> Self {
        Thunk::range(start, step, end).force()
    }

    /// The lazy list `start, start - step, ...` down to and including the
    /// last value not less than `end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let list = List::range_descending(10, 1, -10);
    /// assert_eq!(list.length(), 21);
    /// assert_eq!(list.last(), Ok(-10));
    /// ```
    #[must_use]
    pub fn range_descending(start: A, step: A, end: A) -> Self {
        Thunk::range_descending(start, step, end).force()
    }

    /// The infinite lazy list `start, start + step, start + 2 * step, ...`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::List;
    ///
    /// let wrapped = List::unbounded(254_u8, 1).take(4).unwrap();
    /// assert_eq!(wrapped, List::from_slice(&[254, 255, 0, 1]));
    /// ```
    #[must_use]
    pub fn unbounded(start: A, step: A) -> Self {
        Thunk::unbounded(start, step).force()
    }
}
