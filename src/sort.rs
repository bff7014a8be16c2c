//! Quicksort over lists of ordered elements.
//!
//! The head of the list is the pivot. The tail is split with
//! [`List::filter`] into the elements less than the pivot and the rest,
//! both partitions are sorted, and the pieces are joined with
//! [`List::concat`].
//!
//! Partitioning keeps input order, so the ascending sort is stable. The
//! descending sort places later equal elements before earlier ones.
//!
//! Neither sort returns on an infinite list; materialize a prefix with
//! [`List::take`] first.
//!
//! # Examples
//!
//! ```rust
//! use lazylist::List;
//! use lazylist::sort::{qsort, qsort_descending};
//!
//! let list = List::from_slice(&[8, 3, 12]);
//! assert_eq!(qsort(&list), List::from_slice(&[3, 8, 12]));
//! assert_eq!(qsort_descending(&list), List::from_slice(&[12, 8, 3]));
//! ```

use std::cmp::Ordering;

use crate::list::List;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Ascending,
    Descending,
}

/// Sorts a list in ascending order.
///
/// Empty and single-element lists are returned unchanged.
#[must_use]
pub fn qsort<A>(list: &List<A>) -> List<A>
where
    A: PartialOrd + Clone + 'static,
{
    partition_sort(list, Direction::Ascending)
}

/// Sorts a list in descending order.
///
/// Empty and single-element lists are returned unchanged.
#[must_use]
pub fn qsort_descending<A>(list: &List<A>) -> List<A>
where
    A: PartialOrd + Clone + 'static,
{
    partition_sort(list, Direction::Descending)
}

fn partition_sort<A>(list: &List<A>, direction: Direction) -> List<A>
where
    A: PartialOrd + Clone + 'static,
{
    let Some((pivot, rest)) = list.uncons() else {
        return list.clone();
    };
    if rest.is_empty() {
        return list.clone();
    }
    // Partitions of a lazy tail would re-force it at every level.
    let rest = match rest {
        List::LazyCons(_) => List::build_from_vec(rest.iter().collect()),
        List::Empty | List::EagerCons(_) => rest,
    };

    let less_pivot = pivot.clone();
    let less = partition_sort(&rest.filter(move |element| *element < less_pivot), direction);
    let at_least_pivot = pivot.clone();
    let at_least = partition_sort(
        &rest.filter(move |element| {
            element.partial_cmp(&at_least_pivot) != Some(Ordering::Less)
        }),
        direction,
    );
    tracing::trace!(?direction, "quicksort partition joined");

    match direction {
        Direction::Ascending => less.concat(&at_least.cons(pivot)),
        Direction::Descending => at_least.concat(&less.cons(pivot)),
    }
}

impl<A: PartialOrd + Clone + 'static> List<A> {
    /// Sorts the list in ascending order. See [`qsort`].
    #[must_use]
    pub fn qsort(&self) -> Self {
        qsort(self)
    }

    /// Sorts the list in descending order. See [`qsort_descending`].
    #[must_use]
    pub fn qsort_descending(&self) -> Self {
        qsort_descending(self)
    }
}
