//! Unit tests for List.
//!
//! These tests cover construction, accessors and the structural operations
//! on eager and lazy lists.

use lazylist::combinator::{
    compose, concat, drop_first, fold_left, fold_right, from_slice, init, last, length, map,
    map_lazy, reverse, scan, take,
};
use lazylist::{EmptyAccessError, List, Thunk};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_list() {
    let list: List<i32> = List::new();
    assert!(list.is_empty());
    assert!(!list.is_lazy());
    assert_eq!(list.length(), 0);
}

#[rstest]
fn test_from_slice_of_empty_slice_is_empty() {
    let list: List<&str> = from_slice(&[]);
    assert!(list.is_empty());
}

#[rstest]
fn test_from_slice_single_element() {
    let list = from_slice(&["foo"]);
    assert_eq!(length(&list), 1);
    assert_eq!(list.head(), Ok(&"foo"));
    assert_eq!(last(&list), Ok("foo"));
}

#[rstest]
fn test_from_slice_preserves_order() {
    let list = from_slice(&[1, 2, 3]);
    let collected: Vec<i32> = list.iter().collect();
    assert_eq!(collected, vec![1, 2, 3]);
}

#[rstest]
fn test_collect_and_from_vec_agree() {
    let collected: List<i32> = (1..=4).collect();
    let converted = List::from(vec![1, 2, 3, 4]);
    assert_eq!(collected, converted);
}

#[rstest]
fn test_cons_does_not_modify_original() {
    let list1 = List::singleton(1);
    let list2 = list1.cons(2);
    assert_eq!(list1.length(), 1);
    assert_eq!(list1.head(), Ok(&1));
    assert_eq!(list2.length(), 2);
    assert_eq!(list2.head(), Ok(&2));
}

#[rstest]
fn test_lazy_cons_with_empty_continuation() {
    let list = List::lazy_cons("only", Thunk::from_list(List::new()));
    assert!(list.is_lazy());
    assert_eq!(list.length(), 1);
    assert!(list.tail().unwrap().is_empty());
}

// =============================================================================
// Accessors
// =============================================================================

#[rstest]
fn test_head_and_tail_of_lazy_list() {
    let list = List::range(1, 1, 3);
    assert_eq!(list.head(), Ok(&1));
    let tail = list.tail().unwrap();
    assert!(tail.is_lazy());
    assert_eq!(tail.head(), Ok(&2));
}

#[rstest]
fn test_uncons() {
    let list = List::from_slice(&['a', 'b']);
    let (head, tail) = list.uncons().unwrap();
    assert_eq!(head, 'a');
    assert_eq!(tail, List::singleton('b'));
    assert!(List::<char>::new().uncons().is_none());
}

#[rstest]
#[case::head(List::<i32>::new().head().map(|_| ()).unwrap_err(), "head")]
#[case::tail(List::<i32>::new().tail().map(|_| ()).unwrap_err(), "tail")]
#[case::last(last(&List::<i32>::new()).map(|_| ()).unwrap_err(), "last")]
#[case::init(init(&List::<i32>::new()).map(|_| ()).unwrap_err(), "init")]
#[case::take(take(2, &List::singleton(1)).map(|_| ()).unwrap_err(), "take")]
#[case::drop_first(drop_first(3, &List::range(0, 1, 1)).map(|_| ()).unwrap_err(), "drop_first")]
fn test_empty_access_is_reported(#[case] error: EmptyAccessError, #[case] operation: &str) {
    assert_eq!(error.operation(), operation);
}

#[rstest]
fn test_error_propagates_through_question_mark() {
    fn second<A: Clone>(list: &List<A>) -> Result<A, EmptyAccessError> {
        Ok(list.tail()?.head()?.clone())
    }

    assert_eq!(second(&List::from_slice(&[1, 2])), Ok(2));
    assert_eq!(
        second(&List::singleton(1)),
        Err(EmptyAccessError::new("head"))
    );
}

// =============================================================================
// Take / Drop / Init
// =============================================================================

#[rstest]
fn test_take_materializes_lazy_prefix() {
    let prefix = take(5, &List::unbounded(1, 1)).unwrap();
    assert!(!prefix.is_lazy());
    assert_eq!(prefix, List::from_slice(&[1, 2, 3, 4, 5]));
}

#[rstest]
fn test_take_whole_list() {
    let list = List::from_slice(&[1, 2, 3]);
    assert_eq!(take(3, &list), Ok(list));
}

#[rstest]
fn test_drop_first_shares_remaining_nodes() {
    let suffix = List::from_slice(&[3, 4]);
    let list = suffix.cons(2).cons(1);
    let dropped = drop_first(2, &list).unwrap();
    match (&dropped, &suffix) {
        (List::EagerCons(left), List::EagerCons(right)) => {
            assert!(std::rc::Rc::ptr_eq(left, right));
        }
        _ => panic!("both lists should be eager"),
    }
}

#[rstest]
fn test_drop_first_of_whole_list_is_empty() {
    let list = List::from_slice(&[1, 2]);
    assert!(drop_first(2, &list).unwrap().is_empty());
}

#[rstest]
fn test_init_of_lazy_list() {
    let list = List::range(1, 1, 4);
    assert_eq!(init(&list), Ok(List::from_slice(&[1, 2, 3])));
    assert_eq!(init(&List::singleton(1)), Ok(List::new()));
}

// =============================================================================
// Concat / Reverse
// =============================================================================

#[rstest]
fn test_concat_with_empty_receiver_returns_other() {
    let other = List::unbounded(0, 1);
    let combined = concat(&List::new(), &other);
    assert!(combined.is_lazy());
    assert_eq!(take(2, &combined), Ok(List::from_slice(&[0, 1])));
}

#[rstest]
fn test_concat_finite_with_infinite() {
    let combined = concat(&List::from_slice(&[-2, -1]), &List::unbounded(0, 1));
    assert_eq!(
        take(4, &combined),
        Ok(List::from_slice(&[-2, -1, 0, 1]))
    );
}

#[rstest]
fn test_concat_keeps_both_inputs() {
    let first = List::from_slice(&[1, 2]);
    let second = List::from_slice(&[3]);
    let combined = concat(&first, &second);
    assert_eq!(combined, List::from_slice(&[1, 2, 3]));
    assert_eq!(first, List::from_slice(&[1, 2]));
    assert_eq!(second, List::singleton(3));
}

#[rstest]
fn test_reverse_of_empty_is_empty() {
    assert!(reverse(&List::<i32>::new()).is_empty());
}

#[rstest]
fn test_reverse_of_lazy_list_is_eager() {
    let reversed = reverse(&List::range(1, 1, 3));
    assert!(!reversed.is_lazy());
    assert_eq!(reversed, List::from_slice(&[3, 2, 1]));
}

// =============================================================================
// Map / Fold / Scan
// =============================================================================

#[rstest]
fn test_map_over_empty_list() {
    let empty: List<i32> = List::new();
    let eager: List<String> = map(|x: &i32| x.to_string(), &empty);
    let lazy: List<String> = map_lazy(|x: &i32| x.to_string(), &empty);
    assert!(eager.is_empty());
    assert!(lazy.is_empty());
}

#[rstest]
fn test_map_changes_element_type() {
    let list = List::from_slice(&[1, 22, 333]);
    let digits = map(|x: &i32| x.to_string().len(), &list);
    assert_eq!(digits, List::from_slice(&[1, 2, 3]));
}

#[rstest]
fn test_fold_left_total_length() {
    let words = List::from_slice(&["foo", "bar", "baz"]);
    assert_eq!(fold_left(|total: usize, word: &&str| total + word.len(), 0, &words), 9);
}

#[rstest]
fn test_fold_right_builds_in_order() {
    let list = List::from_slice(&[1, 2, 3]);
    let rebuilt = fold_right(|x: &i32, tail: List<i32>| tail.cons(*x), List::new(), &list);
    assert_eq!(rebuilt, list);
}

#[rstest]
fn test_fold_right_calls_function_from_last_to_first() {
    let list = List::from_slice(&["a", "b", "c"]);
    let mut visited = Vec::new();
    fold_right(
        |x: &&str, ()| visited.push(*x),
        (),
        &list,
    );
    assert_eq!(visited, vec!["c", "b", "a"]);
}

#[rstest]
fn test_scan_total_length() {
    let words = List::from_slice(&["foo", "bar", "baz"]);
    let partials = scan(|total: usize, word: &&str| total + word.len(), 0, &words);
    assert_eq!(partials, List::from_slice(&[0, 3, 6, 9]));
}

#[rstest]
fn test_fold_left_over_long_list_uses_constant_stack() {
    let list: List<u64> = (1..=100_000).collect();
    assert_eq!(fold_left(|sum: u64, x: &u64| sum + x, 0, &list), 5_000_050_000);
    assert_eq!(fold_right(|x: &u64, sum: u64| sum + x, 0, &list), 5_000_050_000);
}

// =============================================================================
// Compose
// =============================================================================

#[rstest]
fn test_compose_with_combinators() {
    let double_all = |list: List<i32>| map(|x: &i32| x * 2, &list);
    let sum = |list: List<i32>| fold_left(|total: i32, x: &i32| total + x, 0, &list);
    let pipeline = compose(double_all, sum);
    assert_eq!(pipeline(List::from_slice(&[1, 2, 3])), 12);
}

// =============================================================================
// Equality / Formatting
// =============================================================================

#[rstest]
fn test_equality_ignores_representation() {
    let eager = List::from_slice(&[1, 2, 3]);
    assert_eq!(eager.into_lazy(), eager);
    assert_eq!(List::range(1, 1, 3), eager);
    assert_ne!(List::range(1, 1, 4), eager);
}

#[rstest]
fn test_display_lists_every_element() {
    assert_eq!(List::from_slice(&["a", "b"]).to_string(), "[a, b]");
    assert_eq!(List::range(3, 1, 5).to_string(), "[3, 4, 5]");
}
