//! Comparison operators and `swap` for [`ForwardList`].

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::ForwardList;

/// Exchanges the contents of two lists in O(1).
///
/// No element is moved or copied; positions follow their elements.
pub fn swap<T>(lhs: &mut ForwardList<T>, rhs: &mut ForwardList<T>) {
    lhs.swap(rhs);
}

// Lengths are compared first so neither walk runs past the shorter list.
impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    fn list(values: &[i32]) -> ForwardList<i32> {
        values.iter().copied().collect()
    }

    fn hash_of(list: &ForwardList<i32>) -> u64 {
        let mut hasher = DefaultHasher::new();
        list.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality() {
        let list_1 = list(&[2, 1]);
        let list_2 = list(&[3, 2, 1]);
        let list_1_copy = list(&[2, 1]);
        let empty = list(&[]);

        assert_eq!(list_1, list_1);
        assert_eq!(empty, empty);
        assert_eq!(list_1, list_1_copy);
        assert_ne!(list_1, list_2);
        assert_ne!(list_2, list_1);
        assert_eq!(empty, list(&[]));
    }

    #[test]
    fn test_prefix_is_not_equal() {
        assert_ne!(list(&[1, 2]), list(&[1, 2, 3]));
        assert_ne!(list(&[1, 2, 3]), list(&[1, 2]));
    }

    #[test]
    fn test_lexicographic_order() {
        assert!(list(&[1, 2, 3]) < list(&[1, 2, 3, 1]));
        assert!(list(&[1, 2, 3]) <= list(&[1, 2, 3]));
        assert!(list(&[1, 2, 4]) > list(&[1, 2, 3]));
        assert!(list(&[1, 2, 3]) >= list(&[1, 2, 3]));
        assert!(!(list(&[1, 2, 3]) > list(&[1, 2, 3])));
        assert!(list(&[]) < list(&[0]));
        assert_eq!(list(&[5]).cmp(&list(&[1, 9])), Ordering::Greater);
    }

    #[test]
    fn test_partial_order_with_nan() {
        let a: ForwardList<f64> = ForwardList::from(vec![1.0, f64::NAN]);
        let b: ForwardList<f64> = ForwardList::from(vec![1.0, 2.0]);
        assert_eq!(a.partial_cmp(&b), None);
        assert_ne!(a, a.clone());
    }

    #[test]
    fn test_hash_matches_equality() {
        assert_eq!(hash_of(&list(&[1, 2, 3])), hash_of(&list(&[1, 2, 3])));
        assert_ne!(hash_of(&list(&[1, 2, 3])), hash_of(&list(&[1, 2])));
    }

    #[test]
    fn test_free_swap() {
        let mut first = list(&[2, 1]);
        let mut second = list(&[15, 11, 10]);
        let old_first_begin = first.begin();
        let old_second_begin = second.begin();

        swap(&mut first, &mut second);

        assert_eq!(first.begin(), old_second_begin);
        assert_eq!(second.begin(), old_first_begin);
        assert_eq!(first, list(&[15, 11, 10]));
        assert_eq!(second, list(&[2, 1]));
    }
}
