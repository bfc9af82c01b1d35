//! Random operation sequences checked against `VecDeque`.

use std::collections::VecDeque;

use forward_list::{ConstPosition, ForwardList};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    /// Insert after the element at this offset (wrapped), or the anchor.
    InsertAfter(usize, i32),
    /// Erase after the element at this offset (wrapped), or the anchor.
    EraseAfter(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::PushFront),
        3 => any::<i32>().prop_map(Op::PushBack),
        2 => Just(Op::PopFront),
        3 => (any::<usize>(), any::<i32>()).prop_map(|(at, v)| Op::InsertAfter(at, v)),
        2 => any::<usize>().prop_map(Op::EraseAfter),
        1 => Just(Op::Clear),
    ]
}

/// Position of the element at `offset`, or the anchor when `offset` is `None`.
fn nth(list: &ForwardList<i32>, offset: Option<usize>) -> ConstPosition {
    let mut pos = list.cbefore_begin();
    if let Some(offset) = offset {
        for _ in 0..=offset {
            pos.advance(list);
        }
    }
    pos
}

/// Maps a random number onto the anchor (`None`) or an element offset.
fn pick(seed: usize, len: usize) -> Option<usize> {
    match seed % (len + 1) {
        0 => None,
        n => Some(n - 1),
    }
}

proptest! {
    #[test]
    fn behaves_like_vecdeque(ops in prop::collection::vec(op(), 0..200)) {
        let mut list = ForwardList::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::PushFront(v) => {
                    list.push_front(v);
                    model.push_front(v);
                }
                Op::PushBack(v) => {
                    list.push_back(v);
                    model.push_back(v);
                }
                Op::PopFront => {
                    prop_assert_eq!(list.pop_front(), model.pop_front());
                }
                Op::InsertAfter(seed, v) => {
                    let offset = pick(seed, model.len());
                    let pos = nth(&list, offset);
                    let inserted = list.insert_after(pos, v);
                    let index = offset.map_or(0, |o| o + 1);
                    model.insert(index, v);
                    prop_assert_eq!(list.get(inserted), Some(&v));
                }
                Op::EraseAfter(seed) => {
                    let offset = pick(seed, model.len());
                    let index = offset.map_or(0, |o| o + 1);
                    let pos = nth(&list, offset);
                    prop_assert_eq!(list.remove_after(pos), model.remove(index));
                }
                Op::Clear => {
                    list.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.is_empty(), model.is_empty());
            prop_assert!(list.iter().eq(model.iter()));
        }

        let copy = list.clone();
        prop_assert_eq!(&copy, &list);
        prop_assert_eq!(list.into_iter().collect::<Vec<_>>(), Vec::from(model));
    }

    #[test]
    fn ordering_matches_vec(a in prop::collection::vec(0..4i32, 0..6),
                            b in prop::collection::vec(0..4i32, 0..6)) {
        let la = ForwardList::from(a.clone());
        let lb = ForwardList::from(b.clone());

        prop_assert_eq!(la == lb, a == b);
        prop_assert_eq!(la.cmp(&lb), a.cmp(&b));
        prop_assert_eq!(la.partial_cmp(&lb), a.partial_cmp(&b));
        prop_assert_eq!(la < lb, a < b);
        prop_assert_eq!(la >= lb, a >= b);
    }

    #[test]
    fn swap_exchanges_contents(a in prop::collection::vec(any::<i32>(), 0..20),
                               b in prop::collection::vec(any::<i32>(), 0..20)) {
        let mut la = ForwardList::from(a.clone());
        let mut lb = ForwardList::from(b.clone());
        let (a_begin, b_begin) = (la.begin(), lb.begin());

        forward_list::swap(&mut la, &mut lb);

        prop_assert_eq!(&la, &ForwardList::from(b));
        prop_assert_eq!(&lb, &ForwardList::from(a));
        if !lb.is_empty() {
            prop_assert_eq!(lb.begin(), a_begin);
        }
        if !la.is_empty() {
            prop_assert_eq!(la.begin(), b_begin);
        }
    }
}
