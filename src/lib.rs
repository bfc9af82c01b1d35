//! A singly-linked list with value semantics.
//!
//! [`ForwardList`] owns a chain of nodes reachable from an internal anchor.
//! Elements are reached through [`Position`]s, which name the anchor
//! ([`ForwardList::before_begin`]), an element, or the end. Insertion and
//! removal happen *after* a position, so the anchor lets the front of the
//! list be handled like any other spot.
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut list = ForwardList::from(vec![14, 15, 92]);
//! list.push_front(3);
//! let pos = list.insert_after(list.begin(), 1);
//! assert_eq!(list.to_string(), "[3, 1, 14, 15, 92]");
//!
//! list.erase_after(pos);
//! assert_eq!(list, ForwardList::from(vec![3, 1, 15, 92]));
//! assert!(ForwardList::from(vec![1, 2, 3]) < ForwardList::from(vec![1, 2, 3, 1]));
//! ```
//!
//! # Copies
//!
//! `Clone` builds a full copy before handing it out, and `clone_from`
//! swaps the finished copy in, so a panicking element `clone` never leaves
//! a list half-copied. Element types whose copy reports errors implement
//! [`TryClone`]; the `try_*` copy operations return that error and leave
//! the list untouched.
//!
//! # Positions
//!
//! Positions do not borrow the list. Each one remembers which list's
//! storage it came from and which generation of a node it names, so a
//! position from another list, or one whose element was erased, is
//! rejected rather than silently reading someone else's element.

mod clone;
mod error;
mod list;
mod node;
mod ops;
mod position;

pub use clone::TryClone;
pub use error::{InsertError, PositionError};
pub use list::{ForwardList, IntoIter, Iter, IterMut};
pub use ops::swap;
pub use position::{Access, ConstPosition, Position, ReadOnly, ReadWrite};
