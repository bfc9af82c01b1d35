//! The singly-linked list itself.

use std::fmt::{self, Debug};
use std::iter::FusedIterator;
use std::mem;
use std::ops::{Index, IndexMut};

use log::{trace, warn};

use crate::error::{InsertError, PositionError};
use crate::node::{ChainMut, Link, Node, Nodes, SlotIndex};
use crate::position::{Access, ConstPosition, ListId, Position, ReadWrite, Target};

/// A resolved, valid insertion point: the anchor or a live node.
#[derive(Debug, Clone, Copy)]
enum At {
    Anchor,
    Node(SlotIndex),
}

/// A singly-linked list that owns its nodes.
///
/// The list keeps an anchor link to the first node and a cached length.
/// There is no tail pointer, so [`push_back`](Self::push_back) walks the
/// chain.
///
/// Elements are addressed with [`Position`]s.
/// [`before_begin`](Self::before_begin) names the anchor, the insertion
/// point in front of the first element, and [`end`](Self::end) names the
/// terminator.
///
/// ```
/// use forward_list::ForwardList;
///
/// let mut list = ForwardList::from(vec![1, 2, 3, 4]);
/// let next = list.erase_after(list.cbegin());
/// assert_eq!(list, ForwardList::from(vec![1, 3, 4]));
/// assert_eq!(list[next], 3);
/// ```
///
/// A `ForwardList` is not internally synchronized. Sharing it across
/// threads needs the usual `&`/`&mut` discipline or an external lock.
pub struct ForwardList<T> {
    nodes: Nodes<T>,
    head: Link,
    len: usize,
    id: ListId,
}

impl<T> ForwardList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        ForwardList {
            nodes: Nodes::new(),
            head: None,
            len: 0,
            id: ListId::fresh(),
        }
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Inserts `value` as the new first element.
    pub fn push_front(&mut self, value: T) {
        let handle = self.nodes.insert(value, self.head);
        self.head = Some(handle.index);
        self.len += 1;
    }

    /// Appends `value` after the last element.
    ///
    /// This walks the whole chain; there is no cached tail.
    pub fn push_back(&mut self, value: T) {
        let At::Node(tail) = self.last() else {
            return self.push_front(value);
        };
        let handle = self.nodes.insert(value, None);
        self.nodes.node_mut(tail).next = Some(handle.index);
        self.len += 1;
    }

    /// Removes the first element and returns it.
    ///
    /// Returns `None` on an empty list and logs a warning, since popping
    /// an empty list is almost always a caller bug.
    pub fn pop_front(&mut self) -> Option<T> {
        let value = self.take_front();
        if value.is_none() {
            warn!("pop_front called on an empty list");
        }
        value
    }

    /// Returns the first element without removing it.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|index| &self.nodes.node(index).value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|index| &mut self.nodes.node_mut(index).value)
    }

    /// Inserts `value` right after `pos` and returns its position.
    ///
    /// Inserting after [`before_begin`](Self::before_begin) is the same as
    /// [`push_front`](Self::push_front).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end position, is stale, or belongs to another
    /// list. See [`try_insert_after`](Self::try_insert_after).
    pub fn insert_after(&mut self, pos: impl Into<ConstPosition>, value: T) -> Position {
        match self.try_insert_after(pos, value) {
            Ok(inserted) => inserted,
            Err(err) => panic!("insert_after: {}", err.error()),
        }
    }

    /// Inserts `value` right after `pos`, handing it back if `pos` cannot
    /// be inserted after.
    pub fn try_insert_after(
        &mut self,
        pos: impl Into<ConstPosition>,
        value: T,
    ) -> Result<Position, InsertError<T>> {
        let at = match self.locate(pos.into().target()) {
            Ok(at) => at,
            Err(error) => return Err(InsertError::new(error, value)),
        };
        let handle = self.nodes.insert(value, self.link_after(at));
        self.set_link_after(at, Some(handle.index));
        self.len += 1;
        Ok(Position::new(Target::Node(self.id, handle)))
    }

    /// Removes the element right after `pos` and returns the position that
    /// now follows `pos` (the end position if the erased element was last).
    ///
    /// # Panics
    ///
    /// Panics if no element follows `pos`, or `pos` is the end position,
    /// stale, or from another list.
    pub fn erase_after(&mut self, pos: impl Into<ConstPosition>) -> Position {
        let at = self.expect_locate(pos.into(), "erase_after");
        let Some(node) = self.unlink_after(at) else {
            panic!("erase_after: {}", PositionError::NothingAfter);
        };
        self.position_of(node.next)
    }

    /// Removes the element right after `pos` and returns it, or `None` if
    /// `pos` is the last element.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end position, stale, or from another list.
    pub fn remove_after(&mut self, pos: impl Into<ConstPosition>) -> Option<T> {
        let at = self.expect_locate(pos.into(), "remove_after");
        self.unlink_after(at).map(|node| node.value)
    }

    /// Removes every element, front to back.
    ///
    /// Calling it again on an empty list does nothing.
    pub fn clear(&mut self) {
        let released = self.len;
        while self.take_front().is_some() {}
        if released > 0 {
            trace!("cleared {released} elements");
        }
    }

    /// Exchanges the contents of two lists without touching any element.
    ///
    /// Positions keep naming the same elements, now in the other list.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves the contents out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// The position before the first element.
    ///
    /// It can be inserted or erased after, but holds no element.
    pub fn before_begin(&self) -> Position {
        Position::new(Target::Anchor(self.id))
    }

    /// The position of the first element, equal to [`end`](Self::end) when
    /// the list is empty.
    pub fn begin(&self) -> Position {
        self.position_of(self.head)
    }

    /// The position after the last element.
    pub fn end(&self) -> Position {
        Position::new(Target::End)
    }

    /// Read-only [`before_begin`](Self::before_begin).
    pub fn cbefore_begin(&self) -> ConstPosition {
        self.before_begin().as_const()
    }

    /// Read-only [`begin`](Self::begin).
    pub fn cbegin(&self) -> ConstPosition {
        self.begin().as_const()
    }

    /// Read-only [`end`](Self::end).
    pub fn cend(&self) -> ConstPosition {
        self.end().as_const()
    }

    /// Returns the element at `pos`, or `None` if `pos` holds no element of
    /// this list.
    pub fn get<A: Access>(&self, pos: Position<A>) -> Option<&T> {
        self.live_node(pos.target())
            .map(|index| &self.nodes.node(index).value)
    }

    /// Mutable [`get`](Self::get). Only read-write positions are accepted.
    pub fn get_mut(&mut self, pos: Position<ReadWrite>) -> Option<&mut T> {
        self.live_node(pos.target())
            .map(|index| &mut self.nodes.node_mut(index).value)
    }

    /// Iterates over the elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            chain: self.nodes.chain_mut(self.head, self.len),
        }
    }

    /// The position after `target`, as long as `target` is valid here.
    pub(crate) fn successor(&self, target: Target) -> Result<Target, PositionError> {
        let at = self.locate(target)?;
        Ok(self.position_of::<ReadWrite>(self.link_after(at)).target())
    }

    /// Appends values in order, walking to the tail once.
    fn append_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut at = self.last();
        for value in values {
            let handle = self.nodes.insert(value, None);
            self.set_link_after(at, Some(handle.index));
            self.len += 1;
            at = At::Node(handle.index);
        }
    }

    fn take_front(&mut self) -> Option<T> {
        self.unlink_after(At::Anchor).map(|node| node.value)
    }

    fn unlink_after(&mut self, at: At) -> Option<Node<T>> {
        let index = self.link_after(at)?;
        let node = self.nodes.remove(index);
        self.set_link_after(at, node.next);
        self.len -= 1;
        Some(node)
    }

    fn link_after(&self, at: At) -> Link {
        match at {
            At::Anchor => self.head,
            At::Node(index) => self.nodes.node(index).next,
        }
    }

    fn set_link_after(&mut self, at: At, link: Link) {
        match at {
            At::Anchor => self.head = link,
            At::Node(index) => self.nodes.node_mut(index).next = link,
        }
    }

    /// The last node, or the anchor if the list is empty.
    fn last(&self) -> At {
        let mut at = At::Anchor;
        while let Some(next) = self.link_after(at) {
            at = At::Node(next);
        }
        at
    }

    fn position_of<A: Access>(&self, link: Link) -> Position<A> {
        match link {
            Some(index) => Position::new(Target::Node(self.id, self.nodes.handle(index))),
            None => Position::new(Target::End),
        }
    }

    fn live_node(&self, target: Target) -> Option<SlotIndex> {
        match target {
            Target::Node(id, handle) if id == self.id && self.nodes.is_live(handle) => {
                Some(handle.index)
            }
            _ => None,
        }
    }

    fn locate(&self, target: Target) -> Result<At, PositionError> {
        match target {
            Target::End => Err(PositionError::PastEnd),
            Target::Anchor(id) | Target::Node(id, _) if id != self.id => {
                Err(PositionError::ForeignList)
            }
            Target::Anchor(_) => Ok(At::Anchor),
            Target::Node(_, handle) if self.nodes.is_live(handle) => Ok(At::Node(handle.index)),
            Target::Node(..) => Err(PositionError::Stale),
        }
    }

    fn expect_locate(&self, pos: ConstPosition, op: &str) -> At {
        self.locate(pos.target())
            .unwrap_or_else(|err| panic!("{op}: {err}"))
    }
}

// Releases nodes front to back.
impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: Access> Index<Position<A>> for ForwardList<T> {
    type Output = T;

    fn index(&self, pos: Position<A>) -> &T {
        self.get(pos)
            .unwrap_or_else(|| panic!("{pos:?} does not hold an element of this list"))
    }
}

impl<T> IndexMut<Position<ReadWrite>> for ForwardList<T> {
    fn index_mut(&mut self, pos: Position<ReadWrite>) -> &mut T {
        self.get_mut(pos)
            .unwrap_or_else(|| panic!("{pos:?} does not hold an element of this list"))
    }
}

/// Deep copy: the copy is built in full before it is returned, so a
/// panicking `T::clone` leaves nothing half-built behind.
impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Builds the copy first and swaps it in, so `self` is untouched if an
    /// element's `clone` panics.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

/// Borrowing iterator returned by [`ForwardList::iter`].
pub struct Iter<'a, T> {
    nodes: &'a Nodes<T>,
    next: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|index| {
            let node = self.nodes.node(index);
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Mutable iterator returned by [`ForwardList::iter_mut`].
pub struct IterMut<'a, T> {
    chain: ChainMut<'a, T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chain.size_hint()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator, pops from the front.
pub struct IntoIter<T>(ForwardList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.take_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        list.append_all(iter);
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.append_all(iter.into_iter().copied());
    }
}

impl<T> From<Vec<T>> for ForwardList<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: Debug> fmt::Display for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;

        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{:?}", first)?;
            for item in iter {
                write!(f, ", {:?}", item)?;
            }
        }

        write!(f, "]")
    }
}
