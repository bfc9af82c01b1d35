//! Positions into a [`ForwardList`].
//!
//! A position marks the anchor (before-begin), one element, or the end of
//! a list. It owns nothing and does not borrow the list; reading or writing
//! through it goes back through the list, which checks that the position
//! is still valid.
//!
//! There is one position type, parameterized by an access marker.
//! [`Position`] (read-write) converts into [`ConstPosition`] (read-only),
//! never the other way round, and the two compare with each other.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::ForwardList;
use crate::node::Handle;

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of one list's node storage.
///
/// Moves with the storage on swap, so positions keep naming the same
/// nodes. A clone gets a fresh identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(u64);

impl ListId {
    pub(crate) fn fresh() -> Self {
        ListId(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// What a position points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Target {
    Anchor(ListId),
    Node(ListId, Handle),
    /// The terminator. Shared by every list.
    End,
}

mod sealed {
    pub trait Sealed {}
}

/// Access mode of a [`Position`]. Implemented by [`ReadWrite`] and [`ReadOnly`].
pub trait Access: sealed::Sealed {}

/// Marker for positions that allow writing through them.
#[derive(Debug)]
pub enum ReadWrite {}

/// Marker for positions that only allow reading.
#[derive(Debug)]
pub enum ReadOnly {}

impl sealed::Sealed for ReadWrite {}
impl sealed::Sealed for ReadOnly {}
impl Access for ReadWrite {}
impl Access for ReadOnly {}

/// A position in a [`ForwardList`].
pub struct Position<A: Access = ReadWrite> {
    target: Target,
    _access: PhantomData<fn() -> A>,
}

/// A read-only position.
pub type ConstPosition = Position<ReadOnly>;

impl<A: Access> Position<A> {
    pub(crate) const fn new(target: Target) -> Self {
        Position {
            target,
            _access: PhantomData,
        }
    }

    pub(crate) const fn target(self) -> Target {
        self.target
    }

    /// Returns `true` for the one-past-the-last position.
    pub fn is_end(&self) -> bool {
        self.target == Target::End
    }

    /// Returns `true` for the position before the first element.
    pub fn is_before_begin(&self) -> bool {
        matches!(self.target, Target::Anchor(_))
    }

    /// Moves to the next position and returns it (pre-increment).
    ///
    /// # Panics
    ///
    /// Panics if this is the end position, or it is stale or belongs to
    /// another list.
    pub fn advance<T>(&mut self, list: &ForwardList<T>) -> &mut Self {
        match list.successor(self.target) {
            Ok(next) => self.target = next,
            Err(err) => panic!("cannot advance position: {err}"),
        }
        self
    }

    /// Moves to the next position and returns the old one (post-increment).
    ///
    /// # Panics
    ///
    /// Same conditions as [`advance`](Self::advance).
    pub fn post_advance<T>(&mut self, list: &ForwardList<T>) -> Self {
        let old = *self;
        self.advance(list);
        old
    }

    /// The read-only view of this position.
    pub fn as_const(self) -> ConstPosition {
        Position::new(self.target)
    }
}

impl<A: Access> Clone for Position<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Access> Copy for Position<A> {}

impl From<Position<ReadWrite>> for Position<ReadOnly> {
    fn from(pos: Position<ReadWrite>) -> Self {
        pos.as_const()
    }
}

impl<A: Access, B: Access> PartialEq<Position<B>> for Position<A> {
    fn eq(&self, other: &Position<B>) -> bool {
        self.target == other.target
    }
}

impl<A: Access> Eq for Position<A> {}

impl<A: Access> Hash for Position<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target.hash(state);
    }
}

impl<A: Access> fmt::Debug for Position<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Target::Anchor(_) => f.write_str("Position(before_begin)"),
            Target::Node(_, handle) => write!(f, "Position(node {})", handle.index),
            Target::End => f.write_str("Position(end)"),
        }
    }
}
