//! Node storage for [`ForwardList`](crate::ForwardList).
//!
//! Nodes live in an arena owned by a single list. Links between nodes are
//! slot indices, so the arena is the only owner and dropping it never
//! recurses down the chain. Removed slots go onto a free list and are
//! reused; every removal bumps the slot's generation so a position that
//! still names the old node can be told apart from the new one.

use std::marker::PhantomData;

/// Index of a slot in the arena.
pub(crate) type SlotIndex = u32;

/// Link to the next node. `None` is the terminator.
pub(crate) type Link = Option<SlotIndex>;

/// A slot index paired with the generation it was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Handle {
    pub(crate) index: SlotIndex,
    pub(crate) generation: u32,
}

/// A live node: one element and the link to its successor.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link,
}

#[derive(Debug)]
enum Entry<T> {
    Occupied(Node<T>),
    Vacant { next_free: Link },
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

/// Arena of nodes belonging to one list.
#[derive(Debug)]
pub(crate) struct Nodes<T> {
    slots: Vec<Slot<T>>,
    free: Link,
}

impl<T> Nodes<T> {
    pub(crate) const fn new() -> Self {
        Nodes {
            slots: Vec::new(),
            free: None,
        }
    }

    /// Stores a node and returns the handle it can be found under.
    pub(crate) fn insert(&mut self, value: T, next: Link) -> Handle {
        let node = Node { value, next };

        if let Some(index) = self.free {
            let slot = &mut self.slots[index as usize];
            self.free = match slot.entry {
                Entry::Vacant { next_free } => next_free,
                Entry::Occupied(_) => unreachable!("free list points at a live node"),
            };
            slot.entry = Entry::Occupied(node);
            return Handle {
                index,
                generation: slot.generation,
            };
        }

        let index = SlotIndex::try_from(self.slots.len())
            .ok()
            .filter(|index| *index != SlotIndex::MAX)
            .unwrap_or_else(|| {
                panic!("forward list cannot hold more than {} nodes", SlotIndex::MAX)
            });
        self.slots.push(Slot {
            generation: 0,
            entry: Entry::Occupied(node),
        });
        Handle {
            index,
            generation: 0,
        }
    }

    /// Takes the node out of its slot and puts the slot on the free list.
    pub(crate) fn remove(&mut self, index: SlotIndex) -> Node<T> {
        let slot = &mut self.slots[index as usize];
        let entry = std::mem::replace(
            &mut slot.entry,
            Entry::Vacant {
                next_free: self.free,
            },
        );
        match entry {
            Entry::Occupied(node) => {
                slot.generation = slot.generation.wrapping_add(1);
                self.free = Some(index);
                node
            }
            Entry::Vacant { .. } => unreachable!("removing a vacant slot"),
        }
    }

    pub(crate) fn node(&self, index: SlotIndex) -> &Node<T> {
        match &self.slots[index as usize].entry {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("link points at a vacant slot"),
        }
    }

    pub(crate) fn node_mut(&mut self, index: SlotIndex) -> &mut Node<T> {
        match &mut self.slots[index as usize].entry {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("link points at a vacant slot"),
        }
    }

    /// Handle for a slot known to be live.
    pub(crate) fn handle(&self, index: SlotIndex) -> Handle {
        Handle {
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    /// Whether `handle` still names the node it was issued for.
    pub(crate) fn is_live(&self, handle: Handle) -> bool {
        self.slots
            .get(handle.index as usize)
            .is_some_and(|slot| {
                slot.generation == handle.generation && matches!(slot.entry, Entry::Occupied(_))
            })
    }

    /// Mutable walk along the chain starting at `head`.
    pub(crate) fn chain_mut(&mut self, head: Link, len: usize) -> ChainMut<'_, T> {
        ChainMut {
            slots: self.slots.as_mut_ptr(),
            bound: self.slots.len(),
            next: head,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

/// Yields `&mut T` for each node of a chain, in link order.
pub(crate) struct ChainMut<'a, T> {
    slots: *mut Slot<T>,
    bound: usize,
    next: Link,
    remaining: usize,
    _marker: PhantomData<&'a mut Slot<T>>,
}

impl<'a, T> Iterator for ChainMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next? as usize;
        assert!(index < self.bound, "link out of arena bounds");

        // SAFETY: `slots` comes from a `&'a mut Vec` that stays borrowed for
        // 'a, `index` is in bounds, and a chain never visits a slot twice, so
        // no two returned references alias.
        let slot = unsafe { &mut *self.slots.add(index) };
        match &mut slot.entry {
            Entry::Occupied(node) => {
                self.next = node.next;
                self.remaining -= 1;
                Some(&mut node.value)
            }
            Entry::Vacant { .. } => unreachable!("link points at a vacant slot"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

unsafe impl<T: Send> Send for ChainMut<'_, T> {}
unsafe impl<T: Sync> Sync for ChainMut<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_remove() {
        let mut nodes = Nodes::new();
        let a = nodes.insert("a", None);
        let b = nodes.insert("b", Some(a.index));

        assert_eq!(nodes.node(b.index).next, Some(a.index));
        assert_eq!(nodes.node(a.index).value, "a");

        let removed = nodes.remove(a.index);
        assert_eq!(removed.value, "a");
        assert!(!nodes.is_live(a));
        assert!(nodes.is_live(b));
    }

    #[test]
    fn test_slot_reuse_bumps_generation() {
        let mut nodes = Nodes::new();
        let first = nodes.insert(1, None);
        nodes.remove(first.index);

        let second = nodes.insert(2, None);
        assert_eq!(second.index, first.index);
        assert_ne!(second.generation, first.generation);
        assert!(!nodes.is_live(first));
        assert!(nodes.is_live(second));
        assert_eq!(nodes.handle(second.index), second);
    }

    #[test]
    fn test_chain_mut_follows_links() {
        let mut nodes = Nodes::new();
        let c = nodes.insert(3, None);
        let b = nodes.insert(2, Some(c.index));
        let a = nodes.insert(1, Some(b.index));

        for value in nodes.chain_mut(Some(a.index), 3) {
            *value *= 10;
        }

        assert_eq!(nodes.node(a.index).value, 10);
        assert_eq!(nodes.node(b.index).value, 20);
        assert_eq!(nodes.node(c.index).value, 30);
    }
}
