//! Index-linked singly linked list
//!
//! Nodes live in a single `Vec` of slots and refer to their successor by slot
//! index ([`NodeId`]) rather than by address. The list tracks:
//! - `head`: first node in list order (scans start here)
//! - `tail`: last node, so appends do not walk the chain
//! - `free`: chain of vacated slots, reused before the `Vec` grows
//!
//! A vacated slot is never reachable from `head`; it only appears on the free
//! chain until the next append claims it.

use std::mem;

/// Index of a node slot in a [`LinkedArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { value: T, next: Option<NodeId> },
    Vacant { next_free: Option<usize> },
}

/// Singly linked list whose nodes are stored in an arena
#[derive(Debug, Clone)]
pub struct LinkedArena<T> {
    slots: Vec<Slot<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    free: Option<usize>,
    len: usize,
}

impl<T> LinkedArena<T> {
    pub fn new() -> Self {
        LinkedArena {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    /// Number of linked nodes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of slots backing the list, vacant ones included
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// Value stored at `id`, if that slot is occupied
    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied { value, .. }) => Some(value),
            _ => None,
        }
    }

    /// Successor of `id` in list order
    pub fn next_of(&self, id: NodeId) -> Option<NodeId> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied { next, .. }) => *next,
            _ => None,
        }
    }

    /// Append a value after the current tail
    pub fn push_back(&mut self, value: T) -> NodeId {
        let node = Slot::Occupied { value, next: None };

        let id = match self.free {
            Some(index) => {
                if let Slot::Vacant { next_free } = &self.slots[index] {
                    self.free = *next_free;
                }
                self.slots[index] = node;
                NodeId(index)
            }
            None => {
                self.slots.push(node);
                NodeId(self.slots.len() - 1)
            }
        };

        match self.tail {
            Some(tail) => self.set_next(tail, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;

        id
    }

    /// First value in list order matching `pred`
    pub fn find<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| pred(*value))
    }

    /// Unlink and return the first value matching `pred`
    ///
    /// The predecessor is relinked to the removed node's successor and the
    /// slot is pushed onto the free chain.
    pub fn remove_first<P>(&mut self, mut pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut prev: Option<NodeId> = None;
        let mut cursor = self.head;

        while let Some(id) = cursor {
            let (matched, next) = match &self.slots[id.0] {
                Slot::Occupied { value, next } => (pred(value), *next),
                Slot::Vacant { .. } => return None,
            };

            if matched {
                match prev {
                    Some(p) => self.set_next(p, next),
                    None => self.head = next,
                }
                if self.tail == Some(id) {
                    self.tail = prev;
                }

                let vacated = Slot::Vacant {
                    next_free: self.free,
                };
                let slot = mem::replace(&mut self.slots[id.0], vacated);
                self.free = Some(id.0);
                self.len -= 1;

                return match slot {
                    Slot::Occupied { value, .. } => Some(value),
                    Slot::Vacant { .. } => None,
                };
            }

            prev = Some(id);
            cursor = next;
        }

        None
    }

    /// Walk the list from `head`
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn set_next(&mut self, id: NodeId, link: Option<NodeId>) {
        if let Slot::Occupied { next, .. } = &mut self.slots[id.0] {
            *next = link;
        }
    }
}

impl<T> Default for LinkedArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator in list order
pub struct Iter<'a, T> {
    arena: &'a LinkedArena<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.arena.next_of(id);
        self.remaining = self.remaining.saturating_sub(1);
        self.arena.get(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedArena<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
