//! Position-addressable ordered sequence.
//!
//! [`PositionalList`] is a doubly-linked list whose nodes live in an arena owned
//! by the list. Elements are addressed by [`Position`] handles instead of
//! indices, so inserting or deleting one element never invalidates the
//! position of another. This is what lets the triangulator expand a face into
//! several triangles while it walks the same sequence.
//!
//! Deleted slots are never reused: a position that has been deleted stays
//! invalid for the lifetime of the list, and any later use of it is rejected
//! with [`PositionError::Deleted`].
//!
//! # Example
//!
//! ```
//! use mesh_convert::PositionalList;
//!
//! let mut list = PositionalList::new();
//! let b = list.add_last('b').unwrap();
//! list.add_before(b, 'a').unwrap();
//! list.add_last('c').unwrap();
//!
//! let next = list.after(b).unwrap();
//! list.delete(b).unwrap();
//! assert_eq!(list.get(next.unwrap()).unwrap(), &'c');
//! assert_eq!(list.iter().collect::<String>(), "ac");
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::PositionError;

static NEXT_LIST_ID: AtomicU32 = AtomicU32::new(0);

/// Opaque handle to one element of a [`PositionalList`].
///
/// A position stays valid until the element it addresses is deleted,
/// regardless of insertions or deletions elsewhere in the list.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    list: u32,
    slot: u32,
}

impl Position {
    #[cfg(test)]
    pub(crate) fn from_raw(slot: u32) -> Self {
        Self {
            list: u32::MAX,
            slot,
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}:{})", self.list, self.slot)
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    /// `None` once the node has been deleted.
    value: Option<T>,
    prev: Option<u32>,
    next: Option<u32>,
}

/// Ordered sequence supporting O(1) insertion before/after and deletion of a
/// position while an external cursor walks the list.
#[derive(Debug, Clone)]
pub struct PositionalList<T> {
    id: u32,
    nodes: Vec<Node<T>>,
    /// Slots available over the list's lifetime; deleted slots count.
    max_slots: u32,
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
}

impl<T> Default for PositionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PositionalList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with room for `capacity` insertions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::with_capacity(capacity),
            max_slots: u32::MAX,
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_slot_limit(max_slots: u32) -> Self {
        Self {
            max_slots,
            ..Self::new()
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the list holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position of the first element, or `None` if the list is empty.
    pub fn first(&self) -> Option<Position> {
        self.head.map(|slot| self.position(slot))
    }

    /// Position of the last element, or `None` if the list is empty.
    pub fn last(&self) -> Option<Position> {
        self.tail.map(|slot| self.position(slot))
    }

    /// Position following `p`, or `None` if `p` is the last element.
    pub fn after(&self, p: Position) -> Result<Option<Position>, PositionError> {
        let slot = self.validate(p)?;
        Ok(self.nodes[slot as usize].next.map(|n| self.position(n)))
    }

    /// Position preceding `p`, or `None` if `p` is the first element.
    pub fn before(&self, p: Position) -> Result<Option<Position>, PositionError> {
        let slot = self.validate(p)?;
        Ok(self.nodes[slot as usize].prev.map(|n| self.position(n)))
    }

    /// Borrow the element at `p`.
    pub fn get(&self, p: Position) -> Result<&T, PositionError> {
        let slot = self.validate(p)?;
        self.nodes[slot as usize]
            .value
            .as_ref()
            .ok_or(PositionError::Deleted(p))
    }

    /// Mutably borrow the element at `p`.
    pub fn get_mut(&mut self, p: Position) -> Result<&mut T, PositionError> {
        let slot = self.validate(p)?;
        self.nodes[slot as usize]
            .value
            .as_mut()
            .ok_or(PositionError::Deleted(p))
    }

    /// Insert `value` at the front of the list.
    pub fn add_first(&mut self, value: T) -> Result<Position, PositionError> {
        let slot = self.alloc(value, None, self.head)?;
        match self.head {
            Some(old) => self.nodes[old as usize].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        Ok(self.position(slot))
    }

    /// Append `value` at the end of the list.
    pub fn add_last(&mut self, value: T) -> Result<Position, PositionError> {
        let slot = self.alloc(value, self.tail, None)?;
        match self.tail {
            Some(old) => self.nodes[old as usize].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        Ok(self.position(slot))
    }

    /// Insert `value` immediately before `p`.
    ///
    /// Every existing position, `p` included, stays valid and keeps its
    /// relative order.
    pub fn add_before(&mut self, p: Position, value: T) -> Result<Position, PositionError> {
        let target = self.validate(p)?;
        let prev = self.nodes[target as usize].prev;
        let slot = self.alloc(value, prev, Some(target))?;
        self.nodes[target as usize].prev = Some(slot);
        match prev {
            Some(prev) => self.nodes[prev as usize].next = Some(slot),
            None => self.head = Some(slot),
        }
        Ok(self.position(slot))
    }

    /// Insert `value` immediately after `p`.
    pub fn add_after(&mut self, p: Position, value: T) -> Result<Position, PositionError> {
        let target = self.validate(p)?;
        let next = self.nodes[target as usize].next;
        let slot = self.alloc(value, Some(target), next)?;
        self.nodes[target as usize].next = Some(slot);
        match next {
            Some(next) => self.nodes[next as usize].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        Ok(self.position(slot))
    }

    /// Replace the element at `p`, returning the old one.
    pub fn replace(&mut self, p: Position, value: T) -> Result<T, PositionError> {
        let current = self.get_mut(p)?;
        Ok(std::mem::replace(current, value))
    }

    /// Remove the element at `p` and return it.
    ///
    /// `p` is invalid afterwards. Callers walking the list must fetch
    /// `after(p)` before deleting `p`.
    pub fn delete(&mut self, p: Position) -> Result<T, PositionError> {
        let slot = self.validate(p)?;
        let node = &mut self.nodes[slot as usize];
        let value = node.value.take().ok_or(PositionError::Deleted(p))?;
        let (prev, next) = (node.prev.take(), node.next.take());

        match prev {
            Some(prev) => self.nodes[prev as usize].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next as usize].prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        Ok(value)
    }

    /// Lazy forward iterator over the live elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn position(&self, slot: u32) -> Position {
        Position { list: self.id, slot }
    }

    fn alloc(
        &mut self,
        value: T,
        prev: Option<u32>,
        next: Option<u32>,
    ) -> Result<u32, PositionError> {
        let slot = u32::try_from(self.nodes.len())
            .ok()
            .filter(|&slot| slot < self.max_slots)
            .ok_or(PositionError::Exhausted {
                slots: self.nodes.len(),
            })?;
        self.nodes.push(Node {
            value: Some(value),
            prev,
            next,
        });
        self.len += 1;
        Ok(slot)
    }

    fn validate(&self, p: Position) -> Result<u32, PositionError> {
        if p.list != self.id {
            return Err(PositionError::Foreign(p));
        }
        match self.nodes.get(p.slot as usize) {
            None => Err(PositionError::Foreign(p)),
            Some(node) if node.value.is_none() => Err(PositionError::Deleted(p)),
            Some(_) => Ok(p.slot),
        }
    }
}

impl<'a, T> IntoIterator for &'a PositionalList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward iterator returned by [`PositionalList::iter`].
pub struct Iter<'a, T> {
    list: &'a PositionalList<T>,
    cursor: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.list.nodes[self.cursor? as usize];
        self.cursor = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
