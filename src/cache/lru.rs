//! LRU Recency List Module
//!
//! Doubly-linked list stored in a slot arena. Nodes are addressed by
//! [`EntryId`] handles instead of pointers, so the prev/next links carry no
//! ownership and freed slots are recycled through a free list. Each slot
//! carries a generation that is bumped whenever its node is dropped, so a
//! handle to a removed node never resolves to a later occupant of the slot.
//!
//! ```text
//!   head (most recent)                         tail (least recent)
//!     │                                            │
//!     ▼                                            ▼
//!   [id 2] ⇄ [id 0] ⇄ [id 3] ⇄ ... ⇄ [id 1]
//!
//!   slots: Vec<Slot<T>>    free: Vec<usize>
//! ```

// == Entry Handle ==
/// Stable handle to a node in a [`RecencyList`].
///
/// A handle stays valid until the node is removed. After that it resolves
/// to nothing, even once its slot has been reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId {
    index: usize,
    generation: u32,
}

impl EntryId {
    /// Returns the arena slot this handle points at.
    pub fn index(self) -> usize {
        self.index
    }
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<EntryId>,
    next: Option<EntryId>,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// - Front (head) = Most recently used
/// - Back (tail) = Least recently used
#[derive(Debug)]
pub struct RecencyList<T> {
    /// Arena of slots, an empty `node` marks a free slot
    slots: Vec<Slot<T>>,
    /// Indices of free slots awaiting reuse
    free: Vec<usize>,
    head: Option<EntryId>,
    tail: Option<EntryId>,
    len: usize,
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Length ==
    /// Returns the number of linked nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    /// Returns true if no nodes are linked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of arena slots allocated so far, live or free.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    // == Accessors ==
    /// Returns the value behind `id`, or `None` if the handle is stale.
    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    /// Mutable access to the value behind `id`.
    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut T> {
        self.node_mut(id).map(|node| &mut node.value)
    }

    /// Returns the most recently used value.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Returns the handle of the most recently used node.
    pub fn front_id(&self) -> Option<EntryId> {
        self.head
    }

    /// Returns the least recently used value without removing it.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Returns the handle of the least recently used node.
    pub fn back_id(&self) -> Option<EntryId> {
        self.tail
    }

    // == Push Front ==
    /// Inserts a value at the head, making it the most recently used.
    pub fn push_front(&mut self, value: T) -> EntryId {
        let id = self.allocate(value);
        self.link_front(id);
        self.len += 1;
        id
    }

    // == Push Back ==
    /// Inserts a value at the tail, making it the least recently used.
    pub fn push_back(&mut self, value: T) -> EntryId {
        let id = self.allocate(value);
        self.link_back(id);
        self.len += 1;
        id
    }

    // == Remove ==
    /// Detaches a node from wherever it sits and frees its slot.
    ///
    /// Returns the stored value, or `None` if `id` is not live.
    pub fn remove(&mut self, id: EntryId) -> Option<T> {
        if self.node(id).is_none() {
            return None;
        }

        self.unlink(id);
        let slot = &mut self.slots[id.index];
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(node.value)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used value.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.remove(tail)
    }

    // == Move To Front ==
    /// Marks a node as most recently used.
    ///
    /// The node keeps its `EntryId`. Returns `false` if `id` is not live.
    pub fn move_to_front(&mut self, id: EntryId) -> bool {
        if self.node(id).is_none() {
            return false;
        }
        if self.head == Some(id) {
            return true;
        }

        self.unlink(id);
        self.link_front(id);
        true
    }

    // == Clear ==
    /// Drops every node and invalidates every outstanding handle.
    ///
    /// Slots are kept for reuse.
    pub fn clear(&mut self) {
        self.free.clear();
        for (idx, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(idx);
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Iteration ==
    /// Walks handles from head (most recent) to tail (least recent).
    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (EntryId, &T)> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let id = cursor?;
            let node = self.node(id)?;
            cursor = node.next;
            Some((id, &node.value))
        })
    }

    /// Verifies link structure: endpoints, back-links and the running count.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> Result<(), String> {
        if let Some(head) = self.head {
            if self.node(head).and_then(|n| n.prev).is_some() {
                return Err("head has a predecessor".into());
            }
        }
        if let Some(tail) = self.tail {
            if self.node(tail).and_then(|n| n.next).is_some() {
                return Err("tail has a successor".into());
            }
        }

        let mut count = 0;
        let mut prev: Option<EntryId> = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self
                .node(id)
                .ok_or_else(|| format!("link to dead slot {}", id.index))?;
            if node.prev != prev {
                return Err(format!("slot {} has a stale back-link", id.index));
            }
            count += 1;
            if count > self.slots.len() {
                return Err("cycle detected".into());
            }
            prev = Some(id);
            cursor = node.next;
        }

        if prev != self.tail {
            return Err("walk did not end at tail".into());
        }
        if count != self.len {
            return Err(format!("walked {} nodes but len is {}", count, self.len));
        }
        if self.slots.len() != self.len + self.free.len() {
            return Err("free list out of sync with arena".into());
        }
        Ok(())
    }

    // == Internal Helpers ==
    fn node(&self, id: EntryId) -> Option<&Node<T>> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: EntryId) -> Option<&mut Node<T>> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Places a detached node in a free slot, or grows the arena.
    fn allocate(&mut self, value: T) -> EntryId {
        let node = Node {
            value,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                EntryId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                EntryId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    /// Links a detached node in at the head.
    fn link_front(&mut self, id: EntryId) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head) => {
                if let Some(node) = self.node_mut(head) {
                    node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    /// Links a detached node in at the tail.
    fn link_back(&mut self, id: EntryId) {
        let old_tail = self.tail;
        if let Some(node) = self.node_mut(id) {
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(tail) => {
                if let Some(node) = self.node_mut(tail) {
                    node.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Splices a node out, repairing neighbours or the endpoints.
    fn unlink(&mut self, id: EntryId) {
        let (prev, next) = match self.node_mut(id) {
            Some(node) => (node.prev.take(), node.next.take()),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}
