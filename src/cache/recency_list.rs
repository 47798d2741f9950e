//! Arena-backed doubly linked list used for LRU recency ordering.
//!
//! Nodes live in a `Vec` of slots and link to each other by [`SlotId`]
//! instead of pointers, so handles stay valid across pushes and moves and
//! no `unsafe` is needed.
//!
//! ```text
//!   slots: Vec<Option<Node<T>>>      free: Vec<usize>
//!   ┌────┬──────────────────────────────────────────┐
//!   │ 0  │ { value: A, prev: None,    next: Some(2) }│
//!   │ 1  │ None (free)                               │
//!   │ 2  │ { value: B, prev: Some(0), next: None }   │
//!   └────┴──────────────────────────────────────────┘
//!
//!   head ─► [0] ◄──► [2] ◄── tail
//! ```
//!
//! `push_front`, `pop_back`, `remove` and `move_to_front` are all O(1).

/// Stable handle to a node in a [`RecencyList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Doubly linked list with index-stable handles. Front is most recent.
#[derive(Debug)]
pub struct RecencyList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl<T> RecencyList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.node(id)).map(|n| &n.value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.node(id)).map(|n| &n.value)
    }

    /// Insert `value` at the front and return its handle.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let node = Node {
            value,
            prev: None,
            next: self.head,
        };
        let id = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                SlotId(idx)
            }
            None => {
                self.slots.push(Some(node));
                SlotId(self.slots.len() - 1)
            }
        };

        match self.head {
            Some(old_head) => {
                if let Some(n) = self.node_mut(old_head) {
                    n.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    /// Remove and return the back (least recent) value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Remove the node `id` and return its value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.detach(id)?;
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.value)
    }

    /// Move an existing node to the front; returns `false` if `id` is stale.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if self.node(id).is_none() {
            return false;
        }
        if self.head == Some(id) {
            return true;
        }
        self.detach(id);

        let old_head = self.head;
        if let Some(n) = self.node_mut(id) {
            n.prev = None;
            n.next = old_head;
        }
        match old_head {
            Some(h) => {
                if let Some(n) = self.node_mut(h) {
                    n.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        true
    }

    /// Iterate values from front (most recent) to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut current = self.head;
        std::iter::from_fn(move || {
            let node = self.node(current?)?;
            current = node.next;
            Some(&node.value)
        })
    }

    fn node(&self, id: SlotId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: SlotId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.node(id)?;
            (node.prev, node.next)
        };

        match prev {
            Some(p) => {
                if let Some(n) = self.node_mut(p) {
                    n.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(nx) => {
                if let Some(n) = self.node_mut(nx) {
                    n.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(n) = self.node_mut(id) {
            n.prev = None;
            n.next = None;
        }
        Some(())
    }

    /// Walk the links and assert they agree with `len`, `head` and `tail`.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none() && self.tail.is_none());
            assert_eq!(self.len, 0);
            return;
        }

        let mut count = 0usize;
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.node(id).expect("linked node missing");
            assert_eq!(node.prev, prev);
            if node.next.is_none() {
                assert_eq!(self.tail, Some(id));
            }
            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len, "cycle in recency list");
        }
        assert_eq!(count, self.len);
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}
