//! Ordered container with an embedded cursor
//!
//! The cursor either selects exactly one item or sits at the "none"
//! position. Walking off either end moves it to none, and reads at none
//! return the default item fixed at construction.
//!
//! Items are doubly-linked nodes kept in a [`Slab`]; links and the cursor
//! are slab keys, so insertion and deletion reuse freed slots.

use std::fmt;
use std::iter::FusedIterator;

use slab::Slab;

/// A list node with its neighbour links
#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A list of items with a current item that may also be "none"
///
/// Every cursor operation runs in constant time. Operations that need a
/// selected item report a missing selection with `false` instead of failing.
///
/// # Example
/// ```
/// use cursor_list::list::CursorList;
///
/// let mut xs = CursorList::new(-1);
/// xs.insert_before(1);
/// xs.insert_before(3);
/// assert!(xs.is_none());
///
/// xs.move_to_first();
/// xs.insert_after(2);
/// assert_eq!(*xs.get(), 2);
///
/// assert!(xs.move_after());
/// assert!(xs.move_after());
/// assert!(xs.is_none());
/// assert_eq!(*xs.get(), -1);
/// assert_eq!(xs.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct CursorList<T> {
    nodes: Slab<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    cursor: Option<usize>,
    default_item: T,
}

impl<T> CursorList<T> {
    /// Create an empty list with no item selected
    pub fn new(default_item: T) -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            cursor: None,
            default_item,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The value returned by [`get`](Self::get) when no item is selected
    pub fn default_item(&self) -> &T {
        &self.default_item
    }

    /// Select the first item. Does nothing on an empty list.
    pub fn move_to_first(&mut self) {
        self.cursor = self.head;
    }

    /// Select the last item. Does nothing on an empty list.
    pub fn move_to_last(&mut self) {
        self.cursor = self.tail;
    }

    /// True when no item is selected
    pub fn is_none(&self) -> bool {
        self.cursor.is_none()
    }

    /// Move the cursor one item towards the end
    ///
    /// From the last item the cursor moves to none. Returns `false` and does
    /// nothing if no item was selected.
    pub fn move_after(&mut self) -> bool {
        match self.cursor {
            Some(id) => {
                self.cursor = self.nodes[id].next;
                true
            }
            None => false,
        }
    }

    /// Move the cursor one item towards the front
    ///
    /// From the first item the cursor moves to none. Returns `false` and does
    /// nothing if no item was selected.
    pub fn move_before(&mut self) -> bool {
        match self.cursor {
            Some(id) => {
                self.cursor = self.nodes[id].prev;
                true
            }
            None => false,
        }
    }

    /// The current item, or the default item when none is selected
    pub fn get(&self) -> &T {
        match self.cursor {
            Some(id) => &self.nodes[id].value,
            None => &self.default_item,
        }
    }

    /// Mutable access to the current item
    ///
    /// Returns `None` when no item is selected; the default item is never
    /// handed out mutably.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        let id = self.cursor?;
        Some(&mut self.nodes[id].value)
    }

    /// Overwrite the current item and return `true`
    ///
    /// With no item selected `x` is dropped and `false` is returned.
    pub fn set(&mut self, x: T) -> bool {
        match self.get_mut() {
            Some(current) => {
                *current = x;
                true
            }
            None => false,
        }
    }

    /// Insert `x` after the current item and select it
    ///
    /// With no item selected, `x` becomes the first item and the cursor
    /// stays at none.
    pub fn insert_after(&mut self, x: T) {
        match self.cursor {
            Some(at) => {
                let next = self.nodes[at].next;
                self.cursor = Some(self.link(x, Some(at), next));
            }
            None => {
                self.link(x, None, self.head);
            }
        }
    }

    /// Insert `x` before the current item and select it
    ///
    /// With no item selected, `x` becomes the last item and the cursor
    /// stays at none.
    pub fn insert_before(&mut self, x: T) {
        match self.cursor {
            Some(at) => {
                let prev = self.nodes[at].prev;
                self.cursor = Some(self.link(x, prev, Some(at)));
            }
            None => {
                self.link(x, self.tail, None);
            }
        }
    }

    /// Delete the current item and select its successor
    ///
    /// Deleting the last item leaves no item selected. Returns `false` and
    /// does nothing if no item was selected.
    pub fn delete_to_after(&mut self) -> bool {
        match self.cursor {
            Some(id) => {
                self.cursor = self.unlink(id).next;
                true
            }
            None => false,
        }
    }

    /// Delete the current item and select its predecessor
    ///
    /// Deleting the first item leaves no item selected. Returns `false` and
    /// does nothing if no item was selected.
    pub fn delete_to_before(&mut self) -> bool {
        match self.cursor {
            Some(id) => {
                self.cursor = self.unlink(id).prev;
                true
            }
            None => false,
        }
    }

    /// Drop every item; the cursor moves to none
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.cursor = None;
    }

    /// Iterate over the items front to back without touching the cursor
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.len(),
        }
    }

    /// Allocate a node between `prev` and `next`, which must be adjacent
    fn link(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let id = self.nodes.insert(Node { value, prev, next });
        match prev {
            Some(p) => self.nodes[p].next = Some(id),
            None => self.head = Some(id),
        }
        match next {
            Some(n) => self.nodes[n].prev = Some(id),
            None => self.tail = Some(id),
        }
        tracing::trace!(len = self.len(), "inserted list item");
        id
    }

    /// Detach a node and return it with its former neighbour links
    fn unlink(&mut self, id: usize) -> Node<T> {
        let node = self.nodes.remove(id);
        match node.prev {
            Some(p) => self.nodes[p].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.nodes[n].prev = node.prev,
            None => self.tail = node.prev,
        }
        tracing::trace!(len = self.len(), "deleted list item");
        node
    }
}

impl<T: Default> Default for CursorList<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Extend<T> for CursorList<T> {
    /// Append items at the end; the cursor does not move
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.link(value, self.tail, None);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.cursor.map(|id| &self.nodes[id].value);
        f.debug_struct("CursorList")
            .field("items", &DebugItems(self))
            .field("current", &current)
            .field("default_item", &self.default_item)
            .finish()
    }
}

struct DebugItems<'a, T>(&'a CursorList<T>);

impl<T: fmt::Debug> fmt::Debug for DebugItems<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a CursorList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Front-to-back iterator over a [`CursorList`]
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.next?;
        let node = &self.nodes[id];
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
