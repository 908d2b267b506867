//! Singly linked list
//!
//! A plain chain of boxed nodes, independent of the slot buffer. Head
//! operations are O(1); `size` and `push` walk the chain.

use std::fmt;

use svec_core::SparseSequence;

/// One link of a [`List`]
pub struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Value held by this node
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable value held by this node
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Following node, `None` at the tail
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

/// Singly linked list of owned values
pub struct List<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> List<T> {
    /// Create an empty list
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Returns `true` if the list has no nodes
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of nodes, O(n)
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// First node, to walk the chain with [`Node::next`]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Value of the first node
    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Mutable value of the first node
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Prepend `value`, O(1)
    pub fn unshift(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        node.next = self.head.take();
        self.head = Some(node);
    }

    /// Remove the first node and return its value, O(1)
    pub fn shift(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        Some(value)
    }

    /// Append `value` after the tail, O(n)
    ///
    /// Returns the new tail value.
    pub fn push(&mut self, value: T) -> &mut T {
        let mut tail = &mut self.head;
        while let Some(node) = tail {
            tail = &mut node.next;
        }

        let node = tail.insert(Box::new(Node::new(value)));
        &mut node.value
    }

    /// Drop every node
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }

    /// Iterate over the values from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Iterative so long chains cannot overflow the stack.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        let mut tail = &mut list.head;
        for value in iter {
            let node = tail.insert(Box::new(Node::new(value)));
            tail = &mut node.next;
        }
        list
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`List`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> SparseSequence for List<T> {
    type Element = T;

    fn get_slot(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    fn size(&self) -> usize {
        List::size(self)
    }

    // Nodes always hold a value
    fn occupied(&self) -> usize {
        List::size(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let list: List<u8> = List::new();
        assert!(list.is_empty());
        assert_eq!(list.size(), 0);
        assert_eq!(list.peek(), None);
        assert!(list.head().is_none());
    }

    #[test]
    fn test_unshift_shift() {
        let mut list = List::new();
        list.unshift(1);
        list.unshift(2);
        list.unshift(3);

        assert_eq!(list.size(), 3);
        assert_eq!(list.peek(), Some(&3));

        assert_eq!(list.shift(), Some(3));
        assert_eq!(list.shift(), Some(2));
        assert_eq!(list.shift(), Some(1));
        assert_eq!(list.shift(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_push_appends_at_tail() {
        let mut list = List::new();
        *list.push(1) += 10;
        list.push(2);
        list.unshift(0);

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 11, 2]);
    }

    #[test]
    fn test_walk_with_next() {
        let list: List<char> = "abc".chars().collect();

        let head = list.head().unwrap();
        assert_eq!(head.value(), &'a');
        let second = head.next().unwrap();
        assert_eq!(second.value(), &'b');
        let third = second.next().unwrap();
        assert_eq!(third.value(), &'c');
        assert!(third.next().is_none());
    }

    #[test]
    fn test_peek_mut() {
        let mut list: List<u8> = [5, 6].into_iter().collect();
        if let Some(value) = list.peek_mut() {
            *value = 50;
        }
        assert_eq!(list.shift(), Some(50));
    }

    #[test]
    fn test_clear() {
        let mut list: List<u8> = (0..10).collect();
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_long_chain_drops() {
        let list: List<u32> = (0..200_000).collect();
        assert_eq!(list.size(), 200_000);
        drop(list);
    }

    #[test]
    fn test_clone_eq_debug() {
        let list: List<u8> = [1, 2].into_iter().collect();
        let copy = list.clone();
        assert_eq!(list, copy);
        assert_eq!(format!("{copy:?}"), "[1, 2]");
    }

    #[test]
    fn test_sequence_trait() {
        let list: List<&str> = ["x", "y"].into_iter().collect();
        assert_eq!(list.get_slot(1), Some(&"y"));
        assert_eq!(list.get_slot(2), None);
        assert_eq!(SparseSequence::occupied(&list), 2);
        assert_eq!(list.density(), 1.0);
    }
}
