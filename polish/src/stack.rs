#![deny(warnings)]

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// LIFO container backed by a singly linked list. Push, pop and peek all
/// work on the head so every operation is O(1).
pub struct Stack<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack{head: None, len: 0}
    }

    pub fn push(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node{value, next}));
        self.len += 1;
    }

    /// Remove the top element. Popping an empty stack is a no-op.
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn len(&self) -> usize { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Iterate from the top of the stack down.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter{next: self.head.as_deref()}
    }
}

impl<T: Clone + Default> Stack<T> {
    // a copy of the top or the type's default when empty, eg: '\0' for char
    pub fn top(&self) -> T {
        self.peek().cloned().unwrap_or_default()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self { Stack::new() }
}

// unlink iteratively, the default recursive drop can blow the call stack
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

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

///////////////////////////////////////////////////////////////////////////////
