//! LIFO and FIFO containers used as search frontiers.
//!
//! Each container comes in two storage strategies that behave identically
//! except for their bound: the array variants hold at most a fixed number of
//! values and report [`CapacityError`] past it, the linked variants grow one
//! element at a time.

use crate::error::{CapacityError, Resource};

/// Last-in, first-out container.
pub trait Stack<T> {
    /// Push `v` on top.
    fn push(&mut self, v: T) -> Result<(), CapacityError>;
    /// Remove and return the top value.
    fn pop(&mut self) -> Option<T>;
    /// The top value, if any.
    fn peek(&self) -> Option<&T>;
    /// Mutable access to the top value.
    fn peek_mut(&mut self) -> Option<&mut T>;
    /// Number of stored values.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in, first-out container.
pub trait Queue<T> {
    /// Append `v` at the rear.
    fn enqueue(&mut self, v: T) -> Result<(), CapacityError>;
    /// Remove and return the front value.
    fn dequeue(&mut self) -> Option<T>;
    /// The front value, if any.
    fn peek(&self) -> Option<&T>;
    /// Number of stored values.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Array-backed
// ---------------------------------------------------------------------------

/// Stack over a buffer of fixed capacity.
#[derive(Debug, Clone)]
pub struct ArrayStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> ArrayStack<T> {
    /// Create a stack holding at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of values.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, v: T) -> Result<(), CapacityError> {
        if self.items.len() >= self.capacity {
            return Err(CapacityError::new(Resource::Frontier, self.capacity));
        }
        self.items.push(v);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Queue over a circular buffer of fixed capacity. Dequeued slots are reused.
#[derive(Debug, Clone)]
pub struct ArrayQueue<T> {
    slots: Vec<Option<T>>,
    front: usize,
    len: usize,
}

impl<T> ArrayQueue<T> {
    /// Create a queue holding at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            front: 0,
            len: 0,
        }
    }

    /// Maximum number of values.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Queue<T> for ArrayQueue<T> {
    fn enqueue(&mut self, v: T) -> Result<(), CapacityError> {
        let cap = self.slots.len();
        if self.len >= cap {
            return Err(CapacityError::new(Resource::Frontier, cap));
        }
        let rear = (self.front + self.len) % cap;
        self.slots[rear] = Some(v);
        self.len += 1;
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let v = self.slots[self.front].take();
        self.front = (self.front + 1) % self.slots.len();
        self.len -= 1;
        v
    }

    fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

// ---------------------------------------------------------------------------
// Linked
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct StackNode<T> {
    value: T,
    next: Option<Box<StackNode<T>>>,
}

/// Stack as a singly linked list of boxed nodes.
#[derive(Debug)]
pub struct LinkedStack<T> {
    top: Option<Box<StackNode<T>>>,
    len: usize,
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedStack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, v: T) -> Result<(), CapacityError> {
        let node = Box::new(StackNode {
            value: v,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.len += 1;
        Ok(())
    }

    fn pop(&mut self) -> Option<T> {
        let node = self.top.take()?;
        self.top = node.next;
        self.len -= 1;
        Some(node.value)
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|n| &n.value)
    }

    #[inline]
    fn peek_mut(&mut self) -> Option<&mut T> {
        self.top.as_mut().map(|n| &mut n.value)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the default drop recurses once per node.
        let mut cur = self.top.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

#[derive(Debug)]
struct QueueLink<T> {
    value: Option<T>,
    next: Option<usize>,
}

/// Queue as a singly linked list with front and rear links.
///
/// Links live in an arena addressed by index; dequeued links go on a free
/// list and are reused by later enqueues.
#[derive(Debug)]
pub struct LinkedQueue<T> {
    links: Vec<QueueLink<T>>,
    front: Option<usize>,
    rear: Option<usize>,
    free: Option<usize>,
    len: usize,
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            links: Vec::new(),
            front: None,
            rear: None,
            free: None,
            len: 0,
        }
    }

    fn alloc(&mut self, value: T) -> usize {
        match self.free {
            Some(i) => {
                let link = &mut self.links[i];
                self.free = link.next;
                link.value = Some(value);
                link.next = None;
                i
            }
            None => {
                self.links.push(QueueLink {
                    value: Some(value),
                    next: None,
                });
                self.links.len() - 1
            }
        }
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn enqueue(&mut self, v: T) -> Result<(), CapacityError> {
        let i = self.alloc(v);
        match self.rear {
            Some(r) => self.links[r].next = Some(i),
            None => self.front = Some(i),
        }
        self.rear = Some(i);
        self.len += 1;
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        let i = self.front?;
        let link = &mut self.links[i];
        let value = link.value.take();
        self.front = link.next;
        link.next = self.free;
        self.free = Some(i);
        if self.front.is_none() {
            self.rear = None;
        }
        self.len -= 1;
        value
    }

    fn peek(&self) -> Option<&T> {
        self.links[self.front?].value.as_ref()
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}
