use crate::{
    error::{EvalError, StackKind},
    interpreter::evaluator::core::EvalResult,
};

/// A stack that refuses to grow past a fixed capacity.
///
/// Pushing onto a full stack is reported as [`EvalError::StackOverflow`]
/// naming the stack, never silently truncated or reallocated.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items:    Vec<T>,
    capacity: usize,
    kind:     StackKind,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack holding at most `capacity` items.
    #[must_use]
    pub fn new(kind: StackKind, capacity: usize) -> Self {
        Self { items: Vec::new(),
               capacity,
               kind }
    }

    /// Pushes `item` on top of the stack.
    ///
    /// # Errors
    /// Returns [`EvalError::StackOverflow`] if the stack is already full.
    ///
    /// # Example
    /// ```
    /// use shuntcalc::{
    ///     error::{EvalError, StackKind},
    ///     interpreter::evaluator::stack::BoundedStack,
    /// };
    ///
    /// let mut stack = BoundedStack::new(StackKind::Operand, 1);
    /// assert!(stack.push(1.0).is_ok());
    /// assert!(matches!(stack.push(2.0),
    ///                  Err(EvalError::StackOverflow { which: StackKind::Operand })));
    /// ```
    pub fn push(&mut self, item: T) -> EvalResult<()> {
        if self.items.len() >= self.capacity {
            return Err(EvalError::StackOverflow { which: self.kind });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the top item.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of items currently on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when nothing is on the stack.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The most items the stack accepts before [`BoundedStack::push`] fails.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every item, keeping the capacity limit.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = BoundedStack::new(StackKind::Operand, 3);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn overflow_names_the_stack_and_keeps_contents() {
        let mut stack = BoundedStack::new(StackKind::Operator, 2);
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        assert!(matches!(stack.push('c'),
                         Err(EvalError::StackOverflow { which: StackKind::Operator })));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some(&'b'));
    }

    #[test]
    fn clear_frees_every_slot() {
        let mut stack = BoundedStack::new(StackKind::Operand, 1);
        stack.push(1.0).unwrap();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), 1);
        assert!(stack.push(2.0).is_ok());
    }
}
