//! Shared mutable state cells
//!
//! The sequencer, the contact form and the asset watcher all mutate a single
//! piece of state from deferred callbacks. `StateCell` abstracts over where that
//! state lives: a reactive `RwSignal` inside components, or a plain
//! `Rc<RefCell<_>>` in tests and non-reactive callers.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

/// A cloneable handle to a piece of mutable state.
///
/// Both methods return `None` when the underlying state no longer exists
/// (for example a signal disposed together with its component), which turns
/// late callbacks into no-ops.
pub trait StateCell<T>: Clone + 'static {
    /// Mutate the state in place
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Read the state without subscribing to it
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T: 'static> StateCell<T> for Rc<RefCell<T>> {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;

    #[test]
    fn test_rc_cell_mutate_and_peek() {
        let cell = Rc::new(RefCell::new(1u32));
        let handle = cell.clone();

        assert_eq!(handle.mutate(|v| {
            *v += 41;
            *v
        }), Some(42));
        assert_eq!(cell.peek(|v| *v), Some(42));
    }

    #[test]
    fn test_signal_cell_mutate_and_peek() {
        let owner = Owner::new();
        owner.with(|| {
            let signal = RwSignal::new(String::from("idle"));

            assert_eq!(signal.mutate(|s| {
                s.push_str("-running");
                s.len()
            }), Some(12));
            assert_eq!(signal.peek(|s| s.clone()), Some("idle-running".to_string()));
        });
    }

    #[test]
    fn test_disposed_signal_is_a_no_op() {
        let owner = Owner::new();
        owner.with(|| {
            let signal = RwSignal::new(0u8);
            assert_eq!(signal.mutate(|v| {
                *v += 3;
                *v
            }), Some(3));

            signal.dispose();

            assert_eq!(signal.mutate(|v| *v = 1), None);
            assert_eq!(signal.peek(|v| *v), None);
        });
    }
}
