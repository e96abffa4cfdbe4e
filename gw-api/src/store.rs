//! Where a request flow keeps its state while the request is in flight.
//!
//! Flows borrow the state only inside `update`, never across an `.await`,
//! so the same flow drives a plain `&mut T` in tests, a `RefCell` shared by
//! concurrent futures, and the UI's signals.

use std::cell::RefCell;

pub trait Store<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> Store<T> for &mut T {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut **self)
    }
}

impl<T> Store<T> for &RefCell<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}
