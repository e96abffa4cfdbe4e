//! Trailing-edge debounce for automatic regeneration.
//!
//! Each `schedule` supersedes every earlier one: when a superseded timer
//! wakes it reports `false` and its caller does nothing. Only timers are
//! superseded; whatever a winning timer started keeps running.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: Rc<Cell<u64>>,
}

impl Debouncer {
    /// Start a new quiet period that ends when `sleep` completes.
    ///
    /// The ticket is taken now, not when the returned future is first polled.
    pub fn schedule<S>(&self, sleep: S) -> impl Future<Output = bool>
    where
        S: Future<Output = ()>,
    {
        let ticket = self.generation.get().wrapping_add(1);
        self.generation.set(ticket);
        let generation = Rc::clone(&self.generation);
        async move {
            sleep.await;
            generation.get() == ticket
        }
    }
}
