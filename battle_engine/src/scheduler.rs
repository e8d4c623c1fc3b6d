//! Delay adapters: how the engine paces actions without owning a clock.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::engine::Completion;

/// Caller-supplied delay adapter.
///
/// Whenever the engine wants to pause - between two dispatched actions, or
/// before the next turn - it hands the scheduler a completion token. The
/// adapter must arrange for the token to reach
/// [`CombatEngine::resolve`](crate::engine::CombatEngine::resolve) after
/// roughly `delay_ms` milliseconds: via a timer, an event-loop tick, or
/// immediately for deterministic runs.
pub trait Scheduler {
    fn delay(&mut self, completion: Completion, delay_ms: u64);
}

/// A shared, single-threaded queue of completion tokens waiting to be fed
/// back into the engine.
///
/// Hosts clone a handle into their hooks and scheduler, then drain the queue
/// from their main loop and pump each token into the engine.
#[derive(Debug, Clone, Default)]
pub struct CompletionQueue {
    inner: Rc<RefCell<VecDeque<Completion>>>,
}

impl CompletionQueue {
    /// Create a new empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a token for later resolution.
    pub fn push(&self, completion: Completion) {
        self.inner.borrow_mut().push_back(completion);
    }

    /// Take the oldest queued token, if any.
    pub fn pop(&self) -> Option<Completion> {
        self.inner.borrow_mut().pop_front()
    }

    /// Whether the queue holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Number of queued tokens.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }
}

/// A scheduler that ignores delays and queues every token for immediate
/// resolution.
///
/// Draining the queue and feeding the tokens straight back makes battles run
/// fully synchronously, which is how the engine's own tests drive it.
#[derive(Debug, Clone, Default)]
pub struct ImmediateScheduler {
    queue: CompletionQueue,
}

impl ImmediateScheduler {
    /// Create a scheduler with its own fresh queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scheduler delivering into an existing queue.
    pub fn with_queue(queue: CompletionQueue) -> Self {
        Self { queue }
    }

    /// Handle to the queue the scheduler delivers into.
    pub fn queue(&self) -> CompletionQueue {
        self.queue.clone()
    }
}

impl Scheduler for ImmediateScheduler {
    fn delay(&mut self, completion: Completion, _delay_ms: u64) {
        self.queue.push(completion);
    }
}
