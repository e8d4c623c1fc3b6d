//! Single-use completion tokens.

/// Proof that a dispatched action may now take effect.
///
/// The engine issues exactly one token per dispatched action (or per
/// scheduled pause) and the host feeds it back through
/// [`CombatEngine::resolve`](super::CombatEngine::resolve). Tokens are
/// deliberately neither `Clone` nor `Copy`: resolving one consumes it, so an
/// action can complete at most once. Tokens outlived by their action - after
/// `stop()`, or after the battle finished - are stale and ignored.
#[derive(Debug)]
pub struct Completion {
    pub(crate) seq: u64,
}
