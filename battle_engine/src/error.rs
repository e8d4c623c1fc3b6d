//! Protocol errors between the engine and its host.

use thiserror::Error;

/// Violations of the completion protocol.
///
/// The engine silently ignores stale completions by default. With
/// [`BattleConfig::strict`](crate::engine::BattleConfig) set, they are
/// reported as errors instead so misbehaving hosts surface during
/// development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A completion arrived that does not match the action in flight.
    #[error("stale completion: no matching action is in flight")]
    StaleCompletion,

    /// A completion arrived after the battle already finished.
    #[error("completion received after the battle finished")]
    BattleFinished,
}
