//! # Battle Engine
//!
//! The turn engine for word battles. This crate interfaces with
//! `battle_rules`, resolves buffs and attacks one at a time through
//! caller-supplied hooks, and reports the terminal outcome when one word has
//! no living units left.
//!
//! ## Core Components
//!
//! - **engine**: The resumable turn/targeting state machine
//! - **hooks**: The animation hook contract and its completion tokens
//! - **scheduler**: The delay adapter that paces dispatches
//!
//! ## Design Philosophy
//!
//! - **Cooperative**: The engine suspends at every dispatched hook and only
//!   advances when the matching completion token is fed back in
//! - **Host-Driven**: The host owns the engine and pumps completions into it;
//!   there are no background tasks or ambient registries
//! - **Deterministic**: Delays are opaque to the engine, so the same words
//!   and hooks always produce the same battle

pub mod engine;
pub mod error;
pub mod events;
pub mod hooks;
pub mod scheduler;

pub use engine::*;
pub use error::*;
pub use events::*;
pub use hooks::*;
pub use scheduler::*;
