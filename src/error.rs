//! Error types for registry operations
//!
//! Most registry operations report failure softly (`bool` or `Option`).
//! The `try_*` and strict variants return a [`RegistryError`] that says
//! which lookup or uniqueness check failed.

use crate::state::{AgentId, ChainId, InterfaceId};
use thiserror::Error;

/// Errors reported by the strict registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No agent is registered under the given ID
    #[error("Agent not found: {0}")]
    AgentNotFound(AgentId),

    /// No chain owned by the registry contains an interface with the given ID
    #[error("Interface not found: {0}")]
    InterfaceNotFound(InterfaceId),

    /// The registry owns no chain with the given ID
    #[error("Chain not found: {0}")]
    ChainNotFound(ChainId),

    /// An agent with the given ID is already registered
    #[error("Agent already registered: {0}")]
    DuplicateAgent(AgentId),

    /// An interface with the given ID already exists in one of the chains
    #[error("Interface already exists: {0}")]
    DuplicateInterface(InterfaceId),
}
