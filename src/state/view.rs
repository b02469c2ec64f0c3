//! Read-only views of the registry
//!
//! Presentation layers consume these instead of the live structures.
//! Partner names are resolved at snapshot time, so a view never holds a
//! reference back into the registry.

use crate::state::agent::{AgentId, Metadata};
use crate::state::chain::ChainId;
use crate::state::interface::InterfaceId;
use serde::Serialize;

/// Snapshot of one agent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentView {
    /// Agent ID
    pub id: AgentId,
    /// Display name
    pub name: String,
    /// Status string ("idle", "active" or a custom value)
    pub status: String,
    /// ID of the attached interface
    pub interface_id: Option<InterfaceId>,
    /// Name of the attached interface
    pub interface_name: Option<String>,
    /// Agent metadata
    pub metadata: Metadata,
}

/// Snapshot of one interface within a chain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceView {
    /// Interface ID
    pub id: InterfaceId,
    /// Display name
    pub name: String,
    /// ID of the attached agent
    pub agent_id: Option<AgentId>,
    /// Name of the attached agent
    pub agent_name: Option<String>,
    /// Previous interface ID
    pub prev: Option<InterfaceId>,
    /// Next interface ID
    pub next: Option<InterfaceId>,
    /// Registered command names
    pub commands: Vec<String>,
}

/// Snapshot of one chain, interfaces in chain order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainView {
    /// Chain ID
    pub id: ChainId,
    /// Whether this is the registry's active chain
    pub active: bool,
    /// Interfaces in append order
    pub interfaces: Vec<InterfaceView>,
}

/// Registry-wide counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RegistryStats {
    /// Registered agents
    pub total_agents: usize,
    /// Agents with status `active`
    pub active_agents: usize,
    /// Agents with status `idle`
    pub idle_agents: usize,
    /// Chains owned by the registry
    pub total_chains: usize,
    /// Interfaces across all chains
    pub total_interfaces: usize,
    /// Agents attached to an interface
    pub attached_agents: usize,
}
