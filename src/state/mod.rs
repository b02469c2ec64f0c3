// State management module
// Agents, interfaces, chains and the registry that links them

/// Agent model and status
pub mod agent;
/// Ordered interface chains
pub mod chain;
/// Interface model and command access
pub mod interface;
/// Agent registry and the attachment protocol
pub mod registry;
pub mod view;

pub use agent::{Agent, AgentId, AgentStatus, Metadata};
pub use chain::{ChainId, InterfaceChain};
pub use interface::{Interface, InterfaceId};
pub use registry::{AgentRegistry, SharedRegistry};
pub use view::{AgentView, ChainView, InterfaceView, RegistryStats};
