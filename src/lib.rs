//! Agent Interface Chain Registry
//!
//! An in-memory registry of named agents and ordered interface chains,
//! with cross-chain attachment between the two. The demo binary is in
//! `src/main.rs`.

pub mod command;
pub mod config;
pub mod demo;
pub mod error;
/// Agents, interfaces, chains and the registry
///
/// Links between agents and interfaces are stored as IDs and kept
/// consistent by the registry.
pub mod state;

pub use command::{CommandArgs, CommandHandler, CommandTable};
pub use error::RegistryError;
pub use state::{
    Agent, AgentId, AgentRegistry, AgentStatus, ChainId, Interface, InterfaceChain, InterfaceId,
    SharedRegistry,
};
