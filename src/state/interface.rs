// Interface model
// A chain node holding a command table and at most one attached agent

use crate::command::{CommandHandler, CommandTable};
use crate::state::agent::AgentId;
use serde_json::Value;
use tracing::{debug, warn};

/// Unique identifier for an interface
pub type InterfaceId = String;

/// A single interface in a chain
///
/// Neighbour and agent links are stored as IDs. `next`/`prev` are only
/// written through [`Interface::link_to`], which the chain's append uses
/// after clearing whatever links the interface arrived with.
#[derive(Debug, Clone)]
pub struct Interface {
    /// Unique identifier for the interface
    id: InterfaceId,
    /// Display name of the interface
    pub name: String,
    /// Attached agent, if any
    agent: Option<AgentId>,
    /// Following interface in the chain
    next: Option<InterfaceId>,
    /// Preceding interface in the chain
    prev: Option<InterfaceId>,
    /// Command handlers for this interface
    commands: CommandTable,
}

impl Interface {
    /// Create a new unlinked interface with no agent and no commands
    pub fn new(id: impl Into<InterfaceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            agent: None,
            next: None,
            prev: None,
            commands: CommandTable::new(),
        }
    }

    /// The interface's ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// ID of the attached agent, if any
    pub fn agent(&self) -> Option<&str> {
        self.agent.as_deref()
    }

    /// ID of the next interface in the chain
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// ID of the previous interface in the chain
    pub fn prev(&self) -> Option<&str> {
        self.prev.as_deref()
    }

    /// Link this interface forward to `next`, and `next` back to this one
    ///
    /// Existing links on either side are overwritten unconditionally.
    pub fn link_to(&mut self, next: &mut Interface) {
        self.next = Some(next.id.clone());
        next.prev = Some(self.id.clone());
    }

    /// Insert or replace the handler for `name`
    pub fn register_command<H>(&mut self, name: impl Into<String>, handler: H)
    where
        H: CommandHandler + 'static,
    {
        let name = name.into();
        if self.commands.register(name.clone(), handler) {
            debug!(interface_id = %self.id, command = %name, "Replaced command handler");
        } else {
            debug!(interface_id = %self.id, command = %name, "Registered command");
        }
    }

    /// Execute a command on this interface
    /// Returns None if no handler is registered for `name`
    pub fn execute_command(&self, name: &str, args: &[Value]) -> Option<Value> {
        let result = self.commands.execute(name, args);
        match &result {
            Some(_) => debug!(interface_id = %self.id, command = %name, "Executed command"),
            None => warn!(interface_id = %self.id, command = %name, "Unknown command"),
        }
        result
    }

    /// The command table of this interface
    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    /// Drop neighbour and agent links carried over from elsewhere
    pub(crate) fn reset_links(&mut self) {
        self.next = None;
        self.prev = None;
        self.agent = None;
    }

    pub(crate) fn set_agent(&mut self, agent: Option<AgentId>) {
        self.agent = agent;
    }
}
