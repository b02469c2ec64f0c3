// Agent model
// A named entity with a status, free-form metadata and at most one interface

use crate::state::interface::InterfaceId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Unique identifier for an agent
pub type AgentId = String;

/// Caller-defined agent metadata, no schema enforced
pub type Metadata = BTreeMap<String, Value>;

/// Agent status
///
/// Only `Idle` and `Active` mean anything to the registry. Any other
/// status string set by a caller is kept verbatim in `Other`. Serializes as
/// the plain status string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AgentStatus {
    /// Agent is waiting for work
    #[default]
    Idle,
    /// Agent is currently active
    Active,
    /// Caller-supplied status outside the two known values
    Other(String),
}

impl AgentStatus {
    /// Status as a plain string ("idle", "active" or the custom value)
    pub fn as_str(&self) -> &str {
        match self {
            AgentStatus::Idle => "idle",
            AgentStatus::Active => "active",
            AgentStatus::Other(status) => status,
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for AgentStatus {
    fn from(status: &str) -> Self {
        match status {
            "idle" => AgentStatus::Idle,
            "active" => AgentStatus::Active,
            other => AgentStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for AgentStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "idle" => AgentStatus::Idle,
            "active" => AgentStatus::Active,
            _ => AgentStatus::Other(status),
        }
    }
}

impl From<AgentStatus> for String {
    fn from(status: AgentStatus) -> Self {
        match status {
            AgentStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

/// Agent structure
/// The ID is fixed at creation; the interface link is managed by the registry
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    /// Unique identifier for the agent
    id: AgentId,
    /// Display name of the agent
    pub name: String,
    /// Current status of the agent
    status: AgentStatus,
    /// Free-form metadata
    pub metadata: Metadata,
    /// ID of the interface this agent is attached to, if any
    interface: Option<InterfaceId>,
}

impl Agent {
    /// Create a new idle agent with the given ID and name
    pub fn new(id: impl Into<AgentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: AgentStatus::Idle,
            metadata: Metadata::new(),
            interface: None,
        }
    }

    /// Set the initial status (builder style)
    pub fn with_status(mut self, status: impl Into<AgentStatus>) -> Self {
        self.status = status.into();
        self
    }

    /// Add a metadata entry (builder style)
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The agent's ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The agent's current status
    pub fn status(&self) -> &AgentStatus {
        &self.status
    }

    /// Whether the agent is active
    pub fn is_active(&self) -> bool {
        self.status == AgentStatus::Active
    }

    /// ID of the attached interface, if any
    pub fn interface(&self) -> Option<&str> {
        self.interface.as_deref()
    }

    /// Set status to active
    pub fn activate(&mut self) {
        self.status = AgentStatus::Active;
    }

    /// Set status to idle
    pub fn deactivate(&mut self) {
        self.status = AgentStatus::Idle;
    }

    /// Set an arbitrary status, no validation
    pub fn set_status(&mut self, status: impl Into<AgentStatus>) {
        self.status = status.into();
    }

    pub(crate) fn set_interface(&mut self, interface: Option<InterfaceId>) {
        self.interface = interface;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_agent_new() {
        let agent = Agent::new("test1", "TestAgent");
        assert_eq!(agent.id(), "test1");
        assert_eq!(agent.name, "TestAgent");
        assert_eq!(agent.status(), &AgentStatus::Idle);
        assert!(agent.interface().is_none());
        assert!(agent.metadata.is_empty());
    }

    #[test]
    fn test_activate_then_deactivate() {
        let mut agent = Agent::new("test1", "TestAgent").with_metadata("type", "processor");
        let before = agent.clone();

        agent.activate();
        assert!(agent.is_active());
        agent.activate();
        assert!(agent.is_active());

        agent.deactivate();
        assert_eq!(agent.status(), &AgentStatus::Idle);
        assert_eq!(agent, before);
    }

    #[test]
    fn test_set_status_accepts_any_string() {
        let mut agent = Agent::new("a1", "Agent");
        agent.set_status("active");
        assert_eq!(agent.status(), &AgentStatus::Active);

        agent.set_status("paused");
        assert_eq!(agent.status(), &AgentStatus::Other("paused".to_string()));
        assert_eq!(agent.status().to_string(), "paused");

        agent.set_status(String::from("idle"));
        assert_eq!(agent.status(), &AgentStatus::Idle);
    }

    #[test]
    fn test_agent_metadata() {
        let agent = Agent::new("meta1", "MetadataAgent")
            .with_metadata("type", "processor")
            .with_metadata("priority", "high")
            .with_metadata("version", "1.0")
            .with_metadata("retries", 3);

        assert_eq!(agent.metadata["type"], json!("processor"));
        assert_eq!(agent.metadata["priority"], json!("high"));
        assert_eq!(agent.metadata["version"], json!("1.0"));
        assert_eq!(agent.metadata["retries"], json!(3));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_value(AgentStatus::Idle).unwrap(), json!("idle"));
        assert_eq!(
            serde_json::to_value(AgentStatus::Active).unwrap(),
            json!("active")
        );
    }

    #[test]
    fn test_custom_status_round_trip() {
        let paused = AgentStatus::Other("paused".to_string());
        assert_eq!(serde_json::to_value(&paused).unwrap(), json!("paused"));
        assert_eq!(
            serde_json::from_value::<AgentStatus>(json!("paused")).unwrap(),
            paused
        );
        assert_eq!(
            serde_json::from_value::<AgentStatus>(json!("active")).unwrap(),
            AgentStatus::Active
        );
    }

    #[test]
    fn test_with_status() {
        let agent = Agent::new("a1", "Agent").with_status("active");
        assert!(agent.is_active());

        let agent = Agent::new("a2", "Agent").with_status(AgentStatus::Other("booting".to_string()));
        assert_eq!(agent.status().as_str(), "booting");
    }
}
