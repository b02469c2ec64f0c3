// Agent registry
// Owns all agents and interface chains, and attaches one to the other

use crate::error::RegistryError;
use crate::state::agent::{Agent, AgentId, AgentStatus};
use crate::state::chain::{ChainId, InterfaceChain};
use crate::state::interface::Interface;
use crate::state::view::{AgentView, ChainView, InterfaceView, RegistryStats};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Registry behind a single lock, for callers that share it across threads
pub type SharedRegistry = Arc<Mutex<AgentRegistry>>;

/// Registry of agents and interface chains
///
/// Agents are keyed by ID and listed in registration order. Chains are kept
/// in creation order and the first one created becomes the active chain.
/// Interfaces are stored per chain but attached by a global ID, so only the
/// registry can resolve an interface ID to the chain that owns it.
#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    /// Registry of all agents (id -> Agent)
    agents: HashMap<AgentId, Agent>,
    /// Agent IDs in registration order
    order: Vec<AgentId>,
    /// Chains in creation order, indexed by `ChainId`
    chains: Vec<InterfaceChain>,
    /// First chain ever created
    active_chain: Option<ChainId>,
}

impl AgentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the registry in a shared, lockable handle
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(Mutex::new(self))
    }

    /// Register an agent, replacing any agent with the same ID
    ///
    /// A replaced agent keeps its position in the listing. Registered agents
    /// always start detached; interfaces attached to a replaced agent are
    /// released. Returns the replaced agent, if any.
    pub fn register_agent(&mut self, mut agent: Agent) -> Option<Agent> {
        agent.set_interface(None);
        let id = agent.id().to_string();

        let previous = self.agents.insert(id.clone(), agent);
        match previous {
            Some(_) => {
                self.release_interfaces_of(&id);
                info!(agent_id = %id, "Replaced agent");
            }
            None => {
                self.order.push(id.clone());
                info!(agent_id = %id, "Registered agent");
            }
        }
        previous
    }

    /// Register an agent, rejecting an ID that is already taken
    pub fn add_agent(&mut self, agent: Agent) -> Result<(), RegistryError> {
        if self.agents.contains_key(agent.id()) {
            warn!(agent_id = %agent.id(), "Agent already registered");
            return Err(RegistryError::DuplicateAgent(agent.id().to_string()));
        }
        self.register_agent(agent);
        Ok(())
    }

    /// Get an agent by ID
    pub fn get_agent(&self, id: &str) -> Option<&Agent> {
        self.agents.get(id)
    }

    /// Get a mutable reference to an agent by ID
    pub fn get_agent_mut(&mut self, id: &str) -> Option<&mut Agent> {
        self.agents.get_mut(id)
    }

    /// All agents in registration order
    pub fn list_agents(&self) -> Vec<&Agent> {
        self.order
            .iter()
            .filter_map(|id| self.agents.get(id))
            .collect()
    }

    /// Number of registered agents
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Activate an agent
    /// Returns true if the agent was found
    pub fn activate_agent(&mut self, id: &str) -> bool {
        self.update_agent_status(id, AgentStatus::Active)
    }

    /// Deactivate an agent
    /// Returns true if the agent was found
    pub fn deactivate_agent(&mut self, id: &str) -> bool {
        self.update_agent_status(id, AgentStatus::Idle)
    }

    /// Update an agent's status
    /// Returns true if the agent was found and updated
    pub fn update_agent_status(&mut self, id: &str, status: impl Into<AgentStatus>) -> bool {
        if let Some(agent) = self.agents.get_mut(id) {
            agent.set_status(status);
            debug!(agent_id = %id, status = %agent.status(), "Updated agent status");
            true
        } else {
            false
        }
    }

    /// Deactivate every agent if more than half are active, otherwise
    /// activate every agent
    pub fn toggle_all_agents(&mut self) {
        let active = self.agents.values().filter(|a| a.is_active()).count();
        let deactivate = active * 2 > self.agents.len();

        for agent in self.agents.values_mut() {
            if deactivate {
                agent.deactivate();
            } else {
                agent.activate();
            }
        }
        info!(
            agents = self.agents.len(),
            active = if deactivate { 0 } else { self.agents.len() },
            "Toggled all agents"
        );
    }

    /// Create a new empty chain
    ///
    /// The first chain ever created becomes the active chain.
    pub fn create_chain(&mut self) -> &mut InterfaceChain {
        let id = ChainId(self.chains.len());
        self.chains.push(InterfaceChain::new(id));
        if self.active_chain.is_none() {
            self.active_chain = Some(id);
        }
        info!(chain_id = %id, "Created chain");
        &mut self.chains[id.0]
    }

    /// All chains in creation order
    pub fn chains(&self) -> &[InterfaceChain] {
        &self.chains
    }

    /// Get a chain by ID
    pub fn chain(&self, id: ChainId) -> Option<&InterfaceChain> {
        self.chains.get(id.0)
    }

    /// Get a mutable reference to a chain by ID
    pub fn chain_mut(&mut self, id: ChainId) -> Option<&mut InterfaceChain> {
        self.chains.get_mut(id.0)
    }

    /// ID of the active chain, if any chain exists
    pub fn active_chain_id(&self) -> Option<ChainId> {
        self.active_chain
    }

    /// The active chain, if any chain exists
    pub fn active_chain(&self) -> Option<&InterfaceChain> {
        self.active_chain.and_then(|id| self.chain(id))
    }

    /// Append an interface to a chain, rejecting IDs already used in any chain
    pub fn append_to_chain(
        &mut self,
        chain_id: ChainId,
        interface: Interface,
    ) -> Result<(), RegistryError> {
        if self.chain(chain_id).is_none() {
            return Err(RegistryError::ChainNotFound(chain_id));
        }
        if self.find_interface(interface.id()).is_some() {
            warn!(chain_id = %chain_id, interface_id = %interface.id(), "Interface already exists");
            return Err(RegistryError::DuplicateInterface(interface.id().to_string()));
        }
        self.chains[chain_id.0].append(interface);
        Ok(())
    }

    /// First interface with the given ID, searching chains in creation order
    pub fn find_interface(&self, id: &str) -> Option<&Interface> {
        self.chains.iter().find_map(|chain| chain.find(id))
    }

    /// Mutable access to the first interface with the given ID
    pub fn find_interface_mut(&mut self, id: &str) -> Option<&mut Interface> {
        self.chains.iter_mut().find_map(|chain| chain.find_mut(id))
    }

    /// Attach an agent to an interface
    /// Returns true on success; nothing changes on failure
    pub fn attach(&mut self, agent_id: &str, interface_id: &str) -> bool {
        self.try_attach(agent_id, interface_id).is_ok()
    }

    /// Attach an agent to an interface, reporting which ID was not found
    ///
    /// Every chain is searched, not just the active one, and the first match
    /// in creation order wins. Previous partners of both sides are released
    /// so that the agent and interface always point at each other.
    pub fn try_attach(&mut self, agent_id: &str, interface_id: &str) -> Result<(), RegistryError> {
        if !self.agents.contains_key(agent_id) {
            warn!(agent_id = %agent_id, interface_id = %interface_id, "Attach failed: agent not found");
            return Err(RegistryError::AgentNotFound(agent_id.to_string()));
        }

        let Some((chain_index, position)) = self.locate_interface(interface_id) else {
            warn!(agent_id = %agent_id, interface_id = %interface_id, "Attach failed: interface not found");
            return Err(RegistryError::InterfaceNotFound(interface_id.to_string()));
        };

        // Release the agent's old interface and the interface's old agent
        self.release_interfaces_of(agent_id);
        let previous = self.chains[chain_index].list_all()[position]
            .agent()
            .map(str::to_string);
        if let Some(previous) = previous {
            if let Some(agent) = self.agents.get_mut(&previous) {
                agent.set_interface(None);
            }
            debug!(agent_id = %previous, interface_id = %interface_id, "Released previous agent");
        }

        self.chains[chain_index].interfaces_mut()[position].set_agent(Some(agent_id.to_string()));
        if let Some(agent) = self.agents.get_mut(agent_id) {
            agent.set_interface(Some(interface_id.to_string()));
        }

        debug!(
            agent_id = %agent_id,
            interface_id = %interface_id,
            chain_id = %ChainId(chain_index),
            "Attached agent"
        );
        Ok(())
    }

    /// Detach an agent from its interface
    /// Returns true if the agent was attached
    pub fn detach_agent(&mut self, agent_id: &str) -> bool {
        let attached = self
            .agents
            .get(agent_id)
            .is_some_and(|agent| agent.interface().is_some());
        if !attached {
            return false;
        }

        self.release_interfaces_of(agent_id);
        if let Some(agent) = self.agents.get_mut(agent_id) {
            agent.set_interface(None);
        }
        debug!(agent_id = %agent_id, "Detached agent");
        true
    }

    /// Counters over all agents and chains
    pub fn stats(&self) -> RegistryStats {
        let agents = self.agents.values();
        RegistryStats {
            total_agents: self.agents.len(),
            active_agents: agents.clone().filter(|a| a.is_active()).count(),
            idle_agents: agents
                .clone()
                .filter(|a| *a.status() == AgentStatus::Idle)
                .count(),
            total_chains: self.chains.len(),
            total_interfaces: self.chains.iter().map(InterfaceChain::len).sum(),
            attached_agents: agents.filter(|a| a.interface().is_some()).count(),
        }
    }

    /// Views of all agents in registration order
    pub fn agent_views(&self) -> Vec<AgentView> {
        self.list_agents()
            .into_iter()
            .map(|agent| {
                let interface = agent.interface().and_then(|id| self.find_interface(id));
                AgentView {
                    id: agent.id().to_string(),
                    name: agent.name.clone(),
                    status: agent.status().to_string(),
                    interface_id: interface.map(|i| i.id().to_string()),
                    interface_name: interface.map(|i| i.name.clone()),
                    metadata: agent.metadata.clone(),
                }
            })
            .collect()
    }

    /// Views of all chains in creation order
    pub fn chain_views(&self) -> Vec<ChainView> {
        self.chains
            .iter()
            .map(|chain| ChainView {
                id: chain.id(),
                active: self.active_chain == Some(chain.id()),
                interfaces: chain
                    .list_all()
                    .iter()
                    .map(|interface| self.interface_view(interface))
                    .collect(),
            })
            .collect()
    }

    fn interface_view(&self, interface: &Interface) -> InterfaceView {
        let agent = interface.agent().and_then(|id| self.get_agent(id));
        InterfaceView {
            id: interface.id().to_string(),
            name: interface.name.clone(),
            agent_id: agent.map(|a| a.id().to_string()),
            agent_name: agent.map(|a| a.name.clone()),
            prev: interface.prev().map(str::to_string),
            next: interface.next().map(str::to_string),
            commands: interface
                .commands()
                .names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Chain index and position of the first interface with the given ID
    fn locate_interface(&self, id: &str) -> Option<(usize, usize)> {
        self.chains.iter().enumerate().find_map(|(index, chain)| {
            chain
                .list_all()
                .iter()
                .position(|interface| interface.id() == id)
                .map(|position| (index, position))
        })
    }

    /// Clear the agent link of every interface pointing at `agent_id`
    fn release_interfaces_of(&mut self, agent_id: &str) {
        for chain in &mut self.chains {
            for interface in chain.interfaces_mut() {
                if interface.agent() == Some(agent_id) {
                    interface.set_agent(None);
                }
            }
        }
    }
}
