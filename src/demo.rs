//! Scripted demo scenarios
//!
//! Each scenario builds a fresh registry, drives it through the public
//! operations and returns a [`ScenarioReport`] snapshot for printing.

use crate::command::CommandArgs;
use crate::config::DemoConfig;
use crate::state::{Agent, AgentRegistry, AgentView, ChainView, Interface, RegistryStats};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// Demo scenario selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
    /// Basic, multi, commands and scale, in that order
    #[default]
    All,
    /// Five agents over two chains, some of them active
    Seed,
    /// One three-stage pipeline
    Basic,
    /// Two independent chains
    Multi,
    /// Command handling on a single interface
    Commands,
    /// Many chains with one agent per interface
    Scale,
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Scenario::All),
            "seed" => Ok(Scenario::Seed),
            "basic" => Ok(Scenario::Basic),
            "multi" => Ok(Scenario::Multi),
            "commands" => Ok(Scenario::Commands),
            "scale" => Ok(Scenario::Scale),
            other => Err(format!("unknown scenario: {}", other)),
        }
    }
}

/// Outcome of one command executed during a scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOutcome {
    /// Interface the command ran on
    pub interface_id: String,
    /// Command name
    pub command: String,
    /// Positional arguments
    pub args: Vec<Value>,
    /// Handler result, None for unknown commands
    pub result: Option<Value>,
}

/// Snapshot of a registry after a scenario ran
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    /// Scenario name
    pub name: &'static str,
    /// Registry counters
    pub stats: RegistryStats,
    /// Agents in registration order
    pub agents: Vec<AgentView>,
    /// Chains in creation order
    pub chains: Vec<ChainView>,
    /// Commands executed by the scenario
    pub commands: Vec<CommandOutcome>,
}

impl ScenarioReport {
    fn from_registry(name: &'static str, registry: &AgentRegistry) -> Self {
        Self {
            name,
            stats: registry.stats(),
            agents: registry.agent_views(),
            chains: registry.chain_views(),
            commands: Vec::new(),
        }
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.name)?;
        writeln!(f, "Agents:")?;
        if self.agents.is_empty() {
            writeln!(f, "  No agents registered")?;
        }
        for agent in &self.agents {
            write!(f, "  [{}] {} (ID: {})", agent.status, agent.name, agent.id)?;
            match &agent.interface_name {
                Some(interface) => writeln!(f, " -> {}", interface)?,
                None => writeln!(f)?,
            }
        }

        for (index, chain) in self.chains.iter().enumerate() {
            let marker = if chain.active { " (active)" } else { "" };
            writeln!(f, "Chain #{}{}:", index + 1, marker)?;
            if chain.interfaces.is_empty() {
                writeln!(f, "  No interfaces in chain")?;
            }
            for interface in &chain.interfaces {
                write!(f, "  [{}] {}", interface.id, interface.name)?;
                match &interface.agent_name {
                    Some(agent) => writeln!(f, " <- {}", agent)?,
                    None => writeln!(f, " <- (no agent)")?,
                }
            }
        }

        for outcome in &self.commands {
            let result = outcome
                .result
                .as_ref()
                .map_or_else(|| "<no result>".to_string(), Value::to_string);
            writeln!(
                f,
                "  {}.{}({}) -> {}",
                outcome.interface_id,
                outcome.command,
                Value::from(outcome.args.clone()),
                result
            )?;
        }

        let stats = &self.stats;
        writeln!(
            f,
            "Agents: {} ({} active, {} idle, {} attached) | Chains: {} | Interfaces: {}",
            stats.total_agents,
            stats.active_agents,
            stats.idle_agents,
            stats.attached_agents,
            stats.total_chains,
            stats.total_interfaces
        )
    }
}

/// Run the configured scenario(s)
pub fn run(config: &DemoConfig) -> Vec<ScenarioReport> {
    let reports = match config.scenario {
        Scenario::All => vec![
            basic_chain(),
            multiple_chains(),
            command_handling(),
            scalability(config.scale_chains, config.scale_agents_per_chain),
        ],
        Scenario::Seed => vec![seed()],
        Scenario::Basic => vec![basic_chain()],
        Scenario::Multi => vec![multiple_chains()],
        Scenario::Commands => vec![command_handling()],
        Scenario::Scale => vec![scalability(
            config.scale_chains,
            config.scale_agents_per_chain,
        )],
    };
    info!(scenarios = reports.len(), "Demo finished");
    reports
}

/// Attach each `(agent, interface)` pair, logging the ones that fail
fn attach_all(registry: &mut AgentRegistry, pairs: &[(&str, &str)]) {
    for (agent_id, interface_id) in pairs {
        if !registry.attach(agent_id, interface_id) {
            warn!(agent_id = %agent_id, interface_id = %interface_id, "Demo attachment failed");
        }
    }
}

/// Create a chain holding the given `(id, name)` interfaces
fn append_all(registry: &mut AgentRegistry, interfaces: &[(&str, &str)]) {
    let chain = registry.create_chain();
    for (id, name) in interfaces {
        chain.append(Interface::new(*id, *name));
    }
}

/// Registry used by an interactive front end: five agents on two chains
pub fn seed_registry() -> AgentRegistry {
    let mut registry = AgentRegistry::new();
    let agents = [
        ("a1", "DataCollector", "collector", "high"),
        ("a2", "Analyzer", "processor", "medium"),
        ("a3", "Reporter", "output", "low"),
        ("a4", "Monitor", "watcher", "high"),
        ("a5", "Validator", "checker", "medium"),
    ];
    for (id, name, kind, priority) in agents {
        registry.register_agent(
            Agent::new(id, name)
                .with_metadata("type", kind)
                .with_metadata("priority", priority),
        );
    }

    append_all(
        &mut registry,
        &[("i1", "DataIngestion"), ("i2", "Processing"), ("i3", "Output")],
    );
    attach_all(&mut registry, &[("a1", "i1"), ("a2", "i2"), ("a3", "i3")]);

    append_all(&mut registry, &[("i4", "Monitoring"), ("i5", "Validation")]);
    attach_all(&mut registry, &[("a4", "i4"), ("a5", "i5")]);

    for id in ["a1", "a2", "a4"] {
        registry.activate_agent(id);
    }
    registry
}

fn seed() -> ScenarioReport {
    ScenarioReport::from_registry("seed", &seed_registry())
}

fn basic_chain() -> ScenarioReport {
    let mut registry = AgentRegistry::new();
    for (id, name, role) in [
        ("input", "InputAgent", "data_intake"),
        ("process", "ProcessorAgent", "transformation"),
        ("output", "OutputAgent", "delivery"),
    ] {
        registry.register_agent(Agent::new(id, name).with_metadata("role", role));
    }

    append_all(
        &mut registry,
        &[
            ("i1", "DataIngestion"),
            ("i2", "Processing"),
            ("i3", "OutputDelivery"),
        ],
    );
    for (agent_id, interface_id) in [("input", "i1"), ("process", "i2"), ("output", "i3")] {
        attach_all(&mut registry, &[(agent_id, interface_id)]);
        registry.activate_agent(agent_id);
    }

    ScenarioReport::from_registry("basic", &registry)
}

fn multiple_chains() -> ScenarioReport {
    let mut registry = AgentRegistry::new();

    append_all(&mut registry, &[("pi1", "ProdIngestion"), ("pi2", "ProdProcessing")]);
    registry.register_agent(Agent::new("p1", "ProductionCollector"));
    registry.register_agent(Agent::new("p2", "ProductionProcessor"));
    attach_all(&mut registry, &[("p1", "pi1"), ("p2", "pi2")]);

    append_all(&mut registry, &[("mi1", "HealthCheck"), ("mi2", "Alerting")]);
    registry.register_agent(Agent::new("m1", "HealthMonitor"));
    registry.register_agent(Agent::new("m2", "AlertAgent"));
    attach_all(&mut registry, &[("m1", "mi1"), ("m2", "mi2")]);

    ScenarioReport::from_registry("multi", &registry)
}

fn command_handling() -> ScenarioReport {
    let mut registry = AgentRegistry::new();
    let mut interface = Interface::new("cmd1", "CommandInterface");

    interface.register_command("process", |args: &[Value]| {
        json!(format!("Processed: {}", args.str(0).unwrap_or_default()))
    });
    interface.register_command("validate", |args: &[Value]| {
        json!(args.str(0).is_some_and(|data| !data.is_empty()))
    });
    interface.register_command("transform", |args: &[Value]| {
        args.str(0)
            .map(|data| json!(data.to_uppercase()))
            .unwrap_or(Value::Null)
    });

    let sample = json!("sample data");
    let commands: Vec<CommandOutcome> = ["validate", "transform", "process", "archive"]
        .into_iter()
        .map(|command| CommandOutcome {
            interface_id: interface.id().to_string(),
            command: command.to_string(),
            args: vec![sample.clone()],
            result: interface.execute_command(command, std::slice::from_ref(&sample)),
        })
        .collect();

    registry.create_chain().append(interface);
    let mut report = ScenarioReport::from_registry("commands", &registry);
    report.commands = commands;
    report
}

fn scalability(chains: usize, agents_per_chain: usize) -> ScenarioReport {
    let mut registry = AgentRegistry::new();

    for chain_num in 1..=chains {
        let chain_id = registry.create_chain().id();
        for agent_num in 1..=agents_per_chain {
            let agent_id = format!("a{}_{}", chain_num, agent_num);
            let interface_id = format!("i{}_{}", chain_num, agent_num);
            registry.register_agent(Agent::new(
                agent_id.clone(),
                format!("Agent_{}_{}", chain_num, agent_num),
            ));
            let interface = Interface::new(
                interface_id.clone(),
                format!("Interface_{}_{}", chain_num, agent_num),
            );
            if let Err(e) = registry.append_to_chain(chain_id, interface) {
                warn!("Demo append failed: {}", e);
            }
            attach_all(&mut registry, &[(agent_id.as_str(), interface_id.as_str())]);
        }
    }

    ScenarioReport::from_registry("scale", &registry)
}
