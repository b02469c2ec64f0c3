//! End-to-end tests for the agent registry through the public API

use agent_chain::{
    Agent, AgentRegistry, AgentStatus, CommandArgs, Interface, InterfaceChain, RegistryError,
};
use serde_json::{json, Value};

fn populated_registry() -> AgentRegistry {
    let mut registry = AgentRegistry::new();
    registry.register_agent(Agent::new("a1", "Agent1"));
    registry.register_agent(Agent::new("a2", "Agent2"));

    let chain = registry.create_chain();
    chain.append(Interface::new("i1", "Interface1"));
    chain.append(Interface::new("i2", "Interface2"));
    registry
}

#[test]
fn test_agent_manager_flow() {
    let mut registry = populated_registry();

    assert_eq!(registry.list_agents().len(), 2);
    assert!(registry.attach("a1", "i1"));
    assert!(registry.attach("a2", "i2"));

    let a1 = registry.get_agent("a1").unwrap();
    assert_eq!(a1.interface(), Some("i1"));
    let i1 = registry.find_interface("i1").unwrap();
    assert_eq!(i1.agent(), Some("a1"));
    assert_eq!(
        registry.get_agent(i1.agent().unwrap()).unwrap().id(),
        "a1"
    );
}

#[test]
fn test_activate_deactivate_leaves_other_fields() {
    let mut registry = populated_registry();
    registry.attach("a1", "i1");
    let before = registry.get_agent("a1").unwrap().clone();

    registry.activate_agent("a1");
    registry.deactivate_agent("a1");

    let after = registry.get_agent("a1").unwrap();
    assert_eq!(after.status(), &AgentStatus::Idle);
    assert_eq!(after, &before);
}

#[test]
fn test_attach_finds_interface_outside_active_chain() {
    let mut registry = populated_registry();
    let second = registry.create_chain().id();
    registry
        .append_to_chain(second, Interface::new("i3", "Elsewhere"))
        .unwrap();

    assert_ne!(registry.active_chain_id(), Some(second));
    assert!(registry.attach("a1", "i3"));
    assert_eq!(registry.get_agent("a1").unwrap().interface(), Some("i3"));
    assert_eq!(
        registry.chain(second).unwrap().find("i3").unwrap().agent(),
        Some("a1")
    );
}

#[test]
fn test_attach_failure_mutates_nothing() {
    let mut registry = populated_registry();
    registry.create_chain().append(Interface::new("i3", "Elsewhere"));
    let agents = registry.agent_views();
    let chains = registry.chain_views();

    assert!(!registry.attach("ghost", "i3"));
    assert!(!registry.attach("a1", "ghost"));
    assert_eq!(
        registry.try_attach("ghost", "ghost"),
        Err(RegistryError::AgentNotFound("ghost".to_string()))
    );

    assert_eq!(registry.agent_views(), agents);
    assert_eq!(registry.chain_views(), chains);
}

#[test]
fn test_multiple_chains_are_independent() {
    let mut registry = AgentRegistry::new();
    let first = registry.create_chain().id();
    let second = registry.create_chain().id();

    registry
        .chain_mut(first)
        .unwrap()
        .append(Interface::new("i1", "Chain1-Interface1"));
    registry
        .chain_mut(second)
        .unwrap()
        .append(Interface::new("i2", "Chain2-Interface1"));

    assert_eq!(registry.chains().len(), 2);
    assert_eq!(registry.active_chain_id(), Some(first));

    let ids = |chain: &InterfaceChain| -> Vec<String> {
        chain.list_all().iter().map(|i| i.id().to_string()).collect()
    };
    let one = ids(registry.chain(first).unwrap());
    let two = ids(registry.chain(second).unwrap());
    assert_eq!(one, vec!["i1"]);
    assert_eq!(two, vec!["i2"]);
    assert!(one.iter().all(|id| !two.contains(id)));
}

#[test]
fn test_commands_through_registry() {
    let mut registry = populated_registry();
    let interface = registry.find_interface_mut("i2").unwrap();
    interface.register_command("add", |args: &[Value]| match (args.int(0), args.int(1)) {
        (Some(x), Some(y)) => json!(x + y),
        _ => Value::Null,
    });

    let interface = registry.find_interface("i2").unwrap();
    assert_eq!(
        interface.execute_command("add", &[json!(3), json!(7)]),
        Some(json!(10))
    );
    assert_eq!(interface.execute_command("subtract", &[json!(3)]), None);
}

#[test]
fn test_views_serialize_to_json() {
    let mut registry = populated_registry();
    registry.attach("a2", "i2");
    registry.activate_agent("a2");

    let agents = serde_json::to_value(registry.agent_views()).unwrap();
    assert_eq!(agents[1]["status"], json!("active"));
    assert_eq!(agents[1]["interface_name"], json!("Interface2"));
    assert_eq!(agents[0]["interface_name"], Value::Null);

    let chains = serde_json::to_value(registry.chain_views()).unwrap();
    assert_eq!(chains[0]["active"], json!(true));
    assert_eq!(chains[0]["interfaces"][1]["agent_name"], json!("Agent2"));
}
