// Interface chain
// Ordered, doubly-linked sequence of interfaces owned by one chain

use crate::state::interface::Interface;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Identifier of a chain within its registry (creation index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChainId(pub usize);

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chain-{}", self.0)
    }
}

/// An ordered chain of interfaces
///
/// Interfaces are stored in append order. The chain owns them for its whole
/// lifetime; there is no removal or reparenting. Head and tail are the first
/// and last entries of that order, so an empty chain has neither.
#[derive(Debug, Clone)]
pub struct InterfaceChain {
    id: ChainId,
    interfaces: Vec<Interface>,
}

impl InterfaceChain {
    /// Create an empty chain
    pub fn new(id: ChainId) -> Self {
        Self {
            id,
            interfaces: Vec::new(),
        }
    }

    /// The chain's ID
    pub fn id(&self) -> ChainId {
        self.id
    }

    /// Append an interface to the end of the chain
    ///
    /// The current tail (if any) is linked forward to the new interface.
    /// Links and agent the interface already carried are dropped, so a cloned
    /// or pre-linked interface starts unattached. No duplicate ID check is
    /// performed here.
    pub fn append(&mut self, mut interface: Interface) {
        interface.reset_links();
        if let Some(tail) = self.interfaces.last_mut() {
            tail.link_to(&mut interface);
        }
        debug!(
            chain_id = %self.id,
            interface_id = %interface.id(),
            position = self.interfaces.len(),
            "Appended interface"
        );
        self.interfaces.push(interface);
    }

    /// First interface with the given ID, if any
    pub fn find(&self, id: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|interface| interface.id() == id)
    }

    /// Mutable access to the first interface with the given ID
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Interface> {
        self.interfaces
            .iter_mut()
            .find(|interface| interface.id() == id)
    }

    /// All interfaces in append order
    pub fn list_all(&self) -> &[Interface] {
        &self.interfaces
    }

    /// First appended interface
    pub fn head(&self) -> Option<&Interface> {
        self.interfaces.first()
    }

    /// Most recently appended interface
    pub fn tail(&self) -> Option<&Interface> {
        self.interfaces.last()
    }

    /// Number of interfaces in the chain
    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    /// Whether the chain has no interfaces
    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    pub(crate) fn interfaces_mut(&mut self) -> &mut [Interface] {
        &mut self.interfaces
    }
}
