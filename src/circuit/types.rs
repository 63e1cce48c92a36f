//! Core types for cascade representation.

use std::fmt;

use crate::error::{CascadeError, Result};

/// A node identifier as written in the netlist.
/// Node 0 is always ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The ground (reference) node.
    pub const GROUND: NodeId = NodeId(0);

    /// Check if this is the ground node.
    pub fn is_ground(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ground() {
            write!(f, "GND")
        } else {
            write!(f, "N{}", self.0)
        }
    }
}

/// How a two-terminal element sits in the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Between two signal nodes
    Series,
    /// Between a signal node and ground
    Shunt,
}

/// The two terminals of a lumped element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pins {
    pub pin1: NodeId,
    pub pin2: NodeId,
}

impl Pins {
    /// Create a pin pair, rejecting elements that short their own terminals.
    pub fn new(pin1: NodeId, pin2: NodeId) -> Result<Self> {
        if pin1 == pin2 {
            return Err(CascadeError::MisconnectedComponent { node: pin1.0 });
        }
        Ok(Self { pin1, pin2 })
    }

    /// Series or shunt, decided purely by whether either pin is ground.
    pub fn placement(&self) -> Placement {
        if self.pin1.is_ground() || self.pin2.is_ground() {
            Placement::Shunt
        } else {
            Placement::Series
        }
    }

    /// The node nearer the source in a left-to-right ladder drawing.
    ///
    /// A shunt element's input is its non-ground pin; a series element's
    /// input is the lower-numbered of its two pins.
    pub fn input_node(&self) -> NodeId {
        if self.pin1.is_ground() {
            self.pin2
        } else if self.pin2.is_ground() {
            self.pin1
        } else {
            self.pin1.min(self.pin2)
        }
    }
}

impl fmt::Display for Pins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.pin1, self.pin2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pins(a: u32, b: u32) -> Pins {
        Pins::new(NodeId(a), NodeId(b)).unwrap()
    }

    #[test]
    fn test_input_node_is_asymmetric() {
        assert_eq!(pins(1, 0).input_node(), NodeId(1));
        assert_eq!(pins(0, 5).input_node(), NodeId(5));
        assert_eq!(pins(7, 3).input_node(), NodeId(3));
        assert_eq!(pins(2, 9).input_node(), NodeId(2));
    }

    #[test]
    fn test_placement_from_ground_pin() {
        assert_eq!(pins(1, 2).placement(), Placement::Series);
        assert_eq!(pins(2, 0).placement(), Placement::Shunt);
        assert_eq!(pins(0, 3).placement(), Placement::Shunt);
    }

    #[test]
    fn test_shorted_pins_rejected() {
        let err = Pins::new(NodeId(4), NodeId(4)).unwrap_err();
        assert!(matches!(err, CascadeError::MisconnectedComponent { node: 4 }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_node_display() {
        assert_eq!(NodeId::GROUND.to_string(), "GND");
        assert_eq!(pins(1, 2).to_string(), "N1-N2");
    }
}
