//! Core types for circuit selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::components::ComponentKind;
use crate::error::TransientError;

/// Which reactive elements accompany the resistor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    RC,
    RL,
    RLC,
}

impl Topology {
    pub const ALL: [Topology; 3] = [Topology::RC, Topology::RL, Topology::RLC];

    /// Element kinds the topology requires, in canonical order.
    pub fn required_kinds(&self) -> &'static [ComponentKind] {
        match self {
            Topology::RC => &[ComponentKind::Resistor, ComponentKind::Capacitor],
            Topology::RL => &[ComponentKind::Resistor, ComponentKind::Inductor],
            Topology::RLC => &[
                ComponentKind::Resistor,
                ComponentKind::Inductor,
                ComponentKind::Capacitor,
            ],
        }
    }

    pub fn has_capacitor(&self) -> bool {
        matches!(self, Topology::RC | Topology::RLC)
    }

    pub fn has_inductor(&self) -> bool {
        matches!(self, Topology::RL | Topology::RLC)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Topology::RC => "RC",
            Topology::RL => "RL",
            Topology::RLC => "RLC",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Topology {
    type Err = TransientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RC" => Ok(Topology::RC),
            "RL" => Ok(Topology::RL),
            "RLC" => Ok(Topology::RLC),
            _ => Err(TransientError::UnknownTopology {
                name: s.to_string(),
            }),
        }
    }
}

/// How the elements are connected to the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Configuration {
    /// Source voltage divided across the elements
    #[default]
    Series,
    /// Source voltage shared by every element
    Parallel,
}

impl Configuration {
    pub fn name(&self) -> &'static str {
        match self {
            Configuration::Series => "series",
            Configuration::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Configuration {
    type Err = TransientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the Spanish names saved by older parameter tooling as well
        match s.trim().to_lowercase().as_str() {
            "series" | "serie" => Ok(Configuration::Series),
            "parallel" | "paralelo" => Ok(Configuration::Parallel),
            _ => Err(TransientError::UnknownConfiguration {
                name: s.to_string(),
            }),
        }
    }
}

/// Key selecting one of the six evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CircuitKey {
    pub topology: Topology,
    pub configuration: Configuration,
}

impl CircuitKey {
    pub fn new(topology: Topology, configuration: Configuration) -> Self {
        Self {
            topology,
            configuration,
        }
    }
}

impl fmt::Display for CircuitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.configuration, self.topology)
    }
}
