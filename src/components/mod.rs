//! Component values for circuit simulation.
//!
//! Every circuit element is described by a single [`ComponentValue`] carrying
//! an explicit [`ComponentKind`] tag. The unit of a value is fixed by its kind:
//!
//! | Kind | Unit |
//! |------|------|
//! | Source | V |
//! | Resistor | ohm |
//! | Capacitor | F |
//! | Inductor | H |

mod value;

pub use value::ComponentValue;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a circuit element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    /// DC voltage source
    Source,
    Resistor,
    Capacitor,
    Inductor,
}

impl ComponentKind {
    /// All component kinds, source first.
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Source,
        ComponentKind::Resistor,
        ComponentKind::Capacitor,
        ComponentKind::Inductor,
    ];

    /// The only unit a component of this kind may carry.
    pub fn unit(&self) -> Unit {
        match self {
            ComponentKind::Source => Unit::Volt,
            ComponentKind::Resistor => Unit::Ohm,
            ComponentKind::Capacitor => Unit::Farad,
            ComponentKind::Inductor => Unit::Henry,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Source => "voltage source",
            ComponentKind::Resistor => "resistor",
            ComponentKind::Capacitor => "capacitor",
            ComponentKind::Inductor => "inductor",
        };
        write!(f, "{}", name)
    }
}

/// Physical unit of a component magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Volt,
    Ohm,
    Farad,
    Henry,
}

impl Unit {
    /// Canonical symbol ("V", "ohm", "F", "H").
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Volt => "V",
            Unit::Ohm => "ohm",
            Unit::Farad => "F",
            Unit::Henry => "H",
        }
    }

    /// Look up a unit by its canonical symbol.
    ///
    /// Matching is exact: "ohm" is accepted, "Ohm" and "Ω" are not.
    pub fn from_symbol(symbol: &str) -> Option<Unit> {
        match symbol {
            "V" => Some(Unit::Volt),
            "ohm" => Some(Unit::Ohm),
            "F" => Some(Unit::Farad),
            "H" => Some(Unit::Henry),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
