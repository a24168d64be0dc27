//! User-supplied circuit parameters.
//!
//! Shells hand the engine a flat mapping from field name to raw text, using
//! the same field names as the saved parameter files:
//!
//! | Field | Meaning | Topologies |
//! |-------|---------|------------|
//! | `resistencia` | resistance in ohms | all |
//! | `voltaje` | source voltage in volts | all |
//! | `capacitor` | capacitance in farads | RC, RLC |
//! | `inductor` | inductance in henries | RL, RLC |
//!
//! Values are plain decimal numbers (`0.0001` or `1e-4`); surrounding
//! whitespace is ignored. Unit suffixes such as `100u` are rejected.

use std::collections::BTreeMap;
use std::fmt;

use crate::circuit::Topology;
use crate::components::{ComponentKind, ComponentValue};
use crate::error::{Result, TransientError};

/// Raw text per field, as typed by the user.
pub type RawParameters = BTreeMap<String, String>;

/// Numeric value per field; the shape of a saved parameter file.
pub type ParameterMap = BTreeMap<String, f64>;

/// A named input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterField {
    Resistance,
    Voltage,
    Capacitance,
    Inductance,
}

impl ParameterField {
    /// Key used in raw input and parameter files.
    pub fn key(&self) -> &'static str {
        match self {
            ParameterField::Resistance => "resistencia",
            ParameterField::Voltage => "voltaje",
            ParameterField::Capacitance => "capacitor",
            ParameterField::Inductance => "inductor",
        }
    }

    /// Component kind the field sets.
    pub fn kind(&self) -> ComponentKind {
        match self {
            ParameterField::Resistance => ComponentKind::Resistor,
            ParameterField::Voltage => ComponentKind::Source,
            ParameterField::Capacitance => ComponentKind::Capacitor,
            ParameterField::Inductance => ComponentKind::Inductor,
        }
    }

    /// Fields a topology needs, in form order.
    pub fn required_for(topology: Topology) -> Vec<ParameterField> {
        let mut fields = vec![ParameterField::Resistance, ParameterField::Voltage];
        if topology.has_capacitor() {
            fields.push(ParameterField::Capacitance);
        }
        if topology.has_inductor() {
            fields.push(ParameterField::Inductance);
        }
        fields
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Parse a raw field value as a plain float.
pub fn parse_value(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Parse the fields `topology` needs from raw text.
///
/// Fields the topology does not use are ignored, even if they would not
/// parse. The first missing or non-numeric field aborts the whole parse.
pub fn parse_parameters(topology: Topology, raw: &RawParameters) -> Result<ParameterMap> {
    let mut values = ParameterMap::new();
    for field in ParameterField::required_for(topology) {
        let text = raw
            .get(field.key())
            .ok_or_else(|| TransientError::MissingParameter {
                field: field.key().to_string(),
            })?;
        let value = parse_value(text)
            .ok_or_else(|| TransientError::parameter_parse(field.key(), text.as_str()))?;
        values.insert(field.key().to_string(), value);
    }
    Ok(values)
}

/// Validated numeric parameters for one circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    pub voltage: f64,
    pub resistance: f64,
    pub capacitance: Option<f64>,
    pub inductance: Option<f64>,
}

impl ParameterSet {
    /// Pick the values `topology` needs out of a parameter mapping.
    pub fn from_map(topology: Topology, map: &ParameterMap) -> Result<Self> {
        let get = |field: ParameterField| -> Result<f64> {
            map.get(field.key())
                .copied()
                .ok_or_else(|| TransientError::MissingParameter {
                    field: field.key().to_string(),
                })
        };

        Ok(Self {
            voltage: get(ParameterField::Voltage)?,
            resistance: get(ParameterField::Resistance)?,
            capacitance: if topology.has_capacitor() {
                Some(get(ParameterField::Capacitance)?)
            } else {
                None
            },
            inductance: if topology.has_inductor() {
                Some(get(ParameterField::Inductance)?)
            } else {
                None
            },
        })
    }

    /// Flat mapping suitable for a parameter file.
    pub fn to_map(&self) -> ParameterMap {
        let mut map = ParameterMap::new();
        map.insert(ParameterField::Resistance.key().to_string(), self.resistance);
        map.insert(ParameterField::Voltage.key().to_string(), self.voltage);
        if let Some(c) = self.capacitance {
            map.insert(ParameterField::Capacitance.key().to_string(), c);
        }
        if let Some(l) = self.inductance {
            map.insert(ParameterField::Inductance.key().to_string(), l);
        }
        map
    }

    /// Build the source and the element list for `topology`.
    ///
    /// Elements come out in the order resistor, inductor, capacitor.
    pub fn components(&self, topology: Topology) -> Result<(ComponentValue, Vec<ComponentValue>)> {
        let source = ComponentValue::source(self.voltage)?;
        let mut elements = vec![ComponentValue::resistor(self.resistance)?];

        if topology.has_inductor() {
            let l = self.inductance.ok_or_else(|| TransientError::MissingParameter {
                field: ParameterField::Inductance.key().to_string(),
            })?;
            elements.push(ComponentValue::inductor(l)?);
        }
        if topology.has_capacitor() {
            let c = self.capacitance.ok_or_else(|| TransientError::MissingParameter {
                field: ParameterField::Capacitance.key().to_string(),
            })?;
            elements.push(ComponentValue::capacitor(c)?);
        }

        Ok((source, elements))
    }
}
