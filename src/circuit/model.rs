//! Circuit model: source, elements and time grid.

use super::types::{CircuitKey, Configuration, Topology};
use super::validate::validate_elements;
use super::TimeGrid;
use crate::components::{ComponentKind, ComponentValue};
use crate::error::{Result, TransientError};

/// A circuit ready for evaluation.
///
/// The model owns its component values. It does not compute anything; the
/// evaluators in [`crate::response`] read magnitudes from it.
#[derive(Debug, Clone)]
pub struct CircuitModel {
    topology: Topology,
    configuration: Configuration,
    source: ComponentValue,
    elements: Vec<ComponentValue>,
    time_grid: TimeGrid,
}

impl CircuitModel {
    /// Build a model on the default grid (1000 points over [0.001, 0.1] s).
    ///
    /// `elements` must contain exactly one value of each kind the topology
    /// requires, in any order.
    pub fn new(
        topology: Topology,
        configuration: Configuration,
        source: ComponentValue,
        elements: Vec<ComponentValue>,
    ) -> Result<Self> {
        if source.kind() != ComponentKind::Source {
            return Err(TransientError::invalid_topology(format!(
                "circuit must be driven by a voltage source, got a {}",
                source.kind()
            )));
        }
        validate_elements(topology, &elements)?;

        Ok(Self {
            topology,
            configuration,
            source,
            elements,
            time_grid: TimeGrid::default(),
        })
    }

    /// Replace the time grid.
    pub fn with_time_grid(mut self, time_grid: TimeGrid) -> Self {
        self.time_grid = time_grid;
        self
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn configuration(&self) -> Configuration {
        self.configuration
    }

    pub fn key(&self) -> CircuitKey {
        CircuitKey::new(self.topology, self.configuration)
    }

    pub fn source(&self) -> &ComponentValue {
        &self.source
    }

    pub fn time_grid(&self) -> &TimeGrid {
        &self.time_grid
    }

    /// Find the element of the given kind.
    pub fn element(&self, kind: ComponentKind) -> Option<&ComponentValue> {
        if kind == ComponentKind::Source {
            return Some(&self.source);
        }
        self.elements.iter().find(|e| e.kind() == kind)
    }

    /// Mutable access to an element; its kind cannot change, only its magnitude.
    pub fn element_mut(&mut self, kind: ComponentKind) -> Option<&mut ComponentValue> {
        if kind == ComponentKind::Source {
            return Some(&mut self.source);
        }
        self.elements.iter_mut().find(|e| e.kind() == kind)
    }

    /// Magnitude of the element of the given kind.
    pub fn magnitude(&self, kind: ComponentKind) -> Result<f64> {
        self.element(kind)
            .map(ComponentValue::magnitude)
            .ok_or_else(|| {
                TransientError::invalid_topology(format!(
                    "{} circuit has no {}",
                    self.topology, kind
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rc_model() -> CircuitModel {
        CircuitModel::new(
            Topology::RC,
            Configuration::Series,
            ComponentValue::source(5.0).unwrap(),
            vec![
                ComponentValue::resistor(100.0).unwrap(),
                ComponentValue::capacitor(1e-4).unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_default_grid_attached() {
        let model = rc_model();
        assert_eq!(model.time_grid(), &TimeGrid::default());
        let model = model.with_time_grid(TimeGrid::interactive());
        assert_eq!(model.time_grid().start(), 0.0);
    }

    #[test]
    fn test_magnitude_lookup() {
        let model = rc_model();
        assert_eq!(model.magnitude(ComponentKind::Source).unwrap(), 5.0);
        assert_eq!(model.source().to_string(), "5 V");
        assert_eq!(model.magnitude(ComponentKind::Resistor).unwrap(), 100.0);
        assert_eq!(model.magnitude(ComponentKind::Capacitor).unwrap(), 1e-4);
        assert!(model.magnitude(ComponentKind::Inductor).is_err());
    }

    #[test]
    fn test_element_mut_keeps_invariant() {
        let mut model = rc_model();
        let r = model.element_mut(ComponentKind::Resistor).unwrap();
        assert!(r.set_magnitude(-1.0).is_err());
        r.set_magnitude(47.0).unwrap();
        assert_eq!(model.magnitude(ComponentKind::Resistor).unwrap(), 47.0);
    }

    #[test]
    fn test_source_must_be_source() {
        let result = CircuitModel::new(
            Topology::RC,
            Configuration::Series,
            ComponentValue::resistor(5.0).unwrap(),
            vec![
                ComponentValue::resistor(100.0).unwrap(),
                ComponentValue::capacitor(1e-4).unwrap(),
            ],
        );
        assert!(matches!(result, Err(TransientError::InvalidTopology { .. })));
    }

    #[test]
    fn test_key() {
        let model = rc_model();
        assert_eq!(model.key(), CircuitKey::new(Topology::RC, Configuration::Series));
    }
}
