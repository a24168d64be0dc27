//! Circuit validation.

use crate::components::{ComponentKind, ComponentValue};
use crate::error::{Result, TransientError};

use super::Topology;

/// Validate the element set of a circuit.
///
/// Checks:
/// - No voltage source among the elements
/// - Every kind the topology requires is present exactly once
/// - No kind the topology does not use is present
pub fn validate_elements(topology: Topology, elements: &[ComponentValue]) -> Result<()> {
    let required = topology.required_kinds();

    for kind in ComponentKind::ALL {
        let count = elements.iter().filter(|e| e.kind() == kind).count();
        let expected = usize::from(required.contains(&kind));

        if count != expected {
            let message = if expected == 0 {
                format!("{} circuit has an unexpected {}", topology, kind)
            } else if count == 0 {
                format!("{} circuit is missing its {}", topology, kind)
            } else {
                format!("{} circuit has {} values for the {}", topology, count, kind)
            };
            return Err(TransientError::invalid_topology(message));
        }
    }

    Ok(())
}
