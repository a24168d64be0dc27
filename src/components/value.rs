//! Validated component magnitude.

use std::fmt;

use super::{ComponentKind, Unit};
use crate::error::{Result, TransientError};

/// A positive magnitude with the unit of its component kind.
///
/// The kind (and therefore the unit) is fixed at construction. The magnitude
/// can be changed afterwards, but every change is checked again.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentValue {
    kind: ComponentKind,
    magnitude: f64,
    unit: Unit,
}

impl ComponentValue {
    /// Create a value in the canonical unit of `kind`.
    pub fn new(kind: ComponentKind, magnitude: f64) -> Result<Self> {
        check_magnitude(kind, magnitude)?;
        Ok(Self {
            kind,
            magnitude,
            unit: kind.unit(),
        })
    }

    /// Create a value with an explicit unit symbol.
    ///
    /// The symbol must be the canonical unit of `kind`; anything else is an
    /// [`TransientError::InvalidUnit`].
    pub fn with_unit(kind: ComponentKind, magnitude: f64, unit: &str) -> Result<Self> {
        check_unit(kind, unit)?;
        Self::new(kind, magnitude)
    }

    /// A DC voltage source in volts.
    pub fn source(volts: f64) -> Result<Self> {
        Self::new(ComponentKind::Source, volts)
    }

    /// A resistor in ohms.
    pub fn resistor(ohms: f64) -> Result<Self> {
        Self::new(ComponentKind::Resistor, ohms)
    }

    /// A capacitor in farads.
    pub fn capacitor(farads: f64) -> Result<Self> {
        Self::new(ComponentKind::Capacitor, farads)
    }

    /// An inductor in henries.
    pub fn inductor(henries: f64) -> Result<Self> {
        Self::new(ComponentKind::Inductor, henries)
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Change the magnitude. On error the previous magnitude is kept.
    pub fn set_magnitude(&mut self, magnitude: f64) -> Result<()> {
        check_magnitude(self.kind, magnitude)?;
        self.magnitude = magnitude;
        Ok(())
    }

    /// Re-assign the unit by symbol.
    ///
    /// Only the canonical unit of the kind is accepted.
    pub fn set_unit(&mut self, unit: &str) -> Result<()> {
        check_unit(self.kind, unit)?;
        self.unit = self.kind.unit();
        Ok(())
    }
}

impl fmt::Display for ComponentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

fn check_magnitude(kind: ComponentKind, magnitude: f64) -> Result<()> {
    // NaN fails the comparison and is rejected along with zero and negatives
    if magnitude > 0.0 && magnitude.is_finite() {
        Ok(())
    } else {
        Err(TransientError::invalid_value(kind, magnitude))
    }
}

fn check_unit(kind: ComponentKind, unit: &str) -> Result<()> {
    match Unit::from_symbol(unit) {
        Some(u) if u == kind.unit() => Ok(()),
        _ => Err(TransientError::invalid_unit(kind, unit)),
    }
}
