use uom::si::f64::{Velocity, VolumeRate};

use super::FlowComponent;

/// The working point of a flow component.
///
/// A condition may be given either as a volumetric flow rate or as a mean
/// velocity. Both forms resolve to the other through the component's
/// cross-sectional area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowCondition {
    /// Volumetric flow rate through the component.
    FlowRate(VolumeRate),
    /// Mean (superficial) velocity in the component's cross-section.
    Velocity(Velocity),
}

impl FlowCondition {
    /// Returns the volumetric flow rate through `component`.
    #[must_use]
    pub fn flow_rate(self, component: &(impl FlowComponent + ?Sized)) -> VolumeRate {
        match self {
            Self::FlowRate(flow_rate) => flow_rate,
            Self::Velocity(velocity) => component.flow_rate(velocity),
        }
    }

    /// Returns the mean velocity in the cross-section of `component`.
    #[must_use]
    pub fn velocity(self, component: &(impl FlowComponent + ?Sized)) -> Velocity {
        match self {
            Self::FlowRate(flow_rate) => component.flow_velocity(flow_rate),
            Self::Velocity(velocity) => velocity,
        }
    }
}

impl From<VolumeRate> for FlowCondition {
    fn from(flow_rate: VolumeRate) -> Self {
        Self::FlowRate(flow_rate)
    }
}

impl From<Velocity> for FlowCondition {
    fn from(velocity: Velocity) -> Self {
        Self::Velocity(velocity)
    }
}
