use std::f64::consts::PI;

use uom::si::f64::{Area, Length, Velocity, VolumeRate};

/// A component with a circular flow cross-section.
///
/// Velocity and volumetric flow rate are related through continuity,
/// `Q = v·A`, using the same cross-sectional area in both directions.
pub trait FlowComponent {
    /// Inner diameter of the flow cross-section.
    fn diameter(&self) -> Length;

    /// Cross-sectional area, `π·d²/4`.
    fn cross_area(&self) -> Area {
        let d = self.diameter();
        PI * d * d / 4.0
    }

    /// Mean flow velocity for a volumetric flow rate.
    fn flow_velocity(&self, flow_rate: VolumeRate) -> Velocity {
        flow_rate / self.cross_area()
    }

    /// Volumetric flow rate for a mean flow velocity.
    fn flow_rate(&self, velocity: Velocity) -> VolumeRate {
        velocity * self.cross_area()
    }
}
