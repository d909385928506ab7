use twine_core::Model;
use uom::si::f64::Pressure;

use crate::support::hydraulics::{FlowCondition, Medium, PressureDrop};

/// Input to a [`PressureDropModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub medium: Medium,
    pub condition: FlowCondition,
}

/// Adapts any [`PressureDrop`] component to a [`twine_core::Model`].
///
/// The model maps an [`OperatingPoint`] to the pressure drop across the
/// wrapped component.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_hydraulics::{
///     models::hydraulic::{OperatingPoint, PressureDropModel, pipe::StraightPipe},
///     support::hydraulics::{KinematicViscosity, Medium},
/// };
/// use uom::si::{
///     diffusion_coefficient::square_meter_per_second,
///     f64::{Length, MassDensity, VolumeRate},
///     length::{meter, millimeter},
///     mass_density::kilogram_per_cubic_meter,
///     pressure::millibar,
///     volume_rate::cubic_meter_per_hour,
/// };
///
/// let pipe = StraightPipe::new(
///     Length::new::<millimeter>(45.2),
///     Length::new::<meter>(2.6),
///     Length::new::<millimeter>(0.05),
/// )?;
/// let model = PressureDropModel::new(pipe);
///
/// let water = Medium::new(
///     MassDensity::new::<kilogram_per_cubic_meter>(997.048),
///     KinematicViscosity::new::<square_meter_per_second>(0.8927e-6),
/// )?;
/// let dp = model.call(&OperatingPoint {
///     medium: water,
///     condition: VolumeRate::new::<cubic_meter_per_hour>(10.0).into(),
/// })?;
///
/// assert!((dp.get::<millibar>() - 19.58).abs() < 0.02);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureDropModel<C> {
    component: C,
}

impl<C: PressureDrop> PressureDropModel<C> {
    /// Wraps a component.
    #[must_use]
    pub fn new(component: C) -> Self {
        Self { component }
    }

    /// Returns the wrapped component.
    #[must_use]
    pub fn component(&self) -> &C {
        &self.component
    }
}

impl<C> Model for PressureDropModel<C>
where
    C: PressureDrop,
    C::Error: std::error::Error + Send + Sync + 'static,
{
    type Input = OperatingPoint;
    type Output = Pressure;
    type Error = C::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.component
            .pressure_drop(&input.medium, input.condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::pressure::pascal;

    use crate::models::hydraulic::{
        corrugated_pipe::CorrugatedPipeError,
        test_support::{corrugated_hose, m3h, pool_pipe, water_25c},
    };

    #[test]
    fn delegates_to_component() {
        let pipe = pool_pipe();
        let model = PressureDropModel::new(pipe);
        let water = water_25c();
        assert_eq!(model.component(), &pipe);

        let dp = model
            .call(&OperatingPoint {
                medium: water,
                condition: m3h(10.0).into(),
            })
            .unwrap();

        assert_relative_eq!(
            dp.get::<pascal>(),
            pipe.pressure_drop(&water, m3h(10.0)).get::<pascal>()
        );
    }

    #[test]
    fn forwards_component_errors() {
        let model = PressureDropModel::new(corrugated_hose(3.0, 6.0));

        let result = model.call(&OperatingPoint {
            medium: water_25c(),
            condition: m3h(1.0).into(),
        });

        assert!(matches!(result, Err(CorrugatedPipeError::NotTurbulent { .. })));
    }
}
