//! Problem formulation for the bracketed flow-rate inversion.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Pressure, VolumeRate},
    pressure::pascal,
    volume_rate::cubic_meter_per_hour,
};

use crate::{models::hydraulic::pipe::StraightPipe, support::hydraulics::Medium};

use super::error::NonFinitePressureDrop;

/// A trial flow rate with its pressure drop.
#[derive(Debug, Clone, Copy)]
pub(super) struct Trial {
    pub(super) flow_rate: VolumeRate,
    pub(super) pressure_drop: Pressure,
}

/// Model adapter exposing the flow rate as the sole input of a pipe.
pub(super) struct FlowRateModel<'a> {
    pipe: &'a StraightPipe,
    medium: &'a Medium,
}

impl<'a> FlowRateModel<'a> {
    pub(super) fn new(pipe: &'a StraightPipe, medium: &'a Medium) -> Self {
        Self { pipe, medium }
    }
}

impl Model for FlowRateModel<'_> {
    type Input = VolumeRate;
    type Output = Trial;
    type Error = NonFinitePressureDrop;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let pressure_drop = self.pipe.pressure_drop(self.medium, *input);
        if !pressure_drop.get::<pascal>().is_finite() {
            return Err(NonFinitePressureDrop { flow_rate: *input });
        }
        Ok(Trial {
            flow_rate: *input,
            pressure_drop,
        })
    }
}

/// Equation problem for matching a target pressure drop.
///
/// Computes the residual as `target - achieved`, which is positive below the
/// solution and negative above it.
pub(super) struct FlowRateProblem {
    target: Pressure,
}

impl FlowRateProblem {
    pub(super) fn new(target: Pressure) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for FlowRateProblem {
    type Input = VolumeRate;
    type Output = Trial;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(VolumeRate::new::<cubic_meter_per_hour>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([(self.target - output.pressure_drop).get::<pascal>()])
    }
}
