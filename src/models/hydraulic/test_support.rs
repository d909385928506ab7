use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{Length, MassDensity, VolumeRate},
    length::{meter, millimeter},
    mass_density::kilogram_per_cubic_meter,
    volume_rate::cubic_meter_per_hour,
};

use crate::support::hydraulics::{KinematicViscosity, Medium};

use super::{
    corrugated_pipe::{CorrugatedPipe, Corrugation},
    pipe::StraightPipe,
};

/// Water at 25 °C and 1 atm.
pub(super) fn water_25c() -> Medium {
    Medium::new(
        MassDensity::new::<kilogram_per_cubic_meter>(997.048_031_971_738_4),
        KinematicViscosity::new::<square_meter_per_second>(0.892_717_478_869_225_7e-6),
    )
    .unwrap()
}

/// Pool circulation pipe: d = 45.2 mm, L = 2.6 m, k = 0.05 mm.
pub(super) fn pool_pipe() -> StraightPipe {
    StraightPipe::new(mm(45.2), Length::new::<meter>(2.6), mm(0.05)).unwrap()
}

/// Corrugated hose: d = 38 mm, L = 2.6 m, k = 0.05 mm, with the given
/// wave height and wave distance in millimetres.
pub(super) fn corrugated_hose(wave_height: f64, wave_distance: f64) -> CorrugatedPipe {
    CorrugatedPipe::new(
        StraightPipe::new(mm(38.0), Length::new::<meter>(2.6), mm(0.05)).unwrap(),
        Corrugation::new(mm(wave_height), mm(wave_distance), None).unwrap(),
    )
}

pub(super) fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

pub(super) fn m3h(value: f64) -> VolumeRate {
    VolumeRate::new::<cubic_meter_per_hour>(value)
}
