use super::camera::Orbit;
use super::constants::{
    FOCUS_AZIMUTH_DEG, FOCUS_DISTANCE_M, FOCUS_POLAR_DEG, OVERLAP_BACKSTOP_MS,
    OVERLAP_DEBOUNCE_MS, SWEEP_PERIOD_MS, SWEEP_STEP_DEG,
};
use std::time::Duration;

/// Orbit sweep played after a focus.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    pub step_deg: f32,
    pub period: Duration,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            step_deg: SWEEP_STEP_DEG,
            period: Duration::from_millis(SWEEP_PERIOD_MS),
        }
    }
}

/// Runtime knobs of the hotspot controller. Defaults come from
/// `constants.rs`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerConfig {
    pub debounce: Duration,
    pub backstop: Duration,
    pub focus_orbit: Orbit,
    /// `None` disables the sweep; focus then only re-targets the camera.
    pub sweep: Option<SweepConfig>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(OVERLAP_DEBOUNCE_MS),
            backstop: Duration::from_millis(OVERLAP_BACKSTOP_MS),
            focus_orbit: Orbit {
                azimuth_deg: FOCUS_AZIMUTH_DEG,
                polar_deg: FOCUS_POLAR_DEG,
                distance_m: FOCUS_DISTANCE_M,
            },
            sweep: Some(SweepConfig::default()),
        }
    }
}
