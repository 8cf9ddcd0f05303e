use super::constants::{
    FOCUS_AZIMUTH_DEG, FOCUS_DISTANCE_M, FOCUS_POLAR_DEG, SWEEP_FULL_TURN_DEG, SWEEP_PERIOD_MS,
    SWEEP_STEP_DEG,
};
use super::port::ViewerPort;
use super::registry::Hotspot;
use glam::DVec3;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnchorError {
    #[error("hotspot has no position")]
    Missing,
    #[error("expected three components \"Xm Ym Zm\", got {0:?}")]
    Arity(String),
    #[error("component {0:?} is not a metre value")]
    Component(String),
}

/// Parse a viewer position string such as `"1.5m 0m -2m"`.
pub fn parse_anchor(s: &str) -> Result<DVec3, AnchorError> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(AnchorError::Arity(s.to_string()));
    }
    let mut xyz = [0.0_f64; 3];
    for (slot, part) in xyz.iter_mut().zip(&parts) {
        let value = part
            .strip_suffix('m')
            .and_then(|n| n.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .ok_or_else(|| AnchorError::Component(part.to_string()))?;
        *slot = value;
    }
    Ok(DVec3::from_array(xyz))
}

/// Viewer camera orbit: azimuth/polar angles and distance to the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    pub azimuth_deg: f32,
    pub polar_deg: f32,
    pub distance_m: f32,
}

impl Orbit {
    pub fn to_attr(&self) -> String {
        format!(
            "{}deg {}deg {}m",
            self.azimuth_deg, self.polar_deg, self.distance_m
        )
    }
}

#[inline]
pub fn target_attr(target: DVec3) -> String {
    format!("{}m {}m {}m", target.x, target.y, target.z)
}

/// What a focus sent to the viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraCommand {
    pub orbit: Orbit,
    pub target: DVec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraDirector {
    pub focus_orbit: Orbit,
}

impl Default for CameraDirector {
    fn default() -> Self {
        Self {
            focus_orbit: Orbit {
                azimuth_deg: FOCUS_AZIMUTH_DEG,
                polar_deg: FOCUS_POLAR_DEG,
                distance_m: FOCUS_DISTANCE_M,
            },
        }
    }
}

impl CameraDirector {
    pub fn new(focus_orbit: Orbit) -> Self {
        Self { focus_orbit }
    }

    /// Point the camera at the hotspot's anchor. A hotspot without a usable
    /// position leaves the camera untouched.
    pub fn focus<P: ViewerPort>(
        &self,
        port: &P,
        hotspot: &Hotspot<P::Element>,
    ) -> Option<CameraCommand> {
        let target = match hotspot.anchor() {
            Ok(t) => t,
            Err(e) => {
                log::debug!("[camera] no focus for '{}': {}", hotspot.room_id, e);
                return None;
            }
        };
        port.set_camera_orbit(&self.focus_orbit.to_attr());
        port.set_camera_target(&target_attr(target));
        Some(CameraCommand {
            orbit: self.focus_orbit,
            target,
        })
    }
}

/// One full azimuth turn around the focused target, stepped on a fixed
/// period and finishing back at 0°.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitSweep {
    base: Orbit,
    step_deg: f32,
    period: Duration,
    azimuth_deg: f32,
    next_step: Duration,
    finished: bool,
}

impl OrbitSweep {
    pub fn new(base: Orbit, now: Duration) -> Self {
        Self::with_step(
            base,
            SWEEP_STEP_DEG,
            Duration::from_millis(SWEEP_PERIOD_MS),
            now,
        )
    }

    pub fn with_step(base: Orbit, step_deg: f32, period: Duration, now: Duration) -> Self {
        Self {
            base,
            step_deg,
            period,
            azimuth_deg: 0.0,
            next_step: now + period,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Apply every step due by `now` and return the orbit to show, if it
    /// changed. Late frames catch up by several steps at once.
    pub fn advance(&mut self, now: Duration) -> Option<Orbit> {
        if self.finished || now < self.next_step || self.period.is_zero() {
            return None;
        }
        while !self.finished && now >= self.next_step {
            self.azimuth_deg += self.step_deg;
            self.next_step += self.period;
            if self.azimuth_deg >= SWEEP_FULL_TURN_DEG {
                self.azimuth_deg = 0.0;
                self.finished = true;
            }
        }
        Some(Orbit {
            azimuth_deg: self.azimuth_deg,
            ..self.base
        })
    }
}
