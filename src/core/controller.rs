use super::camera::{CameraCommand, CameraDirector, OrbitSweep};
use super::config::ViewerConfig;
use super::constants::ACTIVE_FLAG;
use super::overlap::{self, OverlapReport};
use super::port::ViewerPort;
use super::registry::HotspotRegistry;
use super::rooms::RoomCatalog;
use super::schedule::OverlapSchedule;
use std::time::Duration;

/// Hotspot behaviour on top of a viewer: scheduled overlap passes, focus on
/// click and the optional orbit sweep.
///
/// All entry points take `now` as the time since the session started; the
/// frame loop calls [`GymViewer::frame`] and event handlers call the rest.
pub struct GymViewer<P: ViewerPort> {
    port: P,
    config: ViewerConfig,
    catalog: RoomCatalog,
    registry: HotspotRegistry<P::Element>,
    schedule: OverlapSchedule,
    director: CameraDirector,
    sweep: Option<OrbitSweep>,
    last_report: OverlapReport,
}

impl<P: ViewerPort> GymViewer<P> {
    pub fn new(port: P, catalog: RoomCatalog, config: ViewerConfig, now: Duration) -> Self {
        let registry = HotspotRegistry::discover(&port, &catalog);
        Self {
            schedule: OverlapSchedule::new(config.debounce, config.backstop, now),
            director: CameraDirector::new(config.focus_orbit),
            port,
            config,
            catalog,
            registry,
            sweep: None,
            last_report: OverlapReport::default(),
        }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn hotspots(&self) -> &HotspotRegistry<P::Element> {
        &self.registry
    }

    pub fn last_report(&self) -> &OverlapReport {
        &self.last_report
    }

    pub fn is_sweeping(&self) -> bool {
        self.sweep.as_ref().is_some_and(|s| !s.is_finished())
    }

    pub fn camera_changed(&mut self, now: Duration) {
        self.schedule.camera_changed(now);
    }

    pub fn resized(&mut self, now: Duration) {
        self.schedule.resized(now);
    }

    /// Run whatever is due: at most one overlap pass and the sweep steps.
    /// Returns true when an overlap pass ran.
    pub fn frame(&mut self, now: Duration) -> bool {
        let sweep_done = match &mut self.sweep {
            Some(sweep) => {
                if let Some(orbit) = sweep.advance(now) {
                    self.port.set_camera_orbit(&orbit.to_attr());
                }
                sweep.is_finished()
            }
            None => false,
        };
        if sweep_done {
            self.sweep = None;
        }
        if self.schedule.due(now) {
            self.detect_now();
            return true;
        }
        false
    }

    pub fn detect_now(&mut self) -> &OverlapReport {
        self.last_report = overlap::detect(&self.port, self.registry.as_slice());
        &self.last_report
    }

    /// Log the selected room, focus the camera on it and start the sweep.
    pub fn hotspot_clicked(&mut self, index: usize, now: Duration) -> Option<CameraCommand> {
        let hotspot = self.registry.get(index)?;
        match self.registry.room_of(index, &self.catalog) {
            Some(room) => log::info!("Room selected: {} ({})", room.name, room.id),
            None => log::info!("Room selected: {}", hotspot.room_id),
        }
        let command = self.director.focus(&self.port, hotspot)?;
        self.sweep = self
            .config
            .sweep
            .map(|s| OrbitSweep::with_step(command.orbit, s.step_deg, s.period, now));
        Some(command)
    }

    /// Hover/keyboard-focus highlight.
    pub fn set_active(&self, index: usize, active: bool) {
        if let Some(h) = self.registry.get(index) {
            self.port.set_flag(&h.marker, ACTIVE_FLAG, active);
        }
    }
}
