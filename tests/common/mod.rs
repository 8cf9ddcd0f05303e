// Shared host-side harness. The main crate is wasm-only, so the pure core
// modules are included directly and driven through a scripted viewer.

#![allow(dead_code, unused_imports)]

pub mod core {
    pub mod camera {
        include!("../../src/core/camera.rs");
    }
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod controller {
        include!("../../src/core/controller.rs");
    }
    pub mod geometry {
        include!("../../src/core/geometry.rs");
    }
    pub mod overlap {
        include!("../../src/core/overlap.rs");
    }
    pub mod port {
        include!("../../src/core/port.rs");
    }
    pub mod registry {
        include!("../../src/core/registry.rs");
    }
    pub mod rooms {
        include!("../../src/core/rooms.rs");
    }
    pub mod schedule {
        include!("../../src/core/schedule.rs");
    }

    pub use camera::*;
    pub use config::*;
    pub use controller::*;
    pub use geometry::*;
    pub use overlap::{detect, OverlapReport};
    pub use port::*;
    pub use registry::*;
    pub use rooms::*;
    pub use schedule::*;
}

use self::core::{ScreenRect, ViewerPort};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, Default)]
struct FakeElement {
    attrs: HashMap<String, String>,
    label: Option<usize>,
    laid_out: bool,
    rect: ScreenRect,
    flags: HashSet<String>,
}

/// Scripted stand-in for the page: elements are indices, geometry and
/// visibility are set by the test, camera writes are recorded.
#[derive(Default)]
pub struct FakePort {
    elements: RefCell<Vec<FakeElement>>,
    markers: Vec<usize>,
    pub orbits: RefCell<Vec<String>>,
    pub targets: RefCell<Vec<String>>,
    pub flag_writes: RefCell<usize>,
}

impl FakePort {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, el: FakeElement) -> usize {
        let mut els = self.elements.borrow_mut();
        els.push(el);
        els.len() - 1
    }

    /// Add a marker. `label` of `None` means the marker has no label child.
    /// Returns the marker handle.
    pub fn add_marker(
        &mut self,
        room_id: Option<&str>,
        position: Option<&str>,
        label: Option<ScreenRect>,
    ) -> usize {
        let label = label.map(|rect| {
            self.push(FakeElement {
                laid_out: true,
                rect,
                ..Default::default()
            })
        });
        let mut attrs = HashMap::new();
        if let Some(id) = room_id {
            attrs.insert("data-room-id".to_string(), id.to_string());
        }
        if let Some(p) = position {
            attrs.insert("data-position".to_string(), p.to_string());
        }
        let marker = self.push(FakeElement {
            attrs,
            label,
            laid_out: true,
            ..Default::default()
        });
        self.markers.push(marker);
        marker
    }

    /// Marker with a visible label at `rect`.
    pub fn add_hotspot(&mut self, room_id: &str, rect: ScreenRect) -> usize {
        self.add_marker(Some(room_id), Some("0m 0m 0m"), Some(rect))
    }

    fn label(&self, marker: usize) -> usize {
        self.elements.borrow()[marker]
            .label
            .expect("marker has a label")
    }

    pub fn move_label(&self, marker: usize, rect: ScreenRect) {
        let l = self.label(marker);
        self.elements.borrow_mut()[l].rect = rect;
    }

    pub fn hide_label(&self, marker: usize, hidden: bool) {
        let l = self.label(marker);
        self.elements.borrow_mut()[l].laid_out = !hidden;
    }

    pub fn has_flag(&self, element: usize, flag: &str) -> bool {
        self.elements.borrow()[element].flags.contains(flag)
    }

    pub fn is_overlapping(&self, marker: usize) -> bool {
        self.has_flag(marker, "overlapping")
    }

    pub fn last_orbit(&self) -> Option<String> {
        self.orbits.borrow().last().cloned()
    }

    pub fn last_target(&self) -> Option<String> {
        self.targets.borrow().last().cloned()
    }
}

impl ViewerPort for FakePort {
    type Element = usize;

    fn markers(&self) -> Vec<usize> {
        self.markers.clone()
    }

    fn attribute(&self, element: &usize, name: &str) -> Option<String> {
        self.elements.borrow()[*element].attrs.get(name).cloned()
    }

    fn label_of(&self, marker: &usize) -> Option<usize> {
        self.elements.borrow()[*marker].label
    }

    fn is_laid_out(&self, element: &usize) -> bool {
        self.elements.borrow()[*element].laid_out
    }

    fn bounding_rect(&self, element: &usize) -> ScreenRect {
        self.elements.borrow()[*element].rect
    }

    fn set_flag(&self, element: &usize, flag: &str, on: bool) {
        *self.flag_writes.borrow_mut() += 1;
        let mut els = self.elements.borrow_mut();
        if on {
            els[*element].flags.insert(flag.to_string());
        } else {
            els[*element].flags.remove(flag);
        }
    }

    fn set_camera_orbit(&self, orbit: &str) {
        self.orbits.borrow_mut().push(orbit.to_string());
    }

    fn set_camera_target(&self, target: &str) {
        self.targets.borrow_mut().push(target.to_string());
    }
}

pub fn rect(left: f64, top: f64, right: f64, bottom: f64) -> ScreenRect {
    ScreenRect::from_edges(left, top, right, bottom)
}
