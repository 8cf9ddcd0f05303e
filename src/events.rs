use crate::constants::{CAMERA_CHANGE_EVENT, LABEL_SELECTOR, LABEL_UPRIGHT_TRANSFORM};
use crate::dom;
use crate::frame::{SessionClock, SharedViewer};
use web_sys as web;

/// Camera movement and window resizes request a debounced overlap pass.
pub fn wire_camera_and_resize(viewer: &SharedViewer, clock: SessionClock) {
    let element = viewer.borrow().port().element.clone();

    let on_camera = viewer.clone();
    let labels_root = element.clone();
    dom::add_listener(&element, CAMERA_CHANGE_EVENT, move || {
        // The viewer may report the sweep's own orbit updates synchronously
        if let Ok(mut v) = on_camera.try_borrow_mut() {
            v.camera_changed(clock.now());
        }
        keep_labels_upright(&labels_root);
    });

    if let Some(window) = web::window() {
        let on_resize = viewer.clone();
        dom::add_listener(&window, "resize", move || {
            on_resize.borrow_mut().resized(clock.now());
        });
    }
}

// Undo any rotation the viewer applies to annotation labels
fn keep_labels_upright(root: &web::Element) {
    for label in dom::query_all(root, LABEL_SELECTOR) {
        dom::set_style(&label, "transform", LABEL_UPRIGHT_TRANSFORM);
    }
}

/// Hover/focus highlight and click-to-focus on every discovered hotspot.
pub fn wire_hotspots(viewer: &SharedViewer, clock: SessionClock) {
    let markers: Vec<web::Element> = viewer
        .borrow()
        .hotspots()
        .iter()
        .map(|h| h.marker.clone())
        .collect();

    for (index, marker) in markers.iter().enumerate() {
        for (event, active) in [
            ("mouseenter", true),
            ("mouseleave", false),
            ("focus", true),
            ("blur", false),
        ] {
            let v = viewer.clone();
            dom::add_listener(marker, event, move || v.borrow().set_active(index, active));
        }

        let v = viewer.clone();
        dom::add_listener(marker, "click", move || {
            v.borrow_mut().hotspot_clicked(index, clock.now());
        });
    }
    log::info!("[events] wired {} hotspots", markers.len());
}
