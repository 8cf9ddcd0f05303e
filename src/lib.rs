#![cfg(target_arch = "wasm32")]
use crate::core::{GymViewer, RoomCatalog, ViewerConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod legend;
mod viewer;

use constants::{LEGEND_ID, VIEWER_ID};
use viewer::DomViewer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gym-floorplan starting");

    spawn_local(async move {
        if let Err(e) = init(ViewerConfig::default()).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init(config: ViewerConfig) -> anyhow::Result<()> {
    let catalog = RoomCatalog::gym()?;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // A page without the viewer or the legend simply has no hotspot feature
    let (Some(viewer_el), Some(legend_el)) = (
        document.get_element_by_id(VIEWER_ID),
        document.get_element_by_id(LEGEND_ID),
    ) else {
        log::warn!("#{} or #{} missing; hotspots disabled", VIEWER_ID, LEGEND_ID);
        return Ok(());
    };

    legend::build(&document, &legend_el, &catalog)?;
    legend::wire_toggle(&document, &legend_el);

    let clock = frame::SessionClock::start();
    let viewer = Rc::new(RefCell::new(GymViewer::new(
        DomViewer::new(viewer_el),
        catalog,
        config,
        clock.now(),
    )));

    events::wire_camera_and_resize(&viewer, clock);
    events::wire_hotspots(&viewer, clock);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        viewer,
        clock,
        passes: 0,
    })));
    log::info!("gym-floorplan ready");
    Ok(())
}
