use crate::core::GymViewer;
use crate::viewer::DomViewer;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedViewer = Rc<RefCell<GymViewer<DomViewer>>>;

/// Session time base shared by event handlers and the frame loop.
#[derive(Clone, Copy)]
pub struct SessionClock {
    started: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }
}

pub struct FrameContext {
    pub viewer: SharedViewer,
    pub clock: SessionClock,
    pub passes: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now();
        // Handlers may hold the viewer briefly; skip this frame rather than panic
        let Ok(mut viewer) = self.viewer.try_borrow_mut() else {
            return;
        };
        if viewer.frame(now) {
            self.passes += 1;
            if self.passes % 100 == 0 {
                log::debug!("[frame] {} overlap passes", self.passes);
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
