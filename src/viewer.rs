use crate::constants::{CAMERA_ORBIT_PROP, CAMERA_TARGET_PROP, HOTSPOT_SELECTOR, LABEL_SELECTOR};
use crate::core::{ScreenRect, ViewerPort};
use crate::dom;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`ViewerPort`] over the page's `<model-viewer>` element.
#[derive(Clone)]
pub struct DomViewer {
    pub element: web::Element,
}

impl DomViewer {
    pub fn new(element: web::Element) -> Self {
        Self { element }
    }

    fn set_property(&self, name: &str, value: &str) {
        if let Err(e) = js_sys::Reflect::set(
            &self.element,
            &JsValue::from_str(name),
            &JsValue::from_str(value),
        ) {
            log::warn!("[viewer] failed to set {}: {:?}", name, e);
        }
    }
}

impl ViewerPort for DomViewer {
    type Element = web::Element;

    fn markers(&self) -> Vec<web::Element> {
        dom::query_all(&self.element, HOTSPOT_SELECTOR)
    }

    fn attribute(&self, element: &web::Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn label_of(&self, marker: &web::Element) -> Option<web::Element> {
        marker.query_selector(LABEL_SELECTOR).ok().flatten()
    }

    fn is_laid_out(&self, element: &web::Element) -> bool {
        // offsetParent is null for display:none and detached elements
        element
            .dyn_ref::<web::HtmlElement>()
            .and_then(|h| h.offset_parent())
            .is_some()
    }

    fn bounding_rect(&self, element: &web::Element) -> ScreenRect {
        let r = element.get_bounding_client_rect();
        ScreenRect {
            left: r.left(),
            top: r.top(),
            right: r.right(),
            bottom: r.bottom(),
            width: r.width(),
            height: r.height(),
        }
    }

    fn set_flag(&self, element: &web::Element, flag: &str, on: bool) {
        let cl = element.class_list();
        _ = if on { cl.add_1(flag) } else { cl.remove_1(flag) };
    }

    fn set_camera_orbit(&self, orbit: &str) {
        self.set_property(CAMERA_ORBIT_PROP, orbit);
    }

    fn set_camera_target(&self, target: &str) {
        self.set_property(CAMERA_TARGET_PROP, target);
    }
}
