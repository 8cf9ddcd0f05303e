use super::geometry::ScreenRect;

/// Narrow view of the host 3D viewer and the page around it.
///
/// The core never owns the elements behind `Element`; it only reads
/// geometry and attributes from them and toggles class flags. The wasm build
/// implements this over `web_sys::Element`, tests over a scripted fake.
pub trait ViewerPort {
    type Element: Clone;

    /// Hotspot marker elements in document order.
    fn markers(&self) -> Vec<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// The label sub-element of a marker, if it has one.
    fn label_of(&self, marker: &Self::Element) -> Option<Self::Element>;

    /// Whether the element currently has a rendering box (not `display:none`,
    /// not detached).
    fn is_laid_out(&self, element: &Self::Element) -> bool;

    fn bounding_rect(&self, element: &Self::Element) -> ScreenRect;

    fn set_flag(&self, element: &Self::Element, flag: &str, on: bool);

    /// `"<azimuth>deg <polar>deg <distance>m"`
    fn set_camera_orbit(&self, orbit: &str);

    /// `"<x>m <y>m <z>m"`
    fn set_camera_target(&self, target: &str);
}
