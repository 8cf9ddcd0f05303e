// Page contract: element ids, selectors and classes the front-end relies on.

// Elements looked up by id at startup
pub const VIEWER_ID: &str = "modelViewer";
pub const LEGEND_ID: &str = "legend";
pub const LEGEND_TOGGLE_ID: &str = "legendToggle";

// Hotspot markup inside the viewer
pub const HOTSPOT_SELECTOR: &str = ".Hotspot";
pub const LABEL_SELECTOR: &str = ".HotspotAnnotation";

// Viewer properties and events
pub const CAMERA_ORBIT_PROP: &str = "cameraOrbit";
pub const CAMERA_TARGET_PROP: &str = "cameraTarget";
pub const CAMERA_CHANGE_EVENT: &str = "camera-change";

// Labels must stay upright whatever the camera does
pub const LABEL_UPRIGHT_TRANSFORM: &str =
    "translateY(-50%) rotateZ(0deg) rotateX(0deg) rotateY(0deg)";

// Legend
pub const LEGEND_ITEM_CLASS: &str = "legend-item";
pub const LEGEND_COLOR_CLASS: &str = "legend-item-color";
pub const LEGEND_ICON_CLASS: &str = "legend-item-icon";
pub const LEGEND_COLLAPSED_CLASS: &str = "collapsed";
pub const LEGEND_GLYPH_EXPANDED: &str = "▼";
pub const LEGEND_GLYPH_COLLAPSED: &str = "▲";
