// Timing and camera tuning constants for hotspot handling.
//
// Detection is cheap but not free, so camera drags are collapsed into one
// pass after the camera settles, and a slow backstop catches layout changes
// no event covers.
// Quiet period after the last camera-change/resize before a detection pass
pub const OVERLAP_DEBOUNCE_MS: u64 = 100;

// Unconditional detection period for the whole session
pub const OVERLAP_BACKSTOP_MS: u64 = 500;

// Camera pose used when focusing a hotspot
pub const FOCUS_AZIMUTH_DEG: f32 = 0.0;
pub const FOCUS_POLAR_DEG: f32 = 75.0;
pub const FOCUS_DISTANCE_M: f32 = 50.0;

// Orbit sweep after a focus: one full turn, SWEEP_STEP_DEG every SWEEP_PERIOD_MS
pub const SWEEP_STEP_DEG: f32 = 2.0;
pub const SWEEP_PERIOD_MS: u64 = 30;
pub const SWEEP_FULL_TURN_DEG: f32 = 360.0;

// Marker attributes and the class flags toggled on markers
pub const ROOM_ID_ATTR: &str = "data-room-id";
pub const POSITION_ATTR: &str = "data-position";
pub const OVERLAPPING_FLAG: &str = "overlapping";
pub const ACTIVE_FLAG: &str = "active";
