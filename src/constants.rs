/// Tilt, easing and flip tuning constants.
///
/// These constants express intended behavior (clamp limits, easing rates,
/// lock windows) and keep magic numbers out of the engine code.
// Tilt range (degrees, per axis)
pub const MAX_TILT_FINE_DEG: f32 = 15.0;
pub const MAX_TILT_COARSE_DEG: f32 = 6.0;
pub const MAX_TILT_LIMIT_DEG: f32 = 90.0; // upper bound accepted from config

// Easing loop
pub const EASE_FRAME_MS: f32 = 16.0; // nominal frame period the rate is tuned for
pub const EASE_RATE: f32 = 0.15; // fraction of the remaining distance per nominal frame
pub const EASE_SNAP_DEG: f32 = 0.1; // snap to target once closer than this

// Flip
pub const FLIP_LOCK_MS: u64 = 600; // tilt suppressed for this long after a click
pub const FLIP_ROTATION_CSS: &str = "transform 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94)";

// Pointer position (percent of card bounds)
pub const POSITION_MIN: f32 = 0.0;
pub const POSITION_MAX: f32 = 100.0;
pub const POSITION_CENTER: f32 = 50.0;

// Holographic derivation
pub const TILT_INTENSITY_RANGE_DEG: f32 = 30.0; // |tiltX| + |tiltY| at full fine-pointer tilt
pub const LINEAR_ANGLE_PER_PERCENT: f32 = 3.6; // 0..100 maps to a full turn
pub const SHEEN_ANGLE_PER_PERCENT: f32 = 2.0;
pub const SHEEN_ALPHA_BASE: f32 = 0.25;
pub const SHEEN_ALPHA_DIVISOR: f32 = 120.0;
pub const FADE_OUT_CSS: &str = "background 0.15s ease-out";

// Palette (rgb)
pub const HOLO_MINT: [u8; 3] = [117, 160, 155];
pub const HOLO_TEAL: [u8; 3] = [30, 121, 117];
pub const HOLO_SLATE: [u8; 3] = [60, 110, 121];
pub const HOLO_DEEP: [u8; 3] = [3, 58, 83];
pub const SHEEN_WHITE: [u8; 3] = [255, 255, 255];

// Host page contract
pub const CARD_ID: &str = "holo-card";
pub const CARD_INNER_ID: &str = "holo-card-inner";
pub const FRONT_SELECTOR: &str = ".holo-front";
pub const BACK_SELECTOR: &str = ".holo-back";
pub const SHEEN_SELECTOR: &str = ".holo-sheen";
pub const NO_FLIP_SELECTOR: &str = "a, [data-no-flip]";
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";
