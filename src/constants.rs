//! Sizing, color, and behavior constants for the slider.

/// Default track height for the floem view
pub const SLIDER_HEIGHT: f32 = 22.0;

/// Inset of the knob circle inside its square
pub const KNOB_INSET: f64 = 2.0;

/// Bezel margin of the thin (lined) track
pub const LINED_BEZEL_MARGIN: f64 = 8.0;

/// Blur radius of the knob shadow
pub const KNOB_SHADOW_BLUR: f64 = 1.0;

/// Width of the knob outline stroke
pub const KNOB_STROKE_WIDTH: f64 = 0.5;

/// Width of the frame stroked around the gradient track
pub const FRAME_STROKE_WIDTH: f64 = 1.0;

/// Keyboard steps across the full range
pub const KEY_STEP_DIVISIONS: f64 = 20.0;

/// Kelvin offset applied to every temperature sweep sample
pub const TEMPERATURE_SWEEP_OFFSET: i32 = 500;

/// Temperature bounds used when only the palette kind is known
pub const DEFAULT_MIN_KELVIN: i32 = 2000;
pub const DEFAULT_MAX_KELVIN: i32 = 6500;

/// System gray → light gray → white ramp for dimmers
pub const DIMMABLE_RAMP: [(u8, u8, u8); 3] = [(142, 142, 147), (204, 204, 204), (255, 255, 255)];

/// Saturation ratio applied to colors of a disabled slider
pub const DISABLED_DIMMING_RATIO: f64 = 0.1;

/// Range variant: vertical room kept for the bar shadow
pub const VERTICAL_SHADOW_PADDING: f64 = 3.0;

/// Range variant: gap between the bar and the trailing edge
pub const BAR_TRAILING_MARGIN: f64 = 1.0;

/// Range variant: default square bar width
pub const BAR_WIDTH: f64 = 8.0;

/// Range variant: height of the idle background strip
pub const IDLE_BACKGROUND_HEIGHT: f64 = 3.0;

/// Range variant: bar outline width
pub const BAR_STROKE_WIDTH: f64 = 0.25;

/// Range variant: bar shadow blur and downward offset
pub const BAR_SHADOW_BLUR: f64 = 1.0;
pub const BAR_SHADOW_OFFSET: f64 = 0.5;

/// Range variant: opacity of the plain bar shadow
pub const BAR_SHADOW_ALPHA: f64 = 0.12;
