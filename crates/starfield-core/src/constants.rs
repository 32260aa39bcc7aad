// Starfield tuning constants shared by the simulation and any frontend.

// Defaults for caller-supplied configuration
pub const DEFAULT_RESISTANCE: f64 = 150.0; // pointer delta divisor; larger = less reactive
pub const DEFAULT_STAR_COUNT: f64 = 12.0; // density divisor; larger = sparser field

// Star appearance
pub const STAR_COLOR: &str = "#ffffff";
pub const BASE_SIZE: f64 = 2.0; // diameter in CSS px at z = 1
pub const STAR_MIN_SCALE: f64 = 0.2; // lower bound of a freshly spawned depth
pub const ALPHA_MIN: f64 = 0.5; // alpha is drawn from [ALPHA_MIN, 1.0]

// Field geometry
pub const OVERFLOW_THRESHOLD: f64 = 50.0; // px a star may travel past an edge before recycling
pub const FAR_DEPTH: f64 = 0.1; // depth assigned on an idle (depth) recycle

// Motion
pub const DEPTH_DRIFT: f64 = 0.0005; // constant forward drift added to z every frame
pub const TARGET_DECAY: f64 = 0.90; // per-frame decay of the input target velocity
pub const VELOCITY_EASE: f64 = 0.8; // fraction of the gap to target closed per frame
pub const IDLE_VELOCITY: f64 = 1.0; // at or below this on both axes the field counts as idle
