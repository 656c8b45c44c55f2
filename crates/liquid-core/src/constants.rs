// Tuning constants for the liquid cursor. `EffectConfig::default()` is built from these.

// Frame pacing
pub const REFERENCE_FRAME_SEC: f64 = 1.0 / 60.0; // all per-tick factors are expressed at 60 Hz
pub const MAX_FRAME_RATIO: f32 = 3.0; // a long stall advances at most three reference ticks

// Geometry (CSS px)
pub const CONTAINER_RADIUS: f32 = 120.0;
pub const BODY_RADIUS: f32 = 26.0;
pub const CONTAINMENT_MARGIN: f32 = 10.0;

// Body integration
pub const POSITION_SMOOTHING: f32 = 0.014; // exponential pull toward the target per tick
pub const MAX_STEP: f32 = 0.37; // hard displacement cap per tick
pub const FLOW_SMOOTHING: f32 = 0.06; // heading blend per tick
pub const SPEED_EPSILON: f32 = 1e-4; // below this the heading keeps the previous flow

// Proximity and contact
pub const REACH_DISTANCE: f32 = 46.0;
pub const CONTACT_BASE: f32 = 0.9;
pub const CONTACT_MOTION_GAIN: f32 = 0.08;

// Flash
pub const FLASH_DECAY: f32 = 0.92;
pub const FLASH_COOLDOWN_MIN_SEC: f64 = 1.0;
pub const FLASH_COOLDOWN_SPAN_SEC: f64 = 1.4;

// Input
pub const REACTION_DELAY_MS: f64 = 240.0;
pub const POINTER_PARALLAX_RANGE: f32 = 12.0; // px at the viewport edge
pub const POINTER_PARALLAX_SMOOTHING: f32 = 0.08;
pub const SCROLL_PARALLAX_GAIN: f32 = 0.25;
pub const SCROLL_PARALLAX_MAX: f32 = 90.0;
pub const SCROLL_PARALLAX_SMOOTHING: f32 = 0.12;

// Body shape
pub const BODY_STRETCH_GAIN: f32 = 0.28; // along flow
pub const BODY_SQUASH_GAIN: f32 = 0.16; // across flow
pub const BODY_TAPER_PCT: f32 = 14.0; // trailing corner radius loss at full motion
pub const BODY_MOTION_BLUR_PX: f32 = 0.6;

// Tail
pub const TAIL_OPACITY_FLOOR: f32 = 0.12;
pub const TAIL_OPACITY_SPAN: f32 = 0.48;
pub const TAIL_LAG_BASE: f32 = 0.3; // body radii behind the body at rest
pub const TAIL_LAG_SPAN: f32 = 0.6;

// Glow
pub const GLOW_FOLLOW: f32 = 0.85; // glow trails the body slightly toward the center
pub const GLOW_BASE_OPACITY: f32 = 0.18;
pub const GLOW_BASE_BLUR_PX: f32 = 14.0;

// Bolts, in the 100x100 flash viewBox
pub const BOLT_COUNT: usize = 3;
pub const BOLT_SEGMENTS: [usize; BOLT_COUNT] = [4, 3, 3];
pub const BOLT_BASE_STEP: f32 = 14.0;
pub const BOLT_STEP_FALLOFF: f32 = 0.78;
pub const BOLT_BASE_SPREAD: f32 = 9.0;
pub const BOLT_SPREAD_FALLOFF: f32 = 0.8;
pub const BOLT_DROP_MIN: f32 = 0.75;
pub const BOLT_DROP_MAX: f32 = 1.45;
pub const BOLT_SEED_X: (f32, f32) = (30.0, 70.0);
pub const BOLT_SEED_Y: (f32, f32) = (6.0, 20.0);
pub const BOLT_SEED_JITTER: [f32; 2] = [6.0, 4.0];
