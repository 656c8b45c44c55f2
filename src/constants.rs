// DOM contract with the hosting page.

// Root element id when the page does not pass one to `mount`.
pub const ROOT_ID: &str = "liquid-cursor";

// Anchors looked up inside the root. The root itself is only measured; parallax
// moves the stage so the measurement stays stable.
pub const STAGE_SELECTOR: &str = "[data-liquid=\"stage\"]";
pub const BODY_SELECTOR: &str = "[data-liquid=\"body\"]";
pub const TAIL_SELECTOR: &str = "[data-liquid=\"tail\"]";
pub const GLOW_SELECTOR: &str = "[data-liquid=\"glow\"]";
pub const FLASH_SELECTOR: &str = "[data-liquid=\"flash\"]"; // HTML wrapper around the bolt svg
pub const BOLT_SELECTORS: [&str; 3] = [
    "[data-liquid=\"bolt-0\"]",
    "[data-liquid=\"bolt-1\"]",
    "[data-liquid=\"bolt-2\"]",
];

// Optional tuning overrides read from the root element.
pub const ATTR_BODY_RADIUS: &str = "data-body-radius";
pub const ATTR_MARGIN: &str = "data-margin";
pub const ATTR_REACTION_DELAY: &str = "data-reaction-delay";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Upper bound for numeric overrides; anything larger is treated as a typo.
pub const MAX_OVERRIDE_VALUE: f32 = 10_000.0;
