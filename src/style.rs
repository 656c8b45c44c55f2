use liquid_core::{LayerStyle, Vec2};

// CSS strings for the numeric layer styles. Kept free of web-sys so it can be
// tested on the host.

#[inline]
pub fn transform(style: &LayerStyle) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) rotate({:.2}deg) scale({:.3}, {:.3})",
        style.offset.x, style.offset.y, style.rotation_deg, style.scale.x, style.scale.y
    )
}

#[inline]
pub fn border_radius(style: &LayerStyle) -> String {
    let [tl, tr, br, bl] = style.corner_radii;
    format!("{tl:.1}% {tr:.1}% {br:.1}% {bl:.1}%")
}

#[inline]
pub fn filter(style: &LayerStyle) -> String {
    format!(
        "blur({:.2}px) brightness({:.3})",
        style.blur_px.max(0.0),
        style.brightness.max(0.0)
    )
}

#[inline]
pub fn opacity(style: &LayerStyle) -> String {
    format!("{:.3}", style.opacity.clamp(0.0, 1.0))
}

#[inline]
pub fn stage_transform(parallax: Vec2, scroll_offset: f32) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0)",
        parallax.x,
        parallax.y + scroll_offset
    )
}

/// Parse a numeric attribute override; rejects negatives, non-finite and absurd values.
pub fn parse_override(raw: Option<&str>, max: f32) -> Option<f32> {
    let v: f32 = raw?.trim().trim_end_matches("px").trim().parse().ok()?;
    (v.is_finite() && (0.0..=max).contains(&v)).then_some(v)
}
