use crate::constants::*;
use crate::style::parse_override;
use liquid_core::{EffectConfig, Geometry, MountError, Vec2};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Read once at setup.
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Every element the effect writes to. All of them must exist or nothing mounts.
pub struct Anchors {
    pub root: web::HtmlElement,
    pub stage: web::HtmlElement,
    pub body: web::HtmlElement,
    pub tail: web::HtmlElement,
    pub glow: web::HtmlElement,
    pub flash: web::HtmlElement,
    pub bolts: [web::Element; 3],
}

impl Anchors {
    pub fn locate(document: &web::Document, root_id: &str) -> Result<Self, MountError> {
        let root = document
            .get_element_by_id(root_id)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .ok_or(MountError::MissingAnchor("root"))?;
        let [b0, b1, b2] = BOLT_SELECTORS;
        Ok(Self {
            stage: html_in(&root, STAGE_SELECTOR, "stage")?,
            body: html_in(&root, BODY_SELECTOR, "body")?,
            tail: html_in(&root, TAIL_SELECTOR, "tail")?,
            glow: html_in(&root, GLOW_SELECTOR, "glow")?,
            flash: html_in(&root, FLASH_SELECTOR, "flash")?,
            bolts: [
                element_in(&root, b0, "bolt-0")?,
                element_in(&root, b1, "bolt-1")?,
                element_in(&root, b2, "bolt-2")?,
            ],
            root,
        })
    }
}

fn element_in(
    root: &web::HtmlElement,
    selector: &str,
    name: &'static str,
) -> Result<web::Element, MountError> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .ok_or(MountError::MissingAnchor(name))
}

fn html_in(
    root: &web::HtmlElement,
    selector: &str,
    name: &'static str,
) -> Result<web::HtmlElement, MountError> {
    element_in(root, selector, name)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| MountError::MissingAnchor(name))
}

/// Viewport size and the root's center in client coordinates, plus its radius.
pub fn measure(window: &web::Window, root: &web::HtmlElement) -> (Geometry, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let rect = root.get_bounding_client_rect();
    let center = Vec2::new(
        (rect.left() + rect.width() * 0.5) as f32,
        (rect.top() + rect.height() * 0.5) as f32,
    );
    let radius = (rect.width().min(rect.height()) * 0.5) as f32;
    (Geometry::new(Vec2::new(w, h), center), radius)
}

/// Defaults, the measured container radius, then any `data-*` overrides on the root.
pub fn read_config(root: &web::HtmlElement, container_radius: f32) -> EffectConfig {
    let mut config = EffectConfig::default();
    if container_radius > 0.0 {
        config = config.with_container_radius(container_radius);
    }
    if let Some(v) = read_attr(root, ATTR_BODY_RADIUS) {
        config.body_radius = v;
    }
    if let Some(v) = read_attr(root, ATTR_MARGIN) {
        config.margin = v;
    }
    if let Some(v) = read_attr(root, ATTR_REACTION_DELAY) {
        config.reaction_delay_ms = v as f64;
    }
    config
}

fn read_attr(root: &web::HtmlElement, name: &str) -> Option<f32> {
    let raw = root.get_attribute(name)?;
    let parsed = parse_override(Some(&raw), MAX_OVERRIDE_VALUE);
    if parsed.is_none() {
        log::warn!("[liquid] ignoring {}=\"{}\"", name, raw);
    }
    parsed
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}
