#![cfg(target_arch = "wasm32")]
use liquid_core::{Controller, MountError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("liquid-web loaded");
    Ok(())
}

/// Handle the hosting page keeps while the effect is mounted.
#[wasm_bindgen]
pub struct LiquidCursor {
    controller: frame::SharedController,
    listeners: events::Listeners,
    slots: frame::CallbackSlots,
}

#[wasm_bindgen]
impl LiquidCursor {
    /// Stop the loop, cancel the commit timer and remove every listener. Idempotent.
    pub fn unmount(&mut self) {
        if let Ok(mut c) = self.controller.try_borrow_mut() {
            c.unmount();
        }
        self.listeners.remove_all();
        self.slots.clear();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.controller
            .try_borrow()
            .map(|c| c.is_running())
            .unwrap_or(false)
    }
}

impl Drop for LiquidCursor {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount the effect on the element with `root_id` (default `liquid-cursor`).
/// Returns `undefined` when reduced motion is preferred or an anchor is missing.
#[wasm_bindgen]
pub fn mount(root_id: Option<String>) -> Option<LiquidCursor> {
    let root_id = root_id.as_deref().unwrap_or(constants::ROOT_ID);
    match try_mount(root_id) {
        Ok(handle) => Some(handle),
        Err(e) => {
            match e.downcast_ref::<MountError>() {
                Some(MountError::ReducedMotion) => log::info!("[liquid] not mounted: {}", e),
                _ => log::warn!("[liquid] not mounted: {}", e),
            }
            None
        }
    }
}

fn try_mount(root_id: &str) -> anyhow::Result<LiquidCursor> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    // Hard precondition: no loop, no listeners.
    let reduced_motion = dom::prefers_reduced_motion(&window);
    if reduced_motion {
        return Err(MountError::ReducedMotion.into());
    }

    let anchors = dom::Anchors::locate(&document, root_id)?;
    let (geometry, radius) = dom::measure(&window, &anchors.root);
    let config = dom::read_config(&anchors.root, radius);
    log::info!(
        "[liquid] container radius {:.1}px, body radius {:.1}px",
        config.container_radius,
        config.body_radius
    );

    let slots = frame::CallbackSlots::default();
    let host = frame::WebHost::new(window.clone(), anchors, slots.clone());
    let controller = Rc::new(RefCell::new(Controller::new(config, geometry, host)));
    slots.wire(&controller);

    if let Err(e) = controller.borrow_mut().mount(reduced_motion) {
        slots.clear();
        return Err(e.into());
    }

    let listeners = events::wire_input_handlers(&window, &document, &controller);
    Ok(LiquidCursor {
        controller,
        listeners,
        slots,
    })
}
