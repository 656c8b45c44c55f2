use crate::dom::{self, Anchors};
use crate::style;
use liquid_core::{
    BoltPath, CommitTimer, Controller, FrameScheduler, LayerStyle, RenderTarget, TickHandle,
    TimerHandle, VisualFrame, BOLT_COUNT,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedController = Rc<RefCell<Controller<WebHost>>>;
type CallbackSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// The two JS callbacks the controller schedules. Filled after the controller
/// exists, since both call back into it.
#[derive(Clone, Default)]
pub struct CallbackSlots {
    tick: CallbackSlot,
    commit: CallbackSlot,
}

impl CallbackSlots {
    pub fn wire(&self, controller: &SharedController) {
        let weak = Rc::downgrade(controller);
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            with_controller(&weak, |c| c.on_frame(instant::now() / 1000.0));
        }) as Box<dyn FnMut()>));

        let weak = Rc::downgrade(controller);
        *self.commit.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            with_controller(&weak, |c| c.on_commit_timer());
        }) as Box<dyn FnMut()>));
    }

    /// Drop both closures. Only after the controller has cancelled what it scheduled.
    pub fn clear(&self) {
        self.tick.borrow_mut().take();
        self.commit.borrow_mut().take();
    }
}

fn with_controller(
    weak: &Weak<RefCell<Controller<WebHost>>>,
    f: impl FnOnce(&mut Controller<WebHost>),
) {
    if let Some(ctl) = weak.upgrade() {
        if let Ok(mut c) = ctl.try_borrow_mut() {
            f(&mut c);
        }
    }
}

/// Browser side of the host seam: rAF ticks, a `setTimeout` commit timer, style writes.
pub struct WebHost {
    window: web::Window,
    anchors: Anchors,
    slots: CallbackSlots,
}

impl WebHost {
    pub fn new(window: web::Window, anchors: Anchors, slots: CallbackSlots) -> Self {
        Self {
            window,
            anchors,
            slots,
        }
    }

    pub fn root(&self) -> &web::HtmlElement {
        &self.anchors.root
    }
}

impl FrameScheduler for WebHost {
    fn request_tick(&mut self) -> Option<TickHandle> {
        let slot = self.slots.tick.borrow();
        let cb = slot.as_ref()?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
            .map(TickHandle)
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
    }
}

impl CommitTimer for WebHost {
    fn arm(&mut self, delay_ms: f64) -> Option<TimerHandle> {
        let slot = self.slots.commit.borrow();
        let cb = slot.as_ref()?;
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay_ms.round() as i32,
            )
            .ok()
            .map(TimerHandle)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.window.clear_timeout_with_handle(handle.0);
    }
}

impl RenderTarget for WebHost {
    fn render(&mut self, frame: &VisualFrame) {
        let a = &self.anchors;
        dom::set_style(
            &a.stage,
            "transform",
            &style::stage_transform(frame.parallax, frame.scroll_offset),
        );
        apply_layer(&a.body, &frame.body, true);
        apply_layer(&a.tail, &frame.tail, true);
        apply_layer(&a.glow, &frame.glow, false);
        apply_layer(&a.flash, &frame.flash, false);
    }

    fn draw_bolts(&mut self, bolts: &[BoltPath; BOLT_COUNT]) {
        for (el, bolt) in self.anchors.bolts.iter().zip(bolts) {
            let _ = el.set_attribute("d", &bolt.svg_path_data());
        }
    }
}

fn apply_layer(el: &web::HtmlElement, layer: &LayerStyle, shaped: bool) {
    dom::set_style(el, "transform", &style::transform(layer));
    dom::set_style(el, "opacity", &style::opacity(layer));
    dom::set_style(el, "filter", &style::filter(layer));
    if shaped {
        dom::set_style(el, "border-radius", &style::border_radius(layer));
    }
}
