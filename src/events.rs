use crate::dom;
use crate::frame::SharedController;
use liquid_core::InputEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Every listener the effect registered, so teardown can remove them all.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Listener>,
}

impl Listeners {
    fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let added = if passive {
            let opts = web::AddEventListenerOptions::new();
            opts.set_passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
        } else {
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        };
        match added {
            Ok(()) => self.entries.push(Listener {
                target: target.clone(),
                kind,
                closure,
            }),
            Err(e) => log::warn!("[liquid] could not listen for {}: {:?}", kind, e),
        }
    }

    pub fn remove_all(&mut self) {
        for l in self.entries.drain(..) {
            let _ = l
                .target
                .remove_event_listener_with_callback(l.kind, l.closure.as_ref().unchecked_ref());
        }
    }
}

/// Feed one event to the controller; skipped if it is mid-frame.
fn dispatch(controller: &SharedController, event: InputEvent) {
    if let Ok(mut c) = controller.try_borrow_mut() {
        c.handle_input(event);
    }
}

pub fn wire_input_handlers(
    window: &web::Window,
    document: &web::Document,
    controller: &SharedController,
) -> Listeners {
    let mut listeners = Listeners::default();

    let ctl = controller.clone();
    listeners.add(window, "pointermove", true, move |ev: web::Event| {
        if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
            dispatch(
                &ctl,
                InputEvent::PointerMove {
                    x: pe.client_x() as f32,
                    y: pe.client_y() as f32,
                },
            );
        }
    });

    // pointerleave does not fire on window; the document element covers the viewport.
    if let Some(doc_el) = document.document_element() {
        let ctl = controller.clone();
        listeners.add(&doc_el, "pointerleave", true, move |_ev: web::Event| {
            dispatch(&ctl, InputEvent::PointerLeave);
        });
    }

    let ctl = controller.clone();
    let wnd = window.clone();
    listeners.add(window, "scroll", true, move |_ev: web::Event| {
        let offset = wnd.scroll_y().unwrap_or(0.0) as f32;
        dispatch(&ctl, InputEvent::Scroll { offset });
        remeasure(&ctl, &wnd);
    });

    let ctl = controller.clone();
    let wnd = window.clone();
    listeners.add(window, "resize", false, move |_ev: web::Event| {
        remeasure(&ctl, &wnd);
    });

    log::info!("[liquid] {} input listeners wired", listeners.entries.len());
    listeners
}

// Scrolling and resizing both move the container in client coordinates.
fn remeasure(controller: &SharedController, window: &web::Window) {
    let geometry = match controller.try_borrow() {
        Ok(c) => dom::measure(window, c.host().root()).0,
        Err(_) => return,
    };
    dispatch(controller, InputEvent::Resize(geometry));
}
