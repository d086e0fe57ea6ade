use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Accumulated pointer state read each frame by the application.
///
/// Positions are in CSS pixels relative to the canvas, which equal egui
/// logical points once pixels_per_point is set to the DPI scale.
pub struct InputState {
    /// Last known pointer position, None once the pointer leaves the canvas.
    pub cursor: Option<(f32, f32)>,
    /// Primary button released this frame (a click, edge-triggered).
    pub clicked: bool,
    /// Raw events forwarded to egui for its own widgets.
    pub events: Vec<egui::Event>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            cursor: None,
            clicked: false,
            events: Vec::new(),
        }
    }

    /// Drain per-frame state (called once the frame has consumed it).
    pub fn take_frame(&mut self) -> (Option<(f32, f32)>, bool, Vec<egui::Event>) {
        let clicked = std::mem::take(&mut self.clicked);
        let events = std::mem::take(&mut self.events);
        (self.cursor, clicked, events)
    }
}

fn egui_pos(e: &web_sys::PointerEvent) -> egui::Pos2 {
    egui::pos2(e.offset_x() as f32, e.offset_y() as f32)
}

/// Register pointer event listeners on the canvas ONCE at init.
/// Closures are leaked via `.forget()` since they live for the app lifetime.
pub fn register_input_listeners(
    canvas: &web_sys::HtmlCanvasElement,
    state: Rc<RefCell<InputState>>,
) {
    let target: &web_sys::EventTarget = canvas.as_ref();

    // pointermove
    {
        let state = state.clone();
        let closure =
            Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |e: web_sys::PointerEvent| {
                let mut s = state.borrow_mut();
                let pos = egui_pos(&e);
                s.cursor = Some((pos.x, pos.y));
                s.events.push(egui::Event::PointerMoved(pos));
            });
        target
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
            .expect("failed to add pointermove listener");
        closure.forget();
    }

    // pointerdown
    {
        let state = state.clone();
        let closure =
            Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |e: web_sys::PointerEvent| {
                if e.button() != 0 {
                    return;
                }
                let mut s = state.borrow_mut();
                s.events.push(egui::Event::PointerButton {
                    pos: egui_pos(&e),
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    modifiers: egui::Modifiers::default(),
                });
            });
        target
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())
            .expect("failed to add pointerdown listener");
        closure.forget();
    }

    // pointerup (click on release, matching browser click semantics)
    {
        let state = state.clone();
        let closure =
            Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |e: web_sys::PointerEvent| {
                if e.button() != 0 {
                    return;
                }
                let mut s = state.borrow_mut();
                s.clicked = true;
                s.events.push(egui::Event::PointerButton {
                    pos: egui_pos(&e),
                    button: egui::PointerButton::Primary,
                    pressed: false,
                    modifiers: egui::Modifiers::default(),
                });
            });
        target
            .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref())
            .expect("failed to add pointerup listener");
        closure.forget();
    }

    // pointerleave (stop hover highlighting outside the canvas)
    {
        let state = state.clone();
        let closure =
            Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |_e: web_sys::PointerEvent| {
                let mut s = state.borrow_mut();
                s.cursor = None;
                s.events.push(egui::Event::PointerGone);
            });
        target
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref())
            .expect("failed to add pointerleave listener");
        closure.forget();
    }

    // contextmenu (prevent right-click menu)
    {
        let closure =
            Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |e: web_sys::MouseEvent| {
                e.prevent_default();
            });
        target
            .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref())
            .expect("failed to add contextmenu listener");
        closure.forget();
    }
}
