//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for board layouts: cards are picked up and
//! dropped onto lanes. Uses a movement threshold to distinguish click from
//! drag, so card click handlers keep working.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Lane currently under the dragged card
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropLane(pub u32);

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub drop_lane_read: ReadSignal<Option<DropLane>>,
    pub drop_lane_write: WriteSignal<Option<DropLane>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending card id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_lane_read, drop_lane_write) = signal(None::<DropLane>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_lane_read,
        drop_lane_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_lane_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            100,
        );
        cb.forget();
    }
}

/// Create mousedown handler for draggable cards.
/// Records pending drag with start position.
pub fn make_on_card_mousedown(dnd: DndSignals, card_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(card_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let start_x = dnd.start_x_read.get_untracked();
            let start_y = dnd.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for lanes
pub fn make_on_lane_mouseenter(dnd: DndSignals, lane_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_lane_write.set(Some(DropLane(lane_id)));
        }
    }
}

/// Create mouseleave handler for lanes
pub fn make_on_lane_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_lane_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
/// `on_drop` receives the dragged card id and the lane it was released over.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u32, DropLane) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_lane = dnd.drop_lane_read.get_untracked();

        // Clear pending state first
        dnd.pending_id_write.set(None);

        // If we were actually dragging (not just clicking)
        if let (Some(dragged), Some(lane)) = (dragging_id, drop_lane) {
            end_drag(&dnd);
            on_drop(dragged, lane);
        } else {
            // Not dragging - just end any pending state
            end_drag(&dnd);
            // Click event will fire naturally on the element
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
