//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses a movement threshold to distinguish click from drag, reports every
//! new hover target while dragging, and reports the final target on release.
//! Releasing away from any target cancels the drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Bound for drag keys: anything cheap to compare and shareable with signals
pub trait DragKey: Clone + PartialEq + Send + Sync + 'static {}

impl<T: Clone + PartialEq + Send + Sync + 'static> DragKey for T {}

/// DnD state signals
pub struct DndSignals<T: 'static> {
    pub dragging_read: ReadSignal<Option<T>>,
    pub dragging_write: WriteSignal<Option<T>>,
    pub drop_target_read: ReadSignal<Option<T>>,
    pub drop_target_write: WriteSignal<Option<T>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending key (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<T>>,
    pub pending_write: WriteSignal<Option<T>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
    /// Pixels the pointer must travel before a drag starts
    pub threshold_px: i32,
}

impl<T: 'static> Clone for DndSignals<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for DndSignals<T> {}

/// Default movement threshold in pixels
pub const DRAG_THRESHOLD_PX: i32 = 3;

pub fn create_dnd_signals<T: DragKey>(threshold_px: i32) -> DndSignals<T> {
    let (dragging_read, dragging_write) = signal(None::<T>);
    let (drop_target_read, drop_target_write) = signal(None::<T>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<T>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
        threshold_px,
    }
}

/// Whether the pointer moved far enough from `start` to begin dragging
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32), threshold_px: i32) -> bool {
    (now.0 - start.0).abs() > threshold_px || (now.1 - start.1).abs() > threshold_px
}

/// Whether hovering `target` while dragging `dragging` is a new, valid target
pub fn is_new_target<T: PartialEq>(dragging: &T, current: Option<&T>, target: &T) -> bool {
    dragging != target && current != Some(target)
}

impl<T: DragKey> DndSignals<T> {
    /// Whether `key` is the one being dragged (tracked)
    pub fn is_dragging(&self, key: &T) -> bool {
        self.dragging_read.with(|d| d.as_ref() == Some(key))
    }

    /// Whether `key` is the current drop target (tracked)
    pub fn is_drop_target(&self, key: &T) -> bool {
        self.drop_target_read.with(|t| t.as_ref() == Some(key))
    }
}

/// End drag operation
pub fn end_drag<T: DragKey>(dnd: &DndSignals<T>) {
    let was_dragging = dnd.dragging_read.try_get_untracked().flatten().is_some();
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    if !was_dragging {
        return;
    }
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown<T: DragKey>(dnd: DndSignals<T>, key: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore editable fields and buttons
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        // Nested draggables: the innermost one wins
        ev.stop_propagation();
        dnd.pending_write.set(Some(key.clone()));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Bind document mousemove - starts drag once moved past the threshold
fn bind_global_mousemove<T: DragKey>(dnd: DndSignals<T>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.try_get_untracked().flatten();
        if pending.is_none() || dnd.dragging_read.try_get_untracked().flatten().is_some() {
            return;
        }
        let now = (ev.client_x(), ev.client_y());
        let start = dnd.start_read.try_get_untracked().unwrap_or(now);
        if exceeds_threshold(start, now, dnd.threshold_px) {
            dnd.dragging_write.set(pending);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mouseover handler for drop targets
///
/// Fires `on_over(dragged, target)` once each time the hovered target
/// changes. Stops propagation so the innermost target wins.
pub fn make_on_mouseover<T, F>(dnd: DndSignals<T>, key: T, on_over: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    T: DragKey,
    F: Fn(T, T) + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        let Some(dragging) = dnd.dragging_read.get_untracked() else {
            return;
        };
        ev.stop_propagation();
        let current = dnd.drop_target_read.get_untracked();
        if is_new_target(&dragging, current.as_ref(), &key) {
            dnd.drop_target_write.set(Some(key.clone()));
            on_over(dragging, key.clone());
        }
    }
}

/// Create mouseleave handler for drop targets
pub fn make_on_mouseleave<T: DragKey>(dnd: DndSignals<T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind document mouseup handler for drop detection
///
/// `on_drop(dragged, target)` runs only when a drag is active and the
/// pointer is over a target.
pub fn bind_global_mouseup<T, F>(dnd: DndSignals<T>, on_drop: F)
where
    T: DragKey,
    F: Fn(T, T) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        // Listeners outlive the owning component; disposed signals read as empty
        let dragging = dnd.dragging_read.try_get_untracked().flatten();
        let drop_target = dnd.drop_target_read.try_get_untracked().flatten();
        if dragging.is_none() && dnd.pending_read.try_get_untracked().flatten().is_none() {
            return;
        }

        end_drag(&dnd);
        if let (Some(dragged), Some(target)) = (dragging, drop_target) {
            on_drop(dragged, target);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (13, 7), 3));
        assert!(exceeds_threshold((10, 10), (14, 10), 3));
        assert!(exceeds_threshold((10, 10), (10, 6), 3));
    }

    #[test]
    fn test_new_target() {
        assert!(!is_new_target(&1, None, &1));
        assert!(is_new_target(&1, None, &2));
        assert!(!is_new_target(&1, Some(&2), &2));
        assert!(is_new_target(&1, Some(&3), &2));
    }
}
