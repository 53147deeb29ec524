//! Viewport width change notifications.
//!
//! The hub is single-threaded: it lives on the event loop and listeners must not call back
//! into it.

use std::cell::RefCell;
use std::rc::Rc;
use std::rc::Weak;

use tracing::debug;

type Listener = Box<dyn FnMut(u32)>;

struct HubInner {
    width_px: u32,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

#[derive(Clone)]
pub struct ViewportHub {
    inner: Rc<RefCell<HubInner>>,
}

impl ViewportHub {
    pub fn new(width_px: u32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                width_px,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn width_px(&self) -> u32 {
        self.inner.borrow().width_px
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Registers `listener` and immediately calls it once with the current width.
    pub fn subscribe(&self, listener: impl FnMut(u32) + 'static) -> Subscription {
        let mut listener: Listener = Box::new(listener);
        let mut inner = self.inner.borrow_mut();
        listener(inner.width_px);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, listener));
        debug!(id, listeners = inner.listeners.len(), "viewport listener added");
        Subscription {
            id,
            hub: Rc::downgrade(&self.inner),
            active: true,
        }
    }

    /// Every publish reaches every listener, even if the width did not change.
    pub fn publish(&self, width_px: u32) {
        let mut inner = self.inner.borrow_mut();
        inner.width_px = width_px;
        for (_, listener) in inner.listeners.iter_mut() {
            listener(width_px);
        }
    }
}

/// Removes its listener exactly once, on `unsubscribe` or on drop.
pub struct Subscription {
    id: u64,
    hub: Weak<RefCell<HubInner>>,
    active: bool,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn unsubscribe(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(hub) = self.hub.upgrade() {
            let mut inner = hub.borrow_mut();
            inner.listeners.retain(|(id, _)| *id != self.id);
            debug!(id = self.id, listeners = inner.listeners.len(), "viewport listener removed");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Terminal hosts measure in character cells; labels are keyed on pixels.
pub fn columns_to_px(columns: u16, cell_width_px: u16) -> u32 {
    u32::from(columns) * u32::from(cell_width_px)
}
