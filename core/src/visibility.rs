use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type VisibilitySubscriber = Rc<dyn Fn(bool)>;

/// Whether the band is on screen. Written by an external detector, read by
/// whoever renders the paused state; the drag logic never consults it.
#[derive(Clone, Default)]
pub struct Visibility {
    in_view: Rc<Cell<bool>>,
    subscribers: Rc<RefCell<Vec<VisibilitySubscriber>>>,
}

impl Visibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> bool {
        self.in_view.get()
    }

    /// Stores the value and notifies subscribers if it changed.
    pub fn set(&self, in_view: bool) -> bool {
        if self.in_view.replace(in_view) == in_view {
            return false;
        }
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)(in_view);
        }
        true
    }

    pub fn subscribe(&self, subscriber: VisibilitySubscriber) -> VisibilitySubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        VisibilitySubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl std::fmt::Debug for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Visibility")
            .field("in_view", &self.in_view.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

pub struct VisibilitySubscription {
    subscriber: VisibilitySubscriber,
    subscribers: Rc<RefCell<Vec<VisibilitySubscriber>>>,
}

impl Drop for VisibilitySubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}
