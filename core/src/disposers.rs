use std::fmt;

pub type Disposer = Box<dyn FnOnce()>;

/// Teardown callbacks for live subscriptions, each invoked exactly once.
#[derive(Default)]
pub struct Disposers {
    entries: Vec<Disposer>,
}

impl Disposers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, disposer: impl FnOnce() + 'static) {
        self.entries.push(Box::new(disposer));
    }

    /// Registers a value whose `Drop` ends the subscription.
    pub fn hold<T: 'static>(&mut self, guard: T) {
        self.push(move || drop(guard));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs every disposer in registration order and empties the list.
    /// Returns how many ran.
    pub fn dispose(&mut self) -> usize {
        let entries = std::mem::take(&mut self.entries);
        let count = entries.len();
        for disposer in entries {
            disposer();
        }
        count
    }
}

impl Drop for Disposers {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Disposers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposers")
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn dispose_runs_each_once_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut disposers = Disposers::new();
        for id in 0..4 {
            let log = log.clone();
            disposers.push(move || log.borrow_mut().push(id));
        }
        assert_eq!(disposers.len(), 4);
        assert_eq!(disposers.dispose(), 4);
        assert!(disposers.is_empty());
        assert_eq!(disposers.dispose(), 0);
        assert_eq!(*log.borrow(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn drop_disposes_remaining() {
        let hits = Rc::new(RefCell::new(0));
        {
            let mut disposers = Disposers::new();
            let hits = hits.clone();
            disposers.push(move || *hits.borrow_mut() += 1);
        }
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn hold_drops_guard_on_dispose() {
        struct Guard(Rc<RefCell<bool>>);
        impl Drop for Guard {
            fn drop(&mut self) {
                *self.0.borrow_mut() = true;
            }
        }
        let dropped = Rc::new(RefCell::new(false));
        let mut disposers = Disposers::new();
        disposers.hold(Guard(dropped.clone()));
        assert!(!*dropped.borrow());
        disposers.dispose();
        assert!(*dropped.borrow());
    }
}
