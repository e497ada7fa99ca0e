//! Change notification for view-range mutations.
//!
//! The host rendering layer needs to know when a view range moved so it can
//! schedule a re-layout. Rather than relying on a reactive framework
//! primitive, axes keep an explicit callback list; zoom, pan and
//! `set_view_range` notify it only when the view actually changed.

/// Handle to a registered view-range listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub(crate) struct Listeners<T> {
    next_id: u64,
    entries: Vec<(ListenerId, Box<dyn FnMut(T, T)>)>,
}

impl<T: Copy> Listeners<T> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, listener: Box<dyn FnMut(T, T)>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns whether a listener with this id was present.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, start: T, end: T) {
        for (_, listener) in &mut self.entries {
            listener(start, end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_subscribe_and_notify() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut listeners = Listeners::new();
        listeners.subscribe(Box::new(move |start: f64, end: f64| {
            sink.borrow_mut().push((start, end));
        }));

        listeners.notify(0.0, 10.0);
        listeners.notify(5.0, 15.0);

        assert_eq!(*seen.borrow(), vec![(0.0, 10.0), (5.0, 15.0)]);
    }

    #[test]
    fn test_remove_stops_notifications() {
        let seen = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&seen);

        let mut listeners = Listeners::new();
        let id = listeners.subscribe(Box::new(move |_: f64, _: f64| {
            *sink.borrow_mut() += 1;
        }));

        listeners.notify(0.0, 1.0);
        assert!(listeners.remove(id));
        listeners.notify(0.0, 1.0);

        assert_eq!(*seen.borrow(), 1);
        assert!(!listeners.remove(id));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut listeners = Listeners::<f64>::new();
        let first = listeners.subscribe(Box::new(|_, _| {}));
        listeners.remove(first);
        let second = listeners.subscribe(Box::new(|_, _| {}));
        assert_ne!(first, second);
    }
}
