//! Scroll offset observation scoped to a component's lifetime.

use std::cell::Cell;
use std::rc::Rc;

/// Something that reports the page scroll offset and notifies on change.
pub trait ScrollSource {
    /// Token returned by [`ScrollSource::listen`], handed back to stop listening.
    type Handle;

    fn offset(&self) -> f64;

    fn listen(&self, on_scroll: Box<dyn FnMut(f64)>) -> Self::Handle;

    fn unlisten(&self, handle: Self::Handle);
}

/// Listener registration that is released on drop.
///
/// Events that the source still delivers after release are swallowed, so
/// the callback never runs once the subscription is gone.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    handle: Option<S::Handle>,
    active: Rc<Cell<bool>>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    pub fn attach(source: S, mut on_scroll: impl FnMut(f64) + 'static) -> Self {
        let active = Rc::new(Cell::new(true));
        let gate = Rc::clone(&active);
        let handle = source.listen(Box::new(move |offset| {
            if gate.get() {
                on_scroll(offset)
            }
        }));
        Self {
            source,
            handle: Some(handle),
            active,
        }
    }

    pub fn offset(&self) -> f64 {
        self.source.offset()
    }

    #[cfg(test)]
    fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Stops listening. Calling it again is a no-op.
    pub fn release(&mut self) {
        self.active.set(false);
        if let Some(handle) = self.handle.take() {
            self.source.unlisten(handle);
        }
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::NavState;
    use std::cell::RefCell;

    type Listeners = Rc<RefCell<Vec<Option<Box<dyn FnMut(f64)>>>>>;

    /// Fake page: keeps listeners by slot, and can keep firing into a slot
    /// after `unlisten` when `leaky` is set.
    #[derive(Clone, Default)]
    struct FakePage {
        offset: Rc<Cell<f64>>,
        listeners: Listeners,
        leaky: bool,
    }

    impl FakePage {
        fn scroll_to(&self, offset: f64) {
            self.offset.set(offset);
            for listener in self.listeners.borrow_mut().iter_mut().flatten() {
                listener(offset);
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().iter().flatten().count()
        }
    }

    impl ScrollSource for FakePage {
        type Handle = usize;

        fn offset(&self) -> f64 {
            self.offset.get()
        }

        fn listen(&self, on_scroll: Box<dyn FnMut(f64)>) -> usize {
            let mut listeners = self.listeners.borrow_mut();
            listeners.push(Some(on_scroll));
            listeners.len() - 1
        }

        fn unlisten(&self, handle: usize) {
            if !self.leaky {
                self.listeners.borrow_mut()[handle] = None;
            }
        }
    }

    type States = Rc<RefCell<Vec<NavState>>>;

    fn track_states(page: &FakePage) -> (ScrollSubscription<FakePage>, States) {
        let states = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&states);
        let sub = ScrollSubscription::attach(page.clone(), move |offset| {
            sink.borrow_mut().push(NavState::from_offset(offset))
        });
        (sub, states)
    }

    #[test]
    fn every_event_is_classified() {
        let page = FakePage::default();
        let (_sub, states) = track_states(&page);

        for offset in [0.0, 40.0, 41.0, 1000.0, 12.0] {
            page.scroll_to(offset);
        }

        assert_eq!(
            *states.borrow(),
            vec![
                NavState::Top,
                NavState::Top,
                NavState::Scroll,
                NavState::Scroll,
                NavState::Top
            ]
        );
    }

    #[test]
    fn drop_unsubscribes() {
        let page = FakePage::default();
        let (sub, states) = track_states(&page);
        page.scroll_to(100.0);
        assert_eq!(page.listener_count(), 1);

        drop(sub);
        page.scroll_to(0.0);

        assert_eq!(page.listener_count(), 0);
        assert_eq!(*states.borrow(), vec![NavState::Scroll]);
    }

    #[test]
    fn released_subscription_ignores_late_events() {
        let page = FakePage {
            leaky: true,
            ..FakePage::default()
        };
        let (mut sub, states) = track_states(&page);

        sub.release();
        sub.release();
        page.scroll_to(500.0);

        assert!(!sub.is_active());
        assert!(states.borrow().is_empty());
    }

    #[test]
    fn reads_current_offset() {
        let page = FakePage::default();
        page.scroll_to(64.0);
        let (sub, _) = track_states(&page);
        assert_eq!(NavState::from_offset(sub.offset()), NavState::Scroll);
    }
}
