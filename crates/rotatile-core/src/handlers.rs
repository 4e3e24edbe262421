#![forbid(unsafe_code)]

//! Notification handlers for the rotation controller.
//!
//! [`RotationHandlers`] has one slot per notification kind and holds at most
//! one handler per slot; registering a new handler replaces the previous one.
//! Each registration returns a [`Subscription`] guard. The slot only keeps a
//! `Weak` reference, so dropping the guard unregisters the handler.
//!
//! # Failure Modes
//!
//! - **Dropped guard**: the slot still holds a dead `Weak` until the next
//!   dispatch or registration, which clears it. The handler is never called
//!   after its guard is dropped.
//! - **Re-entrant registration**: handlers receive only the event, not the
//!   registry, so a handler cannot re-register itself mid-dispatch.

use std::rc::{Rc, Weak};

use crate::controller::{LineTiles, RotationEvent};
use crate::grid::CellPos;

type CellHandler = dyn Fn(CellPos);
type LineHandler = dyn Fn(&LineTiles);
type TickHandler = dyn Fn();
type FinishHandler = dyn Fn(bool);

/// RAII guard for a registered handler.
///
/// Dropping the `Subscription` drops the only strong reference to the
/// handler, so the registry's `Weak` no longer upgrades.
#[must_use = "dropping the subscription unregisters the handler"]
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// One handler slot.
struct Slot<F: ?Sized> {
    handler: Option<Weak<F>>,
}

impl<F: ?Sized + 'static> Slot<F> {
    const fn empty() -> Self {
        Self { handler: None }
    }

    fn register(&mut self, strong: Rc<F>) -> Subscription {
        self.handler = Some(Rc::downgrade(&strong));
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Live handler, clearing the slot if its guard was dropped.
    fn live(&mut self) -> Option<Rc<F>> {
        let live = self.handler.as_ref().and_then(Weak::upgrade);
        if live.is_none() {
            self.handler = None;
        }
        live
    }

    fn is_registered(&self) -> bool {
        self.handler.as_ref().is_some_and(|w| w.strong_count() > 0)
    }
}

/// Handler registry for [`RotationEvent`]s.
pub struct RotationHandlers {
    line_touched: Slot<CellHandler>,
    axis_decided: Slot<LineHandler>,
    rotation_tick: Slot<TickHandler>,
    line_finished: Slot<FinishHandler>,
}

impl Default for RotationHandlers {
    fn default() -> Self {
        Self {
            line_touched: Slot::empty(),
            axis_decided: Slot::empty(),
            rotation_tick: Slot::empty(),
            line_finished: Slot::empty(),
        }
    }
}

impl std::fmt::Debug for RotationHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotationHandlers")
            .field("line_touched", &self.line_touched.is_registered())
            .field("axis_decided", &self.axis_decided.is_registered())
            .field("rotation_tick", &self.rotation_tick.is_registered())
            .field("line_finished", &self.line_finished.is_registered())
            .finish()
    }
}

impl RotationHandlers {
    /// Called with the touched cell on pointer-down.
    pub fn on_line_touched(&mut self, handler: impl Fn(CellPos) + 'static) -> Subscription {
        let strong: Rc<CellHandler> = Rc::new(handler);
        self.line_touched.register(strong)
    }

    /// Called once per drag when the axis is locked.
    pub fn on_axis_decided(&mut self, handler: impl Fn(&LineTiles) + 'static) -> Subscription {
        let strong: Rc<LineHandler> = Rc::new(handler);
        self.axis_decided.register(strong)
    }

    /// Called each time the drag covers another tick distance.
    pub fn on_rotation_tick(&mut self, handler: impl Fn() + 'static) -> Subscription {
        let strong: Rc<TickHandler> = Rc::new(handler);
        self.rotation_tick.register(strong)
    }

    /// Called when a gesture completes, with whether any color moved.
    pub fn on_line_finished(&mut self, handler: impl Fn(bool) + 'static) -> Subscription {
        let strong: Rc<FinishHandler> = Rc::new(handler);
        self.line_finished.register(strong)
    }

    /// Deliver `event` to its slot's handler, if one is live.
    pub fn dispatch(&mut self, event: &RotationEvent) {
        match event {
            RotationEvent::LineTouched { cell } => {
                if let Some(handler) = self.line_touched.live() {
                    handler(*cell);
                }
            }
            RotationEvent::AxisDecided { line } => {
                if let Some(handler) = self.axis_decided.live() {
                    handler(line);
                }
            }
            RotationEvent::RotationTick => {
                if let Some(handler) = self.rotation_tick.live() {
                    handler();
                }
            }
            RotationEvent::LineFinished { changed } => {
                if let Some(handler) = self.line_finished.live() {
                    handler(*changed);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn dispatch_reaches_registered_handler() {
        let mut handlers = RotationHandlers::default();
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        let _sub = handlers.on_line_finished(move |changed| sink.set(Some(changed)));

        handlers.dispatch(&RotationEvent::LineFinished { changed: true });
        assert_eq!(seen.get(), Some(true));
    }

    #[test]
    fn dropped_subscription_is_not_called() {
        let mut handlers = RotationHandlers::default();
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        let sub = handlers.on_rotation_tick(move || sink.set(sink.get() + 1));

        handlers.dispatch(&RotationEvent::RotationTick);
        drop(sub);
        handlers.dispatch(&RotationEvent::RotationTick);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn new_registration_replaces_previous() {
        let mut handlers = RotationHandlers::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&log);
        let _a = handlers.on_line_touched(move |cell| first.borrow_mut().push(("a", cell)));
        let second = Rc::clone(&log);
        let _b = handlers.on_line_touched(move |cell| second.borrow_mut().push(("b", cell)));

        handlers.dispatch(&RotationEvent::LineTouched {
            cell: CellPos::new(1, 2),
        });
        assert_eq!(*log.borrow(), vec![("b", CellPos::new(1, 2))]);
    }

    #[test]
    fn unrelated_slots_are_untouched() {
        let mut handlers = RotationHandlers::default();
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        let _sub = handlers.on_rotation_tick(move || sink.set(sink.get() + 1));

        handlers.dispatch(&RotationEvent::LineFinished { changed: false });
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn debug_reports_live_slots() {
        let mut handlers = RotationHandlers::default();
        let sub = handlers.on_rotation_tick(|| {});
        let text = format!("{handlers:?}");
        assert!(text.contains("rotation_tick: true"));
        assert!(text.contains("line_finished: false"));
        drop(sub);
        assert!(format!("{handlers:?}").contains("rotation_tick: false"));
    }
}
