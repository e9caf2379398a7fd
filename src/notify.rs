//! Model-change notifications delivered to the host.

/// Kinds of change the controller reports after handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// Committed strokes changed (new stroke, drag, undo, redo, clear)
    ModelChanged,
    /// The tool preview moved, changed or disappeared
    ToolMoved,
    /// A tool was added to the registry
    ToolListChanged,
}

impl Notification {
    /// Whether the canvas must be redrawn in reaction to this notification.
    pub fn needs_redraw(self) -> bool {
        matches!(self, Notification::ModelChanged | Notification::ToolMoved)
    }
}

/// Receives notifications synchronously, before the triggering handler returns.
pub trait Observer {
    fn notify(&mut self, notification: Notification);
}

impl<F> Observer for F
where
    F: FnMut(Notification),
{
    fn notify(&mut self, notification: Notification) {
        self(notification)
    }
}

/// Fan-out list of host observers.
#[derive(Default)]
pub struct NotificationBus {
    observers: Vec<Box<dyn Observer>>,
}

impl std::fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationBus")
            .field("observers", &format!("<{} observers>", self.observers.len()))
            .finish()
    }
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer; observers are called in subscription order.
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Delivers `notification` to every observer.
    pub fn emit(&mut self, notification: Notification) {
        for observer in &mut self.observers {
            observer.notify(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn observers_receive_notifications_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = NotificationBus::new();
        let first = Rc::clone(&seen);
        bus.subscribe(Box::new(move |n: Notification| first.borrow_mut().push((1, n))));
        let second = Rc::clone(&seen);
        bus.subscribe(Box::new(move |n: Notification| second.borrow_mut().push((2, n))));

        bus.emit(Notification::ToolMoved);

        assert_eq!(
            *seen.borrow(),
            vec![(1, Notification::ToolMoved), (2, Notification::ToolMoved)]
        );
    }

    #[test]
    fn tool_list_changes_do_not_redraw() {
        assert!(Notification::ModelChanged.needs_redraw());
        assert!(Notification::ToolMoved.needs_redraw());
        assert!(!Notification::ToolListChanged.needs_redraw());
    }
}
