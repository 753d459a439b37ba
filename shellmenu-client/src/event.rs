//! Menu lifecycle events.

use std::sync::Arc;

use shellmenu_core::item::MenuItem;

/// Lifecycle stage of a menu invocation. For one `show()` call the order is
/// always show, then at most one click, then exactly one hide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuEventKind {
    Show,
    Click,
    Hide,
}

/// Event dispatched to listeners registered on a menu.
///
/// `item` is `None` for show events and for hide events that ended without a
/// selection. The owning menu is named by id rather than referenced, so
/// events can be stored or sent onward freely.
#[derive(Clone)]
pub struct ContextMenuEvent {
    pub kind: MenuEventKind,
    /// Id of the menu this event belongs to.
    pub menu_id: String,
    /// Pointer position of the originating show, absent for application-menu
    /// events.
    pub client_x: Option<f64>,
    pub client_y: Option<f64>,
    pub item: Option<MenuItem>,
    pub triggered_by_accelerator: bool,
}

/// Listener registered for one event kind.
pub type MenuEventListener = Arc<dyn Fn(&ContextMenuEvent) + Send + Sync>;

/// Per-menu listener table. Dispatch is synchronous and in registration
/// order, on the calling thread.
#[derive(Default, Clone)]
pub(crate) struct EventDispatcher {
    listeners: Vec<(MenuEventKind, MenuEventListener)>,
}

impl EventDispatcher {
    pub(crate) fn on(&mut self, kind: MenuEventKind, listener: MenuEventListener) {
        self.listeners.push((kind, listener));
    }

    pub(crate) fn dispatch(&self, event: &ContextMenuEvent) {
        for (kind, listener) in &self.listeners {
            if *kind == event.kind {
                listener(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn dispatch_filters_by_kind_in_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = EventDispatcher::default();

        for tag in ["first", "second"] {
            let seen = seen.clone();
            dispatcher.on(
                MenuEventKind::Click,
                Arc::new(move |_| seen.lock().unwrap().push(tag)),
            );
        }
        let seen_hide = seen.clone();
        dispatcher.on(
            MenuEventKind::Hide,
            Arc::new(move |_| seen_hide.lock().unwrap().push("hide")),
        );

        dispatcher.dispatch(&ContextMenuEvent {
            kind: MenuEventKind::Click,
            menu_id: "m".into(),
            client_x: None,
            client_y: None,
            item: None,
            triggered_by_accelerator: false,
        });

        assert_eq!(*seen.lock().unwrap(), ["first", "second"]);
    }
}
