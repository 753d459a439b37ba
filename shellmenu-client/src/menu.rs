//! Context and application menus.
//!
//! A menu owns its declared item tree plus the derived, rebuildable state:
//! the transport template and the id → callback registry. Showing a context
//! menu is one protocol round trip correlated by the menu's stable id; the
//! host resolves with the clicked item's id (or nothing), and the menu routes
//! that back to the declaring callback and its event listeners.

use std::sync::Arc;

use shellmenu_core::builder::MenuBuilder;
use shellmenu_core::error::MenuError;
use shellmenu_core::ids::{IdGenerator, UuidGenerator};
use shellmenu_core::item::MenuItem;
use shellmenu_core::registry::ClickRegistry;
use shellmenu_core::template::{build_template, MenuItemRecord};
use shellmenu_core::tree;
use shellmenu_core::wire::{ClickInfo, HideRequest, Position, ShowRequest, ShowResponse};
use thiserror::Error;

use crate::event::{ContextMenuEvent, EventDispatcher, MenuEventKind};
use crate::transport::{
    AnchorHook, ApplicationMenuHost, LinkProbe, MenuTransport, TransportError,
};

/// Failure of a menu lifecycle call. Tree faults come from the implicit
/// build; transport faults from the collaborator seam. Protocol anomalies
/// (stale response, unresolvable item) are not errors — they resolve to no
/// selection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShowError {
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// A cursor-position popup menu declared in the UI process and rendered by
/// the privileged host.
///
/// ```no_run
/// # use std::sync::Arc;
/// # use shellmenu_client::menu::ContextMenu;
/// # use shellmenu_client::transport::MenuTransport;
/// # use shellmenu_core::item::NormalItem;
/// # async fn demo(transport: Arc<dyn MenuTransport>) {
/// let mut menu = ContextMenu::create("editor", transport, |builder| {
///     builder.normal(
///         NormalItem::new("Undo")
///             .with_id("undo")
///             .with_click(|_, _| println!("undo")),
///     );
/// });
/// let clicked = menu.show(120.0, 80.0).await.unwrap();
/// # let _ = clicked;
/// # }
/// ```
pub struct ContextMenu {
    id: String,
    name: String,
    ids: Arc<dyn IdGenerator>,
    items: Vec<MenuItem>,
    template: Vec<MenuItemRecord>,
    registry: ClickRegistry,
    transport: Arc<dyn MenuTransport>,
    link_probe: Option<Arc<dyn LinkProbe>>,
    anchor: Option<Arc<dyn AnchorHook>>,
    events: EventDispatcher,
    built: bool,
}

impl ContextMenu {
    /// Creates a named menu with random item ids, populated by `build`.
    pub fn create<F>(name: impl Into<String>, transport: Arc<dyn MenuTransport>, build: F) -> Self
    where
        F: FnOnce(&mut MenuBuilder),
    {
        Self::with_ids(name, transport, Arc::new(UuidGenerator), build)
    }

    /// Creates a menu with an injected id generator. The menu's own
    /// correlation id is drawn from the generator first, before any item ids.
    pub fn with_ids<F>(
        name: impl Into<String>,
        transport: Arc<dyn MenuTransport>,
        ids: Arc<dyn IdGenerator>,
        build: F,
    ) -> Self
    where
        F: FnOnce(&mut MenuBuilder),
    {
        let id = ids.next_id();
        let mut builder = MenuBuilder::with_ids(ids.clone());
        build(&mut builder);
        Self {
            id,
            name: name.into(),
            ids,
            items: builder.into_items(),
            template: Vec::new(),
            registry: ClickRegistry::new(),
            transport,
            link_probe: None,
            anchor: None,
            events: EventDispatcher::default(),
            built: false,
        }
    }

    /// Creates a menu from a pre-built item list. Items still pass through a
    /// builder so any missing ids get assigned.
    pub fn from_items(
        name: impl Into<String>,
        transport: Arc<dyn MenuTransport>,
        items: Vec<MenuItem>,
    ) -> Self {
        Self::create(name, transport, |builder| {
            for item in items {
                builder.add(item);
            }
        })
    }

    /// Stable correlation id of this menu.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name the menu was declared under; used by the anchor hook.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top-level items, in insertion order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// The template produced by the last build. Useful for verification.
    pub fn template(&self) -> &[MenuItemRecord] {
        &self.template
    }

    /// Sets the hit-testing capability used to resolve a link URL at the
    /// show position.
    pub fn with_link_probe(mut self, probe: Arc<dyn LinkProbe>) -> Self {
        self.link_probe = Some(probe);
        self
    }

    /// Registers a listener for one lifecycle event kind.
    pub fn on<F>(&mut self, kind: MenuEventKind, listener: F) -> &mut Self
    where
        F: Fn(&ContextMenuEvent) + Send + Sync + 'static,
    {
        self.events.on(kind, Arc::new(listener));
        self
    }

    /// Appends an item, assigning an id if needed. Invalidates the current
    /// build.
    pub fn add(&mut self, item: impl Into<MenuItem>) -> &mut Self {
        let mut builder = MenuBuilder::with_ids(self.ids.clone());
        builder.add(item);
        self.items.extend(builder.into_items());
        self.built = false;
        self
    }

    /// Recomputes the template and the click registry from current item
    /// state. Fails on duplicate non-empty ids or invalid share items; a
    /// broken tree is never shipped. Safe to call repeatedly — derived state
    /// is rebuilt wholesale, never patched.
    pub fn build(&mut self) -> Result<&mut Self, MenuError> {
        self.template = build_template(&self.items, &mut self.registry)?;
        self.built = true;
        log::debug!(
            "built context menu {} ({} handlers)",
            self.id,
            self.registry.len()
        );
        Ok(self)
    }

    /// Checks the radio item with the given id and clears its radio
    /// siblings. Local state only; takes effect on the next build.
    pub fn select_radio(&mut self, id: &str) -> bool {
        let changed = tree::select_radio(&mut self.items, id);
        if changed {
            self.built = false;
        }
        changed
    }

    /// Sets a checkbox's checked state. Local state only; takes effect on
    /// the next build.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> bool {
        let changed = tree::set_checked(&mut self.items, id, checked);
        if changed {
            self.built = false;
        }
        changed
    }

    /// Finds a declared item by id.
    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        tree::find(&self.items, id)
    }

    /// Claims an anchor through the attachment hook, releasing any previous
    /// one first.
    pub fn attach(&mut self, hook: Arc<dyn AnchorHook>) -> &mut Self {
        self.detach();
        hook.attached(&self.name);
        self.anchor = Some(hook);
        self
    }

    /// Releases the current anchor, if any. Leaves the item tree untouched.
    /// Dropping the menu releases the anchor the same way.
    pub fn detach(&mut self) -> &mut Self {
        if let Some(hook) = self.anchor.take() {
            hook.detached(&self.name);
        }
        self
    }

    /// Shows the menu at the given client coordinates, resolving the link
    /// URL through the configured probe, and resolves to the clicked item —
    /// or `None` when the menu was dismissed, the response was stale, or the
    /// clicked id no longer exists locally.
    pub async fn show(&mut self, x: f64, y: f64) -> Result<Option<MenuItem>, ShowError> {
        let link_url = self
            .link_probe
            .as_ref()
            .and_then(|probe| probe.link_url_at(x, y));
        self.show_with_link(x, y, link_url).await
    }

    /// [`show`](ContextMenu::show) with an explicit link URL.
    ///
    /// Exactly one hide event is dispatched per call, whichever exit path is
    /// taken, and a show event always precedes it.
    pub async fn show_with_link(
        &mut self,
        x: f64,
        y: f64,
        link_url: Option<String>,
    ) -> Result<Option<MenuItem>, ShowError> {
        if !self.built {
            self.build()?;
        }

        let request = ShowRequest {
            menu_id: self.id.clone(),
            position: Position { x, y },
            template: self.template.clone(),
            link_url,
        };

        log::debug!("showing context menu {} at ({x}, {y})", self.id);

        // Start the round trip before announcing the show, but only await it
        // afterwards: the show event must precede any click/hide.
        let transport = Arc::clone(&self.transport);
        let pending = transport.show(request);
        self.dispatch(MenuEventKind::Show, Some((x, y)), None, false);

        let response = match pending.await {
            Ok(response) => response,
            Err(err) => {
                // The lifecycle still closes when the transport fails.
                self.dispatch(MenuEventKind::Hide, Some((x, y)), None, false);
                return Err(err.into());
            }
        };
        Ok(self.resolve_response(response, x, y))
    }

    fn resolve_response(&self, response: ShowResponse, x: f64, y: f64) -> Option<MenuItem> {
        if response.menu_id != self.id {
            // A response for some other concurrently open menu; nothing here
            // may be attributed to a real item. The lifecycle still closes.
            log::warn!(
                "stale menu response: got {}, expected {}",
                response.menu_id,
                self.id
            );
            self.dispatch(MenuEventKind::Hide, Some((x, y)), None, false);
            return None;
        }

        let item = match response.menu_item_id.as_deref() {
            None => None,
            Some(item_id) => {
                let found = tree::find(&self.items, item_id).cloned();
                if found.is_none() {
                    // Host and client trees desynced (e.g. the menu mutated
                    // without a rebuild). Recoverable: treat as no selection.
                    log::warn!(
                        "menu {} response named unknown item {item_id}",
                        self.id
                    );
                }
                found
            }
        };

        let Some(item) = item else {
            self.dispatch(MenuEventKind::Hide, Some((x, y)), None, false);
            return None;
        };

        if let Some(click) = self.registry.get(item.id()).or_else(|| item.click()) {
            click(&item, &response.event);
        }

        let accelerated = response.event.triggered_by_accelerator;
        self.dispatch(
            MenuEventKind::Click,
            Some((x, y)),
            Some(item.clone()),
            accelerated,
        );
        self.dispatch(
            MenuEventKind::Hide,
            Some((x, y)),
            Some(item.clone()),
            accelerated,
        );
        Some(item)
    }

    /// Asks the host to close any open popup for this menu, then dispatches
    /// a local hide with no item. The outstanding `show()` (if any) still
    /// resolves through the host's close callback.
    pub async fn hide(&self) -> Result<(), TransportError> {
        log::debug!("hiding context menu {}", self.id);
        self.transport
            .hide(HideRequest {
                menu_id: self.id.clone(),
            })
            .await?;
        self.dispatch(MenuEventKind::Hide, None, None, false);
        Ok(())
    }

    fn dispatch(
        &self,
        kind: MenuEventKind,
        position: Option<(f64, f64)>,
        item: Option<MenuItem>,
        triggered_by_accelerator: bool,
    ) {
        self.events.dispatch(&ContextMenuEvent {
            kind,
            menu_id: self.id.clone(),
            client_x: position.map(|(x, _)| x),
            client_y: position.map(|(_, y)| y),
            item,
            triggered_by_accelerator,
        });
    }
}

impl Drop for ContextMenu {
    fn drop(&mut self) {
        self.detach();
    }
}

/// The application's persistent menu bar, installed once on the host rather
/// than popped up per position. Clicks reported by the host are routed
/// through [`handle_click`](ApplicationMenu::handle_click).
pub struct ApplicationMenu {
    id: String,
    ids: Arc<dyn IdGenerator>,
    items: Vec<MenuItem>,
    template: Vec<MenuItemRecord>,
    registry: ClickRegistry,
    host: Arc<dyn ApplicationMenuHost>,
    events: EventDispatcher,
    built: bool,
}

impl ApplicationMenu {
    pub fn create<F>(host: Arc<dyn ApplicationMenuHost>, build: F) -> Self
    where
        F: FnOnce(&mut MenuBuilder),
    {
        Self::with_ids(host, Arc::new(UuidGenerator), build)
    }

    pub fn with_ids<F>(
        host: Arc<dyn ApplicationMenuHost>,
        ids: Arc<dyn IdGenerator>,
        build: F,
    ) -> Self
    where
        F: FnOnce(&mut MenuBuilder),
    {
        let id = ids.next_id();
        let mut builder = MenuBuilder::with_ids(ids.clone());
        build(&mut builder);
        Self {
            id,
            ids,
            items: builder.into_items(),
            template: Vec::new(),
            registry: ClickRegistry::new(),
            host,
            events: EventDispatcher::default(),
            built: false,
        }
    }

    /// Creates a menu bar from a pre-built item list. Items still pass
    /// through a builder so any missing ids get assigned.
    pub fn from_items(host: Arc<dyn ApplicationMenuHost>, items: Vec<MenuItem>) -> Self {
        Self::create(host, |builder| {
            for item in items {
                builder.add(item);
            }
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn template(&self) -> &[MenuItemRecord] {
        &self.template
    }

    pub fn add(&mut self, item: impl Into<MenuItem>) -> &mut Self {
        let mut builder = MenuBuilder::with_ids(self.ids.clone());
        builder.add(item);
        self.items.extend(builder.into_items());
        self.built = false;
        self
    }

    pub fn on<F>(&mut self, kind: MenuEventKind, listener: F) -> &mut Self
    where
        F: Fn(&ContextMenuEvent) + Send + Sync + 'static,
    {
        self.events.on(kind, Arc::new(listener));
        self
    }

    /// Same contract as [`ContextMenu::build`].
    pub fn build(&mut self) -> Result<&mut Self, MenuError> {
        self.template = build_template(&self.items, &mut self.registry)?;
        self.built = true;
        Ok(self)
    }

    pub fn select_radio(&mut self, id: &str) -> bool {
        let changed = tree::select_radio(&mut self.items, id);
        if changed {
            self.built = false;
        }
        changed
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) -> bool {
        let changed = tree::set_checked(&mut self.items, id, checked);
        if changed {
            self.built = false;
        }
        changed
    }

    /// Builds (if needed) and installs the menu bar on the host.
    pub fn install(&mut self) -> Result<&mut Self, ShowError> {
        if !self.built {
            self.build()?;
        }
        log::debug!("installing application menu {}", self.id);
        self.host.set_menu(&self.id, &self.template)?;
        Ok(self)
    }

    /// Routes a host-reported click back to the declaring item: invokes its
    /// callback and dispatches a click event. Returns the resolved item, or
    /// `None` for an unknown id (a recoverable desync, as on the context
    /// path).
    pub fn handle_click(&self, menu_item_id: &str, event: &ClickInfo) -> Option<MenuItem> {
        let Some(item) = tree::find(&self.items, menu_item_id).cloned() else {
            log::warn!(
                "application menu {} click named unknown item {menu_item_id}",
                self.id
            );
            return None;
        };
        if let Some(click) = self.registry.get(item.id()).or_else(|| item.click()) {
            click(&item, event);
        }
        self.events.dispatch(&ContextMenuEvent {
            kind: MenuEventKind::Click,
            menu_id: self.id.clone(),
            client_x: None,
            client_y: None,
            item: Some(item.clone()),
            triggered_by_accelerator: event.triggered_by_accelerator,
        });
        Some(item)
    }
}
