//! Browser implementations of the [`control`](crate::control) traits.

use crate::control::{Activation, LoginControl, Navigator, OnActivate, Page};
use gloo_events::{EventListener, EventListenerOptions};
use std::{
    cell::RefCell,
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};
use web_sys::{Document, Element, Event};
#[cfg(feature = "tracing")]
use tracing::{debug, error, warn};

thread_local! {
    /// Live activation listeners keyed by the id stamped on their element.
    ///
    /// An entry is only dropped when its element is re-armed, so listeners on elements that
    /// leave the DOM stay registered until the page view ends.
    static ACTIVATION_LISTENERS: RefCell<HashMap<usize, EventListener>> = RefCell::new(HashMap::new());
}

static NEXT_LISTENER_ID: AtomicUsize = AtomicUsize::new(0);

/// Attribute tying an element to its entry in `ACTIVATION_LISTENERS`.
const LISTENER_ATTRIBUTE: &str = "data-login-toggle-listener";
const HREF_ATTRIBUTE: &str = "href";
const ACTIVATION_EVENT: &str = "click";

/// The current document.
#[derive(Debug, Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new() -> Self {
        Self::from_document(gloo_utils::document())
    }

    pub fn from_document(document: Document) -> Self {
        Self { document }
    }
}

impl Default for DomPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for DomPage {
    type Control = DomControl;

    fn login_control(&self, selector: &str) -> Option<DomControl> {
        match self.document.query_selector(selector) {
            Ok(element) => element.map(DomControl::new),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                warn!("Invalid selector {selector}: {_e:?}");
                None
            }
        }
    }
}

/// An element acting as the login/logout control, usually an `<a>`.
#[derive(Debug, Clone)]
pub struct DomControl {
    element: Element,
}

impl DomControl {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    fn detach_listener(&self) {
        let Some(id) = self
            .element
            .get_attribute(LISTENER_ATTRIBUTE)
            .and_then(|id| id.parse::<usize>().ok())
        else {
            return;
        };
        // Dropping the listener unregisters it from the element.
        if let Some(_listener) =
            ACTIVATION_LISTENERS.with(|listeners| listeners.borrow_mut().remove(&id))
        {
            #[cfg(feature = "tracing")]
            debug!("Replaced activation listener {id}");
        }
    }
}

impl LoginControl for DomControl {
    fn text(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn navigation_target(&self) -> Option<String> {
        self.element.get_attribute(HREF_ATTRIBUTE)
    }

    fn set_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn set_navigation_target(&mut self, target: &str) {
        if let Err(_e) = self.element.set_attribute(HREF_ATTRIBUTE, target) {
            #[cfg(feature = "tracing")]
            error!("Could not set href: {_e:?}");
        }
    }

    fn on_activate(&mut self, mut callback: OnActivate) {
        self.detach_listener();

        let id = NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed);
        if let Err(_e) = self
            .element
            .set_attribute(LISTENER_ATTRIBUTE, &id.to_string())
        {
            #[cfg(feature = "tracing")]
            error!("Could not tag element with listener id: {_e:?}");
        }

        let listener = EventListener::new_with_options(
            &self.element,
            ACTIVATION_EVENT,
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| callback(&DomActivation(event) as &dyn Activation),
        );
        ACTIVATION_LISTENERS.with(|listeners| {
            listeners.borrow_mut().insert(id, listener);
        });
    }
}

/// A click on a [`DomControl`].
pub struct DomActivation<'a>(&'a Event);

impl Activation for DomActivation<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// [`Navigator`] using `window.alert` and `window.location`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn acknowledge(&self, message: &str) {
        if let Err(_e) = gloo_utils::window().alert_with_message(message) {
            #[cfg(feature = "tracing")]
            error!("Could not show logout acknowledgment: {_e:?}");
        }
    }

    fn navigate(&self, target: &str) {
        if let Err(_e) = gloo_utils::window().location().set_href(target) {
            #[cfg(feature = "tracing")]
            error!("Failed to set href during logout: {_e:?}");
        }
    }
}
