//! In-memory page, control and navigator used by unit tests.

use crate::{
    control::{Activation, LoginControl, Navigator, OnActivate, Page},
    storage::MemoryStorage,
};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

#[derive(Default)]
struct ControlState {
    text: String,
    target: Option<String>,
    handler: Option<OnActivate>,
    handlers_installed: usize,
}

/// A control whose clones share state, like handles to one DOM element.
#[derive(Clone, Default)]
pub(crate) struct FakeControl {
    state: Rc<RefCell<ControlState>>,
}

impl FakeControl {
    pub(crate) fn new(text: &str, target: &str) -> Self {
        let control = Self::default();
        {
            let mut state = control.state.borrow_mut();
            state.text = text.to_string();
            state.target = Some(target.to_string());
        }
        control
    }

    pub(crate) fn handlers_installed(&self) -> usize {
        self.state.borrow().handlers_installed
    }

    pub(crate) fn has_handler(&self) -> bool {
        self.state.borrow().handler.is_some()
    }

    /// Activates the control. Returns `true` if the default action was suppressed.
    pub(crate) fn activate(&self) -> bool {
        let activation = FakeActivation::default();
        let handler = self.state.borrow_mut().handler.take();
        if let Some(mut handler) = handler {
            handler(&activation as &dyn Activation);
            self.state.borrow_mut().handler.get_or_insert(handler);
        }
        activation.default_prevented.get()
    }
}

impl LoginControl for FakeControl {
    fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    fn navigation_target(&self) -> Option<String> {
        self.state.borrow().target.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.state.borrow_mut().text = text.to_string();
    }

    fn set_navigation_target(&mut self, target: &str) {
        self.state.borrow_mut().target = Some(target.to_string());
    }

    fn on_activate(&mut self, callback: OnActivate) {
        let mut state = self.state.borrow_mut();
        state.handler = Some(callback);
        state.handlers_installed += 1;
    }
}

#[derive(Default)]
pub(crate) struct FakeActivation {
    default_prevented: Cell<bool>,
}

impl Activation for FakeActivation {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

/// A page holding at most one control under a single selector.
pub(crate) struct FakePage {
    selector: String,
    control: Option<FakeControl>,
}

impl FakePage {
    pub(crate) fn with_control(selector: &str, control: FakeControl) -> Self {
        Self {
            selector: selector.to_string(),
            control: Some(control),
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            selector: String::new(),
            control: None,
        }
    }
}

impl Page for FakePage {
    type Control = FakeControl;

    fn login_control(&self, selector: &str) -> Option<FakeControl> {
        self.control
            .as_ref()
            .filter(|_| self.selector == selector)
            .cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NavigationEvent {
    /// The acknowledgment was shown while `keys_left` items were still stored.
    Acknowledged { message: String, keys_left: usize },
    Navigated(String),
}

/// Records acknowledgments and redirects instead of performing them.
#[derive(Clone, Default)]
pub(crate) struct FakeNavigator {
    events: Rc<RefCell<Vec<NavigationEvent>>>,
    storage: MemoryStorage,
}

impl FakeNavigator {
    pub(crate) fn watching(storage: MemoryStorage) -> Self {
        Self {
            events: Rc::default(),
            storage,
        }
    }

    pub(crate) fn events(&self) -> Vec<NavigationEvent> {
        self.events.borrow().clone()
    }

    pub(crate) fn location(&self) -> Option<String> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            NavigationEvent::Navigated(target) => Some(target.clone()),
            NavigationEvent::Acknowledged { .. } => None,
        })
    }
}

impl Navigator for FakeNavigator {
    fn acknowledge(&self, message: &str) {
        self.events.borrow_mut().push(NavigationEvent::Acknowledged {
            message: message.to_string(),
            keys_left: self.storage.len(),
        });
    }

    fn navigate(&self, target: &str) {
        self.events
            .borrow_mut()
            .push(NavigationEvent::Navigated(target.to_string()));
    }
}
