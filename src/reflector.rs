use crate::{
    control::{Activation, LoginControl, Navigator, Page},
    options::SessionOptions,
    session::SessionRecord,
    storage::SessionStorage,
    terminator::SessionTerminator,
};
use std::sync::Arc;
#[cfg(feature = "tracing")]
use tracing::{debug, info};

/// What [`SessionReflector::reflect`] did to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflectOutcome {
    /// No identity is stored; the control was left as the markup defines it.
    Anonymous,
    /// An identity is stored but the page has no login control.
    ControlMissing,
    /// The control now reads as a logout button for `identity`.
    LoggedIn { identity: String },
}

/// Mirrors the stored session into the login control.
#[derive(Debug, Clone)]
pub struct SessionReflector<S, N> {
    storage: S,
    navigator: N,
    options: Arc<SessionOptions>,
}

impl<S, N> SessionReflector<S, N>
where
    S: SessionStorage + 'static,
    N: Navigator + 'static,
{
    pub fn new(storage: S, navigator: N, options: SessionOptions) -> Self {
        Self {
            storage,
            navigator,
            options: Arc::new(options),
        }
    }

    /// A terminator sharing this reflector's storage, navigator and options.
    pub fn terminator(&self) -> SessionTerminator<S, N> {
        SessionTerminator::new(
            self.storage.clone(),
            self.navigator.clone(),
            self.options.clone(),
        )
    }

    /// Turns the page's login control into a logout control if an identity is stored.
    ///
    /// When no identity is stored, or the page has no control, the page is not touched.
    /// On success the control's text names the user, its target becomes a no-op anchor,
    /// and activating it suppresses navigation and runs the terminator.
    pub fn reflect<P: Page>(&self, page: &P) -> ReflectOutcome {
        let record = SessionRecord::load(&self.storage, &self.options);
        let Some(identity) = record.identity else {
            #[cfg(feature = "tracing")]
            debug!("No stored identity, leaving login control untouched");
            return ReflectOutcome::Anonymous;
        };
        let Some(mut control) = page.login_control(&self.options.selector) else {
            #[cfg(feature = "tracing")]
            debug!("No element matches {}", self.options.selector);
            return ReflectOutcome::ControlMissing;
        };

        control.set_text(&self.options.logout_label(&identity));
        control.set_navigation_target(&self.options.placeholder_target);

        let mut terminator = self.terminator();
        control.on_activate(Box::new(move |activation: &dyn Activation| {
            activation.prevent_default();
            terminator.terminate();
        }));

        #[cfg(feature = "tracing")]
        info!("Login control switched to logout for {identity}");

        ReflectOutcome::LoggedIn { identity }
    }
}
