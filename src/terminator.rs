use crate::{
    control::Navigator, options::SessionOptions, session::SessionRecord, storage::SessionStorage,
};
use std::sync::Arc;
#[cfg(feature = "tracing")]
use tracing::info;

/// Ends the reflected session: erases the record, acknowledges, and leaves the page.
#[derive(Debug, Clone)]
pub struct SessionTerminator<S, N> {
    storage: S,
    navigator: N,
    options: Arc<SessionOptions>,
}

impl<S, N> SessionTerminator<S, N>
where
    S: SessionStorage,
    N: Navigator,
{
    pub fn new(storage: S, navigator: N, options: Arc<SessionOptions>) -> Self {
        Self {
            storage,
            navigator,
            options,
        }
    }

    /// Logs the user out.
    ///
    /// Both keys are removed before the acknowledgment is shown, so a reload while it is
    /// open cannot see the old record. Nothing here fails: absent keys and storage errors
    /// leave the sequence running.
    pub fn terminate(&mut self) {
        SessionRecord::clear(&mut self.storage, &self.options);

        #[cfg(feature = "tracing")]
        info!("Session cleared, redirecting to {}", self.options.landing_page);

        self.navigator.acknowledge(&self.options.logout_message);
        self.navigator.navigate(&self.options.landing_page);
    }
}
