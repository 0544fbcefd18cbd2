//! Reflects a browser session stored by the site's login form into its login control.
//!
//! On page load the [`SessionReflector`] reads the identity label from `localStorage`. When
//! one is present, the `.btn-login` control becomes `Logout (<identity>)`, and clicking it
//! runs the [`SessionTerminator`], which erases the record, acknowledges the logout and
//! returns to `index.html`.
//!
//! This is presentation only: nothing is verified against a server.
//!
//! # Usage
//! ```no_run
//! use login_toggle::{install, SessionOptions};
//!
//! install(SessionOptions::default());
//! ```

use crate::storage::SessionStorageType;
use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
#[cfg(feature = "tracing")]
use tracing::debug;

pub mod control;
pub mod dom;
pub mod options;
pub mod reflector;
pub mod session;
pub mod storage;
pub mod terminator;
#[cfg(test)]
mod test_util;

pub use control::{Activation, LoginControl, Navigator, OnActivate, Page};
pub use dom::{DomControl, DomPage, WindowNavigator};
pub use options::SessionOptions;
pub use reflector::{ReflectOutcome, SessionReflector};
pub use session::{Role, SessionRecord};
pub use storage::{LocalStorage, MemoryStorage, SessionStorage, StorageError};
pub use terminator::SessionTerminator;

const DOM_CONTENT_LOADED: &str = "DOMContentLoaded";
/// `document.readyState` while the markup is still being parsed.
const READY_STATE_LOADING: &str = "loading";

/// Whether a document in `ready_state` has finished parsing its markup.
fn is_parsed(ready_state: &str) -> bool {
    ready_state != READY_STATE_LOADING
}

/// Runs the reflector against the current document once its markup has been parsed.
///
/// If parsing already finished the reflector runs immediately, otherwise on
/// `DOMContentLoaded`.
pub fn install(options: SessionOptions) {
    let reflector = SessionReflector::new(SessionStorageType::detect(), WindowNavigator, options);
    let document = gloo_utils::document();

    if is_parsed(&document.ready_state()) {
        reflector.reflect(&DomPage::from_document(document));
        return;
    }

    #[cfg(feature = "tracing")]
    debug!("Document still loading, waiting for {DOM_CONTENT_LOADED}");

    EventListener::once(&document, DOM_CONTENT_LOADED, move |_| {
        reflector.reflect(&DomPage::new());
    })
    .forget();
}

/// Logs the user out of the current page without going through the control.
pub fn logout(options: SessionOptions) {
    SessionReflector::new(SessionStorageType::detect(), WindowNavigator, options)
        .terminator()
        .terminate();
}

/// JavaScript entry point for pages that log out from their own handlers.
#[wasm_bindgen(js_name = logoutUser)]
pub fn logout_user() {
    logout(SessionOptions::default());
}

#[cfg(feature = "start")]
#[wasm_bindgen(start)]
pub fn start() {
    install(SessionOptions::default());
}


#[cfg(all(test, target_family = "wasm"))]
mod wasm_tests {
    use super::*;
    use crate::storage::{KEY_IDENTITY, KEY_ROLE};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_install_after_parse_reflects_immediately() {
        let mut storage = LocalStorage::new();
        storage.set(KEY_IDENTITY, "alice").unwrap();
        storage.set(KEY_ROLE, "mentor").unwrap();

        let element = gloo_utils::document().create_element("a").unwrap();
        element.set_class_name("install-test");
        element.set_text_content(Some("Login"));
        element.set_attribute("href", "login.html").unwrap();
        gloo_utils::body().append_child(&element).unwrap();

        install(SessionOptions::builder().selector(".install-test").build());

        assert_eq!(element.text_content().as_deref(), Some("Logout (alice)"));
        assert_eq!(element.get_attribute("href").as_deref(), Some("#"));

        element.remove();
        SessionRecord::clear(&mut storage, &SessionOptions::default());
    }
}
