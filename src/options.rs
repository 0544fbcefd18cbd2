//! Configuration for the login/logout control.
//!
//! Every field has a default matching the site's markup and login form, so
//! `SessionOptions::default()` is what a page normally wants.

use crate::storage::{KEY_IDENTITY, KEY_ROLE};

/// Selector of the login/logout control.
pub const DEFAULT_SELECTOR: &str = ".btn-login";
/// Visible text of the control while a user is logged in.
pub const DEFAULT_LABEL_TEMPLATE: &str = "Logout ({identity})";
/// Navigation target that keeps the control on the current page.
pub const DEFAULT_PLACEHOLDER_TARGET: &str = "#";
/// Page the browser is sent to after logging out.
pub const DEFAULT_LANDING_PAGE: &str = "index.html";
/// Acknowledgment shown before leaving the page.
pub const DEFAULT_LOGOUT_MESSAGE: &str = "You have been logged out.";

const IDENTITY_PLACEHOLDER: &str = "{identity}";

/// Options shared by [`SessionReflector`](crate::SessionReflector) and
/// [`SessionTerminator`](crate::SessionTerminator).
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct SessionOptions {
    /// CSS selector locating the login/logout control.
    #[builder(default = DEFAULT_SELECTOR.to_string())]
    pub selector: String,

    /// Storage key of the identity label.
    #[builder(default = KEY_IDENTITY.to_string())]
    pub identity_key: String,

    /// Storage key of the role label.
    #[builder(default = KEY_ROLE.to_string())]
    pub role_key: String,

    /// Control text while logged in. `{identity}` is replaced with the identity label.
    #[builder(default = DEFAULT_LABEL_TEMPLATE.to_string())]
    pub label_template: String,

    /// Navigation target written to the control so activating it stays on the page.
    #[builder(default = DEFAULT_PLACEHOLDER_TARGET.to_string())]
    pub placeholder_target: String,

    /// Relative location the browser is redirected to after logout.
    #[builder(default = DEFAULT_LANDING_PAGE.to_string())]
    pub landing_page: String,

    /// Blocking acknowledgment presented after the record is erased.
    #[builder(default = DEFAULT_LOGOUT_MESSAGE.to_string())]
    pub logout_message: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions::builder().build()
    }
}

impl SessionOptions {
    /// Renders the logged-in control text for `identity`.
    pub fn logout_label(&self, identity: &str) -> String {
        self.label_template.replace(IDENTITY_PLACEHOLDER, identity)
    }
}
