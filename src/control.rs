//! Capabilities the reflector and terminator need from the page.
//!
//! [`dom`](crate::dom) implements these on top of `web-sys`; tests use in-memory fakes.

/// An activation of the login/logout control (a click, in the browser).
pub trait Activation {
    /// Suppresses the control's default navigation.
    fn prevent_default(&self);
}

/// Handler run on every activation of a control.
pub type OnActivate = Box<dyn FnMut(&dyn Activation)>;

/// The single interactive element toggling between login and logout.
pub trait LoginControl {
    /// Current visible text.
    fn text(&self) -> String;

    /// Current navigation target, if any.
    fn navigation_target(&self) -> Option<String>;

    fn set_text(&mut self, text: &str);

    fn set_navigation_target(&mut self, target: &str);

    /// Installs `callback` as the control's activation handler.
    ///
    /// A control holds at most one handler from this crate: installing a new one replaces
    /// the previous one, so running the reflector twice never logs out twice per click.
    fn on_activate(&mut self, callback: OnActivate);
}

/// The document hosting the control.
pub trait Page {
    type Control: LoginControl;

    /// Returns the first element matching `selector`, or `None` if there is none.
    fn login_control(&self, selector: &str) -> Option<Self::Control>;
}

/// User-facing effects of logging out.
pub trait Navigator: Clone {
    /// Presents a blocking acknowledgment and returns once it is dismissed.
    fn acknowledge(&self, message: &str);

    /// Sends the browser to `target`, ending the current page view.
    fn navigate(&self, target: &str);
}
