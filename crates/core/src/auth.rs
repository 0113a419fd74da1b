//! Capability seams for authentication state and the login flow.
//!
//! The cart gates additions on "is the caller authenticated" and, when the
//! answer is no, hands control to a login flow. Both are cross-cutting
//! concerns owned by the surrounding application, so they are modeled as
//! injected capabilities rather than ambient globals.

use std::rc::Rc;

/// Read-only view of the authentication state.
pub trait AuthState {
    fn is_authenticated(&self) -> bool;
}

/// Navigation capability invoked when an operation requires a signed-in user.
///
/// Blocking on authentication is a control-flow branch, not an error: the
/// implementation typically routes the UI to a login page.
pub trait LoginRedirect {
    fn redirect_to_login(&self);
}

// Shared handles compose: a single session instance usually serves both the
// login flow and the cart.
impl<T: AuthState + ?Sized> AuthState for &T {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

impl<T: AuthState + ?Sized> AuthState for Rc<T> {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

impl<T: LoginRedirect + ?Sized> LoginRedirect for &T {
    fn redirect_to_login(&self) {
        (**self).redirect_to_login()
    }
}

impl<T: LoginRedirect + ?Sized> LoginRedirect for Rc<T> {
    fn redirect_to_login(&self) {
        (**self).redirect_to_login()
    }
}
