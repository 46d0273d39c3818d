//! Session state.
//!
//! The root component owns a single [`AuthState`] value; everything the
//! rest of the tree may do to it goes through the named transitions
//! here. The session itself lives in a server-set cookie; the client
//! only checks that the cookie exists and expires it on the way out, it
//! never creates or parses the session value.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

use crate::items::Item;
use crate::web;

/// Name of the cookie the server sets on login.
pub const SESSION_COOKIE: &str = "sessionId";

/// Which form the signed-out view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// The one authoritative authentication state.
///
/// Items live inside the signed-in variant, so demotion cannot leave a
/// stale list behind: leaving `SignedIn` drops them with the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    SignedOut { mode: AuthMode },
    SignedIn { items: Vec<Item> },
}

impl AuthState {
    /// Startup state: signed-in is assumed until an authenticated call
    /// says otherwise. There is no pre-flight probe; the first 400/401
    /// is what demotes.
    pub fn assume_signed_in() -> Self {
        AuthState::SignedIn { items: Vec::new() }
    }

    pub fn signed_out() -> Self {
        AuthState::SignedOut {
            mode: AuthMode::Login,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, AuthState::SignedIn { .. })
    }

    /// The active form, when signed out.
    pub fn mode(&self) -> Option<AuthMode> {
        match self {
            AuthState::SignedOut { mode } => Some(*mode),
            AuthState::SignedIn { .. } => None,
        }
    }

    pub fn items(&self) -> &[Item] {
        match self {
            AuthState::SignedIn { items } => items,
            AuthState::SignedOut { .. } => &[],
        }
    }

    // Transitions. Each one no-ops outside its source state, so a stale
    // async completion cannot push the machine somewhere illegal.

    /// Login accepted: enter the signed-in view with an empty list. The
    /// list load follows as an effect of the signed-in flag flipping.
    pub fn login_succeeded(&mut self) {
        if let AuthState::SignedOut { .. } = self {
            *self = AuthState::SignedIn { items: Vec::new() };
        }
    }

    /// Signup accepted: back to the login form, no auto-login.
    pub fn signup_succeeded(&mut self) {
        if let AuthState::SignedOut { mode } = self {
            *mode = AuthMode::Login;
        }
    }

    /// Switch between the two signed-out forms.
    pub fn switch_mode(&mut self, to: AuthMode) {
        if let AuthState::SignedOut { mode } = self {
            *mode = to;
        }
    }

    /// Logout or demotion. Items are dropped with the variant.
    pub fn sign_out(&mut self) {
        *self = AuthState::signed_out();
    }

    /// A list load finished. Ignored unless still signed in, so a late
    /// response cannot resurrect items after demotion.
    pub fn items_loaded(&mut self, loaded: Vec<Item>) {
        if let AuthState::SignedIn { items } = self {
            *items = loaded;
        }
    }
}

/// Looks up a cookie by name in a raw `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').map(str::trim).find_map(|part| {
        let rest = part.strip_prefix(name)?;
        let value = rest.strip_prefix('=')?;
        Some(value.to_string())
    })
}

/// Whether the session cookie is present and non-empty.
///
/// Advisory only: the server, not this check, decides whether the
/// session is actually honored.
pub fn has_session() -> bool {
    cookie_value(&web::cookie::read_all(), SESSION_COOKIE).is_some_and(|v| !v.is_empty())
}

/// Expires the session cookie.
pub fn clear_session() {
    web::cookie::write(&format!(
        "{SESSION_COOKIE}=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/"
    ));
}

/// Transport encoding applied to passwords before they leave the page.
///
/// An encoding convention shared with the backend, not encryption; the
/// cookie-based session is what protects the account.
pub fn encode_password(raw: &str) -> String {
    BASE64.encode(raw)
}
