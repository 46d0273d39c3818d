//! Window location reads used by the origin policy.

/// Hostname of the current page, e.g. `localhost`.
pub fn hostname() -> Option<String> {
    web_sys::window().and_then(|w| w.location().hostname().ok())
}

/// Origin of the current page, e.g. `https://auction.example.com`.
pub fn origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}
