//! Object URL lifetime management.

use web_sys::{Blob, Url};

/// An object URL that revokes itself when dropped.
///
/// Wraps `URL.createObjectURL`. The browser keeps the underlying blob
/// alive for as long as the URL exists, so previews must be revoked when
/// they leave the screen instead of accumulating until navigation.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Creates an object URL for the given blob.
    pub fn for_blob(blob: &Blob) -> Result<Self, String> {
        let url = Url::create_object_url_with_blob(blob).map_err(|e| format!("{e:?}"))?;
        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}
