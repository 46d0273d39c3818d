//! Item domain model and list-view state.

use serde::Deserialize;

/// Path under the backend origin where uploaded images are served.
pub const UPLOADS_PATH: &str = "/public/uploads";

/// Wire shape of an item as returned by `GET /items`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ItemRecord {
    pub name: String,
    pub price: f64,
    pub images: Vec<String>,
}

/// A listed item, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub price: f64,
    /// Absolute picture URLs, in server order.
    pub pictures: Vec<String>,
}

impl Item {
    /// Maps a wire record to a displayable item, resolving every image
    /// filename against the backend origin.
    pub fn from_record(record: ItemRecord, origin: &str) -> Self {
        let pictures = record
            .images
            .into_iter()
            .map(|filename| upload_url(origin, &filename))
            .collect();
        Self {
            name: record.name,
            price: record.price,
            pictures,
        }
    }
}

/// URL an uploaded image is served from.
pub fn upload_url(origin: &str, filename: &str) -> String {
    format!("{origin}{UPLOADS_PATH}/{filename}")
}

/// Hover-driven picture cycling for the item list.
///
/// One value serves the whole list: it remembers which row the pointer
/// is in and which of that row's pictures is up. Rows the pointer is not
/// in always show their first picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverCycle {
    hovered: Option<usize>,
    picture: usize,
}

impl HoverCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered the given row: start at its first picture.
    pub fn enter(&mut self, item: usize) {
        self.hovered = Some(item);
        self.picture = 0;
    }

    /// Pointer left whatever row it was in.
    pub fn leave(&mut self) {
        self.hovered = None;
        self.picture = 0;
    }

    /// Pointer moved over a row's image: advance one picture, wrapping.
    ///
    /// A move over a row that was never entered (stray event order) is
    /// treated as an enter.
    pub fn pointer_over(&mut self, item: usize, picture_count: usize) {
        if self.hovered != Some(item) {
            self.enter(item);
            return;
        }
        if picture_count > 0 {
            self.picture = (self.picture + 1) % picture_count;
        }
    }

    /// Index of the picture the given row should display.
    pub fn displayed(&self, item: usize) -> usize {
        if self.hovered == Some(item) {
            self.picture
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests;
