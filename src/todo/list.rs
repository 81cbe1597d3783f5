//! Ordered list of to-do items and the edit cursor.
//!
//! Items have no identity beyond their position. Every mutation is
//! infallible: blank text and out-of-bounds indices are ignored. Operations
//! that should surface a banner return the [`Notice`] to show; the list never
//! talks to the notifier itself.

use super::notification::Notice;

pub const ADDED: &str = "Item added successfully!";
pub const DELETED: &str = "Item deleted successfully!";
pub const UPDATED: &str = "Item updated successfully!";

#[derive(Debug, Default)]
pub struct TodoList {
    items: Vec<String>,
    editing: Option<usize>,
}

impl TodoList {
    /// Build a list from seed items. Entries are trimmed; blank ones dropped.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = items
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            items,
            editing: None,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the item the next update will replace.
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    pub fn add(&mut self, text: &str) -> Option<Notice> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("ignoring blank add");
            return None;
        }
        self.items.push(text.to_string());
        tracing::info!(index = self.items.len() - 1, "item added");
        Some(Notice::success(ADDED))
    }

    /// Remove the item at `index`. The notice is error-kind on purpose; the
    /// delete banner has always been styled as an error.
    pub fn delete(&mut self, index: usize) -> Option<Notice> {
        if index >= self.items.len() {
            tracing::debug!(index, len = self.items.len(), "ignoring out-of-bounds delete");
            return None;
        }
        self.items.remove(index);
        self.editing = match self.editing {
            Some(cursor) if cursor == index => None,
            Some(cursor) if cursor > index => Some(cursor - 1),
            other => other,
        };
        tracing::info!(index, "item deleted");
        Some(Notice::error(DELETED))
    }

    /// Point the edit cursor at `index` and hand back the text to prefill
    /// the input with.
    pub fn begin_edit(&mut self, index: usize) -> Option<String> {
        let text = self.items.get(index)?.clone();
        self.editing = Some(index);
        tracing::info!(index, "editing item");
        Some(text)
    }

    pub fn cancel_edit(&mut self) -> bool {
        self.editing.take().is_some()
    }

    /// Replace the item under the edit cursor. Does nothing without a cursor
    /// or when `text` is blank; in the latter case the cursor stays put.
    pub fn update(&mut self, text: &str) -> Option<Notice> {
        let index = self.editing?;
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!(index, "ignoring blank update");
            return None;
        }
        let slot = self.items.get_mut(index)?;
        *slot = text.to_string();
        self.editing = None;
        tracing::info!(index, "item updated");
        Some(Notice::success(UPDATED))
    }

    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.items.len() {
            return false;
        }
        self.swap(index - 1, index);
        true
    }

    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.items.len() {
            return false;
        }
        self.swap(index, index + 1);
        true
    }

    // The edit cursor follows the item it points at.
    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.editing = match self.editing {
            Some(cursor) if cursor == a => Some(b),
            Some(cursor) if cursor == b => Some(a),
            other => other,
        };
        tracing::info!(from = b, to = a, "items swapped");
    }
}
