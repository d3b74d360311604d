//! Session queue
//!
//! Ordered playlist plus a current-item cursor. Insertion order defines
//! skip-next/skip-previous order. Pure data structure; only the session
//! controller mutates it.

use crate::error::{Result, SessionError};
use crate::types::QueueItem;

/// Ordered playlist with a current-index cursor
///
/// Invariant: the cursor is `None` exactly when the queue is empty, and
/// otherwise a valid index into the items.
#[derive(Debug, Clone, Default)]
pub struct SessionQueue {
    /// Items in insertion order
    items: Vec<QueueItem>,

    /// Index of the current item
    cursor: Option<usize>,
}

impl SessionQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
        }
    }

    /// Append an item to the queue
    ///
    /// The first item added becomes the current item.
    pub fn add_item(&mut self, item: QueueItem) {
        self.items.push(item);
        if self.cursor.is_none() {
            self.cursor = Some(0);
        }
    }

    /// Remove the first item with the given identifier
    ///
    /// Returns the removed item, or `None` if no entry matches. The cursor
    /// keeps pointing at the same logical item where possible: removing an
    /// entry before the cursor shifts it down one, removing at or after the
    /// cursor clamps it into range.
    pub fn remove_item(&mut self, item_id: &str) -> Option<QueueItem> {
        let index = self.items.iter().position(|item| item.id == item_id)?;
        let removed = self.items.remove(index);

        self.cursor = if self.items.is_empty() {
            None
        } else {
            self.cursor.map(|cursor| {
                if index < cursor {
                    cursor - 1
                } else {
                    cursor.min(self.items.len() - 1)
                }
            })
        };

        Some(removed)
    }

    /// Advance the cursor to the next item, wrapping past the end
    pub fn advance(&mut self) -> Result<()> {
        let cursor = self.cursor.ok_or(SessionError::QueueEmpty)?;
        self.cursor = Some((cursor + 1) % self.items.len());
        Ok(())
    }

    /// Move the cursor to the previous item, wrapping before the start
    pub fn retreat(&mut self) -> Result<()> {
        let cursor = self.cursor.ok_or(SessionError::QueueEmpty)?;
        self.cursor = Some(if cursor == 0 {
            self.items.len() - 1
        } else {
            cursor - 1
        });
        Ok(())
    }

    /// Get the item at the cursor
    pub fn current(&self) -> Option<&QueueItem> {
        self.cursor.map(|cursor| &self.items[cursor])
    }

    /// Current cursor position
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// All items in queue order
    pub fn items(&self) -> &[QueueItem] {
        &self.items
    }

    /// Number of items in the queue
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
