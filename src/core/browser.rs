//! # List Browser
//!
//! Bounded cursor over a fixed list owned by the content source.
//! The list is never mutated; the browser only remembers where you are.

use crate::core::action::Key;

pub struct ListBrowser<T> {
    items: Vec<T>,
    cursor: usize,
}

impl<T> ListBrowser<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, cursor: 0 }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    /// Route a key to the browser. Keys other than Up/Down are ignored.
    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Up => self.move_up(),
            Key::Down => self.move_down(),
            _ => {}
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn selected(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }
}
