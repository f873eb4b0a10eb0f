//! Selectable word list, most recent entry first.

use crate::core::key::Key;

/// One display record. The list never inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
}

impl Entry {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListState {
    pub entries: Vec<Entry>,
    /// Only meaningful when `entries` is non-empty.
    pub selected: usize,
}

impl ListState {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            selected: 0,
        }
    }

    /// Insert at the top and select it.
    pub fn prepend(mut self, entry: Entry) -> Self {
        self.entries.insert(0, entry);
        self.selected = 0;
        self
    }

    /// Move the selection by `delta`, clamped to the list bounds.
    pub fn move_selection(mut self, delta: isize) -> Self {
        if self.entries.is_empty() {
            return self;
        }
        let last = self.entries.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
        self
    }

    pub fn handle_key(self, key: Key) -> Self {
        match key {
            Key::Up | Key::Char('k') => self.move_selection(-1),
            Key::Down | Key::Char('j') => self.move_selection(1),
            Key::Home | Key::Char('g') => self.move_selection(isize::MIN),
            Key::End | Key::Char('G') => self.move_selection(isize::MAX),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &ListState) -> Vec<&str> {
        list.entries.iter().map(|e| e.word.as_str()).collect()
    }

    fn sample() -> ListState {
        ListState::new(vec![Entry::new("a"), Entry::new("b"), Entry::new("c")])
    }

    #[test]
    fn test_prepend_is_left_insert() {
        let list = sample().move_selection(2).prepend(Entry::new("z"));
        assert_eq!(words(&list), vec!["z", "a", "b", "c"]);
        assert_eq!(list.selected, 0);
    }

    #[test]
    fn test_prepend_onto_empty() {
        let list = ListState::default().prepend(Entry::new("first"));
        assert_eq!(words(&list), vec!["first"]);
        assert_eq!(list.entries.get(list.selected), Some(&Entry::new("first")));
    }

    #[test]
    fn test_move_selection_clamps() {
        let list = sample().move_selection(-1);
        assert_eq!(list.selected, 0);
        let list = list.move_selection(5);
        assert_eq!(list.selected, 2);
        let list = list.move_selection(-1);
        assert_eq!(list.selected, 1);
    }

    #[test]
    fn test_move_selection_on_empty_is_noop() {
        let list = ListState::default().move_selection(1);
        assert_eq!(list, ListState::default());
    }

    #[test]
    fn test_navigation_keys() {
        let list = sample().handle_key(Key::Char('j'));
        assert_eq!(list.selected, 1);
        let list = list.handle_key(Key::Down);
        assert_eq!(list.selected, 2);
        let list = list.handle_key(Key::Char('k'));
        assert_eq!(list.selected, 1);
        let list = list.handle_key(Key::Up);
        assert_eq!(list.selected, 0);
        let list = list.handle_key(Key::End);
        assert_eq!(list.selected, 2);
        let list = list.handle_key(Key::Char('g'));
        assert_eq!(list.selected, 0);
    }

    #[test]
    fn test_other_keys_ignored() {
        let list = sample().handle_key(Key::Char('x'));
        assert_eq!(list, sample());
    }
}
