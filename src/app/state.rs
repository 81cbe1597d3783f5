use crate::app::action::Action;
use crate::config::AppConfig;
use crate::todo::list::TodoList;
use crate::todo::notification::{Generation, Notice, Notifier};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Pending input: the text field shared between the add and update flows.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Replace the text and park the cursor at the end.
    pub fn set_text(&mut self, text: String) {
        self.cursor = text.len();
        self.text = text;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Terminal column of the cursor, accounting for wide characters.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Input,
    List,
}

/// Root application state. Widgets only read it; all mutation goes through
/// the methods below, called from the event handler.
pub struct AppState {
    pub config: AppConfig,
    pub todos: TodoList,
    pub notifier: Notifier,
    pub input: InputState,
    pub selected: usize,
    pub focus: FocusPanel,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let todos = TodoList::from_items(&config.list.items);
        Self {
            config,
            todos,
            notifier: Notifier::new(),
            input: InputState::new(),
            selected: 0,
            focus: FocusPanel::Input,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.config.ui.notification_timeout_ms)
    }

    pub fn is_editing(&self) -> bool {
        self.todos.editing().is_some()
    }

    /// Selected row, if the list has any.
    pub fn selected_index(&self) -> Option<usize> {
        (self.selected < self.todos.len()).then_some(self.selected)
    }

    fn notify(&mut self, notice: Option<Notice>) -> Vec<Action> {
        let Some(notice) = notice else {
            return vec![];
        };
        let generation = self.notifier.show(notice);
        self.dirty = true;
        vec![Action::ScheduleClear { generation }]
    }

    /// Commit the pending input: update the edited item if an edit is in
    /// progress, append a new one otherwise.
    pub fn submit(&mut self) -> Vec<Action> {
        let notice = if self.is_editing() {
            self.todos.update(&self.input.text)
        } else {
            let notice = self.todos.add(&self.input.text);
            if notice.is_some() {
                self.selected = self.todos.len() - 1;
            }
            notice
        };
        if notice.is_some() {
            self.input.clear();
        }
        self.notify(notice)
    }

    pub fn begin_edit(&mut self, index: usize) {
        if let Some(text) = self.todos.begin_edit(index) {
            self.input.set_text(text);
            self.selected = index;
            self.focus = FocusPanel::Input;
            self.dirty = true;
        }
    }

    pub fn cancel_edit(&mut self) -> bool {
        if self.todos.cancel_edit() {
            self.input.clear();
            self.dirty = true;
            true
        } else {
            false
        }
    }

    pub fn delete(&mut self, index: usize) -> Vec<Action> {
        let was_editing = self.todos.editing() == Some(index);
        let notice = self.todos.delete(index);
        if notice.is_some() {
            if was_editing {
                self.input.clear();
            }
            self.clamp_selection();
        }
        self.notify(notice)
    }

    pub fn move_up(&mut self, index: usize) {
        if self.todos.move_up(index) {
            self.selected = index - 1;
            self.dirty = true;
        }
    }

    pub fn move_down(&mut self, index: usize) {
        if self.todos.move_down(index) {
            self.selected = index + 1;
            self.dirty = true;
        }
    }

    pub fn dismiss_notification(&mut self) -> Vec<Action> {
        if self.notifier.dismiss() {
            self.dirty = true;
            vec![Action::CancelClear]
        } else {
            vec![]
        }
    }

    pub fn expire_notification(&mut self, generation: Generation) {
        if self.notifier.expire(generation) {
            self.dirty = true;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.todos.len() {
            self.selected += 1;
            self.dirty = true;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.dirty = true;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.todos.len().saturating_sub(1));
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Input => FocusPanel::List,
            FocusPanel::List => FocusPanel::Input,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        let count = self.todos.len();
        let mut s = format!(
            "{} item{}",
            count,
            if count == 1 { "" } else { "s" }
        );
        if let Some(index) = self.todos.editing() {
            s.push_str(&format!(" | Editing #{}", index + 1));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::list::{ADDED, DELETED, UPDATED};
    use crate::todo::notification::NoticeKind;

    fn state_with(items: &[&str]) -> AppState {
        let mut config = AppConfig::default();
        config.list.items = items.iter().map(|s| s.to_string()).collect();
        AppState::new(config)
    }

    fn scheduled(actions: Vec<Action>) -> Generation {
        match actions.as_slice() {
            [Action::ScheduleClear { generation }] => *generation,
            other => panic!("expected one scheduled clear, got {:?}", other),
        }
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.input.insert_char(c);
        }
    }

    #[test]
    fn milk_eggs_bread_scenario() {
        let mut state = state_with(&["milk"]);

        type_text(&mut state, "eggs");
        let actions = state.submit();
        assert_eq!(state.todos.items(), ["milk", "eggs"]);
        let notice = state.notifier.current().unwrap();
        assert_eq!((notice.kind, notice.message.as_str()), (NoticeKind::Success, ADDED));
        assert!(matches!(actions.as_slice(), [Action::ScheduleClear { .. }]));
        assert!(state.input.text.is_empty());

        state.delete(0);
        assert_eq!(state.todos.items(), ["eggs"]);
        let notice = state.notifier.current().unwrap();
        assert_eq!((notice.kind, notice.message.as_str()), (NoticeKind::Error, DELETED));

        state.begin_edit(0);
        assert_eq!(state.input.text, "eggs");
        state.input.set_text("bread".to_string());
        state.submit();
        assert_eq!(state.todos.items(), ["bread"]);
        assert_eq!(state.todos.editing(), None);
        let notice = state.notifier.current().unwrap();
        assert_eq!((notice.kind, notice.message.as_str()), (NoticeKind::Success, UPDATED));
    }

    #[test]
    fn blank_submit_leaves_everything_unchanged() {
        let mut state = state_with(&["milk"]);
        type_text(&mut state, "   ");
        assert!(state.submit().is_empty());
        assert_eq!(state.todos.items(), ["milk"]);
        assert!(!state.notifier.is_showing());
        assert_eq!(state.input.text, "   ");
    }

    #[test]
    fn moves_do_not_notify_and_selection_follows() {
        let mut state = state_with(&["a", "b", "c"]);
        state.move_down(0);
        assert_eq!(state.todos.items(), ["b", "a", "c"]);
        assert_eq!(state.selected, 1);
        state.move_up(2);
        assert_eq!(state.todos.items(), ["b", "c", "a"]);
        assert_eq!(state.selected, 1);
        assert!(!state.notifier.is_showing());
    }

    #[test]
    fn deleting_last_row_clamps_selection() {
        let mut state = state_with(&["a", "b"]);
        state.selected = 1;
        state.delete(1);
        assert_eq!(state.selected, 0);
        state.delete(0);
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn deleting_edited_item_clears_pending_input() {
        let mut state = state_with(&["a", "b"]);
        state.begin_edit(1);
        state.delete(1);
        assert!(!state.is_editing());
        assert!(state.input.text.is_empty());
    }

    #[test]
    fn cancel_edit_clears_input() {
        let mut state = state_with(&["a"]);
        state.begin_edit(0);
        assert!(state.cancel_edit());
        assert!(state.input.text.is_empty());
        assert!(!state.cancel_edit());
    }

    #[test]
    fn dismiss_cancels_timer_only_when_showing() {
        let mut state = state_with(&[]);
        assert!(state.dismiss_notification().is_empty());
        type_text(&mut state, "x");
        state.submit();
        assert_eq!(state.dismiss_notification(), vec![Action::CancelClear]);
        assert!(!state.notifier.is_showing());
    }

    #[test]
    fn second_notice_survives_first_expiry() {
        let mut state = state_with(&[]);
        type_text(&mut state, "one");
        let first = scheduled(state.submit());
        type_text(&mut state, "two");
        let second = scheduled(state.submit());
        assert!(second > first);

        state.expire_notification(first);
        assert!(state.notifier.is_showing());

        state.expire_notification(second);
        assert!(!state.notifier.is_showing());
    }

    #[test]
    fn input_editing_handles_multibyte() {
        let mut input = InputState::new();
        for c in "añ日".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.cursor_column(), 4);
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "a日");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "日");
    }

    #[test]
    fn delete_word_back() {
        let mut input = InputState::new();
        input.set_text("buy more milk  ".to_string());
        input.delete_word_back();
        assert_eq!(input.text, "buy more ");
    }

    #[test]
    fn status_line_counts_and_shows_edit() {
        let mut state = state_with(&["a"]);
        assert_eq!(state.status_line(), "1 item");
        state.begin_edit(0);
        assert_eq!(state.status_line(), "1 item | Editing #1");
        assert_eq!(state_with(&["a", "b"]).status_line(), "2 items");
    }
}
