use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::NotificationExpired { generation } => {
            state.expire_notification(generation);
            vec![]
        }
        AppEvent::InputClosed => vec![Action::Quit],
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        state.cycle_focus();
        return vec![];
    }

    match state.focus {
        FocusPanel::Input => handle_input_key(state, key),
        FocusPanel::List => handle_list_key(state, key),
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    state.dirty = true;
    match key.code {
        KeyCode::Enter => return state.submit(),
        KeyCode::Esc => {
            if !state.cancel_edit() {
                return state.dismiss_notification();
            }
        }
        KeyCode::Down if !state.todos.is_empty() => state.focus = FocusPanel::List,
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input.delete_word_back()
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input.insert_char(c)
        }
        KeyCode::Backspace => state.input.delete_back(),
        KeyCode::Delete => state.input.delete_forward(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_home(),
        KeyCode::End => state.input.move_end(),
        _ => {}
    }
    vec![]
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    // Keys that don't need a row
    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Char('x') | KeyCode::Esc => return state.dismiss_notification(),
        KeyCode::Char('i') | KeyCode::Char('a') => {
            state.focus = FocusPanel::Input;
            state.dirty = true;
            return vec![];
        }
        _ => {}
    }

    let Some(index) = state.selected_index() else {
        return vec![];
    };

    match key.code {
        KeyCode::Up if shift => state.move_up(index),
        KeyCode::Down if shift => state.move_down(index),
        KeyCode::Char('K') => state.move_up(index),
        KeyCode::Char('J') => state.move_down(index),
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Enter | KeyCode::Char('e') => state.begin_edit(index),
        KeyCode::Delete | KeyCode::Char('d') => return state.delete(index),
        _ => {}
    }
    vec![]
}
