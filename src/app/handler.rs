use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::components::breed_browser::BreedBrowser;
use crate::components::page_shell::Tab;
use crate::ui;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::FactTimer { generation } => {
            if state.shell.on_fact_timer(generation) {
                state.dirty = true;
            }
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) {
    if !state.shell.is_animating() {
        return;
    }
    if state.shell.advance(state.frame_time) {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) => {
            handle_mouse(state, mouse);
            vec![]
        }
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if let Some(tab) = ui::tab_at(state.viewport, mouse.column, mouse.row) {
        state.shell.select(tab);
        state.dirty = true;
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keybindings
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        return vec![Action::Quit];
    }
    match key.code {
        KeyCode::Tab => {
            state.shell.select_next();
            return vec![];
        }
        KeyCode::BackTab => {
            state.shell.select_prev();
            return vec![];
        }
        KeyCode::F(n @ 1..=3) => {
            if let Some(tab) = Tab::from_index(n as usize - 1) {
                state.shell.select(tab);
            }
            return vec![];
        }
        _ => {}
    }

    // The breeds tab routes typing into its search box
    if let Some(browser) = state.shell.breeds_mut() {
        return handle_search_key(browser, key);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            state.shell.select_prev();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.shell.select_next();
        }
        KeyCode::Char(c @ '1'..='3') => {
            if let Some(tab) = c.to_digit(10).and_then(|d| Tab::from_index(d as usize - 1)) {
                state.shell.select(tab);
            }
        }
        KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

fn handle_search_key(browser: &mut BreedBrowser, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('w') if ctrl => browser.edit_search(|input| input.delete_word_back()),
        KeyCode::Char('u') if ctrl => browser.edit_search(|input| input.delete_to_start()),
        KeyCode::Char('a') if ctrl => browser.search.move_home(),
        KeyCode::Char('e') if ctrl => browser.search.move_end(),
        KeyCode::Char(c) if !ctrl && !alt => browser.edit_search(|input| input.insert_char(c)),
        KeyCode::Backspace => browser.edit_search(|input| input.delete_back()),
        KeyCode::Delete => browser.edit_search(|input| input.delete_forward()),
        KeyCode::Left => browser.search.move_left(),
        KeyCode::Right => browser.search.move_right(),
        KeyCode::Home => browser.search.move_home(),
        KeyCode::End => browser.search.move_end(),
        KeyCode::Up => browser.select_prev(),
        KeyCode::Down => browser.select_next(),
        KeyCode::Esc => {
            if browser.search.is_empty() {
                return vec![Action::Quit];
            }
            browser.edit_search(|input| input.clear());
        }
        _ => {}
    }
    vec![]
}
