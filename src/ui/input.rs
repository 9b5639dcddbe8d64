use crate::trips::Region;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            app.request_quit();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('1') | KeyCode::Char('a') => app.select_region(Region::All),
        KeyCode::Char('2') | KeyCode::Char('e') => app.select_region(Region::Europe),
        KeyCode::Char('3') | KeyCode::Char('m') => app.select_region(Region::America),
        KeyCode::Tab => app.cycle_region(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Char('r') => app.reload(),
        _ => {}
    }
}
