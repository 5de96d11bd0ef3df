use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Char, Down, Enter, Left, Right, Tab, Up};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() {
        return Action::Quit;
    }

    // While the modal is open it swallows everything: Esc is the explicit
    // close, any other key counts as clicking outside the dialog.
    if app.modal.is_some() {
        app.close_modal();
        return Action::None;
    }

    if app.phase != Phase::Ready {
        return Action::None;
    }

    match key.code {
        Left => app.prev_tab(),
        Right | Tab => app.next_tab(),
        Up | Char('k') => app.move_up(),
        Down | Char('j') => app.move_down(),
        Enter | Char(' ') => app.activate(),
        _ => {}
    }

    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded() -> App {
        let mut app = App::new();
        let itinerary = serde_json::from_str(
            r#"{
                "paris": {
                    "name": "Paris", "summary": "", "center": [48.85, 2.35], "zoom": 12,
                    "days": {
                        "day1": {
                            "label": "Day 1", "title": "", "description": "",
                            "events": [
                                {"time": "09:00", "title": "Louvre", "description": "",
                                 "details": {"cost": "20 EUR"}}
                            ]
                        }
                    }
                },
                "rome": {
                    "name": "Rome", "summary": "", "center": [41.89, 12.48], "zoom": 12,
                    "days": {}
                }
            }"#,
        )
        .expect("fixture parses");
        app.apply_load("fixture.json", Ok(itinerary));
        app
    }

    #[test]
    fn quit_keys_are_global() {
        let mut app = loaded();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &mut app), Action::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &mut app), Action::Quit);
    }

    #[test]
    fn tab_keys_switch_the_active_city() {
        let mut app = loaded();
        handle_key_event(key(KeyCode::Right), &mut app);
        assert_eq!(app.city_index, 1);
        handle_key_event(key(KeyCode::Left), &mut app);
        assert_eq!(app.city_index, 0);
    }

    #[test]
    fn any_non_quit_key_closes_an_open_modal() {
        let mut app = loaded();
        // Expand day 1, move onto the event, open its details.
        handle_key_event(key(KeyCode::Enter), &mut app);
        handle_key_event(key(KeyCode::Down), &mut app);
        handle_key_event(key(KeyCode::Enter), &mut app);
        assert!(app.modal.is_some());

        handle_key_event(key(KeyCode::Esc), &mut app);
        assert!(app.modal.is_none());

        handle_key_event(key(KeyCode::Enter), &mut app);
        assert!(app.modal.is_some());
        // An unrelated key counts as clicking outside the dialog.
        handle_key_event(key(KeyCode::Down), &mut app);
        assert!(app.modal.is_none());
        assert_eq!(app.city_index, 0, "the swallowed key does not navigate");
    }

    #[test]
    fn navigation_is_inert_before_the_document_loads() {
        let mut app = App::new();
        handle_key_event(key(KeyCode::Right), &mut app);
        assert_eq!(app.city_index, 0);
    }
}
