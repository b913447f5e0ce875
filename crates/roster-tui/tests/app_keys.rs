use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use roster_core::{AppConfig, RosterError};
use roster_domain::{
    Character, CharacterPage, CharacterStatus, Effect, FetchRequest, MockCharacterSource, Msg,
    ResponseInfo, ViewState,
};
use roster_tui::{ui, App, Focus};
use std::sync::Arc;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn new_app() -> App {
    App::new(
        &AppConfig::default(),
        Arc::new(MockCharacterSource::new()),
        None,
    )
}

fn start(app: &mut App) -> FetchRequest {
    match app.update(Msg::Start).as_slice() {
        [Effect::Fetch(request)] => request.clone(),
        other => panic!("expected a fetch, got {:?}", other),
    }
}

fn page(count: u32, has_next: bool) -> CharacterPage {
    CharacterPage {
        info: ResponseInfo {
            count: 826,
            pages: 42,
            next: has_next.then(|| "?page=2".to_string()),
            prev: None,
        },
        results: (1..=count)
            .map(|id| Character {
                id,
                name: format!("Character {}", id),
                status: CharacterStatus::Unknown,
                species: "Alien".to_string(),
                image: String::new(),
            })
            .collect(),
    }
}

fn loaded_app(count: u32) -> App {
    let mut app = new_app();
    let request = start(&mut app);
    app.update(Msg::FetchSettled {
        request,
        outcome: Ok(page(count, true)),
    });
    app
}

fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(app, frame)).unwrap();
    terminal
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

mod keys {
    use super::*;

    #[test]
    fn test_typing_emits_accumulating_search_text() {
        let mut app = loaded_app(20);
        assert_eq!(app.focus, Focus::Search);

        let mut sent = Vec::new();
        for c in "Rick".chars() {
            for msg in app.on_key(key(KeyCode::Char(c))) {
                match msg {
                    Msg::SearchChanged(text) => sent.push(text),
                    other => panic!("unexpected {:?}", other),
                }
            }
        }
        assert_eq!(sent, vec!["R", "Ri", "Ric", "Rick"]);
        assert_eq!(app.search.as_str(), "Rick");
    }

    #[test]
    fn test_cursor_keys_do_not_emit_search_changes() {
        let mut app = loaded_app(20);
        app.on_key(key(KeyCode::Char('a')));
        assert!(app.on_key(key(KeyCode::Left)).is_empty());
        assert!(app.on_key(key(KeyCode::Home)).is_empty());
    }

    #[test]
    fn test_tab_switches_focus_and_q_quits_from_grid() {
        let mut app = loaded_app(20);
        app.on_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Grid);

        app.on_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_grid_keys_move_selection() {
        let mut app = loaded_app(20);
        draw(&mut app, 120, 40);
        app.on_key(key(KeyCode::Tab));

        app.on_key(key(KeyCode::Char('l')));
        assert_eq!(app.grid.selected(), Some(1));
        app.on_key(key(KeyCode::Char('j')));
        assert_eq!(app.grid.selected(), Some(5));
        app.on_key(key(KeyCode::Char('G')));
        assert_eq!(app.grid.selected(), Some(19));
    }

    #[test]
    fn test_reload_and_refresh_keys() {
        let mut app = loaded_app(20);
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(matches!(app.on_key(ctrl_r).as_slice(), [Msg::Reload]));
        assert!(matches!(
            app.on_key(key(KeyCode::F(5))).as_slice(),
            [Msg::Refresh]
        ));
    }

    #[test]
    fn test_retry_only_on_error_screen() {
        let mut app = new_app();
        let request = start(&mut app);
        assert!(app.on_key(key(KeyCode::Enter)).is_empty());

        app.update(Msg::FetchSettled {
            request,
            outcome: Err(RosterError::Transport("offline".to_string())),
        });
        assert_eq!(app.browser.view(), ViewState::ErrorEmpty);
        assert!(matches!(
            app.on_key(key(KeyCode::Enter)).as_slice(),
            [Msg::Retry]
        ));
    }

    #[test]
    fn test_ctrl_u_clears_search() {
        let mut app = loaded_app(20);
        app.on_key(key(KeyCode::Char('x')));
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        match app.on_key(ctrl_u).as_slice() {
            [Msg::SearchChanged(text)] => assert!(text.is_empty()),
            other => panic!("unexpected {:?}", other),
        }
        assert!(app.on_key(ctrl_u).is_empty());
    }
}

mod rendering {
    use super::*;

    #[test]
    fn test_column_count_follows_width() {
        let mut app = loaded_app(20);

        draw(&mut app, 120, 40);
        assert_eq!(app.grid.columns(), 4);

        draw(&mut app, 80, 40);
        assert_eq!(app.grid.columns(), 3);

        draw(&mut app, 60, 40);
        assert_eq!(app.grid.columns(), 2);
    }

    #[test]
    fn test_loading_and_error_screens() {
        let mut app = new_app();
        let request = start(&mut app);
        let terminal = draw(&mut app, 80, 24);
        assert!(screen_text(&terminal).contains("Loading characters..."));

        app.update(Msg::FetchSettled {
            request,
            outcome: Err(RosterError::Decode("bad json".to_string())),
        });
        let text = screen_text(&draw(&mut app, 80, 24));
        assert!(text.contains("Failed to load characters."));
        assert!(text.contains("Try again"));
    }

    #[test]
    fn test_loaded_screen_shows_cards_and_reload_control() {
        let mut app = loaded_app(3);
        let text = screen_text(&draw(&mut app, 120, 40));
        assert!(text.contains("Character 1"));
        assert!(text.contains("Reload list"));
        assert!(text.contains("Characters (3)"));
    }

    #[test]
    fn test_end_reached_requests_next_page_once() {
        let mut app = loaded_app(20);
        draw(&mut app, 120, 40);
        assert!(app.end_reached().is_none());

        app.on_key(key(KeyCode::Tab));
        app.on_key(key(KeyCode::Char('G')));
        draw(&mut app, 120, 40);

        let msg = app.end_reached();
        assert!(matches!(msg, Some(Msg::LoadMore)));
        assert!(app.end_reached().is_none());

        let effects = app.update(Msg::LoadMore);
        match effects.as_slice() {
            [Effect::Fetch(request)] => assert_eq!(request.query.page, 2),
            other => panic!("expected a fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_status_line_shows_last_settled_page() {
        let mut app = loaded_app(20);
        let text = screen_text(&draw(&mut app, 120, 40));
        assert!(text.contains("Page 1 · updated"));

        let _in_flight = app.update(Msg::LoadMore);
        assert_eq!(app.browser.page(), 2);
        let text = screen_text(&draw(&mut app, 120, 40));
        assert!(text.contains("Loading more..."));
        assert!(text.contains("Page 1 · updated"));
        assert!(!text.contains("Page 2"));
    }

    #[test]
    fn test_long_search_text_renders() {
        let mut app = loaded_app(3);
        for _ in 0..400 {
            app.on_key(key(KeyCode::Char('z')));
        }
        let text = screen_text(&draw(&mut app, 40, 30));
        assert!(text.contains("Reload list"));
    }
}
