//! Tests for the client screen state machine.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hexfill::{Color, GameId, HexBoard, Player, PlayerId, Players, Rgb, Session};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Position;

use hexfill_tui::{GameScreen, NewGameScreen, Screen, ScreenTransition, indicator_rgb};

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn session(one: Color, two: Color, current: PlayerId, winner: Option<PlayerId>) -> Session {
    Session::new(
        HexBoard::unclaimed(5, 5).unwrap(),
        Players {
            one: Player {
                id: PlayerId::One,
                color: one,
            },
            two: Player {
                id: PlayerId::Two,
                color: two,
            },
        },
        current,
        winner,
    )
}

#[test]
fn test_size_selection_emits_create_request() {
    let mut screen = NewGameScreen::new();
    screen.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
    screen.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
    let transition = screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(
        transition,
        ScreenTransition::CreateGame {
            width: 13,
            height: 13
        }
    );
}

#[test]
fn test_full_move_cycle_ends_in_a_locked_board() {
    let mut screen = GameScreen::new(
        GameId::new("game-7"),
        session(Color::Red, Color::Blue, PlayerId::One, None),
        8,
        4,
    );

    // Player colors never go out; a free color does.
    assert_eq!(screen.handle_key(key('1')), ScreenTransition::Stay);
    assert_eq!(
        screen.handle_key(key('3')),
        ScreenTransition::SubmitMove {
            color: Color::Green
        }
    );
    // Further picks are held back while the submission is unanswered.
    assert_eq!(screen.handle_key(key('5')), ScreenTransition::Stay);
    assert_eq!(screen.move_in_flight(), Some(Color::Green));

    // The accepted snapshot decides the game.
    screen.apply_snapshot(session(
        Color::Green,
        Color::Blue,
        PlayerId::Two,
        Some(PlayerId::One),
    ));
    assert_eq!(screen.move_in_flight(), None);

    // Nothing is pickable on a decided board, but leaving still works.
    assert_eq!(screen.handle_key(key('2')), ScreenTransition::Stay);
    assert_eq!(screen.handle_key(key('n')), ScreenTransition::StartOver);
}

#[test]
fn test_failed_move_keeps_the_last_good_session() {
    let before = session(Color::Red, Color::Blue, PlayerId::One, None);
    let mut screen = GameScreen::new(GameId::new("game-7"), before.clone(), 8, 4);

    screen.handle_key(key('3'));
    screen.move_failed("Move failed: connection refused");

    assert_eq!(*screen.session(), before);
    assert_eq!(screen.move_in_flight(), None);
    // A later pick starts a fresh submission.
    assert_eq!(
        screen.handle_key(key('6')),
        ScreenTransition::SubmitMove {
            color: Color::White
        }
    );
}

#[test]
fn test_white_turn_indicator_renders_black() {
    assert_eq!(indicator_rgb(Color::White), Rgb::new(0, 0, 0));
    assert_eq!(indicator_rgb(Color::Magenta), Color::Magenta.rgb());
}

#[test]
fn test_game_screen_renders_turn_and_status() {
    let screen = GameScreen::new(
        GameId::new("game-7"),
        session(Color::Red, Color::Blue, PlayerId::One, None),
        8,
        4,
    );
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| screen.render(frame)).unwrap();

    let buffer = terminal.backend().buffer().clone();
    let row_text = |y: u16| -> String {
        (0..80)
            .map(|x| {
                buffer
                    .cell(Position::new(x, y))
                    .map(|cell| cell.symbol().to_string())
                    .unwrap_or_default()
            })
            .collect()
    };

    assert!(row_text(0).contains("Player 1's turn"));
    assert!(row_text(0).contains("game-7"));
    let body: String = (0..24).map(row_text).collect();
    assert!(body.contains("Player 1 to move."));
}

#[test]
fn test_winner_screen_announces_the_winner() {
    let screen = GameScreen::new(
        GameId::new("game-7"),
        session(Color::Red, Color::Blue, PlayerId::Two, Some(PlayerId::Two)),
        8,
        4,
    );
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| screen.render(frame)).unwrap();

    let buffer = terminal.backend().buffer().clone();
    let body: String = (0..24)
        .map(|y| {
            (0..80)
                .map(|x| {
                    buffer
                        .cell(Position::new(x, y))
                        .map(|cell| cell.symbol().to_string())
                        .unwrap_or_default()
                })
                .collect::<String>()
        })
        .collect();
    assert!(body.contains("Player 2 wins!"));
}
