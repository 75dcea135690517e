//! Key mapping tests

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_2048::input::{map_answer, map_key, should_quit};
use tui_2048::types::{Command, Direction, HELP_LINES};

fn key(c: char) -> KeyEvent {
    KeyEvent::from(KeyCode::Char(c))
}

#[test]
fn test_console_letters_map_to_commands() {
    let expected = [
        ('w', Command::Move(Direction::Up)),
        ('a', Command::Move(Direction::Left)),
        ('s', Command::Move(Direction::Down)),
        ('d', Command::Move(Direction::Right)),
        ('r', Command::Undo),
        ('f', Command::Save),
        ('g', Command::Load),
        ('h', Command::Help),
        ('q', Command::Quit),
    ];
    for (c, command) in expected {
        assert_eq!(map_key(key(c)), Some(command), "{c}");
        assert_eq!(map_key(key(c.to_ascii_uppercase())), Some(command), "{c}");
    }
}

#[test]
fn test_every_help_line_names_a_mapped_key() {
    for line in HELP_LINES {
        let letter = line.chars().next().unwrap();
        assert!(map_key(key(letter)).is_some(), "{line}");
    }
}

#[test]
fn test_arrows_move() {
    for (code, dir) in [
        (KeyCode::Up, Direction::Up),
        (KeyCode::Down, Direction::Down),
        (KeyCode::Left, Direction::Left),
        (KeyCode::Right, Direction::Right),
    ] {
        assert_eq!(map_key(KeyEvent::from(code)), Some(Command::Move(dir)));
    }
}

#[test]
fn test_invalid_keys_are_rejected() {
    for c in ['x', '1', ' ', 'z'] {
        assert_eq!(map_key(key(c)), None, "{c:?}");
    }
    assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
    assert_eq!(
        map_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
        None
    );
}

#[test]
fn test_quit_and_answers() {
    assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
    assert!(should_quit(key('Q')));
    assert!(!should_quit(key('w')));

    assert_eq!(map_answer(key('Y')), Some(true));
    assert_eq!(map_answer(key('n')), Some(false));
    assert_eq!(map_answer(KeyEvent::from(KeyCode::Enter)), None);
}
