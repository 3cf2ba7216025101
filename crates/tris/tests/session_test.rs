//! End-to-end tests for the interactive loop.

use std::io::Cursor;
use tris::PROMPT;
use tris_tictactoe::{GameStatus, Player};

fn play(moves: &str) -> (GameStatus, String) {
    let mut screen = Vec::new();
    let status = tris::run(Cursor::new(moves), &mut screen).expect("In-memory I/O");
    (status, String::from_utf8(screen).expect("UTF-8 output"))
}

#[test]
fn test_x_wins_top_row() {
    let (status, screen) = play("0 0\n1 1\n0 1\n1 0\n0 2\n");

    assert_eq!(status, GameStatus::Won(Player::X));
    assert!(screen.starts_with("Welcome to Tris!"));
    assert!(screen.ends_with("X | X | X\n-----------\nO | O |  \n-----------\n  |   |  \nCongratulations! Player X wins.\n"));
    assert_eq!(screen.matches(PROMPT).count(), 5);
}

#[test]
fn test_turns_announced_alternately() {
    let (_, screen) = play("0 0\n1 1\nq\n");
    let turns: Vec<&str> = screen
        .lines()
        .filter(|l| l.starts_with("Player ") && l.ends_with("'s turn."))
        .collect();
    assert_eq!(turns, vec!["Player X's turn.", "Player O's turn.", "Player X's turn."]);
}

#[test]
fn test_draw_announced() {
    let (status, screen) = play("0 0\n0 1\n0 2\n1 1\n1 0\n1 2\n2 1\n2 0\n2 2\n");

    assert_eq!(status, GameStatus::Draw);
    assert!(screen.ends_with("The game ended in a draw.\n"));
    assert!(!screen.contains("Congratulations"));
}

#[test]
fn test_occupied_cell_retries_same_player() {
    let (status, screen) = play("1 1\n1 1\n0 0\nexit\n");

    assert_eq!(status, GameStatus::Quit);
    assert!(screen.contains("Cell is already occupied"));
    let turns: Vec<&str> = screen.lines().filter(|l| l.ends_with("'s turn.")).collect();
    assert_eq!(
        turns,
        vec!["Player X's turn.", "Player O's turn.", "Player O's turn.", "Player X's turn."]
    );
}

#[test]
fn test_out_of_bounds_retries_same_player() {
    let (_, screen) = play("3 0\n-1 2\n0 0\nq\n");

    assert_eq!(screen.matches("Coordinates are outside the board").count(), 2);
    let turns: Vec<&str> = screen.lines().filter(|l| l.ends_with("'s turn.")).collect();
    assert_eq!(
        turns,
        vec!["Player X's turn.", "Player X's turn.", "Player X's turn.", "Player O's turn."]
    );
}

#[test]
fn test_malformed_input_reprompts_without_redrawing() {
    let (status, screen) = play("hello\n1 2 3\n1 x\nQUIT\n");

    assert_eq!(status, GameStatus::Quit);
    assert!(screen.contains("Enter exactly two numbers"));
    assert!(screen.contains("Coordinates must be integers"));
    assert_eq!(screen.matches("Current board:").count(), 1);
    assert_eq!(screen.matches(PROMPT).count(), 4);
}

#[test]
fn test_quit_keywords_say_goodbye() {
    for word in ["q", "Quit", "ESCI", "exit"] {
        let (status, screen) = play(&format!("{}\n", word));
        assert_eq!(status, GameStatus::Quit, "{}", word);
        assert!(screen.ends_with("Game over. Goodbye!\n"), "{}", word);
    }
}

#[test]
fn test_end_of_input_quits_quietly() {
    let (status, screen) = play("0 0\n");

    assert_eq!(status, GameStatus::Quit);
    assert!(screen.ends_with("Game over. Goodbye!\n"));
    assert!(!screen.contains("must be"));
}

#[test]
fn test_huge_integer_is_out_of_bounds() {
    let (status, screen) = play("99999999999999999999 0\n0 -99999999999999999999\nq\n");

    assert_eq!(status, GameStatus::Quit);
    assert_eq!(screen.matches("Coordinates are outside the board").count(), 2);
    assert!(!screen.contains("must be integers"));
}

#[test]
fn test_invalid_utf8_reprompts() {
    let mut screen = Vec::new();
    let status = tris::run(Cursor::new(&b"\xff\xfe 0\n0 0\nq\n"[..]), &mut screen)
        .expect("Invalid UTF-8 is reported, not fatal");
    let screen = String::from_utf8(screen).expect("UTF-8 output");

    assert_eq!(status, GameStatus::Quit);
    assert!(screen.contains("Coordinates must be integers"));
    assert!(screen.contains("Player O's turn."));
}
