//! Raw keys to directions.
//!
//! Input arrives a line at a time. A line is either a direction word
//! (`up`, `left`, ...) or a run of single keys: `w a s d` in either case and
//! the arrow-key escape sequences `ESC [ A..D`. Anything else maps to `None`
//! and reaches the run as a no-op.

use fogmaze::movement::Direction;
use tokio_util::codec::LinesCodecError;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Move(Option<Direction>),
    Quit,
}

pub fn map_char(c: char) -> Option<Direction> {
    match c {
        'w' | 'W' => Some(Direction::Up),
        's' | 'S' => Some(Direction::Down),
        'a' | 'A' => Some(Direction::Left),
        'd' | 'D' => Some(Direction::Right),
        _ => None,
    }
}

fn map_arrow(c: char) -> Option<Direction> {
    match c {
        'A' => Some(Direction::Up),
        'B' => Some(Direction::Down),
        'C' => Some(Direction::Right),
        'D' => Some(Direction::Left),
        _ => None,
    }
}

/// Unwrap one decoded line. An over-long line is dropped (the codec skips to
/// the next newline) and reads as a no-op; only I/O errors are fatal.
pub fn accept_line(frame: Result<String, LinesCodecError>) -> Result<Option<String>, LinesCodecError> {
    match frame {
        Ok(line) => Ok(Some(line)),
        Err(LinesCodecError::MaxLineLengthExceeded) => {
            warn!("Input line too long; ignored");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Split one input line into key events, in order.
pub fn parse_line(line: &str) -> Vec<Key> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return vec![Key::Quit];
    }
    if let Some(d) = Direction::from_action_str(&trimmed.to_ascii_lowercase()) {
        return vec![Key::Move(Some(d))];
    }

    let mut keys = Vec::new();
    let mut chars = trimmed.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            keys.push(Key::Move(chars.next().and_then(map_arrow)));
            continue;
        }
        if c.is_whitespace() {
            continue;
        }
        keys.push(Key::Move(map_char(c)));
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_in_either_case() {
        assert_eq!(
            parse_line("wAsD"),
            vec![
                Key::Move(Some(Direction::Up)),
                Key::Move(Some(Direction::Left)),
                Key::Move(Some(Direction::Down)),
                Key::Move(Some(Direction::Right)),
            ]
        );
    }

    #[test]
    fn words_and_arrows() {
        assert_eq!(parse_line(" Left "), vec![Key::Move(Some(Direction::Left))]);
        assert_eq!(
            parse_line("\u{1b}[A\u{1b}[C"),
            vec![
                Key::Move(Some(Direction::Up)),
                Key::Move(Some(Direction::Right)),
            ]
        );
    }

    #[test]
    fn oversized_lines_are_dropped_not_fatal() {
        assert_eq!(
            accept_line(Err(LinesCodecError::MaxLineLengthExceeded)).unwrap(),
            None
        );
        assert_eq!(accept_line(Ok("d".to_string())).unwrap(), Some("d".to_string()));

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(matches!(
            accept_line(Err(LinesCodecError::Io(io))),
            Err(LinesCodecError::Io(_))
        ));
    }

    #[test]
    fn unknown_keys_are_no_ops() {
        assert_eq!(parse_line("x"), vec![Key::Move(None)]);
        assert_eq!(parse_line("d z"), vec![Key::Move(Some(Direction::Right)), Key::Move(None)]);
        assert!(parse_line("").is_empty());
        assert_eq!(parse_line("Q"), vec![Key::Quit]);
    }
}
