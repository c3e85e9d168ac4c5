//! Plain-text frames.

use std::fmt::Write as _;

use fogmaze::grid::{Cell, Pos};
use fogmaze::leaderboard::Leaderboard;
use fogmaze::run::RunView;
use fogmaze::time::{format_elapsed, Duration};

pub const FOG: char = '░';
pub const PLAYER: char = '●';
pub const EXIT: char = 'X';
pub const WALL: char = '█';

/// Interior of the maze inside a box frame. The border ring is drawn as the
/// frame itself.
pub fn draw_maze(view: &RunView<'_>) -> String {
    let grid = view.grid;
    let (w, h) = (grid.width(), grid.height());
    let exit = grid.exit();
    let bar = "═".repeat(w as usize);

    let mut out = String::with_capacity(((w + 3) * (h + 2) * 3) as usize);
    let _ = writeln!(out, "╔{bar}╗");
    for y in 1..=h {
        out.push('║');
        for x in 1..=w {
            let p = Pos::new(x, y);
            let glyph = if !view.visibility.is_seen(p) {
                FOG
            } else if p == view.agent {
                PLAYER
            } else if p == exit {
                EXIT
            } else if grid.cell(p) == Some(Cell::Wall) {
                WALL
            } else {
                ' '
            };
            out.push(glyph);
        }
        out.push_str("║\n");
    }
    let _ = write!(out, "╚{bar}╝");
    out
}

pub fn draw_timer(elapsed: Duration) -> String {
    format!("Time: {}", format_elapsed(elapsed))
}

pub fn draw_leaderboard(board: &Leaderboard) -> String {
    if board.is_empty() {
        return "No runs yet".to_string();
    }
    board
        .entries()
        .iter()
        .enumerate()
        .map(|(i, e)| format!("#{} — {} — {}", i + 1, e.name, format_elapsed(e.elapsed())))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fogmaze::config::MazeConfig;
    use fogmaze::generator::ScriptedRandom;
    use fogmaze::run::Run;

    #[test]
    fn fogged_frame_around_entry() {
        let cfg = MazeConfig::with_size(5, 5).with_fog_radius(1);
        let run = Run::new(cfg, &mut ScriptedRandom::new(vec![0])).unwrap();
        let frame = draw_maze(&run.view());
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "╔═════╗");
        assert_eq!(lines[1], "║● ░░░║");
        assert_eq!(lines[2], "║ █░░░║");
        assert_eq!(lines[3], "║░░░░░║");
        assert_eq!(lines[6], "╚═════╝");
    }

    #[test]
    fn fully_revealed_frame_shows_exit() {
        let cfg = MazeConfig::with_size(5, 5).with_fog_radius(6);
        let run = Run::new(cfg, &mut ScriptedRandom::new(vec![0])).unwrap();
        let frame = draw_maze(&run.view());
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines[1], "║●    ║");
        assert_eq!(lines[5], "║ █ █X║");
    }

    #[test]
    fn leaderboard_lines() {
        let mut board = Leaderboard::new(5);
        assert_eq!(draw_leaderboard(&board), "No runs yet");
        board.record("ada", Duration::from_millis(61_042));
        board.record("", Duration::from_millis(900));
        assert_eq!(
            draw_leaderboard(&board),
            "#1 — Anonymous — 00:00.900\n#2 — ada — 01:01.042"
        );
        assert_eq!(draw_timer(Duration::from_millis(1_500)), "Time: 00:01.500");
    }
}
