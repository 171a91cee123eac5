//! Go Text Protocol (GTP) host for a single [`GameSession`].
//!
//! A GTP version 2 style command loop, so the engine can sit behind a
//! board GUI or be driven from a script. There is no move generation; the
//! host only records and validates moves.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Start a new game on a `size`×`size` board
//! - `clear_board` - Reset the current game
//! - `play <color> <vertex>` - Play a stone or `pass` for the side to move
//! - `showboard` - Render the board
//! - `captures <color>` - Stones captured by `color`
//! - `last_move` - Vertex of the last placement, or `none`
//! - `turn` - Colour to move
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use weiqi::gtp::GtpEngine;
//!
//! let mut engine = GtpEngine::default();
//! let mut out = Vec::new();
//! engine.run(Cursor::new("play black D4\nturn\n"), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "=\n\n= white\n\n");
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::board::{Color, Point, StructuralError};
use crate::constants::COLUMN_LETTERS;
use crate::session::{GameSession, MoveOutcome};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "known_command",
    "last_move",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "turn",
    "version",
];

/// A parsed `play` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertex {
    Pass,
    Point(Point),
}

/// Parse a vertex such as `D4` or `pass` for a board of the given size.
///
/// Columns are letters skipping 'I'; rows count up from the bottom edge.
/// Returns `None` for anything off the board.
pub fn parse_vertex(s: &str, size: usize) -> Option<Vertex> {
    if s.eq_ignore_ascii_case("pass") {
        return Some(Vertex::Pass);
    }

    let (col, row) = s.split_at_checked(1)?;
    let col = col.as_bytes()[0].to_ascii_uppercase();
    let x = COLUMN_LETTERS[..size].iter().position(|&c| c == col)?;

    let row: usize = row.parse().ok()?;
    if row == 0 || row > size {
        return None;
    }
    Some(Vertex::Point((x, size - row)))
}

/// Format an on-board point as a vertex (e.g. `D4`).
pub fn format_vertex((x, y): Point, size: usize) -> String {
    let col = COLUMN_LETTERS[x] as char;
    format!("{col}{}", size - y)
}

fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}

/// GTP engine state.
#[derive(Default)]
pub struct GtpEngine {
    session: GameSession,
}

impl GtpEngine {
    /// Create an engine hosting an empty `size`×`size` game.
    pub fn new(size: usize) -> Result<Self, StructuralError> {
        Ok(Self {
            session: GameSession::new(size)?,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read GTP command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(%command, ?args, %message, "GTP command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            let response = format!("{prefix}{id_str} {message}");

            write!(output, "{}\n\n", response.trim_end())
                .context("failed to write GTP response")?;
            output.flush().context("failed to flush GTP response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<usize>() else {
                    return (false, "invalid size".to_string());
                };
                match GameSession::new(size) {
                    Ok(session) => {
                        info!(size, "board size changed");
                        self.session = session;
                        (true, String::new())
                    }
                    Err(_) => (false, "unacceptable size".to_string()),
                }
            }

            "clear_board" => {
                self.session.reset();
                (true, String::new())
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let Some(color) = parse_color(args[0]) else {
                    return (false, "invalid color".to_string());
                };
                if color != self.session.current_player() {
                    return (false, "wrong color to move".to_string());
                }

                match parse_vertex(args[1], self.session.size()) {
                    None => (false, "invalid vertex".to_string()),
                    Some(Vertex::Pass) => {
                        self.session.pass();
                        (true, String::new())
                    }
                    Some(Vertex::Point((x, y))) => match self.session.place(x, y) {
                        Ok(MoveOutcome::Played { .. }) => (true, String::new()),
                        Ok(MoveOutcome::Rejected(why)) => (false, format!("illegal move: {why}")),
                        Err(e) => (false, e.to_string()),
                    },
                }
            }

            "showboard" => (true, self.render_board()),

            "captures" => {
                let Some(color) = args.first().and_then(|s| parse_color(s)) else {
                    return (false, "invalid color".to_string());
                };
                (true, self.session.captures().get(color).to_string())
            }

            "last_move" => {
                let size = self.session.size();
                let vertex = self
                    .session
                    .last_move()
                    .map(|pt| format_vertex(pt, size))
                    .unwrap_or_else(|| "none".to_string());
                (true, vertex)
            }

            "turn" => (true, self.session.current_player().to_string()),

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Board with column letters and row numbers, starting on a new line.
    fn render_board(&self) -> String {
        let board = self.session.board();
        let size = board.size();
        let header: Vec<String> = COLUMN_LETTERS[..size]
            .iter()
            .map(|&c| (c as char).to_string())
            .collect();
        let header = header.join(" ");

        let mut out = format!("\n   {header}\n");
        for (y, row) in board.to_string().lines().enumerate() {
            out.push_str(&format!("{:>2} {row}\n", size - y));
        }
        out.push_str(&format!("   {header}"));
        out
    }
}
