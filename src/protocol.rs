//! Line-oriented text protocol for driving the engine.
//!
//! The framing follows GTP: every line is an optional numeric id, a command,
//! and its arguments. Responses are `=<id> <message>` on success and
//! `?<id> <message>` on failure, each followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version (1)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `clear_board` - Reset the board to empty
//! - `set_board <cells>` - Replace the board, e.g. `XO-XX-OOX`
//! - `showboard` - Print the board as 9 characters
//! - `play <player> <index>` - Place a marker
//! - `winner` - Report the winner under the current rule
//! - `genmove <player>` - Choose and play a move, print its index (or -1)
//! - `rule [rows|all]` - Set or report the win rule
//!
//! ## Example
//!
//! ```
//! use tictactoe_engine::protocol::TextEngine;
//!
//! let mut engine = TextEngine::new();
//! let mut out = Vec::new();
//! engine.run_with("set_board XO-XX-OOX\ngenmove X\n".as_bytes(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("= 5"));
//! ```

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::board::{Board, Marker};
use crate::constants::NO_MOVE;
use crate::engine::{WinRule, best_move_with, winner_with};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "rule",
    "set_board",
    "showboard",
    "version",
    "winner",
];

/// Protocol engine state.
pub struct TextEngine {
    /// Current board
    board: Board,
    /// Rule used by `winner` and `genmove`
    rule: WinRule,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    /// Create an engine with an empty board and the row-only rule.
    pub fn new() -> Self {
        Self::with_rule(WinRule::default())
    }

    pub fn with_rule(rule: WinRule) -> Self {
        Self {
            board: Board::empty(),
            rule,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

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
            if success {
                debug!(%command, %message, "ok");
            } else {
                warn!(%command, %message, "command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

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

    fn parse_player(arg: &str) -> Result<Marker, String> {
        arg.parse::<Marker>()
            .and_then(Marker::player)
            .map_err(|e| e.to_string())
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&arg.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.board = Board::empty();
                (true, String::new())
            }

            "set_board" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<Board>() {
                    Ok(board) => {
                        self.board = board;
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "showboard" => (true, self.board.to_string()),

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let player = match Self::parse_player(args[0]) {
                    Ok(p) => p,
                    Err(e) => return (false, e),
                };
                let Ok(index) = args[1].parse::<usize>() else {
                    return (false, "invalid index".to_string());
                };
                match self.board.play(index, player) {
                    Ok(board) => {
                        self.board = board;
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "winner" => (true, winner_with(&self.board, self.rule).to_string()),

            "genmove" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let player = match Self::parse_player(arg) {
                    Ok(p) => p,
                    Err(e) => return (false, e),
                };
                match best_move_with(&self.board, player, self.rule) {
                    Some(index) => match self.board.play(index, player) {
                        Ok(board) => {
                            self.board = board;
                            (true, index.to_string())
                        }
                        Err(e) => (false, e.to_string()),
                    },
                    None => (true, NO_MOVE.to_string()),
                }
            }

            "rule" => match args.first() {
                None => (true, self.rule.to_string()),
                Some(arg) => match arg.parse::<WinRule>() {
                    Ok(rule) => {
                        self.rule = rule;
                        (true, String::new())
                    }
                    Err(e) => (false, e),
                },
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = TextEngine::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = TextEngine::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_name_command() {
        let mut engine = TextEngine::new();
        let (success, response) = engine.execute("name", &[]);
        assert!(success);
        assert_eq!(response, "tictactoe-engine");
    }

    #[test]
    fn test_known_command() {
        let mut engine = TextEngine::new();

        let (success, response) = engine.execute("known_command", &["genmove"]);
        assert!(success);
        assert_eq!(response, "true");

        let (success, response) = engine.execute("known_command", &["boardsize"]);
        assert!(success);
        assert_eq!(response, "false");
    }

    #[test]
    fn test_set_board_and_genmove() {
        let mut engine = TextEngine::new();

        let (success, _) = engine.execute("set_board", &["XO-XX-OOX"]);
        assert!(success);

        let (success, response) = engine.execute("genmove", &["X"]);
        assert!(success);
        assert_eq!(response, "5");
        assert_eq!(engine.board().to_string(), "XO-XXXOOX");
    }

    #[test]
    fn test_genmove_full_board() {
        let mut engine = TextEngine::new();
        engine.execute("set_board", &["XOXOXOXOX"]);
        let (success, response) = engine.execute("genmove", &["o"]);
        assert!(success);
        assert_eq!(response, "-1");
    }

    #[test]
    fn test_bad_input() {
        let mut engine = TextEngine::new();

        let (success, response) = engine.execute("set_board", &["XO"]);
        assert!(!success);
        assert_eq!(response, "invalid board size: expected 9 cells, got 2");

        let (success, _) = engine.execute("play", &["X", "9"]);
        assert!(!success);

        let (success, _) = engine.execute("genmove", &["-"]);
        assert!(!success);

        let (success, _) = engine.execute("frobnicate", &[]);
        assert!(!success);
    }

    #[test]
    fn test_play_and_clear() {
        let mut engine = TextEngine::new();

        let (success, _) = engine.execute("play", &["O", "4"]);
        assert!(success);
        assert_eq!(engine.board().to_string(), "----O----");

        let (success, _) = engine.execute("clear_board", &[]);
        assert!(success);
        assert_eq!(*engine.board(), Board::empty());
    }

    #[test]
    fn test_rule_switch() {
        let mut engine = TextEngine::new();
        engine.execute("set_board", &["X--X--X--"]);

        let (_, response) = engine.execute("winner", &[]);
        assert_eq!(response, "-");

        let (success, _) = engine.execute("rule", &["all"]);
        assert!(success);
        let (_, response) = engine.execute("rule", &[]);
        assert_eq!(response, "all");
        let (_, response) = engine.execute("winner", &[]);
        assert_eq!(response, "X");
    }

    #[test]
    fn test_run_with_ids_and_quit() {
        let mut engine = TextEngine::new();
        let input = "# comment\n\n1 showboard\n2 quit\n3 name\n";
        let mut out = Vec::new();
        engine.run_with(input.as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "=1 ---------\n\n=2 \n\n");
    }
}
