//! Saved games
//!
//! A save is a plain text file of blank-line separated sections:
//!
//! ```text
//! Board:
//! OOOOOOOOOOOOOOOOOOO      <- row 19 first, 'O' empty, 'W' white, 'B' black
//! ...
//!
//! Human:
//! Captured pairs: 0
//! Score: 0
//!
//! Computer:
//! Captured pairs: 0
//! Score: 0
//!
//! Next Player: Human - White
//! ```

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use derive_more::{Display, Error, From};
use tracing::info;

use super::player::PlayerKind;
use crate::board::{Side, Stone};

/// Extension given to save files
pub const EXTENSION: &str = "txt";

const BOARD_SECTION: &str = "Board";
const HUMAN_SECTION: &str = "Human";
const COMPUTER_SECTION: &str = "Computer";
const NEXT_PLAYER_SECTION: &str = "Next Player";
const CAPTURED_KEY: &str = "Captured pairs";
const SCORE_KEY: &str = "Score";

#[derive(Debug, Display, Error, From)]
pub enum SaveError {
    #[display("{_0}")]
    #[from]
    Io(io::Error),
    #[display("{} already exists", path.display())]
    AlreadyExists { path: PathBuf },
    #[display("missing section '{section}'")]
    MissingSection { section: &'static str },
    #[display("line {line}: {reason}")]
    Malformed { line: usize, reason: &'static str },
}

/// Per-player numbers stored in a save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerRecord {
    pub captured_pairs: usize,
    pub score: usize,
}

/// Everything needed to continue an interrupted round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveState {
    /// Rows of the board, row 0 (label row 1) first
    pub board: Vec<Vec<Stone>>,
    pub human: PlayerRecord,
    pub computer: PlayerRecord,
    pub next: PlayerKind,
    pub next_side: Side,
}

impl fmt::Display for SaveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BOARD_SECTION}:")?;
        for row in self.board.iter().rev() {
            let line: String = row.iter().map(|s| s.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        for (section, record) in [(HUMAN_SECTION, self.human), (COMPUTER_SECTION, self.computer)] {
            writeln!(f)?;
            writeln!(f, "{section}:")?;
            writeln!(f, "{CAPTURED_KEY}: {}", record.captured_pairs)?;
            writeln!(f, "{SCORE_KEY}: {}", record.score)?;
        }
        writeln!(f)?;
        writeln!(f, "{NEXT_PLAYER_SECTION}: {} - {}", self.next, self.next_side)
    }
}

/// Lines of one section with their 1-based line numbers
type Section<'a> = Vec<(usize, &'a str)>;

fn split_sections(text: &str) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    let mut current: Section<'_> = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
        } else {
            current.push((idx + 1, line));
        }
    }
    if !current.is_empty() {
        sections.push(current);
    }
    sections
}

fn malformed(line: usize, reason: &'static str) -> SaveError {
    SaveError::Malformed { line, reason }
}

fn parse_row(line_no: usize, line: &str) -> Result<Vec<Stone>, SaveError> {
    line.chars()
        .map(|c| Stone::from_char(c).ok_or_else(|| malformed(line_no, "unknown stone")))
        .collect()
}

fn parse_record(lines: &[(usize, &str)]) -> Result<PlayerRecord, SaveError> {
    let mut record = PlayerRecord::default();
    for &(line_no, line) in lines {
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| malformed(line_no, "expected 'key: value'"))?;
        let value: usize = value
            .trim()
            .parse()
            .map_err(|_| malformed(line_no, "expected a number"))?;
        match key.trim() {
            CAPTURED_KEY => record.captured_pairs = value,
            SCORE_KEY => record.score = value,
            _ => return Err(malformed(line_no, "unknown player field")),
        }
    }
    Ok(record)
}

fn parse_next_player(line_no: usize, line: &str) -> Result<(PlayerKind, Side), SaveError> {
    let (_, value) = line
        .split_once(':')
        .ok_or_else(|| malformed(line_no, "expected 'Next Player: <player> - <color>'"))?;
    let (player, color) = value
        .split_once('-')
        .ok_or_else(|| malformed(line_no, "expected 'Next Player: <player> - <color>'"))?;

    let kind = match player.trim() {
        "Human" => PlayerKind::Human,
        "Computer" => PlayerKind::Computer,
        _ => return Err(malformed(line_no, "unknown player")),
    };
    let side = match color.trim() {
        "White" => Side::White,
        "Black" => Side::Black,
        _ => return Err(malformed(line_no, "unknown color")),
    };
    Ok((kind, side))
}

impl FromStr for SaveState {
    type Err = SaveError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut board = None;
        let mut human = None;
        let mut computer = None;
        let mut next = None;

        for section in split_sections(text) {
            let Some((&(header_no, header), body)) = section.split_first() else {
                continue;
            };
            if header.starts_with(NEXT_PLAYER_SECTION) {
                next = Some(parse_next_player(header_no, header)?);
            } else if header.starts_with(BOARD_SECTION) {
                let mut rows = body
                    .iter()
                    .map(|&(line_no, line)| parse_row(line_no, line))
                    .collect::<Result<Vec<_>, _>>()?;
                // Saved top row first
                rows.reverse();
                board = Some(rows);
            } else if header.starts_with(HUMAN_SECTION) {
                human = Some(parse_record(body)?);
            } else if header.starts_with(COMPUTER_SECTION) {
                computer = Some(parse_record(body)?);
            } else {
                return Err(malformed(header_no, "unknown section"));
            }
        }

        let missing = |section| SaveError::MissingSection { section };
        let (next, next_side) = next.ok_or_else(|| missing(NEXT_PLAYER_SECTION))?;
        Ok(Self {
            board: board.ok_or_else(|| missing(BOARD_SECTION))?,
            human: human.ok_or_else(|| missing(HUMAN_SECTION))?,
            computer: computer.ok_or_else(|| missing(COMPUTER_SECTION))?,
            next,
            next_side,
        })
    }
}

/// Path of the save called `name` in `dir`, adding the extension when missing
pub fn file_path(dir: &Path, name: &str) -> PathBuf {
    let name = name.trim();
    if Path::new(name).extension().is_some_and(|ext| ext == EXTENSION) {
        dir.join(name)
    } else {
        dir.join(format!("{name}.{EXTENSION}"))
    }
}

/// Write `state` as a new save file. An existing file is never overwritten.
pub fn save(dir: &Path, name: &str, state: &SaveState) -> Result<PathBuf, SaveError> {
    fs::create_dir_all(dir)?;
    let path = file_path(dir, name);

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            return Err(SaveError::AlreadyExists { path });
        }
        Err(err) => return Err(err.into()),
    };
    file.write_all(state.to_string().as_bytes())?;

    info!(path = %path.display(), "game saved");
    Ok(path)
}

pub fn load(dir: &Path, name: &str) -> Result<SaveState, SaveError> {
    let path = file_path(dir, name);
    let state: SaveState = fs::read_to_string(&path)?.parse()?;
    info!(path = %path.display(), "game loaded");
    Ok(state)
}

/// Names of the save files in `dir`, sorted. A missing directory has none.
pub fn list(dir: &Path) -> Result<Vec<String>, SaveError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == EXTENSION) {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
