use std::io::BufRead;
use std::path::Path;

use anyhow::Context;
use nom::{
    character::complete::satisfy,
    combinator::map,
    multi::many0,
    IResult,
};
use thiserror::Error;

use super::grid::Grid;

pub type Height = u8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}, column {column}: expected a decimal digit, found {found:?}")]
    InvalidDigit {
        line: usize,
        column: usize,
        found: char,
    },
    #[error("line {line}: expected {expected} heights, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

fn parse_heights(s: &str) -> IResult<&str, Vec<Height>> {
    many0(map(satisfy(|c| c.is_ascii_digit()), |c| c as u8 - b'0'))(s)
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<Height>, ParseError> {
    // many0 over a single-char parser cannot fail, it just stops early
    let (remaining, heights) = parse_heights(line).unwrap_or((line, Vec::new()));
    if let Some(found) = remaining.chars().next() {
        return Err(ParseError::InvalidDigit {
            line: line_number,
            column: line[..line.len() - remaining.len()].chars().count() + 1,
            found,
        });
    }
    Ok(heights)
}

/// Parse rows of digits into a height grid. Trailing blank lines are ignored;
/// input with no rows at all yields an empty grid.
pub fn parse_grid(s: &str) -> Result<Grid<Height>, ParseError> {
    let s = s.trim_end_matches(['\n', '\r']);
    if s.is_empty() {
        return Ok(Grid::empty());
    }
    let mut cols = None;
    let mut rows = 0;
    let mut cells = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let row = parse_row(line, i + 1)?;
        let expected = *cols.get_or_insert(row.len());
        if row.len() != expected {
            return Err(ParseError::RaggedRow {
                line: i + 1,
                expected,
                found: row.len(),
            });
        }
        cells.extend(row);
        rows += 1;
    }
    let grid = Grid::from_checked(rows, cols.unwrap_or(0), cells);
    log::debug!("parsed a {}x{} grid", grid.rows(), grid.cols());
    Ok(grid)
}

impl Grid<Height> {
    pub fn from_reader<R: BufRead>(r: R) -> anyhow::Result<Self> {
        let input = std::io::read_to_string(r)?;
        Ok(parse_grid(&input)?)
    }
}

pub fn load_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Grid<Height>> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_grid(&input).with_context(|| format!("failed to parse {}", path.display()))
}
