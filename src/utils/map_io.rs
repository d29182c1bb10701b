//! Plain-text map files
//!
//! A map file holds one `0`/`1` token per cell in row-major order,
//! separated by whitespace. `1` is a free cell, `0` an obstacle.
//! Files written here put one grid row per line.

use std::fs;
use std::path::Path;

use log::debug;

use crate::common::{PlannerError, PlannerResult};
use crate::utils::grid_map::GridMap;

fn parse_token(token: &str, row: usize, col: usize) -> PlannerResult<bool> {
    match token {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(PlannerError::MapFormatError(format!(
            "unexpected token '{}' at row {}, column {}",
            other, row, col
        ))),
    }
}

/// Parse a map whose dimensions are given by its lines and tokens
pub fn parse_map(text: &str) -> PlannerResult<GridMap> {
    let mut rows: Vec<Vec<bool>> = Vec::new();

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let row = rows.len();
        let cells = line
            .split_whitespace()
            .enumerate()
            .map(|(col, token)| parse_token(token, row, col))
            .collect::<PlannerResult<Vec<bool>>>()?;

        if let Some(first) = rows.first() {
            if first.len() != cells.len() {
                return Err(PlannerError::MapFormatError(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    cells.len(),
                    first.len()
                )));
            }
        }
        rows.push(cells);
    }

    if rows.is_empty() {
        return Err(PlannerError::MapFormatError(
            "map contains no cells".to_string(),
        ));
    }

    let width = rows[0].len();
    GridMap::from_fn(rows.len(), width, |r, c| rows[r][c])
}

/// Parse a map of known dimensions, ignoring line layout
pub fn parse_map_with_dims(text: &str, height: usize, width: usize) -> PlannerResult<GridMap> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let expected = height * width;
    if tokens.len() != expected {
        return Err(PlannerError::MapFormatError(format!(
            "expected {} cells for a {}x{} map, found {}",
            expected,
            height,
            width,
            tokens.len()
        )));
    }

    let cells = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| parse_token(token, i / width.max(1), i % width.max(1)))
        .collect::<PlannerResult<Vec<bool>>>()?;

    GridMap::from_fn(height, width, |r, c| cells[r * width + c])
}

pub fn format_map(grid: &GridMap) -> String {
    let mut out = String::with_capacity(grid.cell_count() * 2);
    for r in 0..grid.height() {
        for c in 0..grid.width() {
            out.push(if grid[(r, c)] { '1' } else { '0' });
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

pub fn load_map<P: AsRef<Path>>(path: P) -> PlannerResult<GridMap> {
    let path = path.as_ref();
    let grid = parse_map(&fs::read_to_string(path)?)?;
    debug!("loaded {}x{} map from {}", grid.height(), grid.width(), path.display());
    Ok(grid)
}

pub fn load_map_with_dims<P: AsRef<Path>>(
    path: P,
    height: usize,
    width: usize,
) -> PlannerResult<GridMap> {
    let text = fs::read_to_string(path)?;
    parse_map_with_dims(&text, height, width)
}

pub fn save_map<P: AsRef<Path>>(path: P, grid: &GridMap) -> PlannerResult<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    fs::write(path, format_map(grid))?;
    debug!("saved {}x{} map to {}", grid.height(), grid.width(), path.display());
    Ok(())
}
