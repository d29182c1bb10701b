//! ASCII rendering of a map and a search result

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::common::{GridPath, GridPos, PlannerResult};
use crate::utils::grid_map::GridMap;

pub const OBSTACLE_GLYPH: char = 'X';
pub const FREE_GLYPH: char = '.';
pub const PATH_GLYPH: char = 'O';
pub const START_GLYPH: char = 'S';
pub const GOAL_GLYPH: char = 'G';

/// One line per grid row, glyphs separated by a single space.
/// Start and goal are marked even when no path is given.
pub fn render_ascii(
    grid: &GridMap,
    start: GridPos,
    goal: GridPos,
    path: Option<&GridPath>,
) -> String {
    let on_path: HashSet<GridPos> = path
        .map(|p| p.cells.iter().copied().collect())
        .unwrap_or_default();

    let mut out = String::with_capacity(grid.cell_count() * 2);
    for r in 0..grid.height() as i32 {
        for c in 0..grid.width() as i32 {
            let pos = GridPos::new(r, c);
            let glyph = if pos == start {
                START_GLYPH
            } else if pos == goal {
                GOAL_GLYPH
            } else if !grid.is_free(pos) {
                OBSTACLE_GLYPH
            } else if on_path.contains(&pos) {
                PATH_GLYPH
            } else {
                FREE_GLYPH
            };
            if c > 0 {
                out.push(' ');
            }
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

pub fn write_rendering<P: AsRef<Path>>(
    file: P,
    grid: &GridMap,
    start: GridPos,
    goal: GridPos,
    path: Option<&GridPath>,
) -> PlannerResult<()> {
    let file = file.as_ref();
    if let Some(dir) = file.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    fs::write(file, render_ascii(grid, start, goal, path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_path() {
        let grid = GridMap::from_fn(3, 3, |r, c| !(r == 1 && c == 1)).unwrap();
        let path = GridPath::from_cells(vec![
            GridPos::new(0, 0),
            GridPos::new(0, 1),
            GridPos::new(0, 2),
            GridPos::new(1, 2),
            GridPos::new(2, 2),
        ]);
        let text = render_ascii(&grid, GridPos::new(0, 0), GridPos::new(2, 2), Some(&path));
        assert_eq!(text, "S O O\n. X O\n. . G\n");
    }

    #[test]
    fn test_render_without_path() {
        let grid = GridMap::from_fn(2, 3, |_, c| c != 1).unwrap();
        let text = render_ascii(&grid, GridPos::new(0, 0), GridPos::new(1, 2), None);
        assert_eq!(text, "S X .\n. X G\n");
    }
}
