//! Visualization utilities for anytime_astar
//!
//! Provides a unified interface for plotting grids and paths using gnuplot.
//! Cells are drawn at `x = col`, `y = row`.

use gnuplot::{Figure, Caption, Color, PointSymbol, PointSize, LineWidth, AxesCommon, AutoOption};
use crate::common::{GridPath, GridPos, PlannerError, PlannerResult};
use crate::utils::grid_map::GridMap;

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const GRAY: &str = "#808080";

    // Semantic colors
    pub const OBSTACLE: &str = BLACK;
    pub const START: &str = GREEN;
    pub const GOAL: &str = BLUE;
    pub const PATH: &str = RED;
    pub const VISITED: &str = GRAY;
}

/// Style for path rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: colors::PATH.to_string(),
            line_width: 2.0,
            caption: "Path".to_string(),
        }
    }
}

/// Style for point rendering
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.0,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }
}

#[derive(Debug, Clone)]
enum Layer {
    Points { x: Vec<f64>, y: Vec<f64>, style: PointStyle },
    Lines { x: Vec<f64>, y: Vec<f64>, style: PathStyle },
}

/// Main visualizer struct
///
/// Layers are collected first and drawn onto a single set of axes when the
/// figure is shown or saved.
pub struct Visualizer {
    layers: Vec<Layer>,
    title: String,
    x_label: String,
    y_label: String,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
    aspect_ratio: Option<f64>,
}

impl Visualizer {
    /// Create a new visualizer
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            title: String::new(),
            x_label: "Column".to_string(),
            y_label: "Row".to_string(),
            x_range: None,
            y_range: None,
            aspect_ratio: Some(1.0),
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set X axis range
    pub fn set_x_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_range = Some((min, max));
        self
    }

    /// Set Y axis range
    pub fn set_y_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_range = Some((min, max));
        self
    }

    /// Fit both axis ranges to the grid extent
    pub fn fit_grid(&mut self, grid: &GridMap) -> &mut Self {
        self.set_x_range(-1.0, grid.width() as f64);
        self.set_y_range(-1.0, grid.height() as f64)
    }

    /// Plot a path
    pub fn plot_path(&mut self, path: &GridPath, style: &PathStyle) -> &mut Self {
        self.layers.push(Layer::Lines {
            x: path.cols(),
            y: path.rows(),
            style: style.clone(),
        });
        self
    }

    /// Plot blocked cells of a grid
    pub fn plot_obstacles(&mut self, grid: &GridMap) -> &mut Self {
        let obstacles = grid.obstacles();
        self.plot_cells(
            &obstacles,
            &PointStyle::new(colors::OBSTACLE, "Obstacles")
                .with_symbol('S')
                .with_size(0.5),
        )
    }

    /// Plot a single cell (start, goal, etc.)
    pub fn plot_point(&mut self, pos: GridPos, style: &PointStyle) -> &mut Self {
        self.plot_cells(&[pos], style)
    }

    /// Plot multiple cells
    pub fn plot_cells(&mut self, cells: &[GridPos], style: &PointStyle) -> &mut Self {
        self.layers.push(Layer::Points {
            x: cells.iter().map(|p| p.col as f64).collect(),
            y: cells.iter().map(|p| p.row as f64).collect(),
            style: style.clone(),
        });
        self
    }

    /// Plot start position
    pub fn plot_start(&mut self, pos: GridPos) -> &mut Self {
        self.plot_point(pos, &PointStyle::new(colors::START, "Start").with_size(1.5))
    }

    /// Plot goal position
    pub fn plot_goal(&mut self, pos: GridPos) -> &mut Self {
        self.plot_point(pos, &PointStyle::new(colors::GOAL, "Goal").with_size(1.5))
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Finalize and show the plot
    pub fn show(&self) -> PlannerResult<()> {
        let mut figure = self.build_figure();
        figure
            .show()
            .map_err(|e| PlannerError::VisualizationError(e.to_string()))
            .map(|_| ())
    }

    /// Save plot to PNG file
    pub fn save_png(&self, path: &str, width: u32, height: u32) -> PlannerResult<()> {
        let mut figure = self.build_figure();
        figure
            .save_to_png(path, width, height)
            .map_err(|e| PlannerError::VisualizationError(e.to_string()))
    }

    /// Save plot to SVG file
    pub fn save_svg(&self, path: &str) -> PlannerResult<()> {
        let mut figure = self.build_figure();
        figure
            .save_to_svg(path, 800, 600)
            .map_err(|e| PlannerError::VisualizationError(e.to_string()))
    }

    fn build_figure(&self) -> Figure {
        let mut figure = Figure::new();
        {
            let axes = figure.axes2d();

            for layer in &self.layers {
                match layer {
                    Layer::Points { x, y, style } => {
                        axes.points(x, y, &[
                            Caption(&style.caption),
                            Color(&style.color),
                            PointSymbol(style.symbol),
                            PointSize(style.size),
                        ]);
                    }
                    Layer::Lines { x, y, style } => {
                        axes.lines(x, y, &[
                            Caption(&style.caption),
                            Color(&style.color),
                            LineWidth(style.line_width),
                        ]);
                    }
                }
            }

            if !self.title.is_empty() {
                axes.set_title(&self.title, &[]);
            }
            axes.set_x_label(&self.x_label, &[]);
            axes.set_y_label(&self.y_label, &[]);

            if let Some((min, max)) = self.x_range {
                axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
            }
            if let Some((min, max)) = self.y_range {
                axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
            }
            if let Some(ratio) = self.aspect_ratio {
                axes.set_aspect_ratio(AutoOption::Fix(ratio));
            }
        }
        figure
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Quick plot of a search result on its grid
pub fn quick_plot_path(
    grid: &GridMap,
    path: Option<&GridPath>,
    start: GridPos,
    goal: GridPos,
    title: &str,
) -> Visualizer {
    let mut vis = Visualizer::new();
    vis.set_title(title);
    vis.fit_grid(grid);
    vis.plot_obstacles(grid);
    if let Some(p) = path {
        vis.plot_path(p, &PathStyle::default());
    }
    vis.plot_start(start);
    vis.plot_goal(goal);

    vis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visualizer_creation() {
        let vis = Visualizer::new();
        assert!(vis.aspect_ratio.is_some());
        assert_eq!(vis.layer_count(), 0);
    }

    #[test]
    fn test_path_style() {
        let style = PathStyle::new(colors::RED, "Test Path")
            .with_line_width(3.0);
        assert_eq!(style.line_width, 3.0);
        assert_eq!(style.color, colors::RED);
    }

    #[test]
    fn test_quick_plot_layers() {
        let grid = GridMap::from_fn(3, 3, |r, c| !(r == 1 && c == 1)).unwrap();
        let path = GridPath::from_cells(vec![GridPos::new(0, 0), GridPos::new(0, 1)]);
        let vis = quick_plot_path(&grid, Some(&path), GridPos::new(0, 0), GridPos::new(0, 1), "t");
        // obstacles, path, start, goal
        assert_eq!(vis.layer_count(), 4);
        assert_eq!(vis.x_range, Some((-1.0, 3.0)));
    }
}
