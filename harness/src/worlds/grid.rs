//! Walled 2D grid with 4-connected unit-cost moves.
//!
//! Cells are addressed by `(row, col)`. Moves are generated in the fixed
//! order up, down, left, right; that order is observable through DFS and
//! tie-breaking, so it is part of the domain contract.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wayfinder_search::{Cost, Edge, Heuristic, SearchDomain};

use crate::config::{ConfigError, GridConfig};

/// Grid coordinate. Orders row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// L1 distance to `other`.
    #[must_use]
    pub fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Static content of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Free,
    Wall,
    Start,
    Goal,
}

impl CellKind {
    /// ASCII glyph used by [`Grid::parse`] and `Display`.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Free => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }
}

/// Malformed ASCII grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseGridError {
    #[error("grid text has no rows")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell glyph {glyph:?} at {cell}")]
    UnknownGlyph { glyph: char, cell: Cell },
    #[error("expected exactly one {glyph:?}, found {count}")]
    Marker { glyph: char, count: usize },
}

/// Rectangular walled grid with one start and one goal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    id: String,
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
    start: Cell,
    goal: Cell,
}

impl Grid {
    /// Open grid with start at `(0, 0)` and goal at the opposite corner.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyGrid`] if either dimension is zero.
    pub fn open(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        let mut grid = Self {
            id: format!("grid_{rows}x{cols}"),
            rows,
            cols,
            cells: vec![CellKind::Free; rows * cols],
            start: Cell::new(0, 0),
            goal: Cell::new(rows - 1, cols - 1),
        };
        grid.stamp_markers();
        Ok(grid)
    }

    /// Parse the ASCII form: `S` start, `G` goal, `#` wall, `.` free.
    ///
    /// Blank lines and surrounding whitespace are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError`] for ragged rows, unknown glyphs, or a
    /// missing or repeated `S`/`G`.
    pub fn parse(text: &str) -> Result<Self, ParseGridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(ParseGridError::Empty);
        };
        let cols = first.chars().count();

        let mut cells = Vec::with_capacity(lines.len() * cols);
        let mut starts = Vec::new();
        let mut goals = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(ParseGridError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let cell = Cell::new(row, col);
                let kind = match glyph {
                    '.' => CellKind::Free,
                    '#' => CellKind::Wall,
                    'S' => {
                        starts.push(cell);
                        CellKind::Start
                    }
                    'G' => {
                        goals.push(cell);
                        CellKind::Goal
                    }
                    other => return Err(ParseGridError::UnknownGlyph { glyph: other, cell }),
                };
                cells.push(kind);
            }
        }

        let &[start] = starts.as_slice() else {
            return Err(ParseGridError::Marker {
                glyph: 'S',
                count: starts.len(),
            });
        };
        let &[goal] = goals.as_slice() else {
            return Err(ParseGridError::Marker {
                glyph: 'G',
                count: goals.len(),
            });
        };

        let rows = lines.len();
        Ok(Self {
            id: format!("grid_{rows}x{cols}"),
            rows,
            cols,
            cells,
            start,
            goal,
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[must_use]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    #[must_use]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Cell content, or `None` out of bounds.
    #[must_use]
    pub fn kind(&self, cell: Cell) -> Option<CellKind> {
        self.in_bounds(cell)
            .then(|| self.cells[cell.row * self.cols + cell.col])
    }

    /// In bounds and not a wall.
    #[must_use]
    pub fn is_free(&self, cell: Cell) -> bool {
        matches!(self.kind(cell), Some(kind) if kind != CellKind::Wall)
    }

    /// Turn a free cell into a wall. Start, goal and out-of-bounds cells
    /// are left untouched; returns whether the cell changed.
    pub fn set_wall(&mut self, cell: Cell) -> bool {
        if self.kind(cell) != Some(CellKind::Free) {
            return false;
        }
        self.cells[cell.row * self.cols + cell.col] = CellKind::Wall;
        true
    }

    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&k| k == CellKind::Wall).count()
    }

    /// Row-major iterator over every cell and its content.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &kind)| (Cell::new(i / self.cols, i % self.cols), kind))
    }

    /// Start is written before goal, so a 1x1 grid shows the goal marker.
    fn stamp_markers(&mut self) {
        let (start, goal) = (self.start, self.goal);
        self.cells[start.row * self.cols + start.col] = CellKind::Start;
        self.cells[goal.row * self.cols + goal.col] = CellKind::Goal;
    }
}

impl SearchDomain for Grid {
    type Node = Cell;

    fn domain_id(&self) -> &str {
        &self.id
    }

    fn contains(&self, node: &Cell) -> bool {
        self.is_free(*node)
    }

    fn nodes(&self) -> Vec<Cell> {
        self.cells()
            .filter(|&(_, kind)| kind != CellKind::Wall)
            .map(|(cell, _)| cell)
            .collect()
    }

    fn neighbors(&self, node: &Cell) -> Vec<Edge<Cell>> {
        let Cell { row, col } = *node;
        let candidates = [
            row.checked_sub(1).map(|r| Cell::new(r, col)),
            Some(Cell::new(row + 1, col)),
            col.checked_sub(1).map(|c| Cell::new(row, c)),
            Some(Cell::new(row, col + 1)),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter(|&cell| self.is_free(cell))
            .map(Edge::unit)
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(|kind| kind.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Manhattan distance. Admissible and consistent on a 4-connected
/// unit-cost grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanHeuristic;

impl Heuristic<Cell> for ManhattanHeuristic {
    fn estimate(&self, node: &Cell, goal: &Cell) -> Cost {
        Cost::try_from(node.manhattan(*goal)).unwrap_or(Cost::MAX)
    }
}

/// Seeded random grid per `config`.
///
/// # Errors
///
/// Returns [`ConfigError`] if `config` fails validation.
pub fn generate_grid(config: &GridConfig) -> Result<Grid, ConfigError> {
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    generate_grid_with(config.rows, config.cols, config.wall_probability, &mut rng)
}

/// Random grid drawing from a caller-supplied generator.
///
/// Every cell is a wall independently with probability `wall_probability`;
/// the start and goal corners are then forced open. The result may have no
/// path from start to goal.
///
/// # Errors
///
/// Returns [`ConfigError`] for an empty grid or a probability outside
/// `[0, 1)`.
pub fn generate_grid_with<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    wall_probability: f64,
    rng: &mut R,
) -> Result<Grid, ConfigError> {
    GridConfig {
        rows,
        cols,
        wall_probability,
        seed: 0,
    }
    .validate()?;

    let mut grid = Grid::open(rows, cols)?;
    for kind in &mut grid.cells {
        if rng.gen::<f64>() < wall_probability {
            *kind = CellKind::Wall;
        }
    }
    grid.stamp_markers();
    Ok(grid)
}
