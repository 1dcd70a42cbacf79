//! Grid visualizer as a passive event sink.
//!
//! [`GridCanvas`] keeps one [`Mark`] per cell and updates it from the
//! event stream: expanded cells become `Visited`, and on success the path
//! cells become `Path`. Start and goal markers are never overwritten.
//! Every `frame_interval` expansions (and once at the end) the canvas
//! snapshots an ASCII frame, so a caller can replay the run without
//! re-running the search.

use wayfinder_search::{InstrumentationSink, Outcome, StepEvent};

use crate::worlds::grid::{Cell, CellKind, Grid};

/// Expansions between sampled frames.
pub const DEFAULT_FRAME_INTERVAL: usize = 5;

/// Per-cell display state. Discriminants are the stable numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mark {
    Free = 0,
    Wall = 1,
    Start = 2,
    Goal = 3,
    Visited = 4,
    Path = 5,
}

impl Mark {
    /// Numeric code used by the integer matrix view.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// ASCII glyph used by [`GridCanvas::render`].
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Free => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::Visited => 'o',
            Self::Path => '*',
        }
    }

    fn is_marker(self) -> bool {
        matches!(self, Self::Start | Self::Goal)
    }
}

impl From<CellKind> for Mark {
    fn from(kind: CellKind) -> Self {
        match kind {
            CellKind::Free => Self::Free,
            CellKind::Wall => Self::Wall,
            CellKind::Start => Self::Start,
            CellKind::Goal => Self::Goal,
        }
    }
}

/// Mark buffer over a grid that paints expansions and the final path,
/// snapshotting an ASCII frame every `frame_interval` expansions.
#[derive(Debug, Clone)]
pub struct GridCanvas {
    rows: usize,
    cols: usize,
    marks: Vec<Mark>,
    frame_interval: usize,
    expansions: usize,
    frames: Vec<String>,
}

impl GridCanvas {
    /// Canvas over `grid` with [`DEFAULT_FRAME_INTERVAL`].
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        Self::with_frame_interval(grid, DEFAULT_FRAME_INTERVAL)
    }

    /// An interval of 0 disables intermediate frames; the final frame is
    /// always taken.
    #[must_use]
    pub fn with_frame_interval(grid: &Grid, frame_interval: usize) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            marks: grid.cells().map(|(_, kind)| Mark::from(kind)).collect(),
            frame_interval,
            expansions: 0,
            frames: Vec::new(),
        }
    }

    /// Mark at `cell`, or `None` outside the grid.
    #[must_use]
    pub fn mark(&self, cell: Cell) -> Option<Mark> {
        (cell.row < self.rows && cell.col < self.cols)
            .then(|| self.marks[cell.row * self.cols + cell.col])
    }

    /// Numeric codes, one row per inner vector.
    #[must_use]
    pub fn codes(&self) -> Vec<Vec<u8>> {
        self.marks
            .chunks(self.cols)
            .map(|row| row.iter().map(|m| m.code()).collect())
            .collect()
    }

    /// Number of cells carrying `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Current state as ASCII, one line per row.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.marks.chunks(self.cols) {
            out.extend(row.iter().map(|m| m.glyph()));
            out.push('\n');
        }
        out
    }

    /// Sampled frames, oldest first. The last one is the final state once
    /// a terminal event has been seen.
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    fn paint(&mut self, cell: Cell, mark: Mark) {
        if cell.row >= self.rows || cell.col >= self.cols {
            return;
        }
        let slot = &mut self.marks[cell.row * self.cols + cell.col];
        if !slot.is_marker() {
            *slot = mark;
        }
    }
}

impl InstrumentationSink<Cell> for GridCanvas {
    fn on_event(&mut self, event: &StepEvent<Cell>) {
        match event {
            StepEvent::Expanded { node, .. } => {
                self.paint(*node, Mark::Visited);
                self.expansions += 1;
                if self.frame_interval > 0 && self.expansions % self.frame_interval == 0 {
                    self.frames.push(self.render());
                }
            }
            StepEvent::Final(outcome) => {
                if let Outcome::Found { path, .. } = outcome {
                    for &cell in path {
                        self.paint(cell, Mark::Path);
                    }
                }
                self.frames.push(self.render());
            }
            StepEvent::Aborted { .. } => self.frames.push(self.render()),
        }
    }
}
