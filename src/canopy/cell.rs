use std::fmt;

use derive_more::Display;

/// A zero-based (row, col) position inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[display(fmt = "up")]
    Up,
    #[display(fmt = "down")]
    Down,
    #[display(fmt = "left")]
    Left,
    #[display(fmt = "right")]
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// The neighbouring cell in `direction`, or None when that would leave a
    /// `rows` x `cols` grid.
    pub fn step(&self, direction: Direction, rows: usize, cols: usize) -> Option<Cell> {
        match direction {
            Direction::Up => self.row.checked_sub(1).map(|row| Cell::new(row, self.col)),
            Direction::Down => {
                let row = self.row + 1;
                (row < rows).then(|| Cell::new(row, self.col))
            }
            Direction::Left => self.col.checked_sub(1).map(|col| Cell::new(self.row, col)),
            Direction::Right => {
                let col = self.col + 1;
                (col < cols).then(|| Cell::new(self.row, col))
            }
        }
    }

    /// Number of cells strictly between this one and the edge in `direction`.
    pub fn distance_to_edge(&self, direction: Direction, rows: usize, cols: usize) -> usize {
        match direction {
            Direction::Up => self.row,
            Direction::Down => rows.saturating_sub(self.row + 1),
            Direction::Left => self.col,
            Direction::Right => cols.saturating_sub(self.col + 1),
        }
    }

    pub fn is_boundary(&self, rows: usize, cols: usize) -> bool {
        self.row == 0 || self.col == 0 || self.row + 1 == rows || self.col + 1 == cols
    }

    pub fn sight_line(&self, direction: Direction, rows: usize, cols: usize) -> SightLine {
        SightLine::new(*self, direction, rows, cols)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(row {}, col {})", self.row, self.col)
    }
}

/// Walks from a cell (exclusive) toward the grid edge, nearest cell first.
#[derive(Debug, Clone)]
pub struct SightLine {
    next: Option<Cell>,
    remaining: usize,
    direction: Direction,
    rows: usize,
    cols: usize,
}

impl SightLine {
    fn new(from: Cell, direction: Direction, rows: usize, cols: usize) -> Self {
        Self {
            next: from.step(direction, rows, cols),
            remaining: from.distance_to_edge(direction, rows, cols),
            direction,
            rows,
            cols,
        }
    }
}

impl Iterator for SightLine {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.step(self.direction, self.rows, self.cols);
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SightLine {}

#[cfg(test)]
mod tests {
    use super::{Cell, Direction};

    #[test]
    fn test_sight_line_up() {
        let cells = Cell::new(3, 1)
            .sight_line(Direction::Up, 5, 4)
            .collect::<Vec<_>>();
        assert_eq!(cells, vec![Cell::new(2, 1), Cell::new(1, 1), Cell::new(0, 1)]);
    }

    #[test]
    fn test_sight_line_right_non_square() {
        let line = Cell::new(1, 2).sight_line(Direction::Right, 2, 6);
        assert_eq!(line.len(), 3);
        let cols = line.map(|c| c.col).collect::<Vec<_>>();
        assert_eq!(cols, vec![3, 4, 5]);
    }

    #[test]
    fn test_sight_line_empty_at_edge() {
        let corner = Cell::new(0, 0);
        assert_eq!(corner.sight_line(Direction::Up, 3, 3).count(), 0);
        assert_eq!(corner.sight_line(Direction::Left, 3, 3).count(), 0);
        assert_eq!(corner.sight_line(Direction::Down, 3, 3).count(), 2);
        let far = Cell::new(2, 2);
        assert_eq!(far.sight_line(Direction::Down, 3, 3).count(), 0);
        assert_eq!(far.sight_line(Direction::Right, 3, 3).count(), 0);
    }

    #[test]
    fn test_distance_matches_sight_line() {
        for direction in Direction::ALL {
            for row in 0..4 {
                for col in 0..7 {
                    let cell = Cell::new(row, col);
                    assert_eq!(
                        cell.sight_line(direction, 4, 7).count(),
                        cell.distance_to_edge(direction, 4, 7)
                    );
                }
            }
        }
    }

    #[test]
    fn test_boundary() {
        assert!(Cell::new(0, 3).is_boundary(5, 5));
        assert!(Cell::new(4, 3).is_boundary(5, 5));
        assert!(Cell::new(2, 6).is_boundary(3, 7));
        assert!(!Cell::new(1, 1).is_boundary(3, 3));
        assert!(Cell::new(0, 0).is_boundary(1, 1));
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Right.to_string(), "right");
    }
}
