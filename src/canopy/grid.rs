use std::fmt;

use itertools::iproduct;

use super::cell::{Cell, Direction, SightLine};

/// Dense row-major grid. Row count and column count are tracked separately,
/// so nothing here assumes the grid is square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<V: Clone + fmt::Debug> {
    rows: usize,
    cols: usize,
    cells: Vec<V>,
}

impl<V: Clone + fmt::Debug> Grid<V> {
    pub fn new_with(rows: usize, cols: usize, value: V) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Build a grid from row-major cells. Returns None if `cells` does not hold
    /// exactly `rows * cols` values.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<V>) -> Option<Self> {
        if rows.checked_mul(cols)? != cells.len() {
            return None;
        }
        Some(Self { rows, cols, cells })
    }

    /// Build a grid from cells whose shape the caller has already validated.
    pub(crate) fn from_checked(rows: usize, cols: usize, cells: Vec<V>) -> Self {
        assert_eq!(rows * cols, cells.len(), "grid shape does not match cells");
        Self { rows, cols, cells }
    }

    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Get a value by coordinate. Returns None if the coordinate is out-of-bounds.
    pub fn get(&self, cell: Cell) -> Option<&V> {
        let index = self.index_for(cell)?;
        self.cells.get(index)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Every coordinate in the grid, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        iproduct!(0..self.rows, 0..self.cols).map(|(row, col)| Cell::new(row, col))
    }

    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = Cell> {
        (0..self.cols).map(move |col| Cell::new(row, col))
    }

    pub fn sight_line(&self, cell: Cell, direction: Direction) -> SightLine {
        cell.sight_line(direction, self.rows, self.cols)
    }

    /// Values met walking from `cell` toward the edge, nearest first.
    pub fn heights_toward(&self, cell: Cell, direction: Direction) -> impl Iterator<Item = &V> {
        self.sight_line(cell, direction).map(move |c| &self[c])
    }

    pub fn render_with<F: Fn(&V) -> char>(&self, f: F) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in 0..self.rows {
            out.extend(self.row_cells(row).map(|c| f(&self[c])));
            out.push('\n');
        }
        out
    }

    fn index_for(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row * self.cols + cell.col)
        } else {
            None
        }
    }
}

impl<V: Clone + fmt::Debug> std::ops::Index<Cell> for Grid<V> {
    type Output = V;

    fn index(&self, cell: Cell) -> &Self::Output {
        match self.get(cell) {
            Some(value) => value,
            None => panic!(
                "{} out of bounds for {}x{} grid",
                cell, self.rows, self.cols
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Direction, Grid};

    #[test]
    fn test_small() {
        let g = Grid::new_with(1, 1, 7u32);
        assert_eq!(g.size(), 1);
        assert!(g.is_square());
        assert_eq!(g.get(Cell::new(0, 0)), Some(&7));
        assert_eq!(g.get(Cell::new(0, 1)), None);
        assert_eq!(g.get(Cell::new(1, 0)), None);
    }

    #[test]
    fn test_from_cells_checks_shape() {
        assert!(Grid::from_cells(2, 3, vec![0u32; 6]).is_some());
        assert!(Grid::from_cells(2, 3, vec![0u32; 5]).is_none());
        assert!(Grid::<u32>::from_cells(0, 0, vec![]).is_some());
    }

    #[test]
    fn test_from_checked_keeps_shape() {
        let g = Grid::from_checked(3, 2, vec![1u32, 2, 3, 4, 5, 6]);
        assert_eq!((g.rows(), g.cols()), (3, 2));
        assert_eq!(g[Cell::new(2, 1)], 6);
    }

    #[test]
    #[should_panic]
    fn test_from_checked_rejects_bad_shape() {
        Grid::from_checked(2, 2, vec![1u32, 2, 3]);
    }

    #[test]
    fn test_non_square_indexing() {
        let g = Grid::from_cells(2, 3, vec![1u32, 2, 3, 4, 5, 6]).unwrap();
        assert!(!g.is_square());
        assert_eq!(g[Cell::new(0, 2)], 3);
        assert_eq!(g[Cell::new(1, 0)], 4);
        assert!(!g.contains(Cell::new(2, 0)));
        assert!(!g.contains(Cell::new(0, 3)));
    }

    #[test]
    fn test_cells_cross_product() {
        let g = Grid::new_with(2, 3, 0u32);
        let cells = g.cells().collect::<Vec<_>>();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[2], Cell::new(0, 2));
        assert_eq!(cells[3], Cell::new(1, 0));
        assert_eq!(Grid::<u32>::empty().cells().count(), 0);
    }

    #[test]
    fn test_heights_toward() {
        let g = Grid::from_cells(3, 3, vec![1u32, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        let center = Cell::new(1, 1);
        let up = g.heights_toward(center, Direction::Up).copied().collect::<Vec<_>>();
        let down = g.heights_toward(center, Direction::Down).copied().collect::<Vec<_>>();
        let left = g.heights_toward(center, Direction::Left).copied().collect::<Vec<_>>();
        let right = g.heights_toward(center, Direction::Right).copied().collect::<Vec<_>>();
        assert_eq!(up, vec![2]);
        assert_eq!(down, vec![8]);
        assert_eq!(left, vec![4]);
        assert_eq!(right, vec![6]);
        let left_from_edge = g
            .heights_toward(Cell::new(2, 2), Direction::Left)
            .copied()
            .collect::<Vec<_>>();
        assert_eq!(left_from_edge, vec![8, 7]);
    }

    #[test]
    fn test_render() {
        let g = Grid::from_cells(2, 2, vec![1u32, 2, 3, 4]).unwrap();
        let rendered = g.render_with(|h| char::from_digit(*h, 10).unwrap_or('?'));
        assert_eq!(rendered, "12\n34\n");
    }
}
