use std::cmp::Reverse;
use std::fmt;

use rayon::prelude::*;

use super::cell::{Cell, Direction};
use super::grid::Grid;

/// How to spread the per-cell work. Both strategies produce identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Sequential,
    Parallel,
}

/// Yields items while `predicate` holds, plus the first item for which it
/// does not, then stops.
#[derive(Debug)]
pub struct TakeWhileInclusive<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> TakeWhileInclusive<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate,
            done: false,
        }
    }
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> Iterator for TakeWhileInclusive<I, P> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.iter.next()?;
        if !(self.predicate)(&item) {
            self.done = true;
        }
        Some(item)
    }
}

/// True iff every height between `cell` and the edge in `direction` is
/// strictly lower than the height at `cell`. Edge cells see out trivially.
pub fn is_visible<H>(grid: &Grid<H>, cell: Cell, direction: Direction) -> bool
where
    H: Ord + Copy + fmt::Debug,
{
    let own = grid[cell];
    grid.heights_toward(cell, direction)
        .max()
        .map_or(true, |tallest| *tallest < own)
}

/// Viewing distance from `cell` in `direction`: cells up to and including the
/// first one at least as tall, or the full distance to the edge.
pub fn scenic_score<H>(grid: &Grid<H>, cell: Cell, direction: Direction) -> usize
where
    H: Ord + Copy + fmt::Debug,
{
    let own = grid[cell];
    TakeWhileInclusive::new(grid.heights_toward(cell, direction), |h| **h < own).count()
}

pub fn cell_is_visible<H>(grid: &Grid<H>, cell: Cell) -> bool
where
    H: Ord + Copy + fmt::Debug,
{
    Direction::ALL
        .into_iter()
        .any(|direction| is_visible(grid, cell, direction))
}

pub fn cell_scenic_score<H>(grid: &Grid<H>, cell: Cell) -> u64
where
    H: Ord + Copy + fmt::Debug,
{
    Direction::ALL
        .into_iter()
        .map(|direction| scenic_score(grid, cell, direction) as u64)
        .product()
}

fn par_cells<H>(grid: &Grid<H>) -> impl ParallelIterator<Item = Cell> + '_
where
    H: Ord + Copy + fmt::Debug + Send + Sync,
{
    (0..grid.rows())
        .into_par_iter()
        .flat_map_iter(move |row| grid.row_cells(row))
}

pub fn count_visible<H>(grid: &Grid<H>, strategy: Strategy) -> usize
where
    H: Ord + Copy + fmt::Debug + Send + Sync,
{
    match strategy {
        Strategy::Sequential => grid
            .cells()
            .filter(|cell| cell_is_visible(grid, *cell))
            .count(),
        Strategy::Parallel => par_cells(grid)
            .filter(|cell| cell_is_visible(grid, *cell))
            .count(),
    }
}

/// The cell with the highest scenic score, first in row-major order on ties.
/// None for an empty grid.
pub fn best_scenic_cell<H>(grid: &Grid<H>, strategy: Strategy) -> Option<(Cell, u64)>
where
    H: Ord + Copy + fmt::Debug + Send + Sync,
{
    let scored = |cell: Cell| (cell, cell_scenic_score(grid, cell));
    match strategy {
        Strategy::Sequential => grid
            .cells()
            .map(scored)
            .min_by_key(|(cell, score)| (Reverse(*score), *cell)),
        Strategy::Parallel => par_cells(grid)
            .map(scored)
            .min_by_key(|(cell, score)| (Reverse(*score), *cell)),
    }
}

pub fn max_scenic_score<H>(grid: &Grid<H>, strategy: Strategy) -> Option<u64>
where
    H: Ord + Copy + fmt::Debug + Send + Sync,
{
    best_scenic_cell(grid, strategy).map(|(_, score)| score)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub visible: usize,
    pub best_scenic: Option<u64>,
    pub best_cell: Option<Cell>,
}

impl Report {
    pub fn format_part1(visible: usize) -> String {
        format!("Result Part 1: {}", visible)
    }

    pub fn format_part2(best_scenic: Option<u64>) -> String {
        match best_scenic {
            Some(score) => format!("Result Part 2: {}", score),
            None => "Result Part 2: none".to_string(),
        }
    }

    pub fn part1_line(&self) -> String {
        Self::format_part1(self.visible)
    }

    pub fn part2_line(&self) -> String {
        Self::format_part2(self.best_scenic)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.part1_line())?;
        write!(f, "{}", self.part2_line())
    }
}

pub fn analyze<H>(grid: &Grid<H>, strategy: Strategy) -> Report
where
    H: Ord + Copy + fmt::Debug + Send + Sync,
{
    let visible = count_visible(grid, strategy);
    let best = best_scenic_cell(grid, strategy);
    if let Some((cell, score)) = best {
        log::debug!("best scenic score {} at {}", score, cell);
    }
    Report {
        visible,
        best_scenic: best.map(|(_, score)| score),
        best_cell: best.map(|(cell, _)| cell),
    }
}
