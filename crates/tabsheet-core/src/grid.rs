//! Grid construction from tab/newline-delimited text

use crate::address::CellAddress;
use crate::cell::Cell;
use ahash::AHashMap;
use lazy_regex::regex;

/// An immutable spreadsheet grid
///
/// Built once from raw text: each input line is one column, and each token
/// within a line (separated by a tab or a run of two or more spaces) is one
/// row of that column. Cells are kept in reading order; lookup goes through a
/// hashed index over the same storage.
///
/// Construction never fails - malformed cell contents surface at evaluation
/// time, not here.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: Vec<Cell>,
    index: AHashMap<CellAddress, usize>,
}

impl Grid {
    /// Parse a grid from tab/newline-delimited text
    ///
    /// Tokens are trimmed and tokens empty after trimming are dropped, but
    /// the rows of later tokens on the same line are not renumbered: a line
    /// `a\t\tb` yields cells at rows 1 and 3.
    ///
    /// # Examples
    /// ```
    /// use tabsheet_core::{CellAddress, Grid};
    ///
    /// let grid = Grid::parse("one\ttwo\nthree");
    /// assert_eq!(grid.len(), 3);
    /// assert_eq!(grid.get("A2".parse().unwrap()).unwrap().raw(), "two");
    /// assert_eq!(grid.get("B1".parse().unwrap()).unwrap().raw(), "three");
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut cells = Vec::new();

        for (line_idx, line) in text.trim().split('\n').enumerate() {
            for (token_idx, token) in regex!(r"\t| {2,}").split(line.trim()).enumerate() {
                let token = token.trim();
                if token.is_empty() {
                    continue;
                }
                cells.push(Cell::new(token, line_idx as u32 + 1, token_idx as u32 + 1));
            }
        }

        log::debug!("parsed grid: {} cells", cells.len());

        let index = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (cell.address(), i))
            .collect();

        Self { cells, index }
    }

    /// Look up a cell by address
    pub fn get(&self, addr: CellAddress) -> Option<&Cell> {
        self.index.get(&addr).map(|&i| &self.cells[i])
    }

    /// Whether the grid holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of stored cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Cells in reading (row-major) order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}
