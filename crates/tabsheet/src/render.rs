//! Whole-sheet rendering
//!
//! Rendering substitutes every cell's resolved value back into the
//! tab/newline shape of the source text. It needs the evaluator, so it lives
//! here as an extension over the core grid rather than in the data model.

use tabsheet_core::Grid;
use tabsheet_formula::{resolve, EvalResult};

/// Extension trait adding evaluated output to [`Grid`]
pub trait GridRenderExt {
    /// Resolve a single cell's displayed value by address text
    fn display_value(&self, address: &str) -> EvalResult<String>;

    /// Render the whole sheet with every formula replaced by its value
    ///
    /// Cells of the same column join with a tab; a new line starts at each
    /// column boundary. An empty grid renders as an empty string. The first
    /// unresolvable cell fails the whole render.
    fn render(&self) -> EvalResult<String>;
}

impl GridRenderExt for Grid {
    fn display_value(&self, address: &str) -> EvalResult<String> {
        resolve(self, address)
    }

    fn render(&self) -> EvalResult<String> {
        let mut out = String::new();
        let mut current_col = None;

        for cell in self.cells() {
            let value = resolve(self, &cell.address().to_string())?;
            match current_col {
                None => {}
                Some(col) if col == cell.address().col => out.push('\t'),
                Some(_) => out.push('\n'),
            }
            out.push_str(&value);
            current_col = Some(cell.address().col);
        }

        Ok(out)
    }
}
