//! Recursive cell resolution
//!
//! Resolving a cell may recursively resolve the cells its formula names.
//! There is no memoization and no cycle guard: a self-referential chain
//! recurses until the stack runs out.

use crate::error::{EvalError, EvalResult};
use crate::format::format_number;
use lazy_regex::regex;
use tabsheet_core::{Cell, CellAddress, CellKind, Grid, Operation};

/// Resolve the displayed value of `input` against `grid`
///
/// `input` is either a cell address (`"B3"`) or a bare digit string (`"42"`),
/// which passes through unchanged - the form a formula argument takes when it
/// is a number rather than a reference.
///
/// # Errors
/// - [`EvalError::InvalidAddress`] if `input` is neither a digit string nor a
///   well-formed address
/// - [`EvalError::MissingCell`] if no cell exists at the address
/// - [`EvalError::DivisionByZero`] / [`EvalError::ArgumentCount`] from
///   operation formulas encountered anywhere in the reference chain
///
/// # Examples
/// ```
/// use tabsheet_core::Grid;
/// use tabsheet_formula::resolve;
///
/// let grid = Grid::parse("=B1\n7");
/// assert_eq!(resolve(&grid, "A1").unwrap(), "7");
/// assert_eq!(resolve(&grid, "42").unwrap(), "42");
/// ```
pub fn resolve(grid: &Grid, input: &str) -> EvalResult<String> {
    if regex!(r"^[0-9]+$").is_match(input) {
        return Ok(input.to_string());
    }

    let addr = CellAddress::parse(input)?;
    let cell = grid
        .get(addr)
        .ok_or_else(|| EvalError::MissingCell(input.to_string()))?;

    resolve_cell(grid, cell)
}

fn resolve_address(grid: &Grid, addr: CellAddress) -> EvalResult<String> {
    let cell = grid
        .get(addr)
        .ok_or_else(|| EvalError::MissingCell(addr.to_string()))?;

    resolve_cell(grid, cell)
}

fn resolve_cell(grid: &Grid, cell: &Cell) -> EvalResult<String> {
    log::trace!("resolving {}", cell.address());

    match cell.kind() {
        CellKind::Literal => Ok(cell.raw().to_string()),
        CellKind::Number(digits) => Ok(digits.clone()),
        CellKind::Reference(addr) => resolve_address(grid, *addr),
        CellKind::Operation { op, args } => apply_operation(grid, *op, args),
    }
}

fn apply_operation(grid: &Grid, op: Operation, args: &[String]) -> EvalResult<String> {
    if op.is_binary_only() && args.len() != 2 {
        return Err(EvalError::ArgumentCount {
            operation: op.name(),
            expected: 2,
            actual: args.len(),
        });
    }

    let mut operands = args.iter().map(|arg| -> EvalResult<f64> {
        let resolved = resolve(grid, arg)?;
        Ok(to_number(&resolved))
    });

    // Classification guarantees a non-empty argument list.
    let mut result: f64 = operands.next().unwrap_or(Ok(0.0))?;
    for operand in operands {
        result = op
            .apply(result, operand?)
            .ok_or(EvalError::DivisionByZero(op.name()))?;
    }

    Ok(format_number(result))
}

/// Explicit string-to-number conversion for resolved operands
///
/// Operands are usually digit strings; any other text participates as zero,
/// keeping the engine's arithmetic permissive rather than failing mid-chain.
fn to_number(s: &str) -> f64 {
    s.trim().parse().unwrap_or(0.0)
}
