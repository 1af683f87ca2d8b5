//! Cell values and shape classification
//!
//! A cell keeps the exact text it was built from. Its [`CellKind`] is derived
//! once at construction and can never go stale: a leading `=` followed by a
//! recognized formula shape makes a formula; everything else - including
//! malformed `=`-strings - stays a literal and displays verbatim.

use crate::address::CellAddress;
use crate::operation::Operation;
use lazy_regex::regex;

/// The classified shape of a cell's raw text
#[derive(Debug, Clone, PartialEq)]
pub enum CellKind {
    /// Plain text, displayed as-is
    Literal,
    /// `=<digits>` - the embedded digit string is the displayed value
    Number(String),
    /// `=<address>` - displays the referenced cell's resolved value
    Reference(CellAddress),
    /// `=<NAME>(<args>)` - a closed-set operation over number/address arguments
    Operation {
        op: Operation,
        /// Trimmed argument texts, in order
        args: Vec<String>,
    },
}

/// One addressable unit of the grid
///
/// Immutable after construction; destroyed with the grid that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    address: CellAddress,
    raw: String,
    kind: CellKind,
}

impl Cell {
    /// Build a cell from its raw token and 1-based column/row numbers
    pub fn new(raw: impl Into<String>, col: u32, row: u32) -> Self {
        let raw = raw.into();
        let kind = classify(&raw);
        Self {
            address: CellAddress::new(col, row),
            raw,
            kind,
        }
    }

    /// The cell's address
    pub fn address(&self) -> CellAddress {
        self.address
    }

    /// The exact text the cell was built from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The classified shape of the raw text
    pub fn kind(&self) -> &CellKind {
        &self.kind
    }
}

/// Classify raw cell text into its [`CellKind`]
///
/// Pure function of the text. Classification never fails: a `=`-string that
/// matches none of the three formula shapes (unknown operation name, empty or
/// malformed argument list, stray text) falls back to [`CellKind::Literal`].
fn classify(raw: &str) -> CellKind {
    let Some(body) = raw.strip_prefix('=') else {
        return CellKind::Literal;
    };

    if regex!(r"^[0-9]+$").is_match(body) {
        return CellKind::Number(body.to_string());
    }

    if let Ok(addr) = CellAddress::parse(body) {
        return CellKind::Reference(addr);
    }

    if let Some(caps) = regex!(r"^([A-Z]+)\((.+)\)$").captures(body) {
        if let Ok(op) = Operation::parse(&caps[1]) {
            let args: Vec<String> = caps[2].split(',').map(|a| a.trim().to_string()).collect();
            if args.iter().all(|a| is_valid_argument(a)) {
                return CellKind::Operation { op, args };
            }
        }
    }

    CellKind::Literal
}

/// A formula argument is a bare number or a cell address, nothing deeper
fn is_valid_argument(arg: &str) -> bool {
    regex!(r"^[0-9]+$").is_match(arg) || CellAddress::parse(arg).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kind_of(raw: &str) -> CellKind {
        Cell::new(raw, 1, 1).kind().clone()
    }

    #[test]
    fn test_literal() {
        assert_eq!(kind_of("42"), CellKind::Literal);
        assert_eq!(kind_of("hello"), CellKind::Literal);
        assert_eq!(kind_of("3.14"), CellKind::Literal);
        // '=' anywhere but the front never makes a formula.
        assert_eq!(kind_of("a=b"), CellKind::Literal);
    }

    #[test]
    fn test_number_formula() {
        assert_eq!(kind_of("=42"), CellKind::Number("42".to_string()));
        assert_eq!(kind_of("=0"), CellKind::Number("0".to_string()));
        // Decimals are not part of the number grammar.
        assert_eq!(kind_of("=4.2"), CellKind::Literal);
    }

    #[test]
    fn test_reference_formula() {
        assert_eq!(
            kind_of("=B2"),
            CellKind::Reference(CellAddress::new(2, 2))
        );
        assert_eq!(kind_of("=b2"), CellKind::Literal);
    }

    #[test]
    fn test_operation_formula() {
        assert_eq!(
            kind_of("=ADD(A1,B1)"),
            CellKind::Operation {
                op: Operation::Add,
                args: vec!["A1".to_string(), "B1".to_string()],
            }
        );

        // Whitespace around commas is ignored.
        assert_eq!(
            kind_of("=MULTIPLY( A1 , 3 )"),
            CellKind::Operation {
                op: Operation::Multiply,
                args: vec!["A1".to_string(), "3".to_string()],
            }
        );
    }

    #[test]
    fn test_malformed_formulas_stay_literal() {
        // Unknown operation name.
        assert_eq!(kind_of("=POW(A1,B1)"), CellKind::Literal);
        // Empty or malformed argument lists.
        assert_eq!(kind_of("=ADD()"), CellKind::Literal);
        assert_eq!(kind_of("=ADD(,)"), CellKind::Literal);
        assert_eq!(kind_of("=ADD(A1,1.5)"), CellKind::Literal);
        // Nested calls are not part of the grammar.
        assert_eq!(kind_of("=ADD(ADD(1,2),3)"), CellKind::Literal);
        // Stray text around an otherwise valid shape.
        assert_eq!(kind_of("=ADD(A1,B1)!"), CellKind::Literal);
        assert_eq!(kind_of("="), CellKind::Literal);
    }

    #[test]
    fn test_raw_is_preserved_verbatim() {
        let cell = Cell::new("=POW(A1,B1)", 3, 7);
        assert_eq!(cell.raw(), "=POW(A1,B1)");
        assert_eq!(cell.address(), CellAddress::new(3, 7));
    }
}
