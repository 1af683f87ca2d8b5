//! Cell address type
//!
//! An address pairs a column (1-based, rendered as spreadsheet letters) with a
//! row (1-based). Within a grid the column number is the input line index and
//! the row number is the token index within that line, so the two tokens of
//! line one are `A1`, `A2` and the first token of line two is `B1`.

use crate::error::{Error, Result};
use lazy_regex::regex;
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g. "A1", "BC12")
///
/// Ordering is row-major: all rows of column 1, then column 2, and so on -
/// the order the source text is read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellAddress {
    /// Column number (1-based, A = 1, Z = 26, AA = 27)
    pub col: u32,
    /// Row number (1-based)
    pub row: u32,
}

impl CellAddress {
    /// Create an address from 1-based column and row numbers
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Parse an address from `<ColumnLetters><RowNumber>` notation
    ///
    /// The text must match `[A-Z]+[0-9]+` in full; anything else fails with
    /// [`Error::InvalidAddress`]. Note that the grammar admits `A0`; a row
    /// zero only surfaces later, as a cell that does not exist.
    ///
    /// # Examples
    /// ```
    /// use tabsheet_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B3").unwrap();
    /// assert_eq!(addr.col, 2);
    /// assert_eq!(addr.row, 3);
    ///
    /// assert!(CellAddress::parse("b3").is_err());
    /// assert!(CellAddress::parse("B3x").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if !regex!(r"^[A-Z]+[0-9]+$").is_match(s) {
            return Err(Error::InvalidAddress(s.to_string()));
        }

        // The regex guarantees at least one letter followed by at least one
        // digit, so the split point always exists.
        let digits_at = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| Error::InvalidAddress(s.to_string()))?;

        let col = Self::letters_to_column(&s[..digits_at])?;
        let row = s[digits_at..]
            .parse()
            .map_err(|_| Error::InvalidAddress(s.to_string()))?;

        Ok(Self { col, row })
    }

    /// Convert column letters to a 1-based column number (A = 1, AA = 27)
    pub fn letters_to_column(letters: &str) -> Result<u32> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress(letters.to_string()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_uppercase() {
                return Err(Error::InvalidAddress(letters.to_string()));
            }
            col = col
                .checked_mul(26)
                .and_then(|n| n.checked_add(c as u32 - 'A' as u32 + 1))
                .ok_or_else(|| Error::InvalidAddress(letters.to_string()))?;
        }

        Ok(col)
    }

    /// Convert a 1-based column number to letters (1 = A, 26 = Z, 27 = AA)
    pub fn column_to_letters(col: u32) -> String {
        let mut result = String::new();
        let mut n = col;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_to_letters(self.col), self.row)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_letters_to_column() {
        assert_eq!(CellAddress::letters_to_column("A").unwrap(), 1);
        assert_eq!(CellAddress::letters_to_column("B").unwrap(), 2);
        assert_eq!(CellAddress::letters_to_column("Z").unwrap(), 26);
        assert_eq!(CellAddress::letters_to_column("AA").unwrap(), 27);
        assert_eq!(CellAddress::letters_to_column("AB").unwrap(), 28);
        assert_eq!(CellAddress::letters_to_column("ZZ").unwrap(), 702);
        assert_eq!(CellAddress::letters_to_column("AAA").unwrap(), 703);

        assert!(CellAddress::letters_to_column("").is_err());
        assert!(CellAddress::letters_to_column("a").is_err());
        assert!(CellAddress::letters_to_column("A1").is_err());
    }

    #[test]
    fn test_column_to_letters() {
        assert_eq!(CellAddress::column_to_letters(1), "A");
        assert_eq!(CellAddress::column_to_letters(2), "B");
        assert_eq!(CellAddress::column_to_letters(26), "Z");
        assert_eq!(CellAddress::column_to_letters(27), "AA");
        assert_eq!(CellAddress::column_to_letters(702), "ZZ");
        assert_eq!(CellAddress::column_to_letters(703), "AAA");
    }

    #[test]
    fn test_parse() {
        let addr = CellAddress::parse("A1").unwrap();
        assert_eq!(addr, CellAddress::new(1, 1));

        let addr = CellAddress::parse("B12").unwrap();
        assert_eq!(addr, CellAddress::new(2, 12));

        let addr = CellAddress::parse("AA7").unwrap();
        assert_eq!(addr, CellAddress::new(27, 7));

        // The grammar admits a zero row; it just never finds a cell.
        let addr = CellAddress::parse("A0").unwrap();
        assert_eq!(addr, CellAddress::new(1, 0));
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "A", "1", "1A", "a1", "A 1", " A1", "A1 ", "A1B", "=A1"] {
            assert!(
                matches!(CellAddress::parse(bad), Err(Error::InvalidAddress(_))),
                "expected InvalidAddress for {bad:?}"
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["A1", "B3", "Z9", "AA10", "AZB123"] {
            let addr = CellAddress::parse(text).unwrap();
            assert_eq!(addr.to_string(), text);
            assert_eq!(CellAddress::parse(&addr.to_string()).unwrap(), addr);
        }
    }

    #[test]
    fn test_ordering_is_row_major() {
        let a1 = CellAddress::parse("A1").unwrap();
        let a2 = CellAddress::parse("A2").unwrap();
        let b1 = CellAddress::parse("B1").unwrap();

        assert!(a1 < a2);
        assert!(a2 < b1);
    }
}
