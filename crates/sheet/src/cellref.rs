//! A1-style cell reference parsing and formatting. All indices are
//! zero-based internally; only the textual form is one-based.

/// Column index to letters: 0 -> "A", 25 -> "Z", 26 -> "AA".
pub fn column_letter(mut index: u32) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Letters to column index: "A" -> 0, "AA" -> 26. Empty or non-alpha
/// input yields `None`.
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut index: u32 = 0;
    for c in letters.chars() {
        let c = c.to_ascii_uppercase();
        if !c.is_ascii_uppercase() {
            return None;
        }
        index = index.checked_mul(26)?.checked_add(c as u32 - 'A' as u32 + 1)?;
    }
    Some(index - 1)
}

/// Parse "B5" into zero-based (column, row).
pub fn parse_cell(reference: &str) -> Option<(u32, u32)> {
    let reference = reference.trim();
    let split = reference.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(split);
    let col = column_index(letters)?;
    let row: u32 = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((col, row - 1))
}

/// Zero-based (column, row) to "B5".
pub fn cell_name(col: u32, row: u32) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

/// A normalized rectangular cell range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: (u32, u32),
    pub end: (u32, u32),
}

impl CellRange {
    pub fn width(&self) -> u32 {
        self.end.0 - self.start.0 + 1
    }

    pub fn height(&self) -> u32 {
        self.end.1 - self.start.1 + 1
    }
}

/// Parse "A1:C5". Anything that is not exactly two colon-separated cell
/// references is rejected; endpoints are reordered if given backwards.
pub fn parse_range(range: &str) -> Option<CellRange> {
    let mut parts = range.trim().split(':');
    let start = parse_cell(parts.next()?)?;
    let end = parse_cell(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(CellRange {
        start: (start.0.min(end.0), start.1.min(end.1)),
        end: (start.0.max(end.0), start.1.max(end.1)),
    })
}

/// Absolute sheet-qualified reference for one column slice of a range,
/// e.g. `'Q3 Data'!$B$2:$B$9`. Embedded quotes in the sheet name double.
pub fn column_ref(sheet: &str, col: u32, first_row: u32, last_row: u32) -> String {
    format!(
        "'{}'!${col}${}:${col}${}",
        sheet.replace('\'', "''"),
        first_row + 1,
        last_row + 1,
        col = column_letter(col),
    )
}
