use crate::catalog::ColumnDescriptor;
use crate::error::{ProbeError, Result};

/// Parses free-text field numbers such as `"1"` or `"3,4 2"`.
///
/// The line is split on spaces, then each token on commas. Each sub-token
/// contributes its leading integer (`"3x"` is 3); sub-tokens without one, or
/// outside `1..=column_count`, are dropped. Order and repeats are kept.
pub fn parse_field_selection(input: &str, column_count: usize) -> Vec<usize> {
    input
        .split(' ')
        .flat_map(|token| token.split(','))
        .filter_map(leading_integer)
        .filter(|&n| n >= 1 && (n as u64) <= column_count as u64)
        .map(|n| n as usize)
        .collect()
}

pub fn select_table<'a>(tables: &'a [String], input: &str) -> Result<&'a str> {
    let number = leading_integer(input).ok_or(ProbeError::InvalidTableSelection)?;

    usize::try_from(number)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| tables.get(idx))
        .map(|table| table.as_str())
        .ok_or(ProbeError::InvalidTableSelection)
}

// Optional sign and the run of digits after leading whitespace; the rest of
// the text is ignored. None when there are no digits or the value overflows.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    numbers: Vec<usize>,
}

impl FieldSelection {
    pub fn parse(input: &str, column_count: usize) -> Result<Self> {
        let numbers = parse_field_selection(input, column_count);
        if numbers.is_empty() {
            return Err(ProbeError::NoFieldsSelected);
        }
        Ok(Self { numbers })
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn resolve<'c>(&self, columns: &'c [ColumnDescriptor]) -> Vec<&'c ColumnDescriptor> {
        self.numbers
            .iter()
            .filter_map(|&n| columns.get(n - 1))
            .collect()
    }
}
