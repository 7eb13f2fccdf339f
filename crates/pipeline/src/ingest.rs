//! Beta CSV parsing.
//!
//! The layout is `date,sector,sector_weight,f1,...,f88[,extra...]` with one
//! header line. Parsing never fails: unparsable numbers become 0.0 and rows
//! with fewer than [`FACTOR_COUNT`] factor columns are dropped.

use betalens_primitives::{FACTOR_COUNT, RawRow};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

/// Parse beta CSV text into raw rows, in file order.
///
/// The first line is treated as a header and skipped. Blank and
/// whitespace-only lines are ignored and every cell is trimmed. No quoting
/// is recognized, so a comma inside a field shifts the columns that follow it.
#[must_use]
pub fn parse_csv(text: &str) -> Vec<RawRow> {
    read_rows(text).0
}

/// Parsed rows plus the number of non-blank data records read.
pub(crate) fn read_rows(text: &str) -> (Vec<RawRow>, usize) {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.trim().as_bytes());

    let mut lines = 0usize;
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                debug!(%err, "skipping unreadable record");
                lines += 1;
                continue;
            }
        };
        if record.iter().all(str::is_empty) {
            continue;
        }
        lines += 1;
        if let Some(row) = parse_record(&record) {
            rows.push(row);
        }
    }

    debug!(lines, accepted = rows.len(), dropped = lines - rows.len(), "parsed beta csv");
    (rows, lines)
}

fn parse_record(record: &StringRecord) -> Option<RawRow> {
    let mut cells = record.iter();
    let date = cells.next().unwrap_or_default();
    let sector = cells.next().unwrap_or_default();
    let sector_weight = parse_number(cells.next().unwrap_or_default());
    let values: Vec<f64> = cells.map(parse_number).collect();

    (values.len() >= FACTOR_COUNT).then(|| RawRow::new(date, sector, sector_weight, values))
}

/// Numeric value of the longest leading decimal literal in a cell.
///
/// Trailing text after the number is ignored (`"1.5x"` is 1.5). A leading
/// `Infinity` is infinite; anything else without a leading number is 0.0.
fn parse_number(cell: &str) -> f64 {
    let s = cell.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |from: usize| {
        bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count() + from
    };

    let unsigned = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[unsigned..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let mut end = digits_from(unsigned);
    let mut mantissa_digits = end - unsigned;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        mantissa_digits += fraction_end - end - 1;
        end = fraction_end;
    }
    if mantissa_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exponent = end + 1 + usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_end = digits_from(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(0.0)
}
