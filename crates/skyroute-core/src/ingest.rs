//! Route file ingestion.
//!
//! # Format
//!
//! One route per line, six comma-separated fields:
//!
//! ```text
//! origin,destination,origin_city,destination_city,distance,cost
//! ABE,ATL,"Allentown, PA","Atlanta, GA",692,156
//! ```
//!
//! A field wrapped in double quotes may contain commas, and `""` inside it
//! is a literal quote. Fields are trimmed. The first line is a header unless
//! the caller says otherwise; blank lines are skipped anywhere.
//!
//! Parsing is strict: a malformed line aborts the load with its 1-based
//! line number attached.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::error::RecordError;
use crate::graph::RouteGraph;

/// Number of fields in a route line.
pub const FIELD_COUNT: usize = 6;

/// One parsed route line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub origin_code: String,
    pub destination_code: String,
    pub origin_city: String,
    pub destination_city: String,
    pub distance: u64,
    pub cost: u64,
}

/// Parse a single route line.
///
/// # Errors
///
/// Returns a [`RecordError`] for a wrong field count, an unterminated quote,
/// a blank airport code, or a distance/cost that is not a `u64`.
pub fn parse_record(line: &str) -> Result<RouteRecord, RecordError> {
    let fields = split_fields(line)?;
    if fields.len() != FIELD_COUNT {
        return Err(RecordError::FieldCount {
            found: fields.len(),
            expected: FIELD_COUNT,
        });
    }

    let mut fields = fields.into_iter();
    let mut next = || fields.next().unwrap_or_default();
    let origin_code = require_code(next(), "origin")?;
    let destination_code = require_code(next(), "destination")?;
    let origin_city = next();
    let destination_city = next();
    let distance = parse_number(&next(), "distance")?;
    let cost = parse_number(&next(), "cost")?;

    Ok(RouteRecord {
        origin_code,
        destination_code,
        origin_city,
        destination_city,
        distance,
        cost,
    })
}

fn require_code(code: String, field: &'static str) -> Result<String, RecordError> {
    if code.is_empty() {
        Err(RecordError::EmptyCode { field })
    } else {
        Ok(code)
    }
}

fn parse_number(raw: &str, field: &'static str) -> Result<u64, RecordError> {
    raw.parse().map_err(|_| RecordError::InvalidNumber {
        field,
        raw: raw.to_string(),
    })
}

/// Split a line on commas outside double quotes and trim each field.
fn split_fields(line: &str) -> Result<Vec<String>, RecordError> {
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_end_matches(['\r', '\n']).chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err(RecordError::UnterminatedQuote);
    }
    fields.push(current.trim().to_string());
    Ok(fields)
}

/// Build a [`RouteGraph`] from route lines.
///
/// # Errors
///
/// Returns an error if reading fails or any non-blank line is malformed;
/// the message carries the line number.
#[instrument(skip(reader))]
pub fn load_routes<R: BufRead>(reader: R, has_header: bool) -> Result<RouteGraph> {
    let mut graph = RouteGraph::new();
    let mut records = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("failed to read line {line_no}"))?;
        if has_header && idx == 0 {
            debug!(header = line.trim(), "skipping header");
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_record(&line).with_context(|| format!("line {line_no}"))?;
        graph.insert_record(&record);
        records += 1;
    }

    info!(
        records,
        airports = graph.node_count(),
        routes = graph.edge_count(),
        "loaded route graph"
    );
    Ok(graph)
}

/// Read a route file from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or contains a malformed
/// line; the message names the file.
pub fn load_routes_from_path(path: &Path, has_header: bool) -> Result<RouteGraph> {
    let file = File::open(path)
        .with_context(|| format!("failed to open route file {}", path.display()))?;
    load_routes(BufReader::new(file), has_header)
        .with_context(|| format!("failed to load route file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const SAMPLE: &str = "\
Origin,Dest,OriginCity,DestCity,Distance,Cost
ABE,ATL,\"Allentown, PA\",\"Atlanta, GA\",692,156
ATL,MIA,\"Atlanta, GA\",\"Miami, FL\",595,120

ABE,MIA,\"Allentown, PA\",\"Miami, FL\",1021,210
";

    #[test]
    fn parses_quoted_cities_with_commas() {
        let record = parse_record("ABE,ATL,\"Allentown, PA\",\"Atlanta, GA\",692,156")
            .expect("valid record");
        assert_eq!(record.origin_code, "ABE");
        assert_eq!(record.destination_code, "ATL");
        assert_eq!(record.origin_city, "Allentown, PA");
        assert_eq!(record.destination_city, "Atlanta, GA");
        assert_eq!(record.distance, 692);
        assert_eq!(record.cost, 156);
    }

    #[test]
    fn trims_fields_and_crlf() {
        let record = parse_record(" ABE , ATL ,\"A, PA\",\"B, GA\", 10 , 20 \r\n").expect("valid");
        assert_eq!(record.origin_code, "ABE");
        assert_eq!(record.distance, 10);
        assert_eq!(record.cost, 20);
    }

    #[test]
    fn doubled_quote_is_literal() {
        let record = parse_record("A,B,\"The \"\"Hub\"\", TX\",\"X, NV\",1,1").expect("valid");
        assert_eq!(record.origin_city, "The \"Hub\", TX");
    }

    #[test]
    fn unquoted_city_without_comma() {
        let record = parse_record("A,B,Springfield IL,Reno NV,3,4").expect("valid");
        assert_eq!(record.destination_city, "Reno NV");
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            parse_record("A,B,Allentown, PA,Atlanta GA,1,2"),
            Err(RecordError::FieldCount { found: 7, expected: 6 })
        );
        assert_eq!(
            parse_record("A,B,1,2"),
            Err(RecordError::FieldCount { found: 4, expected: 6 })
        );
    }

    #[test]
    fn rejects_unterminated_quote() {
        assert_eq!(
            parse_record("A,B,\"Allentown, PA,X,1,2"),
            Err(RecordError::UnterminatedQuote)
        );
    }

    #[test]
    fn rejects_empty_code() {
        assert_eq!(
            parse_record(" ,B,x,y,1,2"),
            Err(RecordError::EmptyCode { field: "origin" })
        );
        assert_eq!(
            parse_record("A,,x,y,1,2"),
            Err(RecordError::EmptyCode { field: "destination" })
        );
    }

    #[test]
    fn rejects_negative_and_non_numeric() {
        assert!(matches!(
            parse_record("A,B,x,y,-5,2"),
            Err(RecordError::InvalidNumber { field: "distance", .. })
        ));
        assert!(matches!(
            parse_record("A,B,x,y,5,abc"),
            Err(RecordError::InvalidNumber { field: "cost", .. })
        ));
    }

    #[test]
    fn loads_sample_skipping_header_and_blank_lines() {
        let graph = load_routes(Cursor::new(SAMPLE), true).expect("load");
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        let mia = graph.find_index("MIA").expect("MIA");
        assert_eq!(graph.airport(mia).map(|a| a.city.as_str()), Some("Miami, FL"));
    }

    #[test]
    fn without_header_first_line_is_data() {
        let data = "A,B,\"X, PA\",\"Y, NJ\",1,2\n";
        let graph = load_routes(Cursor::new(data), false).expect("load");
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn header_treated_as_data_fails() {
        let err = load_routes(Cursor::new(SAMPLE), false).expect_err("header is not numeric");
        let message = format!("{err:#}");
        assert!(message.contains("line 1"), "{message}");
        assert!(message.contains("invalid distance"), "{message}");
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let data = "h,h,h,h,h,h\nA,B,x,y,1,2\nA,B,x,y\n";
        let err = load_routes(Cursor::new(data), true).expect_err("malformed");
        let message = format!("{err:#}");
        assert!(message.contains("line 3"), "{message}");
        assert!(message.contains("expected 6 fields, found 4"), "{message}");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_routes_from_path(Path::new("/nonexistent/routes.csv"), true)
            .expect_err("missing");
        assert!(format!("{err:#}").contains("/nonexistent/routes.csv"));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("routes.csv");
        std::fs::write(&path, SAMPLE).expect("write");
        let graph = load_routes_from_path(&path, true).expect("load");
        assert_eq!(graph.edge_count(), 3);
    }
}
