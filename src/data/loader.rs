use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{TableError, TableResult};

use super::model::{WavelengthSample, Xyz};

/// Columns every row must carry: wavelength, X, Y, Z.
const FIELDS: [&str; 4] = ["wavelength", "X", "Y", "Z"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every row of a headerless `wavelength,X,Y,Z` CSV file.
///
/// Rows are returned in file order. With `strict` set, a wavelength that
/// does not strictly increase over the previous row is an error; otherwise
/// it is only logged.
pub fn load_csv(path: &Path, strict: bool) -> TableResult<Vec<WavelengthSample>> {
    let file = File::open(path).map_err(|source| TableError::Resource {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = parse_samples(file, strict)?;
    log::info!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse samples from any reader.
///
/// No header row is assumed: every record is data. Fields beyond the fourth
/// are ignored. Blank lines are skipped by the CSV reader and do not count
/// as rows.
pub fn parse_samples<R: Read>(reader: R, strict: bool) -> TableResult<Vec<WavelengthSample>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut samples: Vec<WavelengthSample> = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let record = result.map_err(|e| TableError::Parse {
            row,
            message: e.to_string(),
        })?;

        if record.len() < FIELDS.len() {
            return Err(TableError::Parse {
                row,
                message: format!("expected {} fields, found {}", FIELDS.len(), record.len()),
            });
        }

        let mut values = [0.0_f64; 4];
        for (slot, (name, field)) in values.iter_mut().zip(FIELDS.iter().zip(record.iter())) {
            *slot = parse_field(field, row, name)?;
        }
        let [wavelength, x, y, z] = values;

        if let Some(previous) = samples.last() {
            check_order(previous.wavelength, wavelength, row, strict)?;
        }

        let xyz = Xyz::new(x, y, z);
        let sample = WavelengthSample::new(wavelength, xyz).ok_or(TableError::DegenerateRow {
            row,
            wavelength,
            sum: xyz.sum(),
        })?;
        samples.push(sample);
    }

    Ok(samples)
}

fn parse_field(s: &str, row: usize, name: &str) -> TableResult<f64> {
    let value = s.parse::<f64>().map_err(|_| TableError::Parse {
        row,
        message: format!("{name}: '{s}' is not a number"),
    })?;
    // `f64::from_str` accepts "nan" and "inf"; neither belongs in the table.
    if !value.is_finite() {
        return Err(TableError::Parse {
            row,
            message: format!("{name}: '{s}' is not a finite number"),
        });
    }
    Ok(value)
}

fn check_order(previous: f64, current: f64, row: usize, strict: bool) -> TableResult<()> {
    if current > previous {
        return Ok(());
    }
    if strict {
        return Err(TableError::NonMonotonic {
            row,
            previous,
            current,
        });
    }
    log::warn!("row {row}: wavelength {current} nm does not follow {previous} nm");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_rows_in_order() {
        let csv = "360,0.000130,0.000004,0.000606\n\
                   361,0.000146,0.000004,0.000681\n\
                   500,0.0049,0.0232,0.0860\n";
        let samples = parse_samples(Cursor::new(csv), false).expect("parse failed");

        assert_eq!(samples.len(), 3);
        let wavelengths: Vec<f64> = samples.iter().map(|s| s.wavelength).collect();
        assert_eq!(wavelengths, vec![360.0, 361.0, 500.0]);
        assert_eq!(samples[2].xyz, Xyz::new(0.0049, 0.0232, 0.0860));
    }

    #[test]
    fn first_row_is_data() {
        let samples = parse_samples(Cursor::new("400,1,1,1\n"), false).unwrap();
        assert_eq!(samples.len(), 1);
        assert!((samples[0].chromaticity.x - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_yields_no_samples() {
        let samples = parse_samples(Cursor::new(""), false).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn whitespace_and_extra_fields_are_tolerated() {
        let samples = parse_samples(Cursor::new(" 450 , 0.3362, 0.038, 1.7721, extra\n"), false).unwrap();
        assert_eq!(samples[0].wavelength, 450.0);
        assert_eq!(samples[0].xyz.z, 1.7721);
    }

    #[test]
    fn short_row_is_parse_error() {
        let err = parse_samples(Cursor::new("360,0.1,0.2,0.3\n361,0.1,0.2\n"), false).unwrap_err();
        match err {
            TableError::Parse { row, message } => {
                assert_eq!(row, 2);
                assert!(message.contains("found 3"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_field_is_parse_error() {
        let err = parse_samples(Cursor::new("360,0.1,abc,0.3\n"), false).unwrap_err();
        match err {
            TableError::Parse { row, message } => {
                assert_eq!(row, 1);
                assert!(message.starts_with("Y:"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn header_row_is_not_skipped() {
        let err = parse_samples(Cursor::new("lambda,x,y,z\n360,0.1,0.2,0.3\n"), false).unwrap_err();
        assert!(matches!(err, TableError::Parse { row: 1, .. }));
    }

    #[test]
    fn non_finite_field_is_parse_error() {
        let err = parse_samples(Cursor::new("360,NaN,0.2,0.3\n"), false).unwrap_err();
        assert!(matches!(err, TableError::Parse { row: 1, .. }));
        let err = parse_samples(Cursor::new("360,0.1,inf,0.3\n"), false).unwrap_err();
        assert!(matches!(err, TableError::Parse { row: 1, .. }));
    }

    #[test]
    fn zero_sum_row_is_degenerate() {
        let err = parse_samples(Cursor::new("360,0.1,0.2,0.3\n830,0,0,0\n"), false).unwrap_err();
        match err {
            TableError::DegenerateRow { row, wavelength, sum } => {
                assert_eq!(row, 2);
                assert_eq!(wavelength, 830.0);
                assert_eq!(sum, 0.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unordered_rows_pass_through_when_lenient() {
        let csv = "400,0.1,0.2,0.3\n390,0.1,0.2,0.3\n390,0.2,0.2,0.2\n";
        let samples = parse_samples(Cursor::new(csv), false).unwrap();
        let wavelengths: Vec<f64> = samples.iter().map(|s| s.wavelength).collect();
        assert_eq!(wavelengths, vec![400.0, 390.0, 390.0]);
    }

    #[test]
    fn strict_mode_rejects_non_increasing_wavelength() {
        let csv = "400,0.1,0.2,0.3\n401,0.1,0.2,0.3\n401,0.1,0.2,0.3\n";
        let err = parse_samples(Cursor::new(csv), true).unwrap_err();
        match err {
            TableError::NonMonotonic { row, previous, current } => {
                assert_eq!(row, 3);
                assert_eq!(previous, 401.0);
                assert_eq!(current, 401.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_resource_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CIE_cc_1931_2deg.csv");
        let err = load_csv(&path, false).unwrap_err();
        match err {
            TableError::Resource { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
