//! CSV output to a file or stdout.

use serde::Serialize;
use std::io::Write;

/// Serialize `rows` as CSV with a header row.
pub fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `rows` to `path`, or to stdout when no path is given.
pub fn write_csv<T: Serialize>(rows: &[T], path: Option<&str>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            write_rows(file, rows)?;
            log::info!("Wrote {} rows to {}", rows.len(), path);
        }
        None => write_rows(std::io::stdout().lock(), rows)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sjl_core::daily_record::DailyRecord;
    use sjl_core::springshed::SpringshedSample;

    #[test]
    fn test_daily_record_headers() {
        let records = vec![DailyRecord::clamped(
            NaiveDate::from_ymd_opt(2021, 3, 4).unwrap(),
            4.5,
            60.25,
            false,
        )];
        let mut buf = Vec::new();
        write_rows(&mut buf, &records).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("date,rainfall,springDischarge,heavyRain"));
        assert_eq!(lines.next(), Some("2021-03-04,4.5,60.25,false"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_missing_district_is_empty_field() {
        let samples = vec![SpringshedSample {
            latitude: 31.5,
            longitude: 78.0,
            springshed_count: 3,
            region: "Himalayas".to_string(),
            district: None,
        }];
        let mut buf = Vec::new();
        write_rows(&mut buf, &samples).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "latitude,longitude,springshedCount,region,district\n31.5,78.0,3,Himalayas,\n"
        );
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let rows: Vec<DailyRecord> = Vec::new();
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows).unwrap();
        assert!(buf.is_empty());
    }
}
