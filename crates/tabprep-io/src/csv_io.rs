use std::error::Error;
use std::path::Path;
use tabprep_core::{Column, Frame};

/// Read a CSV file into a frame. The header row provides column names.
/// A column whose every non-empty field parses as f64 becomes numeric
/// (empty fields read as 0.0); any other column becomes categorical.
/// Datetime inference is not attempted.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Frame, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_path(path.as_ref())?;
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();

    let mut fields: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for result in rdr.records() {
        let record = result?;
        for (col, field) in fields.iter_mut().zip(record.iter()) {
            col.push(field.to_string());
        }
    }

    let mut frame = Frame::new();
    for (name, raw) in headers.into_iter().zip(fields) {
        let numeric = raw
            .iter()
            .filter(|f| !f.is_empty())
            .all(|f| f.parse::<f64>().is_ok());
        let column = if numeric {
            Column::Numeric(
                raw.iter()
                    .map(|f| f.parse::<f64>().unwrap_or(0.0))
                    .collect(),
            )
        } else {
            Column::Categorical(raw)
        };
        frame.push(name, column)?;
    }
    Ok(frame)
}

/// Write a frame to a CSV file, header row first.
pub fn write_csv<P: AsRef<Path>>(path: P, frame: &Frame) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    wtr.write_record(frame.column_names())?;

    for i in 0..frame.num_rows() {
        let row: Vec<String> = frame
            .iter()
            .map(|(_, col)| match col {
                Column::Numeric(v) => format!("{}", v[i]),
                Column::Categorical(v) => v[i].clone(),
                Column::Datetime(v) => format!("{}", v[i]),
            })
            .collect();
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
