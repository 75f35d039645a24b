use crate::core::io::traits::PointFile;
use crate::core::models::points::{PointSet, PointSetError};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid point set: {0}")]
    Points(#[from] PointSetError),
}

/// Headerless CSV, one point per row, one coordinate per column.
///
/// Lines starting with `#` are skipped.
pub struct CsvFile;

impl PointFile for CsvFile {
    type Error = CsvError;

    fn read_from(reader: &mut impl BufRead) -> Result<PointSet, Self::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(reader);

        let rows = csv_reader
            .deserialize::<Vec<f64>>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PointSet::from_rows(rows)?)
    }

    fn write_to(points: &PointSet, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        for point in points.iter() {
            csv_writer.serialize(point.as_slice())?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
