use crate::table::Table;
use anyhow::Result;
use csv::Writer;
use std::io::Cursor;

/// Writes a table as CSV: the abbreviations as the header, then every row and the totals.
pub fn write_csv<const N: usize>(table: &Table<N>) -> Result<String> {
    let mut writer = Writer::from_writer(Cursor::new(Vec::new()));
    writer.write_record(&table.abbr)?;
    for record in table.records() {
        writer.write_record(&record)?;
    }
    let buf = writer.into_inner()?.into_inner();
    Ok(String::from_utf8(buf)?)
}
