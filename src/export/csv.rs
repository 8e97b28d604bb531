use crate::errors::AppResult;
use crate::stats::HoursTable;
use csv::Writer;
use std::io::Write;

/// Write an hours table as CSV (`bucket,name,hours`).
pub fn write_hours_csv<W: Write>(out: W, table: &HoursTable) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    wtr.write_record([table.granularity.as_str(), "name", "hours"])?;

    for (label, name, hours) in table.entries() {
        wtr.write_record(&[label.to_string(), name, hours.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
