//! CSV export of the filtered subset.

use crate::models::record::VulnerabilityRecord;
use csv::Writer;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 9] = [
    "CVE ID",
    "Corporation",
    "Product",
    "Language",
    "Protocol",
    "Severity",
    "Score",
    "Recurrence Type",
    "Validated",
];

/// Writes the subset as CSV: the fixed header row, then one row per record
/// in subset order.
///
/// Fields containing commas or quotes are quoted per RFC 4180. The original
/// dashboard joined fields with bare commas and would corrupt such rows;
/// that limitation is deliberately not preserved.
pub fn write_csv<W: Write>(subset: &[VulnerabilityRecord], out: W) -> csv::Result<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(HEADER)?;

    for record in subset {
        let score = record.score.to_string();
        writer.write_record([
            record.id.as_str(),
            record.corporation.as_str(),
            record.product.as_str(),
            record.language.as_str(),
            record.protocol.as_str(),
            record.severity.as_str(),
            score.as_str(),
            record.recurrence_type.as_str(),
            if record.validated { "true" } else { "false" },
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the subset as CSV to a file path.
pub fn export_csv_file(subset: &[VulnerabilityRecord], path: &Path) -> csv::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(subset, file)
}
