//! Rendering a collector to an output stream.

use crate::collections::NamedCollector;
use crate::error::Result;
use std::io::Write;

/// Output format for a collector report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Header line followed by one bullet line per item
    #[default]
    Text,
    /// Pretty-printed `{"name": ..., "items": [...]}`
    #[cfg(feature = "json")]
    Json,
}

/// Writes `collector` to `out` in the requested format and flushes it.
pub fn write_report<W: Write>(
    collector: &NamedCollector,
    format: ReportFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        ReportFormat::Text => write!(out, "{collector}")?,
        #[cfg(feature = "json")]
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, collector)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    log::debug!(
        "Wrote {} item(s) for '{}' as {:?}",
        collector.len(),
        collector.name(),
        format
    );
    Ok(())
}

/// Renders `collector` into a `String`.
pub fn render_report(collector: &NamedCollector, format: ReportFormat) -> Result<String> {
    let mut buf = Vec::new();
    write_report(collector, format, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
