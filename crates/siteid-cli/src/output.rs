use std::io::Write;

use serde::Serialize;
use siteid::Identifier;

use crate::config::Format;

#[derive(Serialize)]
struct Record<'a> {
    id: &'a Identifier,
    kind: &'static str,
}

/// Writes one identifier as a single line in the requested format.
pub fn write_identifier<W: Write>(out: &mut W, id: &Identifier, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Plain => writeln!(out, "{id}")?,
        Format::Json => {
            let record = Record {
                id,
                kind: id.kind().as_str(),
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
