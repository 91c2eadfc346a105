//! Roster report rendering.
//!
//! The text layout is one block per team: the team name, a column header,
//! one fixed-width line per player, then two blank lines.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{cli::types::format::ReportFormat, core::Roster, Result};

/// Width of the player name column.
pub const NAME_WIDTH: usize = 25;
/// Width of the position column.
pub const POSITION_WIDTH: usize = 4;

fn write_row<W: Write>(w: &mut W, name: &str, position: &str, school: &str) -> std::io::Result<()> {
    writeln!(
        w,
        "\t{:<name_w$}{:<pos_w$}{}",
        name,
        position,
        school,
        name_w = NAME_WIDTH,
        pos_w = POSITION_WIDTH
    )
}

/// Write the fixed-width text report.
///
/// Columns are padded, never truncated.
pub fn render_text<W: Write>(w: &mut W, rosters: &[Roster]) -> std::io::Result<()> {
    for roster in rosters {
        writeln!(w, "{}", roster.team.name)?;
        write_row(w, "Name", "Pos", "College")?;
        for p in &roster.players {
            write_row(w, &p.name, &p.position, &p.school)?;
        }
        write!(w, "\n\n")?;
    }
    Ok(())
}

/// Write the rosters as a pretty-printed JSON array.
pub fn render_json<W: Write>(w: &mut W, rosters: &[Roster]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, rosters)?;
    writeln!(w)?;
    Ok(())
}

/// Create (or truncate) `path` and write the report into it.
pub fn write_report(path: &Path, rosters: &[Roster], format: ReportFormat) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    match format {
        ReportFormat::Text => render_text(&mut w, rosters)?,
        ReportFormat::Json => render_json(&mut w, rosters)?,
    }
    w.flush()?;
    Ok(())
}
