//! Printable standings: fixed-width table and CSV.

use std::io::Write;

use crate::config::OutputFormat;
use crate::models::{Player, Standing};

/// One line per player: rank, id, name, wins, matches.
pub fn format_standings_table(standings: &[Standing]) -> String {
    let mut out = format!(
        "{:>4} | {:>6} | {:<16} | {:>4} | {:>7}\n",
        "rank", "id", "name", "wins", "matches"
    );
    for (i, s) in standings.iter().enumerate() {
        out.push_str(&format!(
            "{:>4} | {:>6} | {:<16} | {:>4} | {:>7}\n",
            i + 1,
            s.id,
            s.name,
            s.wins,
            s.matches
        ));
    }
    out
}

/// Podium listing, e.g. for the top three after the last round.
pub fn format_champions(players: &[Player]) -> String {
    players
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:>2} : {:>6}, {}\n", i + 1, p.id, p.name))
        .collect()
}

/// Write standings as CSV with a header row.
pub fn write_standings_csv<W: Write>(standings: &[Standing], writer: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["rank", "id", "name", "wins", "matches"])?;
    for (i, s) in standings.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            s.id.to_string(),
            s.name.clone(),
            s.wins.to_string(),
            s.matches.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write standings in the given format. Write failures are returned, not logged.
pub fn write_standings<W: Write>(
    standings: &[Standing],
    format: OutputFormat,
    mut writer: W,
) -> csv::Result<()> {
    match format {
        OutputFormat::Table => {
            writer.write_all(format_standings_table(standings).as_bytes())?;
            writer.flush()?;
            Ok(())
        }
        OutputFormat::Csv => write_standings_csv(standings, writer),
    }
}
