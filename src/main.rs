//! Standalone CLI for ranking a player dataset
//!
//! Run with: cargo run --features cli --bin distance-cli -- [--json] [PATH]

use std::path::Path;

use distance_game::core::{parse_csv, parse_json, RawRow, Standings, SAMPLE_DATA_CSV};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,distance_game=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut as_json = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => as_json = true,
            other if other.starts_with("--") => warn!(arg = other, "Ignoring unknown flag"),
            other => path = Some(other.to_string()),
        }
    }

    let rows = match &path {
        Some(path) => load_rows(Path::new(path))?,
        None => {
            info!("No input file given, using inline sample data");
            parse_csv(SAMPLE_DATA_CSV)
        }
    };

    let standings = Standings::from_rows(&rows);
    info!(
        rows = rows.len(),
        players = standings.len(),
        dropped = rows.len() - standings.len(),
        "Dataset ranked"
    );

    if as_json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
        return Ok(());
    }

    println!("{:>4}  {:<16} {:>6} {:>6} {:>8}", "Rank", "Name", "X", "Y", "Nearest");
    for row in standings.table_rows() {
        println!(
            "{:>4}  {:<16} {:>6} {:>6} {:>8}",
            row.rank, row.name, row.x, row.y, row.nearest
        );
    }

    if let Some(winner) = standings.winner() {
        println!();
        match standings.winner_rival() {
            Some((rival, distance)) => println!(
                "Winner: {} ({:.2} from {})",
                winner.name, distance, rival.name
            ),
            None => println!("Winner: {} (alone on the field)", winner.name),
        }
    }

    Ok(())
}

/// Read a dataset file; `.json` files are parsed as JSON, anything else as CSV
fn load_rows(path: &Path) -> Result<Vec<RawRow>, Box<dyn std::error::Error>> {
    info!(path = %path.display(), "Reading dataset");
    let text = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(parse_json(&text)?)
    } else {
        Ok(parse_csv(&text))
    }
}
