use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::sim::SimulationRuntime;

pub const EVENTS_FILE: &str = "events.jsonl";
pub const AGENTS_FILE: &str = "agents.jsonl";

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Export a runtime's audit trail as JSONL into `output_dir`.
///
/// Creates the directory if needed and overwrites:
/// - `events.jsonl` — one TickEvent per line, in log order
/// - `agents.jsonl` — one AgentState per line, in registration order
///
/// This is a one-way export for inspection; nothing reads it back.
pub fn flush_to_jsonl(runtime: &SimulationRuntime, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(&output_dir.join(EVENTS_FILE), runtime.events().iter())?;
    write_jsonl(&output_dir.join(AGENTS_FILE), runtime.agents())?;

    tracing::debug!(
        dir = %output_dir.display(),
        events = runtime.events().len(),
        "flushed simulation log"
    );
    Ok(())
}
