use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use bevy_ecs::world::World;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::ActorRecord;
use crate::persist::{restore_actors, snapshot_actors};

/// File name of the actor snapshot inside an output directory.
pub const ACTORS_FILE: &str = "actors.jsonl";

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Read every non-blank line of a JSONL file.
fn read_jsonl<T: DeserializeOwned>(path: &Path) -> io::Result<Vec<T>> {
    let reader = BufReader::new(File::open(path)?);
    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        items.push(serde_json::from_str(&line)?);
    }
    Ok(items)
}

/// Flush every actor in the world to `actors.jsonl` in `output_dir`.
///
/// Creates the output directory if it does not exist. Returns how many
/// records were written.
pub fn flush_actors_to_jsonl(world: &mut World, output_dir: &Path) -> io::Result<usize> {
    fs::create_dir_all(output_dir)?;
    let records = snapshot_actors(world);
    write_jsonl(&output_dir.join(ACTORS_FILE), records.iter())?;
    Ok(records.len())
}

pub fn read_actors_jsonl(path: &Path) -> io::Result<Vec<ActorRecord>> {
    read_jsonl(path)
}

/// Load `actors.jsonl` from `input_dir` into the world. Returns how many
/// actors were restored.
pub fn restore_from_jsonl(world: &mut World, input_dir: &Path) -> io::Result<usize> {
    let records = read_actors_jsonl(&input_dir.join(ACTORS_FILE))?;
    Ok(restore_actors(world, &records))
}
