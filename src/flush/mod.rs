pub mod jsonl;

pub use jsonl::{flush_actors_to_jsonl, read_actors_jsonl, restore_from_jsonl};
