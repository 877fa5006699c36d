mod jsonl;

pub use jsonl::{AGENTS_FILE, EVENTS_FILE, flush_to_jsonl};
