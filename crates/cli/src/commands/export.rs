use anyhow::{Context, Result};
use replisome_sim::event::ReplicationEvent;
use std::fs;
use std::path::Path;

/// Write the event history to `path`: CSV for a `.csv` extension, JSON
/// otherwise.
pub fn write_events(path: &Path, events: &[ReplicationEvent]) -> Result<()> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let content = if is_csv {
        events_csv(events)
    } else {
        serde_json::to_string_pretty(events).context("Failed to serialize events")?
    };

    fs::write(path, content)
        .with_context(|| format!("Failed to write events to {}", path.display()))
}

fn events_csv(events: &[ReplicationEvent]) -> String {
    let mut content = String::from("index,type,position,enzyme,strand,base_pairs_added,fragment_id\n");
    for (i, event) in events.iter().enumerate() {
        let base_pairs = event
            .base_pairs_added
            .map(|bp| bp.to_string())
            .unwrap_or_default();
        content.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            i,
            event.kind,
            event.position,
            event.enzyme,
            event.strand,
            base_pairs,
            event.fragment_id.as_deref().unwrap_or("")
        ));
    }
    content
}
