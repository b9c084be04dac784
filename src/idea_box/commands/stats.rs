use crate::commands::{CmdResult, TagStats};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let items = store.load().items;
    let mut stats = TagStats {
        total: items.len(),
        ..TagStats::default()
    };

    for idea in &items {
        for tag in &idea.tags {
            *stats.by_tag.entry(tag.to_lowercase()).or_insert(0) += 1;
        }
    }

    Ok(CmdResult::default().with_stats(stats))
}
