use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub const EMPTY_HINT: &str = r#"No ideas yet. Add one with: add "idea" --tags tag1,tag2"#;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let items = store.load().items;
    let mut result = CmdResult::default();
    if items.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_HINT));
    }
    Ok(result.with_listed_ideas(items))
}
