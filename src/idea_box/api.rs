//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every idea-box operation, whatever the UI.
//!
//! ## Role
//!
//! - **Normalizes raw input**: remainder-style word lists are joined with single
//!   spaces and id arguments are parsed, turning bad ids into usage errors.
//! - **Dispatches** to the matching `commands::*::run`.
//! - **Returns structured types** (`Result<CmdResult>`), never strings on stdout.
//!
//! Business rules (tag normalization, id assignment, matching) live in the
//! command modules and are tested there.
//!
//! ## Generic Over DataStore
//!
//! `IdeaBoxApi<S: DataStore>` takes its store at construction:
//! - Production: `IdeaBoxApi<FileStore>`
//! - Testing: `IdeaBoxApi<InMemoryStore>`

use crate::commands;
use crate::error::{IdeaBoxError, Result};
use crate::store::DataStore;
use std::num::IntErrorKind;
use std::path::Path;

const ADDTAG_ID_USAGE: &str =
    "Provide a valid numeric id. Example: addtag 3 --tags marketing,landing";
const REMOVE_ID_USAGE: &str = "Provide a valid numeric id. Example: remove 2";

pub struct IdeaBoxApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> IdeaBoxApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add<I: AsRef<str>>(&mut self, words: &[I], tags: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, &join_words(words), &[tags])
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search<I: AsRef<str>>(&self, words: &[I]) -> Result<CmdResult> {
        commands::search::run(&self.store, &join_words(words))
    }

    pub fn tag(&self, tag: &str) -> Result<CmdResult> {
        commands::tag::run(&self.store, tag)
    }

    pub fn add_tags<I: AsRef<str>>(&mut self, id: &str, tags: &[I]) -> Result<CmdResult> {
        let id = parse_id(id, ADDTAG_ID_USAGE)?;
        let joined = tags
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<&str>>()
            .join(",");
        commands::addtag::run(&mut self.store, id, &[joined])
    }

    pub fn remove(&mut self, id: &str) -> Result<CmdResult> {
        let id = parse_id(id, REMOVE_ID_USAGE)?;
        commands::remove::run(&mut self.store, id)
    }

    pub fn export(&self, dest: Option<&Path>) -> Result<CmdResult> {
        let dest = dest.unwrap_or_else(|| Path::new(DEFAULT_EXPORT_PATH));
        commands::export::run(&self.store, dest)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }
}

fn join_words<I: AsRef<str>>(words: &[I]) -> String {
    words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Parses an id argument. Numbers outside the `i64` range are valid ids that
/// simply cannot exist, so they report not-found rather than a usage error.
fn parse_id(raw: &str, usage: &str) -> Result<i64> {
    let raw = raw.trim();
    raw.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            IdeaBoxError::NotFound(raw.trim_start_matches('+').to_string())
        }
        _ => IdeaBoxError::Usage(usage.to_string()),
    })
}

pub use commands::export::DEFAULT_EXPORT_PATH;
pub use commands::{CmdMessage, CmdResult, MessageLevel, TagStats};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> IdeaBoxApi<InMemoryStore> {
        IdeaBoxApi::new(InMemoryStore::new())
    }

    #[test]
    fn add_joins_words() {
        let mut api = api();
        let result = api.add(&["Ship", "the", "MVP"], "ai,tools").unwrap();
        assert_eq!(result.affected_ideas[0].text, "Ship the MVP");
        assert_eq!(result.affected_ideas[0].tags, vec!["ai", "tools"]);
    }

    #[test]
    fn add_without_words_is_usage_error() {
        let mut api = api();
        let words: [&str; 0] = [];
        assert!(matches!(api.add(&words, "ai"), Err(IdeaBoxError::Usage(_))));
        assert_eq!(api.store().saves(), 0);
    }

    #[test]
    fn search_joins_words() {
        let mut api = api();
        api.add(&["a great idea"], "").unwrap();
        assert_eq!(api.search(&["GREAT", "idea"]).unwrap().listed_ideas.len(), 1);
    }

    #[test]
    fn add_tags_joins_fragments_with_commas() {
        let mut api = api();
        api.add(&["idea"], "").unwrap();
        let result = api.add_tags("1", &["Marketing", "landing,ai"]).unwrap();
        assert_eq!(
            result.affected_ideas[0].tags,
            vec!["ai", "landing", "marketing"]
        );
    }

    #[test]
    fn non_numeric_ids_are_usage_errors() {
        let mut api = api();
        api.add(&["idea"], "").unwrap();

        match api.add_tags("abc", &["x"]) {
            Err(IdeaBoxError::Usage(msg)) => assert_eq!(msg, ADDTAG_ID_USAGE),
            other => panic!("unexpected: {:?}", other.map(|r| r.messages)),
        }
        match api.remove("") {
            Err(IdeaBoxError::Usage(msg)) => assert_eq!(msg, REMOVE_ID_USAGE),
            other => panic!("unexpected: {:?}", other.map(|r| r.messages)),
        }
        assert_eq!(api.store().load().items.len(), 1);
    }

    #[test]
    fn padded_id_is_accepted() {
        let mut api = api();
        api.add(&["idea"], "").unwrap();
        assert!(api.remove(" 1 ").is_ok());
    }

    #[test]
    fn negative_id_is_not_found() {
        let mut api = api();
        assert!(matches!(
            api.remove("-2"),
            Err(IdeaBoxError::NotFound(id)) if id == "-2"
        ));
    }

    #[test]
    fn out_of_range_id_is_not_found() {
        let mut api = api();
        api.add(&["idea"], "").unwrap();

        match api.remove("99999999999999999999") {
            Err(e @ IdeaBoxError::NotFound(_)) => {
                assert_eq!(e.to_string(), "No idea with id: 99999999999999999999")
            }
            other => panic!("unexpected: {:?}", other.map(|r| r.messages)),
        }
        assert!(matches!(
            api.add_tags("-99999999999999999999", &["x"]),
            Err(IdeaBoxError::NotFound(_))
        ));
        assert_eq!(api.store().load().items.len(), 1);
    }
}
