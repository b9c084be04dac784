use clap::{Parser, Subcommand};
use idea_box::api::DEFAULT_EXPORT_PATH;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "idea-box", bin_name = "idea-box", version)]
#[command(about = "Capture ideas with tags. List, search, tag filter, export JSON.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an idea. Example: add "Ship MVP" --tags ai,tools
    Add {
        /// Idea text (words are joined with spaces)
        text: Vec<String>,

        /// Tags, separated by commas or spaces
        #[arg(short, long, default_value = "")]
        tags: String,
    },

    /// List all ideas
    List,

    /// Search in text and tags
    Search {
        /// Search words (joined with spaces, case-insensitive)
        query: Vec<String>,
    },

    /// List ideas by tag
    Tag {
        /// Tag to filter on
        tag: String,
    },

    /// Add tags to an idea by id
    #[command(name = "addtag")]
    AddTag {
        /// Id of the idea
        #[arg(allow_negative_numbers = true)]
        id: String,

        /// Tags to add, separated by commas or spaces
        #[arg(short, long, num_args = 0..)]
        tags: Vec<String>,
    },

    /// Remove idea by id
    Remove {
        /// Id of the idea
        #[arg(allow_negative_numbers = true)]
        id: String,
    },

    /// Export full DB to JSON
    Export {
        /// Destination file
        #[arg(short = 'o', long, default_value = DEFAULT_EXPORT_PATH)]
        path: PathBuf,
    },

    /// Count totals and per-tag
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Commands {
        let mut argv = vec!["idea-box"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_collects_words_and_tags_anywhere() {
        match parse(&["add", "Ship", "MVP", "--tags", "ai,tools"]) {
            Commands::Add { text, tags } => {
                assert_eq!(text, vec!["Ship", "MVP"]);
                assert_eq!(tags, "ai,tools");
            }
            other => panic!("unexpected {:?}", other),
        }
        match parse(&["add", "-t", "x", "late", "words"]) {
            Commands::Add { text, tags } => {
                assert_eq!(text, vec!["late", "words"]);
                assert_eq!(tags, "x");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn add_without_text_parses() {
        match parse(&["add"]) {
            Commands::Add { text, tags } => {
                assert!(text.is_empty());
                assert!(tags.is_empty());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn addtag_takes_many_tag_values() {
        match parse(&["addtag", "3", "--tags", "marketing", "landing"]) {
            Commands::AddTag { id, tags } => {
                assert_eq!(id, "3");
                assert_eq!(tags, vec!["marketing", "landing"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn negative_ids_reach_the_command() {
        match parse(&["remove", "-1"]) {
            Commands::Remove { id } => assert_eq!(id, "-1"),
            other => panic!("unexpected {:?}", other),
        }
        match parse(&["addtag", "-1", "--tags", "x"]) {
            Commands::AddTag { id, tags } => {
                assert_eq!(id, "-1");
                assert_eq!(tags, vec!["x"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn export_defaults_path() {
        match parse(&["export"]) {
            Commands::Export { path } => assert_eq!(path, PathBuf::from("ideas_export.json")),
            other => panic!("unexpected {:?}", other),
        }
        match parse(&["export", "-o", "out.json"]) {
            Commands::Export { path } => assert_eq!(path, PathBuf::from("out.json")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["idea-box"]).is_err());
    }
}
