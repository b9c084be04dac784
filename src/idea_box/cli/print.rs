use colored::Colorize;
use idea_box::api::{CmdMessage, MessageLevel, TagStats};
use idea_box::model::Idea;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_ideas(ideas: &[Idea]) {
    for idea in ideas {
        println!("{}", format_idea(idea));
    }
}

pub(super) fn print_stats(stats: &TagStats) {
    for line in format_stats(stats) {
        println!("{}", line);
    }
}

fn format_idea(idea: &Idea) -> String {
    format!(
        "{:>3}. [{}] {}  ::  tags: {}",
        idea.id,
        idea.created_at,
        idea.text,
        idea.tags_label()
    )
}

fn format_stats(stats: &TagStats) -> Vec<String> {
    let mut lines = vec![format!("Total ideas: {}", stats.total)];
    if !stats.by_tag.is_empty() {
        lines.push("By tag:".to_string());
        lines.extend(
            stats
                .by_tag
                .iter()
                .map(|(tag, count)| format!("  {}: {}", tag, count)),
        );
    }
    lines
}
