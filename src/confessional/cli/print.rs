use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use confessional::api::{CmdMessage, MessageLevel, Stats};
use confessional::config::{ConfessionConfig, KEYS as CONFIG_KEYS};
use confessional::model::{Category, Confession, FavoriteSet, ReactionKind};
use confessional::store::draft::{DraftLevel, DraftStatus};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const FAVORITE_MARKER: &str = "♥";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_list(confessions: &[Confession], favorites: &FavoriteSet) {
    for (i, confession) in confessions.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_header(confession, favorites);

        let quoted = format!("\"{}\"", single_line(&confession.text));
        println!("    {}", truncate_to_width(&quoted, LINE_WIDTH - 4));
        println!("    {}", reaction_line(confession).dimmed());
    }
}

pub(super) fn print_full_confession(confession: &Confession, favorites: &FavoriteSet) {
    print_header(confession, favorites);
    println!("--------------------------------");
    println!("\"{}\"", confession.text);
    println!("--------------------------------");
    println!("{}", reaction_line(confession));

    if confession.comments.is_empty() {
        println!("{}", "No comments yet. Be the first!".dimmed());
        return;
    }
    println!();
    for comment in &confession.comments {
        let local: DateTime<Local> = comment.timestamp.with_timezone(&Local);
        println!(
            "  💬 {}  {}",
            comment.text,
            local.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
    }
}

pub(super) fn print_stats(stats: &Stats) {
    println!("{:<22}{}", "Total confessions", stats.total.to_string().bold());
    println!(
        "{:<22}{}",
        "Likes and loves",
        stats.total_likes_and_loves.to_string().bold()
    );
    println!("{:<22}{}", "Posted today", stats.today.to_string().bold());
}

pub(super) fn print_categories() {
    for category in Category::ALL {
        println!(
            "{} {:<12}{}",
            category.emoji(),
            category.key(),
            category.display_name().dimmed()
        );
    }
}

pub(super) fn print_draft(text: &str, status: &DraftStatus) {
    println!("{}", text);
    let counter = format!("{} characters", status.chars);
    match status.level {
        DraftLevel::Normal => println!("{}", counter.dimmed()),
        DraftLevel::Warning => println!("{}", counter.yellow()),
        DraftLevel::Danger => println!("{}", counter.red()),
    }
}

pub(super) fn print_theme(dark: bool) {
    println!("{}", if dark { "dark" } else { "light" });
}

pub(super) fn print_config(config: &ConfessionConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn print_header(confession: &Confession, favorites: &FavoriteSet) {
    let is_favorite = favorites.contains(confession.id);
    let marker = if is_favorite {
        format!(" {}", FAVORITE_MARKER.red())
    } else {
        String::new()
    };
    let marker_width = if is_favorite {
        FAVORITE_MARKER.width() + 1
    } else {
        0
    };
    let left = format!(
        "{}  {} {}",
        confession.id,
        confession.category.emoji(),
        confession.category.display_name()
    );
    let padding = LINE_WIDTH
        .saturating_sub(left.width() + marker_width + TIME_WIDTH)
        .max(1);

    println!(
        "{}{}{}{}",
        left.yellow(),
        marker,
        " ".repeat(padding),
        format_time_ago(confession.created_at).dimmed()
    );
}

fn reaction_line(confession: &Confession) -> String {
    let reactions: Vec<String> = ReactionKind::ALL
        .iter()
        .map(|kind| format!("{} {}", kind.emoji(), confession.reactions.get(*kind)))
        .collect();
    format!(
        "{}   💬 {}   {}",
        reactions.join("  "),
        confession.comments.len(),
        stars(confession.rating)
    )
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn single_line(s: &str) -> String {
    s.chars().map(|c| if c == '\n' { ' ' } else { c }).collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
