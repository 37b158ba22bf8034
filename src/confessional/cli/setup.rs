use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "confess", bin_name = "confess", version)]
#[command(about = "Anonymous confession board for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding confessions, favorites, draft and config
    #[arg(long, global = true, value_name = "DIR", env = "CONFESSIONAL_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Post a new confession
    #[command(alias = "n")]
    New {
        /// The confession text (at least 10 characters)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Category (general, love, work, family, friendship, fear, happiness, regret)
        #[arg(short, long, default_value = "general")]
        category: String,
    },

    /// List confessions
    #[command(alias = "ls")]
    List {
        /// Only show one category ("all" for every category)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Case-insensitive search in text and category
        #[arg(short, long)]
        search: Option<String>,

        /// newest, oldest, mostReacted or random
        #[arg(long, default_value = "newest")]
        sort: String,
    },

    /// Show a confession with its comments
    #[command(alias = "v")]
    Show { id: String },

    /// React to a confession (like, love, laugh, sad, angry)
    React { id: String, kind: String },

    /// Rate a confession from 1 to 5 stars
    Rate { id: String, stars: u8 },

    /// Comment on a confession
    Comment {
        id: String,

        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Add or remove a confession from favorites
    Fav { id: String },

    /// List favorite confessions
    Favorites,

    /// Show a random confession
    Random,

    /// Show today's most loved confession
    Daily,

    /// Show board statistics
    Stats,

    /// List the available categories
    Categories,

    /// Manage the autosaved draft
    Draft {
        #[command(subcommand)]
        action: DraftCommands,
    },

    /// Toggle dark mode
    Theme {
        /// Print the current mode instead of toggling it
        #[arg(long)]
        show: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (min-length, warn-length, danger-length)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DraftCommands {
    /// Overwrite the draft
    Save {
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },

    /// Print the draft and its length
    Show,

    /// Discard the draft
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_new_with_category() {
        let cli = Cli::try_parse_from(["confess", "n", "-c", "love", "I", "miss", "you"]).unwrap();
        match cli.command {
            Some(Commands::New { text, category }) => {
                assert_eq!(text.join(" "), "I miss you");
                assert_eq!(category, "love");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn list_defaults() {
        let cli = Cli::try_parse_from(["confess", "ls"]).unwrap();
        match cli.command {
            Some(Commands::List {
                category,
                search,
                sort,
            }) => {
                assert_eq!(category, "all");
                assert_eq!(search, None);
                assert_eq!(sort, "newest");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rate_requires_numeric_stars() {
        assert!(Cli::try_parse_from(["confess", "rate", "1", "five"]).is_err());
    }
}
