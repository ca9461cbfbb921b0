use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "wallflower",
    bin_name = "wallflower",
    version,
    disable_help_subcommand = true,
    after_help = "Examples:\n  wallflower '/search?starMin=4&amenities=Pool'\n  wallflower amenity Spa\n  wallflower clear"
)]
#[command(about = "Search accommodations with filters that survive the next visit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Page to open, e.g. "/search?starMin=5" (same as `wallflower search`).
    /// A value that names a subcommand runs that subcommand instead.
    pub location: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Text, help_heading = "Options")]
    pub output: OutputMode,

    /// Directory holding the saved filters (overrides WALLFLOWER_DATA)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Search(SearchCommands),

    #[command(flatten)]
    Filter(FilterCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum SearchCommands {
    /// Open the search page and list matching accommodations
    #[command(alias = "s", display_order = 1)]
    Search {
        /// "/search?starMin=5", "?starMin=5" or "starMin=5"
        location: Option<String>,
    },

    /// Print the shareable location of the current filters
    #[command(display_order = 2)]
    Url,
}

#[derive(Subcommand, Debug)]
pub enum FilterCommands {
    /// Minimum hotel stars (0 for any)
    #[command(display_order = 10)]
    Stars {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Minimum price per night
    #[command(display_order = 11)]
    PriceMin {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Maximum price per night
    #[command(display_order = 12)]
    PriceMax {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Require an amenity, or stop requiring it if already required
    #[command(display_order = 13)]
    Amenity { name: String },

    /// Minimum customer rating (0 for any)
    #[command(display_order = 14)]
    Rating {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Reset every filter to its default
    #[command(display_order = 15)]
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// List the amenity names accepted by `amenity`
    #[command(display_order = 20)]
    Amenities,

    /// Show the resolved configuration
    #[command(display_order = 21)]
    Config {
        /// Print a commented wallflower.toml instead
        #[arg(long)]
        template: bool,
    },
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
