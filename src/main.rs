use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "kibo")]
#[command(author = "RavenLinux Team")]
#[command(version = "0.1.0")]
#[command(about = "Console helpers for small interactive programs", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a menu until the exit entry is chosen
    #[command(visible_alias = "m")]
    Menu {
        /// TOML menu description (defaults to the user config file)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Menu title, overrides the file
        #[arg(short, long)]
        title: Option<String>,

        /// Menu entry, may be repeated; overrides the file entries
        #[arg(short, long = "entry")]
        entries: Vec<String>,

        /// Don't offer the "0. Exit" entry
        #[arg(long)]
        no_exit: bool,

        /// Center the title in its frame
        #[arg(long)]
        centred: bool,

        /// Draw vertical borders around the title
        #[arg(long)]
        vertical: bool,
    },

    /// Print text inside a frame
    Frame {
        /// Text to frame
        text: String,

        /// Frame width (defaults to the text width plus 10)
        #[arg(short, long)]
        width: Option<usize>,

        /// Center the text
        #[arg(long)]
        centred: bool,

        /// Draw vertical borders
        #[arg(long)]
        vertical: bool,
    },

    /// Ask for a single validated value and print it
    Ask {
        /// Kind of value to read
        #[arg(value_enum)]
        kind: AskKind,

        /// Prompt to show
        prompt: String,

        /// Lower bound for numbers
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,

        /// Upper bound for numbers
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,

        /// Allowed characters for single character reads
        #[arg(long)]
        allowed: Option<String>,

        /// Require letters and digits only for strings
        #[arg(long)]
        alphanumeric: bool,
    },

    /// Print a table
    Table {
        /// Column headers
        #[arg(short = 'H', long = "header", required = true)]
        headers: Vec<String>,

        /// Comma separated row, may be repeated
        #[arg(short, long = "row")]
        rows: Vec<String>,

        /// Draw vertical lines
        #[arg(long)]
        vlines: bool,

        /// Cell alignment: left, center or right
        #[arg(short, long, default_value = "left")]
        align: String,
    },

    /// Block for a number of milliseconds
    Wait {
        #[arg(allow_negative_numbers = true)]
        millis: i64,
    },

    /// Print a message with animated dots, then clear the screen
    Loading {
        message: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AskKind {
    String,
    Char,
    YesNo,
    Integer,
    Float,
}

fn print_banner() {
    println!("{}", "kibo console helpers".bright_blue());
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with rendered output
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if cli.verbose {
        print_banner();
    }

    match cli.command {
        Commands::Menu {
            config,
            title,
            entries,
            no_exit,
            centred,
            vertical,
        } => commands::menu::run(commands::menu::MenuArgs {
            config,
            title,
            entries,
            no_exit,
            centred,
            vertical,
        }),
        Commands::Frame {
            text,
            width,
            centred,
            vertical,
        } => commands::frame::run(&text, width, centred, vertical),
        Commands::Ask {
            kind,
            prompt,
            min,
            max,
            allowed,
            alphanumeric,
        } => commands::ask::run(kind, &prompt, min, max, allowed.as_deref(), alphanumeric),
        Commands::Table {
            headers,
            rows,
            vlines,
            align,
        } => commands::table::run(headers, &rows, vlines, &align),
        Commands::Wait { millis } => commands::pause::wait(millis),
        Commands::Loading { message } => commands::pause::loading(&message),
    }
}
