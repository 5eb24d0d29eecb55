use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// HorseDiet: evaluate a horse's daily ration against weight-based nutrient requirements.
#[derive(Parser, Debug)]
#[command(name = "horse_diet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a feed catalog JSON file. Uses the built-in catalog when omitted.
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Evaluate a diet given on the command line.
    Evaluate {
        /// Body weight in lbs.
        #[arg(short, long)]
        weight: String,

        /// Feed entry as `identifier=amount` (lbs/day). Repeat for each feed.
        #[arg(short, long = "feed", value_name = "ID=AMOUNT")]
        feeds: Vec<String>,

        /// Print the evaluation as JSON instead of a table.
        #[arg(long)]
        json: bool,

        /// Also write the report rows to a CSV file.
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },

    /// Enter the weight and feeds interactively.
    #[default]
    Interactive,

    /// List the feeds in the catalog.
    Feeds,
}

impl Cli {
    /// Install the tracing subscriber. Logs go to stderr so table and JSON
    /// output on stdout stay clean.
    pub fn init_logging(&self) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
