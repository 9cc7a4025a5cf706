use clap::{Parser, Subcommand};

/// Command-line interface definition for djsetcalc
/// CLI application to log DJ set tracks and total the set time
#[derive(Parser)]
#[command(
    name = "djsetcalc",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple DJ set time CLI: log track start/end times and calculate the total set duration",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override the display mode for this invocation (clock = HH:MM:SS, compact = MM:SS)
    #[arg(global = true, long = "mode")]
    pub mode: Option<String>,

    /// Run in test mode (no config file read/update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and default config file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Compute a single track duration without starting a session
    Calc {
        /// Track start time (MM:SS or HH:MM:SS)
        #[arg(requires = "end")]
        start: Option<String>,

        /// Track end time (MM:SS or HH:MM:SS)
        end: Option<String>,

        /// Start minutes (numeric input, 0-59)
        #[arg(
            long = "in-min",
            value_parser = clap::value_parser!(u8).range(0..=59),
            conflicts_with = "start",
            requires = "in_sec"
        )]
        in_min: Option<u8>,

        /// Start seconds (numeric input, 0-59)
        #[arg(
            long = "in-sec",
            value_parser = clap::value_parser!(u8).range(0..=59),
            requires = "out_min"
        )]
        in_sec: Option<u8>,

        /// End minutes (numeric input, 0-59)
        #[arg(
            long = "out-min",
            value_parser = clap::value_parser!(u8).range(0..=59),
            requires = "out_sec"
        )]
        out_min: Option<u8>,

        /// End seconds (numeric input, 0-59)
        #[arg(
            long = "out-sec",
            value_parser = clap::value_parser!(u8).range(0..=59),
            requires = "in_min"
        )]
        out_sec: Option<u8>,

        /// Print the result as JSON instead of the human-readable line
        #[arg(long = "json")]
        json: bool,
    },

    /// Start an interactive set logging session
    Session {
        /// Suppress the welcome banner and prompt (useful for scripted input)
        #[arg(long = "quiet", short = 'q')]
        quiet: bool,
    },
}
