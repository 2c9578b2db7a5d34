//! Command-line flags.

use clap::Parser;

/// Printed when neither mode flag is given. Not an error: exit code 0.
pub const USAGE_HINT: &str = "Please specify --cli or --gui mode. Use --help for help.";

/// Host resource monitor
///
/// Samples CPU, memory, disk and network once per second and shows them
/// either in the terminal or on a live web page.
#[derive(Parser, Debug)]
#[command(name = "hostwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run in CLI mode (live console display)
    #[arg(long)]
    pub cli: bool,

    /// Run in GUI mode (live web view on port 6100)
    #[arg(long)]
    pub gui: bool,
}

/// The front end selected for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Console,
    Live,
}

impl Cli {
    /// Resolve the front end. `--cli` is checked first, so passing both
    /// flags runs the console.
    pub fn mode(&self) -> Option<Mode> {
        if self.cli {
            Some(Mode::Console)
        } else if self.gui {
            Some(Mode::Live)
        } else {
            None
        }
    }
}
