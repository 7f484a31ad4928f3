use clap::Parser;

/// Command-line interface definition for bikeshare.
/// Everything else is asked interactively once the session starts.
#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: pick cities, filter by month/weekday and read trip statistics",
    long_about = None
)]
pub struct Cli {
    /// Directory containing the city CSV files (default: current directory)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// YAML file overriding the data directory and/or the city → file map
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<String>,
}
