use clap::Parser;
use std::path::PathBuf;

use compose_port_finder::application::dto::OutputFormat;

/// Find a free port to use as a docker db port
#[derive(Parser, Debug)]
#[command(name = "compose-port-finder")]
#[command(version)]
#[command(
    about = "Find a free port to use as a docker db port",
    long_about = "Scans docker-compose.yml and docker-compose.override.yml files below a \
                  directory, reports host ports used more than once and recommends the \
                  lowest unused port inside the observed range, or the next port above it."
)]
pub struct Args {
    /// If set, the task will search inside the given directory (defaults to current directory)
    pub dir: Option<String>,

    /// If set, the port is used as a starting point; must be a number >= 3306 [default: 3306]
    #[arg(short, long, value_name = "PORT")]
    pub start: Option<String>,

    /// Directory depth to search for files, e.g. "<=2", "<3" or "2" [default: <=2]
    #[arg(long, value_name = "EXPRESSION")]
    pub depth: Option<String>,

    /// Service keys whose ports are inspected [default: db]
    /// Can be specified multiple times or comma separated: --services db --services mysql,postgres
    #[arg(long, value_name = "SERVICE", value_delimiter = ',')]
    pub services: Vec<String>,

    /// Output format: text or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to a config file (defaults to compose-port-finder.config.yml in the scanned directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
