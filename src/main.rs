mod cli;

use cli::Args;
use compose_port_finder::config::{self, ConfigFile};
use compose_port_finder::prelude::*;
use compose_port_finder::shared::error::{ExitCode, PortFinderError};
use std::path::{Path, PathBuf};
use std::process;

const TITLE: &str = "Finding a free PORT to use as docker db port";

fn main() {
    let args = Args::parse_args();
    let exit_code = run(&args);
    process::exit(exit_code.as_i32());
}

fn run(args: &Args) -> ExitCode {
    // Directory and config are resolved before anything is printed, because
    // the config may move console output to stderr
    let setup = resolve_target_directory(args.dir.as_deref())
        .and_then(|directory| load_config(args, &directory).map(|config| (directory, config)));

    let format = match &setup {
        Ok((_, config)) => preferred_format(args, config),
        Err(_) => args.format.unwrap_or_default(),
    };
    let reporter = ReporterFactory::create(format, !args.no_color);
    reporter.title(TITLE);

    let result = setup.and_then(|(directory, config)| {
        for field in config::unknown_field_names(&config) {
            reporter.warning(&format!(
                "Unknown config field '{}' will be ignored.",
                field
            ));
        }

        let request = build_request(args, directory, &config)?;
        scan(request, format, &reporter)
    });

    match result {
        Ok(free_port) => {
            reporter.success(&free_port.to_string());
            ExitCode::Success
        }
        Err(e) => {
            report_failure(&reporter, &e);
            ExitCode::Failure
        }
    }
}

fn scan(
    request: ScanRequest,
    format: OutputFormat,
    reporter: &StyledConsoleReporter,
) -> Result<FreePort> {
    // Create adapters (Dependency Injection)
    let use_case =
        FindFreePortUseCase::new(WalkDirLocator::new(), FileSystemReader::new(), reporter);

    let response = use_case.execute(request.clone())?;

    if format == OutputFormat::Json {
        let report = ScanReport::build(&request, &response);
        StdoutPresenter::new().present(&report.to_json()?)?;
    }

    Ok(response.free_port)
}

fn report_failure(reporter: &StyledConsoleReporter, error: &anyhow::Error) {
    let mut message = error.to_string();
    for cause in error.chain().skip(1) {
        message.push_str(&format!("\nCaused by: {}", cause));
    }

    match error.downcast_ref::<PortFinderError>() {
        Some(e) if e.is_warning() => reporter.warning(&message),
        _ => reporter.error(&message),
    }
}

/// Resolves the directory to scan to a canonical, existing directory.
/// Without an argument the current working directory is used.
fn resolve_target_directory(dir: Option<&str>) -> Result<PathBuf> {
    let path = match dir {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir().map_err(|e| PortFinderError::InvalidDirectory {
            path: PathBuf::from("."),
            reason: format!("Failed to read current directory: {}", e),
        })?,
    };

    if !path.exists() {
        return Err(PortFinderError::InvalidDirectory {
            path,
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let canonical_path = path
        .canonicalize()
        .map_err(|e| PortFinderError::InvalidDirectory {
            path: path.clone(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    if !canonical_path.is_dir() {
        return Err(PortFinderError::InvalidDirectory {
            path,
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(canonical_path)
}

/// Loads the explicit `--config` file, or the one found in the scanned directory.
fn load_config(args: &Args, directory: &Path) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => Ok(config::discover_config(directory)?.unwrap_or_default()),
    }
}

fn preferred_format(args: &Args, config: &ConfigFile) -> OutputFormat {
    args.format
        .or_else(|| config.format.as_deref().and_then(|f| f.parse().ok()))
        .unwrap_or_default()
}

/// Merges CLI options, config file and defaults (in that order of precedence)
/// and validates every value before any file is read.
fn build_request(args: &Args, directory: PathBuf, config: &ConfigFile) -> Result<ScanRequest> {
    if let Some(format) = config.format.as_deref() {
        format
            .parse::<OutputFormat>()
            .map_err(|message| PortFinderError::Validation { message })?;
    }

    let start = args
        .start
        .clone()
        .or_else(|| config.start.as_ref().map(|s| s.to_string()))
        .unwrap_or_else(|| MINIMUM_START_PORT.to_string());
    let start: StartPort = start.parse()?;

    let depth: DepthExpression = args
        .depth
        .as_deref()
        .or(config.depth.as_deref())
        .unwrap_or(DEFAULT_DEPTH)
        .parse()?;

    let services = if args.services.is_empty() {
        ServiceSet::new(config.services.clone().unwrap_or_default())?
    } else {
        ServiceSet::new(args.services.iter().cloned())?
    };

    let directory_filter = DirectoryFilter::new(config.exclude_dirs.clone().unwrap_or_default());

    ScanRequest::builder()
        .directory(directory)
        .start(start)
        .depth(depth)
        .services(services)
        .directory_filter(directory_filter)
        .build()
}
