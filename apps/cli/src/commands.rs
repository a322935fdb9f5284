//! CLI definition, tracing setup, and report dispatch.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use sends_core::{Report, ReportMode};
use sends_shared::{AppConfig, ScanConfig, load_config, load_config_from};
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Report climbing sends logged in a static site's page frontmatter.
#[derive(Parser)]
#[command(
    name = "sends",
    version,
    about = "Report climbing sends logged in a static site's page frontmatter.",
    long_about = None,
    args_override_self = true,
)]
pub(crate) struct Cli {
    /// Root directory of the site (the one containing `content/`).
    pub site_path: PathBuf,

    /// Content type to parse, a subdirectory of `<site>/content` [default: posts].
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub content_type: Option<String>,

    /// Output counts per grade instead of the list.
    #[arg(short, long)]
    pub count: bool,

    /// Output unique dates of sends with exactly this grade.
    #[arg(short, long, value_name = "GRADE")]
    pub dates: Option<String>,

    /// Config file to use instead of ~/.sends/sends.toml.
    #[arg(long, env = "SENDS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Parse arguments, exiting with status 1 on usage errors.
///
/// `--help` and `--version` still print to stdout and exit 0.
pub(crate) fn parse_args() -> Cli {
    Cli::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        std::process::exit(code);
    })
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr so stdout only
/// carries the report.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "sends=warn",
        1 => "sends=info",
        2 => "sends=debug",
        _ => "sends=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Collect sends and print the selected report.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let scan_config = ScanConfig::new(&cli.site_path, cli.content_type.as_deref(), &config);
    let mode = ReportMode::from_flags(cli.count, cli.dates.as_deref());

    info!(
        content = %scan_config.content_path().display(),
        mode = ?mode,
        "collecting sends"
    );

    let sends = sends_core::scan(&scan_config)?;
    let report = Report::new(sends);

    let mut out = BufWriter::new(io::stdout().lock());
    report
        .write_to(&mode, &mut out)
        .wrap_err("failed to write report")?;

    Ok(())
}

/// Load the config file named on the command line, or the default one.
fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)
            .wrap_err_with(|| format!("could not load config {}", path.display()))?,
        None => load_config()?,
    };
    debug!(?config, "resolved config");
    Ok(config)
}
