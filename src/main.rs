//! rswappalyzer-lint 命令行入口
//! 成功时静默退出（0），失败时错误逐行输出到 stderr 并以 1 退出

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rswappalyzer_lint::{
    CheckMode, ConfigManager, DatasetValidator, LintConfig, DEFAULT_APPS_PATH, DEFAULT_ICON_DIR,
};

#[derive(Parser, Debug)]
#[command(name = "rswappalyzer-lint")]
#[command(about = "Validate a Wappalyzer technology dataset and its icon directory", long_about = None)]
#[command(version)]
struct Cli {
    /// Single-file dataset ({ "apps": {...}, "categories": {...} })
    #[arg(long, value_name = "FILE", conflicts_with = "technologies")]
    apps: Option<PathBuf>,

    /// Directory of split technology files (a.json ... z.json, _.json)
    #[arg(long, value_name = "DIR", requires = "categories")]
    technologies: Option<PathBuf>,

    /// Category file used with --technologies
    #[arg(long, value_name = "FILE", requires = "technologies")]
    categories: Option<PathBuf>,

    /// Icon directory
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ICON_DIR)]
    icons: PathBuf,

    /// Collect every failure instead of stopping at the first one
    #[arg(long)]
    fail_slow: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> LintConfig {
        let mut builder = ConfigManager::custom()
            .icon_dir(self.icons)
            .verbose(self.verbose);

        builder = match (self.technologies, self.categories) {
            (Some(technologies), Some(categories)) => {
                builder.split_directory(technologies, categories)
            }
            _ => builder.single_file(self.apps.unwrap_or_else(|| PathBuf::from(DEFAULT_APPS_PATH))),
        };

        if self.fail_slow {
            builder = builder.mode(CheckMode::FailSlow);
        }
        builder.build()
    }
}

#[cfg(not(feature = "tracing"))]
fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

#[cfg(feature = "tracing")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.into_config();
    log::debug!("Lint config: {:?}", config);

    match DatasetValidator::new(config).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            for line in err.report_lines() {
                eprintln!("{}", line);
            }
            ExitCode::FAILURE
        }
    }
}
