use clap::Parser;
use elite_profiler::{run_batch_with_custom_config, ProfilerConfig, DEFAULT_PROFILER_CONFIG};
use log::{error, info, LevelFilter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "elite-profiler",
    version,
    about = "Builds per-author profiles and a global summary from a table of posts"
)]
struct Cli {
    /// CSV table of posts (may be gzip-compressed with a .gz extension)
    input: PathBuf,

    /// Folder receiving `main_page.json` and the `elites/` profiles
    output: PathBuf,

    /// Drop content words seen this many times or fewer within a post
    #[arg(long, default_value_t = DEFAULT_PROFILER_CONFIG.min_occurrences)]
    min_occurrences: f64,

    /// Number of top and bottom words kept per author
    #[arg(long, default_value_t = DEFAULT_PROFILER_CONFIG.top_words_count)]
    top_words: usize,

    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG still takes precedence over the default level
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let config = ProfilerConfig {
        min_occurrences: cli.min_occurrences,
        top_words_count: cli.top_words,
    };

    match run_batch_with_custom_config(&config, &cli.input, &cli.output) {
        Ok(summary) => {
            info!(
                "Wrote {} author profiles to {:?}",
                summary.authors.len(),
                cli.output
            );
        }
        Err(e) => {
            error!("Error profiling posts: {}", e);
            std::process::exit(1);
        }
    }
}
