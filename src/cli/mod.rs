//! Command-line interface for the replay crunch tool.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};

use crate::combo::{self, Combo};
use crate::config::{ComboDetectorConfig, CrunchConfig, SerializerConfig};
use crate::engine::{self, CrunchParams};
use crate::error::Result;
use crate::progress::bar_reporter;
use crate::replay::{Analysis, AnalysisPlayer, ReplayMeta, ReplayParser};
use crate::scan;
use crate::serialize;

/// Slippcrunch: a parallel batch analytics engine for game replay files.
///
/// Discovers `.slp` replays under a directory, crunches them across a pool
/// of worker threads, and (in the default `crunch` subcommand) emits a combo
/// queue as JSON.
#[derive(Parser, Debug)]
#[command(name = "slippcrunch")]
#[command(author = "Replay Tools Team")]
#[command(version = "0.1.0")]
#[command(about = "Parallel batch analytics over a directory of .slp replays")]
#[command(long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crunch a directory of replays into a combo queue.
    Crunch {
        /// Directory to scan. Defaults to the current directory.
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Scan only the directory's immediate children (default: recursive).
        #[arg(long)]
        no_recursive: bool,

        /// Worker thread count. Defaults to hardware_concurrency - 1.
        #[arg(short, long)]
        workers: Option<usize>,

        /// Output JSON path. If omitted, prompts for one on stdin.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the interactive "press enter to start" / output-path prompts.
        #[arg(long)]
        no_prompt: bool,
    },

    /// Report scan statistics for a directory without running the engine.
    Info {
        /// Directory to scan. Defaults to the current directory.
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Scan only the directory's immediate children (default: recursive).
        #[arg(long)]
        no_recursive: bool,
    },
}

/// Run the CLI application.
pub fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else if !cli.quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match cli.command {
        Commands::Crunch {
            dir,
            no_recursive,
            workers,
            output,
            no_prompt,
        } => run_crunch(dir, !no_recursive, workers, output, no_prompt, cli.quiet),
        Commands::Info { dir, no_recursive } => run_info(dir, !no_recursive, cli.quiet),
    }
}

fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(d) => Ok(d),
        None => std::env::current_dir().map_err(crate::error::CrunchError::Io),
    }
}

fn run_info(dir: Option<PathBuf>, recursive: bool, quiet: bool) -> Result<()> {
    let dir = resolve_dir(dir)?;
    let entries = scan::discover(&dir, recursive)?;

    if !quiet {
        println!("Replay scan: {}", dir.display());
        println!("=========================================");
        println!("Recursive: {}", recursive);
        println!("Eligible .slp files: {}", entries.len());
        for entry in entries.iter().take(10) {
            println!("  {}", entry.as_path().display());
        }
        if entries.len() > 10 {
            println!("  ... and {} more", entries.len() - 10);
        }
    }

    Ok(())
}

fn run_crunch(
    dir: Option<PathBuf>,
    recursive: bool,
    workers: Option<usize>,
    output: Option<PathBuf>,
    no_prompt: bool,
    quiet: bool,
) -> Result<()> {
    let dir = resolve_dir(dir)?;

    if !no_prompt {
        print!("Press enter to start the crunch...");
        let _ = io::stdout().flush();
        let mut discard = String::new();
        let _ = io::stdin().read_line(&mut discard);
    }

    let output = match output {
        Some(path) => path,
        None => prompt_output_path()?,
    };

    let crunch_config = match workers {
        Some(w) => CrunchConfig::with_workers(w),
        None => CrunchConfig::default(),
    }
    .validate();

    let detector_config = ComboDetectorConfig::default();

    let mut params: CrunchParams<CliReplayParser, Vec<Combo>> = CrunchParams::new()
        .crunch_func(move |parser: CliReplayParser| {
            combo::find_combos(&parser.analysis, &parser.meta, &detector_config)
        })
        .desired_worker_count(crunch_config.desired_worker_count)
        .progress_report_interval(std::time::Duration::from_millis(
            crunch_config.progress_report_interval_ms,
        ));

    if !quiet {
        params = params.progress_report_func(bar_reporter());
    }

    let start = Instant::now();
    let results = engine::crunch_directory(&params, &dir, recursive)?;
    let elapsed = start.elapsed();

    let combos: Vec<Combo> = results.into_iter().flatten().flatten().collect();

    let serializer_config = SerializerConfig::default();
    let document = serialize::queue_document(&combos, &serializer_config, 2);
    std::fs::write(&output, document)?;

    if !quiet {
        println!(
            "Crunched replays in {} seconds",
            elapsed.as_secs()
        );
        println!("Found {} combos", combos.len());
        println!("Wrote {}", output.display());
    }

    if !no_prompt {
        print!("Press enter to exit...");
        let _ = io::stdout().flush();
        let mut discard = String::new();
        let _ = io::stdin().read_line(&mut discard);
    }

    Ok(())
}

fn prompt_output_path() -> Result<PathBuf> {
    print!("Output JSON filename: ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(crate::error::CrunchError::Io)?;
    Ok(PathBuf::from(line.trim()))
}

/// No real `.slp` decoder is linked into this binary; the replay parser is
/// an opaque external dependency (see `crate::replay`). This stand-in always
/// fails to load, so every file in a real run yields `None`; plug in a real
/// [`ReplayParser`] implementation and swap it in here to crunch actual
/// replays.
struct CliReplayParser {
    analysis: Analysis,
    meta: ReplayMeta,
}

impl ReplayParser for CliReplayParser {
    fn new(_flags: i32) -> Self {
        CliReplayParser {
            analysis: Analysis {
                ap: [empty_player(), empty_player()],
            },
            meta: ReplayMeta {
                original_file: String::new(),
                start_time: String::new(),
                first_frame: 0,
                last_frame: 0,
                errors: 1,
            },
        }
    }

    fn load(&mut self, path: &Path) -> bool {
        log::warn!(
            "no .slp decoder is linked into this binary; skipping {}",
            path.display()
        );
        false
    }

    fn replay(&self) -> &ReplayMeta {
        &self.meta
    }

    fn analyze(&self) -> Analysis {
        self.analysis.clone()
    }
}

fn empty_player() -> AnalysisPlayer {
    AnalysisPlayer {
        tag_code: String::new(),
        attacks: Vec::new(),
        punishes: Vec::new(),
    }
}
