use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{load_settings, resolve_config_path, Settings};
use crate::error::{PkgvizError, Result};
use crate::graph::{build_graph, render_dot};
use crate::index::{load_index, source_for};
use crate::observer::{ConsoleObserver, ProgressObserver, Verbosity};
use crate::util::output;

#[derive(Parser, Debug)]
#[command(name = "pkgviz")]
#[command(about = "Render the transitive Depends graph of a Debian package as DOT", long_about = None)]
pub struct Cli {
    /// Graphviz program for a later rendering step; recorded, never run
    #[arg(long, env = "PKGVIZ_GRAPHVIZ_PATH")]
    pub graphviz_path: PathBuf,
    /// Package whose dependencies are walked
    #[arg(long, env = "PKGVIZ_PACKAGE_NAME")]
    pub package_name: String,
    /// Where the DOT description is written
    #[arg(long, env = "PKGVIZ_OUTPUT_FILE")]
    pub output_file: PathBuf,
    /// URL (or local path) of a gzip-compressed Packages index
    #[arg(long, env = "PKGVIZ_REPO_URL")]
    pub repo_url: String,
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Fetch timeout in seconds, overriding the config file
    #[arg(long)]
    pub timeout: Option<u64>,
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[arg(short, long)]
    pub quiet: bool,
    #[arg(long)]
    pub no_color: bool,
}

pub fn run() {
    let cli = Cli::parse();
    if cli.no_color {
        output::disable_colors();
    }
    if let Err(err) = dispatch(cli) {
        output::error(&format_error(&err));
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let observer = ConsoleObserver::new(Verbosity::from_flags(cli.quiet, cli.verbose));
    observer.arguments_parsed();

    let settings = load_cli_settings(&cli)?;
    if !cli.quiet && !cli.graphviz_path.exists() {
        output::warn(&format!(
            "graphviz program {} does not exist",
            cli.graphviz_path.display()
        ));
    }

    let dot = generate(&cli.package_name, &cli.repo_url, &settings, &observer)?;
    write_output(&cli.output_file, &dot)?;
    observer.output_written(&cli.output_file);

    if settings.output.echo() {
        observer.echo_started(&cli.output_file);
        let stdout = io::stdout();
        echo_file(&cli.output_file, &mut stdout.lock())?;
    }
    Ok(())
}

fn load_cli_settings(cli: &Cli) -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    let location = resolve_config_path(cli.config.clone(), &cwd);
    let mut settings = load_settings(&location)?;
    if let Some(timeout) = cli.timeout {
        settings.fetch.timeout_secs = Some(timeout);
    }
    Ok(settings)
}

/// Loads the index at `repo_url` and renders the dependency graph of `package`.
pub fn generate(
    package: &str,
    repo_url: &str,
    settings: &Settings,
    observer: &dyn ProgressObserver,
) -> Result<String> {
    let source = source_for(repo_url, &settings.fetch)?;
    let index = load_index(source.as_ref(), repo_url, observer)?;
    let graph = build_graph(package, &index, observer);
    let dot = render_dot(&graph.edges);
    observer.dot_rendered(graph.len());
    Ok(dot)
}

pub fn write_output(path: &Path, dot: &str) -> Result<()> {
    fs::write(path, dot).map_err(|source| PkgvizError::Output {
        action: "write",
        path: path.to_path_buf(),
        source,
    })
}

/// Copies `path` to `out` line by line, trimming each line.
pub fn echo_file(path: &Path, out: &mut impl Write) -> Result<()> {
    let read_err = |source: io::Error| PkgvizError::Output {
        action: "read",
        path: path.to_path_buf(),
        source,
    };
    let file = fs::File::open(path).map_err(read_err)?;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(read_err)?;
        writeln!(out, "{}", line.trim())?;
    }
    Ok(())
}

fn format_error(err: &PkgvizError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(&format!("\n  caused by: {text}"));
        }
        source = std::error::Error::source(cause);
    }
    message
}
