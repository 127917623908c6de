use std::cell::RefCell;
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::observer::ProgressObserver;
use crate::util::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose > 0 {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Narrates pipeline progress on stderr, leaving stdout for the echoed graph.
pub struct ConsoleObserver {
    verbosity: Verbosity,
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleObserver {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            spinner: RefCell::new(None),
        }
    }

    fn info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            output::info(message);
        }
    }

    fn debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            output::debug(message);
        }
    }

    fn start_spinner(&self, message: String) {
        if self.verbosity == Verbosity::Quiet || !console::Term::stderr().is_term() {
            self.info(&message);
            return;
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn stop_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl ProgressObserver for ConsoleObserver {
    fn arguments_parsed(&self) {
        self.debug("command-line arguments parsed");
    }

    fn fetch_started(&self, location: &str) {
        self.start_spinner(format!("fetching package index from {location}"));
    }

    fn fetch_finished(&self, bytes: usize) {
        self.stop_spinner();
        self.debug(&format!("downloaded {bytes} bytes"));
    }

    fn fetch_failed(&self, _location: &str) {
        self.stop_spinner();
    }

    fn index_parsed(&self, packages: usize) {
        self.info(&format!("parsed {packages} packages"));
    }

    fn build_started(&self, root: &str) {
        self.info(&format!("building dependency graph for {root}"));
    }

    fn package_missing(&self, name: &str) {
        self.debug(&format!("{name} is not in the index; treating it as a leaf"));
    }

    fn build_finished(&self, root: &str, edges: usize, nodes: usize) {
        self.info(&format!(
            "dependency graph for {root} built: {edges} edges across {nodes} packages"
        ));
    }

    fn dot_rendered(&self, edges: usize) {
        self.debug(&format!("rendered {edges} edges as DOT"));
    }

    fn output_written(&self, path: &Path) {
        self.info(&format!("wrote DOT graph to {}", path.display()));
    }

    fn echo_started(&self, path: &Path) {
        self.debug(&format!("echoing {}", path.display()));
    }
}

impl Drop for ConsoleObserver {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}
