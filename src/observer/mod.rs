//! Progress reporting for the fetch → parse → build → render pipeline.
//!
//! The parsing and graph code never writes to the console; it reports what it
//! is doing through a [`ProgressObserver`] handed in by the caller.

pub mod terminal;

pub use terminal::{ConsoleObserver, Verbosity};

use std::path::Path;

pub trait ProgressObserver {
    fn arguments_parsed(&self) {}
    fn fetch_started(&self, _location: &str) {}
    fn fetch_finished(&self, _bytes: usize) {}
    fn fetch_failed(&self, _location: &str) {}
    fn index_parsed(&self, _packages: usize) {}
    fn build_started(&self, _root: &str) {}
    /// A name was dequeued that has no record in the index.
    fn package_missing(&self, _name: &str) {}
    fn build_finished(&self, _root: &str, _edges: usize, _nodes: usize) {}
    fn dot_rendered(&self, _edges: usize) {}
    fn output_written(&self, _path: &Path) {}
    fn echo_started(&self, _path: &Path) {}
}

pub struct NoopObserver;

impl ProgressObserver for NoopObserver {}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::path::Path;

    use crate::observer::ProgressObserver;

    #[derive(Default)]
    pub struct RecordingObserver {
        pub events: RefCell<Vec<String>>,
    }

    impl RecordingObserver {
        fn push(&self, event: String) {
            self.events.borrow_mut().push(event);
        }

        pub fn events(&self) -> Vec<String> {
            self.events.borrow().clone()
        }
    }

    impl ProgressObserver for RecordingObserver {
        fn fetch_started(&self, location: &str) {
            self.push(format!("fetch {location}"));
        }

        fn fetch_finished(&self, bytes: usize) {
            self.push(format!("fetched {bytes}"));
        }

        fn fetch_failed(&self, location: &str) {
            self.push(format!("fetch failed {location}"));
        }

        fn index_parsed(&self, packages: usize) {
            self.push(format!("parsed {packages}"));
        }

        fn build_started(&self, root: &str) {
            self.push(format!("build {root}"));
        }

        fn package_missing(&self, name: &str) {
            self.push(format!("missing {name}"));
        }

        fn build_finished(&self, root: &str, edges: usize, nodes: usize) {
            self.push(format!("built {root} {edges} {nodes}"));
        }

        fn output_written(&self, path: &Path) {
            self.push(format!("wrote {}", path.display()));
        }
    }
}
