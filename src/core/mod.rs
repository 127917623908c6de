pub mod package;

pub use package::{DependencyEdge, PackageIndex, PackageRecord};
