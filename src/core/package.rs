use std::collections::BTreeMap;

pub const PACKAGE_FIELD: &str = "Package";
pub const DEPENDS_FIELD: &str = "Depends";

/// One paragraph of a control file, keyed by case-sensitive field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRecord {
    fields: BTreeMap<String, String>,
}

impl PackageRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(PACKAGE_FIELD)
    }

    /// The raw `Depends` field, or an empty string when the record has none.
    pub fn depends(&self) -> &str {
        self.get(DEPENDS_FIELD).unwrap_or("")
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub(crate) fn append(&mut self, field: &str, text: &str) {
        if let Some(value) = self.fields.get_mut(field) {
            value.push(' ');
            value.push_str(text);
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PackageRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = PackageRecord::new();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}

#[derive(Debug, Clone, Default)]
pub struct PackageIndex {
    packages: BTreeMap<String, PackageRecord>,
}

impl PackageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` under its `Package` field, replacing any earlier record
    /// with the same name. Records without a name are dropped and `false` is
    /// returned.
    pub fn insert(&mut self, record: PackageRecord) -> bool {
        let Some(name) = record.name().map(str::to_string) else {
            return false;
        };
        self.packages.insert(name, record);
        true
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.packages.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl FromIterator<PackageRecord> for PackageIndex {
    fn from_iter<I: IntoIterator<Item = PackageRecord>>(iter: I) -> Self {
        let mut index = PackageIndex::new();
        for record in iter {
            index.insert(record);
        }
        index
    }
}

/// `source` depends on `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyEdge {
    pub source: String,
    pub target: String,
}

impl DependencyEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::package::{DependencyEdge, PackageIndex, PackageRecord};

    #[test]
    fn index_drops_records_without_package_field() {
        let mut index = PackageIndex::new();
        let orphan: PackageRecord = [("Version", "1.0")].into_iter().collect();
        assert!(!index.insert(orphan));
        assert!(index.is_empty());
    }

    #[test]
    fn index_overwrites_records_with_same_name() {
        let index: PackageIndex = [
            [("Package", "foo"), ("Version", "1.0")]
                .into_iter()
                .collect::<PackageRecord>(),
            [("Package", "foo"), ("Version", "2.0")]
                .into_iter()
                .collect::<PackageRecord>(),
        ]
        .into_iter()
        .collect();
        assert_eq!(index.len(), 1);
        let foo = index.get("foo").expect("foo record");
        assert_eq!(foo.get("Version"), Some("2.0"));
        assert_eq!(foo.depends(), "");
    }

    #[test]
    fn edges_order_by_source_then_target() {
        let mut edges = vec![
            DependencyEdge::new("testpkg", "libssl1.1"),
            DependencyEdge::new("testpkg", "libc6"),
            DependencyEdge::new("libssl1.1", "libc6"),
        ];
        edges.sort();
        assert_eq!(edges[0], DependencyEdge::new("libssl1.1", "libc6"));
        assert_eq!(edges[1], DependencyEdge::new("testpkg", "libc6"));
        assert_eq!(edges[2], DependencyEdge::new("testpkg", "libssl1.1"));
    }
}
