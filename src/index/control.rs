//! Lenient parser for Debian-style control files (`Packages` indices).
//!
//! Paragraphs are separated by blank lines. Inside a paragraph a `Key: Value`
//! line starts a field and a line led by a space or tab continues the most
//! recent one. Nothing here fails: lines that fit neither shape are skipped.

use crate::core::package::{PackageIndex, PackageRecord};

pub fn parse_control_file(text: &str) -> PackageIndex {
    let mut index = PackageIndex::new();
    let mut paragraph = Paragraph::default();

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.starts_with(' ') || line.starts_with('\t') {
            paragraph.continue_field(line.trim());
        } else if line.trim().is_empty() {
            paragraph.commit_into(&mut index);
        } else if let Some((key, value)) = line.split_once(':') {
            paragraph.start_field(key.trim(), value.trim());
        }
    }
    paragraph.commit_into(&mut index);

    index
}

#[derive(Default)]
struct Paragraph {
    record: PackageRecord,
    last_key: Option<String>,
}

impl Paragraph {
    fn start_field(&mut self, key: &str, value: &str) {
        self.record.insert(key, value);
        self.last_key = Some(key.to_string());
    }

    fn continue_field(&mut self, text: &str) {
        if let Some(key) = self.last_key.as_deref() {
            self.record.append(key, text);
        }
    }

    fn commit_into(&mut self, index: &mut PackageIndex) {
        let paragraph = std::mem::take(self);
        index.insert(paragraph.record);
    }
}

#[cfg(test)]
mod tests {
    use crate::index::control::parse_control_file;

    #[test]
    fn parses_paragraphs_into_named_records() {
        let text = r#"
Package: testpkg
Version: 1.0
Depends: libc6 (>= 2.2.5), libssl1.1 (>= 1.1.0)
Description: Test package

Package: libssl1.1
Version: 1.1.0
Depends: libc6 (>= 2.2.5)
Description: SSL library
"#;
        let index = parse_control_file(text);
        assert_eq!(index.len(), 2);
        let testpkg = index.get("testpkg").expect("testpkg record");
        assert_eq!(
            testpkg.depends(),
            "libc6 (>= 2.2.5), libssl1.1 (>= 1.1.0)"
        );
        assert_eq!(testpkg.get("Version"), Some("1.0"));
        let libssl = index.get("libssl1.1").expect("libssl1.1 record");
        assert_eq!(libssl.depends(), "libc6 (>= 2.2.5)");
    }

    #[test]
    fn continuation_lines_join_with_single_space() {
        let text = "Package: big\nDepends: liba,\n  libb (>= 2),\n\tlibc\nDescription: short\n";
        let index = parse_control_file(text);
        let big = index.get("big").expect("big record");
        assert_eq!(big.depends(), "liba, libb (>= 2), libc");
        assert_eq!(big.get("Description"), Some("short"));
    }

    #[test]
    fn records_without_package_field_are_dropped() {
        let text = "Version: 1.0\nDepends: libc6\n\nPackage: kept\n";
        let index = parse_control_file(text);
        assert_eq!(index.len(), 1);
        assert!(index.contains("kept"));
        for name in index.names() {
            assert_eq!(index.get(name).and_then(|r| r.name()), Some(name));
        }
    }

    #[test]
    fn malformed_lines_are_ignored() {
        let text = "  orphan continuation\nPackage: odd\nthis line has no colon\nVersion: 2\n";
        let index = parse_control_file(text);
        let odd = index.get("odd").expect("odd record");
        assert_eq!(odd.len(), 2);
        assert_eq!(odd.get("Version"), Some("2"));
    }

    #[test]
    fn later_duplicate_overwrites_earlier_record() {
        let text = "Package: dup\nVersion: 1\n\n\n\nPackage: dup\nVersion: 2\n";
        let index = parse_control_file(text);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("dup").and_then(|r| r.get("Version")), Some("2"));
    }

    #[test]
    fn values_keep_colons_after_the_first() {
        let text = "Package: zlib1g\r\nDepends: libc6 (>= 1:2.14)\r\nHomepage: https://zlib.net\r\n";
        let index = parse_control_file(text);
        let zlib = index.get("zlib1g").expect("zlib1g record");
        assert_eq!(zlib.depends(), "libc6 (>= 1:2.14)");
        assert_eq!(zlib.get("Homepage"), Some("https://zlib.net"));
    }

    #[test]
    fn blank_continuation_still_appends_separator() {
        let text = "Package: doc\nDescription: first\n \n .\n";
        let index = parse_control_file(text);
        let doc = index.get("doc").expect("doc record");
        assert_eq!(doc.get("Description"), Some("first  ."));
    }

    #[test]
    fn empty_input_yields_empty_index() {
        assert!(parse_control_file("").is_empty());
        assert!(parse_control_file("\n\n\n").is_empty());
    }
}
