//! Logical paths, as received from the outside world.

use std::convert::Infallible;
use std::str::FromStr;

/// Suffix of the content sub-resource, left behind when a locator is used as a path
const CONTENT_SUFFIX: &str = ":/content";
const SEPARATOR: char = '/';

fn clean(raw: &str) -> String {
    raw.replace(CONTENT_SUFFIX, "")
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// A path without any leading, trailing or empty segment
///
/// ```
/// use sharepoint::CanonicalPath;
///
/// let path = CanonicalPath::normalize("/reports//2024/:/content");
/// assert_eq!(path.as_str(), "reports/2024");
/// assert_eq!(path.segments().collect::<Vec<_>>(), vec!["reports", "2024"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    /// Cleans a raw path. This never fails, an empty input gives an empty path.
    pub fn normalize(raw: &str) -> Self {
        // removing a suffix or a separator can reveal a new one
        let mut current = clean(raw);
        loop {
            let next = clean(&current);
            if next == current {
                return Self(current);
            }
            current = next;
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR).filter(|segment| !segment.is_empty())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CanonicalPath {
    fn from(value: &str) -> Self {
        Self::normalize(value)
    }
}

impl FromStr for CanonicalPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

/// Splits a `folder/.../filename` path on its last separator.
///
/// The folder part is normalized, the filename is kept as is.
///
/// ```
/// use sharepoint::path::split_file_path;
///
/// let (folder, filename) = split_file_path("a//b/report.pdf");
/// assert_eq!(folder.as_str(), "a/b");
/// assert_eq!(filename, "report.pdf");
/// ```
pub fn split_file_path(raw: &str) -> (CanonicalPath, String) {
    match raw.rsplit_once(SEPARATOR) {
        Some((folder, filename)) => (CanonicalPath::normalize(folder), filename.to_string()),
        None => (CanonicalPath::default(), raw.to_string()),
    }
}
