//! Output-location descriptors.
//!
//! The host hands the completion hook a reference to its resolved build
//! output root. Depending on the host this arrives either as a `file://`
//! URL or as an already-resolved absolute path; both are carried by
//! [`OutputLocation`]. The descriptor is never free-form user input - it
//! comes exclusively from the host's own output-directory resolution.
//!
//! Conversion to a filesystem path is total: it yields `None` instead of
//! failing, so downstream validation treats "could not resolve" uniformly
//! with "directory does not exist".

use std::path::PathBuf;

use url::Url;

/// A host-supplied reference to the build output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLocation {
    /// A `file://` URL, as lifecycle hooks commonly report output roots.
    Url(String),
    /// An already-resolved absolute filesystem path.
    Path(PathBuf),
}

impl OutputLocation {
    /// Wrap a location URL string.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        OutputLocation::Url(url.into())
    }

    /// Wrap a resolved directory path.
    #[must_use]
    pub fn from_dir(path: impl Into<PathBuf>) -> Self {
        OutputLocation::Path(path.into())
    }

    /// Resolve this location to a directory path.
    ///
    /// Total conversion: returns `None` when the URL does not parse, is not
    /// a `file://` URL, or the path is empty. Never panics and never
    /// returns an error.
    #[must_use]
    pub fn to_directory_path(&self) -> Option<PathBuf> {
        match self {
            OutputLocation::Path(path) => {
                if path.as_os_str().is_empty() {
                    None
                } else {
                    Some(path.clone())
                }
            }
            OutputLocation::Url(raw) => {
                let url = Url::parse(raw).ok()?;
                url.to_file_path().ok()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn resolves_plain_directory_paths() {
        let location = OutputLocation::from_dir("/site/dist");
        assert_eq!(
            location.to_directory_path().as_deref(),
            Some(Path::new("/site/dist"))
        );
    }

    #[test]
    fn resolves_file_urls() {
        let location = OutputLocation::from_url("file:///site/dist");
        assert_eq!(
            location.to_directory_path().as_deref(),
            Some(Path::new("/site/dist"))
        );
    }

    #[test]
    fn decodes_percent_encoded_file_urls() {
        let location = OutputLocation::from_url("file:///site/my%20dist");
        assert_eq!(
            location.to_directory_path().as_deref(),
            Some(Path::new("/site/my dist"))
        );
    }

    #[test]
    fn empty_path_is_unresolvable() {
        let location = OutputLocation::from_dir("");
        assert_eq!(location.to_directory_path(), None);
    }

    #[test]
    fn non_file_scheme_is_unresolvable() {
        let location = OutputLocation::from_url("https://example.com/dist");
        assert_eq!(location.to_directory_path(), None);
    }

    #[test]
    fn unparseable_url_is_unresolvable() {
        let location = OutputLocation::from_url("dist");
        assert_eq!(location.to_directory_path(), None);
    }
}
