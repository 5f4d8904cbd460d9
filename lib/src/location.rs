//! Locators of the drive items, built with the [path based addressing](https://learn.microsoft.com/en-us/graph/onedrive-addressing-driveitems) of the Graph API.

use crate::CanonicalPath;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that would end the path part of the url
const SEGMENT: &AsciiSet = &CONTROLS.add(b'#').add(b'%').add(b'?');

fn encode(segment: &str) -> impl std::fmt::Display + '_ {
    utf8_percent_encode(segment, SEGMENT)
}

/// A folder of the drive, identified by its path
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteFolder {
    url: String,
    root: bool,
}

impl RemoteFolder {
    pub(crate) fn root(base_url: &str, site_id: &str) -> Self {
        Self {
            url: format!(
                "{}/sites/{}/drive/root:",
                base_url.trim_end_matches('/'),
                site_id
            ),
            root: true,
        }
    }

    pub fn is_root(&self) -> bool {
        self.root
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The folder named `name` inside this one
    pub fn child(&self, name: &str) -> Self {
        Self {
            url: format!("{}/{}", self.url, encode(name)),
            root: false,
        }
    }

    /// The folder at `path`, relative to this one
    pub fn join(&self, path: &CanonicalPath) -> Self {
        path.segments()
            .fold(self.clone(), |folder, segment| folder.child(segment))
    }

    /// The file named `name` inside this folder
    pub fn file(&self, name: &str) -> RemoteFile {
        RemoteFile {
            url: format!("{}/{}", self.url, encode(name)),
        }
    }

    /// The collection in which new folders are created
    pub fn children_url(&self) -> String {
        if self.root {
            format!("{}/children", self.url.trim_end_matches(':'))
        } else {
            format!("{}:/children", self.url)
        }
    }
}

/// A file of the drive, identified by its path
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteFile {
    url: String,
}

impl RemoteFile {
    /// The locator of the file metadata
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The locator of the file content
    pub fn content_url(&self) -> String {
        format!("{}:/content", self.url)
    }
}
