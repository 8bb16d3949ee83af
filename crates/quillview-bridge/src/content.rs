//! Bundled editor assets served under the `quillview://` scheme.
//!
//! The editor page and anything it references resolve against one asset
//! root. Embedders can pin individual paths to in-memory documents, which
//! win over the filesystem.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

/// Served for a request that names a directory.
const INDEX_DOCUMENT: &str = "index.html";

const FALLBACK_MIME: &str = "application/octet-stream";

/// Content types for the file kinds an editor bundle ships.
const MIME_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("mjs", "application/javascript"),
    ("map", "application/json"),
    ("json", "application/json"),
    ("svg", "image/svg+xml"),
    ("png", "image/png"),
    ("ico", "image/x-icon"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("ttf", "font/ttf"),
    ("txt", "text/plain"),
];

/// A resolved asset: its content type and bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset<'a> {
    pub mime: Cow<'a, str>,
    pub data: Cow<'a, [u8]>,
}

impl Asset<'_> {
    /// The asset as text, for documents handed to the content view.
    pub fn into_text(self) -> Result<String, FromUtf8Error> {
        String::from_utf8(self.data.into_owned())
    }
}

struct Pinned {
    mime: String,
    data: Vec<u8>,
}

/// Resolves asset paths against a root directory plus pinned documents.
pub struct ContentProvider {
    root: PathBuf,
    pinned: HashMap<String, Pinned>,
}

impl ContentProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pinned: HashMap::new(),
        }
    }

    /// Serve `data` for `path` regardless of what is on disk.
    pub fn pin(&mut self, path: &str, mime: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.pinned.insert(
            normalize(path).to_string(),
            Pinned {
                mime: mime.into(),
                data: data.into(),
            },
        );
    }

    /// Look up an asset by request path.
    ///
    /// Query strings and fragments are ignored, and a directory request
    /// serves its `index.html`. Paths that leave the root, including via
    /// symlinks, resolve to nothing.
    pub fn resolve(&self, path: &str) -> Option<Asset<'_>> {
        let key = normalize(path);

        if let Some(pinned) = self.pinned.get(key) {
            return Some(Asset {
                mime: Cow::Borrowed(pinned.mime.as_str()),
                data: Cow::Borrowed(pinned.data.as_slice()),
            });
        }

        let file = self.locate(key)?;
        let data = std::fs::read(&file).ok()?;
        Some(Asset {
            mime: Cow::Borrowed(mime_for(&file)),
            data: Cow::Owned(data),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Canonical on-disk location of `key`, if it exists inside the root.
    fn locate(&self, key: &str) -> Option<PathBuf> {
        let root = std::fs::canonicalize(&self.root).ok()?;
        let candidate = std::fs::canonicalize(self.root.join(key)).ok()?;
        if !candidate.starts_with(&root) {
            return None;
        }
        if candidate.is_dir() {
            let index = candidate.join(INDEX_DOCUMENT);
            return index.is_file().then_some(index);
        }
        Some(candidate)
    }
}

/// The path part of a `quillview://` request URI.
pub fn request_path(uri: &str) -> &str {
    let Some(rest) = uri.strip_prefix("quillview://") else {
        return "";
    };
    rest.strip_prefix("localhost").unwrap_or(rest)
}

/// Drop the query, fragment and leading slashes; an empty path is the root.
fn normalize(path: &str) -> &str {
    let end = path.find(&['?', '#'][..]).unwrap_or(path.len());
    match path[..end].trim_start_matches('/') {
        "" => INDEX_DOCUMENT,
        trimmed => trimmed,
    }
}

fn mime_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return FALLBACK_MIME;
    };
    MIME_TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map_or(FALLBACK_MIME, |&(_, mime)| mime)
}
