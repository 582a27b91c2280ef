use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::core::error::{CacheWarmerError, Result};

/// Reads the newline-delimited URL list.
///
/// Lines are trimmed and blank lines are dropped. With a base URL every
/// remaining line is treated as a path fragment of that base.
#[derive(Debug, Default, Clone)]
pub struct Loader {
    base: Option<String>,
}

impl Loader {
    pub fn new(base: Option<String>) -> Self {
        Self { base }
    }

    /// Load URLs from any buffered reader.
    ///
    /// # Examples
    /// ```
    /// use cachewarmer::input::Loader;
    ///
    /// let loader = Loader::new(Some("http://x.com/".to_string()));
    /// let urls = loader.load("a\n/b\n\n".as_bytes()).unwrap();
    /// assert_eq!(urls, vec!["http://x.com/a", "http://x.com/b"]);
    /// ```
    pub fn load<R: BufRead>(&self, reader: R) -> Result<Vec<String>> {
        let mut urls = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let url = match self.base {
                Some(ref base) => join_base(base, line),
                None => line.to_string(),
            };
            urls.push(url);
        }

        Ok(urls)
    }

    /// Load URLs from a file on disk.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(CacheWarmerError::InvalidArgument(format!(
                "'{}' is a directory. Expected a file with one URL per line.",
                path.display()
            )));
        }

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CacheWarmerError::FileNotFound(path.display().to_string()),
            _ => CacheWarmerError::Io(e),
        })?;

        self.load(BufReader::new(file))
    }
}

/// Read URLs from `reader`, prefixing each with `base` when given.
pub fn load_urls<R: BufRead>(reader: R, base: Option<&str>) -> Result<Vec<String>> {
    Loader::new(base.map(str::to_string)).load(reader)
}

/// Read URLs from the file at `path`, prefixing each with `base` when given.
pub fn load_urls_from_path<P: AsRef<Path>>(path: P, base: Option<&str>) -> Result<Vec<String>> {
    Loader::new(base.map(str::to_string)).load_path(path)
}

/// Join a base URL and a path fragment with exactly one slash between them.
pub fn join_base(base: &str, fragment: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        fragment.trim_start_matches('/')
    )
}
