//! Input resolution: local image files and remote URLs.
//!
//! Remote inputs are fetched in full into a temporary file before any
//! decode attempt; decoding itself is delegated to the `image` crate.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use image::DynamicImage;
use tokio::io::AsyncWriteExt;

/// Default timeout for HTTP requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A classified input reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Path on the local filesystem.
    Local(PathBuf),
    /// `http://` or `https://` URL.
    Remote(String),
}

impl InputSource {
    /// Classify a raw infile argument as a local path or a remote URL.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            InputSource::Remote(raw.to_string())
        } else {
            InputSource::Local(PathBuf::from(raw))
        }
    }
}

/// Errors that can occur while obtaining and decoding an input image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Infile does not exist: {0}")]
    NotFound(PathBuf),

    #[error("Invalid image in path {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Fetch of {url} failed with status {status}")]
    FetchStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load and decode an input image.
///
/// Local paths must reference an existing regular file, checked before any
/// decode attempt. Remote URLs are downloaded to a temporary file first.
///
/// # Errors
///
/// Returns `LoadError::NotFound` for a missing local file,
/// `LoadError::Fetch`/`LoadError::FetchStatus` for download failures, or
/// `LoadError::Decode` when the bytes are not a supported image format.
pub async fn load(source: &InputSource) -> Result<DynamicImage, LoadError> {
    match source {
        InputSource::Local(path) => {
            if !path.is_file() {
                return Err(LoadError::NotFound(path.clone()));
            }
            decode(path)
        }
        InputSource::Remote(url) => {
            let path = fetch_to_temp(url).await?;
            decode(&path)
        }
    }
}

fn decode(path: &Path) -> Result<DynamicImage, LoadError> {
    image::open(path).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Download a remote resource into the process temp directory.
///
/// Streams the response body to disk without buffering the full resource
/// in memory. No retries; the request carries conservative timeouts.
///
/// # Returns
/// The path of the downloaded file.
pub async fn fetch_to_temp(url: &str) -> Result<PathBuf, LoadError> {
    let client = reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .build()?;

    log::info!("fetching {}", url);
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(LoadError::FetchStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let dest = temp_download_path(url);
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut file = tokio::fs::File::create(&dest).await?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        file.write_all(&chunk?).await?;
    }
    file.flush().await?;

    log::debug!("fetched {} to {}", url, dest.display());
    Ok(dest)
}

/// Destination path for a downloaded URL, named after its last path
/// segment with any query or fragment stripped.
fn temp_download_path(url: &str) -> PathBuf {
    let tail = url
        .rsplit('/')
        .next()
        .unwrap_or("")
        .split(['?', '#'])
        .next()
        .unwrap_or("");
    let name = if tail.is_empty() { "download" } else { tail };
    std::env::temp_dir().join("asciify").join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_http_url_is_remote() {
        assert_eq!(
            InputSource::parse("http://example.com/cat.png"),
            InputSource::Remote("http://example.com/cat.png".to_string())
        );
    }

    #[test]
    fn test_parse_https_url_is_remote() {
        assert_eq!(
            InputSource::parse("https://example.com/cat.png"),
            InputSource::Remote("https://example.com/cat.png".to_string())
        );
    }

    #[test]
    fn test_parse_path_is_local() {
        assert_eq!(
            InputSource::parse("pics/cat.png"),
            InputSource::Local(PathBuf::from("pics/cat.png"))
        );
    }

    #[test]
    fn test_parse_other_scheme_is_local() {
        // Only http(s) is treated as remote; everything else is a path.
        assert!(matches!(
            InputSource::parse("ftp://example.com/cat.png"),
            InputSource::Local(_)
        ));
    }

    #[test]
    fn test_temp_download_path_uses_url_file_name() {
        let path = temp_download_path("https://example.com/images/cat.png");
        assert!(path.ends_with("asciify/cat.png"));
    }

    #[test]
    fn test_temp_download_path_strips_query() {
        let path = temp_download_path("https://example.com/cat.png?size=large#frag");
        assert!(path.ends_with("asciify/cat.png"));
    }

    #[test]
    fn test_temp_download_path_fallback_name() {
        let path = temp_download_path("https://example.com/");
        assert!(path.ends_with("asciify/download"));
    }

    #[tokio::test]
    async fn test_load_missing_local_file() {
        let source = InputSource::Local(PathBuf::from("/definitely/not/here.png"));
        let result = load(&source).await;
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }
}
