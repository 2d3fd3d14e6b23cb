use anyhow::{Context, Result};
use tracing::debug;

/// Fetches the body at `url` with a blocking HTTP GET.
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let resp = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(resp.bytes()?.to_vec())
}

/// Loads trip data from a local file path or fetches it over HTTP.
#[tracing::instrument]
pub fn read_source(source: &str) -> Result<Vec<u8>> {
    let bytes = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_bytes(source).with_context(|| format!("failed to fetch '{source}'"))?
    } else {
        std::fs::read(source).with_context(|| format!("failed to read '{source}'"))?
    };
    debug!(bytes = bytes.len(), "Trip data received");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Trip ID\n").unwrap();

        let bytes = read_source(file.path().to_str().unwrap()).unwrap();
        assert_eq!(bytes, b"Trip ID\n");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read_source("/nonexistent/Trips.csv").is_err());
    }
}
