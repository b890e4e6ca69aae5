use std::path::PathBuf;
use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Errors that abort an update run. A service tag missing from the published document is not an
/// error; it is logged as a warning and skipped.
#[derive(Debug, Error)]
pub enum Error {
    /// The download page no longer contains a `ServiceTags_Public_YYYYMMDD.json` filename.
    #[error("Service Tags JSON filename not found on download page: {url}")]
    NotFound { url: String },

    /// Transport failure or non-success HTTP status.
    #[error("Failed to fetch `{url}`: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The Service Tags document is not valid JSON or lacks the expected structure.
    #[error("Failed to parse Service Tags JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// An address prefix selected for aggregation is not a valid CIDR block.
    #[error("Malformed address prefix `{prefix}`: {source}")]
    MalformedAddress {
        prefix: String,
        #[source]
        source: ipnetwork::IpNetworkError,
    },

    #[error("Failed to write `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_address_names_prefix() {
        let source = "10.0.0.0/33"
            .parse::<ipnetwork::Ipv4Network>()
            .unwrap_err();
        let error = Error::MalformedAddress {
            prefix: "10.0.0.0/33".to_string(),
            source,
        };
        log_error(&error);
        assert!(error.to_string().contains("`10.0.0.0/33`"));
    }

    #[test]
    fn test_write_error_names_path() {
        let error = Error::Write {
            path: PathBuf::from("out/azure-cloud-ipv4.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("out/azure-cloud-ipv4.txt"));
    }
}
