use crate::core::datetime;
use crate::core::errors::{Error, Result};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

lazy_static! {
    static ref SERVICE_TAGS_FILENAME: Regex =
        Regex::new(r"ServiceTags_Public_(\d{8})\.json").expect("Invalid Regex");
}

/*-------------------------------------------------------------------------------------------------
  Service Tags Source
-------------------------------------------------------------------------------------------------*/

/// Location of the currently published Service Tags JSON document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceTagsSource {
    /// Fully-qualified download URL (base download URL + filename).
    pub url: String,

    /// Matched filename, e.g. `ServiceTags_Public_20240115.json`.
    pub filename: String,

    /// Publication date encoded in the filename, when it is a valid calendar date.
    pub published: Option<NaiveDate>,
}

/*-------------------------------------------------------------------------------------------------
  Locate
-------------------------------------------------------------------------------------------------*/

/// Find the first `ServiceTags_Public_YYYYMMDD.json` filename in the download page content and
/// join it to the base download URL.
///
/// ```
/// let page = r#"<a href="https://example.com/ServiceTags_Public_20240115.json">Download</a>"#;
/// let source = azureservicetags::locate(page, "https://example.com/", "https://example.com/")?;
///
/// assert_eq!(source.url, "https://example.com/ServiceTags_Public_20240115.json");
/// # Ok::<(), azureservicetags::Error>(())
/// ```
///
/// `page_url` is only used to report [Error::NotFound] when the page has no matching filename.
pub fn locate(page: &str, page_url: &str, download_base_url: &str) -> Result<ServiceTagsSource> {
    let captures = SERVICE_TAGS_FILENAME
        .captures(page)
        .ok_or_else(|| Error::NotFound {
            url: page_url.to_string(),
        })?;

    let filename = captures[0].to_string();
    let published = datetime::parse_publication_date(&captures[1]);
    debug!("Matched Service Tags filename: {}", filename);

    match published {
        Some(date) => info!("Service Tags published {}", date),
        None => info!("Service Tags filename has no valid publication date: {}", filename),
    }

    Ok(ServiceTagsSource {
        url: format!("{download_base_url}{filename}"),
        filename,
        published,
    })
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
