use crate::core::config::Config;
use crate::core::errors::{Error, Result};
use crate::core::locator::{self, ServiceTagsSource};
use crate::core::service_tags::ServiceTags;
use log::{debug, info};

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A blocking client that locates and retrieves the current Service Tags JSON document. Every
/// request is made once; failures are returned to the caller without retrying.
///
/// ```no_run
/// let config = azureservicetags::Config::default();
/// let client = azureservicetags::Client::new(&config);
///
/// let source = client.locate()?;
/// let service_tags = client.get_service_tags(&source)?;
/// println!("{} service tags", service_tags.tags().len());
/// # Ok::<(), azureservicetags::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    download_page_url: String,
    download_base_url: String,
}

impl Client {
    pub fn new(config: &Config) -> Self {
        Self {
            download_page_url: config.download_page_url().to_string(),
            download_base_url: config.download_base_url().to_string(),
        }
    }

    /*-------------------------------------------------------------------------
      Locate Service Tags
    -------------------------------------------------------------------------*/

    /// Fetch the download page and resolve the URL of the current Service Tags JSON document.
    pub fn locate(&self) -> Result<ServiceTagsSource> {
        info!("Get Service Tags download page: GET {}", self.download_page_url);
        let page = get_text(&self.download_page_url)?;
        locator::locate(&page, &self.download_page_url, &self.download_base_url)
    }

    /*-------------------------------------------------------------------------
      Get Service Tags
    -------------------------------------------------------------------------*/

    /// Fetch and parse the Service Tags JSON document.
    pub fn get_service_tags(&self, source: &ServiceTagsSource) -> Result<Box<ServiceTags>> {
        info!("Get Service Tags JSON: GET {}", source.url);
        let json = get_text(&source.url)?;
        info!("Received {} bytes of Service Tags JSON", json.len());
        ServiceTags::from_json(&json)
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// GET a URL and return the response body. Non-success status codes are errors.
fn get_text(url: &str) -> Result<String> {
    reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })
        .inspect_err(|error| debug!("{}", error))
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
