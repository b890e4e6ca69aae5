//! Export the IP address prefixes of selected Azure Service Tags as plain-text prefix list files
//! for firewall URL table aliases (e.g. pfSense URL Table Aliases).
//!
//! Microsoft publishes the Service Tags as a dated JSON document
//! (`ServiceTags_Public_YYYYMMDD.json`) linked from a download page. An update locates the
//! current document, fetches it, and writes one file per configured service tag; large tags can
//! be aggregated into the minimal set of CIDR blocks per address family.
//!
//! ```no_run
//! // Update the default service tag files in the current directory
//! let report = azureservicetags::update()?;
//! # Ok::<(), azureservicetags::Error>(())
//! ```
//!
//! ```
//! // Aggregate prefixes without touching the network
//! let result = azureservicetags::aggregate(["10.0.0.0/16", "10.0.5.0/24", "10.1.0.0/16"])?;
//! assert_eq!(result.ipv4_strings(), vec!["10.0.0.0/15"]);
//! # Ok::<(), azureservicetags::Error>(())
//! ```

mod core;

/*-------------------------------------------------------------------------------------------------
  Primary Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::aggregate::{aggregate, AggregationResult};
pub use crate::core::client::Client;
pub use crate::core::config::{
    Config, ConfigBuilder, OutputPolicy, TagOutput, DEFAULT_DOWNLOAD_BASE_URL,
    DEFAULT_DOWNLOAD_PAGE_URL,
};
pub use crate::core::errors::{Error, Result};
pub use crate::core::locator::{locate, ServiceTagsSource};
pub use crate::core::prefix_type::PrefixType;
pub use crate::core::service_tags::{ServiceTag, ServiceTags};
pub use crate::core::updater::{update, UpdateReport, Updater, WrittenFile};

/*-------------------------------------------------------------------------------------------------
  Re-exports
-------------------------------------------------------------------------------------------------*/

pub use ipnetwork;
