use std::path::{Path, PathBuf};

/*-------------------------------------------------------------------------------------------------
  Defaults
-------------------------------------------------------------------------------------------------*/

pub const DEFAULT_DOWNLOAD_PAGE_URL: &str =
    "https://www.microsoft.com/en-us/download/details.aspx?id=56519";

pub const DEFAULT_DOWNLOAD_BASE_URL: &str =
    "https://download.microsoft.com/download/7/1/D/71D86715-5596-4529-9B13-DA13A5DE5B63/";

/*-------------------------------------------------------------------------------------------------
  Output Policy
-------------------------------------------------------------------------------------------------*/

/// How the address prefixes of a service tag are written. File paths are relative to the
/// project root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OutputPolicy {
    /// Write the raw prefixes, sorted as strings, to a single file.
    Sorted { file: PathBuf },

    /// Aggregate the prefixes and write each address family to its own file.
    Aggregated {
        ipv4_file: PathBuf,
        ipv6_file: PathBuf,
    },
}

impl OutputPolicy {
    pub fn sorted<P: AsRef<Path>>(file: P) -> Self {
        OutputPolicy::Sorted {
            file: file.as_ref().to_path_buf(),
        }
    }

    pub fn aggregated<P: AsRef<Path>, Q: AsRef<Path>>(ipv4_file: P, ipv6_file: Q) -> Self {
        OutputPolicy::Aggregated {
            ipv4_file: ipv4_file.as_ref().to_path_buf(),
            ipv6_file: ipv6_file.as_ref().to_path_buf(),
        }
    }
}

/// A configured service tag and its output policy.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TagOutput {
    pub name: String,
    pub policy: OutputPolicy,
}

/*-------------------------------------------------------------------------------------------------
  Config Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Config] struct. [ConfigBuilder::default] starts from the published
/// Microsoft download locations, the current directory as project root, and the default service
/// tags:
///
/// | Service Tag       | Output                                          |
/// |-------------------|-------------------------------------------------|
/// | `AzureBotService` | `azure-bot-service.txt` (sorted)                |
/// | `AzureConnectors` | `azure-connectors.txt` (sorted)                 |
/// | `AzureCloud`      | `azure-cloud-ipv4.txt`, `azure-cloud-ipv6.txt`  |
///
/// ```
/// use azureservicetags::{ConfigBuilder, OutputPolicy};
///
/// let config = ConfigBuilder::default()
///     .project_root("/srv/firewall")
///     .clear_tags()
///     .tag("AzureFrontDoor.Backend", OutputPolicy::sorted("azure-front-door.txt"))
///     .build();
///
/// assert_eq!(config.tags().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    download_page_url: String,
    download_base_url: String,
    project_root: PathBuf,
    tags: Vec<TagOutput>,
}

/*--------------------------------------------------------------------------------------
  Config Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            download_page_url: DEFAULT_DOWNLOAD_PAGE_URL.to_string(),
            download_base_url: DEFAULT_DOWNLOAD_BASE_URL.to_string(),
            project_root: PathBuf::from("."),
            tags: vec![
                TagOutput {
                    name: "AzureBotService".to_string(),
                    policy: OutputPolicy::sorted("azure-bot-service.txt"),
                },
                TagOutput {
                    name: "AzureConnectors".to_string(),
                    policy: OutputPolicy::sorted("azure-connectors.txt"),
                },
                TagOutput {
                    name: "AzureCloud".to_string(),
                    policy: OutputPolicy::aggregated(
                        "azure-cloud-ipv4.txt",
                        "azure-cloud-ipv6.txt",
                    ),
                },
            ],
        }
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the download page scanned for the current Service Tags filename.
    pub fn download_page_url(&mut self, url: &str) -> &mut Self {
        self.download_page_url = url.to_string();
        self
    }

    /// Set the base URL the matched filename is appended to.
    pub fn download_base_url(&mut self, url: &str) -> &mut Self {
        self.download_base_url = url.to_string();
        self
    }

    /// Set the directory output file paths are resolved against.
    pub fn project_root<P: AsRef<Path>>(&mut self, project_root: P) -> &mut Self {
        self.project_root = project_root.as_ref().to_path_buf();
        self
    }

    /// Add a service tag. Tags are processed in the order they are added.
    pub fn tag(&mut self, name: &str, policy: OutputPolicy) -> &mut Self {
        self.tags.push(TagOutput {
            name: name.to_string(),
            policy,
        });
        self
    }

    /// Remove all configured service tags, including the defaults.
    pub fn clear_tags(&mut self) -> &mut Self {
        self.tags.clear();
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Config {
        Config {
            download_page_url: self.download_page_url.clone(),
            download_base_url: self.download_base_url.clone(),
            project_root: self.project_root.clone(),
            tags: self.tags.clone(),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Config
-------------------------------------------------------------------------------------------------*/

/// Run configuration, built once at startup and passed to [crate::Updater].
#[derive(Debug, Clone)]
pub struct Config {
    download_page_url: String,
    download_base_url: String,
    project_root: PathBuf,
    tags: Vec<TagOutput>,
}

impl Default for Config {
    fn default() -> Self {
        ConfigBuilder::default().build()
    }
}

impl Config {
    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn download_page_url(&self) -> &str {
        &self.download_page_url
    }

    pub fn download_base_url(&self) -> &str {
        &self.download_base_url
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn tags(&self) -> &[TagOutput] {
        &self.tags
    }

    /// Resolve an output file path against the project root.
    pub fn output_path<P: AsRef<Path>>(&self, file: P) -> PathBuf {
        self.project_root.join(file)
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
