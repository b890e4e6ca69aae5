use azureservicetags::{DEFAULT_DOWNLOAD_BASE_URL, DEFAULT_DOWNLOAD_PAGE_URL};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Update Azure Service Tag prefix list files for firewall URL table aliases.",
    long_about = None
)]
pub struct Args {
    /// Project root directory the prefix list files are written to
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Service Tags download page searched for the JSON filename
    #[arg(long, hide = true, default_value = DEFAULT_DOWNLOAD_PAGE_URL)]
    pub download_page_url: String,

    /// Base URL the JSON filename is joined to
    #[arg(long, hide = true, default_value = DEFAULT_DOWNLOAD_BASE_URL)]
    pub download_base_url: String,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
