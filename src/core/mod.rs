/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod aggregate;
pub mod client;
pub mod config;
pub mod datetime;
pub mod errors;
pub mod json;
pub mod locator;
pub mod output;
pub mod prefix_type;
pub mod service_tags;
pub mod updater;
