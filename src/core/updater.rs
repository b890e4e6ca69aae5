use crate::core::aggregate::aggregate;
use crate::core::client::Client;
use crate::core::config::{Config, OutputPolicy, TagOutput};
use crate::core::errors::Result;
use crate::core::locator::ServiceTagsSource;
use crate::core::output;
use crate::core::service_tags::{ServiceTag, ServiceTags};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ that runs an update with the default configuration: the
/// published Microsoft download locations, the default service tags, and the current directory
/// as project root.
pub fn update() -> Result<UpdateReport> {
    Updater::new(Config::default()).run()
}

/*-------------------------------------------------------------------------------------------------
  Update Report
-------------------------------------------------------------------------------------------------*/

/// A prefix list file written during an update.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WrittenFile {
    /// Service tag the prefixes came from.
    pub tag: String,

    /// Path of the written file (project root joined with the configured file).
    pub path: PathBuf,

    /// Number of prefixes (lines) written.
    pub prefix_count: usize,
}

/// Outcome of processing the configured service tags.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UpdateReport {
    /// Files written, in configuration order.
    pub written: Vec<WrittenFile>,

    /// Configured service tags not present in the document.
    pub missing_tags: Vec<String>,
}

/*-------------------------------------------------------------------------------------------------
  Updater
-------------------------------------------------------------------------------------------------*/

/// Runs an update: locate the current Service Tags document, fetch it, and write the prefix list
/// files for every configured service tag.
///
/// ```no_run
/// let updater = azureservicetags::Updater::new(azureservicetags::Config::default());
/// let report = updater.run()?;
///
/// for file in &report.written {
///     println!("Wrote {} prefixes to {}", file.prefix_count, file.path.display());
/// }
/// # Ok::<(), azureservicetags::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Updater {
    config: Config,
    client: Client,
}

impl Updater {
    pub fn new(config: Config) -> Self {
        let client = Client::new(&config);
        Self { config, client }
    }

    /*-------------------------------------------------------------------------
      Run
    -------------------------------------------------------------------------*/

    /// Locate, fetch, and process the current Service Tags document.
    pub fn run(&self) -> Result<UpdateReport> {
        let source = self.locate()?;
        let service_tags = self.fetch(&source)?;
        self.process(&service_tags)
    }

    /// Resolve the download URL of the current Service Tags document.
    pub fn locate(&self) -> Result<ServiceTagsSource> {
        self.client.locate()
    }

    /// Fetch and parse the Service Tags document.
    pub fn fetch(&self, source: &ServiceTagsSource) -> Result<Box<ServiceTags>> {
        self.client.get_service_tags(source)
    }

    /*-------------------------------------------------------------------------
      Process
    -------------------------------------------------------------------------*/

    /// Write the prefix list files for every configured service tag, in configuration order.
    /// Tags missing from the document are skipped with a warning. The first error aborts the
    /// update; files written for earlier tags are left in place.
    pub fn process(&self, service_tags: &ServiceTags) -> Result<UpdateReport> {
        self.process_with(service_tags, |_| {})
    }

    /// Same as [Updater::process], calling `on_write` as soon as each file is written. Files
    /// written before an aborting error are still passed to `on_write`.
    pub fn process_with<F>(
        &self,
        service_tags: &ServiceTags,
        mut on_write: F,
    ) -> Result<UpdateReport>
    where
        F: FnMut(&WrittenFile),
    {
        let mut report = UpdateReport::default();

        for tag_output in self.config.tags() {
            match service_tags.get_tag(&tag_output.name) {
                Some(service_tag) => {
                    debug!(
                        "Processing service tag {} ({} address prefixes)",
                        service_tag.name,
                        service_tag.address_prefixes.len()
                    );
                    self.process_tag(tag_output, service_tag, &mut |written: WrittenFile| {
                        on_write(&written);
                        report.written.push(written);
                    })?;
                }
                None => {
                    warn!(
                        "Service tag not found in Service Tags JSON: {}; skipping",
                        tag_output.name
                    );
                    report.missing_tags.push(tag_output.name.clone());
                }
            }
        }

        info!(
            "Wrote {} files; {} service tags missing",
            report.written.len(),
            report.missing_tags.len()
        );

        Ok(report)
    }

    fn process_tag(
        &self,
        tag_output: &TagOutput,
        service_tag: &ServiceTag,
        on_write: &mut dyn FnMut(WrittenFile),
    ) -> Result<()> {
        match &tag_output.policy {
            OutputPolicy::Sorted { file } => {
                let mut prefixes = service_tag.address_prefixes.clone();
                prefixes.sort();

                on_write(self.write(&service_tag.name, file, &prefixes)?);
            }
            OutputPolicy::Aggregated {
                ipv4_file,
                ipv6_file,
            } => {
                let aggregated = aggregate(&service_tag.address_prefixes)?;
                info!(
                    "Aggregated {} {} prefixes into {} IPv4 and {} IPv6 blocks",
                    service_tag.address_prefixes.len(),
                    service_tag.name,
                    aggregated.ipv4.len(),
                    aggregated.ipv6.len()
                );

                on_write(self.write(&service_tag.name, ipv4_file, &aggregated.ipv4_strings())?);
                on_write(self.write(&service_tag.name, ipv6_file, &aggregated.ipv6_strings())?);
            }
        }

        Ok(())
    }

    fn write(&self, tag: &str, file: &Path, prefixes: &[String]) -> Result<WrittenFile> {
        let path = self.config.output_path(file);
        output::write_prefixes(&path, prefixes)?;

        Ok(WrittenFile {
            tag: tag.to_string(),
            path,
            prefix_count: prefixes.len(),
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ConfigBuilder;
    use crate::core::errors::Error;
    use crate::core::service_tags::tests::TEST_SERVICE_TAGS_JSON;
    use std::fs;
    use test_log::test;

    fn test_updater(project_root: &Path) -> Updater {
        Updater::new(ConfigBuilder::default().project_root(project_root).build())
    }

    fn read(path: PathBuf) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_process_default_tags() {
        let directory = tempfile::tempdir().unwrap();
        let updater = test_updater(directory.path());
        let service_tags = ServiceTags::from_json(TEST_SERVICE_TAGS_JSON).unwrap();

        let report = updater.process(&service_tags).unwrap();

        assert!(report.missing_tags.is_empty());
        assert_eq!(report.written.len(), 4);

        // Sorted as strings, no merging
        assert_eq!(
            read(directory.path().join("azure-bot-service.txt")),
            "2603:1000:4::20/123\n40.0.0.0/24\n40.0.0.0/25\n"
        );
        assert_eq!(
            read(directory.path().join("azure-connectors.txt")),
            "104.0.0.0/8\n13.0.0.0/8\n52.0.0.0/8\n"
        );

        // Aggregated per family
        assert_eq!(
            read(directory.path().join("azure-cloud-ipv4.txt")),
            "10.0.0.0/23\n10.0.4.0/22\n"
        );
        assert_eq!(
            read(directory.path().join("azure-cloud-ipv6.txt")),
            "2001:db8::/32\n"
        );

        let ipv4 = &report.written[2];
        assert_eq!(ipv4.tag, "AzureCloud");
        assert_eq!(ipv4.path, directory.path().join("azure-cloud-ipv4.txt"));
        assert_eq!(ipv4.prefix_count, 2);
    }

    #[test]
    fn test_process_aggregated_bot_service() {
        let directory = tempfile::tempdir().unwrap();
        let config = ConfigBuilder::default()
            .project_root(directory.path())
            .clear_tags()
            .tag(
                "AzureBotService",
                OutputPolicy::aggregated("azure-bot-service.txt", "azure-bot-service-ipv6.txt"),
            )
            .build();
        let json = r#"{"values": [{"name": "AzureBotService",
            "properties": {"addressPrefixes": ["40.0.0.0/24", "40.0.0.0/25"]}}]}"#;

        let report = Updater::new(config)
            .process(&ServiceTags::from_json(json).unwrap())
            .unwrap();

        assert_eq!(
            read(directory.path().join("azure-bot-service.txt")),
            "40.0.0.0/24\n"
        );
        assert_eq!(
            read(directory.path().join("azure-bot-service-ipv6.txt")),
            "\n"
        );
        assert_eq!(report.written[1].prefix_count, 0);
    }

    #[test]
    fn test_missing_tag_is_skipped() {
        let directory = tempfile::tempdir().unwrap();
        let config = ConfigBuilder::default()
            .project_root(directory.path())
            .tag("AzureFrontDoor.Backend", OutputPolicy::sorted("front-door.txt"))
            .build();
        let service_tags = ServiceTags::from_json(TEST_SERVICE_TAGS_JSON).unwrap();

        let report = Updater::new(config).process(&service_tags).unwrap();

        assert_eq!(report.missing_tags, ["AzureFrontDoor.Backend"]);
        assert_eq!(report.written.len(), 4); // Other tags still written
        assert!(!directory.path().join("front-door.txt").exists());
    }

    #[test]
    fn test_malformed_prefix_aborts() {
        let directory = tempfile::tempdir().unwrap();
        let json = r#"{"values": [
            {"name": "AzureBotService", "properties": {"addressPrefixes": ["40.0.0.0/24"]}},
            {"name": "AzureCloud", "properties": {"addressPrefixes": ["10.0.0.0/8", "10.0.0.0/40"]}}
        ]}"#;

        let result = test_updater(directory.path()).process(&ServiceTags::from_json(json).unwrap());

        match result {
            Err(Error::MalformedAddress { prefix, .. }) => assert_eq!(prefix, "10.0.0.0/40"),
            other => panic!("Expected MalformedAddress: {other:?}"),
        }
        // Earlier tags stay written
        assert!(directory.path().join("azure-bot-service.txt").exists());
        assert!(!directory.path().join("azure-cloud-ipv4.txt").exists());
    }

    #[test]
    fn test_process_with_reports_files_written_before_abort() {
        let directory = tempfile::tempdir().unwrap();
        let json = r#"{"values": [
            {"name": "AzureBotService", "properties": {"addressPrefixes": ["40.0.0.0/24"]}},
            {"name": "AzureCloud", "properties": {"addressPrefixes": ["10.0.0.0/40"]}}
        ]}"#;
        let mut written = Vec::new();

        let result = test_updater(directory.path()).process_with(
            &ServiceTags::from_json(json).unwrap(),
            |file| written.push(file.clone()),
        );

        assert!(matches!(result, Err(Error::MalformedAddress { .. })));
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].tag, "AzureBotService");
        assert_eq!(written[0].path, directory.path().join("azure-bot-service.txt"));
        assert_eq!(written[0].prefix_count, 1);
    }

    #[test]
    fn test_process_with_matches_report_order() {
        let directory = tempfile::tempdir().unwrap();
        let service_tags = ServiceTags::from_json(TEST_SERVICE_TAGS_JSON).unwrap();
        let mut written = Vec::new();

        let report = test_updater(directory.path())
            .process_with(&service_tags, |file| written.push(file.clone()))
            .unwrap();

        assert_eq!(written, report.written);
    }
}
