use azureservicetags::{ServiceTagsSource, WrittenFile};

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

pub fn downloading(source: &ServiceTagsSource) {
    println!("{}", downloading_line(source));
}

/// Summary line for a file, printed as soon as it is written.
pub fn written(written_file: &WrittenFile) {
    println!("{}", written_line(written_file));
}

/*--------------------------------------------------------------------------------------
  Line Formats
--------------------------------------------------------------------------------------*/

fn downloading_line(source: &ServiceTagsSource) -> String {
    format!("Downloading: {}", source.url)
}

fn written_line(written_file: &WrittenFile) -> String {
    format!(
        "Wrote {} prefixes to {}",
        written_file.prefix_count,
        written_file.path.display()
    )
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_downloading_line() {
        let source = ServiceTagsSource {
            url: "https://download.microsoft.com/download/ServiceTags_Public_20240115.json"
                .to_string(),
            filename: "ServiceTags_Public_20240115.json".to_string(),
            published: None,
        };
        assert_eq!(
            downloading_line(&source),
            "Downloading: https://download.microsoft.com/download/ServiceTags_Public_20240115.json"
        );
    }

    #[test]
    fn test_written_line() {
        let written_file = WrittenFile {
            tag: "AzureCloud".to_string(),
            path: PathBuf::from("aliases/azure-cloud-ipv4.txt"),
            prefix_count: 42,
        };
        assert_eq!(
            written_line(&written_file),
            "Wrote 42 prefixes to aliases/azure-cloud-ipv4.txt"
        );
    }

    #[test]
    fn test_written_line_empty_list() {
        let written_file = WrittenFile {
            tag: "AzureBotService".to_string(),
            path: PathBuf::from("azure-bot-service-ipv6.txt"),
            prefix_count: 0,
        };
        assert_eq!(
            written_line(&written_file),
            "Wrote 0 prefixes to azure-bot-service-ipv6.txt"
        );
    }
}
