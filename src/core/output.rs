use crate::core::errors::{Error, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Prefix List Files
-------------------------------------------------------------------------------------------------*/

/// Render prefixes one per line with `\n` line endings and a single trailing newline. An empty
/// list renders as a lone `\n`.
pub fn render<S: AsRef<str>>(prefixes: &[S]) -> String {
    let mut contents = prefixes
        .iter()
        .map(|prefix| prefix.as_ref())
        .collect::<Vec<&str>>()
        .join("\n");
    contents.push('\n');
    contents
}

/// Write a prefix list file, creating missing parent directories.
pub fn write_prefixes<S: AsRef<str>>(path: &Path, prefixes: &[S]) -> Result<()> {
    let to_write_error = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }

    fs::write(path, render(prefixes))
        .map_err(to_write_error)
        .inspect(|_| info!("Wrote {} prefixes to: {:?}", prefixes.len(), path))
        .inspect_err(|error| debug!("{}", error))
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(render(&["40.0.0.0/24"]), "40.0.0.0/24\n");
        assert_eq!(
            render(&["10.0.0.0/8", "2001:db8::/32"]),
            "10.0.0.0/8\n2001:db8::/32\n"
        );
        assert_eq!(render::<&str>(&[]), "\n");
    }

    #[test]
    fn test_write_prefixes_creates_parent_directories() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("aliases").join("azure-bot-service.txt");

        write_prefixes(&path, &["40.0.0.0/24".to_string()]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "40.0.0.0/24\n");
    }

    #[test]
    fn test_write_prefixes_error() {
        let directory = tempfile::tempdir().unwrap();
        let blocker = directory.path().join("not-a-directory");
        fs::write(&blocker, "").unwrap();

        let path = blocker.join("azure-cloud-ipv4.txt");
        match write_prefixes(&path, &["10.0.0.0/8"]) {
            Err(Error::Write { path: failed_path, .. }) => assert_eq!(failed_path, path),
            other => panic!("Expected Write error: {other:?}"),
        }
    }
}
