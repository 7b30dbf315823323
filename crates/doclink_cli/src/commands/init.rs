//! Init command implementation

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use doclink_core::DocLinkSettings;
use miette::{IntoDiagnostic, Result};
use tracing::info;

pub fn run_init(force: bool) -> Result<()> {
    let config_path = Path::new(DocLinkSettings::CONFIG_FILES[0]);
    let contents = default_settings()?;

    if force {
        remove_existing(config_path)?;
    }

    match create_new(config_path) {
        Ok(mut file) => {
            file.write_all(contents.as_bytes()).into_diagnostic()?;
            info!("Created {}", config_path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(miette::miette!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        )),
        Err(e) => Err(e).into_diagnostic(),
    }
}

fn default_settings() -> Result<String> {
    let json = DocLinkSettings::default().to_json().into_diagnostic()?;
    Ok(format!(
        "// doclink settings. Each value is a comma-separated list.\n{}\n",
        json
    ))
}

/// Opens `path` for writing, failing if it exists. Symlinks are not followed.
fn create_new(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.custom_flags(libc::O_NOFOLLOW);
    }

    options.open(path)
}

fn remove_existing(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).into_diagnostic(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_parse_back() {
        let contents = default_settings().unwrap();
        assert!(contents.starts_with("//"));
        assert_eq!(
            DocLinkSettings::from_json(&contents).unwrap(),
            DocLinkSettings::default()
        );
    }
}
