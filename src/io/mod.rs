pub mod input;
pub mod output;
pub mod record;
pub mod writers;

pub use input::{clean_url, extract_domain, normalize, parse_listings, read_listings, RawListing};
pub use output::{create_writer, LeadReport, OutputFormat, OutputWriter};
pub use record::{to_record, LeadRecord};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, content)?;
    Ok(())
}

/// Create the directory a file will be written into
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            fs::create_dir_all(dir)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
