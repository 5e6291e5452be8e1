use std::path::{Path, PathBuf};

use log::info;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// File name offered when downloading the code labelled `label`.
///
/// `"Official Site"` becomes `qr-code-official-site.png`.
pub fn download_file_name(label: &str) -> String {
    let slug = slugify(label);
    if slug.is_empty() {
        "qr-code.png".to_owned()
    } else {
        format!("qr-code-{slug}.png")
    }
}

/// Lowercases `label`, turns whitespace runs into `-` and drops anything
/// that is not alphanumeric, `-` or `_`.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut in_space = false;
    for c in label.trim().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
            continue;
        }
        in_space = false;
        if c.is_alphanumeric() || c == '-' || c == '_' {
            slug.extend(c.to_lowercase());
        }
    }
    slug
}

pub fn write_png(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    std::fs::write(path, bytes).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved QR code to {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
