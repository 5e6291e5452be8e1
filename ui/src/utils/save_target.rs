//! Where downloads go: a native save dialog, or a fixed directory.

use std::path::PathBuf;

/// Picks the destination for a download.
pub trait SaveTarget {
    /// Returns the path to write `file_name` to, or `None` if the user cancelled.
    fn choose(&self, file_name: &str) -> Option<PathBuf>;
}

/// Asks the user with the system save dialog.
#[derive(Default)]
pub struct DialogSaveTarget;

impl SaveTarget for DialogSaveTarget {
    fn choose(&self, file_name: &str) -> Option<PathBuf> {
        use rfd::FileDialog;

        let path = FileDialog::new()
            .set_title("Save QR code")
            .set_file_name(file_name)
            .add_filter("PNG image", &["png"])
            .save_file()?;

        log::info!("User chose save path: {path:?}");
        Some(path)
    }
}

/// Writes straight into a directory without asking.
pub struct DirectorySaveTarget {
    dir: PathBuf,
}

impl DirectorySaveTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SaveTarget for DirectorySaveTarget {
    fn choose(&self, file_name: &str) -> Option<PathBuf> {
        Some(self.dir.join(file_name))
    }
}
