//! Clipboard image output for the QR Studio UI and CLI.
//!
//! [`ClipboardProvider`] is the seam: [`SystemClipboard`] talks to the OS through
//! `arboard`, [`MemoryClipboard`] keeps the last image in memory for tests.
//!
//! # Platform notes
//!
//! - **Windows**: Win32 clipboard, `CF_DIBV5`
//! - **macOS**: `NSPasteboard`
//! - **Linux**: X11 selections or wl-clipboard. The process that set the image
//!   owns the selection, so [`SystemClipboard`] keeps its handle alive.

use std::sync::Mutex;

use log::{debug, info};

/// An uncompressed RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardImage {
    pub width: usize,
    pub height: usize,
    /// Row-major RGBA bytes, `width * height * 4` long.
    pub bytes: Vec<u8>,
}

impl ClipboardImage {
    pub fn from_rgba(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self, ClipboardError> {
        if width == 0 || height == 0 || bytes.len() != width * height * 4 {
            return Err(ClipboardError::ImageError(format!(
                "{} bytes do not make a {width}x{height} RGBA image",
                bytes.len()
            )));
        }
        Ok(Self {
            width,
            height,
            bytes,
        })
    }

    /// Decodes PNG (or any format `image` reads) into RGBA.
    pub fn decode(encoded: &[u8]) -> Result<Self, ClipboardError> {
        let rgba = image::load_from_memory(encoded)
            .map_err(|e| ClipboardError::ImageError(format!("Failed to decode image: {e}")))?
            .to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(width as usize, height as usize, rgba.into_raw())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard access error: {0}")]
    AccessError(String),
    #[error("Image processing error: {0}")]
    ImageError(String),
}

/// Destination for copied images.
pub trait ClipboardProvider {
    fn set_image(&self, image: &ClipboardImage) -> Result<(), ClipboardError>;

    /// Decodes `png` and places the pixels on the clipboard.
    fn set_png(&self, png: &[u8]) -> Result<(), ClipboardError> {
        self.set_image(&ClipboardImage::decode(png)?)
    }
}

/// The OS clipboard. The `arboard` handle is opened on first use and kept.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_image(&self, image: &ClipboardImage) -> Result<(), ClipboardError> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|e| ClipboardError::AccessError(e.to_string()))?;

        let clipboard = match guard.take() {
            Some(clipboard) => clipboard,
            None => {
                debug!("Opening system clipboard");
                arboard::Clipboard::new().map_err(|e| ClipboardError::AccessError(e.to_string()))?
            }
        };
        let clipboard = guard.insert(clipboard);

        clipboard
            .set_image(arboard::ImageData {
                width: image.width,
                height: image.height,
                bytes: image.bytes.as_slice().into(),
            })
            .map_err(|e| ClipboardError::AccessError(e.to_string()))?;

        info!("Copied {}x{} image to clipboard", image.width, image.height);
        Ok(())
    }
}

/// Keeps the last copied image in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    image: Mutex<Option<ClipboardImage>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently copied image.
    pub fn image(&self) -> Option<ClipboardImage> {
        self.image.lock().ok().and_then(|guard| guard.clone())
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn set_image(&self, image: &ClipboardImage) -> Result<(), ClipboardError> {
        let mut guard = self
            .image
            .lock()
            .map_err(|e| ClipboardError::AccessError(e.to_string()))?;
        *guard = Some(image.clone());
        Ok(())
    }
}
