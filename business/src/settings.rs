//! QR code settings and the value types they are built from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AnalysisResult;

/// Standard QR error-correction tiers, trading payload capacity for damage tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ErrorCorrectionLevel {
    /// Recovers about 7% of damaged modules.
    L,
    /// Recovers about 15%.
    #[default]
    M,
    /// Recovers about 25%.
    Q,
    /// Recovers about 30%.
    H,
}

impl ErrorCorrectionLevel {
    pub const ALL: [Self; 4] = [Self::L, Self::M, Self::Q, Self::H];

    /// Human readable name shown in pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::L => "Low",
            Self::M => "Medium",
            Self::Q => "Quartile",
            Self::H => "High",
        }
    }

    pub fn to_ec_level(self) -> qrcode::EcLevel {
        match self {
            Self::L => qrcode::EcLevel::L,
            Self::M => qrcode::EcLevel::M,
            Self::Q => qrcode::EcLevel::Q,
            Self::H => qrcode::EcLevel::H,
        }
    }
}

impl fmt::Display for ErrorCorrectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        f.write_str(letter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown error-correction level '{0}', expected one of L, M, Q, H")]
pub struct ParseLevelError(String);

impl FromStr for ErrorCorrectionLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LOW" => Ok(Self::L),
            "M" | "MEDIUM" => Ok(Self::M),
            "Q" | "QUARTILE" => Ok(Self::Q),
            "H" | "HIGH" => Ok(Self::H),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

/// Parses `#RRGGBB` or `#RGB` (case-insensitive) into RGB bytes.
pub fn parse_hex_color(value: &str) -> Option<[u8; 3]> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ]),
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, digit) in rgb.iter_mut().zip(hex.chars()) {
                let v = digit.to_digit(16)? as u8;
                *slot = v * 17;
            }
            Some(rgb)
        }
        _ => None,
    }
}

pub fn is_hex_color(value: &str) -> bool {
    parse_hex_color(value).is_some()
}

/// Formats RGB bytes as uppercase `#RRGGBB`.
pub fn format_hex_color(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

/// Widest quiet zone accepted anywhere, in modules.
pub const MAX_MARGIN: u32 = 20;

/// Everything needed to render one styled QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrSettings {
    /// Data encoded in the symbol.
    pub url: String,
    pub label: String,
    /// Dark module color.
    pub primary_color: String,
    /// Background and quiet-zone color.
    pub secondary_color: String,
    pub description: String,
    pub error_correction_level: ErrorCorrectionLevel,
    /// Quiet zone width in modules.
    pub margin: u32,
}

impl Default for QrSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            label: "My QR code".to_owned(),
            primary_color: "#1C2C5B".to_owned(),
            secondary_color: "#FFFFFF".to_owned(),
            description: "Enter text or a URL to generate an AI-enhanced QR code.".to_owned(),
            error_correction_level: ErrorCorrectionLevel::M,
            margin: 4,
        }
    }
}

impl QrSettings {
    /// Overwrites the analyzer-sourced fields and the encoded data.
    ///
    /// `error_correction_level` and `margin` are left alone.
    pub fn apply_analysis(&mut self, url: impl Into<String>, analysis: AnalysisResult) {
        let AnalysisResult {
            label,
            primary_color,
            secondary_color,
            description,
        } = analysis;

        self.url = url.into();
        self.label = label;
        self.primary_color = primary_color;
        self.secondary_color = secondary_color;
        self.description = description;
    }

    pub fn primary_rgb(&self) -> Option<[u8; 3]> {
        parse_hex_color(&self.primary_color)
    }

    pub fn secondary_rgb(&self) -> Option<[u8; 3]> {
        parse_hex_color(&self.secondary_color)
    }
}
