// SPDX-License-Identifier: MPL-2.0
//! Stylesheet files.
//!
//! Each theme mode has one stylesheet under `assets/styles/`. The file is
//! read fully into memory and kept verbatim; `--name: #hex;` custom-property
//! declarations inside it override the built-in palette for that mode. A
//! missing file degrades to an empty stylesheet and anything unparseable is
//! skipped silently, so a broken asset can never take the app down.

use iced::Color;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    /// Verbatim file contents; empty when the file is missing.
    pub source: String,
    overrides: BTreeMap<String, Color>,
}

impl Stylesheet {
    pub fn load(path: &Path) -> Self {
        let source = std::fs::read_to_string(path).unwrap_or_default();
        Self::parse(source)
    }

    pub fn parse(source: String) -> Self {
        let overrides = custom_properties(&source);
        Self { source, overrides }
    }

    /// Color override for a custom property, if the stylesheet declares one.
    pub fn color(&self, name: &str) -> Option<Color> {
        self.overrides.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

/// Extracts `--name: #hex;` declarations. Tolerant by design: declarations
/// that do not parse are skipped, everything else in the file is ignored.
fn custom_properties(source: &str) -> BTreeMap<String, Color> {
    let mut map = BTreeMap::new();
    for line in source.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix("--") else {
            continue;
        };
        let Some((name, value)) = rest.split_once(':') else {
            continue;
        };
        let value = value.trim().trim_end_matches(';').trim();
        if let Some(color) = parse_hex(value) {
            map.insert(name.trim().to_string(), color);
        }
    }
    map
}

/// Parses `#rgb`, `#rrggbb`, or `#rrggbbaa`.
fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let r = channel(&hex[0..1])?;
            let g = channel(&hex[1..2])?;
            let b = channel(&hex[2..3])?;
            Some(Color::from_rgb8(r * 17, g * 17, b * 17))
        }
        6 => Some(Color::from_rgb8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Some(Color::from_rgba8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])? as f32 / 255.0,
        )),
        _ => None,
    }
}
