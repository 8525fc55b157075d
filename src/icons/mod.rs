// SPDX-License-Identifier: MPL-2.0
//! Icon loading, tinting, and the re-tint registry.
//!
//! Icons are vector assets under `assets/icons/<name>.svg`. They are
//! rasterized with resvg at a requested size and then flood-tinted: every
//! opaque pixel is replaced with a flat color while the alpha channel is kept
//! (source-in compositing). A missing or unparseable asset degrades to a
//! fully transparent raster of the requested size; nothing here is fatal.
//!
//! The store tracks every icon it has produced under a stable [`IconSlot`]
//! so a theme toggle can revisit all of them in one pass. Slots are ids, not
//! widget references, so the store is independent of widget lifetimes; the
//! view layer pulls cached [`image::Handle`]s out of the store each frame.

use crate::ui::menu::EntryId;
use iced::widget::image;
use iced::Color;
use resvg::usvg;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Stable identity of an icon-bearing spot in the UI.
///
/// Deduplication invariant: the registry holds at most one entry per slot;
/// re-registering a slot replaces its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IconSlot {
    /// The sidebar expand/collapse (hamburger) button.
    SidebarToggle,
    /// The light/dark theme toggle button.
    ThemeToggle,
    /// The main icon of a nav button.
    Nav(EntryId),
    /// The submenu arrow indicator attached to a submenu holder.
    Arrow(EntryId),
    /// An entry inside the collapsed-sidebar submenu popover.
    PopoverItem(EntryId),
}

#[derive(Clone)]
struct Registration {
    name: &'static str,
    dark_name: Option<&'static str>,
    size: u32,
    /// Current tinted raster; re-tinted in place by `update_icon_color`.
    raster: tiny_skia::Pixmap,
    handle: image::Handle,
}

/// Loads, tints, and caches icons. One instance, owned by the app and passed
/// down by reference to whatever needs icons.
pub struct IconStore {
    asset_dir: PathBuf,
    registry: BTreeMap<IconSlot, Registration>,
}

impl fmt::Debug for IconStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconStore")
            .field("asset_dir", &self.asset_dir)
            .field("registered", &self.registry.len())
            .finish()
    }
}

impl Default for IconStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IconStore {
    pub fn new() -> Self {
        Self::with_asset_dir(PathBuf::from("assets/icons"))
    }

    /// Store rooted at an explicit icon directory (tests use a tempdir).
    pub fn with_asset_dir(asset_dir: PathBuf) -> Self {
        Self {
            asset_dir,
            registry: BTreeMap::new(),
        }
    }

    /// Registers a slot and rasterizes its icon for the given mode. If the
    /// slot already exists its parameters are replaced, never duplicated.
    pub fn register(
        &mut self,
        slot: IconSlot,
        name: &'static str,
        dark_name: Option<&'static str>,
        size: u32,
        dark_mode: bool,
    ) {
        let raster = self.load_raster(name, dark_name, size, dark_mode);
        let handle = to_handle(&raster);
        self.registry.insert(
            slot,
            Registration {
                name,
                dark_name,
                size,
                raster,
                handle,
            },
        );
    }

    /// Re-tints every registered slot with its original parameters. Called
    /// when the theme flips so no icon keeps a stale tint.
    pub fn update_icons(&mut self, dark_mode: bool) {
        let params: Vec<(IconSlot, &'static str, Option<&'static str>, u32)> = self
            .registry
            .iter()
            .map(|(slot, reg)| (*slot, reg.name, reg.dark_name, reg.size))
            .collect();
        for (slot, name, dark_name, size) in params {
            let raster = self.load_raster(name, dark_name, size, dark_mode);
            let handle = to_handle(&raster);
            if let Some(reg) = self.registry.get_mut(&slot) {
                reg.raster = raster;
                reg.handle = handle;
            }
        }
    }

    /// Re-tints one slot's cached raster with the color the closure resolves
    /// to right now, without touching the SVG source. Applying the same color
    /// twice yields an identical raster.
    pub fn update_icon_color(&mut self, slot: IconSlot, color: impl Fn() -> Color) {
        if let Some(reg) = self.registry.get_mut(&slot) {
            tint(&mut reg.raster, color());
            reg.handle = to_handle(&reg.raster);
        }
    }

    /// Cached handle for a slot. Unknown slots resolve to a blank image so
    /// views never have to special-case a missing registration.
    pub fn handle(&self, slot: IconSlot) -> image::Handle {
        self.registry
            .get(&slot)
            .map(|reg| reg.handle.clone())
            .unwrap_or_else(|| to_handle(&blank(1)))
    }

    /// Drops a slot from the registry (used when a popover closes and its
    /// entries disappear for good).
    pub fn unregister(&mut self, slot: IconSlot) {
        self.registry.remove(&slot);
    }

    pub fn is_registered(&self, slot: IconSlot) -> bool {
        self.registry.contains_key(&slot)
    }

    /// One-shot load without registration: rasterize `name` (or its dark
    /// variant when `dark_mode` and one is given) at `size`×`size` and tint
    /// it for the mode.
    pub fn load_icon(
        &self,
        name: &'static str,
        dark_mode: bool,
        dark_name: Option<&'static str>,
        size: u32,
    ) -> image::Handle {
        to_handle(&self.load_raster(name, dark_name, size, dark_mode))
    }

    fn load_raster(
        &self,
        name: &'static str,
        dark_name: Option<&'static str>,
        size: u32,
        dark_mode: bool,
    ) -> tiny_skia::Pixmap {
        let effective = if dark_mode { dark_name.unwrap_or(name) } else { name };
        let path = self.asset_dir.join(format!("{effective}.svg"));
        let mut raster = rasterize(&path, size).unwrap_or_else(|| blank(size));
        let color = if dark_mode { Color::WHITE } else { Color::BLACK };
        tint(&mut raster, color);
        raster
    }

    #[cfg(test)]
    fn raster_bytes(&self, slot: IconSlot) -> Option<Vec<u8>> {
        self.registry.get(&slot).map(|r| r.raster.data().to_vec())
    }
}

/// Rasterizes an SVG file to a square pixmap, preserving aspect ratio and
/// centering the artwork. `None` when the file is missing or invalid.
fn rasterize(path: &Path, size: u32) -> Option<tiny_skia::Pixmap> {
    let data = std::fs::read(path).ok()?;
    let tree = usvg::Tree::from_data(&data, &usvg::Options::default()).ok()?;

    let orig = tree.size();
    if orig.width() <= 0.0 || orig.height() <= 0.0 {
        return None;
    }
    let scale = (size as f32 / orig.width()).min(size as f32 / orig.height());
    let tx = (size as f32 - orig.width() * scale) / 2.0;
    let ty = (size as f32 - orig.height() * scale) / 2.0;
    let transform = tiny_skia::Transform::from_scale(scale, scale).post_translate(tx, ty);

    let mut pixmap = tiny_skia::Pixmap::new(size.max(1), size.max(1))?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap)
}

/// Replaces the color of every pixel while preserving alpha, the raster
/// equivalent of Qt's source-in composition fill.
fn tint(pixmap: &mut tiny_skia::Pixmap, color: Color) {
    let rect = match tiny_skia::Rect::from_xywh(
        0.0,
        0.0,
        pixmap.width() as f32,
        pixmap.height() as f32,
    ) {
        Some(rect) => rect,
        None => return,
    };
    let mut paint = tiny_skia::Paint::default();
    paint.set_color_rgba8(
        (color.r * 255.0).round() as u8,
        (color.g * 255.0).round() as u8,
        (color.b * 255.0).round() as u8,
        255,
    );
    paint.blend_mode = tiny_skia::BlendMode::SourceIn;
    let _ = pixmap.fill_rect(rect, &paint, tiny_skia::Transform::identity(), None);
}

/// Fully transparent pixmap of the requested size.
fn blank(size: u32) -> tiny_skia::Pixmap {
    let size = size.max(1);
    tiny_skia::Pixmap::new(size, size).expect("nonzero pixmap allocation")
}

/// Converts a premultiplied pixmap into a straight-alpha RGBA image handle.
fn to_handle(pixmap: &tiny_skia::Pixmap) -> image::Handle {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image::Handle::from_rgba(pixmap.width(), pixmap.height(), rgba)
}

/// Rasterizes the application icon for the window title bar. `None` if the
/// asset is missing or fails to render; the window simply has no icon then.
pub fn window_icon() -> Option<iced::window::Icon> {
    let pixmap = rasterize(Path::new("assets/icons/workschedule_generator.svg"), 128)?;
    let mut tinted = pixmap;
    tint(&mut tinted, Color::BLACK);
    let mut rgba = Vec::with_capacity(tinted.data().len());
    for px in tinted.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    iced::window::icon::from_rgba(rgba, tinted.width(), tinted.height()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::menu::EntryId;
    use std::fs;
    use tempfile::tempdir;

    const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16"><rect x="2" y="2" width="12" height="12" fill="#ff0000"/></svg>"##;

    fn store_with(name: &str) -> (tempfile::TempDir, IconStore) {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(format!("{name}.svg")), SQUARE_SVG).expect("write svg");
        let store = IconStore::with_asset_dir(dir.path().to_path_buf());
        (dir, store)
    }

    fn center_pixel(bytes: &[u8], size: u32) -> [u8; 4] {
        let idx = ((size / 2 * size + size / 2) * 4) as usize;
        [bytes[idx], bytes[idx + 1], bytes[idx + 2], bytes[idx + 3]]
    }

    #[test]
    fn light_mode_tints_opaque_pixels_black() {
        let (_dir, mut store) = store_with("menu");
        store.register(IconSlot::SidebarToggle, "menu", None, 16, false);
        let bytes = store.raster_bytes(IconSlot::SidebarToggle).expect("raster");
        let [r, g, b, a] = center_pixel(&bytes, 16);
        assert_eq!((r, g, b), (0, 0, 0));
        assert_eq!(a, 255);
    }

    #[test]
    fn dark_mode_tints_opaque_pixels_white() {
        let (_dir, mut store) = store_with("menu");
        store.register(IconSlot::SidebarToggle, "menu", None, 16, true);
        let bytes = store.raster_bytes(IconSlot::SidebarToggle).expect("raster");
        let [r, g, b, _] = center_pixel(&bytes, 16);
        assert_eq!((r, g, b), (255, 255, 255));
    }

    #[test]
    fn transparent_pixels_stay_transparent() {
        let (_dir, mut store) = store_with("menu");
        store.register(IconSlot::SidebarToggle, "menu", None, 16, false);
        let bytes = store.raster_bytes(IconSlot::SidebarToggle).expect("raster");
        // Corner pixel is outside the 12x12 rect.
        assert_eq!(bytes[3], 0);
    }

    #[test]
    fn missing_asset_degrades_to_blank() {
        let dir = tempdir().expect("tempdir");
        let mut store = IconStore::with_asset_dir(dir.path().to_path_buf());
        store.register(IconSlot::ThemeToggle, "nope", None, 16, false);
        let bytes = store.raster_bytes(IconSlot::ThemeToggle).expect("raster");
        assert!(bytes.iter().all(|&b| b == 0));
    }

    #[test]
    fn registry_deduplicates_per_slot() {
        let (_dir, mut store) = store_with("menu");
        store.register(IconSlot::SidebarToggle, "menu", None, 16, false);
        store.register(IconSlot::SidebarToggle, "menu", None, 24, false);
        assert_eq!(store.registry.len(), 1);
        assert_eq!(store.registry[&IconSlot::SidebarToggle].size, 24);
    }

    #[test]
    fn dark_variant_is_loaded_in_dark_mode() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("sun.svg"), SQUARE_SVG).expect("write svg");
        // No moon.svg on disk: light mode must degrade to blank while dark
        // mode finds the variant.
        let mut store = IconStore::with_asset_dir(dir.path().to_path_buf());
        store.register(IconSlot::ThemeToggle, "moon", Some("sun"), 16, true);
        let bytes = store.raster_bytes(IconSlot::ThemeToggle).expect("raster");
        let [.., a] = center_pixel(&bytes, 16);
        assert_eq!(a, 255);
    }

    #[test]
    fn update_icons_retints_every_registration() {
        let (_dir, mut store) = store_with("menu");
        store.register(IconSlot::SidebarToggle, "menu", None, 16, false);
        store.register(IconSlot::Nav(EntryId::Top(0)), "menu", None, 16, false);
        store.update_icons(true);
        for slot in [IconSlot::SidebarToggle, IconSlot::Nav(EntryId::Top(0))] {
            let bytes = store.raster_bytes(slot).expect("raster");
            let [r, ..] = center_pixel(&bytes, 16);
            assert_eq!(r, 255);
        }
    }

    #[test]
    fn recoloring_is_idempotent() {
        let (_dir, mut store) = store_with("menu");
        store.register(IconSlot::SidebarToggle, "menu", None, 16, false);
        let blue = || Color::from_rgb(0.0, 0.0, 1.0);
        store.update_icon_color(IconSlot::SidebarToggle, blue);
        let once = store.raster_bytes(IconSlot::SidebarToggle).expect("raster");
        store.update_icon_color(IconSlot::SidebarToggle, blue);
        let twice = store.raster_bytes(IconSlot::SidebarToggle).expect("raster");
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_slot_yields_blank_handle() {
        let store = IconStore::new();
        let _ = store.handle(IconSlot::Arrow(EntryId::Top(1)));
    }
}
