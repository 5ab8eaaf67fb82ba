//! Optional artwork loading.
//!
//! Hero and project images live under `assets/` and are decoded with the
//! `image` crate, then uploaded as egui textures. Missing or unreadable
//! files are not errors - the sections paint a gradient placeholder - so
//! the page always renders.

use std::collections::HashMap;
use std::path::Path;

use crate::content::Profile;

const ASSETS_DIR: &str = "assets";

pub struct Artwork {
    pub hero: Option<egui::TextureHandle>,
    /// Project card images keyed by file name
    pub projects: HashMap<String, egui::TextureHandle>,
}

impl Artwork {
    pub fn load(ctx: &egui::Context, profile: &Profile) -> Self {
        let hero = profile
            .hero
            .background
            .as_deref()
            .and_then(|file| load_texture(ctx, file));

        let mut projects = HashMap::new();
        for project in &profile.projects.entries {
            if let Some(file) = project.image.as_deref() {
                if !projects.contains_key(file) {
                    if let Some(texture) = load_texture(ctx, file) {
                        projects.insert(file.to_string(), texture);
                    }
                }
            }
        }

        log::info!(
            "artwork loaded: hero={}, project images={}",
            hero.is_some(),
            projects.len()
        );
        Self { hero, projects }
    }

    pub fn project(&self, file: Option<&str>) -> Option<&egui::TextureHandle> {
        file.and_then(|f| self.projects.get(f))
    }
}

fn load_texture(ctx: &egui::Context, file: &str) -> Option<egui::TextureHandle> {
    let path = Path::new(ASSETS_DIR).join(file);
    match image::open(&path) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
            Some(ctx.load_texture(file, color_image, egui::TextureOptions::LINEAR))
        }
        Err(e) => {
            log::warn!("no artwork at {}: {}", path.display(), e);
            None
        }
    }
}
