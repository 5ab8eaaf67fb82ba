//! Portfolio-themed egui styling.
//!
//! Dark page, soft rounded cards, violet/cyan accents: the palette the
//! sections share so every card and chip reads as one surface.

use egui::epaint::Shadow;
use egui::style::{WidgetVisuals, Widgets};
use egui::{
    Color32, FontData, FontDefinitions, FontFamily, Frame, Margin, Rounding, Stroke, Style, Visuals,
};

use crate::constants::*;

/// Portfolio color palette
pub mod colors {
    use egui::Color32;

    // Page backgrounds
    pub const BG: Color32 = Color32::from_rgb(10, 10, 15);
    pub const BG_LIGHT: Color32 = Color32::from_rgb(16, 16, 24);
    pub const CARD: Color32 = Color32::from_rgb(22, 22, 31);
    pub const BORDER: Color32 = Color32::from_rgb(39, 39, 52);

    // Accents
    pub const PRIMARY: Color32 = Color32::from_rgb(160, 72, 255);
    pub const SECONDARY: Color32 = Color32::from_rgb(74, 198, 255);
    pub const PINK: Color32 = Color32::from_rgb(255, 78, 198);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 245);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(154, 154, 176);

    // Translucent fills for icon badges and chips
    pub const PRIMARY_FAINT: Color32 = Color32::from_rgba_premultiplied(40, 18, 64, 200);
    pub const WHITE_FAINT: Color32 = Color32::from_rgba_premultiplied(24, 24, 30, 220);
}

/// Border width for cards and buttons
pub const BORDER_WIDTH: f32 = 1.0;

/// Create the portfolio-themed visuals
pub fn portfolio_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_rounding = Rounding::same(CARD_ROUNDING);
    visuals.menu_rounding = Rounding::same(CHIP_ROUNDING);
    visuals.window_shadow = Shadow::NONE;
    visuals.popup_shadow = Shadow::NONE;

    visuals.window_fill = colors::CARD;
    visuals.window_stroke = Stroke::new(BORDER_WIDTH, colors::BORDER);

    visuals.panel_fill = colors::BG;
    visuals.extreme_bg_color = colors::BG_LIGHT;
    visuals.faint_bg_color = colors::BG_LIGHT;

    visuals.widgets = portfolio_widgets();

    visuals.selection.bg_fill = colors::PRIMARY_FAINT;
    visuals.selection.stroke = Stroke::new(1.0, colors::PRIMARY);
    visuals.hyperlink_color = colors::SECONDARY;
    visuals.override_text_color = Some(colors::TEXT_PRIMARY);

    visuals
}

/// Widget visuals for the portfolio theme
fn portfolio_widgets() -> Widgets {
    Widgets {
        noninteractive: WidgetVisuals {
            bg_fill: colors::CARD,
            weak_bg_fill: colors::CARD,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::BORDER),
            rounding: Rounding::same(CHIP_ROUNDING),
            fg_stroke: Stroke::new(1.0, colors::TEXT_MUTED),
            expansion: 0.0,
        },
        inactive: WidgetVisuals {
            bg_fill: colors::WHITE_FAINT,
            weak_bg_fill: colors::WHITE_FAINT,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::BORDER),
            rounding: Rounding::same(CHIP_ROUNDING),
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 0.0,
        },
        hovered: WidgetVisuals {
            bg_fill: colors::CARD,
            weak_bg_fill: colors::CARD,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::PRIMARY),
            rounding: Rounding::same(CHIP_ROUNDING),
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 1.0,
        },
        active: WidgetVisuals {
            bg_fill: colors::PRIMARY_FAINT,
            weak_bg_fill: colors::PRIMARY_FAINT,
            bg_stroke: Stroke::new(2.0, colors::PRIMARY),
            rounding: Rounding::same(CHIP_ROUNDING),
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 0.0,
        },
        open: WidgetVisuals {
            bg_fill: colors::PRIMARY_FAINT,
            weak_bg_fill: colors::PRIMARY_FAINT,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::BORDER),
            rounding: Rounding::same(CHIP_ROUNDING),
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 0.0,
        },
    }
}

/// Load a nicer system font when available, keeping egui's bundled fonts
/// (and their emoji coverage) as fallback.
pub fn load_fonts() -> FontDefinitions {
    let mut fonts = FontDefinitions::default();

    let candidates = [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    ];
    for path in candidates {
        if let Ok(font_data) = std::fs::read(path) {
            fonts
                .font_data
                .insert("body".to_owned(), FontData::from_owned(font_data));
            fonts
                .families
                .entry(FontFamily::Proportional)
                .or_default()
                .insert(0, "body".to_owned());
            log::info!("using system font {}", path);
            return fonts;
        }
    }

    log::info!("no system font found, using egui's bundled fonts");
    fonts
}

/// Frame for content cards (skills, projects, education, contact rows)
pub fn card_frame() -> Frame {
    Frame::none()
        .fill(colors::CARD)
        .stroke(Stroke::new(BORDER_WIDTH, colors::BORDER))
        .rounding(Rounding::same(CARD_ROUNDING))
        .inner_margin(Margin::same(CARD_MARGIN))
}

/// Frame for small chips (skill tags, tech tags, value props)
pub fn chip_frame() -> Frame {
    Frame::none()
        .fill(colors::WHITE_FAINT)
        .stroke(Stroke::new(BORDER_WIDTH, colors::BORDER))
        .rounding(Rounding::same(CHIP_ROUNDING))
        .inner_margin(Margin::symmetric(10.0, 6.0))
}

/// Frame for the translucent icon badge inside cards
pub fn icon_badge_frame() -> Frame {
    Frame::none()
        .fill(colors::PRIMARY_FAINT)
        .rounding(Rounding::same(CHIP_ROUNDING))
        .inner_margin(Margin::same(10.0))
}

/// Create the portfolio-themed style
pub fn portfolio_style() -> Style {
    let mut style = Style::default();
    style.visuals = portfolio_visuals();
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);
    // Show tooltips immediately on hover
    style.interaction.tooltip_delay = 0.0;
    style
}
