//! Hero banner: full-height intro with a staggered entrance, drifting
//! background orbs, and a bobbing scroll indicator.

use egui::{pos2, vec2, Color32, Rect, RichText, Rounding, Stroke, Ui};
use glam::Vec2;

use crate::constants::*;
use crate::content::Hero;
use crate::easing::{ping_pong, Easing, EASE_OUT_EXPO};
use crate::reveal::{Reveal, RevealConfig};
use crate::sequence::{AnimationStage, PropertySet, SequenceConfig};
use crate::ui::style::colors;
use crate::ui::{animated_block, centered_row, PageFrame, SectionId, UiActions};

/// Child order: chips, location, name, title, description, CTAs, socials
const CHILD_COUNT: usize = 7;

pub struct HeroState {
    reveal: Reveal,
    seq: SequenceConfig,
    chip_stage: AnimationStage,
}

impl HeroState {
    pub fn new() -> Result<Self, String> {
        let seq = SequenceConfig::fade_and_rise(
            HERO_ITEM_RISE,
            HERO_ITEM_DURATION,
            EASE_OUT_EXPO,
            HERO_STAGGER_CHILDREN,
            HERO_DELAY_CHILDREN,
        )?;
        // Value-prop chips pop in on their own short stagger
        let chip_stage = AnimationStage::new(
            PropertySet::shrunk(POP_START_SCALE),
            PropertySet::IDENTITY,
            POP_DURATION,
            0.1,
            Easing::EaseOutQuad,
        )?;
        Ok(Self {
            // The hero is at the top of the page, so this fires on frame one
            reveal: Reveal::new(RevealConfig::once()),
            seq,
            chip_stage,
        })
    }

    pub fn force_settle(&mut self) {
        self.reveal.force_settle();
    }
}

pub fn draw(
    ui: &mut Ui,
    state: &mut HeroState,
    content: &Hero,
    frame: &PageFrame,
    actions: &mut UiActions,
) -> bool {
    let width = ui.available_width();
    let min_height = frame.viewport.height().max(480.0);
    let bg_rect = Rect::from_min_size(ui.cursor().min, vec2(width, min_height));

    state.reveal.observe(bg_rect, frame.viewport, frame.now);
    let t = state.reveal.elapsed(frame.now).unwrap_or(0.0);
    let on_screen = frame.viewport.intersects(bg_rect);

    if on_screen {
        paint_background(ui, content, frame, bg_rect);
    }

    ui.add_space(min_height * 0.2);
    let container = state.seq.parent_at(t);
    animated_block(ui, &container, |ui| {
        crate::ui::centered_content(ui, |ui| {
            draw_content(ui, state, content, actions, t);
        });
    });

    // Pad the section out to the full viewport height
    let remaining = bg_rect.bottom() - ui.cursor().min.y;
    if remaining > 0.0 {
        ui.add_space(remaining);
    }

    if on_screen {
        paint_scroll_indicator(ui, bg_rect, t, frame.now);
    }

    // The orbs and indicator loop for as long as the hero is on screen
    let entrance_live = state.reveal.is_revealed() && !state.seq.is_settled(t, CHILD_COUNT);
    entrance_live || on_screen
}

fn draw_content(ui: &mut Ui, state: &HeroState, content: &Hero, actions: &mut UiActions, t: f32) {
    // Value-prop chips
    let props = state.seq.child_at(0, t);
    animated_block(ui, &props, |ui| {
        let est: f32 = content
            .value_props
            .iter()
            .map(|p| crate::ui::estimate_text_width(&p.text, 14.0) + 60.0)
            .sum();
        centered_row(ui, est, |ui| {
            for (i, prop) in content.value_props.iter().enumerate() {
                let chip = state.chip_stage.sample(t - i as f32 * 0.1);
                ui.scope(|ui| {
                    ui.set_opacity(chip.opacity);
                    egui::Frame::none()
                        .fill(colors::PRIMARY_FAINT)
                        .stroke(Stroke::new(1.0, colors::PRIMARY))
                        .rounding(Rounding::same(16.0))
                        .inner_margin(egui::Margin::symmetric(12.0, 6.0))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&prop.icon).size(14.0));
                                ui.label(
                                    RichText::new(&prop.text).size(14.0).color(Color32::WHITE),
                                );
                            });
                        });
                });
            }
        });
    });
    ui.add_space(16.0);

    // Location badge
    let props = state.seq.child_at(1, t);
    animated_block(ui, &props, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("📍 {}", content.location))
                    .size(13.0)
                    .color(colors::TEXT_MUTED),
            );
        });
    });
    ui.add_space(16.0);

    // Name
    let props = state.seq.child_at(2, t);
    animated_block(ui, &props, |ui| {
        crate::ui::heading_two_tone(ui, 52.0, &content.name, &content.accent_name, "");
    });
    ui.add_space(10.0);

    // Title
    let props = state.seq.child_at(3, t);
    animated_block(ui, &props, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&content.title)
                    .size(24.0)
                    .color(colors::SECONDARY),
            );
        });
    });
    ui.add_space(18.0);

    // Description
    let props = state.seq.child_at(4, t);
    animated_block(ui, &props, |ui| {
        ui.vertical_centered(|ui| {
            ui.set_max_width(620.0);
            ui.label(
                RichText::new(&content.description)
                    .size(15.0)
                    .color(colors::TEXT_MUTED),
            );
        });
    });
    ui.add_space(32.0);

    // CTA buttons
    let props = state.seq.child_at(5, t);
    animated_block(ui, &props, |ui| {
        centered_row(ui, 380.0, |ui| {
            let primary = egui::Button::new(
                RichText::new(format!("{} →", content.primary_cta.label))
                    .size(15.0)
                    .color(Color32::WHITE),
            )
            .fill(colors::PRIMARY)
            .rounding(Rounding::same(CARD_ROUNDING))
            .min_size(vec2(170.0, 46.0));
            if ui.add(primary).clicked() {
                ui.ctx()
                    .open_url(egui::OpenUrl::new_tab(&content.primary_cta.url));
            }

            ui.add_space(8.0);

            let secondary = egui::Button::new(
                RichText::new(&content.secondary_cta)
                    .size(15.0)
                    .color(Color32::WHITE),
            )
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::new(1.0, colors::BORDER))
            .rounding(Rounding::same(CARD_ROUNDING))
            .min_size(vec2(150.0, 46.0));
            if ui.add(secondary).clicked() {
                actions.scroll_to = Some(SectionId::Projects);
            }
        });
    });
    ui.add_space(28.0);

    // Social links
    let props = state.seq.child_at(6, t);
    animated_block(ui, &props, |ui| {
        centered_row(ui, content.socials.len() as f32 * 56.0, |ui| {
            for social in &content.socials {
                let button = egui::Button::new(RichText::new(&social.icon).size(20.0))
                    .fill(colors::WHITE_FAINT)
                    .rounding(Rounding::same(CARD_ROUNDING))
                    .min_size(vec2(48.0, 48.0));
                if ui.add(button).on_hover_text(&social.name).clicked() {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(&social.url));
                }
            }
        });
    });
}

/// Dark backdrop with the optional artwork and two drifting accent orbs
fn paint_background(ui: &Ui, content: &Hero, frame: &PageFrame, rect: Rect) {
    let painter = ui.painter();

    if let Some(texture) = content
        .background
        .as_deref()
        .and_then(|_| frame.artwork.hero.as_ref())
    {
        // Darkened so the foreground text stays readable
        painter.image(
            texture.id(),
            rect,
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::from_gray(90),
        );
    }

    // Fade the backdrop into the page background toward the bottom
    let mut mesh = egui::Mesh::default();
    let top = Color32::from_rgba_unmultiplied(10, 10, 15, 120);
    let bottom = colors::BG;
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));

    paint_orb(
        painter,
        rect,
        Vec2::new(0.28, 0.35),
        120.0,
        colors::PRIMARY,
        frame.now,
        ORB_PERIOD_SLOW,
    );
    paint_orb(
        painter,
        rect,
        Vec2::new(0.72, 0.68),
        150.0,
        colors::SECONDARY,
        frame.now + 1.0,
        ORB_PERIOD_SLOWER,
    );
}

/// A soft glowing orb drifting vertically (layered circles stand in for blur)
fn paint_orb(
    painter: &egui::Painter,
    rect: Rect,
    anchor: Vec2,
    radius: f32,
    color: Color32,
    time: f32,
    period: f32,
) {
    let phase = ping_pong(time, period);
    let drift = -ORB_DRIFT * phase;
    let alpha = 0.3 + 0.3 * phase;
    let center = pos2(
        rect.left() + rect.width() * anchor.x,
        rect.top() + rect.height() * anchor.y + drift,
    );
    for (scale, weight) in [(1.0, 0.25), (0.75, 0.35), (0.5, 0.5), (0.3, 0.7)] {
        let a = (alpha * weight * 40.0) as u8;
        let soft = Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a);
        painter.circle_filled(center, radius * scale, soft);
    }
}

/// Mouse-outline scroll hint that fades in late and bobs forever
fn paint_scroll_indicator(ui: &Ui, rect: Rect, t: f32, now: f32) {
    let alpha = ((t - 1.5) / 0.6).clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }
    let painter = ui.painter();
    let center_x = rect.center().x;
    let outline = Rect::from_center_size(pos2(center_x, rect.bottom() - 40.0), vec2(24.0, 40.0));
    let stroke_color = Color32::from_rgba_unmultiplied(
        colors::BORDER.r(),
        colors::BORDER.g(),
        colors::BORDER.b(),
        (alpha * 255.0) as u8,
    );
    painter.rect_stroke(outline, Rounding::same(12.0), Stroke::new(2.0, stroke_color));

    let bob = ping_pong(now, INDICATOR_BOB_PERIOD);
    let dot_alpha = (0.5 + 0.5 * bob) * alpha;
    let dot_color = Color32::from_rgba_unmultiplied(
        colors::PRIMARY.r(),
        colors::PRIMARY.g(),
        colors::PRIMARY.b(),
        (dot_alpha * 255.0) as u8,
    );
    painter.circle_filled(
        pos2(center_x, outline.top() + 9.0 + bob * INDICATOR_BOB_DISTANCE),
        3.0,
        dot_color,
    );
}
