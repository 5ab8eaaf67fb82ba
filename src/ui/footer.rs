//! Footer: animated gradient border, brand blurb, quick links, project
//! links, social grid, and the copyright row with back-to-top.

use egui::{pos2, vec2, Color32, Rect, RichText, Rounding, Stroke, Ui};

use crate::constants::*;
use crate::content::Footer;
use crate::easing::EASE_OUT_EXPO;
use crate::reveal::{Reveal, RevealConfig};
use crate::sequence::SequenceConfig;
use crate::ui::style::colors;
use crate::ui::{animated_block, PageFrame, SectionId, UiActions};

/// Columns plus the copyright row
const CHILD_COUNT: usize = 5;

pub struct FooterState {
    reveal: Reveal,
    seq: SequenceConfig,
}

impl FooterState {
    pub fn new() -> Result<Self, String> {
        Ok(Self {
            reveal: Reveal::new(RevealConfig::once()),
            seq: SequenceConfig::fade_and_rise(20.0, ITEM_DURATION, EASE_OUT_EXPO, 0.1, 0.0)?,
        })
    }

    pub fn force_settle(&mut self) {
        self.reveal.force_settle();
    }
}

pub fn draw(
    ui: &mut Ui,
    state: &mut FooterState,
    content: &Footer,
    frame: &PageFrame,
    actions: &mut UiActions,
) -> bool {
    let t = state.reveal.elapsed(frame.now).unwrap_or(0.0);

    // Animated gradient border along the footer's top edge
    let border_rect = Rect::from_min_size(
        ui.cursor().min,
        vec2(ui.available_width(), FOOTER_BORDER_HEIGHT),
    );
    paint_gradient_border(ui, border_rect, frame.now);
    ui.add_space(FOOTER_BORDER_HEIGHT);

    egui::Frame::none().fill(colors::BG_LIGHT).show(ui, |ui| {
        ui.set_width(ui.available_width());
        // Container-level fade; children handle their own rise
        ui.set_opacity(state.seq.parent_at(t).opacity);
        ui.add_space(40.0);
        crate::ui::centered_content(ui, |ui| {
            ui.columns(4, |cols| {
                // Brand + blurb
                let props = state.seq.child_at(0, t);
                animated_block(&mut cols[0], &props, |ui| {
                    ui.label(
                        RichText::new(&content.brand)
                            .size(26.0)
                            .strong()
                            .color(colors::PRIMARY),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(&content.blurb)
                            .size(13.0)
                            .color(colors::TEXT_MUTED),
                    );
                });

                // Quick links scroll the page
                let props = state.seq.child_at(1, t);
                animated_block(&mut cols[1], &props, |ui| {
                    column_heading(ui, "Quick Links");
                    for link in &content.quick_links {
                        if ui.link(RichText::new(&link.label).size(13.0)).clicked() {
                            actions.scroll_to = SectionId::from_anchor(&link.section);
                        }
                    }
                });

                // External project links
                let props = state.seq.child_at(2, t);
                animated_block(&mut cols[2], &props, |ui| {
                    column_heading(ui, "Projects");
                    for link in &content.project_links {
                        if ui
                            .link(RichText::new(format!("{} ↗", link.label)).size(13.0))
                            .clicked()
                        {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(&link.url));
                        }
                    }
                });

                // Social icon grid
                let props = state.seq.child_at(3, t);
                animated_block(&mut cols[3], &props, |ui| {
                    column_heading(ui, "Connect");
                    let mut index = 0;
                    while index < content.socials.len() {
                        ui.horizontal(|ui| {
                            for social in content.socials.iter().skip(index).take(3) {
                                let button =
                                    egui::Button::new(RichText::new(&social.icon).size(16.0))
                                        .fill(colors::CARD)
                                        .rounding(Rounding::same(CHIP_ROUNDING))
                                        .min_size(vec2(40.0, 40.0));
                                if ui.add(button).on_hover_text(&social.name).clicked() {
                                    ui.ctx().open_url(egui::OpenUrl::new_tab(&social.url));
                                }
                            }
                        });
                        index += 3;
                    }
                });
            });

            ui.add_space(32.0);
            ui.separator();
            ui.add_space(16.0);

            // Copyright row
            let props = state.seq.child_at(4, t);
            animated_block(ui, &props, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&content.copyright)
                            .size(12.0)
                            .color(colors::TEXT_MUTED),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let button = egui::Button::new(RichText::new("↑").size(16.0))
                            .fill(colors::CARD)
                            .stroke(Stroke::new(1.0, colors::BORDER))
                            .rounding(Rounding::same(CHIP_ROUNDING))
                            .min_size(vec2(40.0, 40.0));
                        if ui.add(button).on_hover_text("Back to top").clicked() {
                            actions.scroll_to = Some(SectionId::Home);
                        }
                        ui.add_space(16.0);
                        ui.label(
                            RichText::new(&content.tagline)
                                .size(12.0)
                                .color(colors::TEXT_MUTED),
                        );
                    });
                });
            });
            ui.add_space(24.0);
        });
    });

    let rect = ui.min_rect();
    state.reveal.observe(rect, frame.viewport, frame.now);

    let entrance_live = state.reveal.is_revealed() && !state.seq.is_settled(t, CHILD_COUNT);
    // The border gradient sweeps while the footer is on screen
    entrance_live || frame.viewport.intersects(rect)
}

fn column_heading(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).strong().size(15.0).color(colors::SECONDARY));
    ui.add_space(8.0);
}

/// Pink -> violet -> cyan band whose phase sweeps over time
fn paint_gradient_border(ui: &Ui, rect: Rect, now: f32) {
    let painter = ui.painter();
    let stops = [colors::PINK, colors::PRIMARY, colors::SECONDARY, colors::PINK];
    let segments = 48;
    let phase = (now / FOOTER_GRADIENT_PERIOD).fract();
    let seg_width = rect.width() / segments as f32;
    for i in 0..segments {
        let x = rect.left() + i as f32 * seg_width;
        let u = ((i as f32 / segments as f32) + phase).fract() * (stops.len() - 1) as f32;
        let idx = (u as usize).min(stops.len() - 2);
        let color = lerp_color(stops[idx], stops[idx + 1], u - idx as f32);
        painter.rect_filled(
            Rect::from_min_size(pos2(x, rect.top()), vec2(seg_width + 1.0, rect.height())),
            Rounding::ZERO,
            color,
        );
    }
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| -> u8 { (x as f32 + (y as f32 - x as f32) * t).round() as u8 };
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}
