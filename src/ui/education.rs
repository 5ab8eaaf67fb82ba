//! Education section: alternating timeline cards with pulsing dots and a
//! closing achievement badge.

use egui::{pos2, Color32, RichText, Rounding, Stroke, Ui};

use crate::constants::*;
use crate::content::Education;
use crate::easing::{ping_pong, EASE_OUT_EXPO};
use crate::reveal::{Reveal, RevealConfig};
use crate::sequence::{AnimationStage, PropertySet, SequenceConfig};
use crate::ui::style::{self, colors};
use crate::ui::{animated_block, icon_badge, section_header, PageFrame};

pub struct EducationState {
    reveal: Reveal,
    header_stage: AnimationStage,
    seq: SequenceConfig,
    badge_stage: AnimationStage,
}

impl EducationState {
    pub fn new() -> Result<Self, String> {
        let header_stage = AnimationStage::new(
            PropertySet::below(ITEM_RISE),
            PropertySet::IDENTITY,
            ITEM_DURATION,
            0.0,
            EASE_OUT_EXPO,
        )?;
        // Timeline cards slide in from the left on a slower stagger
        let card = AnimationStage::new(
            PropertySet::left_of(40.0),
            PropertySet::IDENTITY,
            ITEM_DURATION,
            0.0,
            EASE_OUT_EXPO,
        )?;
        let container = AnimationStage::new(
            PropertySet::HIDDEN,
            PropertySet::IDENTITY,
            0.3,
            0.0,
            crate::easing::Easing::Linear,
        )?;
        let seq = SequenceConfig::new(vec![container], card, 0.2, 0.0)?;
        let badge_stage = AnimationStage::new(
            PropertySet::below(ITEM_RISE),
            PropertySet::IDENTITY,
            ITEM_DURATION,
            0.6,
            EASE_OUT_EXPO,
        )?;
        Ok(Self {
            reveal: Reveal::new(RevealConfig::once_with_margin(SECTION_REVEAL_MARGIN)),
            header_stage,
            seq,
            badge_stage,
        })
    }

    pub fn force_settle(&mut self) {
        self.reveal.force_settle();
    }
}

pub fn draw(
    ui: &mut Ui,
    state: &mut EducationState,
    content: &Education,
    frame: &PageFrame,
) -> bool {
    let t = state.reveal.elapsed(frame.now).unwrap_or(0.0);

    egui::Frame::none().fill(colors::BG_LIGHT).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.add_space(SECTION_PADDING);
        crate::ui::centered_content(ui, |ui| {
            section_header(ui, &content.header, &state.header_stage.sample(t));

            let center_x = ui.available_rect_before_wrap().center().x;
            let timeline_top = ui.cursor().min.y;

            for (i, entry) in content.entries.iter().enumerate() {
                let props = state.seq.child_at(i, t);
                let row_top = ui.cursor().min.y;

                ui.columns(2, |cols| {
                    // Alternate sides like the original's two-column timeline
                    let col = i % 2;
                    animated_block(&mut cols[col], &props, |ui| {
                        style::card_frame().show(ui, |ui| {
                            ui.set_width(ui.available_width() - 24.0);
                            ui.horizontal(|ui| {
                                icon_badge(ui, &entry.icon);
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if let Some(highlight) = &entry.highlight {
                                            egui::Frame::none()
                                                .fill(colors::PRIMARY_FAINT)
                                                .rounding(Rounding::same(12.0))
                                                .inner_margin(egui::Margin::symmetric(10.0, 4.0))
                                                .show(ui, |ui| {
                                                    ui.label(
                                                        RichText::new(highlight)
                                                            .size(12.0)
                                                            .color(colors::PRIMARY),
                                                    );
                                                });
                                        }
                                    },
                                );
                            });
                            ui.add_space(8.0);
                            ui.label(RichText::new(&entry.degree).strong().size(17.0));
                            ui.label(
                                RichText::new(&entry.institution)
                                    .size(14.0)
                                    .color(colors::TEXT_MUTED),
                            );
                            ui.label(
                                RichText::new(&entry.duration)
                                    .size(13.0)
                                    .monospace()
                                    .color(colors::PRIMARY),
                            );
                            ui.add_space(6.0);
                            ui.label(
                                RichText::new(&entry.details)
                                    .size(13.0)
                                    .color(colors::TEXT_MUTED),
                            );
                        });
                    });
                });

                // Timeline dot with a looping pulse, phase-offset per entry
                if props.opacity > 0.0 {
                    let dot_y = row_top + 34.0;
                    let painter = ui.painter();
                    let pulse = ping_pong(
                        frame.now - i as f32 * TIMELINE_PULSE_STAGGER,
                        TIMELINE_PULSE_PERIOD,
                    );
                    let ring_alpha = (0.5 + 0.3 * pulse) * props.opacity;
                    painter.circle_stroke(
                        pos2(center_x, dot_y),
                        6.0 + 3.0 * pulse,
                        Stroke::new(
                            2.0,
                            Color32::from_rgba_unmultiplied(
                                colors::PRIMARY.r(),
                                colors::PRIMARY.g(),
                                colors::PRIMARY.b(),
                                (ring_alpha * 255.0) as u8,
                            ),
                        ),
                    );
                    painter.circle_filled(pos2(center_x, dot_y), 5.0, colors::PRIMARY);
                }

                ui.add_space(32.0);
            }

            // Timeline spine under the dots, fading with the container
            let container = state.seq.parent_at(t);
            let timeline_bottom = ui.cursor().min.y - 16.0;
            if container.opacity > 0.0 && timeline_bottom > timeline_top {
                ui.painter().line_segment(
                    [
                        pos2(center_x, timeline_top),
                        pos2(center_x, timeline_bottom),
                    ],
                    Stroke::new(1.0, colors::BORDER.gamma_multiply(container.opacity)),
                );
            }

            ui.add_space(16.0);

            // Achievement badge
            let props = state.badge_stage.sample(t);
            animated_block(ui, &props, |ui| {
                crate::ui::centered_row(ui, 360.0, |ui| {
                    style::card_frame().show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&content.achievement.icon).size(26.0));
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(&content.achievement.title)
                                        .strong()
                                        .size(15.0),
                                );
                                ui.label(
                                    RichText::new(&content.achievement.subtitle)
                                        .size(13.0)
                                        .color(colors::TEXT_MUTED),
                                );
                            });
                        });
                    });
                });
            });
        });
        ui.add_space(SECTION_PADDING);
    });

    let rect = ui.min_rect();
    state.reveal.observe(rect, frame.viewport, frame.now);

    let entrance_live = state.reveal.is_revealed()
        && (!state.seq.is_settled(t, content.entries.len()) || !state.badge_stage.is_done(t));
    // Dots pulse for as long as the section is on screen
    let on_screen = state.reveal.is_revealed() && frame.viewport.intersects(rect);
    entrance_live || on_screen
}
