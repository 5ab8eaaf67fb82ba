//! Contact section: detail rows, a social grid, and the availability note.

use egui::{vec2, RichText, Rounding, Stroke, Ui};

use crate::constants::*;
use crate::content::Contact;
use crate::easing::EASE_OUT_EXPO;
use crate::reveal::{Reveal, RevealConfig};
use crate::sequence::{AnimationStage, PropertySet, SequenceConfig};
use crate::ui::style::{self, colors};
use crate::ui::{animated_block, icon_badge, section_header, PageFrame};

pub struct ContactState {
    reveal: Reveal,
    header_stage: AnimationStage,
    seq: SequenceConfig,
}

impl ContactState {
    pub fn new() -> Result<Self, String> {
        let header_stage = AnimationStage::new(
            PropertySet::below(ITEM_RISE),
            PropertySet::IDENTITY,
            ITEM_DURATION,
            0.0,
            EASE_OUT_EXPO,
        )?;
        let seq = SequenceConfig::fade_and_rise(30.0, ITEM_DURATION, EASE_OUT_EXPO, 0.1, 0.0)?;
        Ok(Self {
            reveal: Reveal::new(RevealConfig::once_with_margin(SECTION_REVEAL_MARGIN)),
            header_stage,
            seq,
        })
    }

    pub fn force_settle(&mut self) {
        self.reveal.force_settle();
    }
}

pub fn draw(ui: &mut Ui, state: &mut ContactState, content: &Contact, frame: &PageFrame) -> bool {
    let t = state.reveal.elapsed(frame.now).unwrap_or(0.0);
    // Children per column: heading, blurb, then the rows/grid/note
    let child_count = 2 + content.details.len().max(2);

    ui.add_space(SECTION_PADDING);
    crate::ui::centered_content(ui, |ui| {
        section_header(ui, &content.header, &state.header_stage.sample(t));

        let container = state.seq.parent_at(t);
        animated_block(ui, &container, |ui| {
            ui.columns(2, |cols| {
                draw_info_column(&mut cols[0], state, content, t);
                draw_socials_column(&mut cols[1], state, content, t);
            });
        });
    });
    ui.add_space(SECTION_PADDING);

    let rect = ui.min_rect();
    state.reveal.observe(rect, frame.viewport, frame.now);

    state.reveal.is_revealed() && !state.seq.is_settled(t, child_count)
}

fn draw_info_column(ui: &mut Ui, state: &ContactState, content: &Contact, t: f32) {
    let props = state.seq.child_at(0, t);
    animated_block(ui, &props, |ui| {
        ui.label(RichText::new(&content.info_heading).strong().size(19.0));
    });
    ui.add_space(8.0);

    let props = state.seq.child_at(1, t);
    animated_block(ui, &props, |ui| {
        ui.label(
            RichText::new(&content.info_blurb)
                .size(14.0)
                .color(colors::TEXT_MUTED),
        );
    });
    ui.add_space(16.0);

    for (i, detail) in content.details.iter().enumerate() {
        let props = state.seq.child_at(2 + i, t);
        animated_block(ui, &props, |ui| {
            style::card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width() - 24.0);
                ui.horizontal(|ui| {
                    icon_badge(ui, &detail.icon);
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&detail.label)
                                .size(12.0)
                                .color(colors::TEXT_MUTED),
                        );
                        match &detail.href {
                            Some(href) => {
                                if ui.link(RichText::new(&detail.value).size(14.0)).clicked() {
                                    ui.ctx().open_url(egui::OpenUrl::new_tab(href));
                                }
                            }
                            None => {
                                ui.label(RichText::new(&detail.value).size(14.0));
                            }
                        }
                    });
                });
            });
        });
        ui.add_space(10.0);
    }
}

fn draw_socials_column(ui: &mut Ui, state: &ContactState, content: &Contact, t: f32) {
    let props = state.seq.child_at(0, t);
    animated_block(ui, &props, |ui| {
        ui.label(RichText::new(&content.socials_heading).strong().size(19.0));
    });
    ui.add_space(8.0);

    let props = state.seq.child_at(1, t);
    animated_block(ui, &props, |ui| {
        ui.label(
            RichText::new(&content.socials_blurb)
                .size(14.0)
                .color(colors::TEXT_MUTED),
        );
    });
    ui.add_space(16.0);

    // Social tiles, three per row
    let mut index = 0;
    while index < content.socials.len() {
        let props = state.seq.child_at(2 + index / 3, t);
        animated_block(ui, &props, |ui| {
            ui.columns(3, |cols| {
                for col in 0..3 {
                    let Some(social) = content.socials.get(index + col) else {
                        break;
                    };
                    let button = egui::Button::new(
                        RichText::new(format!("{}\n{}", social.icon, social.name)).size(13.0),
                    )
                    .fill(colors::CARD)
                    .stroke(Stroke::new(1.0, colors::BORDER))
                    .rounding(Rounding::same(CARD_ROUNDING))
                    .min_size(vec2(cols[col].available_width(), 72.0));
                    if cols[col].add(button).clicked() {
                        cols[col]
                            .ctx()
                            .open_url(egui::OpenUrl::new_tab(&social.url));
                    }
                }
            });
        });
        ui.add_space(10.0);
        index += 3;
    }

    ui.add_space(12.0);

    // Availability note
    let note_child = 2 + content.socials.len().div_ceil(3);
    let props = state.seq.child_at(note_child, t);
    animated_block(ui, &props, |ui| {
        egui::Frame::none()
            .fill(colors::PRIMARY_FAINT)
            .stroke(Stroke::new(1.0, colors::PRIMARY))
            .rounding(Rounding::same(CARD_ROUNDING))
            .inner_margin(egui::Margin::same(18.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width() - 36.0);
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    ui.label(
                        RichText::new(&content.availability_lead)
                            .strong()
                            .size(14.0)
                            .color(colors::PRIMARY),
                    );
                    ui.label(
                        RichText::new(&content.availability_rest)
                            .size(14.0)
                            .color(colors::TEXT_MUTED),
                    );
                });
            });
    });
}
