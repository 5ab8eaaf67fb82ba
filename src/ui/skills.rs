//! Skills section: category cards with tag chips, plus a quick-facts strip.

use egui::{RichText, Ui};

use crate::constants::*;
use crate::content::Skills;
use crate::easing::{Easing, EASE_OUT_EXPO};
use crate::reveal::{Reveal, RevealConfig};
use crate::sequence::{AnimationStage, PropertySet, SequenceConfig};
use crate::ui::style::{self, colors};
use crate::ui::{animated_block, icon_badge, section_header, PageFrame};

pub struct SkillsState {
    reveal: Reveal,
    header_stage: AnimationStage,
    seq: SequenceConfig,
    fact_stage: AnimationStage,
}

impl SkillsState {
    pub fn new() -> Result<Self, String> {
        let header_stage = AnimationStage::new(
            PropertySet::below(ITEM_RISE),
            PropertySet::IDENTITY,
            ITEM_DURATION,
            0.0,
            EASE_OUT_EXPO,
        )?;
        let seq = SequenceConfig::fade_and_rise(ITEM_RISE, ITEM_DURATION, EASE_OUT_EXPO, 0.1, 0.0)?;
        let fact_stage = AnimationStage::new(
            PropertySet::shrunk(POP_START_SCALE),
            PropertySet::IDENTITY,
            POP_DURATION,
            0.6,
            Easing::EaseOutQuad,
        )?;
        Ok(Self {
            reveal: Reveal::new(RevealConfig::once_with_margin(SECTION_REVEAL_MARGIN)),
            header_stage,
            seq,
            fact_stage,
        })
    }

    pub fn force_settle(&mut self) {
        self.reveal.force_settle();
    }
}

pub fn draw(ui: &mut Ui, state: &mut SkillsState, content: &Skills, frame: &PageFrame) -> bool {
    let t = state.reveal.elapsed(frame.now).unwrap_or(0.0);

    egui::Frame::none()
        .fill(colors::BG_LIGHT)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add_space(SECTION_PADDING);
            crate::ui::centered_content(ui, |ui| {
                section_header(ui, &content.header, &state.header_stage.sample(t));

                // Category cards, two per row
                let container = state.seq.parent_at(t);
                animated_block(ui, &container, |ui| {
                    let mut index = 0;
                    while index < content.categories.len() {
                        ui.columns(2, |cols| {
                            for col in 0..2 {
                                let i = index + col;
                                let Some(category) = content.categories.get(i) else {
                                    break;
                                };
                                let props = state.seq.child_at(i, t);
                                animated_block(&mut cols[col], &props, |ui| {
                                    style::card_frame().show(ui, |ui| {
                                        ui.set_width(ui.available_width());
                                        ui.horizontal(|ui| {
                                            icon_badge(ui, &category.icon);
                                            ui.label(
                                                RichText::new(&category.title)
                                                    .strong()
                                                    .size(17.0),
                                            );
                                        });
                                        ui.add_space(10.0);
                                        ui.horizontal_wrapped(|ui| {
                                            for skill in &category.skills {
                                                style::chip_frame().show(ui, |ui| {
                                                    ui.label(
                                                        RichText::new(skill)
                                                            .size(13.0)
                                                            .color(colors::TEXT_MUTED),
                                                    );
                                                });
                                            }
                                        });
                                    });
                                });
                            }
                        });
                        ui.add_space(CARD_GAP);
                        index += 2;
                    }
                });
                ui.add_space(48.0);

                // Quick-facts strip
                let fact_count = content.quick_facts.len().max(1);
                ui.columns(fact_count, |cols| {
                    for (i, fact) in content.quick_facts.iter().enumerate() {
                        let props = state.fact_stage.sample(t - i as f32 * 0.1);
                        animated_block(&mut cols[i], &props, |ui| {
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new(&fact.icon).size(22.0));
                                ui.label(RichText::new(&fact.value).strong().size(15.0));
                                ui.label(
                                    RichText::new(&fact.label)
                                        .size(13.0)
                                        .color(colors::TEXT_MUTED),
                                );
                            });
                        });
                    }
                });
            });
            ui.add_space(SECTION_PADDING);
        });

    let rect = ui.min_rect();
    state.reveal.observe(rect, frame.viewport, frame.now);

    let tail = 0.6 + (content.quick_facts.len().saturating_sub(1)) as f32 * 0.1 + POP_DURATION;
    state.reveal.is_revealed()
        && (!state.seq.is_settled(t, content.categories.len()) || t < tail)
}
