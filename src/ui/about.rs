//! About section: expertise rows, bio paragraphs, and the animated stats grid.

use egui::{vec2, RichText, Ui};

use crate::constants::*;
use crate::content::{About, StatValue};
use crate::counter::Counter;
use crate::easing::{Easing, EASE_OUT_EXPO};
use crate::reveal::{Reveal, RevealConfig};
use crate::sequence::{AnimationStage, PropertySet, SequenceConfig};
use crate::ui::style::{self, colors};
use crate::ui::{animated_block, icon_badge, scaled_tile, PageFrame};

/// Child order in the text column: kicker, heading, paragraphs; the stats
/// grid is the fourth child of the container sequence.
const CHILD_COUNT: usize = 4;

/// One stat cell: its own reveal (each counter starts when its tile shows)
/// and a counter for whole-number stats. Fractional stats render literally.
struct StatTile {
    reveal: Reveal,
    counter: Option<Counter>,
}

pub struct AboutState {
    reveal: Reveal,
    seq: SequenceConfig,
    expertise_stage: AnimationStage,
    stat_stage: AnimationStage,
    stats: Vec<StatTile>,
}

impl AboutState {
    pub fn new(content: &About) -> Result<Self, String> {
        let seq = SequenceConfig::fade_and_rise(ITEM_RISE, ITEM_DURATION, EASE_OUT_EXPO, 0.15, 0.0)?;
        let expertise_stage = AnimationStage::new(
            PropertySet::below(20.0),
            PropertySet::IDENTITY,
            0.5,
            0.0,
            Easing::EaseOutQuad,
        )?;
        let stat_stage = AnimationStage::new(
            PropertySet::shrunk(POP_START_SCALE),
            PropertySet::IDENTITY,
            POP_DURATION,
            0.3,
            Easing::EaseOutQuad,
        )?;

        let mut stats = Vec::with_capacity(content.stats.len());
        for stat in &content.stats {
            let counter = match &stat.value {
                StatValue::Animated { end, suffix } => {
                    Some(Counter::new(*end, suffix.clone(), COUNTER_DURATION)?)
                }
                StatValue::Literal { .. } => None,
            };
            stats.push(StatTile {
                reveal: Reveal::new(RevealConfig::once()),
                counter,
            });
        }

        Ok(Self {
            reveal: Reveal::new(RevealConfig::once_with_margin(SECTION_REVEAL_MARGIN)),
            seq,
            expertise_stage,
            stat_stage,
            stats,
        })
    }

    pub fn force_settle(&mut self) {
        self.reveal.force_settle();
        for tile in &mut self.stats {
            tile.reveal.force_settle();
            if let Some(counter) = &mut tile.counter {
                counter.force_settle();
            }
        }
    }
}

pub fn draw(ui: &mut Ui, state: &mut AboutState, content: &About, frame: &PageFrame) -> bool {
    let t = state.reveal.elapsed(frame.now).unwrap_or(0.0);

    ui.add_space(SECTION_PADDING);
    crate::ui::centered_content(ui, |ui| {
        // Expertise rows
        let row_count = content.expertise.len().max(1);
        ui.columns(row_count, |cols| {
            for (i, area) in content.expertise.iter().enumerate() {
                let props = state.expertise_stage.sample(t - i as f32 * 0.1);
                animated_block(&mut cols[i], &props, |ui| {
                    style::card_frame().show(ui, |ui| {
                        ui.horizontal(|ui| {
                            icon_badge(ui, &area.icon);
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&area.title).strong().size(15.0));
                                ui.label(
                                    RichText::new(&area.desc)
                                        .size(13.0)
                                        .color(colors::TEXT_MUTED),
                                );
                            });
                        });
                    });
                });
            }
        });
        ui.add_space(48.0);

        let container = state.seq.parent_at(t);
        animated_block(ui, &container, |ui| {
            ui.columns(2, |cols| {
                draw_text_column(&mut cols[0], state, content, t);
                draw_stats_grid(&mut cols[1], state, content, frame, t);
            });
        });
    });
    ui.add_space(SECTION_PADDING);

    let rect = ui.min_rect();
    state.reveal.observe(rect, frame.viewport, frame.now);

    let tail = 0.3 + (state.stats.len().saturating_sub(1)) as f32 * 0.1 + POP_DURATION;
    let entrance_live =
        state.reveal.is_revealed() && (!state.seq.is_settled(t, CHILD_COUNT) || t < tail);
    let counters_live = state
        .stats
        .iter()
        .any(|tile| tile.counter.as_ref().is_some_and(|c| c.is_animating()));
    entrance_live || counters_live
}

fn draw_text_column(ui: &mut Ui, state: &AboutState, content: &About, t: f32) {
    let props = state.seq.child_at(0, t);
    animated_block(ui, &props, |ui| {
        ui.label(
            RichText::new(&content.kicker)
                .color(colors::PRIMARY)
                .monospace()
                .size(13.0),
        );
    });
    ui.add_space(12.0);

    let props = state.seq.child_at(1, t);
    animated_block(ui, &props, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label(RichText::new(&content.title).size(30.0).strong());
            ui.label(
                RichText::new(&content.title_accent)
                    .size(30.0)
                    .strong()
                    .color(colors::PRIMARY),
            );
            ui.label(RichText::new(&content.title_rest).size(30.0).strong());
        });
    });
    ui.add_space(20.0);

    let props = state.seq.child_at(2, t);
    animated_block(ui, &props, |ui| {
        for (i, paragraph) in content.paragraphs.iter().enumerate() {
            // Lead paragraph reads brighter than the rest
            let (size, color) = if i == 0 {
                (15.0, colors::TEXT_PRIMARY)
            } else {
                (14.0, colors::TEXT_MUTED)
            };
            ui.label(RichText::new(paragraph).size(size).color(color));
            ui.add_space(12.0);
        }
    });
}

fn draw_stats_grid(
    ui: &mut Ui,
    state: &mut AboutState,
    content: &About,
    frame: &PageFrame,
    t: f32,
) {
    let props = state.seq.child_at(3, t);
    animated_block(ui, &props, |ui| {
        let cell_width = (ui.available_width() - CARD_GAP) / 2.0;
        let mut index = 0;
        while index < content.stats.len() {
            ui.horizontal(|ui| {
                for col in 0..2 {
                    let i = index + col;
                    let Some(stat) = content.stats.get(i) else {
                        break;
                    };
                    let tile_props = state.stat_stage.sample(t - i as f32 * 0.1);
                    let tile = &mut state.stats[i];
                    let rect = scaled_tile(
                        ui,
                        vec2(cell_width, STAT_TILE_HEIGHT),
                        &tile_props,
                        |ui| {
                            style::card_frame().show(ui, |ui| {
                                // Scale the frame with the pop-in
                                ui.set_min_size(
                                    vec2(
                                        cell_width - 2.0 * CARD_MARGIN,
                                        STAT_TILE_HEIGHT - 2.0 * CARD_MARGIN,
                                    ) * tile_props.scale,
                                );
                                icon_badge(ui, &stat.icon);
                                ui.add_space(8.0);
                                let text = match (&stat.value, &tile.counter) {
                                    (_, Some(counter)) => counter.display(),
                                    (StatValue::Literal { text }, None) => text.clone(),
                                    // A counter exists for every animated stat
                                    (StatValue::Animated { end, suffix }, None) => {
                                        format!("{end}{suffix}")
                                    }
                                };
                                ui.label(RichText::new(text).size(30.0).strong());
                                ui.label(
                                    RichText::new(&stat.label)
                                        .size(13.0)
                                        .color(colors::TEXT_MUTED),
                                );
                            });
                        },
                    );

                    tile.reveal.observe(rect, frame.viewport, frame.now);
                    if let Some(counter) = &mut tile.counter {
                        if tile.reveal.is_revealed() {
                            counter.trigger();
                        }
                        counter.advance(frame.dt);
                    }
                }
            });
            index += 2;
        }
    });
}
