//! Projects section: a featured card spanning the grid, three standard
//! cards, and a trailing view-all link.

use egui::{pos2, vec2, Color32, Rect, RichText, Rounding, Stroke, Ui};

use crate::constants::*;
use crate::content::{Project, Projects};
use crate::easing::EASE_OUT_EXPO;
use crate::reveal::{Reveal, RevealConfig};
use crate::sequence::{AnimationStage, PropertySet, SequenceConfig};
use crate::ui::style::{self, colors};
use crate::ui::{animated_block, section_header, PageFrame};

pub struct ProjectsState {
    reveal: Reveal,
    header_stage: AnimationStage,
    seq: SequenceConfig,
    link_stage: AnimationStage,
}

impl ProjectsState {
    pub fn new() -> Result<Self, String> {
        let header_stage = AnimationStage::new(
            PropertySet::below(ITEM_RISE),
            PropertySet::IDENTITY,
            ITEM_DURATION,
            0.0,
            EASE_OUT_EXPO,
        )?;
        let seq = SequenceConfig::fade_and_rise(ITEM_RISE, ITEM_DURATION, EASE_OUT_EXPO, 0.15, 0.0)?;
        let link_stage = AnimationStage::new(
            PropertySet::below(20.0),
            PropertySet::IDENTITY,
            ITEM_DURATION,
            0.6,
            EASE_OUT_EXPO,
        )?;
        Ok(Self {
            reveal: Reveal::new(RevealConfig::once_with_margin(SECTION_REVEAL_MARGIN)),
            header_stage,
            seq,
            link_stage,
        })
    }

    pub fn force_settle(&mut self) {
        self.reveal.force_settle();
    }
}

pub fn draw(ui: &mut Ui, state: &mut ProjectsState, content: &Projects, frame: &PageFrame) -> bool {
    let t = state.reveal.elapsed(frame.now).unwrap_or(0.0);

    ui.add_space(SECTION_PADDING);
    crate::ui::centered_content(ui, |ui| {
        section_header(ui, &content.header, &state.header_stage.sample(t));

        // Featured cards span the full grid width; the rest pair up
        let container = state.seq.parent_at(t);
        animated_block(ui, &container, |ui| {
            let mut child_index = 0;
            let mut queue: Vec<&Project> = Vec::new();
            for project in &content.entries {
                if project.featured {
                    flush_pair(ui, state, frame, &mut queue, &mut child_index, t);
                    let props = state.seq.child_at(child_index, t);
                    child_index += 1;
                    animated_block(ui, &props, |ui| {
                        project_card(ui, project, frame, true);
                    });
                    ui.add_space(CARD_GAP);
                } else {
                    queue.push(project);
                    if queue.len() == 2 {
                        flush_pair(ui, state, frame, &mut queue, &mut child_index, t);
                    }
                }
            }
            flush_pair(ui, state, frame, &mut queue, &mut child_index, t);
        });

        ui.add_space(32.0);

        // View-all link
        let props = state.link_stage.sample(t);
        animated_block(ui, &props, |ui| {
            crate::ui::centered_row(ui, 280.0, |ui| {
                let button = egui::Button::new(
                    RichText::new(format!("{} ↗", content.view_all.label))
                        .size(14.0)
                        .color(Color32::WHITE),
                )
                .fill(colors::WHITE_FAINT)
                .stroke(Stroke::new(1.0, colors::BORDER))
                .rounding(Rounding::same(CARD_ROUNDING))
                .min_size(vec2(260.0, 44.0));
                if ui.add(button).clicked() {
                    ui.ctx()
                        .open_url(egui::OpenUrl::new_tab(&content.view_all.url));
                }
            });
        });
    });
    ui.add_space(SECTION_PADDING);

    let rect = ui.min_rect();
    state.reveal.observe(rect, frame.viewport, frame.now);

    state.reveal.is_revealed()
        && (!state.seq.is_settled(t, content.entries.len()) || !state.link_stage.is_done(t))
}

/// Draw up to two queued non-featured cards side by side
fn flush_pair(
    ui: &mut Ui,
    state: &ProjectsState,
    frame: &PageFrame,
    queue: &mut Vec<&Project>,
    child_index: &mut usize,
    t: f32,
) {
    if queue.is_empty() {
        return;
    }
    let pair: Vec<&Project> = queue.drain(..).collect();
    ui.columns(2, |cols| {
        for (col, project) in pair.iter().copied().enumerate() {
            let props = state.seq.child_at(*child_index + col, t);
            animated_block(&mut cols[col], &props, |ui| {
                project_card(ui, project, frame, false);
            });
        }
    });
    *child_index += pair.len();
    ui.add_space(CARD_GAP);
}

fn project_card(ui: &mut Ui, project: &Project, frame: &PageFrame, featured: bool) {
    style::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        // Artwork strip (gradient placeholder when no image is on disk)
        let image_height = if featured { 220.0 } else { 140.0 };
        let (image_rect, _) = ui.allocate_exact_size(
            vec2(ui.available_width(), image_height),
            egui::Sense::hover(),
        );
        paint_card_image(ui, project, frame, image_rect);
        if let Some(badge) = &project.badge {
            paint_badge(ui, image_rect, badge);
        }
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if let Some(icon) = &project.icon {
                ui.label(RichText::new(icon).size(22.0));
            }
            ui.label(RichText::new(&project.title).strong().size(if featured {
                22.0
            } else {
                18.0
            }));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(demo) = &project.demo {
                    let b = egui::Button::new(RichText::new("↗").size(14.0))
                        .fill(colors::PRIMARY)
                        .rounding(Rounding::same(CHIP_ROUNDING));
                    if ui.add(b).on_hover_text("View Demo").clicked() {
                        ui.ctx().open_url(egui::OpenUrl::new_tab(demo));
                    }
                }
                if let Some(source) = &project.source {
                    let b = egui::Button::new(RichText::new("⌨").size(14.0))
                        .fill(colors::WHITE_FAINT)
                        .rounding(Rounding::same(CHIP_ROUNDING));
                    if ui.add(b).on_hover_text("View Source").clicked() {
                        ui.ctx().open_url(egui::OpenUrl::new_tab(source));
                    }
                }
            });
        });
        ui.add_space(8.0);

        ui.label(
            RichText::new(&project.description)
                .size(14.0)
                .color(colors::TEXT_MUTED),
        );
        ui.add_space(10.0);

        ui.horizontal_wrapped(|ui| {
            for tech in &project.tech {
                egui::Frame::none()
                    .fill(colors::PRIMARY_FAINT)
                    .rounding(Rounding::same(12.0))
                    .inner_margin(egui::Margin::symmetric(10.0, 4.0))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(tech)
                                .size(12.0)
                                .monospace()
                                .color(colors::PRIMARY),
                        );
                    });
            }
        });
    });
}

fn paint_card_image(ui: &Ui, project: &Project, frame: &PageFrame, rect: Rect) {
    let painter = ui.painter();
    if let Some(texture) = frame.artwork.project(project.image.as_deref()) {
        painter.image(
            texture.id(),
            rect,
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::WHITE,
        );
        // Fade the artwork into the card so the title row sits on solid color
        let mut mesh = egui::Mesh::default();
        let clear = Color32::from_rgba_unmultiplied(22, 22, 31, 0);
        mesh.colored_vertex(rect.left_top(), clear);
        mesh.colored_vertex(rect.right_top(), clear);
        mesh.colored_vertex(rect.right_bottom(), colors::CARD);
        mesh.colored_vertex(rect.left_bottom(), colors::CARD);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        painter.add(egui::Shape::mesh(mesh));
    } else {
        // Placeholder gradient
        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(rect.left_top(), colors::PRIMARY_FAINT);
        mesh.colored_vertex(rect.right_top(), colors::CARD);
        mesh.colored_vertex(rect.right_bottom(), colors::PRIMARY_FAINT);
        mesh.colored_vertex(rect.left_bottom(), colors::CARD);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        painter.add(egui::Shape::mesh(mesh));
    }
}

fn paint_badge(ui: &Ui, image_rect: Rect, badge: &str) {
    let painter = ui.painter();
    let text = format!("✦ {}", badge);
    let font = egui::FontId::proportional(13.0);
    let galley = painter.layout_no_wrap(text, font, Color32::WHITE);
    let pad = vec2(10.0, 5.0);
    let badge_rect = Rect::from_min_size(
        image_rect.left_top() + vec2(12.0, 12.0),
        galley.size() + pad * 2.0,
    );
    painter.rect_filled(badge_rect, Rounding::same(12.0), colors::PRIMARY);
    painter.galley(badge_rect.min + pad, galley, Color32::WHITE);
}
