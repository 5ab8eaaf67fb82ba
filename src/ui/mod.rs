//! Page rendering.
//!
//! The page is one vertical scroll area of sections. Each section owns its
//! reveal trigger and entrance sequence, draws itself every frame by
//! sampling the sequence at the time since its reveal fired, and reports
//! whether anything is still animating so the frame loop knows when it can
//! stop scheduling repaints.

pub mod style;

mod about;
mod contact;
mod education;
mod footer;
mod hero;
mod projects;
mod skills;

use std::collections::HashMap;

use egui::{Rect, RichText, Ui, UiBuilder};

use crate::assets::Artwork;
use crate::constants::*;
use crate::content::{Profile, SectionHeader};
use crate::sequence::PropertySet;
use style::colors;

/// In-page anchor targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Education,
    Contact,
}

impl SectionId {
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        match anchor {
            "home" => Some(Self::Home),
            "about" => Some(Self::About),
            "skills" => Some(Self::Skills),
            "projects" => Some(Self::Projects),
            "education" => Some(Self::Education),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }
}

/// Actions the page wants the app to perform
#[derive(Default)]
pub struct UiActions {
    pub scroll_to: Option<SectionId>,
}

/// Per-frame context shared by every section
pub struct PageFrame<'a> {
    /// Page time in seconds (monotonic, dt-accumulated)
    pub now: f32,
    /// Capped frame delta
    pub dt: f32,
    /// Visible viewport in screen coordinates
    pub viewport: Rect,
    pub artwork: &'a Artwork,
}

/// All animation state owned by the page
pub struct PageState {
    hero: hero::HeroState,
    about: about::AboutState,
    skills: skills::SkillsState,
    projects: projects::ProjectsState,
    education: education::EducationState,
    contact: contact::ContactState,
    footer: footer::FooterState,
    /// Content-space top of each section, recorded during layout
    anchors: HashMap<SectionId, f32>,
}

impl PageState {
    pub fn new(profile: &Profile) -> Result<Self, String> {
        Ok(Self {
            hero: hero::HeroState::new()?,
            about: about::AboutState::new(&profile.about)?,
            skills: skills::SkillsState::new()?,
            projects: projects::ProjectsState::new()?,
            education: education::EducationState::new()?,
            contact: contact::ContactState::new()?,
            footer: footer::FooterState::new()?,
            anchors: HashMap::new(),
        })
    }

    /// Content-space scroll offset of a section, if it has been laid out
    pub fn anchor(&self, id: SectionId) -> Option<f32> {
        self.anchors.get(&id).copied()
    }

    /// Pin every reveal and counter to its settled state (reduced motion:
    /// the page renders fully formed with no entrance animations)
    pub fn force_settle(&mut self) {
        self.hero.force_settle();
        self.about.force_settle();
        self.skills.force_settle();
        self.projects.force_settle();
        self.education.force_settle();
        self.contact.force_settle();
        self.footer.force_settle();
    }
}

#[derive(Default)]
pub struct PageOutput {
    pub actions: UiActions,
    /// True while any reveal sequence, counter, or looping effect is live
    pub animating: bool,
    /// The scroll offset after this frame
    pub offset: f32,
    /// The user scrolled manually this frame (cancels anchor animation)
    pub user_scrolled: bool,
}

/// Draw the whole page. `scroll_override` pins the scroll offset while an
/// anchor animation is running.
pub fn draw_page(
    ctx: &egui::Context,
    state: &mut PageState,
    profile: &Profile,
    artwork: &Artwork,
    now: f32,
    dt: f32,
    scroll_override: Option<f32>,
) -> PageOutput {
    puffin::profile_function!();

    let mut out = PageOutput::default();

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(colors::BG))
        .show(ctx, |ui| {
            let mut area = egui::ScrollArea::vertical()
                .id_salt("page")
                .auto_shrink([false, false]);
            if let Some(offset) = scroll_override {
                area = area.vertical_scroll_offset(offset);
            }

            let output = area.show(ui, |ui| {
                let viewport = ui.clip_rect();
                let content_top = ui.max_rect().top();
                let frame = PageFrame {
                    now,
                    dt,
                    viewport,
                    artwork,
                };

                let r = ui.scope(|ui| {
                    hero::draw(ui, &mut state.hero, &profile.hero, &frame, &mut out.actions)
                });
                out.animating |= r.inner;
                state
                    .anchors
                    .insert(SectionId::Home, r.response.rect.top() - content_top);

                let r = ui.scope(|ui| about::draw(ui, &mut state.about, &profile.about, &frame));
                out.animating |= r.inner;
                state
                    .anchors
                    .insert(SectionId::About, r.response.rect.top() - content_top);

                let r = ui.scope(|ui| skills::draw(ui, &mut state.skills, &profile.skills, &frame));
                out.animating |= r.inner;
                state
                    .anchors
                    .insert(SectionId::Skills, r.response.rect.top() - content_top);

                let r = ui
                    .scope(|ui| projects::draw(ui, &mut state.projects, &profile.projects, &frame));
                out.animating |= r.inner;
                state
                    .anchors
                    .insert(SectionId::Projects, r.response.rect.top() - content_top);

                let r = ui.scope(|ui| {
                    education::draw(ui, &mut state.education, &profile.education, &frame)
                });
                out.animating |= r.inner;
                state
                    .anchors
                    .insert(SectionId::Education, r.response.rect.top() - content_top);

                let r = ui
                    .scope(|ui| contact::draw(ui, &mut state.contact, &profile.contact, &frame));
                out.animating |= r.inner;
                state
                    .anchors
                    .insert(SectionId::Contact, r.response.rect.top() - content_top);

                let r = ui.scope(|ui| {
                    footer::draw(
                        ui,
                        &mut state.footer,
                        &profile.footer,
                        &frame,
                        &mut out.actions,
                    )
                });
                out.animating |= r.inner;
            });

            out.offset = output.state.offset.y;
        });

    out.user_scrolled = ctx.input(|i| i.raw_scroll_delta.y != 0.0);
    out
}

// =============================================================================
// ANIMATED LAYOUT HELPERS
// =============================================================================

/// Draw `add` in a child scope with the sequencer's opacity and translation
/// applied. The parent cursor advances by the untranslated footprint, so
/// later content does not jitter while an element slides in.
pub fn animated_block<R>(ui: &mut Ui, props: &PropertySet, add: impl FnOnce(&mut Ui) -> R) -> R {
    let offset = egui::vec2(props.translate_x, props.translate_y);
    let child_rect = ui.available_rect_before_wrap().translate(offset);
    let mut child = ui.new_child(UiBuilder::new().max_rect(child_rect).layout(*ui.layout()));
    child.set_opacity(props.opacity);
    let result = add(&mut child);
    let used = child.min_rect().translate(-offset);
    ui.allocate_rect(used, egui::Sense::hover());
    result
}

/// Draw a fixed-size tile with the full property set applied, including
/// scale (the cell keeps its layout size; the visual rect shrinks around
/// its center during the pop-in). Returns the layout rect.
pub fn scaled_tile(
    ui: &mut Ui,
    size: egui::Vec2,
    props: &PropertySet,
    add: impl FnOnce(&mut Ui),
) -> Rect {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let center = rect.center() + egui::vec2(props.translate_x, props.translate_y);
    let visual = Rect::from_center_size(center, rect.size() * props.scale);
    let layout = egui::Layout::top_down(egui::Align::Min);
    let mut child = ui.new_child(UiBuilder::new().max_rect(visual).layout(layout));
    child.set_opacity(props.opacity);
    add(&mut child);
    rect
}

/// Center the page column within the window
pub fn centered_content<R>(ui: &mut Ui, add: impl FnOnce(&mut Ui) -> R) -> R {
    let available = ui.available_width();
    let width = available.min(MAX_CONTENT_WIDTH);
    let pad = ((available - width) * 0.5).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(pad);
        ui.vertical(|ui| {
            ui.set_width(width);
            add(ui)
        })
        .inner
    })
    .inner
}

/// Center a row of roughly `content_width` within the available width
pub fn centered_row<R>(ui: &mut Ui, content_width: f32, add: impl FnOnce(&mut Ui) -> R) -> R {
    let pad = ((ui.available_width() - content_width) * 0.5).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(pad);
        add(ui)
    })
    .inner
}

/// Kicker line, two-tone title, and subtitle, centered - the shared header
/// shape of the skills/projects/education/contact sections.
pub fn section_header(ui: &mut Ui, header: &SectionHeader, props: &PropertySet) {
    animated_block(ui, props, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&header.kicker)
                    .color(colors::PRIMARY)
                    .monospace()
                    .size(13.0),
            );
            ui.add_space(8.0);
            heading_two_tone(ui, 34.0, &header.title, &header.title_accent, "");
            ui.add_space(8.0);
            ui.label(
                RichText::new(&header.subtitle)
                    .color(colors::TEXT_MUTED)
                    .size(15.0),
            );
        });
    });
    ui.add_space(48.0);
}

/// A heading whose accent segment takes the primary color
pub fn heading_two_tone(ui: &mut Ui, size: f32, left: &str, accent: &str, right: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        let est = estimate_text_width(left, size)
            + estimate_text_width(accent, size)
            + estimate_text_width(right, size);
        let pad = ((ui.available_width() - est) * 0.5).max(0.0);
        ui.add_space(pad);
        if !left.is_empty() {
            ui.label(RichText::new(left).size(size).strong());
        }
        if !accent.is_empty() {
            ui.label(
                RichText::new(accent)
                    .size(size)
                    .strong()
                    .color(colors::PRIMARY),
            );
        }
        if !right.is_empty() {
            ui.label(RichText::new(right).size(size).strong());
        }
    });
}

/// Rough pixel width of proportional text (good enough for centering)
pub fn estimate_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.55
}

/// The translucent icon badge used across cards
pub fn icon_badge(ui: &mut Ui, icon: &str) {
    style::icon_badge_frame().show(ui, |ui| {
        ui.label(RichText::new(icon).size(20.0));
    });
}
