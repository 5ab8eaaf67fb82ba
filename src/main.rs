mod app;
mod assets;
mod constants;
mod content;
mod counter;
mod easing;
mod reveal;
mod scroll;
mod sequence;
mod ui;

use std::sync::Arc;
use std::time::Instant;

use constants::*;

use glutin::prelude::*;
use glutin::surface::WindowSurface;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

/// Set to any value to skip entrance animations and render the page settled
const REDUCE_MOTION_ENV: &str = "PORTFOLIO_REDUCE_MOTION";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    state: Option<AppState>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    gl: Arc<glow::Context>,
    egui_glow: EguiGlow,

    // Page state
    profile: content::Profile,
    artwork: assets::Artwork,
    page: ui::PageState,

    // Scrolling
    scroll: scroll::ScrollAnimator,
    scroll_offset: f32,

    // Timing
    clock: f32,
    last_frame_time: Instant,
    /// Whether another frame needs to be scheduled (animations live, or
    /// egui itself asked for one). When false the page sits idle until the
    /// next input event - no busy repaint loop.
    needs_repaint: bool,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = app::create_window(event_loop);

        let profile = content::Profile::load();
        let artwork = assets::Artwork::load(&egui_glow.egui_ctx, &profile);

        let mut page = ui::PageState::new(&profile).expect("section animation configs are valid");
        if std::env::var_os(REDUCE_MOTION_ENV).is_some() {
            log::info!("{} set, rendering settled page", REDUCE_MOTION_ENV);
            page.force_settle();
        }

        self.state = Some(AppState {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
            profile,
            artwork,
            page,
            scroll: scroll::ScrollAnimator::new(),
            scroll_offset: 0.0,
            clock: 0.0,
            last_frame_time: Instant::now(),
            needs_repaint: true,
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // Let egui handle the event first
        let egui_consumed = state.egui_glow.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
                // Anchor targets move with the layout
                state.scroll.cancel();
                state.window.request_redraw();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !egui_consumed.consumed {
                    if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                        event_loop.exit();
                    }
                }
                state.window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
                if state.needs_repaint {
                    state.window.request_redraw();
                }
            }
            _ => {
                // Input may change hover/scroll state; draw one more frame
                if egui_consumed.repaint {
                    state.window.request_redraw();
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            if state.needs_repaint {
                state.window.request_redraw();
            }
        }
    }
}

impl AppState {
    fn update_and_render(&mut self) {
        puffin::profile_function!();

        let current_time = Instant::now();
        let raw_dt = (current_time - self.last_frame_time).as_secs_f32();
        self.last_frame_time = current_time;

        // Cap dt to prevent animation snapping after long frames
        let dt = raw_dt.min(MAX_ANIMATION_DT);
        self.clock += dt;

        // Advance any anchor scroll animation
        let scroll_override = self.scroll.tick(self.scroll_offset, dt);

        let page = &mut self.page;
        let profile = &self.profile;
        let artwork = &self.artwork;
        let clock = self.clock;
        let mut out = ui::PageOutput::default();

        self.egui_glow.run(&self.window, |ctx| {
            out = ui::draw_page(ctx, page, profile, artwork, clock, dt, scroll_override);
        });

        self.scroll_offset = out.offset;

        // Manual scrolling overrides the anchor animation
        if out.user_scrolled {
            self.scroll.cancel();
        }

        if let Some(section) = out.actions.scroll_to {
            if let Some(anchor) = self.page.anchor(section) {
                let target = if section == ui::SectionId::Home {
                    0.0
                } else {
                    anchor - NAV_SCROLL_OFFSET
                };
                self.scroll.jump_to(target);
            }
        }

        self.needs_repaint = out.animating
            || self.scroll.is_animating()
            || self.egui_glow.egui_ctx.has_requested_repaint();

        // Render
        {
            puffin::profile_scope!("render");
            unsafe {
                use glow::HasContext;
                self.gl.clear_color(0.04, 0.04, 0.06, 1.0);
                self.gl.clear(glow::COLOR_BUFFER_BIT);
            }
            self.egui_glow.paint(&self.window);
            self.gl_surface.swap_buffers(&self.gl_context).unwrap();
        }
    }
}
