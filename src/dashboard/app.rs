//! Studio application entry point

use eframe::egui;
use tracing::debug;

use crate::config::WindowSettings;
use crate::coordinator::UiCoordinator;
use crate::dashboard::components::render_sidebar;
use crate::dashboard::surface::RenderSurface;
use crate::dashboard::theme::{self, ThemeColors};
use crate::dashboard::views::{render_drawer, render_visible_view, ViewContext};
use crate::shared::{DisplayMode, InputEvent};
use crate::shortcuts::Key;

/// The main studio application
pub struct StudioApp {
    /// The single owner of UI state
    coordinator: UiCoordinator,
    /// Render-side mirror of coordinator instructions
    surface: RenderSurface,
    /// Input events queued while drawing this frame
    outbox: Vec<InputEvent>,
    /// Dashboard search text
    search_query: String,
    /// Window settings
    window: WindowSettings,
    /// Whether theme has been applied
    theme_applied: bool,
}

impl StudioApp {
    /// Create the app and sync the surface with the coordinator's initial state
    pub fn new(coordinator: UiCoordinator, window: WindowSettings) -> Self {
        let mut surface = RenderSurface::default();
        coordinator.render_all(&mut surface);

        Self {
            coordinator,
            surface,
            outbox: Vec::new(),
            search_query: String::new(),
            window,
            theme_applied: false,
        }
    }

    /// Create eframe options for the studio window
    pub fn options(window: &WindowSettings) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([window.width, window.height])
                .with_min_inner_size([window.min_width, window.min_height])
                .with_title(window.title.clone()),
            ..Default::default()
        }
    }

    /// Forward this frame's key presses to the coordinator. Keys whose default
    /// handling was suppressed have their text input removed.
    fn process_keys(&mut self, ctx: &egui::Context) {
        let keys: Vec<Key> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key { key, pressed: true, .. } => Some(translate_key(*key)),
                    _ => None,
                })
                .collect()
        });

        for key in keys {
            let typed = match &key {
                Key::Char(c) => Some(*c),
                _ => None,
            };
            self.coordinator
                .dispatch(InputEvent::KeyPressed { key }, &mut self.surface);

            if self.surface.take_default_prevented() {
                if let Some(c) = typed {
                    debug!("Suppressing text input for '{}'", c);
                    ctx.input_mut(|i| {
                        i.events.retain(|event| {
                            !matches!(event, egui::Event::Text(text)
                                if text.chars().all(|t| t.to_ascii_lowercase() == c))
                        })
                    });
                }
            }
        }
    }

    /// Dispatch every event queued by the views
    fn flush_events(&mut self) {
        for event in self.outbox.drain(..) {
            self.coordinator.dispatch(event, &mut self.surface);
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        // Keys first, so a suppressed character never reaches a text field
        self.process_keys(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&self.window.title)
                        .size(13.0)
                        .color(ThemeColors::TEXT_MUTED),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.coordinator.drawer_element().is_some() && ui.button("Evidence").clicked() {
                        self.outbox.push(InputEvent::DrawerToggleClicked);
                    }
                });
            });
        });

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                render_sidebar(ui, &self.coordinator, &self.surface, &mut self.outbox);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::none().inner_margin(24.0).show(ui, |ui| {
                let mut cx = ViewContext {
                    coordinator: &self.coordinator,
                    surface: &mut self.surface,
                    outbox: &mut self.outbox,
                    search_query: &mut self.search_query,
                };
                render_visible_view(ui, &mut cx);
            });
        });

        if let Some(drawer) = self.coordinator.drawer_element() {
            if self.surface.display(drawer) == DisplayMode::Flex {
                render_drawer(ctx, drawer, &mut self.outbox);
            }
        }

        if !self.outbox.is_empty() {
            self.flush_events();
            ctx.request_repaint();
        }
    }
}

/// Map an egui key to the coordinator's key identity
fn translate_key(key: egui::Key) -> Key {
    match key {
        egui::Key::Escape => Key::Escape,
        egui::Key::Slash => Key::Char('/'),
        egui::Key::Enter => Key::Enter,
        egui::Key::Tab => Key::Tab,
        egui::Key::Backspace => Key::Backspace,
        other => Key::from(other.name().to_string()),
    }
}

/// Run the studio window
pub fn run_dashboard(coordinator: UiCoordinator, window: WindowSettings) -> Result<(), eframe::Error> {
    let options = StudioApp::options(&window);
    let title = window.title.clone();
    let app = StudioApp::new(coordinator, window);
    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))
}
