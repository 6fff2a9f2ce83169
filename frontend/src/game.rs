use crate::store::ClientState;
use egui::Context;
pub mod connection_manager;
pub mod screens;
pub mod table;
pub mod theme;
pub mod websocket;
use connection_manager::ConnectionManager;
use screens::{AppInterface, MainMenu, ScreenWidget};
use theme::*;
use websocket::WebSocketConnection;

/// Events that can be sent between screens
#[derive(Debug, Clone)]
pub enum AppEvent {
    ChangeRoute(String),
    Connect,
    Disconnect,
}

/// Global settings for the application
#[derive(Clone)]
pub struct Settings {
    pub dpi: f32,
    pub applied_dpi: f32,
    pub dark_mode: bool,
}

impl Settings {
    fn apply(&mut self, ctx: &Context) {
        self.applied_dpi = self.dpi;
        ctx.set_pixels_per_point(self.applied_dpi);
        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }
}

/// Application UI/Screen manager
pub struct App {
    // current route path ("/", "/table", "/reports")
    current_screen_path: String,
    // lazily-created screens by path
    screens: std::collections::HashMap<String, Box<dyn ScreenWidget>>,
    // single shared screen registry
    screen_registry: screens::ScreenRegistry,

    // Global settings UI state
    settings_open: bool,
    pending_settings: Settings,
    app_state: ClientState,

    // Transport shared by all screens
    conn: WebSocketConnection,
    connection_manager: ConnectionManager,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            current_screen_path: "/".to_string(),
            screens: std::collections::HashMap::new(),
            screen_registry: screens::ScreenRegistry::new(),
            settings_open: false,
            pending_settings: Settings {
                dpi: crate::calculate_dpi_scale(),
                applied_dpi: crate::calculate_dpi_scale(),
                dark_mode: true,
            },
            app_state: ClientState::new(),
            conn: WebSocketConnection::new(),
            connection_manager: ConnectionManager::new(),
        }
    }

    /// Change route by path
    fn change_route(&mut self, path: &str) {
        let new_path = self.screen_registry.path_from_path(path).unwrap_or("/");
        if self.current_screen_path != new_path {
            self.current_screen_path = new_path.to_string();
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_screen_path
    }
}

impl App {
    fn render_top_bar(&mut self, ctx: &Context, events: &mut Vec<AppEvent>) {
        egui::TopBottomPanel::top("global_top_bar")
            .show_separator_line(false)
            .frame(
                egui::Frame::default()
                    .fill(ctx.style().visuals.window_fill())
                    .inner_margin(egui::Margin::symmetric(0, 8)),
            )
            .show(ctx, |ui| {
                egui::MenuBar::new().ui(ui, |ui| {
                    let avail = ui.available_width();
                    let left_w = NAVBAR_WIDTH_LEFT;
                    let right_w = NAVBAR_WIDTH_RIGHT;
                    let center_w = (avail - left_w - right_w).max(0.0);
                    let row_h = ui.spacing().interact_size.y + NAVBAR_ROW_HEIGHT_EXTRA;

                    ui.allocate_ui_with_layout(
                        egui::vec2(left_w, row_h),
                        egui::Layout::left_to_right(egui::Align::Min),
                        |ui| {
                            ui.add_space(MARGIN_SM);
                            if ui.button("⬅ Back").on_hover_text("Go back").clicked() {
                                events.push(AppEvent::ChangeRoute("/".to_string()));
                            }
                        },
                    );

                    ui.allocate_ui_with_layout(
                        egui::vec2(center_w, row_h),
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            if let Some(meta) =
                                self.screen_registry.meta_by_path(&self.current_screen_path)
                            {
                                ui.strong(meta.display_name);
                            }
                        },
                    );

                    ui.allocate_ui_with_layout(
                        egui::vec2(right_w, row_h),
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.add_space(MARGIN_SM);
                            if ui
                                .button("⚙ Settings")
                                .on_hover_text("Open global settings")
                                .clicked()
                            {
                                self.settings_open = true;
                            }
                        },
                    );
                });
            });

        if self.settings_open {
            let mut open = true;
            egui::Window::new("Settings")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.heading("Global Settings");
                    ui.add_space(MARGIN_SM);
                    ui.label(format!("Version: {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(MARGIN_SM);
                    ui.add(
                        egui::Slider::new(&mut self.pending_settings.dpi, 0.75..=2.0)
                            .text("UI scale (DPI)"),
                    );
                    if ui.button("Reset to default").clicked() {
                        self.pending_settings.dpi = crate::calculate_dpi_scale();
                    }
                    ui.checkbox(&mut self.pending_settings.dark_mode, "Dark mode");
                    ui.add_space(MARGIN_SM);
                    ui.horizontal(|ui| {
                        if ui.button("Apply").clicked() {
                            self.pending_settings.apply(ctx);
                        }
                        if ui.button("OK").clicked() {
                            self.pending_settings.apply(ctx);
                            self.settings_open = false;
                        }
                        if ui.button("Cancel").clicked() {
                            self.pending_settings.dpi = self.pending_settings.applied_dpi;
                            self.settings_open = false;
                        }
                    });
                });
            if !open {
                self.pending_settings.dpi = self.pending_settings.applied_dpi;
                self.settings_open = false;
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        // Drain WebSocket callback queues into the state store
        self.connection_manager
            .dispatch_queued_messages(&mut self.app_state);

        ctx.set_pixels_per_point(self.pending_settings.applied_dpi);
        if self.pending_settings.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        let mut events = Vec::new();

        // show top bar unless root
        if self.current_screen_path != "/" {
            self.render_top_bar(ctx, &mut events);
        }

        // Ensure the screen exists before the panel borrows the map
        if !self.screens.contains_key(&self.current_screen_path) {
            if let Some(factory) = self
                .screen_registry
                .factory_by_path(&self.current_screen_path)
            {
                let boxed = factory();
                self.screens.insert(self.current_screen_path.clone(), boxed);
            }
        }

        let App {
            current_screen_path,
            screens,
            app_state,
            conn,
            ..
        } = self;
        let mut app_interface = AppInterface {
            events: &mut events,
            app_state,
            conn,
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(screen) = screens.get_mut(current_screen_path.as_str()) {
                screen.ui(&mut app_interface, ui, frame);
            } else {
                // fallback: main menu
                let mut mm = MainMenu::new();
                mm.ui(&mut app_interface, ui, frame);
            }
        });
        let events = std::mem::take(app_interface.events);
        for event in events {
            match event {
                AppEvent::ChangeRoute(path) => {
                    self.change_route(&path);
                }
                AppEvent::Connect => {
                    self.connection_manager
                        .connect(&mut self.conn, &mut self.app_state, ctx);
                }
                AppEvent::Disconnect => {
                    self.connection_manager
                        .disconnect(&mut self.conn, &mut self.app_state);
                }
            }
        }

        // Request continuous repaints for real-time updates (WebSocket messages, animations, etc.)
        // This is the standard approach for egui applications that need real-time updates
        ctx.request_repaint();
    }
}
