// FileScout - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and manages the search lifecycle.

use crate::app::search::SearchManager;
use crate::app::state::{AppState, PreviewPane};
use crate::platform::shell::{Launcher, ShellAction};
use crate::ui;

/// The FileScout application.
pub struct FileScoutApp {
    pub state: AppState,
    pub search_manager: SearchManager,
    pub launcher: Launcher,
}

impl FileScoutApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            search_manager: SearchManager::new(),
            launcher: Launcher::new(),
        }
    }

    /// Consume the request flags panels set during the previous frame.
    fn handle_requests(&mut self) {
        if std::mem::take(&mut self.state.pending_search) {
            let id = self.search_manager.next_request_id();
            if let Some(request) = self.state.begin_search(id) {
                self.search_manager
                    .start_search(request, Some(self.state.max_results));
            }
        }

        if std::mem::take(&mut self.state.request_cancel) {
            self.search_manager.cancel_search();
        }

        if std::mem::take(&mut self.state.request_add_folder) {
            if let Some(path) = rfd::FileDialog::new().pick_folder() {
                self.state.add_custom_root(path);
            }
        }

        if let Some(path) = self.state.pending_preview.take() {
            self.state.load_preview(&path);
        }
        if let Some(path) = self.state.pending_open.take() {
            self.launcher.launch(ShellAction::Open, path);
        }
        if let Some(path) = self.state.pending_reveal.take() {
            self.launcher.launch(ShellAction::Reveal, path);
        }
    }
}

impl eframe::App for FileScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for search progress
        let messages = self.search_manager.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            self.state.apply_progress(msg);
        }
        // Repaint while a search is active so progress updates appear promptly.
        if had_messages || self.state.search_in_progress {
            ctx.request_repaint();
        }

        for outcome in self.launcher.poll() {
            self.state.report_launch(outcome);
        }
        if self.launcher.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }

        self.handle_requests();

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Add Folder\u{2026}").clicked() {
                        self.state.request_add_folder = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("History", |ui| {
                    if self.state.search_history.is_empty() {
                        ui.label(egui::RichText::new("No recent searches").weak());
                    }
                    let mut chosen: Option<String> = None;
                    for term in &self.state.search_history {
                        if ui.button(term).clicked() {
                            chosen = Some(term.clone());
                            ui.close_menu();
                        }
                    }
                    if let Some(term) = chosen {
                        self.state.search_term = term;
                    }
                });
                ui.menu_button("View", |ui| {
                    let has_preview =
                        !matches!(self.state.preview, PreviewPane::Empty);
                    ui.add_enabled_ui(has_preview, |ui| {
                        if ui.button("Clear Preview").clicked() {
                            self.state.clear_preview();
                            ui.close_menu();
                        }
                    });
                    let theme_label = if self.state.dark_mode {
                        "Light Theme"
                    } else {
                        "Dark Theme"
                    };
                    if ui.button(theme_label).clicked() {
                        self.state.dark_mode = !self.state.dark_mode;
                        ctx.set_visuals(if self.state.dark_mode {
                            egui::Visuals::dark()
                        } else {
                            egui::Visuals::light()
                        });
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Search bar
        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::panels::search_bar::render(ui, &mut self.state);
            ui.add_space(4.0);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.search_in_progress {
                    ui.spinner();
                }
                ui.label(&self.state.status_message);
                // Cancel button visible only while a search is running
                if self.state.search_in_progress && ui.small_button("Cancel").clicked() {
                    self.state.request_cancel = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.results.len();
                    if total > 0 {
                        ui.label(format!("{total} results"));
                    }
                });
            });
        });

        // Left sidebar: folder selection
        egui::SidePanel::left("folders")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_folders")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui::panels::folders::render(ui, &mut self.state);
                    });
            });

        // Right side: preview pane
        egui::SidePanel::right("preview_pane")
            .default_width(ui::theme::PREVIEW_PANE_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::panels::preview::render(ui, &mut self.state);
            });

        // Central panel (result table)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::results::render(ui, &mut self.state);
        });

        // Dialogs
        ui::panels::about::render(ctx, &mut self.state);
        ui::panels::notice::render(ctx, &mut self.state);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.search_manager.cancel_search();
        tracing::info!("FileScout exiting");
    }
}
