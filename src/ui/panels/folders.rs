// FileScout - ui/panels/folders.rs
//
// Left sidebar: registry folder checkboxes (labelled with their priority)
// followed by any ad-hoc folders added through the folder dialog.
//
// Writes `state.folder_selected`, `state.custom_roots` and
// `state.request_add_folder`; gui.rs opens the dialog.

use crate::app::state::AppState;

/// Render the folder selection sidebar.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Folders");
    ui.add_space(4.0);

    let enabled = !state.search_in_progress;
    ui.add_enabled_ui(enabled, |ui| {
        for (folder, selected) in state.folders.iter().zip(state.folder_selected.iter_mut()) {
            ui.checkbox(selected, folder.label())
                .on_hover_text(folder.path.display().to_string());
        }

        ui.horizontal(|ui| {
            if ui.small_button("All").clicked() {
                state.folder_selected.iter_mut().for_each(|s| *s = true);
            }
            if ui.small_button("None").clicked() {
                state.folder_selected.iter_mut().for_each(|s| *s = false);
            }
        });

        ui.add_space(8.0);
        ui.separator();
        ui.label(egui::RichText::new("Other folders").strong());

        let mut remove: Option<usize> = None;
        for (idx, path) in state.custom_roots.iter().enumerate() {
            ui.horizontal(|ui| {
                if ui
                    .small_button("\u{2715}")
                    .on_hover_text("Remove this folder")
                    .clicked()
                {
                    remove = Some(idx);
                }
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                ui.label(name).on_hover_text(path.display().to_string());
            });
        }
        if let Some(idx) = remove {
            state.custom_roots.remove(idx);
        }

        if ui.button("Add Folder\u{2026}").clicked() {
            state.request_add_folder = true;
        }
    });
}
