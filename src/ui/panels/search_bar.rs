// FileScout - ui/panels/search_bar.rs
//
// Search term input with a Search button. Enter in the text box also
// triggers a search. Sets `state.pending_search`; gui.rs starts the walk.

use crate::app::state::AppState;

/// Render the search bar (top panel, below the menu bar).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label("Filename contains:");

        let button_width = 90.0;
        let edit = egui::TextEdit::singleline(&mut state.search_term)
            .hint_text("e.g. report")
            .desired_width((ui.available_width() - button_width).max(120.0));
        let response = ui.add(edit);

        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui
            .add_enabled(!state.search_in_progress, egui::Button::new("Search"))
            .clicked();

        if (enter || clicked) && !state.search_in_progress {
            state.pending_search = true;
        }
    });
}
