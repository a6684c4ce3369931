// FileScout - ui/panels/notice.rs
//
// Modal notice window for validation, preview and launch messages.
// A dimmed backdrop blocks the rest of the UI until the user presses OK.

use crate::app::state::{AppState, NoticeKind};
use crate::ui::theme;

/// Render the pending notice, if any.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(notice) = state.notice.as_ref() else {
        return;
    };

    let (icon, accent) = match notice.kind {
        NoticeKind::Info => ("\u{2139}", theme::INFO_ACCENT),
        NoticeKind::Error => ("\u{26a0}", theme::ERROR_ACCENT),
    };

    let mut dismissed = false;
    let modal = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
        ui.set_min_width(320.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(icon).size(22.0).color(accent));
            ui.heading(&notice.title);
        });
        ui.add_space(6.0);
        ui.label(&notice.message);
        ui.add_space(10.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });

    if dismissed || modal.should_close() {
        state.notice = None;
    }
}
