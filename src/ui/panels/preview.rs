// FileScout - ui/panels/preview.rs
//
// Preview pane (right side panel). Shows the selected file's thumbnail or
// extracted text, plus Preview / Open / Reveal buttons for the selection.
//
// Image previews are uploaded to the GPU once and cached in
// `state.preview_texture` until the pane content changes.

use crate::app::state::{AppState, PreviewPane};
use crate::core::preview::PreviewKind;

/// Render the preview pane.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Preview");

    let selected = state
        .selected_result()
        .map(|r| (r.full_path.clone(), r.filename.clone()));

    match selected {
        Some((path, filename)) => {
            ui.label(egui::RichText::new(&filename).strong())
                .on_hover_text(path.display().to_string());
            ui.label(
                egui::RichText::new(PreviewKind::from_path(&path).label())
                    .small()
                    .weak(),
            );
            ui.horizontal(|ui| {
                if ui.button("Preview").clicked() {
                    state.pending_preview = Some(path.clone());
                }
                if ui.button("Open").clicked() {
                    state.pending_open = Some(path.clone());
                }
                if ui.button("Reveal").clicked() {
                    state.pending_reveal = Some(path.clone());
                }
            });
        }
        None => {
            ui.label(egui::RichText::new("Select a result to preview it.").weak());
        }
    }

    ui.separator();

    match &state.preview {
        PreviewPane::Empty => {}
        PreviewPane::Text { path, text } => {
            ui.label(egui::RichText::new(path.display().to_string()).small().weak());
            egui::ScrollArea::both()
                .id_salt("preview_text")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    if text.is_empty() {
                        ui.label(egui::RichText::new("(no text content)").italics().weak());
                    } else {
                        ui.label(egui::RichText::new(text.as_str()).monospace());
                    }
                });
        }
        PreviewPane::Image { path, image } => {
            ui.label(egui::RichText::new(path.display().to_string()).small().weak());
            let texture = state.preview_texture.get_or_insert_with(|| {
                let colour_image = egui::ColorImage::from_rgba_unmultiplied(
                    [image.width as usize, image.height as usize],
                    &image.rgba,
                );
                ui.ctx().load_texture(
                    format!("preview:{}", path.display()),
                    colour_image,
                    egui::TextureOptions::LINEAR,
                )
            });
            ui.label(format!("{} \u{00d7} {}", image.width, image.height));
            egui::ScrollArea::both()
                .id_salt("preview_image")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add(egui::Image::new(&*texture).shrink_to_fit());
                });
        }
    }
}
