// FileScout - ui/panels/results.rs
//
// Virtual-scrolling result table.
//
// Uses `ScrollArea::show_rows` so only visible rows are laid out, whatever
// the result count. Each row is a single click-sensitive rect; cells are
// painted with per-column clipping so long paths never overlap neighbours.
//
// Interaction:
//   - click header      -> sort by that column (click again to reverse)
//   - click row         -> select
//   - double-click row  -> reveal in file manager
//   - right-click row   -> Open File / Preview File / Reveal in Folder / Copy Path
//
// Requests are written to `state.pending_*`; gui.rs performs them.

use crate::app::state::AppState;
use crate::core::model::SearchResult;
use crate::core::results::ResultColumn;
use crate::ui::theme;
use std::path::PathBuf;

/// Row-level request collected inside `show_rows` and applied afterwards.
enum RowAction {
    Select(usize),
    Open(PathBuf),
    Preview(usize, PathBuf),
    Reveal(usize, PathBuf),
    CopyPath(PathBuf),
}

/// Render the result table (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let total = state.display_order.len();

    if total == 0 {
        ui.centered_and_justified(|ui| {
            if state.search_in_progress {
                ui.spinner();
            } else {
                ui.label("No results.\nTick one or more folders, type part of a filename and press Search.");
            }
        });
        return;
    }

    let widths = column_widths(ui.available_width());
    render_header(ui, state, &widths);
    ui.separator();

    let row_height = theme::ROW_HEIGHT;
    let mut action: Option<RowAction> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show_rows(ui, row_height, total, |ui, row_range| {
            for display_idx in row_range {
                let Some(result) = state.result_at(display_idx) else {
                    continue;
                };
                let is_selected = state.selected_index == Some(display_idx);

                let (rect, response) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), row_height),
                    egui::Sense::click(),
                );

                if is_selected {
                    ui.painter()
                        .rect_filled(rect, 2.0, ui.visuals().selection.bg_fill);
                } else if response.hovered() {
                    ui.painter()
                        .rect_filled(rect, 2.0, ui.visuals().faint_bg_color);
                }
                paint_row(ui, rect, result, &widths, state.dark_mode);

                if response.double_clicked() {
                    action = Some(RowAction::Reveal(display_idx, result.full_path.clone()));
                } else if response.clicked() {
                    action = Some(RowAction::Select(display_idx));
                }

                let path = result.full_path.clone();
                let response = response.on_hover_text(path.display().to_string());
                response.context_menu(|ui| {
                    if ui.button("Open File").clicked() {
                        action = Some(RowAction::Open(path.clone()));
                        ui.close_menu();
                    }
                    if ui.button("Preview File").clicked() {
                        action = Some(RowAction::Preview(display_idx, path.clone()));
                        ui.close_menu();
                    }
                    if ui.button("Reveal in Folder").clicked() {
                        action = Some(RowAction::Reveal(display_idx, path.clone()));
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Copy Path").clicked() {
                        action = Some(RowAction::CopyPath(path.clone()));
                        ui.close_menu();
                    }
                });
            }
        });

    // Applied after show_rows releases the borrow on `state.results`.
    match action {
        Some(RowAction::Select(idx)) => state.selected_index = Some(idx),
        Some(RowAction::Open(path)) => state.pending_open = Some(path),
        Some(RowAction::Preview(idx, path)) => {
            state.selected_index = Some(idx);
            state.pending_preview = Some(path);
        }
        Some(RowAction::Reveal(idx, path)) => {
            state.selected_index = Some(idx);
            state.pending_reveal = Some(path);
        }
        Some(RowAction::CopyPath(path)) => {
            ui.ctx().copy_text(path.display().to_string());
            state.status_message = format!("Copied '{}' to clipboard.", path.display());
        }
        None => {}
    }
}

/// Column widths in `ResultColumn::all()` order. The path column takes the
/// remaining space.
fn column_widths(available: f32) -> Vec<(ResultColumn, f32)> {
    let fixed = theme::FILENAME_COLUMN_WIDTH + theme::TYPE_COLUMN_WIDTH + theme::RELEVANCE_COLUMN_WIDTH;
    ResultColumn::all()
        .iter()
        .map(|&col| {
            let width = match col {
                ResultColumn::Filename => theme::FILENAME_COLUMN_WIDTH,
                ResultColumn::Path => (available - fixed).max(theme::MIN_PATH_COLUMN_WIDTH),
                ResultColumn::Type => theme::TYPE_COLUMN_WIDTH,
                ResultColumn::Relevance => theme::RELEVANCE_COLUMN_WIDTH,
            };
            (col, width)
        })
        .collect()
}

fn render_header(ui: &mut egui::Ui, state: &mut AppState, widths: &[(ResultColumn, f32)]) {
    let mut clicked: Option<ResultColumn> = None;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for &(col, width) in widths {
            let arrow = if state.sort.column == col {
                if state.sort.descending {
                    " \u{25bc}"
                } else {
                    " \u{25b2}"
                }
            } else {
                ""
            };
            let text = egui::RichText::new(format!("{}{arrow}", col.label())).strong();
            let button = egui::Button::new(text).frame(false);
            if ui
                .add_sized([width, theme::ROW_HEIGHT], button)
                .on_hover_text("Click to sort")
                .clicked()
            {
                clicked = Some(col);
            }
        }
    });
    if let Some(col) = clicked {
        state.toggle_sort(col);
    }
}

fn paint_row(
    ui: &egui::Ui,
    rect: egui::Rect,
    result: &SearchResult,
    widths: &[(ResultColumn, f32)],
    dark_mode: bool,
) {
    let font = egui::TextStyle::Body.resolve(ui.style());
    let mut x = rect.left();
    for &(col, width) in widths {
        let cell = egui::Rect::from_min_max(
            egui::pos2(x, rect.top()),
            egui::pos2((x + width).min(rect.right()), rect.bottom()),
        );
        let (text, colour) = match col {
            ResultColumn::Filename => (result.filename.clone(), theme::row_text_colour(dark_mode)),
            ResultColumn::Path => (
                result.full_path.display().to_string(),
                ui.visuals().weak_text_color(),
            ),
            ResultColumn::Type => (result.extension.clone(), theme::row_text_colour(dark_mode)),
            ResultColumn::Relevance => (
                result.relevance.to_string(),
                theme::relevance_colour(result.relevance, dark_mode),
            ),
        };
        ui.painter().with_clip_rect(cell.shrink2(egui::vec2(2.0, 0.0))).text(
            egui::pos2(cell.left() + 4.0, cell.center().y),
            egui::Align2::LEFT_CENTER,
            text,
            font.clone(),
            colour,
        );
        x += width;
    }
}
