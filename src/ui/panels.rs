use eframe::egui::{self, Color32, RichText, Ui};

use crate::session::SLOT_COUNT;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Selector row – three brand → model → year combo boxes
// ---------------------------------------------------------------------------

/// Render the three vehicle pickers side by side.
pub fn selectors(ui: &mut Ui, state: &mut AppState) {
    let Some(session) = &state.session else {
        ui.label("No dataset loaded.");
        return;
    };

    // Snapshot the option lists so the combo boxes can mutate `state`.
    let catalog = session.catalog();
    let choices: Vec<SlotChoices> = session
        .slots()
        .iter()
        .map(|slot| SlotChoices {
            brand: slot.brand().to_string(),
            model: slot.model().to_string(),
            year: slot.year(),
            brands: catalog.brands().to_vec(),
            models: catalog.models(slot.brand()).to_vec(),
            years: catalog.years(slot.brand(), slot.model()).to_vec(),
        })
        .collect();

    ui.columns(SLOT_COUNT, |columns: &mut [Ui]| {
        for (i, (ui, c)) in columns.iter_mut().zip(&choices).enumerate() {
            ui.label(
                RichText::new(format!("🚘 차량 {} 선택", i + 1))
                    .heading()
                    .color(state.colors.accent(i)),
            );

            combo(ui, ("brand", i), &format!("브랜드 선택 {}", i + 1), &c.brand, &c.brands, |b| {
                state.set_brand(i, b)
            });
            combo(ui, ("model", i), &format!("모델명 선택 {}", i + 1), &c.model, &c.models, |m| {
                state.set_model(i, m)
            });

            let years: Vec<String> = c.years.iter().map(i32::to_string).collect();
            combo(ui, ("year", i), &format!("연식 선택 {}", i + 1), &c.year.to_string(), &years, |y| {
                if let Ok(y) = y.parse() {
                    state.set_year(i, y);
                }
            });
        }
    });
}

struct SlotChoices {
    brand: String,
    model: String,
    year: i32,
    brands: Vec<String>,
    models: Vec<String>,
    years: Vec<i32>,
}

/// A labelled combo box; `on_pick` runs only when a different entry is chosen.
fn combo(
    ui: &mut Ui,
    id: impl std::hash::Hash,
    label: &str,
    current: &str,
    options: &[String],
    mut on_pick: impl FnMut(&str),
) {
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in options {
                if ui.selectable_label(option == current, option).clicked() && option != current {
                    on_pick(option);
                }
            }
        });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open dataset…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = state.comparison.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export comparison…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(catalog) = state.catalog() {
            ui.label(format!(
                "{} vehicles, {} brands",
                catalog.len(),
                catalog.brands().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open vehicle table")
        .add_filter("Delimited text", &["csv", "txt"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.load_catalog(&path) {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let default_name = state
        .export_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut dialog = rfd::FileDialog::new()
        .set_title("Export comparison")
        .add_filter("CSV", &["csv"])
        .set_file_name(default_name);
    if let Some(dir) = state.export_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        dialog = dialog.set_directory(dir);
    }

    if let Some(path) = dialog.save_file() {
        if let Err(e) = state.export_to(&path) {
            log::error!("Export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
