use eframe::egui::{self, Align, Frame, Layout, RichText, Ui};

use crate::session::SLOT_COUNT;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Comparison cards (central panel)
// ---------------------------------------------------------------------------

/// Render one card per slot: photo, title, and the attribute list.
pub fn comparison_cards(ui: &mut Ui, state: &AppState) {
    let Some(result) = &state.comparison else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a vehicle table to compare  (File → Open dataset…)");
        });
        return;
    };

    ui.heading("📊 선택한 차량 스펙 비교");
    ui.add_space(8.0);

    ui.columns(SLOT_COUNT, |columns: &mut [Ui]| {
        for (i, ui) in columns.iter_mut().enumerate() {
            let vehicle = &result.vehicles[i];
            let best = result.is_best(i);

            let mut frame = Frame::group(ui.style()).inner_margin(8.0);
            if best {
                frame = frame.fill(state.colors.best_fill);
            }

            frame.show(ui, |ui: &mut Ui| {
                ui.with_layout(Layout::top_down(Align::Center), |ui: &mut Ui| {
                    let url = state.images.url_for(&vehicle.brand, &vehicle.model);
                    ui.add(
                        egui::Image::from_uri(url)
                            .max_width(ui.available_width())
                            .max_height(200.0)
                            .corner_radius(4.0),
                    );
                    ui.add_space(12.0);

                    let mut title = RichText::new(result.title(i)).heading().strong();
                    if best {
                        title = title.color(state.colors.best_text);
                    }
                    ui.label(title);
                    ui.add_space(12.0);

                    for (&attribute, value) in result.attributes().iter().zip(result.row(i)) {
                        ui.horizontal_wrapped(|ui: &mut Ui| {
                            ui.strong(format!("{}:", attribute.label()));
                            ui.label(value);
                        });
                    }
                });
            });
        }
    });
}
