use eframe::egui::{self, Align, Layout, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{comparison, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CarCompareApp {
    pub state: AppState,
}

impl CarCompareApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for CarCompareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Selectors, then the comparison below ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.with_layout(Layout::top_down(Align::Center), |ui: &mut Ui| {
                        ui.heading(
                            RichText::new("🚗 차량 스펙 비교기 (브랜드 → 모델 → 연식)").strong(),
                        );
                    });
                    ui.separator();
                    panels::selectors(ui, &mut self.state);
                    ui.separator();
                    comparison::comparison_cards(ui, &self.state);
                });
        });
    }
}
