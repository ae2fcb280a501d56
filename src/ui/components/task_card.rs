//! History card for one completed task

use crate::task::TaskRecord;
use crate::ui::theme::Theme;
use egui::{Frame, RichText};

pub struct TaskCard<'a> {
    record: &'a TaskRecord,
    theme: &'a Theme,
}

impl<'a> TaskCard<'a> {
    pub fn new(record: &'a TaskRecord, theme: &'a Theme) -> Self {
        Self { record, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let record = self.record;
        let theme = self.theme;

        Frame::none()
            .fill(theme.bg_secondary)
            .rounding(theme.card_rounding)
            .inner_margin(theme.spacing - 4.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("Type: {}", record.kind()))
                            .color(theme.text_primary)
                            .strong(),
                    );
                    ui.label(
                        RichText::new(format!("Duration: {}s", record.duration_seconds()))
                            .color(theme.text_secondary),
                    );
                    ui.label(
                        RichText::new(format!("Text: {}", record.text().unwrap_or("-")))
                            .color(theme.text_secondary),
                    );
                    ui.label(
                        RichText::new(
                            record
                                .submitted_at()
                                .with_timezone(&chrono::Local)
                                .format("%H:%M:%S")
                                .to_string(),
                        )
                        .small()
                        .color(theme.text_muted),
                    );
                });
            })
            .response
    }
}
