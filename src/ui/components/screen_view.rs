//! Draws a [`View`] and collects the intents the user produced this frame

use super::task_card::TaskCard;
use crate::flow::{Button, ButtonId, Element, Intent, View};
use crate::navigator::Route;
use crate::ui::theme::Theme;
use egui::{Align, Layout, RichText, ScrollArea, Vec2};

pub struct ScreenView<'a> {
    view: &'a View,
    theme: &'a Theme,
}

impl<'a> ScreenView<'a> {
    pub fn new(view: &'a View, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) -> Vec<Intent> {
        let mut intents = Vec::new();

        match self.view.route {
            // Start and the noise check sit in the middle of the screen
            Route::Start | Route::NoiseTest => {
                let top = (ui.available_height() * 0.3).max(self.theme.spacing);
                ui.vertical_centered(|ui| {
                    ui.add_space(top);
                    self.show_elements(ui, &mut intents);
                });
            }
            _ => {
                ScrollArea::vertical()
                    .id_salt("screen_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.show_elements(ui, &mut intents);
                    });
            }
        }

        intents
    }

    fn show_elements(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        for element in &self.view.elements {
            match element {
                Element::Heading(text) => {
                    ui.label(
                        RichText::new(text)
                            .heading()
                            .color(self.theme.text_primary),
                    );
                }
                Element::Text(text) => {
                    ui.label(RichText::new(text).color(self.theme.text_secondary));
                }
                Element::Alert(text) => {
                    ui.label(RichText::new(text).color(self.theme.error).strong());
                }
                Element::ImagePlaceholder(label) => self.show_placeholder(ui, label),
                Element::TextField { label, value } => {
                    if let Some(intent) = self.show_text_field(ui, label, value) {
                        intents.push(intent);
                    }
                }
                Element::Stats {
                    total_tasks,
                    total_seconds,
                } => {
                    ui.horizontal(|ui| {
                        ui.label(format!("Total Tasks: {}", total_tasks));
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(format!("Total Duration: {}s", total_seconds));
                        });
                    });
                    ui.add_space(self.theme.spacing_sm);
                }
                Element::TaskCard(record) => {
                    TaskCard::new(record, self.theme).show(ui);
                }
                Element::Button(button) => {
                    if self.show_button(ui, button) {
                        intents.push(Intent::ButtonPressed(button.id));
                    }
                }
            }
            ui.add_space(self.theme.spacing_sm);
        }
    }

    fn show_placeholder(&self, ui: &mut egui::Ui, label: &str) {
        ui.vertical_centered(|ui| {
            egui::Frame::none()
                .fill(self.theme.bg_tertiary)
                .rounding(self.theme.card_rounding)
                .show(ui, |ui| {
                    ui.set_min_size(Vec2::splat(180.0));
                    ui.centered_and_justified(|ui| {
                        ui.label(RichText::new(label).color(self.theme.text_muted));
                    });
                });
        });
    }

    fn show_text_field(&self, ui: &mut egui::Ui, label: &str, value: &str) -> Option<Intent> {
        let mut buffer = value.to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut buffer)
                .id(egui::Id::new(("text_field", label)))
                .hint_text("Type here...")
                .desired_width(f32::INFINITY),
        );
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, label)
        });

        response.changed().then_some(Intent::TextChanged(buffer))
    }

    /// Returns true when the button was clicked this frame
    fn show_button(&self, ui: &mut egui::Ui, button: &Button) -> bool {
        // History is a plain text link
        let widget = if button.id == ButtonId::History {
            egui::Button::new(RichText::new(&button.label).color(self.theme.primary)).frame(false)
        } else {
            egui::Button::new(&button.label).min_size(Vec2::new(
                ui.available_width().min(360.0),
                self.theme.button_height,
            ))
        };

        ui.add_enabled(button.enabled, widget).clicked()
    }
}
