//! Top bar: app title, connection status, service selector, reconnect.

use egui::{self, Align, Layout, RichText};
use multichat_core::session::ChatSession;
use multichat_types::service::ServiceId;
use crate::state::UiIntent;
use crate::theme::*;

/// Render the header bar contents. Returns an intent when the user picks a
/// service or asks to reconnect.
pub fn header_bar(
    ui: &mut egui::Ui,
    session: &ChatSession,
    app_name: &str,
    app_version: &str,
) -> Option<UiIntent> {
    let mut intent = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new(app_name).strong().color(ACCENT).size(16.0));
        ui.label(
            RichText::new(format!("v{}", app_version))
                .color(TEXT_SECONDARY)
                .small(),
        );

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let label = if session.is_probing() { "Testing..." } else { "Reconnect" };
            if ui
                .add_enabled(!session.is_probing(), egui::Button::new(label))
                .clicked()
            {
                intent = Some(UiIntent::RetryConnection);
            }

            ui.add_enabled_ui(session.input_enabled(), |ui| {
                egui::ComboBox::from_id_salt("service_selector")
                    .selected_text(session.service().label())
                    .show_ui(ui, |ui| {
                        for service in ServiceId::all() {
                            let available = session.available_services().is_available(*service);
                            let selected = session.service() == *service;
                            let text = service_option_label(*service, available);
                            let clicked = ui
                                .add_enabled_ui(available, |ui| ui.selectable_label(selected, text))
                                .inner
                                .clicked();
                            if clicked && !selected {
                                intent = Some(UiIntent::SelectService(*service));
                            }
                        }
                    });
            });

            let (status, color) = connection_status(session);
            ui.label(RichText::new(status).color(color).small());
        });
    });

    intent
}

/// Selector entry text, flagging services the backend reports as down.
pub fn service_option_label(service: ServiceId, available: bool) -> String {
    if available {
        service.label().to_string()
    } else {
        format!("{} (Unavailable)", service.label())
    }
}

fn connection_status(session: &ChatSession) -> (&'static str, egui::Color32) {
    if session.connection_error().is_some() {
        ("● Offline", ERROR)
    } else if session.is_probing() {
        ("● Connecting", WARNING)
    } else {
        ("● Online", SUCCESS)
    }
}
