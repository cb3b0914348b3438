//! Chat panel: persona header, message log, error banners, and input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Stroke, Vec2};
use multichat_core::session::ChatSession;
use multichat_types::message::Message;
use multichat_types::persona::Persona;
use crate::state::{UiIntent, UiState};
use crate::theme::*;

/// Render the chat panel. Returns an intent when the user submits input,
/// dismisses the API error, or retries the connection.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    session: &ChatSession,
) -> Option<UiIntent> {
    let mut intent = None;
    let persona = session.persona().persona();

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                persona_header(ui, persona);
                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 90.0;
                ScrollArea::vertical()
                    .max_height(available_height.max(80.0))
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for msg in session.messages() {
                            render_message(ui, msg);
                            ui.add_space(4.0);
                        }

                        if session.is_in_flight() {
                            ui.horizontal(|ui| {
                                ui.add(egui::Spinner::new().size(14.0));
                                ui.label(RichText::new("Thinking...").color(TEXT_SECONDARY));
                            });
                        }
                    });

                ui.add_space(8.0);

                if let Some(err) = session.connection_error() {
                    if error_banner(ui, err, "Retry") {
                        intent = Some(UiIntent::RetryConnection);
                    }
                }
                if let Some(err) = session.api_error() {
                    if error_banner(ui, err, "✕") {
                        intent = Some(UiIntent::DismissApiError);
                    }
                }

                if let Some(text) = input_row(ui, state, session, persona) {
                    intent = Some(UiIntent::Send(text));
                }

                // Status line
                let status = match &state.last_model {
                    Some(model) => format!("{} · {}", state.status_text, model),
                    None => state.status_text.clone(),
                };
                ui.label(RichText::new(status).color(TEXT_SECONDARY).small());
            });
        });

    intent
}

fn persona_header(ui: &mut egui::Ui, persona: &Persona) {
    let (accent, _) = persona_colors(persona.color);
    ui.horizontal(|ui| {
        ui.label(RichText::new(persona.icon).size(22.0));
        ui.vertical(|ui| {
            ui.heading(RichText::new(persona.name).color(accent).strong());
            ui.label(RichText::new(persona.description).color(TEXT_SECONDARY).small());
        });
    });
}

/// Id of the message input, stable across frames.
pub fn input_id() -> egui::Id {
    egui::Id::new("chat_input")
}

/// Input field + Send button. Enter submits, Shift+Enter inserts a newline.
/// Returns the text as typed on submit.
fn input_row(
    ui: &mut egui::Ui,
    state: &mut UiState,
    session: &ChatSession,
    persona: &Persona,
) -> Option<String> {
    let mut submitted = None;

    ui.horizontal(|ui| {
        let input = egui::TextEdit::multiline(&mut state.input_text)
            .id(input_id())
            .hint_text(input_hint(session))
            .desired_rows(2)
            .desired_width(ui.available_width() - 70.0)
            .font(egui::FontId::proportional(14.0))
            .return_key(egui::KeyboardShortcut::new(egui::Modifiers::SHIFT, egui::Key::Enter));

        let response = ui.add_enabled(session.input_enabled(), input);

        let send_enabled = session.can_send(&state.input_text);
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        let enter = response.has_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);
        if send_enabled && (enter || send_btn.clicked()) {
            log::debug!("Submitting message to {}", persona.name);
            submitted = Some(std::mem::take(&mut state.input_text));
            response.request_focus();
        }
    });

    submitted
}

/// Placeholder for the input field.
pub fn input_hint(session: &ChatSession) -> String {
    if session.input_enabled() {
        format!("Message {}...", session.persona().persona().name)
    } else {
        "Fix backend connection first...".to_string()
    }
}

/// Render a banner; returns whether its button was clicked.
fn error_banner(ui: &mut egui::Ui, message: &str, button: &str) -> bool {
    let mut clicked = false;
    egui::Frame::default()
        .fill(ERROR_BG)
        .stroke(Stroke::new(1.0, ERROR))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚠").color(ERROR));
                ui.label(RichText::new(message).color(TEXT_PRIMARY).small());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    clicked = ui.small_button(button).clicked();
                });
            });
        });
    ui.add_space(4.0);
    clicked
}

fn render_message(ui: &mut egui::Ui, msg: &Message) {
    let (align, fill, label) = if msg.is_user() {
        (Align::Max, USER_BUBBLE, "You")
    } else {
        (Align::Min, ASSISTANT_BUBBLE, "Assistant")
    };
    let stroke = if msg.error {
        Stroke::new(1.0, ERROR)
    } else {
        Stroke::NONE
    };

    ui.with_layout(Layout::top_down(align), |ui| {
        ui.set_max_width(ui.available_width() * 0.7);
        egui::Frame::default()
            .fill(fill)
            .stroke(stroke)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).color(TEXT_SECONDARY).strong().small());
                    ui.label(
                        RichText::new(format_timestamp(&msg.timestamp))
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                });
                ui.label(RichText::new(&msg.content).color(TEXT_PRIMARY));
                if let Some(model) = &msg.model {
                    ui.label(
                        RichText::new(format!("Model: {}", model))
                            .color(TEXT_SECONDARY)
                            .small()
                            .italics(),
                    );
                }
            });
    });
}

/// `HH:MM` in local time, or an empty string for unparseable input.
pub fn format_timestamp(rfc3339: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(rfc3339)
        .map(|t| t.with_timezone(&chrono::Local).format("%H:%M").to_string())
        .unwrap_or_default()
}
