//! Persona selector: the collapsible list of assistants.

use egui::{self, Align, Layout, RichText, Vec2};
use multichat_types::persona::{Persona, PersonaId};
use crate::state::{UiIntent, UiState};
use crate::theme::*;

/// Render the persona selector. Returns `SelectPersona` when the user picks
/// a persona other than `active`.
pub fn persona_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    active: PersonaId,
) -> Option<UiIntent> {
    let mut intent = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("Chatbots").color(TEXT_PRIMARY));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let toggle = if state.personas_collapsed { "Expand" } else { "Collapse" };
                    if ui.small_button(toggle).clicked() {
                        state.personas_collapsed = !state.personas_collapsed;
                    }
                });
            });

            if state.personas_collapsed {
                return;
            }

            ui.add_space(4.0);
            for id in PersonaId::all() {
                if persona_card(ui, id.persona(), *id == active) && *id != active {
                    intent = Some(UiIntent::SelectPersona(*id));
                }
                ui.add_space(4.0);
            }
        });

    intent
}

fn persona_card(ui: &mut egui::Ui, persona: &Persona, selected: bool) -> bool {
    let (start, _) = persona_colors(persona.color);
    let fill = if selected { start } else { BG_SURFACE };

    let text = RichText::new(format!(
        "{}  {}\n{}",
        persona.icon, persona.name, persona.description
    ))
    .color(TEXT_PRIMARY);

    ui.add(
        egui::Button::new(text)
            .fill(fill)
            .corner_radius(BUBBLE_ROUNDING)
            .min_size(Vec2::new(ui.available_width(), 48.0)),
    )
    .clicked()
}
