//! Main egui application: composes the panels and drives the chat session.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, SidePanel, TopBottomPanel};

use multichat_core::event_bus::EventBus;
use multichat_core::ports::BackendPort;
use multichat_core::session::{ChatSession, PendingTurn};
use multichat_platform::backend::HttpBackend;
use multichat_platform::location::page_backend_override;
use multichat_types::config::ClientConfig;
use multichat_ui::panels::{chat, header, personas};
use multichat_ui::state::{UiIntent, UiState};
use multichat_ui::theme;

/// The main application state
pub struct MultichatApp {
    ui_state: UiState,
    config: ClientConfig,
    event_bus: EventBus,
    session: Rc<RefCell<ChatSession>>,
    backend: Rc<dyn BackendPort>,
    first_frame: bool,
}

impl MultichatApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = ClientConfig::from_build_env()
            .with_backend_override(page_backend_override().as_deref());
        let event_bus = EventBus::new();
        let session = ChatSession::from_config(&config, event_bus.clone());
        let backend: Rc<dyn BackendPort> = Rc::new(HttpBackend::new(config.clone()));
        log::info!("Using backend {}", backend.endpoint());

        let app = Self {
            ui_state: UiState::new(),
            config,
            event_bus,
            session: Rc::new(RefCell::new(session)),
            backend,
            first_frame: true,
        };

        // Availability is probed once at startup
        app.check_connection(&cc.egui_ctx);
        app
    }

    /// Probe the backend (async). Ignored while a probe is already running.
    fn check_connection(&self, ctx: &egui::Context) {
        if !self.session.borrow_mut().begin_probe() {
            return;
        }
        let session = self.session.clone();
        let backend = self.backend.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let probe = backend.fetch_services().await;
            session.borrow_mut().finish_probe(probe);
            ctx.request_repaint();
        });
    }

    /// Start a chat turn and complete it when the backend answers (async)
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let Some(PendingTurn { turn_id, request }) = self.session.borrow_mut().begin_send(&text)
        else {
            return;
        };
        let session = self.session.clone();
        let backend = self.backend.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = backend.send_chat(request).await;
            session.borrow_mut().finish_send(turn_id, result);
            ctx.request_repaint();
        });
    }

    fn dispatch(&mut self, intent: UiIntent, ctx: &egui::Context) {
        match intent {
            UiIntent::SelectPersona(persona) => self.session.borrow_mut().switch_persona(persona),
            UiIntent::SelectService(service) => {
                if let Err(e) = self.session.borrow_mut().set_service(service) {
                    log::warn!("Service selection rejected: {}", e);
                }
            }
            UiIntent::Send(text) => self.dispatch_message(text, ctx),
            UiIntent::DismissApiError => {
                self.session.borrow_mut().dismiss_api_error();
            }
            UiIntent::RetryConnection => self.check_connection(ctx),
        }
    }
}

impl eframe::App for MultichatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        let mut intents = Vec::new();
        {
            let session = self.session.borrow();
            if session.is_in_flight() || session.is_probing() {
                ctx.request_repaint();
            }

            // ── Top bar ──────────────────────────────────────
            TopBottomPanel::top("top_bar").show(ctx, |ui| {
                intents.extend(header::header_bar(
                    ui,
                    &session,
                    &self.config.app_name,
                    &self.config.app_version,
                ));
            });

            // ── Persona selector ─────────────────────────────
            SidePanel::left("persona_panel")
                .min_width(220.0)
                .max_width(300.0)
                .show(ctx, |ui| {
                    intents.extend(personas::persona_panel(
                        ui,
                        &mut self.ui_state,
                        session.persona(),
                    ));
                });

            // ── Chat ─────────────────────────────────────────
            CentralPanel::default().show(ctx, |ui| {
                intents.extend(chat::chat_panel(ui, &mut self.ui_state, &session));
            });
        }

        for intent in intents {
            self.dispatch(intent, ctx);
        }
    }
}
