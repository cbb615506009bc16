//! Console application state
//!
//! Wraps the catalog state machine with what only the terminal needs: card
//! selection, form focus and the transient error toast. Backend requests are
//! spawned onto the runtime and their outcomes come back through a channel so
//! the UI keeps drawing while they are in flight.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dish_client::{CatalogState, DishGateway, DishId, FormField, Outcome, Request, execute};
use tokio::sync::mpsc;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

/// How long an error toast stays up
pub const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: &'static str,
    pub shown_at: Instant,
}

pub struct App {
    pub state: CatalogState,
    /// Index of the highlighted card
    pub selected: usize,
    /// Focused input while the modal is open
    pub focus: FormField,
    /// Cards per grid row, set from the terminal width before each draw
    pub columns: usize,
    pub toast: Option<Toast>,
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
    gateway: Arc<dyn DishGateway>,
    outcome_tx: mpsc::UnboundedSender<Outcome>,
}

impl App {
    pub fn new(gateway: Arc<dyn DishGateway>) -> (Self, mpsc::UnboundedReceiver<Outcome>) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let app = Self {
            state: CatalogState::new(),
            selected: 0,
            focus: FormField::Name,
            columns: 1,
            toast: None,
            logger_state: TuiWidgetState::new(),
            should_quit: false,
            gateway,
            outcome_tx,
        };
        (app, outcome_rx)
    }

    pub fn mount(&mut self) {
        let request = self.state.mount();
        self.dispatch(Some(request));
    }

    /// Run a request in the background; its outcome arrives on the channel
    fn dispatch(&self, request: Option<Request>) {
        let Some(request) = request else {
            return;
        };
        let gateway = Arc::clone(&self.gateway);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = execute(gateway.as_ref(), request).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("console closed, dropping outcome");
            }
        });
    }

    pub fn on_outcome(&mut self, outcome: Outcome) {
        let next = self.state.apply(outcome);
        self.dispatch(next);
        self.clamp_selection();
        for notice in self.state.take_notices() {
            self.toast = Some(Toast {
                message: notice.message,
                shown_at: Instant::now(),
            });
        }
    }

    /// Expire the toast
    pub fn tick(&mut self) {
        if self
            .toast
            .as_ref()
            .is_some_and(|t| t.shown_at.elapsed() >= TOAST_TTL)
        {
            self.toast = None;
        }
    }

    pub fn selected_id(&self) -> Option<DishId> {
        self.state.dishes().get(self.selected).map(|d| d.id.clone())
    }

    fn clamp_selection(&mut self) {
        let len = self.state.dishes().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.state.modal().is_some() {
            self.handle_modal_key(key);
        } else {
            self.handle_list_key(key);
        }
    }

    /// Pasted text lands in the focused text field unfiltered
    pub fn handle_paste(&mut self, text: &str) {
        let focus = self.focus;
        if focus.is_select() || self.state.is_submitting() {
            return;
        }
        if let Some(modal) = self.state.modal_mut() {
            let value = format!("{}{}", modal.form.value(focus), text.trim_end_matches(['\r', '\n']));
            modal.form.set_value(focus, &value);
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let len = self.state.dishes().len();
        let columns = self.columns.max(1);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Char('a') => {
                if self.state.open_add() {
                    self.focus = FormField::Name;
                }
            }
            // cards are hidden while a fetch is in flight
            KeyCode::Char('e' | 'd') if self.state.is_loading() => {}
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    if self.state.open_edit(&id) {
                        self.focus = FormField::Name;
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    let request = self.state.delete(&id);
                    self.dispatch(request);
                }
            }
            KeyCode::Char('r') => {
                let request = self.state.refresh();
                self.dispatch(Some(request));
            }
            KeyCode::Left if self.selected > 0 => self.selected -= 1,
            KeyCode::Right if self.selected + 1 < len => self.selected += 1,
            KeyCode::Up => self.selected = self.selected.saturating_sub(columns),
            KeyCode::Down if self.selected + columns < len => self.selected += columns,
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let focus = self.focus;
        match key.code {
            KeyCode::Esc => {
                if !self.state.close_modal() {
                    tracing::warn!("Still saving, the form stays open");
                }
            }
            KeyCode::Enter => {
                let request = self.state.submit();
                self.dispatch(request);
            }
            KeyCode::Tab | KeyCode::Down => self.focus = focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = focus.prev(),
            code => {
                if self.state.is_submitting() {
                    return;
                }
                let Some(modal) = self.state.modal_mut() else {
                    return;
                };
                let form = &mut modal.form;
                match code {
                    KeyCode::Left if focus.is_select() => form.cycle(focus, false),
                    KeyCode::Right | KeyCode::Char(' ') if focus.is_select() => {
                        form.cycle(focus, true)
                    }
                    KeyCode::Backspace => form.backspace(focus),
                    KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
                    KeyCode::Char(ch) => {
                        form.type_char(focus, ch);
                    }
                    _ => {}
                }
            }
        }
    }
}
