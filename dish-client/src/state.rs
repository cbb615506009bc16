//! Dish list state machine
//!
//! `CatalogState` owns everything the list view shows: the dishes, the fetch
//! indicator, the add/edit modal and the pending mutation. Every user action is
//! a transition on it. Transitions that need the backend hand back a
//! [`Request`]; the caller runs it (see [`crate::controller::execute`]) and feeds
//! the [`Outcome`] into [`CatalogState::apply`], which may ask for a follow-up
//! fetch.
//!
//! Fetches are numbered. Only the outcome of the most recent fetch is applied,
//! so a slow response can never overwrite a newer list.

use shared::{Dish, DishId, DishUpsert};

use crate::card::{ButtonState, CardAction, DishCard};
use crate::error::{ClientError, ClientResult};
use crate::form::DishForm;

pub const EMPTY_MESSAGE: &str = "There are no dishes, kindly add dishes";

/// Mutation currently in flight
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActionStatus {
    #[default]
    Idle,
    Creating,
    Editing(DishId),
    Deleting(DishId),
}

impl ActionStatus {
    pub fn is_pending(&self) -> bool {
        !matches!(self, ActionStatus::Idle)
    }

    /// Whether `action` on dish `id` is the pending one
    pub fn is_on(&self, id: &DishId, action: CardAction) -> bool {
        match (self, action) {
            (ActionStatus::Editing(target), CardAction::Edit) => target == id,
            (ActionStatus::Deleting(target), CardAction::Delete) => target == id,
            _ => false,
        }
    }
}

/// Add/edit modal
#[derive(Debug, Clone, PartialEq)]
pub struct DishModal {
    editing: Option<Dish>,
    pub form: DishForm,
}

impl DishModal {
    fn add() -> Self {
        Self {
            editing: None,
            form: DishForm::new(),
        }
    }

    fn edit(dish: Dish) -> Self {
        Self {
            form: DishForm::from_dish(&dish),
            editing: Some(dish),
        }
    }

    pub fn editing(&self) -> Option<&Dish> {
        self.editing.as_ref()
    }

    pub fn title(&self) -> String {
        match &self.editing {
            None => "Add Dish".to_string(),
            Some(dish) => format!("Edit Dish {}", dish.name),
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        if self.editing.is_some() { "Edit Dish" } else { "Add Dish" }
    }
}

/// Transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: &'static str,
}

impl Notice {
    fn failure(err: &ClientError) -> Self {
        Self {
            message: err.user_message(),
        }
    }
}

/// Backend work a transition asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Fetch { seq: u64 },
    Upsert(DishUpsert),
    Delete(DishId),
}

/// Result of running a [`Request`]
#[derive(Debug)]
pub enum Outcome {
    Fetched {
        seq: u64,
        result: ClientResult<Vec<Dish>>,
    },
    Upserted(ClientResult<()>),
    Deleted {
        id: DishId,
        result: ClientResult<()>,
    },
}

/// What the list area shows
#[derive(Debug)]
pub enum ListView<'a> {
    Loading,
    Empty,
    Cards(Vec<DishCard<'a>>),
}

#[derive(Debug, Default)]
pub struct CatalogState {
    dishes: Vec<Dish>,
    loading: bool,
    modal: Option<DishModal>,
    action: ActionStatus,
    fetch_seq: u64,
    notices: Vec<Notice>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.action.is_pending()
    }

    pub fn action(&self) -> &ActionStatus {
        &self.action
    }

    pub fn modal(&self) -> Option<&DishModal> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut DishModal> {
        self.modal.as_mut()
    }

    pub fn dish(&self, id: &DishId) -> Option<&Dish> {
        self.dishes.iter().find(|d| &d.id == id)
    }

    pub fn cards(&self) -> Vec<DishCard<'_>> {
        self.dishes
            .iter()
            .map(|dish| DishCard::new(dish, &self.action))
            .collect()
    }

    pub fn view(&self) -> ListView<'_> {
        if self.loading {
            ListView::Loading
        } else if self.dishes.is_empty() {
            ListView::Empty
        } else {
            ListView::Cards(self.cards())
        }
    }

    /// Confirm button of the open modal
    pub fn confirm_button(&self) -> ButtonState {
        let submitting_form = matches!(
            self.action,
            ActionStatus::Creating | ActionStatus::Editing(_)
        );
        ButtonState {
            loading: submitting_form,
            disabled: self.action.is_pending(),
        }
    }

    /// Drain notices queued since the last call
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // ========== Transitions ==========

    /// Initial load
    pub fn mount(&mut self) -> Request {
        self.refresh()
    }

    /// Start a full list fetch, superseding any fetch still outstanding
    pub fn refresh(&mut self) -> Request {
        self.fetch_seq += 1;
        self.loading = true;
        Request::Fetch {
            seq: self.fetch_seq,
        }
    }

    /// Open the modal with an empty form
    pub fn open_add(&mut self) -> bool {
        if self.modal.is_some() && self.is_submitting() {
            return false;
        }
        self.modal = Some(DishModal::add());
        true
    }

    /// Open the modal pre-filled from one of the listed dishes
    pub fn open_edit(&mut self, id: &DishId) -> bool {
        if self.is_submitting() {
            return false;
        }
        let Some(dish) = self.dish(id).cloned() else {
            tracing::warn!(%id, "edit requested for unknown dish");
            return false;
        };
        self.modal = Some(DishModal::edit(dish));
        true
    }

    /// Hide the modal; refused while a submission is in flight
    pub fn close_modal(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.modal = None;
        true
    }

    /// Validate the modal form and, if complete, start the upsert
    pub fn submit(&mut self) -> Option<Request> {
        if self.is_submitting() {
            return None;
        }
        let modal = self.modal.as_mut()?;
        let id = modal.editing.as_ref().map(|d| d.id.clone());

        let payload = match modal.form.validate(id.clone()) {
            Ok(payload) => payload,
            Err(errors) => {
                tracing::debug!(%errors, "dish form rejected");
                modal.form.set_errors(errors);
                return None;
            }
        };

        self.action = match id {
            Some(id) => ActionStatus::Editing(id),
            None => ActionStatus::Creating,
        };
        Some(Request::Upsert(payload))
    }

    /// Start deleting a listed dish
    pub fn delete(&mut self, id: &DishId) -> Option<Request> {
        if self.is_submitting() {
            return None;
        }
        if self.dish(id).is_none() {
            tracing::warn!(%id, "delete requested for unknown dish");
            return None;
        }
        self.action = ActionStatus::Deleting(id.clone());
        Some(Request::Delete(id.clone()))
    }

    /// Fold a finished request back in; may return a follow-up fetch
    pub fn apply(&mut self, outcome: Outcome) -> Option<Request> {
        match outcome {
            Outcome::Fetched { seq, result } => {
                if seq != self.fetch_seq {
                    tracing::debug!(seq, latest = self.fetch_seq, "dropping stale dish list");
                    return None;
                }
                self.loading = false;
                match result {
                    Ok(dishes) => {
                        tracing::info!(count = dishes.len(), "dish list loaded");
                        self.dishes = dishes;
                    }
                    Err(e) => self.fail("fetch dishes", &e),
                }
                None
            }
            Outcome::Upserted(result) => {
                self.action = ActionStatus::Idle;
                match result {
                    Ok(()) => {
                        tracing::info!("dish saved");
                        self.modal = None;
                        Some(self.refresh())
                    }
                    Err(e) => {
                        self.fail("save dish", &e);
                        None
                    }
                }
            }
            Outcome::Deleted { id, result } => {
                self.action = ActionStatus::Idle;
                match result {
                    Ok(()) => {
                        tracing::info!(%id, "dish deleted");
                        self.modal = None;
                        Some(self.refresh())
                    }
                    Err(e) => {
                        self.fail("delete dish", &e);
                        None
                    }
                }
            }
        }
    }

    fn fail(&mut self, what: &str, err: &ClientError) {
        tracing::error!("Failed to {what}: {err}");
        self.notices.push(Notice::failure(err));
    }
}
