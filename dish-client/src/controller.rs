//! Headless driver for the dish list
//!
//! Runs [`Request`]s against a [`DishGateway`] and folds the outcomes back
//! into a [`CatalogState`] until nothing is left to do. Interactive front-ends
//! that must keep drawing while a request is out use [`execute`] directly.

use shared::DishId;

use crate::http::DishGateway;
use crate::state::{CatalogState, Outcome, Request};

/// Run one request against the gateway
pub async fn execute<G>(gateway: &G, request: Request) -> Outcome
where
    G: DishGateway + ?Sized,
{
    match request {
        Request::Fetch { seq } => Outcome::Fetched {
            seq,
            result: gateway.list_dishes().await,
        },
        Request::Upsert(payload) => Outcome::Upserted(gateway.upsert_dish(&payload).await),
        Request::Delete(id) => {
            let result = gateway.delete_dish(&id).await;
            Outcome::Deleted { id, result }
        }
    }
}

pub struct CatalogController<G> {
    gateway: G,
    state: CatalogState,
}

impl<G: DishGateway> CatalogController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: CatalogState::new(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Direct access for form editing
    pub fn state_mut(&mut self) -> &mut CatalogState {
        &mut self.state
    }

    pub async fn mount(&mut self) {
        let request = self.state.mount();
        self.drive(Some(request)).await;
    }

    pub async fn refresh(&mut self) {
        let request = self.state.refresh();
        self.drive(Some(request)).await;
    }

    pub fn open_add(&mut self) -> bool {
        self.state.open_add()
    }

    pub fn open_edit(&mut self, id: &DishId) -> bool {
        self.state.open_edit(id)
    }

    pub fn close_modal(&mut self) -> bool {
        self.state.close_modal()
    }

    /// Returns `false` when the form was incomplete or a submission was already running
    pub async fn submit(&mut self) -> bool {
        let request = self.state.submit();
        let sent = request.is_some();
        self.drive(request).await;
        sent
    }

    pub async fn delete(&mut self, id: &DishId) -> bool {
        let request = self.state.delete(id);
        let sent = request.is_some();
        self.drive(request).await;
        sent
    }

    async fn drive(&mut self, mut next: Option<Request>) {
        while let Some(request) = next.take() {
            let outcome = execute(&self.gateway, request).await;
            next = self.state.apply(outcome);
        }
    }
}
