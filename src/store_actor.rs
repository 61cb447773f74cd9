//! Single-owner actor around [`DirectoryStore`] and the cloneable handle used to reach it.
//!
//! Requests are served strictly one at a time, so every command is applied
//! atomically with respect to every other request.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

use crate::domain::Employee;
use crate::error::DirectoryError;
use crate::query::visible_employees;
use crate::store::{Command, DirectoryState, DirectoryStore, Outcome};

pub type Response<T> = oneshot::Sender<Result<T, DirectoryError>>;

#[derive(Debug)]
pub enum StoreRequest {
    GetState {
        respond_to: Response<DirectoryState>,
    },
    Dispatch {
        command: Command,
        respond_to: Response<Outcome>,
    },
    Visible {
        respond_to: Response<Vec<Employee>>,
    },
    Find {
        id: String,
        respond_to: Response<Option<Employee>>,
    },
}

pub struct StoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    store: DirectoryStore,
}

impl StoreActor {
    pub fn new(buffer_size: usize, initial: DirectoryState) -> (Self, StoreHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: DirectoryStore::new(initial),
        };
        (actor, StoreHandle::new(sender))
    }

    /// Serves requests until every [`StoreHandle`] has been dropped.
    #[instrument(name = "store_actor", skip(self))]
    pub async fn run(mut self) {
        info!(employee_count = self.store.state().len(), "Store actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::GetState { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.state().clone()));
                }
                StoreRequest::Dispatch { command, respond_to } => {
                    self.handle_dispatch(command, respond_to);
                }
                StoreRequest::Visible { respond_to } => {
                    let rows = visible_employees(self.store.state());
                    debug!(visible_count = rows.len(), "Derived visible employees");
                    let _ = respond_to.send(Ok(rows));
                }
                StoreRequest::Find { id, respond_to } => {
                    let found = self.store.state().find(&id).cloned();
                    let _ = respond_to.send(Ok(found));
                }
            }
        }

        info!("Store actor stopped");
    }

    #[instrument(fields(command = command.kind()), skip(self, command, respond_to))]
    fn handle_dispatch(&mut self, command: Command, respond_to: Response<Outcome>) {
        let outcome = self.store.dispatch(command);
        match &outcome {
            Outcome::NotFound => debug!("No employee matched; record list unchanged"),
            Outcome::ViewChanged => debug!("View parameters changed"),
            Outcome::Deleted { removed } => {
                info!(removed = removed.len(), employee_count = self.store.state().len(), "Record list changed")
            }
            Outcome::Added | Outcome::Updated => {
                info!(employee_count = self.store.state().len(), "Record list changed")
            }
        }
        let _ = respond_to.send(Ok(outcome));
    }
}

/// Cloneable handle to a running [`StoreActor`].
#[derive(Debug, Clone)]
pub struct StoreHandle {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreHandle {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(&self, build: impl FnOnce(Response<T>) -> StoreRequest) -> Result<T, DirectoryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| DirectoryError::ActorCommunication("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| DirectoryError::ActorCommunication("Actor dropped".to_string()))?
    }

    pub async fn get_state(&self) -> Result<DirectoryState, DirectoryError> {
        self.request(|respond_to| StoreRequest::GetState { respond_to }).await
    }

    pub async fn dispatch(&self, command: Command) -> Result<Outcome, DirectoryError> {
        self.request(|respond_to| StoreRequest::Dispatch { command, respond_to }).await
    }

    pub async fn visible(&self) -> Result<Vec<Employee>, DirectoryError> {
        self.request(|respond_to| StoreRequest::Visible { respond_to }).await
    }

    pub async fn find(&self, id: impl Into<String>) -> Result<Option<Employee>, DirectoryError> {
        let id = id.into();
        self.request(|respond_to| StoreRequest::Find { id, respond_to }).await
    }
}
