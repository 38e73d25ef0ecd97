//! UI State Controller: one user-triggered workflow at a time.
//!
//! Every workflow starts with [`Controller::begin`], which hands out a
//! [`Ticket`] for the duration of the run. While a ticket is alive any other
//! `begin` fails with [`WorkflowError::Busy`], and the loader overlay is
//! shown. The ticket is consumed by the workflow method and released when
//! it returns, on success and on every error path alike.
//!
//! Mutating workflows end with a full list refresh; the table is never
//! patched from the mutation response. A failed call never touches the
//! caller's state: results are handed back and applied by the component.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use log::{debug, info};
use thiserror::Error;

use common::errors::{ClientError, RemoteError, TransportError, ValidationError};
use common::model::form::WineForm;
use common::model::wine::{WineId, WineRecord};
use common::validation::{validate_submission, validate_update};

use crate::api::{RecordStore, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    List,
    Create,
    Edit,
    Save,
    Delete,
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Workflow::List => "carregamento da lista",
            Workflow::Create => "cadastro",
            Workflow::Edit => "abertura da edição",
            Workflow::Save => "gravação",
            Workflow::Delete => "exclusão",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Aguarde a conclusão da operação em andamento ({0}).")]
    Busy(Workflow),
    #[error("Nenhum vinho em edição.")]
    NoEditSession,
}

impl From<ClientError> for WorkflowError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Remote(e) => WorkflowError::Remote(e),
            ClientError::Transport(e) => WorkflowError::Transport(e),
        }
    }
}

/// Proof that a workflow holds the controller. Releases it on drop.
#[must_use]
pub struct Ticket {
    workflow: Workflow,
    slot: Rc<Cell<Option<Workflow>>>,
}

impl Ticket {
    pub fn workflow(&self) -> Workflow {
        self.workflow
    }
}

impl Drop for Ticket {
    fn drop(&mut self) {
        debug!("{} settled", self.workflow);
        self.slot.set(None);
    }
}

/// Result of a mutation together with the list refresh that followed it.
#[derive(Debug, Clone, PartialEq)]
pub struct Settled<T> {
    pub outcome: T,
    pub refreshed: Result<Vec<WineRecord>, WorkflowError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Deletion {
    /// The user declined; nothing was sent.
    Cancelled,
    Deleted(Settled<WineId>),
}

/// State of the edit surface: the record being edited and the values
/// currently shown. The id can only come from a successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    id: WineId,
    pub form: WineForm,
}

impl EditSession {
    fn from_record(record: &WineRecord) -> Self {
        Self {
            id: record.id,
            form: WineForm::from_sample(&record.sample),
        }
    }

    pub fn id(&self) -> WineId {
        self.id
    }
}

pub struct Controller<T> {
    store: RecordStore<T>,
    in_flight: Rc<Cell<Option<Workflow>>>,
}

impl<T: Transport> Controller<T> {
    pub fn new(store: RecordStore<T>) -> Self {
        Self {
            store,
            in_flight: Rc::new(Cell::new(None)),
        }
    }

    /// Workflow currently holding the controller, if any.
    pub fn busy(&self) -> Option<Workflow> {
        self.in_flight.get()
    }

    pub fn begin(&self, workflow: Workflow) -> Result<Ticket, WorkflowError> {
        if let Some(running) = self.in_flight.get() {
            debug!("{} rejected while {} is running", workflow, running);
            return Err(WorkflowError::Busy(running));
        }
        self.in_flight.set(Some(workflow));
        Ok(Ticket {
            workflow,
            slot: self.in_flight.clone(),
        })
    }

    pub async fn list(&self, ticket: Ticket) -> Result<Vec<WineRecord>, WorkflowError> {
        debug_assert_eq!(ticket.workflow(), Workflow::List);
        self.refresh().await
    }

    /// Validates the form, submits it and refreshes the list.
    pub async fn create(
        &self,
        ticket: Ticket,
        form: &WineForm,
    ) -> Result<Settled<WineRecord>, WorkflowError> {
        debug_assert_eq!(ticket.workflow(), Workflow::Create);
        let sample = validate_submission(form)?;
        let record = self.store.create(&sample).await?;
        info!(
            "wine {} created, classified as {}",
            record.id,
            record.classificacao.as_deref().unwrap_or("-")
        );
        let refreshed = self.refresh().await;
        Ok(Settled {
            outcome: record,
            refreshed,
        })
    }

    /// Fetches a record and opens an edit session on it.
    pub async fn edit(&self, ticket: Ticket, id: WineId) -> Result<EditSession, WorkflowError> {
        debug_assert_eq!(ticket.workflow(), Workflow::Edit);
        let record = self.store.fetch_one(id).await?;
        Ok(EditSession::from_record(&record))
    }

    /// Sends the values shown in `session` as a full replacement of its
    /// record, then refreshes the list.
    pub async fn save(
        &self,
        ticket: Ticket,
        session: &EditSession,
    ) -> Result<Settled<WineId>, WorkflowError> {
        debug_assert_eq!(ticket.workflow(), Workflow::Save);
        let sample = validate_update(&session.form)?;
        self.store.update(session.id, &sample).await?;
        info!("wine {} updated", session.id);
        let refreshed = self.refresh().await;
        Ok(Settled {
            outcome: session.id,
            refreshed,
        })
    }

    /// Asks `confirm` first; a refusal ends the workflow without any call.
    pub async fn delete(
        &self,
        ticket: Ticket,
        id: WineId,
        confirm: impl FnOnce(WineId) -> bool,
    ) -> Result<Deletion, WorkflowError> {
        debug_assert_eq!(ticket.workflow(), Workflow::Delete);
        if !confirm(id) {
            debug!("deletion of wine {} cancelled", id);
            return Ok(Deletion::Cancelled);
        }
        self.store.delete(id).await?;
        info!("wine {} deleted", id);
        let refreshed = self.refresh().await;
        Ok(Deletion::Deleted(Settled {
            outcome: id,
            refreshed,
        }))
    }

    async fn refresh(&self) -> Result<Vec<WineRecord>, WorkflowError> {
        let records = self.store.list().await?;
        debug!("listed {} wines", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests;
