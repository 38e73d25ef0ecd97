//! Component state for the catalog page.
//!
//! `CatalogState` is the plain data the view renders from, with one
//! transition method per workflow result. Each transition applies a
//! successful outcome and returns the notices to display; a failure only
//! produces a notice and leaves the data as it was. `CatalogComponent`
//! pairs that state with the controller running the workflows.

use std::rc::Rc;

use common::model::fields::FormField;
use common::model::form::WineForm;
use common::model::wine::{WineId, WineRecord};

use crate::api::GlooTransport;
use crate::controller::{Controller, Deletion, EditSession, Settled, WorkflowError};

use super::helpers::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Idle,
    Loading,
    Rendered,
    Errored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    /// Records of the last successful list fetch.
    pub records: Vec<WineRecord>,
    pub list_status: ListStatus,
    /// Values of the create form.
    pub form: WineForm,
    /// Open edit surface, if any.
    pub editing: Option<EditSession>,
    /// Label returned by the last successful create.
    pub last_classification: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            list_status: ListStatus::Idle,
            form: WineForm::new(),
            editing: None,
            last_classification: None,
        }
    }

    pub fn set_form_field(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
    }

    /// Returns `false` when no edit surface is open.
    pub fn set_edit_field(&mut self, field: FormField, value: String) -> bool {
        match &mut self.editing {
            Some(session) => {
                session.form.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Precondition of the save workflow.
    pub fn edit_session(&self) -> Result<&EditSession, WorkflowError> {
        self.editing.as_ref().ok_or(WorkflowError::NoEditSession)
    }

    pub fn close_edit(&mut self) {
        self.editing = None;
    }

    pub fn start_listing(&mut self) {
        self.list_status = ListStatus::Loading;
    }

    pub fn on_listed(&mut self, result: Result<Vec<WineRecord>, WorkflowError>) -> Option<Notice> {
        match result {
            Ok(records) => {
                self.records = records;
                self.list_status = ListStatus::Rendered;
                None
            }
            Err(err) => {
                self.list_status = ListStatus::Errored;
                Some(Notice::from(&err))
            }
        }
    }

    pub fn on_created(
        &mut self,
        result: Result<Settled<WineRecord>, WorkflowError>,
    ) -> Vec<Notice> {
        match result {
            Ok(settled) => {
                self.last_classification = settled.outcome.classificacao.clone();
                self.form.clear();
                self.on_listed(settled.refreshed).into_iter().collect()
            }
            Err(err) => vec![Notice::from(&err)],
        }
    }

    pub fn on_edit_opened(&mut self, result: Result<EditSession, WorkflowError>) -> Option<Notice> {
        match result {
            Ok(session) => {
                self.editing = Some(session);
                None
            }
            Err(err) => Some(Notice::from(&err)),
        }
    }

    pub fn on_saved(&mut self, result: Result<Settled<WineId>, WorkflowError>) -> Vec<Notice> {
        match result {
            Ok(settled) => {
                if self.editing.as_ref().map(EditSession::id) == Some(settled.outcome) {
                    self.editing = None;
                }
                let mut notices = vec![Notice::success("Vinho atualizado com sucesso!")];
                notices.extend(self.on_listed(settled.refreshed));
                notices
            }
            Err(err) => vec![Notice::from(&err)],
        }
    }

    pub fn on_deleted(&mut self, result: Result<Deletion, WorkflowError>) -> Vec<Notice> {
        match result {
            Ok(Deletion::Cancelled) => Vec::new(),
            Ok(Deletion::Deleted(settled)) => {
                let mut notices = vec![Notice::success("Vinho excluído com sucesso!")];
                notices.extend(self.on_listed(settled.refreshed));
                notices
            }
            Err(err) => vec![Notice::from(&err)],
        }
    }
}

/// The mounted catalog page.
pub struct CatalogComponent {
    pub controller: Rc<Controller<GlooTransport>>,
    pub state: CatalogState,
    /// Guard for the one-time initial list fetch.
    pub loaded: bool,
}
