use common::model::fields::FormField;
use common::model::wine::{WineId, WineRecord};

use crate::controller::{Deletion, EditSession, Settled, WorkflowError};

pub enum Msg {
    Load,
    Listed(Result<Vec<WineRecord>, WorkflowError>),
    FormInput(FormField, String),
    Submit,
    Created(Result<Settled<WineRecord>, WorkflowError>),
    Edit(WineId),
    EditOpened(Result<EditSession, WorkflowError>),
    EditInput(FormField, String),
    Save,
    Saved(Result<Settled<WineId>, WorkflowError>),
    CloseEdit,
    Delete(WineId),
    Deleted(Result<Deletion, WorkflowError>),
}
