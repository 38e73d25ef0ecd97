use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;

use common::errors::{Reason, RemoteError, TransportError};
use common::model::fields::{FormField, NumericField};

use super::*;
use crate::api::testing::{record_json, ScriptedTransport};

fn controller() -> (Controller<Rc<ScriptedTransport>>, Rc<ScriptedTransport>) {
    let transport = ScriptedTransport::new();
    let controller = Controller::new(RecordStore::new(transport.clone()));
    (controller, transport)
}

fn valid_form() -> WineForm {
    let mut form = WineForm::new();
    form.set(FormField::Nome, "Lagoas");
    form.set(FormField::Fornecedor, "Vinhos BR");
    form.set(FormField::Documento, "123.456.789-01");
    for field in NumericField::ALL {
        form.set(FormField::Numeric(field), "1.5");
    }
    form
}

fn list_json(ids: &[u64]) -> String {
    let items: Vec<String> = ids
        .iter()
        .map(|id| record_json(*id, &format!("vinho {}", id), "BOM"))
        .collect();
    format!("[{}]", items.join(","))
}

#[test]
fn begin_rejects_a_second_workflow_until_the_ticket_is_released() {
    let (controller, _) = controller();

    let ticket = controller.begin(Workflow::Create).unwrap();
    assert_eq!(controller.busy(), Some(Workflow::Create));
    assert_eq!(
        controller.begin(Workflow::Delete).err(),
        Some(WorkflowError::Busy(Workflow::Create))
    );

    drop(ticket);
    assert_eq!(controller.busy(), None);
    assert!(controller.begin(Workflow::Delete).is_ok());
}

#[test]
fn list_returns_records_and_releases_the_controller() {
    let (controller, transport) = controller();
    transport.reply(200, &list_json(&[1, 2, 3]));

    let ticket = controller.begin(Workflow::List).unwrap();
    let records = block_on(controller.list(ticket)).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(controller.busy(), None);
}

#[test]
fn create_posts_once_then_refreshes_once() {
    let (controller, transport) = controller();
    transport
        .reply(200, &record_json(7, "Lagoas", "BOM"))
        .reply(200, &list_json(&[7]));

    let ticket = controller.begin(Workflow::Create).unwrap();
    let settled = block_on(controller.create(ticket, &valid_form())).unwrap();

    assert_eq!(transport.calls(), vec!["POST /vinhos", "GET /vinhos"]);
    assert_eq!(settled.outcome.id, WineId(7));
    assert_eq!(settled.outcome.classificacao.as_deref(), Some("BOM"));
    assert_eq!(settled.refreshed.unwrap().len(), 1);
    assert_eq!(controller.busy(), None);
}

#[test]
fn create_rejected_by_server_skips_the_refresh() {
    let (controller, transport) = controller();
    transport.reply(422, r#"{"detail":"invalid ph"}"#);

    let ticket = controller.begin(Workflow::Create).unwrap();
    let err = block_on(controller.create(ticket, &valid_form())).unwrap_err();

    assert_eq!(
        err,
        WorkflowError::Remote(RemoteError {
            status: 422,
            message: "invalid ph".into()
        })
    );
    assert!(err.to_string().contains("invalid ph"));
    assert_eq!(transport.calls(), vec!["POST /vinhos"]);
    assert_eq!(controller.busy(), None);
}

#[test]
fn invalid_form_never_reaches_the_network() {
    let (controller, transport) = controller();
    let mut form = valid_form();
    form.set(FormField::Numeric(NumericField::Ph), "not-a-number");

    let ticket = controller.begin(Workflow::Create).unwrap();
    let err = block_on(controller.create(ticket, &form)).unwrap_err();

    match err {
        WorkflowError::Validation(e) => {
            assert_eq!(e.field, "pH");
            assert_eq!(e.reason, Reason::NotANumber);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(transport.calls().is_empty());
    assert_eq!(controller.busy(), None);
}

#[test]
fn refresh_failure_after_create_is_reported_separately() {
    let (controller, transport) = controller();
    transport
        .reply(200, &record_json(7, "Lagoas", "RUIM"))
        .fail("Failed to fetch");

    let ticket = controller.begin(Workflow::Create).unwrap();
    let settled = block_on(controller.create(ticket, &valid_form())).unwrap();

    assert_eq!(settled.outcome.id, WineId(7));
    assert_eq!(
        settled.refreshed,
        Err(WorkflowError::Transport(TransportError::new("Failed to fetch")))
    );
}

#[test]
fn edit_then_save_puts_the_displayed_values_to_the_session_record() {
    let (controller, transport) = controller();
    transport
        .reply(200, &record_json(5, "Lagoas", "BOM"))
        .reply(200, "")
        .reply(200, &list_json(&[5]));

    let ticket = controller.begin(Workflow::Edit).unwrap();
    let mut session = block_on(controller.edit(ticket, WineId(5))).unwrap();
    assert_eq!(session.id(), WineId(5));

    session.form.set(FormField::Nome, "Lagoas Reserva");
    session.form.set(FormField::Numeric(NumericField::Ph), "3.3");

    let ticket = controller.begin(Workflow::Save).unwrap();
    let settled = block_on(controller.save(ticket, &session)).unwrap();
    assert_eq!(settled.outcome, WineId(5));

    assert_eq!(
        transport.calls(),
        vec!["GET /vinhos/5", "PUT /vinhos/5", "GET /vinhos"]
    );
    let body: serde_json::Value =
        serde_json::from_str(transport.sent()[1].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["nome"], "Lagoas Reserva");
    assert_eq!(body["ph"], 3.3);
    assert_eq!(body["documento"], "***.***.*89-01");
    assert_eq!(body["teor_alcoolico"], 9.4);
}

#[test]
fn failed_save_leaves_the_list_untouched() {
    let (controller, transport) = controller();
    transport.reply(500, "");

    let session = EditSession::from_record(
        &serde_json::from_str(&record_json(5, "Lagoas", "BOM")).unwrap(),
    );

    let ticket = controller.begin(Workflow::Save).unwrap();
    let err = block_on(controller.save(ticket, &session)).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Erro na requisição: 500 Internal Server Error"
    );
    assert_eq!(transport.calls(), vec!["PUT /vinhos/5"]);
}

#[test]
fn cancelled_delete_sends_nothing() {
    let (controller, transport) = controller();
    let asked = Cell::new(None);

    let ticket = controller.begin(Workflow::Delete).unwrap();
    let outcome = block_on(controller.delete(ticket, WineId(4), |id| {
        asked.set(Some(id));
        false
    }))
    .unwrap();

    assert_eq!(outcome, Deletion::Cancelled);
    assert_eq!(asked.get(), Some(WineId(4)));
    assert!(transport.calls().is_empty());
    assert_eq!(controller.busy(), None);
}

#[test]
fn confirmed_delete_sends_one_delete_then_one_refresh() {
    let (controller, transport) = controller();
    transport
        .reply(200, r#"{"mensagem":"Vinho deletado com sucesso."}"#)
        .reply(200, "[]");

    let ticket = controller.begin(Workflow::Delete).unwrap();
    let outcome = block_on(controller.delete(ticket, WineId(4), |_| true)).unwrap();

    assert_eq!(transport.calls(), vec!["DELETE /vinhos/4", "GET /vinhos"]);
    match outcome {
        Deletion::Deleted(settled) => {
            assert_eq!(settled.outcome, WineId(4));
            assert_eq!(settled.refreshed, Ok(vec![]));
        }
        Deletion::Cancelled => panic!("deletion was confirmed"),
    }
}
