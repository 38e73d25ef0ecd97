//! Update function for the catalog component.
//!
//! Elm-style: each `Msg` either starts a workflow on the controller or
//! applies a finished workflow's result to `CatalogState`.
//!
//! Starting a workflow takes the controller's ticket synchronously, so the
//! loader overlay is part of the very next render, then runs the workflow on
//! the local executor and posts the result back as a message. A start that
//! finds another workflow running is refused with a notice.

use std::future::Future;
use std::rc::Rc;

use log::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::GlooTransport;
use crate::controller::{Controller, Ticket, Workflow, WorkflowError};

use super::helpers::{confirm_delete, notify_all, show_toast, Notice};
use super::messages::Msg;
use super::state::CatalogComponent;

/// Central update function for the component.
///
/// Returns `true` whenever the view must reflect a change, including the
/// loader appearing when a workflow starts.
pub fn update(component: &mut CatalogComponent, ctx: &Context<CatalogComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let started = start(component, ctx, Workflow::List, |controller, ticket| async move {
                Msg::Listed(controller.list(ticket).await)
            });
            if started {
                component.state.start_listing();
            }
            started
        }
        Msg::Listed(result) => {
            log_failure(Workflow::List, &result);
            if let Some(notice) = component.state.on_listed(result) {
                show_toast(&notice);
            }
            true
        }
        Msg::FormInput(field, value) => {
            component.state.set_form_field(field, value);
            true
        }
        Msg::Submit => {
            let form = component.state.form.clone();
            start(component, ctx, Workflow::Create, move |controller, ticket| async move {
                Msg::Created(controller.create(ticket, &form).await)
            })
        }
        Msg::Created(result) => {
            log_failure(Workflow::Create, &result);
            let notices = component.state.on_created(result);
            notify_all(&notices);
            true
        }
        Msg::Edit(id) => start(component, ctx, Workflow::Edit, move |controller, ticket| async move {
            Msg::EditOpened(controller.edit(ticket, id).await)
        }),
        Msg::EditOpened(result) => {
            log_failure(Workflow::Edit, &result);
            if let Some(notice) = component.state.on_edit_opened(result) {
                show_toast(&notice);
            }
            true
        }
        Msg::EditInput(field, value) => component.state.set_edit_field(field, value),
        Msg::Save => {
            let session = match component.state.edit_session() {
                Ok(session) => session.clone(),
                Err(err) => {
                    reject(Workflow::Save, &err);
                    return false;
                }
            };
            start(component, ctx, Workflow::Save, move |controller, ticket| async move {
                Msg::Saved(controller.save(ticket, &session).await)
            })
        }
        Msg::Saved(result) => {
            log_failure(Workflow::Save, &result);
            let notices = component.state.on_saved(result);
            notify_all(&notices);
            true
        }
        Msg::CloseEdit => {
            component.state.close_edit();
            true
        }
        Msg::Delete(id) => start(component, ctx, Workflow::Delete, move |controller, ticket| async move {
            Msg::Deleted(controller.delete(ticket, id, confirm_delete).await)
        }),
        Msg::Deleted(result) => {
            log_failure(Workflow::Delete, &result);
            let notices = component.state.on_deleted(result);
            notify_all(&notices);
            true
        }
    }
}

/// Takes the controller for `workflow` and spawns `job` with the ticket.
fn start<F, Fut>(
    component: &CatalogComponent,
    ctx: &Context<CatalogComponent>,
    workflow: Workflow,
    job: F,
) -> bool
where
    F: FnOnce(Rc<Controller<GlooTransport>>, Ticket) -> Fut,
    Fut: Future<Output = Msg> + 'static,
{
    match component.controller.begin(workflow) {
        Ok(ticket) => {
            let pending = job(component.controller.clone(), ticket);
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(pending.await);
            });
            true
        }
        Err(err) => {
            reject(workflow, &err);
            false
        }
    }
}

fn reject(workflow: Workflow, err: &WorkflowError) {
    warn!("{} not started: {}", workflow, err);
    show_toast(&Notice::from(err));
}

fn log_failure<T>(workflow: Workflow, result: &Result<T, WorkflowError>) {
    if let Err(err) = result {
        warn!("{} failed: {}", workflow, err);
    }
}
