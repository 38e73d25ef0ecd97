//! View rendering for the catalog page.
//!
//! The page stacks the creation form, the last classification result and
//! the catalog table, with the edit surface and the loader overlay on top.
//! All structure comes from `projection`; this module only maps it to
//! markup and messages. User-facing text is in Portuguese.

use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::edit::edit_dialog;
use super::messages::Msg;
use super::projection::{
    create_form_view, table_view, ClassificationTag, FieldView, RowAction, RowView, TableView,
};
use super::state::{CatalogComponent, ListStatus};

pub fn view(component: &CatalogComponent, ctx: &Context<CatalogComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="container py-4">
            <h1 class="mb-4">{ "Classificador de Qualidade de Vinhos" }</h1>
            { build_create_form(component, link) }
            { build_result_panel(component) }
            { build_table(component, link) }
            { edit_dialog(component, link) }
            { build_loader(component) }
        </div>
    }
}

fn build_create_form(component: &CatalogComponent, link: &Scope<CatalogComponent>) -> Html {
    let inputs = create_form_view(&component.state.form)
        .into_iter()
        .map(|view| {
            let field = view.field;
            field_input(
                &view,
                link.callback(move |e: InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    Msg::FormInput(field, input.value())
                }),
            )
        })
        .collect::<Html>();

    html! {
        <div class="card mb-4">
            <div class="card-header">{ "Novo vinho" }</div>
            <div class="card-body">
                <form class="row g-3" onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    { inputs }
                    <div class="col-12">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={component.controller.busy().is_some()}
                        >
                            { "Classificar" }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// One labelled input. Shared with the edit dialog.
pub fn field_input(view: &FieldView, oninput: Callback<InputEvent>) -> Html {
    html! {
        <div class={format!("col-md-{}", view.columns)}>
            <label for={view.input_id.clone()} class="form-label">{ view.label.clone() }</label>
            <input
                type={view.kind.as_str()}
                step={view.step}
                class="form-control"
                id={view.input_id.clone()}
                name={view.field.key()}
                value={view.value.clone()}
                readonly={view.readonly}
                required={true}
                {oninput}
            />
        </div>
    }
}

fn build_result_panel(component: &CatalogComponent) -> Html {
    let Some(label) = &component.state.last_classification else {
        return html! {};
    };
    let tag = ClassificationTag::for_label(Some(label));

    html! {
        <div class="alert alert-info mb-4">
            <h5 class="mb-2">{ "Resultado da classificação" }</h5>
            { badge(&tag) }
        </div>
    }
}

fn build_table(component: &CatalogComponent, link: &Scope<CatalogComponent>) -> Html {
    let body = match table_view(&component.state.records) {
        TableView::Empty { message, colspan } => html! {
            <tr><td colspan={colspan.to_string()} class="text-center">{ message }</td></tr>
        },
        TableView::Rows(rows) => rows.iter().map(|row| build_row(row, link)).collect::<Html>(),
    };
    let status = match component.state.list_status {
        ListStatus::Errored => html! {
            <p class="text-danger small mb-2">{ "Não foi possível atualizar a lista." }</p>
        },
        ListStatus::Idle | ListStatus::Loading | ListStatus::Rendered => html! {},
    };

    html! {
        <div class="card">
            <div class="card-header">{ "Vinhos cadastrados" }</div>
            <div class="card-body table-responsive">
                { status }
                <table class="table table-striped align-middle">
                    <thead>
                        <tr>
                            <th>{ "ID" }</th>
                            <th>{ "Nome" }</th>
                            <th>{ "Documento" }</th>
                            <th>{ "Fornecedor" }</th>
                            <th>{ "Classificação" }</th>
                            <th>{ "Ações" }</th>
                        </tr>
                    </thead>
                    <tbody>{ body }</tbody>
                </table>
            </div>
        </div>
    }
}

fn build_row(row: &RowView, link: &Scope<CatalogComponent>) -> Html {
    let actions = row
        .actions
        .iter()
        .map(|action| action_button(*action, link))
        .collect::<Html>();

    html! {
        <tr key={row.id.to_string()}>
            { for row.cells.iter().map(|cell| html! { <td>{ cell.clone() }</td> }) }
            <td>{ badge(&row.tag) }</td>
            <td>{ actions }</td>
        </tr>
    }
}

fn action_button(action: RowAction, link: &Scope<CatalogComponent>) -> Html {
    let (class, icon, title) = match action {
        RowAction::Edit(_) => ("btn btn-sm btn-outline-primary me-2", "fas fa-edit", "Editar"),
        RowAction::Delete(_) => ("btn btn-sm btn-outline-danger", "fas fa-trash-alt", "Excluir"),
    };
    let onclick = link.callback(move |_: MouseEvent| match action {
        RowAction::Edit(id) => Msg::Edit(id),
        RowAction::Delete(id) => Msg::Delete(id),
    });

    html! {
        <button type="button" class={class} title={title} {onclick}>
            <i class={icon}></i>
        </button>
    }
}

fn badge(tag: &ClassificationTag) -> Html {
    html! {
        <span class={classes!("badge", tag.tone.badge_class())}>{ tag.text.clone() }</span>
    }
}

/// Full-screen spinner shown while a workflow holds the controller.
fn build_loader(component: &CatalogComponent) -> Html {
    if component.controller.busy().is_none() {
        return html! {};
    }

    html! {
        <div style="position:fixed;top:0;left:0;width:100%;height:100%;background:rgba(0,0,0,0.5);z-index:9999;display:flex;justify-content:center;align-items:center;">
            <div class="spinner-border text-primary" style="width:3rem;height:3rem;" role="status">
                <span class="visually-hidden">{ "Carregando..." }</span>
            </div>
        </div>
    }
}
