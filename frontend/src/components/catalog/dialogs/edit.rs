use yew::html::Scope;
use yew::prelude::*;

use crate::components::catalog::projection::edit_form_view;
use crate::components::catalog::view::field_input;
use crate::components::catalog::{CatalogComponent, Msg};
use crate::tops_sheet::modal_sheet::ModalSheet;

/// Edit surface for the open `EditSession`. Inputs write back into the
/// session's form, so Save always sends what is displayed.
pub fn edit_dialog(component: &CatalogComponent, link: &Scope<CatalogComponent>) -> Html {
    let Some(session) = &component.state.editing else {
        return html! {};
    };
    let busy = component.controller.busy().is_some();

    let inputs = edit_form_view(&session.form)
        .into_iter()
        .map(|view| {
            let field = view.field;
            field_input(
                &view,
                link.callback(move |e: InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    Msg::EditInput(field, input.value())
                }),
            )
        })
        .collect::<Html>();

    let footer = html! {
        <>
            <button type="button" class="btn btn-secondary" onclick={link.callback(|_: MouseEvent| Msg::CloseEdit)}>
                { "Cancelar" }
            </button>
            <button
                type="button"
                class="btn btn-primary"
                disabled={busy}
                onclick={link.callback(|_: MouseEvent| Msg::Save)}
            >
                { "Salvar alterações" }
            </button>
        </>
    };

    html! {
        <ModalSheet
            open={true}
            title={format!("Editar vinho #{}", session.id())}
            footer={footer}
            on_close={link.callback(|_: MouseEvent| Msg::CloseEdit)}
        >
            <form class="row g-3" onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Save
            })}>
                { inputs }
            </form>
        </ModalSheet>
    }
}
