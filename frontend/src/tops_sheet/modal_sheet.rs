use uuid::Uuid;
use yew::prelude::*;

/// Overlay surface rendered only while `open` is set. The parent owns the
/// open state; the close button reports through `on_close`.
pub struct ModalSheet {
    pub title_id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub title: String,
    #[prop_or_default]
    pub footer: Html,
    pub on_close: Callback<MouseEvent>,
}

impl Component for ModalSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            title_id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        html! {
            <>
                <div class="modal-backdrop fade show"></div>
                <div
                    class="modal fade show d-block"
                    tabindex="-1"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={self.title_id.clone()}
                >
                    <div class="modal-dialog modal-lg">
                        <div class="modal-content">
                            <div class="modal-header">
                                <h5 class="modal-title" id={self.title_id.clone()}>{ props.title.clone() }</h5>
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Fechar"
                                    onclick={props.on_close.clone()}
                                />
                            </div>
                            <div class="modal-body">
                                { props.children.clone() }
                            </div>
                            <div class="modal-footer">
                                { props.footer.clone() }
                            </div>
                        </div>
                    </div>
                </div>
            </>
        }
    }
}
