//! Wine catalog page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, projections and view rendering.
//!
//! Responsibilities
//! - Re-export the component, its messages and properties.
//! - Build the controller from the configured service address.
//! - On first render, run the list workflow so the table is populated.

use std::rc::Rc;

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod projection;
mod props;
mod state;
mod update;
mod view;

use crate::api::{GlooTransport, RecordStore};
use crate::controller::Controller;

pub use messages::Msg;
pub use props::CatalogProps;
pub use state::CatalogComponent;
use state::CatalogState;

impl Component for CatalogComponent {
    type Message = Msg;
    type Properties = CatalogProps;

    fn create(ctx: &Context<Self>) -> Self {
        let transport = GlooTransport::new(ctx.props().api_base_url.to_string());
        CatalogComponent {
            controller: Rc::new(Controller::new(RecordStore::new(transport))),
            state: CatalogState::new(),
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Load);
        }
    }
}
