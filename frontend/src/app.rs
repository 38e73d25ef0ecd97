use crate::components::catalog::CatalogComponent;
use crate::config::AppConfig;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let api_base_url = ctx.props().config.api_base_url.clone();
        html! {
            <div>
                <CatalogComponent api_base_url={api_base_url} />
            </div>
        }
    }
}
