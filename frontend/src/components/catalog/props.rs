//! Properties of the `CatalogComponent`.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CatalogProps {
    /// Base address of the classification service, without trailing slash.
    ///
    /// Read once when the component is created; the record store keeps
    /// using it for the lifetime of the page.
    pub api_base_url: AttrValue,
}
