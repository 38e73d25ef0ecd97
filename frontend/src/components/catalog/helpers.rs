//! Browser-side helpers for the catalog component.
//!
//! - **Notices**: the transient banner every workflow ends with, either a
//!   success confirmation or the message of the error that stopped it.
//! - **Confirmation**: the blocking prompt guarding deletions.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use common::model::wine::WineId;

use crate::controller::WorkflowError;

/// How long a notice stays on screen.
const NOTICE_TIMEOUT_MS: u32 = 7_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Danger,
            text: text.into(),
        }
    }
}

impl From<&WorkflowError> for Notice {
    fn from(err: &WorkflowError) -> Self {
        Notice::danger(err.to_string())
    }
}

/// Shows a dismissible banner at the top of the page and removes it after
/// [`NOTICE_TIMEOUT_MS`].
///
/// The text is inserted as plain text: service messages are never
/// interpreted as markup.
pub fn show_toast(notice: &Notice) {
    let class = match notice.level {
        NoticeLevel::Success => "alert alert-success alert-dismissible fade show",
        NoticeLevel::Danger => "alert alert-danger alert-dismissible fade show",
    };

    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_class_name(class);
                toast.set_attribute("role", "alert").ok();
                toast.set_text_content(Some(&notice.text));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("top", "1rem").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("z-index", "1050").ok();

                if body.prepend_with_node_1(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                        html_toast.remove();
                    });
                }
            }
        }
    }
}

pub fn notify_all(notices: &[Notice]) {
    for notice in notices {
        show_toast(notice);
    }
}

/// Blocking confirmation before a deletion. A missing window counts as a
/// refusal.
pub fn confirm_delete(id: WineId) -> bool {
    log::debug!("asking to confirm deletion of wine {}", id);
    web_sys::window()
        .and_then(|w| {
            w.confirm_with_message("Tem certeza que deseja excluir este vinho?")
                .ok()
        })
        .unwrap_or(false)
}
