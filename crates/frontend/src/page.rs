//! Host page plumbing that lives outside the Yew tree.

use auth_form::FormConfig;
use gloo::events::EventListener;
use gloo::utils::{document, document_element};
use web_sys::{Event, HtmlImageElement};

/// `<script type="application/json">` element holding an optional config.
pub const CONFIG_ELEMENT_ID: &str = "auth-form-config";

/// 2x2 lossy WebP; decodes to height 2 only where WebP is supported.
const WEBP_PROBE: &str = "data:image/webp;base64,UklGRjoAAABXRUJQVlA4IC4AAACyAgCdASoCAAIALmk0mk0iIiIiIgBoSygABc6WWgAA/veff/0PP8bA//LwYAAA";

/// Read the form config from the page, falling back to defaults.
pub fn load_config() -> FormConfig {
    let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return FormConfig::default();
    };
    let text = element.text_content().unwrap_or_default();
    match FormConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring page config: {}", e);
            FormConfig::default()
        }
    }
}

/// Drop the no-script fallbacks now that the app is running.
pub fn mark_scripting_enabled() {
    if let Err(e) = document_element().class_list().remove_1("no-js") {
        tracing::warn!("Failed to remove no-js class: {:?}", e);
    }
    if let Ok(Some(warning)) = document().query_selector(".javascript-warning") {
        if let Err(e) = warning.set_attribute("hidden", "") {
            tracing::warn!("Failed to hide javascript warning: {:?}", e);
        }
    }
}

/// Tag the document element with `webp` or `no-webp`.
pub fn detect_webp() {
    let image = match HtmlImageElement::new() {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!("Failed to create WebP probe: {:?}", e);
            return;
        }
    };

    let on_settled = {
        let image = image.clone();
        move |_: &Event| {
            let class = if image.height() == 2 { "webp" } else { "no-webp" };
            if let Err(e) = document_element().class_list().add_1(class) {
                tracing::warn!("Failed to tag WebP support: {:?}", e);
            }
        }
    };
    EventListener::once(&image, "load", on_settled.clone()).forget();
    EventListener::once(&image, "error", on_settled).forget();
    image.set_src(WEBP_PROBE);
}
