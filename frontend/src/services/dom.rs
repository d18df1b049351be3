use anyhow::{anyhow, Context, Result};
use shared::FormConfig;
use web_sys::{
    Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::services::logging::Logger;

/// Element hosting the form when present; `<body>` otherwise. The form is
/// rendered into a fresh child of the host, never the host itself, because
/// mounting empties the root element.
pub const MOUNT_POINT_ID: &str = "employeeFormRoot";

/// Class of the element the app renders into
pub const APP_ROOT_CLASS: &str = "employee-form-app";

/// Mount-point attribute holding a JSON `FormConfig` override
pub const CONFIG_ATTRIBUTE: &str = "data-config";

/// Mount-point attribute holding the URL the form posts to
pub const ACTION_ATTRIBUTE: &str = "data-action";

pub fn document() -> Result<Document> {
    web_sys::window()
        .ok_or_else(|| anyhow!("No window available"))?
        .document()
        .ok_or_else(|| anyhow!("No document available"))
}

/// Find the element that hosts the form
pub fn mount_host() -> Result<Element> {
    let document = document()?;
    if let Some(element) = document.get_element_by_id(MOUNT_POINT_ID) {
        return Ok(element);
    }
    document
        .body()
        .map(Element::from)
        .context("Document has neither a mount point nor a body")
}

/// Append an empty element to the host for the app to render into, leaving
/// the host's existing content (flash messages included) in place
pub fn create_app_root(host: &Element) -> Result<Element> {
    let root = document()?
        .create_element("div")
        .map_err(|e| anyhow!("Failed to create app root: {:?}", e))?;
    root.set_class_name(APP_ROOT_CLASS);
    host.append_child(&root)
        .map_err(|e| anyhow!("Failed to attach app root: {:?}", e))?;
    Ok(root)
}

/// Parse a JSON config override; a missing attribute means defaults
pub fn parse_config(raw: Option<&str>) -> Result<FormConfig> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => serde_json::from_str(raw).context("Invalid form configuration"),
        None => Ok(FormConfig::default()),
    }
}

/// Read the config override from the mount host, falling back to defaults
pub fn load_config(host: &Element) -> FormConfig {
    let raw = host.get_attribute(CONFIG_ATTRIBUTE);
    parse_config(raw.as_deref()).unwrap_or_else(|e| {
        Logger::warn_with_component("dom", &format!("{:#}, using defaults", e));
        FormConfig::default()
    })
}

pub fn form_action(host: &Element) -> Option<String> {
    host.get_attribute(ACTION_ATTRIBUTE)
        .filter(|action| !action.trim().is_empty())
}

/// Smoothly scroll an element to the vertical centre of the viewport
pub fn scroll_into_view_centered(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::LogLevel;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_parse_config_defaults() {
        assert_eq!(parse_config(None).unwrap(), FormConfig::default());
        assert_eq!(parse_config(Some("  ")).unwrap(), FormConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_parse_config_override() {
        let config = parse_config(Some(r#"{"max_children": 3, "log_level": "warn"}"#)).unwrap();
        assert_eq!(config.max_children, 3);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.flash_display_ms, 5000);
    }

    #[wasm_bindgen_test]
    fn test_invalid_config_falls_back() {
        assert!(parse_config(Some("{not json")).is_err());

        let element = document().unwrap().create_element("div").unwrap();
        element.set_attribute(CONFIG_ATTRIBUTE, "{not json").unwrap();
        assert_eq!(load_config(&element), FormConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_form_action() {
        let element = document().unwrap().create_element("div").unwrap();
        assert_eq!(form_action(&element), None);
        element.set_attribute(ACTION_ATTRIBUTE, "/employee/details").unwrap();
        assert_eq!(form_action(&element), Some("/employee/details".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_mount_host_falls_back_to_body() {
        let host = mount_host().unwrap();
        assert!(host.id() == MOUNT_POINT_ID || host.tag_name() == "BODY");
    }

    #[wasm_bindgen_test]
    fn test_app_root_is_appended_after_existing_content() {
        let document = document().unwrap();
        let host = document.create_element("div").unwrap();
        let message = document.create_element("div").unwrap();
        message.set_class_name("flash-message");
        host.append_child(&message).unwrap();

        let root = create_app_root(&host).unwrap();

        assert_eq!(root.class_name(), APP_ROOT_CLASS);
        assert_eq!(host.child_element_count(), 2);
        assert!(host.first_element_child().unwrap().is_same_node(Some(message.as_ref())));
        assert!(host.last_element_child().unwrap().is_same_node(Some(root.as_ref())));
    }
}
