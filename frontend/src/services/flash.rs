use anyhow::{anyhow, Result};
use gloo::timers::future::TimeoutFuture;
use shared::FlashTimeline;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::services::dom::document;
use crate::services::logging::Logger;

pub const FLASH_MESSAGE_SELECTOR: &str = ".flash-message";

/// Schedule dismissal of every flash message currently in the document.
/// Returns how many were scheduled.
pub fn dismiss_flash_messages(timeline: FlashTimeline) -> Result<usize> {
    let messages = document()?
        .query_selector_all(FLASH_MESSAGE_SELECTOR)
        .map_err(|e| anyhow!("Failed to query flash messages: {:?}", e))?;

    let mut scheduled = 0;
    for index in 0..messages.length() {
        let Some(node) = messages.item(index) else {
            continue;
        };
        if let Ok(message) = node.dyn_into::<HtmlElement>() {
            schedule_flash_dismissal(message, timeline);
            scheduled += 1;
        }
    }

    Logger::debug_with_component(
        "flash",
        &format!("Scheduled dismissal of {} flash message(s)", scheduled),
    );
    Ok(scheduled)
}

/// Fade the message out after `display_ms`, then remove it `fade_ms` later.
/// Fire-once; there is no way to cancel.
pub fn schedule_flash_dismissal(message: HtmlElement, timeline: FlashTimeline) {
    spawn_local(async move {
        TimeoutFuture::new(timeline.display_ms).await;
        if let Some(opacity) = timeline.opacity_at(timeline.display_ms) {
            if let Err(e) = message.style().set_property("opacity", opacity) {
                Logger::warn_with_component("flash", &format!("Failed to fade message: {:?}", e));
            }
        }

        TimeoutFuture::new(timeline.fade_ms).await;
        message.remove();
    });
}
