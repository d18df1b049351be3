use crate::services::logging::Logger;
use shared::ChildListError;
use std::cell::RefCell;
use std::rc::Rc;

/// The only two messages the form ever shows in a blocking dialog
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    CapacityReached { capacity: usize },
    MissingRequiredFields,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::CapacityReached { capacity } => {
                ChildListError::CapacityReached {
                    capacity: *capacity,
                }
                .to_string()
            }
            Notice::MissingRequiredFields => "Please fill in all required fields.".to_string(),
        }
    }
}

type NoticeSink = Rc<dyn Fn(&Notice)>;

thread_local! {
    static SINK: RefCell<Option<NoticeSink>> = const { RefCell::new(None) };
}

/// Route notices somewhere other than `alert`; `None` restores the alert
#[cfg_attr(not(test), allow(dead_code))]
pub fn set_notice_sink(sink: Option<NoticeSink>) {
    SINK.with(|slot| *slot.borrow_mut() = sink);
}

/// Show a notice as a blocking alert, or hand it to the installed sink
pub fn show_notice(notice: &Notice) {
    let message = notice.message();
    Logger::info_with_component("notices", &format!("Showing notice: {}", message));

    let sink = SINK.with(|slot| slot.borrow().clone());
    match sink {
        Some(sink) => sink(notice),
        None => gloo::dialogs::alert(&message),
    }
}
