mod components;
mod hooks;
mod services;

use components::{EmployeeForm, EmployeeFormProps};
use services::dom::{create_app_root, form_action, load_config, mount_host};
use services::flash::dismiss_flash_messages;
use services::logging::Logger;

fn main() {
    let host = match mount_host() {
        Ok(element) => element,
        Err(e) => {
            Logger::error_with_component("main", &format!("Employee form not started: {:#}", e));
            return;
        }
    };

    let config = load_config(&host);
    Logger::set_level(config.log_level);

    if let Err(e) = dismiss_flash_messages(config.flash_timeline()) {
        Logger::warn_with_component("main", &format!("Flash messages left in place: {:#}", e));
    }

    let root = match create_app_root(&host) {
        Ok(root) => root,
        Err(e) => {
            Logger::error_with_component("main", &format!("Employee form not started: {:#}", e));
            return;
        }
    };

    let props = EmployeeFormProps {
        action: form_action(&host),
        config,
    };
    Logger::info_with_component("main", "Mounting employee form");
    yew::Renderer::<EmployeeForm>::with_root_and_props(root, props).render();
}
