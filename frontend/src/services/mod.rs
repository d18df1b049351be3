pub mod date_utils;
pub mod dom;
pub mod flash;
pub mod logging;
pub mod notices;
