pub mod echo;
pub mod proxy;

pub use echo::echo_request;
pub use proxy::{handle_proxy_event, handle_proxy_event_json, invoke_from, invoke_from_path};
