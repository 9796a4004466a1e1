pub mod echo_response;
pub mod incoming_request;
pub mod normalized_body;
pub mod proxy_event;

use indexmap::IndexMap;

/// Header name to value, in delivery order.
pub type Headers = IndexMap<String, String>;
pub type QueryParameters = IndexMap<String, String>;
pub type MultiValueQueryParameters = IndexMap<String, Vec<String>>;

pub use echo_response::EchoResponse;
pub use incoming_request::IncomingRequest;
pub use normalized_body::{FormMap, FormValue, NormalizedBody};
pub use proxy_event::{ProxyRequest, ProxyResponse};
