pub mod http;
pub mod identity;

pub use http::HttpClient;
pub use identity::UserAgentPool;
