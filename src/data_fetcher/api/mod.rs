mod core;
pub(crate) mod fetch_utils;
pub mod http_client;
pub mod season_fallback;
pub mod urls;

pub use core::F1Client;
pub use http_client::create_http_client_with_timeout;
pub use season_fallback::season_plan;
pub use urls::*;
