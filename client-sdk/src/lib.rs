pub mod client;
pub mod external_api;
pub mod store;
pub mod utils;
