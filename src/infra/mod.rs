pub mod http;
pub mod placeholder;
