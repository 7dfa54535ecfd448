pub mod controller;
pub mod http_api;
