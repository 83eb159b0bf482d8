pub mod categories;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod http;
pub mod list;
pub mod model;
pub mod session;
pub mod store;
