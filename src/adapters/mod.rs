// Adapters layer: concrete implementations for external systems (http origin, html page, storage, alert).

pub mod alert;
pub mod http;
pub mod page;
pub mod storage;
