pub mod dao;
pub mod http;
pub mod models;

pub use http::{AccountingServices, router};
pub use models::{Deposit, InvoiceHistoryTask, InvoiceTask};
