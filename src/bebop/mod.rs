pub mod models;
pub mod quote_service;

pub use quote_service::{BebopQuoteService, QuoteParams, QuoteService, DEFAULT_BEBOP_API_URL};
