//! Purchase service module
//!
//! A purchase debits the buyer, appends a ledger entry and grants ownership
//! in one unit of work.

mod service;

#[cfg(test)]
mod tests;

pub use service::PurchaseService;
