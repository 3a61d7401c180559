//! Offer screen domain: timing state, authored copy, and the outbound
//! contact link.

pub mod contact;
pub mod content;
pub mod state;
