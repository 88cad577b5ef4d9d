//! Integration test modules.

mod debounce;
mod listing_flow;
