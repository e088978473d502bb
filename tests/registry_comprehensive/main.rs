//! Registry Comprehensive Test Suite
//!
//! Exercises the public facade end to end.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Payload validation invariants
//! - **Tier 2**: Namespace isolation
//! - **Tier 3**: Pagination and search
//! - **Tier 4**: Persistence across reopen
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test registry_comprehensive
//! ```

mod test_utils;

mod tier1_validation_invariants;
mod tier2_namespace_isolation;
mod tier3_pagination_search;
mod tier4_persistence;
