//! Integration test harness.

mod flow;
mod mock_providers;
