//! Shared test helpers exercised by the integration tests.
