//! Shared test utilities for faq-service tests.
