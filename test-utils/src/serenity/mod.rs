//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity guild Member objects

pub mod member;

pub use member::create_test_member;
