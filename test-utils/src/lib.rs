//! Sportadmin Test Utils
//!
//! Shared testing utilities for the sports-enrollment backend. This crate
//! offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and customizable table schemas, plus factories for test data.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_semester_queries() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_enrollment_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
