//! Sports-enrollment administration core.
//!
//! Backend library for a university sports department: sports, training
//! groups, semesters, trainers, students and their enrollments. The crate
//! implements the enrollment eligibility and capacity-accounting engine that
//! an HTTP-facing layer consumes.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! - **Service Layer** (`service/`) - Query orchestration consumed by the
//!   request-handling layer
//! - **Data Layer** (`data/`) - Database queries and entity-to-view
//!   conversion, one repository per domain
//! - **Model Layer** (`model/`) - View models and query-result row types
//! - **Error Layer** (`error/`) - Application error types
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Startup** (`startup`) - Database connection and migrations
//!
//! All queries are read-only. Each top-level operation resolves the current
//! semester once and threads the resolved semester through, so a single
//! logical request never observes two different notions of "now".

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
