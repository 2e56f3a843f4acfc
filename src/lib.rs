//! Strict `${variable}` template substitution.
//!
//! This crate provides:
//! - A substitution engine resolving `${variable}` placeholders from a
//!   name→value map, with a one-level `${${...}}` escape
//! - Strict error reporting: an unterminated placeholder or an unknown
//!   variable fails the whole call, with no partial output
//! - An in-memory template store with CRUD operations and rendering
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use ara_template_engine::TemplateProcessor;
//!
//! let mut values = HashMap::new();
//! values.insert("country".to_string(), "Spain".to_string());
//!
//! let processor = TemplateProcessor::new(Arc::new(values));
//! let out = processor.process_template("The rain in ${country}").unwrap();
//! assert_eq!(out, "The rain in Spain");
//! ```

// Substitution engine
mod processor;

// Template registry
mod store;

// Shared types and errors
mod types;

pub use processor::{TemplateProcessor, VARIABLE_END, VARIABLE_START};
pub use store::{create_template_store, TemplateStore};
pub use types::{Template, TemplateError, TemplateResult};
