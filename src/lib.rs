//! Emailgen: builds a single email address from a person's full name and a
//! bracketed format template.
//!
//! The format template is a mini-language: placeholders in square brackets
//! name a component of the split name (`[first]`, `[middle]`, `[last]`),
//! optionally carrying a truncation modifier (`[first_initial]`,
//! `[last_three]`). Literal text between placeholders becomes the separator
//! in the generated address, and the domain is appended verbatim.
//!
//! # Example
//!
//! ```
//! use emailgen::generate::generate_email;
//!
//! let email = generate_email("John Doe", "[first_initial].[last]", "@example.com").unwrap();
//! assert_eq!(email.as_deref(), Some("j.doe@example.com"));
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod exit_codes;
pub mod generate;
pub mod name;
pub mod template;
