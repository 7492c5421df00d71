//! tracadm-messages
//!
//! Centralized messaging system for the tracadm CLI.
//! Provides standardized templates, a message builder, and the `msg!`
//! macro for user-facing output.

pub mod builder;
pub mod macros;
pub mod messages;

pub use messages::MESSAGES;
