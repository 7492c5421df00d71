pub mod error;
pub mod output_macros;
pub mod project;
pub mod temp_dir;
pub mod validation;

// Re-export the project identity types for convenience
pub use project::{ProjectDescriptor, ProjectType};
