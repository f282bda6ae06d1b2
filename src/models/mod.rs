// Re-export all model types for ease of use

pub mod contact;
pub mod email;
pub mod profile;
pub mod project;
pub mod responses;

pub use contact::*;
pub use email::*;
pub use profile::*;
pub use project::*;
pub use responses::*;
