pub mod contact;
pub mod diagnostics;
pub mod profile;
pub mod projects;
