//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, CommandRunner)
//! but are themselves concrete structs, not traits.

mod package_manager;
mod tag_service;
mod tag_store;

pub use package_manager::PackageManager;
pub use tag_service::TagService;
pub use tag_store::TagStore;
