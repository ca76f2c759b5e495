//! Service layer containing business logic orchestration.

mod release_service;
mod report;

pub use release_service::ReleaseService;
