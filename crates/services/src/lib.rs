#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod checklist_service;
pub mod error;
pub mod tracker_service;

pub use api::{ApiConfig, HttpProgressApi, ProgressApi};
pub use app_services::AppServices;
pub use checklist_service::ChecklistService;
pub use error::{ApiError, AppServicesError, ChecklistServiceError, TrackerError};
pub use tracker_service::TrackerService;
