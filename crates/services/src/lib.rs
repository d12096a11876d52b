#![forbid(unsafe_code)]

pub mod app_services;
pub mod app_settings_service;
pub mod error;
pub mod quiz_loader;
pub mod sessions;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use app_settings_service::AppSettingsService;
pub use error::{AppServicesError, QuizLoadError, SettingsError};
pub use quiz_loader::QuizLoaderService;
pub use sessions::{
    ExamReport, ExamSession, FinishReason, PickerEntry, RationaleEntry, ReviewRow,
    SessionProgress, StudyFeedback, StudyLayout, StudySession,
};
