mod app_settings;
mod position;
mod question;
mod selection;
mod set;

pub use app_settings::{AppSettings, AppSettingsError, THEME_KEY, Theme};
pub use position::Position;
pub use question::{AnswerOption, OptionId, OptionSet, Question, QuestionDraft, QuestionError};
pub use selection::{PracticeMode, QuestionSetKind, UnknownSelection};
pub use set::{QuestionSet, Scenario};
