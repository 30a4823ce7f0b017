#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod opentdb;
pub mod provider;

pub use config::ProviderConfig;
pub use controller::{ApplyOutcome, FetchTicket, QuizController, fetch_questions};
pub use error::{ConfigError, NetworkError};
pub use opentdb::OpenTdbClient;
pub use provider::TriviaProvider;
