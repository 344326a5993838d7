//! Chili AI Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod config;
pub mod freshness;
pub mod probability;
pub mod parser;
pub mod storage;
pub mod history;
pub mod session;

pub use types::{ClassProbability, PredictionResult};
pub use error::{Error, PredictError, Result};
pub use config::{resolve_api_url, API_URL_ENV, DEFAULT_API_URL, IMAGE_FIELD};
pub use freshness::{care_tips_for, color_for, CareTips, Freshness};
pub use probability::{bar_width, parse_percentage, sorted_probabilities};
pub use parser::interpret_response;
pub use storage::{KeyValueStore, MemoryStore};
pub use history::{HistoryList, HistoryStore, HISTORY_KEY, HISTORY_LIMIT};
pub use session::{ClassifierSession, PredictionState, RequestTicket, Upload};
