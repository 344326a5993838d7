//! Chili AI CLI
//!
//! 予測APIへの送信、端末表示、ファイルによる履歴の保存

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod store;
