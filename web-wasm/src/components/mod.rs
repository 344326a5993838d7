pub mod header;
pub mod upload_area;
pub mod result_panel;
pub mod probability_bars;
pub mod care_tips;
pub mod history_panel;
pub mod modal;
