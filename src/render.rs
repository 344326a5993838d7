//! 端末向けの表示
//!
//! 文字列を返すだけで出力はしない（main側でprintする）。

use crate::error::ChiliAiError;
use chili_ai_common::{
    bar_width, care_tips_for, sorted_probabilities, CareTips, Freshness, HistoryList,
    PredictError, PredictionResult,
};
use std::fmt::Write;

const BAR_CELLS: usize = 30;

/// 確率バー（30セル）
pub fn probability_bar(persentase: &str) -> String {
    let filled = ((bar_width(persentase) / 100.0) * BAR_CELLS as f64).round() as usize;
    let filled = filled.min(BAR_CELLS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

/// 予測結果
pub fn render_result(result: &PredictionResult) -> String {
    let mut out = String::new();
    let freshness = result.freshness();

    let _ = writeln!(out, "Hasil      : {} [{}]", result.prediction, freshness.color());
    let _ = writeln!(out, "Keyakinan  : {}", result.confidence);
    let _ = writeln!(out, "Kadar Air  : {}", result.moisture());

    if !result.probabilities.is_empty() {
        let _ = writeln!(out, "\nDetail Probabilitas:");
        let width = result
            .probabilities
            .iter()
            .map(|p| p.kelas.chars().count())
            .max()
            .unwrap_or(0);
        for prob in sorted_probabilities(&result.probabilities) {
            let _ = writeln!(
                out,
                "  {:<width$}  {}  {}%",
                prob.kelas,
                probability_bar(&prob.persentase),
                prob.persentase,
                width = width
            );
        }
    }

    if let Some(tips) = freshness.care_tips() {
        out.push('\n');
        out.push_str(&render_care_tips(&tips));
    }

    out
}

pub fn render_care_tips(tips: &CareTips) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}:", tips.title);
    for tip in tips.tips {
        let _ = writeln!(out, "  - {}", tip);
    }
    out
}

/// `tips` サブコマンド用
pub fn render_tips_for(label: &str) -> String {
    let freshness = Freshness::from_label(label);
    match care_tips_for(label) {
        Some(tips) => format!(
            "{} [{}]\n\n{}",
            freshness,
            freshness.color(),
            render_care_tips(&tips)
        ),
        None => format!(
            "Tidak ada saran perawatan untuk \"{}\" [{}]\n",
            label,
            freshness.color()
        ),
    }
}

/// 履歴一覧（新しい順）
pub fn render_history(history: &HistoryList) -> String {
    if history.is_empty() {
        return "Belum ada riwayat analisis.\n".to_string();
    }

    let mut out = String::from("Riwayat Analisis Terakhir:\n");
    for (i, item) in history.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} [{}]  Keyakinan: {}  Kadar Air: {}",
            i + 1,
            item.prediction,
            item.freshness().color(),
            item.confidence,
            item.moisture()
        );
    }
    out
}

/// 終了時のエラー表示（Debug表記は出さない）
pub fn render_error(err: &ChiliAiError) -> String {
    let mut out = format!("❌ {}", err);
    if let ChiliAiError::Predict(PredictError::Classification {
        confidence: Some(confidence),
        ..
    }) = err
    {
        let _ = write!(out, "\n   Keyakinan: {}", confidence);
    }
    out
}
