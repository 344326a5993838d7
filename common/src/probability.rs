//! 確率リストの並べ替え
//!
//! 比較にだけ数値を使い、表示は元の文字列のまま。

use crate::types::ClassProbability;
use std::cmp::Ordering;

/// パーセンテージ文字列を数値に変換
///
/// 前後の空白と末尾の `%` を1つだけ許す。NaNは無効扱い。
pub fn parse_percentage(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// 降順に安定ソートした参照のリストを返す
///
/// 数値にできない項目は末尾に回し、相対順序を保つ。
pub fn sorted_probabilities(probabilities: &[ClassProbability]) -> Vec<&ClassProbability> {
    let mut keyed: Vec<(Option<f64>, &ClassProbability)> = probabilities
        .iter()
        .map(|p| (parse_percentage(&p.persentase), p))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, p)| p).collect()
}

/// バーの幅（0〜100）
pub fn bar_width(value: &str) -> f64 {
    parse_percentage(value).map(|v| v.clamp(0.0, 100.0)).unwrap_or(0.0)
}
