//! 予測結果の型定義
//!
//! CLIとWeb(WASM)で共有される型。フィールド名は外部APIのJSONに合わせている:
//! - PredictionResult: `{prediction, confidence, probabilities, kadar_air}`
//! - ClassProbability: `{kelas, persentase}`

use serde::{Deserialize, Serialize};

use crate::freshness::Freshness;

/// クラスごとの確率
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    /// クラス名（例: "Segar"）
    pub kelas: String,
    /// パーセンテージ文字列（例: "92.50"）
    pub persentase: String,
}

/// 予測結果
///
/// 表示用の整形と並べ替え以外では中身を解釈しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: String,

    #[serde(default)]
    pub confidence: String,

    #[serde(default)]
    pub probabilities: Vec<ClassProbability>,

    /// 推定水分量
    #[serde(default)]
    pub kadar_air: String,
}

impl PredictionResult {
    pub fn freshness(&self) -> Freshness {
        Freshness::from_label(&self.prediction)
    }

    /// 表示用の水分量。APIが空を返した場合はクラスの代表値を使う
    pub fn moisture(&self) -> &str {
        if self.kadar_air.trim().is_empty() {
            self.freshness().typical_moisture()
        } else {
            &self.kadar_air
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_result_deserialize() {
        let json = r#"{
            "status": "Sukses",
            "prediction": "Segar",
            "confidence": "92%",
            "kadar_air": "85%",
            "probabilities": [
                {"kelas": "Segar", "persentase": "92"},
                {"kelas": "Sedang", "persentase": "5"},
                {"kelas": "Kering", "persentase": "3"}
            ]
        }"#;

        let result: PredictionResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.prediction, "Segar");
        assert_eq!(result.confidence, "92%");
        assert_eq!(result.kadar_air, "85%");
        assert_eq!(result.probabilities.len(), 3);
        assert_eq!(result.probabilities[1].kelas, "Sedang");
        assert_eq!(result.probabilities[1].persentase, "5");
    }

    #[test]
    fn test_prediction_result_missing_optional_fields() {
        let json = r#"{"prediction": "kering"}"#;

        let result: PredictionResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.prediction, "kering");
        assert_eq!(result.confidence, "");
        assert!(result.probabilities.is_empty());
        assert_eq!(result.kadar_air, "");
    }

    #[test]
    fn test_prediction_result_requires_prediction() {
        let json = r#"{"confidence": "90"}"#;
        assert!(serde_json::from_str::<PredictionResult>(json).is_err());
    }

    #[test]
    fn test_prediction_result_serializes_api_field_names() {
        let result = PredictionResult {
            prediction: "Sedang".to_string(),
            confidence: "80.00".to_string(),
            probabilities: vec![ClassProbability {
                kelas: "Sedang".to_string(),
                persentase: "80.00".to_string(),
            }],
            kadar_air: "40% - 60%".to_string(),
        };

        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"kadar_air\":\"40% - 60%\""));
        assert!(json.contains("\"kelas\":\"Sedang\""));
        assert!(json.contains("\"persentase\":\"80.00\""));
    }

    #[test]
    fn test_moisture_prefers_api_value() {
        let result = PredictionResult {
            prediction: "Segar".to_string(),
            confidence: String::new(),
            probabilities: vec![],
            kadar_air: "87%".to_string(),
        };
        assert_eq!(result.moisture(), "87%");
    }

    #[test]
    fn test_moisture_falls_back_to_class_value() {
        let result = PredictionResult {
            prediction: "KERING".to_string(),
            confidence: String::new(),
            probabilities: vec![],
            kadar_air: " ".to_string(),
        };
        assert_eq!(result.moisture(), "~11.11%");
    }
}
