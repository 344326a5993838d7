//! 予測セッションの状態遷移
//!
//! アップロード → 予測 → 表示 → 履歴 の流れを1つの状態として持つ。
//!
//! ```text
//! Idle ──begin_request──▶ Loading ──complete(Ok)──▶ Success
//!   ▲                        │      └─complete(Err)─▶ Failed
//!   └────────── reset ───────┴──────────────────────────┘
//! ```
//!
//! リクエストごとに連番のチケットを発行し、最新のチケット以外の応答は捨てる。

use crate::error::PredictError;
use crate::freshness::CareTips;
use crate::history::{HistoryList, HistoryStore};
use crate::storage::KeyValueStore;
use crate::types::PredictionResult;

/// 表示状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PredictionState {
    #[default]
    Idle,
    Loading,
    Success(PredictionResult),
    Failed(PredictError),
}

/// 発行済みリクエストの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// 選択中の画像
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Upload {
    pub file_name: String,
    /// プレビュー用のData URL
    pub preview: Option<String>,
}

/// 1画面分のセッション
#[derive(Debug)]
pub struct ClassifierSession<S> {
    history: HistoryStore<S>,
    upload: Option<Upload>,
    state: PredictionState,
    sequence: u64,
}

impl<S: KeyValueStore> ClassifierSession<S> {
    /// ストアから履歴を読み込んで開始
    pub fn new(store: S) -> Self {
        Self {
            history: HistoryStore::open(store),
            upload: None,
            state: PredictionState::Idle,
            sequence: 0,
        }
    }

    /// 新しい画像でリクエストを開始
    pub fn begin_request(&mut self, file_name: impl Into<String>) -> RequestTicket {
        self.sequence += 1;
        self.upload = Some(Upload {
            file_name: file_name.into(),
            preview: None,
        });
        self.state = PredictionState::Loading;
        RequestTicket(self.sequence)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.sequence
    }

    /// プレビューを設定（古いチケットなら無視）
    pub fn set_preview(&mut self, ticket: RequestTicket, data_url: String) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match self.upload.as_mut() {
            Some(upload) => {
                upload.preview = Some(data_url);
                true
            }
            None => false,
        }
    }

    /// 応答を反映
    ///
    /// 最新のリクエストでなければ何もせず `false` を返す。
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        outcome: std::result::Result<PredictionResult, PredictError>,
    ) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "Mengabaikan respons lama (permintaan #{}, terbaru #{})",
                ticket.0,
                self.sequence
            );
            return false;
        }

        self.state = match outcome {
            Ok(result) => {
                self.history.record(result.clone());
                PredictionState::Success(result)
            }
            Err(err) => {
                log::info!("Prediksi gagal: {}", err);
                PredictionState::Failed(err)
            }
        };
        true
    }

    /// 選択・プレビュー・結果・エラーを消す（履歴は残す）
    pub fn reset(&mut self) {
        self.sequence += 1;
        self.upload = None;
        self.state = PredictionState::Idle;
    }

    pub fn state(&self) -> &PredictionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PredictionState::Loading)
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match &self.state {
            PredictionState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PredictError> {
        match &self.state {
            PredictionState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn upload(&self) -> Option<&Upload> {
        self.upload.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.upload.as_ref().and_then(|u| u.preview.as_deref())
    }

    /// 現在の結果に対するケアのヒント
    pub fn care_tips(&self) -> Option<CareTips> {
        self.result().and_then(|r| r.freshness().care_tips())
    }

    pub fn history(&self) -> &HistoryList {
        self.history.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freshness::color_for;
    use crate::history::{HISTORY_KEY, HISTORY_LIMIT};
    use crate::parser::interpret_response;
    use crate::probability::sorted_probabilities;
    use crate::storage::MemoryStore;

    const SEGAR_BODY: &str = r#"{"prediction":"Segar","confidence":"92%","kadar_air":"85%",
        "probabilities":[{"kelas":"Segar","persentase":"92"},{"kelas":"Sedang","persentase":"5"},
        {"kelas":"Kering","persentase":"3"}]}"#;

    fn result(label: &str) -> PredictionResult {
        PredictionResult {
            prediction: label.to_string(),
            confidence: "90".to_string(),
            probabilities: vec![],
            kadar_air: String::new(),
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let session = ClassifierSession::new(MemoryStore::new());
        assert_eq!(session.state(), &PredictionState::Idle);
        assert!(!session.is_loading());
        assert!(session.result().is_none());
        assert!(session.error().is_none());
        assert!(session.preview().is_none());
    }

    #[test]
    fn test_successful_prediction_scenario() {
        let store = MemoryStore::new();
        let mut session = ClassifierSession::new(&store);

        let ticket = session.begin_request("cabai.jpg");
        assert!(session.is_loading());
        assert!(session.set_preview(ticket, "data:image/jpeg;base64,AAAA".to_string()));

        let applied = session.complete(ticket, interpret_response(200, SEGAR_BODY));
        assert!(applied);
        assert!(!session.is_loading());

        let shown = session.result().expect("result");
        assert_eq!(shown.prediction, "Segar");
        assert_eq!(color_for(&shown.prediction), "green-400");
        let order: Vec<&str> = sorted_probabilities(&shown.probabilities)
            .iter()
            .map(|p| p.kelas.as_str())
            .collect();
        assert_eq!(order, vec!["Segar", "Sedang", "Kering"]);
        assert_eq!(
            session.care_tips().map(|t| t.title),
            Some("Perawatan Cabai Segar")
        );

        assert_eq!(session.history().len(), 1);
        assert!(store.read(HISTORY_KEY).unwrap().is_some());
    }

    #[test]
    fn test_classification_failure_scenario() {
        let store = MemoryStore::new();
        let mut session = ClassifierSession::new(&store);
        let ticket = session.begin_request("kucing.png");

        let body = r#"{"status":"Gagal","message":"Bukan gambar cabai"}"#;
        session.complete(ticket, interpret_response(200, body));

        assert!(session.result().is_none());
        assert_eq!(
            session.error().map(|e| e.user_message()),
            Some("Bukan gambar cabai")
        );
        assert!(session.history().is_empty());
        assert_eq!(store.read(HISTORY_KEY).unwrap(), None);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_unreachable_endpoint_scenario() {
        let mut session = ClassifierSession::new(MemoryStore::new());
        let ticket = session.begin_request("cabai.jpg");

        session.complete(ticket, Err(PredictError::Transport(String::new())));

        assert!(!session.is_loading());
        assert_eq!(
            session.error().map(|e| e.user_message()),
            Some("Gagal terhubung ke API.")
        );
    }

    #[test]
    fn test_reset_clears_everything_but_history() {
        let mut session = ClassifierSession::new(MemoryStore::new());
        let ticket = session.begin_request("cabai.jpg");
        session.set_preview(ticket, "data:image/png;base64,AA".to_string());
        session.complete(ticket, Ok(result("Kering")));

        session.reset();

        assert_eq!(session.state(), &PredictionState::Idle);
        assert!(session.upload().is_none());
        assert!(session.preview().is_none());
        assert!(session.result().is_none());
        assert!(session.error().is_none());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut session = ClassifierSession::new(MemoryStore::new());
        let first = session.begin_request("a.jpg");
        let second = session.begin_request("b.jpg");

        // 2つ目が先に返る
        assert!(session.complete(second, Ok(result("Sedang"))));
        // 1つ目は古いので捨てられる
        assert!(!session.complete(first, Ok(result("Segar"))));

        assert_eq!(session.result().map(|r| r.prediction.as_str()), Some("Sedang"));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.upload().map(|u| u.file_name.as_str()), Some("b.jpg"));
    }

    #[test]
    fn test_response_after_reset_is_ignored() {
        let mut session = ClassifierSession::new(MemoryStore::new());
        let ticket = session.begin_request("a.jpg");
        session.reset();

        assert!(!session.set_preview(ticket, "data:,".to_string()));
        assert!(!session.complete(ticket, Ok(result("Segar"))));
        assert_eq!(session.state(), &PredictionState::Idle);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_new_request_clears_previous_result() {
        let mut session = ClassifierSession::new(MemoryStore::new());
        let ticket = session.begin_request("a.jpg");
        session.complete(ticket, Ok(result("Segar")));

        session.begin_request("b.jpg");
        assert!(session.is_loading());
        assert!(session.result().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_history_bounded_across_session() {
        let mut session = ClassifierSession::new(MemoryStore::new());
        for label in ["Segar", "Sedang", "Kering", "Segar", "Sedang"] {
            let ticket = session.begin_request(format!("{}.jpg", label));
            session.complete(ticket, Ok(result(label)));
            assert!(session.history().len() <= HISTORY_LIMIT);
        }
        let labels: Vec<&str> = session
            .history()
            .iter()
            .map(|r| r.prediction.as_str())
            .collect();
        assert_eq!(labels, vec!["Sedang", "Segar", "Kering"]);
    }

    #[test]
    fn test_session_rehydrates_history() {
        let store = MemoryStore::new();
        {
            let mut session = ClassifierSession::new(&store);
            let ticket = session.begin_request("a.jpg");
            session.complete(ticket, Ok(result("Kering")));
        }
        let session = ClassifierSession::new(&store);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().as_slice()[0].prediction, "Kering");
    }

    #[test]
    fn test_unknown_label_has_no_care_tips() {
        let mut session = ClassifierSession::new(MemoryStore::new());
        let ticket = session.begin_request("a.jpg");
        session.complete(ticket, Ok(result("Busuk")));
        assert!(session.result().is_some());
        assert!(session.care_tips().is_none());
    }
}
