//! 予測履歴
//!
//! 新しい順に最大3件。永続化に失敗しても利用者には見せず、ログだけ残す。

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::types::PredictionResult;

/// 永続化スロットのキー
pub const HISTORY_KEY: &str = "chiliHistory";
/// 保持する件数
pub const HISTORY_LIMIT: usize = 3;

/// 新しい順の履歴リスト
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryList {
    entries: Vec<PredictionResult>,
}

impl HistoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 先頭に追加して上限で切り詰める（重複は除かない）
    pub fn push(&mut self, result: PredictionResult) {
        self.entries.insert(0, result);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PredictionResult> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[PredictionResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// JSON文字列から復元（上限を超える分は切り捨てる）
    pub fn from_json(json: &str) -> Result<Self> {
        let mut entries: Vec<PredictionResult> = serde_json::from_str(json)?;
        entries.truncate(HISTORY_LIMIT);
        Ok(Self { entries })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }
}

impl<'a> IntoIterator for &'a HistoryList {
    type Item = &'a PredictionResult;
    type IntoIter = std::slice::Iter<'a, PredictionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// 永続化付きの履歴
#[derive(Debug)]
pub struct HistoryStore<S> {
    store: S,
    list: HistoryList,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// スロットから読み込む。読めなければ空で始める
    pub fn open(store: S) -> Self {
        let list = match store.read(HISTORY_KEY) {
            Ok(Some(json)) => HistoryList::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Gagal memuat riwayat dari penyimpanan: {}", e);
                HistoryList::new()
            }),
            Ok(None) => HistoryList::new(),
            Err(e) => {
                log::warn!("Gagal membaca penyimpanan riwayat: {}", e);
                HistoryList::new()
            }
        };
        Self { store, list }
    }

    pub fn list(&self) -> &HistoryList {
        &self.list
    }

    /// 追加して保存。保存失敗はログのみ
    pub fn record(&mut self, result: PredictionResult) {
        self.list.push(result);
        if let Err(e) = self.persist() {
            log::warn!("Gagal menyimpan riwayat: {}", e);
        }
    }

    /// 履歴とスロットを空にする
    pub fn clear(&mut self) -> Result<()> {
        self.list.clear();
        self.store.clear(HISTORY_KEY)
    }

    fn persist(&self) -> Result<()> {
        let json = self.list.to_json()?;
        self.store.write(HISTORY_KEY, &json)
    }
}
