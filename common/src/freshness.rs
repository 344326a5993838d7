//! 鮮度クラスの表
//!
//! ラベル文字列は大文字小文字を区別せずに閉じた列挙型へ変換する。
//! 未知のラベルは `Freshness::Unknown` になり、色・ケアのヒント・水分量の
//! すべてに既定値がある。

use std::fmt;

/// 鮮度クラス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Freshness {
    Segar,
    Sedang,
    Kering,
    Unknown,
}

/// ケアのヒント（タイトル + 3項目）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareTips {
    pub title: &'static str,
    pub tips: [&'static str; 3],
}

const SEGAR_TIPS: CareTips = CareTips {
    title: "Perawatan Cabai Segar",
    tips: [
        "Simpan di kulkas dalam kantong plastik berlubang agar tetap segar.",
        "Jangan mencuci cabai hingga saat akan digunakan untuk mencegah pembusukan.",
        "Jika ingin lebih awet, potong tangkainya dan simpan bersama bawang putih.",
    ],
};

const SEDANG_TIPS: CareTips = CareTips {
    title: "Perawatan Cabai Setengah Kering",
    tips: [
        "Segera gunakan untuk bumbu masakan agar rasa tidak hilang.",
        "Jemur atau angin-anginkan di tempat sejuk hingga benar-benar kering.",
        "Hindari menyimpan di tempat lembab untuk mencegah jamur.",
    ],
};

const KERING_TIPS: CareTips = CareTips {
    title: "Perawatan Cabai Kering",
    tips: [
        "Simpan dalam wadah kedap udara di tempat yang gelap dan sejuk.",
        "Untuk aroma lebih kuat, sangrai sebentar sebelum dihaluskan.",
        "Jauhkan dari sinar matahari langsung agar warna tidak pudar.",
    ],
};

impl Freshness {
    pub const ALL: [Freshness; 3] = [Freshness::Segar, Freshness::Sedang, Freshness::Kering];

    /// ラベルから変換（前後の空白を無視、大文字小文字を区別しない）
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("segar") {
            Freshness::Segar
        } else if label.eq_ignore_ascii_case("sedang") {
            Freshness::Sedang
        } else if label.eq_ignore_ascii_case("kering") {
            Freshness::Kering
        } else {
            Freshness::Unknown
        }
    }

    /// 表示色の名前（CSSクラスの接尾辞として使う）
    pub fn color(&self) -> &'static str {
        match self {
            Freshness::Segar => "green-400",
            Freshness::Sedang => "yellow-400",
            Freshness::Kering => "red-500",
            Freshness::Unknown => "gray-400",
        }
    }

    pub fn care_tips(&self) -> Option<CareTips> {
        match self {
            Freshness::Segar => Some(SEGAR_TIPS),
            Freshness::Sedang => Some(SEDANG_TIPS),
            Freshness::Kering => Some(KERING_TIPS),
            Freshness::Unknown => None,
        }
    }

    /// クラスの代表的な水分量
    pub fn typical_moisture(&self) -> &'static str {
        match self {
            Freshness::Segar => "85% - 90%",
            Freshness::Sedang => "40% - 60%",
            Freshness::Kering => "~11.11%",
            Freshness::Unknown => "Tidak diketahui",
        }
    }
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Freshness::Segar => write!(f, "Segar"),
            Freshness::Sedang => write!(f, "Sedang"),
            Freshness::Kering => write!(f, "Kering"),
            Freshness::Unknown => write!(f, "Tidak diketahui"),
        }
    }
}

/// ラベルの表示色
pub fn color_for(label: &str) -> &'static str {
    Freshness::from_label(label).color()
}

/// ラベルに対応するケアのヒント
pub fn care_tips_for(label: &str) -> Option<CareTips> {
    Freshness::from_label(label).care_tips()
}
