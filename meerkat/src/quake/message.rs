//! 通知メッセージ整形
//!
//! 震度コードの表示ラベル変換とアラート本文の組み立て

use super::feed::FeedEntry;

/// 震度コードを表示ラベルへ変換する
///
/// 対応表にないコードは`unknown({code})`として描画する。
pub fn scale_label(code: i32) -> String {
    let label = match code {
        10 => "intensity 1",
        20 => "intensity 2",
        30 => "intensity 3",
        40 => "intensity 4",
        45 => "intensity 5-lower",
        50 => "intensity 5-upper",
        55 => "intensity 6-lower",
        60 => "intensity 6-upper",
        70 => "intensity 7",
        other => return format!("unknown({other})"),
    };
    label.to_string()
}

/// 津波フィールドの二値分類
///
/// リテラル"None"のみ安心文言、それ以外はすべて注意文言。
/// 津波情報の深刻度を解釈するものではない。
pub fn tsunami_info(domestic_tsunami: &str) -> &'static str {
    if domestic_tsunami == "None" {
        "No tsunami risk"
    } else {
        "⚠️ Check tsunami information!"
    }
}

/// アラート本文を組み立てる
pub fn format_alert(entry: &FeedEntry) -> String {
    let quake = &entry.earthquake;
    format!(
        "🦦 Earthquake Alert 🦦\n\n\
         [Time] {}\n\
         [Hypocenter] {}\n\
         [Max Intensity] {}\n\
         [M] {:.1}\n\n\
         {}",
        quake.time,
        quake.hypocenter.name,
        scale_label(quake.max_scale),
        quake.hypocenter.magnitude,
        tsunami_info(&quake.domestic_tsunami),
    )
}
