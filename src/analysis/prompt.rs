use std::fmt::Display;

use chrono::TimeZone;

use crate::models::{Language, MoodLogEntry};

/// One `- <date time>: <mood>` line per entry, in the order given.
fn log_lines<Tz>(entries: &[MoodLogEntry], language: Language, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let format = match language {
        Language::Ja => "%Y/%-m/%-d %H:%M:%S",
        Language::En => "%-m/%-d/%Y, %-I:%M:%S %p",
    };

    entries
        .iter()
        .map(|entry| {
            let when = entry.recorded_at().with_timezone(tz).format(format);
            format!("- {}: {}", when, entry.mood_id.label(language))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the analysis prompt for `entries`, with timestamps shown in `tz`.
pub fn build_prompt<Tz>(entries: &[MoodLogEntry], language: Language, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let data = log_lines(entries, language, tz);
    match language {
        Language::Ja => format!(
            "あなたは心理データの専門分析家です。\n\
             ユーザーの最近の感情記録データを分析してください。\n\n\
             データ:\n{}\n\n\
             タスク:\n\
             1. 主要な感情の色相（傾向）を特定する。\n\
             2. 感情状態の客観的な要約を提供する（2文以内、日本語で）。\n\
             3. このデータに基づいた具体的で優しいアドバイスを1つ提供する（2文以内、日本語で）。\n\n\
             結果はJSON形式で返してください。",
            data
        ),
        Language::En => format!(
            "You are an expert analyst of psychological data.\n\
             Analyze the user's recent mood log.\n\n\
             Data:\n{}\n\n\
             Tasks:\n\
             1. Identify the dominant emotional hue (trend).\n\
             2. Give an objective summary of the emotional state (two sentences at most, in English).\n\
             3. Give one concrete, gentle piece of advice based on this data (two sentences at most, in English).\n\n\
             Return the result as JSON.",
            data
        ),
    }
}
