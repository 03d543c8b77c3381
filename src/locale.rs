//! User-facing text in Japanese and English.

use crate::models::Language;

#[derive(Debug)]
pub struct UiText {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub chart_title: &'static str,
    pub timeline_title: &'static str,
    pub latest: &'static str,
    pub no_data: &'static str,
    pub journal_title: &'static str,
    pub no_note: &'static str,
    pub clear_confirm: &'static str,
    pub cleared: &'static str,
    pub note_prompt: &'static str,
    pub note_saved: &'static str,
    pub note_skipped: &'static str,
    pub reminders_enabled: &'static str,
    pub reminders_disabled: &'static str,
    pub reminders_status_on: &'static str,
    pub reminders_status_off: &'static str,
    pub reminders_off_hint: &'static str,
    pub noon_title: &'static str,
    pub noon_body: &'static str,
    pub evening_title: &'static str,
    pub evening_body: &'static str,
    pub analysis_title: &'static str,
    pub analysis_too_few: &'static str,
    pub analysis_unavailable: &'static str,
    pub summary_heading: &'static str,
    pub advice_heading: &'static str,
    pub dominant_heading: &'static str,
}

static JA: UiText = UiText {
    app_title: "Emotional Hue",
    app_subtitle: "色で感情を記録し、心の変化を見つめる。",
    chart_title: "感情の頻度（過去7日間）",
    timeline_title: "直近のタイムライン",
    latest: "最新",
    no_data: "まだ記録がありません。",
    journal_title: "記録ノート",
    no_note: "メモなし",
    clear_confirm: "感情の記録履歴をすべて削除してもよろしいですか？",
    cleared: "履歴を削除しました。",
    note_prompt: "今の感情の理由や、起きた出来事をメモに残しますか？",
    note_saved: "メモを保存しました。",
    note_skipped: "メモは空のため保存しませんでした。",
    reminders_enabled: "12時と19時に通知します",
    reminders_disabled: "リマインダーをオフにしました",
    reminders_status_on: "リマインダー: オン（12時・19時）",
    reminders_status_off: "リマインダー: オフ",
    reminders_off_hint: "リマインダーはオフです。`hue reminders on` で有効にできます。",
    noon_title: "お昼の記録タイム",
    noon_body: "午後の活動の前に、今の気分を記録しませんか？",
    evening_title: "1日の振り返り",
    evening_body: "今日1日を色で記録して、気持ちを整理しましょう。",
    analysis_title: "AI感情分析",
    analysis_too_few: "AI分析を行うには、少なくとも3つの感情を記録してください。",
    analysis_unavailable: "現在、感情分析AIに接続できません。",
    summary_heading: "要約",
    advice_heading: "アドバイス",
    dominant_heading: "支配的な色",
};

static EN: UiText = UiText {
    app_title: "Emotional Hue",
    app_subtitle: "Visualize your feelings with colors.",
    chart_title: "Mood Frequency (Last 7 Days)",
    timeline_title: "Recent Timeline",
    latest: "Latest",
    no_data: "No records yet.",
    journal_title: "Journal",
    no_note: "No note",
    clear_confirm: "Are you sure you want to delete all history?",
    cleared: "History cleared.",
    note_prompt: "Would you like to add a note about what happened?",
    note_saved: "Note saved.",
    note_skipped: "Note was blank, nothing saved.",
    reminders_enabled: "Notifications set for 12:00 & 19:00",
    reminders_disabled: "Reminders turned off",
    reminders_status_on: "Reminders: on (12:00 & 19:00)",
    reminders_status_off: "Reminders: off",
    reminders_off_hint: "Reminders are off; enable them with `hue reminders on`.",
    noon_title: "Midday Check-in",
    noon_body: "How are you feeling before the afternoon?",
    evening_title: "Evening Reflection",
    evening_body: "Log your mood to wrap up the day.",
    analysis_title: "AI Mood Analysis",
    analysis_too_few: "Record at least 3 moods to run the AI analysis.",
    analysis_unavailable: "The mood analysis service is unavailable right now.",
    summary_heading: "Summary",
    advice_heading: "Advice",
    dominant_heading: "Dominant hue",
};

pub fn text(language: Language) -> &'static UiText {
    match language {
        Language::Ja => &JA,
        Language::En => &EN,
    }
}
