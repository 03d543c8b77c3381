//! Plain-text rendering of mood views for the terminal.

use chrono::{Local, TimeZone};

use crate::locale;
use crate::models::{AnalysisResult, Language, MoodFrequency, MoodLogEntry, MoodType};

const BAR: char = '█';
const CHART_WIDTH: usize = 24;

/// How mood colors are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// 24-bit ANSI color escapes.
    Ansi,
    /// No escapes; moods are identified by label only.
    Plain,
}

fn paint(text: &str, mood: MoodType, palette: Palette) -> String {
    match palette {
        Palette::Ansi => {
            let (r, g, b) = mood.definition().rgb();
            format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
        }
        Palette::Plain => text.to_string(),
    }
}

/// Terminal columns taken by `s`; CJK labels are two columns per character.
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Horizontal bar chart, one row per mood, bars scaled to the largest count.
///
/// ```text
/// Focus    ████████████████████████ 3
/// Calm     ████████ 1
/// ```
pub fn render_frequency_chart(
    frequencies: &[MoodFrequency],
    language: Language,
    palette: Palette,
) -> String {
    if frequencies.is_empty() {
        return format!("{}\n", locale::text(language).no_data);
    }

    let max = frequencies.iter().map(|f| f.count).max().unwrap_or(1).max(1);
    let label_width = frequencies
        .iter()
        .map(|f| display_width(&f.label))
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for freq in frequencies {
        let len = (freq.count * CHART_WIDTH).div_ceil(max).max(1);
        let bar: String = std::iter::repeat(BAR).take(len).collect();
        output.push_str(&pad(&freq.label, label_width));
        output.push(' ');
        output.push_str(&paint(&bar, freq.mood_id, palette));
        output.push_str(&format!(" {}\n", freq.count));
    }
    output
}

/// Timeline strip, oldest on the left, with a "latest →" marker.
///
/// Expects the slice from [`crate::views::recent_timeline_slice`].
pub fn render_timeline(timeline: &[MoodLogEntry], language: Language, palette: Palette) -> String {
    let text = locale::text(language);
    if timeline.is_empty() {
        return format!("{}\n", text.no_data);
    }

    let cells: Vec<String> = timeline
        .iter()
        .map(|entry| match palette {
            Palette::Ansi => paint("██", entry.mood_id, palette),
            Palette::Plain => format!("[{}]", entry.mood_id.label(language)),
        })
        .collect();
    let separator = if palette == Palette::Ansi { "" } else { " " };

    format!("{}\n{} →\n", cells.join(separator), text.latest)
}

/// Journal listing with date, time, mood and note.
pub fn render_journal<Tz: TimeZone>(
    entries: &[MoodLogEntry],
    language: Language,
    palette: Palette,
    tz: &Tz,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let text = locale::text(language);
    if entries.is_empty() {
        return format!("{}\n", text.no_data);
    }

    let mut output = String::new();
    for entry in entries {
        let when = entry.recorded_at().with_timezone(tz).format("%m/%d %H:%M");
        let label = entry.mood_id.label(language);
        output.push_str(&format!(
            "{}  {}  {}\n",
            when,
            paint("●", entry.mood_id, palette),
            label
        ));
        match entry.note.as_deref() {
            Some(note) if !note.is_empty() => {
                for line in note.lines() {
                    output.push_str(&format!("    │ {}\n", line));
                }
            }
            _ => output.push_str(&format!("    ({})\n", text.no_note)),
        }
        output.push_str(&format!("    id: {}\n", entry.id));
    }
    output
}

/// Journal listing in the local time zone.
pub fn render_journal_local(entries: &[MoodLogEntry], language: Language, palette: Palette) -> String {
    render_journal(entries, language, palette, &Local)
}

/// The mood grid: every mood with its description.
pub fn render_catalog(language: Language, palette: Palette) -> String {
    let width = MoodType::ALL
        .iter()
        .map(|m| display_width(m.label(language)))
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for mood in MoodType::ALL {
        let definition = mood.definition();
        output.push_str(&format!(
            "{} {}  {:<11} {}\n",
            paint("●", mood, palette),
            pad(definition.label(language), width),
            mood.as_str().to_ascii_lowercase(),
            definition.description(language)
        ));
    }
    output
}

pub fn render_analysis(result: &AnalysisResult, language: Language) -> String {
    let text = locale::text(language);
    format!(
        "{}\n\n{}: {}\n{}: {}\n{}: {}\n",
        text.analysis_title,
        text.summary_heading,
        result.summary,
        text.advice_heading,
        result.advice,
        text.dominant_heading,
        result.dominant_color
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::views::frequency_by_mood;

    fn entry(mood: MoodType, timestamp: i64, note: Option<&str>) -> MoodLogEntry {
        MoodLogEntry {
            id: Uuid::nil(),
            mood_id: mood,
            timestamp,
            note: note.map(str::to_string),
        }
    }

    #[test]
    fn chart_scales_bars_to_largest_count() {
        let entries = vec![
            entry(MoodType::Focus, 4, None),
            entry(MoodType::Focus, 3, None),
            entry(MoodType::Focus, 2, None),
            entry(MoodType::Calm, 1, None),
        ];
        let chart = render_frequency_chart(
            &frequency_by_mood(&entries, Language::En),
            Language::En,
            Palette::Plain,
        );
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("Focus {} 3", "█".repeat(24)));
        assert_eq!(lines[1], format!("Calm  {} 1", "█".repeat(8)));
    }

    #[test]
    fn empty_chart_shows_no_data_message() {
        assert_eq!(
            render_frequency_chart(&[], Language::En, Palette::Plain),
            "No records yet.\n"
        );
    }

    #[test]
    fn plain_timeline_lists_labels_oldest_first() {
        let timeline = vec![entry(MoodType::Joy, 1, None), entry(MoodType::Anger, 2, None)];
        assert_eq!(
            render_timeline(&timeline, Language::En, Palette::Plain),
            "[Joy] [Anger]\nLatest →\n"
        );
    }

    #[test]
    fn ansi_timeline_uses_mood_colors() {
        let timeline = vec![entry(MoodType::Focus, 1, None)];
        let strip = render_timeline(&timeline, Language::Ja, Palette::Ansi);
        assert!(strip.starts_with("\x1b[38;2;59;130;246m██\x1b[0m"));
        assert!(strip.ends_with("最新 →\n"));
    }

    #[test]
    fn journal_shows_note_or_placeholder() {
        // 2025-01-02T03:04:05Z
        let entries = vec![
            entry(MoodType::Calm, 1_735_787_045_000, Some("tea break")),
            entry(MoodType::Fatigue, 1_735_787_045_000, None),
        ];
        let journal = render_journal(&entries, Language::En, Palette::Plain, &Utc);

        assert!(journal.contains("01/02 03:04  ●  Calm\n    │ tea break\n"));
        assert!(journal.contains("Fatigue\n    (No note)\n"));
    }

    #[test]
    fn catalog_lists_every_mood() {
        let catalog = render_catalog(Language::En, Palette::Plain);
        assert_eq!(catalog.lines().count(), 8);
        assert!(catalog.lines().next().unwrap().contains("Deep concentration & flow"));
    }
}
