//! JSON rendering of combos: exact field order and escaping rules, matching
//! the original tool's hand-built `ToJson`/`FormatFilePath`/`FormatTimestamp`
//! string construction rather than a derive-based serializer (whose field
//! order and escaping are not guaranteed to match).

use crate::combo::Combo;
use crate::config::SerializerConfig;

/// Escapes a Windows-style path for JSON embedding: every backslash becomes
/// two backslashes. No other characters are transformed.
pub fn escape_path(path: &str) -> String {
    path.replace('\\', "\\\\")
}

/// Converts an ISO-8601 `YYYY-MM-DDTHH:MM:SSZ` timestamp into
/// `MM/DD/YY H:MM am|pm`.
///
/// Panics if `timestamp` is shorter than the fixed-width ISO-8601 form this
/// expects (the replay parser is assumed to always produce well-formed
/// timestamps).
pub fn format_timestamp(timestamp: &str) -> String {
    let month = &timestamp[5..7];
    let day = &timestamp[8..10];
    let year = &timestamp[2..4];
    let minutes = &timestamp[14..16];
    let hour: i32 = timestamp[11..13].parse().expect("valid hour field");

    let is_pm = hour >= 12;
    let mut display_hour = hour;
    if is_pm && display_hour > 12 {
        display_hour -= 12;
    }
    if display_hour == 0 {
        display_hour = 12;
    }

    format!(
        "{month}/{day}/{year} {display_hour}:{minutes} {}",
        if is_pm { "pm" } else { "am" }
    )
}

/// Renders one combo as a JSON object fragment, indented `base_indent` levels
/// deep with `indent_size`-space indentation per level. Field order is fixed:
/// `path`, `gameStartAt`, `startFrame`, `endFrame`.
pub fn combo_to_json(combo: &Combo, base_indent: usize, indent_size: usize) -> String {
    let single_indent = " ".repeat(indent_size);
    let base = single_indent.repeat(base_indent);
    let inner = single_indent.repeat(base_indent + 1);

    format!(
        "{base}{{\n\
         {inner}\"path\": \"{path}\",\n\
         {inner}\"gameStartAt\": \"{started}\",\n\
         {inner}\"startFrame\": {start},\n\
         {inner}\"endFrame\": {end}\n\
         {base}}}",
        path = escape_path(&combo.replay_data.absolute_replay_file_path),
        started = format_timestamp(&combo.replay_data.timestamp),
        start = combo.movie_start_frame(),
        end = combo.movie_end_frame(),
    )
}

/// Wraps a full batch of combos in the document envelope the downstream
/// overlay-rendering tool expects.
pub fn queue_document(combos: &[Combo], config: &SerializerConfig, indent_size: usize) -> String {
    let entries: Vec<String> = combos
        .iter()
        .map(|c| combo_to_json(c, 1, indent_size))
        .collect();
    let queue_body = if entries.is_empty() {
        String::new()
    } else {
        format!("\n{}\n", entries.join(",\n"))
    };

    format!(
        "{{\n  \"mode\": \"queue\",\n  \"replay\": \"{replay}\",\n  \"isRealTimeMode\": {rt},\n  \"outputOverlayFiles\": {overlay},\n  \"queue\": [{queue_body}]\n}}",
        replay = escape_path(&config.replay),
        rt = config.is_real_time_mode,
        overlay = config.output_overlay_files,
        queue_body = queue_body,
    )
}
