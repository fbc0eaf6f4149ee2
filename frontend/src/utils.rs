use chrono::{DateTime, Utc};

const WATCH_URL: &str = "https://youtube.com/watch";

pub fn format_iso8601_date(iso_date: &str) -> String {
    match crate::models::parse_backend_timestamp(iso_date) {
        Some(datetime) => datetime.format("%Y-%m-%d").to_string(),
        None => iso_date.to_string(),
    }
}

// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::with_capacity(num_str.len() + num_str.len() / 3);
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Renders a relevance score in [0, 1] as a whole percentage, e.g. `0.873` -> `"87%"`.
pub fn format_relevance(relevance: f64) -> String {
    let clamped = if relevance.is_nan() { 0.0 } else { relevance.clamp(0.0, 1.0) };
    format!("{}%", (clamped * 100.0).round() as u32)
}

/// Converts `MM:SS` (or `H:MM:SS`) into seconds. Returns `None` for anything else.
pub fn timestamp_to_seconds(timestamp: &str) -> Option<u32> {
    let parts = timestamp
        .trim()
        .split(':')
        .map(|part| {
            // `u32::from_str` would also take a leading `+`.
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse::<u32>().ok()
        })
        .collect::<Option<Vec<_>>>()?;

    match *parts.as_slice() {
        [minutes, seconds] => minutes.checked_mul(60)?.checked_add(seconds),
        [hours, minutes, seconds] => hours
            .checked_mul(3600)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(seconds),
        _ => None,
    }
}

pub fn video_url(video_id: &str) -> String {
    format!("{WATCH_URL}?v={}", urlencoding::encode(video_id))
}

/// Watch URL deep-linked to `timestamp`. A malformed timestamp links to the start.
pub fn generate_video_url(video_id: &str, timestamp: &str) -> String {
    match timestamp_to_seconds(timestamp) {
        Some(seconds) => format!("{}&t={seconds}", video_url(video_id)),
        None => video_url(video_id),
    }
}

/// Durations arrive as `mm:ss` from the search endpoint, but raw YouTube
/// payloads carry ISO-8601 (`PT1H2M10S`).
pub fn format_duration(duration: &str) -> String {
    if duration.starts_with("PT") {
        format_iso8601_duration(duration)
    } else {
        duration.to_string()
    }
}

pub fn format_iso8601_duration(duration: &str) -> String {
    let Some(body) = duration.strip_prefix("PT") else {
        return duration.to_string();
    };

    let mut hours = 0;
    let mut minutes = 0;
    let mut seconds = 0;
    let mut digits = String::new();
    for c in body.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let value = digits.parse::<u32>().unwrap_or(0);
        match c {
            'H' => hours = value,
            'M' => minutes = value,
            'S' => seconds = value,
            _ => return duration.to_string(),
        }
        digits.clear();
    }

    if hours != 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

pub fn format_time_until(expiry: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = expiry.signed_duration_since(now).num_seconds();
    if seconds <= 0 {
        return String::from("expired");
    }

    let minutes = seconds / 60;
    if minutes < 1 {
        return format!("expires in {}s", seconds);
    }
    if minutes < 60 {
        return format!("expires in {}m", minutes);
    }

    let hours = minutes / 60;
    let remaining_minutes = minutes % 60;
    if hours < 24 {
        return format!("expires in {}h {}m", hours, remaining_minutes);
    }

    let days = hours / 24;
    format!("expires in {}d {}h", days, hours % 24)
}
