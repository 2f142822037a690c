use chrono::{DateTime, Utc};

/// Human label for how long ago `timestamp` was, as shown next to activity entries.
pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - timestamp).num_seconds();

    match secs {
        s if s < 60 => "just now".to_string(),
        s if s < 3_600 => format!("{} minutes ago", s / 60),
        s if s < 86_400 => format!("{} hours ago", s / 3_600),
        _ => timestamp.format("%-d %b %y").to_string(),
    }
}
