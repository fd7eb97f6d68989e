//! Performance test module.
//!
//! This module contains helpers shared across performance tests.

/// Generate a synthetic log with `line_count` lines.
///
/// Mixes both recognized shapes with noise lines and spreads timestamps over
/// a day so the hourly report has many buckets.
pub fn generate_log(line_count: usize) -> String {
    let mut content = String::with_capacity(line_count * 120);
    for i in 0..line_count {
        let hour = (i / 1000) % 24;
        let minute = (i / 10) % 60;
        let line = match i % 4 {
            0 => format!(
                "2015-08-19 {:02}:{:02}:00,000 (http--0.0.0.0-28080-{}) [] resource{} 3004{} in {}\n",
                hour,
                minute,
                i % 500,
                i % 50,
                i,
                i % 1000
            ),
            1 => format!(
                "2015-08-19 {:02}:{:02}:00,000 (http--0.0.0.0-28080-{}) [USER:{}] /mobilityServices.do?msisdn={}&action=ACTION{}&contentId=main in {}\n",
                hour,
                minute,
                i % 500,
                i,
                i,
                i % 20,
                i % 700
            ),
            2 => format!("2015-08-19 {:02}:{:02}:00,000 INFO heartbeat {}\n", hour, minute, i),
            _ => format!(
                "2015-08-19 {:02}:{:02}:00,000 (http--0.0.0.0-28080-1) [] Uppercase {} in {}\n",
                hour, minute, i, i
            ),
        };
        content.push_str(&line);
    }
    content
}
