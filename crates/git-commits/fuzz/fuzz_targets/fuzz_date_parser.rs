#![no_main]

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use git_commits::parse_date_string;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let now = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap_or_default();
        for tz in [Tz::UTC, Tz::America__New_York, Tz::Asia__Kolkata] {
            let _ = parse_date_string(input, tz, now);
        }
    }
});
