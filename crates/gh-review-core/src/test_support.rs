//! Builders shared by unit tests.

use crate::model::{DiffSide, RawComment, RawUser};
use chrono::{DateTime, Duration, TimeZone, Utc};

pub(crate) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

/// A RIGHT-side comment on `src/lib.rs:10`, created `minute` minutes after [`base_time`].
pub(crate) fn raw_comment(id: u64, in_reply_to: Option<u64>, minute: i64) -> RawComment {
    let at = base_time() + Duration::minutes(minute);
    RawComment {
        id,
        body: format!("comment {}", id),
        user: RawUser {
            id: 100 + id,
            login: format!("user{}", id),
            avatar_url: String::new(),
        },
        created_at: at,
        updated_at: at,
        path: "src/lib.rs".to_string(),
        line: Some(10),
        side: DiffSide::Right,
        position: Some(3),
        in_reply_to_id: in_reply_to,
    }
}

pub(crate) fn anchored(mut raw: RawComment, path: &str, line: Option<u32>, side: DiffSide) -> RawComment {
    raw.path = path.to_string();
    raw.line = line;
    raw.side = side;
    raw
}
