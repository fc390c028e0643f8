use chrono::{TimeZone, Utc};
use chrono_tz::Tz;

use crate::{
    api::{Comment, CommentId, PostId},
    CommentStore, Config, ManualClock, MemoryBackend, Repository, Stamper, Time,
};

pub const KEY: &str = "blog-comments";

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Time {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

pub fn post(id: &str) -> PostId {
    PostId(String::from(id))
}

pub fn id(id: &str) -> CommentId {
    CommentId(String::from(id))
}

pub fn comment(id: &str, post_id: &str, author: &str, body: &str) -> Comment {
    Comment {
        id: self::id(id),
        post_id: post(post_id),
        author: String::from(author),
        body: String::from(body),
        created_at: String::from("15/12/2024 14:30:45"),
    }
}

/// Repository over an empty memory backend, with its clock at 15/12/2024 14:30:45 UTC
pub fn repo() -> (Repository<MemoryBackend>, ManualClock) {
    repo_with(MemoryBackend::new())
}

pub fn repo_with(backend: MemoryBackend) -> (Repository<MemoryBackend>, ManualClock) {
    let clock = ManualClock::new(at(2024, 12, 15, 14, 30, 45));
    let stamper = Stamper::new(Box::new(clock.clone()), Tz::UTC, &Config::default());
    (
        Repository::new(CommentStore::new(backend, KEY), stamper),
        clock,
    )
}
