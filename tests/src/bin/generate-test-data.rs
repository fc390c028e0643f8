use chrono::{Duration, Utc};
use rand::{seq::SliceRandom, Rng};
use remark_api::{Comment, CommentId, PostId};

const STORAGE_KEY: &str = "blog-comments";
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

const POSTS: &[&str] = &["p1", "p2", "p3"];
const MAX_COMMENTS_PER_POST: usize = 12;
const MAX_COMMENT_WORDS: usize = 40;
const EDITED_ONE_IN: u32 = 5;

const AUTHORS: &[&str] = &[
    "Ana", "Bia", "Caio", "Davi", "Elisa", "Fábio", "Gil", "Helena", "Iara", "João",
];

fn gen_comment(rng: &mut impl Rng, post: &str, minutes_ago: i64) -> Comment {
    let date = Utc::now() - Duration::minutes(minutes_ago);
    let mut created_at = date.format(TIMESTAMP_FORMAT).to_string();
    if rng.gen_ratio(1, EDITED_ONE_IN) {
        created_at.push_str(" (edited)");
    }
    Comment {
        id: CommentId(uuid::Uuid::new_v4().to_string()),
        post_id: PostId(post.to_string()),
        author: AUTHORS
            .choose(rng)
            .expect("author list is not empty")
            .to_string(),
        body: lipsum::lipsum_words(rng.gen_range(1..=MAX_COMMENT_WORDS)),
        created_at,
    }
}

/// Prints a snippet that, pasted in the browser console, seeds the comment storage
fn main() {
    let mut rng = rand::thread_rng();

    let mut dates = Vec::new();
    for post in POSTS {
        for _ in 0..rng.gen_range(0..=MAX_COMMENTS_PER_POST) {
            dates.push((*post, rng.gen_range(0..60 * 24 * 30)));
        }
    }

    // storage is oldest first
    dates.sort_by_key(|(_, minutes_ago)| std::cmp::Reverse(*minutes_ago));
    let comments = dates
        .into_iter()
        .map(|(post, minutes_ago)| gen_comment(&mut rng, post, minutes_ago))
        .collect::<Vec<_>>();

    let blob = serde_json::to_string(&comments).expect("serializing comments");
    let blob = serde_json::to_string(&blob).expect("quoting comments");
    println!("localStorage.setItem({STORAGE_KEY:?}, {blob});");
    eprintln!("generated {} comments", comments.len());
}
