use uuid::Uuid;

use crate::api::CommentId;

pub trait IdGenerator {
    fn next_id(&mut self) -> CommentId;
}

/// Random v4 uuids, for production use
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> CommentId {
        CommentId(Uuid::new_v4().to_string())
    }
}

/// `{prefix}1`, `{prefix}2`, ... for deterministic tests and fixtures
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> SequentialIds {
        SequentialIds {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> CommentId {
        let id = CommentId(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential() {
        let mut ids = SequentialIds::new("c");
        assert_eq!(ids.next_id(), CommentId(String::from("c1")));
        assert_eq!(ids.next_id(), CommentId(String::from("c2")));
    }

    #[test]
    fn uuids_are_distinct() {
        let mut ids = UuidIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }
}
