use std::fmt;

use crate::Error;

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct CommentId(pub String);

impl CommentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One stored comment, as laid out in the storage blob
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author: String,
    pub body: String,

    /// Already formatted for display, and annotated once the comment got edited
    pub created_at: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    Author,
    Body,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Author => f.write_str("author"),
            Field::Body => f.write_str("body"),
        }
    }
}

/// Form input, before it got an identity
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewComment {
    pub author: String,
    pub body: String,
}

impl NewComment {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> NewComment {
        NewComment {
            author: author.into(),
            body: body.into(),
        }
    }

    /// Trims both fields, failing on the first one left empty
    pub fn validated(self) -> Result<NewComment, Error> {
        let author = self.author.trim();
        if author.is_empty() {
            return Err(Error::EmptyField(Field::Author));
        }
        let body = self.body.trim();
        if body.is_empty() {
            return Err(Error::EmptyField(Field::Body));
        }
        Ok(NewComment::new(author, body))
    }

    pub fn into_comment(self, id: CommentId, post_id: PostId, created_at: String) -> Comment {
        Comment {
            id,
            post_id,
            author: self.author,
            body: self.body,
            created_at,
        }
    }
}
