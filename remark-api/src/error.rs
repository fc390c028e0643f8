use crate::{CommentId, Field};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Field {0} must not be empty")]
    EmptyField(Field),

    #[error("Comment not found {0}")]
    NotFound(CommentId),

    #[error("Comment id already used {0}")]
    IdAlreadyUsed(CommentId),

    #[error("Stored comments could not be decoded: {0}")]
    CorruptStorage(String),

    #[error("Storage backend failure: {0}")]
    Storage(String),
}

impl Error {
    pub fn kind(&self) -> &'static str {
        match self {
            Error::EmptyField(_) => "empty-field",
            Error::NotFound(_) => "not-found",
            Error::IdAlreadyUsed(_) => "conflict-id",
            Error::CorruptStorage(_) => "corrupt-storage",
            Error::Storage(_) => "storage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::EmptyField(Field::Body).to_string(),
            "Field body must not be empty",
        );
        assert_eq!(
            Error::NotFound(CommentId(String::from("c9"))).to_string(),
            "Comment not found c9",
        );
        assert_eq!(Error::CorruptStorage(String::new()).kind(), "corrupt-storage");
    }
}
