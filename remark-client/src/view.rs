//! Presentation of a comment, independent of the DOM

use crate::api::{Comment, CommentId};

/// Presentation state of one rendered comment
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Display,
    Edit { draft: String },
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Action {
    Edit,
    Save,
    Cancel,
    Delete,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Edit => "Edit",
            Action::Save => "Save",
            Action::Cancel => "Cancel",
            Action::Delete => "Delete",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Action::Edit => "comment-edit",
            Action::Save => "comment-save",
            Action::Cancel => "comment-cancel",
            Action::Delete => "comment-delete",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BodyView {
    Text(String),
    Editor(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentView {
    pub id: CommentId,
    pub author: String,
    pub timestamp: String,
    pub body: BodyView,
    pub actions: Vec<Action>,
}

impl CommentView {
    pub fn is_editing(&self) -> bool {
        matches!(self.body, BodyView::Editor(_))
    }
}

pub fn render(comment: &Comment, mode: &Mode) -> CommentView {
    let (body, actions) = match mode {
        Mode::Display => (
            BodyView::Text(comment.body.clone()),
            vec![Action::Edit, Action::Delete],
        ),
        Mode::Edit { draft } => (
            BodyView::Editor(draft.clone()),
            vec![Action::Save, Action::Cancel],
        ),
    };
    CommentView {
        id: comment.id.clone(),
        author: comment.author.clone(),
        timestamp: comment.created_at.clone(),
        body,
        actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn display_mode() {
        let c = fixtures::comment("c1", "p1", "Ana", "Great post");
        let v = render(&c, &Mode::Display);
        assert_eq!(v.id, c.id);
        assert_eq!(v.author, "Ana");
        assert_eq!(v.timestamp, c.created_at);
        assert_eq!(v.body, BodyView::Text(String::from("Great post")));
        assert_eq!(v.actions, vec![Action::Edit, Action::Delete]);
        assert!(!v.is_editing());
    }

    #[test]
    fn edit_mode_shows_the_draft() {
        let c = fixtures::comment("c1", "p1", "Ana", "old");
        let v = render(
            &c,
            &Mode::Edit {
                draft: String::from("new te"),
            },
        );
        assert_eq!(v.body, BodyView::Editor(String::from("new te")));
        assert_eq!(v.actions, vec![Action::Save, Action::Cancel]);
        assert!(v.is_editing());
    }
}
