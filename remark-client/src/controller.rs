use std::collections::{BTreeMap, HashMap, HashSet};

use crate::{
    api::{Comment, CommentId, Error, NewComment, PostId},
    view::{self, Action, CommentView, Mode},
    Backend, IdGenerator, Messages, Repository,
};

/// Blocking browser dialogs
pub trait Dialogs {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    ModeChanged,
    Updated(Comment),
    Removed,

    /// The user did not confirm the deletion
    Kept,

    /// The edited text was empty, the user got told so
    Rejected,

    /// The comment is not stored anymore, eg. deleted from another tab
    Missing,

    /// The action does not apply to the comment's current mode
    Ignored,

    Failed(Error),
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LoadReport {
    pub total: usize,
    pub per_post: BTreeMap<PostId, usize>,

    /// Comments whose post is not on this page
    pub skipped: usize,
}

type Handler<B> = fn(&mut Controller<B>, &CommentId, &dyn Dialogs) -> Outcome;

pub struct Controller<B> {
    repo: Repository<B>,
    ids: Box<dyn IdGenerator>,
    messages: Messages,

    /// Comments absent from here are in display mode
    modes: HashMap<CommentId, Mode>,
}

impl<B: Backend> Controller<B> {
    pub fn new(
        repo: Repository<B>,
        ids: Box<dyn IdGenerator>,
        messages: Messages,
    ) -> Controller<B> {
        Controller {
            repo,
            ids,
            messages,
            modes: HashMap::new(),
        }
    }

    pub fn repository(&self) -> &Repository<B> {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut Repository<B> {
        &mut self.repo
    }

    pub fn load(&mut self, posts: &[PostId]) -> LoadReport {
        self.modes.clear();
        let mounted = posts.iter().collect::<HashSet<_>>();
        let mut report = LoadReport {
            per_post: posts.iter().map(|p| (p.clone(), 0)).collect(),
            ..LoadReport::default()
        };
        for c in self.repo.list_all() {
            report.total += 1;
            if mounted.contains(&c.post_id) {
                *report.per_post.entry(c.post_id).or_insert(0) += 1;
            } else {
                tracing::debug!(
                    id = %c.id,
                    post = %c.post_id,
                    "comment for a post not on this page"
                );
                report.skipped += 1;
            }
        }
        match report.total {
            0 => tracing::info!("no comments stored yet"),
            total => tracing::info!(total, skipped = report.skipped, "loaded stored comments"),
        }
        report
    }

    pub fn mode(&self, id: &CommentId) -> Mode {
        self.modes.get(id).cloned().unwrap_or(Mode::Display)
    }

    /// Comments of the post, newest first, each in its current mode
    pub fn views_for(&self, post_id: &PostId) -> Vec<CommentView> {
        self.repo
            .list_by_post(post_id)
            .iter()
            .map(|c| view::render(c, &self.mode(&c.id)))
            .collect()
    }

    /// Returns the stored comment, or None if the user got an alert instead
    pub fn submit(
        &mut self,
        post_id: &PostId,
        input: NewComment,
        dialogs: &dyn Dialogs,
    ) -> Option<Comment> {
        let input = match input.validated() {
            Ok(input) => input,
            Err(e) => {
                tracing::debug!(post = %post_id, error = %e, "rejected comment submission");
                dialogs.alert(&self.messages.empty_fields);
                return None;
            }
        };
        let comment = input.into_comment(
            self.ids.next_id(),
            post_id.clone(),
            self.repo.stamper().created(),
        );
        match self.repo.add(comment.clone()) {
            Ok(()) => {
                tracing::info!(id = %comment.id, post = %post_id, "comment added");
                Some(comment)
            }
            Err(e) => {
                self.failed(e, dialogs);
                None
            }
        }
    }

    pub fn set_draft(&mut self, id: &CommentId, text: String) {
        match self.modes.get_mut(id) {
            Some(Mode::Edit { draft }) => *draft = text,
            _ => tracing::debug!(%id, "ignoring draft for a comment not being edited"),
        }
    }

    pub fn dispatch(&mut self, id: &CommentId, action: Action, dialogs: &dyn Dialogs) -> Outcome {
        let handler: Handler<B> = match action {
            Action::Edit => Self::begin_edit,
            Action::Save => Self::save_edit,
            Action::Cancel => Self::cancel_edit,
            Action::Delete => Self::delete,
        };
        handler(self, id, dialogs)
    }

    fn begin_edit(&mut self, id: &CommentId, _dialogs: &dyn Dialogs) -> Outcome {
        match self.repo.get(id) {
            None => self.missing(id, Action::Edit),
            Some(c) => {
                self.modes.insert(id.clone(), Mode::Edit { draft: c.body });
                Outcome::ModeChanged
            }
        }
    }

    fn save_edit(&mut self, id: &CommentId, dialogs: &dyn Dialogs) -> Outcome {
        let draft = match self.modes.get(id) {
            Some(Mode::Edit { draft }) => draft.trim().to_string(),
            _ => return Outcome::Ignored,
        };
        if draft.is_empty() {
            dialogs.alert(&self.messages.empty_fields);
            return Outcome::Rejected;
        }
        match self.repo.update(id, &draft) {
            Ok(c) => {
                self.modes.remove(id);
                tracing::info!(%id, "comment edited");
                Outcome::Updated(c)
            }
            Err(Error::NotFound(_)) => self.missing(id, Action::Save),
            Err(e) => self.failed(e, dialogs),
        }
    }

    fn cancel_edit(&mut self, id: &CommentId, _dialogs: &dyn Dialogs) -> Outcome {
        match self.modes.remove(id) {
            Some(_) => Outcome::ModeChanged,
            None => Outcome::Ignored,
        }
    }

    fn delete(&mut self, id: &CommentId, dialogs: &dyn Dialogs) -> Outcome {
        if !dialogs.confirm(&self.messages.confirm_delete) {
            return Outcome::Kept;
        }
        match self.repo.remove(id) {
            Ok(true) => {
                self.modes.remove(id);
                tracing::info!(%id, "comment deleted");
                Outcome::Removed
            }
            Ok(false) => self.missing(id, Action::Delete),
            Err(e) => self.failed(e, dialogs),
        }
    }

    fn missing(&mut self, id: &CommentId, action: Action) -> Outcome {
        self.modes.remove(id);
        tracing::warn!(%id, ?action, "comment is not stored anymore, ignoring");
        Outcome::Missing
    }

    fn failed(&self, e: Error, dialogs: &dyn Dialogs) -> Outcome {
        tracing::error!(error = %e, kind = e.kind(), "failed writing comments");
        dialogs.alert(&self.messages.storage_failure);
        Outcome::Failed(e)
    }
}
