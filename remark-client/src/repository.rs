use crate::{
    api::{Comment, CommentId, Error, PostId},
    Backend, CommentStore, Stamper,
};

/// Comment collection operations, each one a full read-modify-write of the store
pub struct Repository<B> {
    store: CommentStore<B>,
    stamper: Stamper,
}

impl<B: Backend> Repository<B> {
    pub fn new(store: CommentStore<B>, stamper: Stamper) -> Repository<B> {
        Repository { store, stamper }
    }

    pub fn stamper(&self) -> &Stamper {
        &self.stamper
    }

    pub fn store(&self) -> &CommentStore<B> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CommentStore<B> {
        &mut self.store
    }

    /// Current collection, oldest first. A corrupt blob counts as no comments.
    fn snapshot(&self) -> Result<Vec<Comment>, Error> {
        match self.store.load_all() {
            Err(Error::CorruptStorage(e)) => {
                tracing::warn!(
                    key = self.store.key(),
                    error = %e,
                    "ignoring corrupt stored comments"
                );
                Ok(Vec::new())
            }
            res => res,
        }
    }

    pub fn list_all(&self) -> Vec<Comment> {
        self.snapshot().unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed reading stored comments");
            Vec::new()
        })
    }

    /// Comments of one post, newest first
    pub fn list_by_post(&self, post_id: &PostId) -> Vec<Comment> {
        let mut res = self
            .list_all()
            .into_iter()
            .filter(|c| c.post_id == *post_id)
            .collect::<Vec<_>>();
        res.reverse();
        res
    }

    pub fn get(&self, id: &CommentId) -> Option<Comment> {
        self.list_all().into_iter().find(|c| c.id == *id)
    }

    pub fn add(&mut self, comment: Comment) -> Result<(), Error> {
        let mut all = self.snapshot()?;
        if all.iter().any(|c| c.id == comment.id) {
            return Err(Error::IdAlreadyUsed(comment.id));
        }
        all.push(comment);
        self.store.save_all(&all)
    }

    /// Replaces the body and marks the comment as edited now
    pub fn update(&mut self, id: &CommentId, new_body: &str) -> Result<Comment, Error> {
        let mut all = self.snapshot()?;
        let comment = all
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or_else(|| Error::NotFound(id.clone()))?;
        comment.body = new_body.to_string();
        comment.created_at = self.stamper.edited();
        let updated = comment.clone();
        self.store.save_all(&all)?;
        Ok(updated)
    }

    /// Returns whether a comment was actually removed
    pub fn remove(&mut self, id: &CommentId) -> Result<bool, Error> {
        let mut all = self.snapshot()?;
        let len_before = all.len();
        all.retain(|c| c.id != *id);
        if all.len() == len_before {
            return Ok(false);
        }
        self.store.save_all(&all)?;
        Ok(true)
    }
}
