use std::{cell::RefCell, rc::Rc};

use remark_client::Controller;

use crate::storage::LocalBackend;

mod comment_form;
pub use comment_form::CommentForm;

mod comment_item;
pub use comment_item::CommentItem;

mod comment_section;
pub use comment_section::{CommentSection, CommentSectionProps};

/// One controller for the whole page, shared by every post's comment section
#[derive(Clone)]
pub struct SharedController(pub Rc<RefCell<Controller<LocalBackend>>>);

impl PartialEq for SharedController {
    fn eq(&self, other: &SharedController) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
