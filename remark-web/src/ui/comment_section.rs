use remark_client::{
    api::{CommentId, NewComment, PostId},
    Action, Outcome,
};
use yew::prelude::*;

use crate::{dialogs::BrowserDialogs, ui};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentSectionProps {
    pub post_id: PostId,
    pub controller: ui::SharedController,
}

#[function_component(CommentSection)]
pub fn comment_section(p: &CommentSectionProps) -> Html {
    let force_update = use_force_update();

    let on_submit = {
        let post_id = p.post_id.clone();
        let controller = p.controller.clone();
        let force_update = force_update.clone();
        Callback::from(move |input: NewComment| -> bool {
            let added = controller
                .0
                .borrow_mut()
                .submit(&post_id, input, &BrowserDialogs)
                .is_some();
            if added {
                force_update.force_update();
            }
            added
        })
    };

    let on_action = {
        let controller = p.controller.clone();
        Callback::from(move |(id, action): (CommentId, Action)| {
            let outcome = controller
                .0
                .borrow_mut()
                .dispatch(&id, action, &BrowserDialogs);
            tracing::trace!(%id, ?action, ?outcome, "handled comment action");
            if !matches!(outcome, Outcome::Kept | Outcome::Ignored) {
                force_update.force_update();
            }
        })
    };

    let on_draft = {
        let controller = p.controller.clone();
        Callback::from(move |(id, text): (CommentId, String)| {
            controller.0.borrow_mut().set_draft(&id, text)
        })
    };

    let views = p.controller.0.borrow().views_for(&p.post_id);
    let items = views.into_iter().map(|view| {
        let key = view.id.0.clone();
        let on_action = {
            let id = view.id.clone();
            on_action.reform(move |action| (id.clone(), action))
        };
        let on_draft = {
            let id = view.id.clone();
            on_draft.reform(move |text| (id.clone(), text))
        };
        html! {
            <ui::CommentItem key={ key } { view } { on_action } { on_draft } />
        }
    });

    html! {
        <div class="comment-section">
            <ui::CommentForm post_id={ p.post_id.clone() } { on_submit } />
            <div class="comments-list">
                { for items }
            </div>
        </div>
    }
}
