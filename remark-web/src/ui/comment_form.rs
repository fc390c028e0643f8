use remark_client::api::{NewComment, PostId};
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormProps {
    pub post_id: PostId,

    /// Answers whether the comment got stored, in which case the form is cleared
    pub on_submit: Callback<NewComment, bool>,
}

#[function_component(CommentForm)]
pub fn comment_form(p: &CommentFormProps) -> Html {
    let form_ref = use_node_ref();
    let author_ref = use_node_ref();
    let body_ref = use_node_ref();

    let onsubmit = {
        let form_ref = form_ref.clone();
        let author_ref = author_ref.clone();
        let body_ref = body_ref.clone();
        let on_submit = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let author = author_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let body = body_ref
                .cast::<HtmlTextAreaElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            if on_submit.emit(NewComment::new(author, body)) {
                if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                    form.reset();
                }
            }
        })
    };

    let author_id = format!("comment-author-{}", p.post_id);
    let body_id = format!("comment-body-{}", p.post_id);
    html! {
        <form ref={ form_ref } class="comment-form" { onsubmit }>
            <div class="form-group mb-2">
                <label for={ author_id.clone() }>{ "Name" }</label>
                <input
                    ref={ author_ref }
                    type="text"
                    class="form-control"
                    id={ author_id }
                    placeholder="Your name"
                />
            </div>
            <div class="form-group mb-2">
                <label for={ body_id.clone() }>{ "Comment" }</label>
                <textarea
                    ref={ body_ref }
                    class="form-control"
                    id={ body_id }
                    rows="3"
                    placeholder="Write your comment"
                />
            </div>
            <button type="submit" class="btn btn-primary">{ "Post comment" }</button>
        </form>
    }
}
