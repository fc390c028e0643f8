use remark_client::{Action, BodyView, CommentView};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub view: CommentView,
    pub on_action: Callback<Action>,
    pub on_draft: Callback<String>,
}

#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    let editing_class = p.view.is_editing().then(|| "editing");
    let buttons = p.view.actions.iter().map(|action| {
        let action = *action;
        html! {
            <button
                type="button"
                class={ classes!("btn", "btn-sm", action.css_class()) }
                onclick={ p.on_action.reform(move |_| action) }
            >
                { action.label() }
            </button>
        }
    });

    html! {
        <div class={ classes!("comment", editing_class) }>
            <div class="comment-author">{ &p.view.author }</div>
            { body(&p.view.body, &p.on_draft) }
            <div class="comment-date">{ &p.view.timestamp }</div>
            <div class="comment-actions">
                { for buttons }
            </div>
        </div>
    }
}

fn body(body: &BodyView, on_draft: &Callback<String>) -> Html {
    match body {
        BodyView::Text(text) => html! {
            <div class="comment-text">{ text }</div>
        },
        BodyView::Editor(draft) => html! {
            <textarea
                class="comment-edit-text form-control"
                aria-label="Edit comment"
                value={ draft.clone() }
                oninput={ on_draft.reform(|e: InputEvent| {
                    let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                    input.value()
                }) }
            />
        },
    }
}
