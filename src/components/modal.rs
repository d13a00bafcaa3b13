use std::rc::Rc;
use yew::prelude::*;

use crate::config::ModalCopy;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Open,
    Close,
    /// A keydown anywhere on the page.
    Key(String),
}

impl ModalState {
    pub fn apply(self, action: &ModalAction) -> Self {
        match action {
            ModalAction::Open => ModalState { open: true },
            ModalAction::Close => ModalState { open: false },
            ModalAction::Key(key) if key == "Escape" && self.open => ModalState { open: false },
            ModalAction::Key(_) => self,
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(&action);
        if next == *self {
            return self;
        }
        log::debug!("modal {}", if next.open { "opened" } else { "closed" });
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub copy: ModalCopy,
    pub on_close: Callback<()>,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_submit = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!("account form submitted");
            on_close.emit(());
        })
    };

    let hidden = (!props.open).then(|| "hidden");

    html! {
        <>
            <div class={classes!("modal", hidden)}>
                <button class="btn--close-modal" onclick={close.clone()}>{"×"}</button>
                <h2 class="modal__header">
                    {format!("{} ", props.copy.header)}<br/>
                    {format!("{} ", props.copy.lead)}<span class="highlight">{props.copy.highlight.clone()}</span>
                </h2>
                <form class="modal__form" onsubmit={on_submit}>
                    {
                        for props.copy.fields.iter().map(|field| html! {
                            <>
                                <label>{field.label.clone()}</label>
                                <input type={field.kind.clone()} />
                            </>
                        })
                    }
                    <button class="btn">{props.copy.submit.clone()}</button>
                </form>
            </div>
            <div class={classes!("overlay", hidden)} onclick={close}></div>
        </>
    }
}
