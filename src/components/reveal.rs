use yew::prelude::*;
use web_sys::Element;

use crate::error::{fail_fast, PageError};
use crate::observer::{Observer, ObserverOptions, OneShot};

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: AttrValue,
    pub threshold: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub header: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// A page section that stays hidden until it first scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let section_ref = use_node_ref();
    let revealed = use_state(|| false);

    {
        let section_ref = section_ref.clone();
        let revealed = revealed.clone();
        let id = props.id.clone();
        let options = ObserverOptions::threshold(props.threshold);
        use_effect_with_deps(
            move |_| {
                let mut shot = OneShot::default();
                let observer = Observer::new(&options, move |entry, observer| {
                    if !shot.fire(entry.is_intersecting()) {
                        return;
                    }
                    log::debug!("revealing #{}", id);
                    revealed.set(true);
                    observer.unobserve(&entry.target());
                })
                .unwrap_or_else(|err| fail_fast(err));

                let section = section_ref
                    .cast::<Element>()
                    .unwrap_or_else(|| fail_fast(PageError::MissingElement("section".to_string())));
                observer.observe(&section);

                move || drop(observer)
            },
            (),
        );
    }

    let title = match (&props.description, &props.header) {
        (Some(description), Some(header)) => html! {
            <div class="section__title">
                <h2 class="section__description">{description.clone()}</h2>
                <h3 class="section__header">{header.clone()}</h3>
            </div>
        },
        _ => html! {},
    };

    html! {
        <section
            ref={section_ref}
            id={props.id.clone()}
            class={classes!("section", props.class.clone(), (!*revealed).then(|| "section--hidden"))}
        >
            {title}
            {for props.children.iter()}
        </section>
    }
}
