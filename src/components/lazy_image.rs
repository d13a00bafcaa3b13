use std::rc::Rc;
use yew::prelude::*;
use web_sys::Element;

use crate::error::{fail_fast, PageError};
use crate::observer::{Observer, ObserverOptions, OneShot};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LazyImageState {
    /// Showing the blurred low-resolution image.
    #[default]
    Placeholder,
    /// Full source requested, still blurred until it loads.
    Swapped,
    Loaded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LazyImageAction {
    Intersected,
    Loaded,
}

impl LazyImageState {
    pub fn apply(self, action: LazyImageAction) -> Self {
        match (self, action) {
            (LazyImageState::Placeholder, LazyImageAction::Intersected) => LazyImageState::Swapped,
            (LazyImageState::Swapped, LazyImageAction::Loaded) => LazyImageState::Loaded,
            // The placeholder's own load event, or anything after the swap.
            (state, _) => state,
        }
    }

    pub fn source<'a>(self, placeholder: &'a str, full: &'a str) -> &'a str {
        match self {
            LazyImageState::Placeholder => placeholder,
            LazyImageState::Swapped | LazyImageState::Loaded => full,
        }
    }

    pub fn is_blurred(self) -> bool {
        self != LazyImageState::Loaded
    }
}

impl Reducible for LazyImageState {
    type Action = LazyImageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub placeholder: AttrValue,
    pub src: AttrValue,
    pub alt: AttrValue,
    pub threshold: f64,
    pub root_margin: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let img_ref = use_node_ref();
    let state = use_reducer(LazyImageState::default);

    {
        let img_ref = img_ref.clone();
        let state = state.clone();
        let src = props.src.clone();
        let options = ObserverOptions::threshold(props.threshold).with_root_margin(props.root_margin.to_string());
        use_effect_with_deps(
            move |_| {
                let mut shot = OneShot::default();
                let observer = Observer::new(&options, move |entry, observer| {
                    if !shot.fire(entry.is_intersecting()) {
                        return;
                    }
                    log::debug!("loading {}", src);
                    state.dispatch(LazyImageAction::Intersected);
                    observer.unobserve(&entry.target());
                })
                .unwrap_or_else(|err| fail_fast(err));

                let img = img_ref
                    .cast::<Element>()
                    .unwrap_or_else(|| fail_fast(PageError::MissingElement("img.lazy-img".to_string())));
                observer.observe(&img);

                move || drop(observer)
            },
            (),
        );
    }

    let on_load = {
        let state = state.clone();
        Callback::from(move |_: Event| state.dispatch(LazyImageAction::Loaded))
    };

    let current = *state;

    html! {
        <img
            ref={img_ref}
            src={current.source(&props.placeholder, &props.src).to_string()}
            alt={props.alt.clone()}
            class={classes!(props.class.clone(), current.is_blurred().then(|| "lazy-img"))}
            onload={on_load}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_then_load() {
        let state = LazyImageState::default()
            .apply(LazyImageAction::Intersected)
            .apply(LazyImageAction::Loaded);
        assert_eq!(state, LazyImageState::Loaded);
        assert!(!state.is_blurred());
        assert_eq!(state.source("lazy.jpg", "full.jpg"), "full.jpg");
    }

    #[test]
    fn test_placeholder_load_is_ignored() {
        let state = LazyImageState::default().apply(LazyImageAction::Loaded);
        assert_eq!(state, LazyImageState::Placeholder);
        assert!(state.is_blurred());
        assert_eq!(state.source("lazy.jpg", "full.jpg"), "lazy.jpg");
    }

    #[test]
    fn test_blur_stays_until_full_image_loads() {
        let state = LazyImageState::default().apply(LazyImageAction::Intersected);
        assert_eq!(state, LazyImageState::Swapped);
        assert!(state.is_blurred());
        assert_eq!(state.source("lazy.jpg", "full.jpg"), "full.jpg");
    }

    #[test]
    fn test_second_intersection_changes_nothing() {
        let loaded = LazyImageState::Loaded.apply(LazyImageAction::Intersected);
        assert_eq!(loaded, LazyImageState::Loaded);
        let swapped = LazyImageState::Swapped.apply(LazyImageAction::Intersected);
        assert_eq!(swapped, LazyImageState::Swapped);
    }
}
