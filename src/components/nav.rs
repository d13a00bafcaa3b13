use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config::NavLink;
use crate::error::fail_fast;
use crate::scroll::{anchor_id, scroll_to_id};

/// Which nav link the pointer is over, and what that does to the others.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoverFade {
    pub hovered: Option<usize>,
    pub faded: f64,
}

impl HoverFade {
    pub fn new(faded: f64) -> Self {
        Self { hovered: None, faded }
    }

    pub fn enter(self, index: usize) -> Self {
        Self { hovered: Some(index), ..self }
    }

    pub fn leave(self) -> Self {
        Self { hovered: None, ..self }
    }

    pub fn link_opacity(&self, index: usize) -> f64 {
        match self.hovered {
            Some(hovered) if hovered != index => self.faded,
            _ => 1.0,
        }
    }

    pub fn logo_opacity(&self) -> f64 {
        if self.hovered.is_some() {
            self.faded
        } else {
            1.0
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
    pub logo: AttrValue,
    pub links: Vec<NavLink>,
    pub nav_ref: NodeRef,
    pub sticky: bool,
    pub fade_opacity: f64,
    pub on_open_modal: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let fade = use_state(|| HoverFade::new(props.fade_opacity));

    // Single handler on the link list; only clicks on a link itself count.
    let on_links_click = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if !target.class_list().contains("nav__link") {
            return;
        }
        let href = target.get_attribute("href").unwrap_or_default();
        if let Some(id) = anchor_id(&href) {
            if let Err(err) = scroll_to_id(id) {
                fail_fast(err);
            }
        }
    });

    let link_items = props.links.iter().enumerate().map(|(i, link)| {
        let on_enter = {
            let fade = fade.clone();
            Callback::from(move |_: MouseEvent| fade.set((*fade).enter(i)))
        };
        let on_leave = {
            let fade = fade.clone();
            Callback::from(move |_: MouseEvent| fade.set((*fade).leave()))
        };
        let on_click = link.opens_modal.then(|| {
            let on_open_modal = props.on_open_modal.clone();
            Callback::from(move |_: MouseEvent| on_open_modal.emit(()))
        });
        let class = if link.opens_modal {
            classes!("nav__link", "nav__link--btn", "btn--show-modal")
        } else {
            classes!("nav__link")
        };

        html! {
            <li class="nav__item">
                <a
                    class={class}
                    href={link.href.clone()}
                    style={format!("opacity: {}", fade.link_opacity(i))}
                    onmouseover={on_enter}
                    onmouseout={on_leave}
                    onclick={on_click}
                >
                    {link.label.clone()}
                </a>
            </li>
        }
    });

    html! {
        <nav ref={props.nav_ref.clone()} class={classes!("nav", props.sticky.then(|| "sticky"))}>
            <img
                src={props.logo.clone()}
                alt={format!("{} logo", props.brand)}
                class="nav__logo"
                id="logo"
                style={format!("opacity: {}", fade.logo_opacity())}
            />
            <ul class="nav__links" onclick={on_links_click}>
                {for link_items}
            </ul>
        </nav>
    }
}

/// A header is sticky-worthy once it has left the viewport.
pub fn is_sticky(header_intersecting: bool) -> bool {
    !header_intersecting
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_faded_at_rest() {
        let fade = HoverFade::new(0.5);
        for i in 0..4 {
            assert_eq!(fade.link_opacity(i), 1.0);
        }
        assert_eq!(fade.logo_opacity(), 1.0);
    }

    #[test]
    fn test_hover_fades_siblings_and_logo() {
        let fade = HoverFade::new(0.5).enter(2);
        assert_eq!(fade.link_opacity(2), 1.0);
        assert_eq!(fade.link_opacity(0), 0.5);
        assert_eq!(fade.link_opacity(1), 0.5);
        assert_eq!(fade.link_opacity(3), 0.5);
        assert_eq!(fade.logo_opacity(), 0.5);
    }

    #[test]
    fn test_leave_restores() {
        let fade = HoverFade::new(0.5).enter(1).leave();
        assert_eq!(fade, HoverFade::new(0.5));
        assert_eq!(fade.link_opacity(0), 1.0);
        assert_eq!(fade.logo_opacity(), 1.0);
    }

    #[test]
    fn test_moving_between_links() {
        let fade = HoverFade::new(0.3).enter(0).enter(3);
        assert_eq!(fade.link_opacity(0), 0.3);
        assert_eq!(fade.link_opacity(3), 1.0);
    }

    #[test]
    fn test_sticky_follows_header_visibility() {
        assert!(is_sticky(false));
        assert!(!is_sticky(true));
    }
}
