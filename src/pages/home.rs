use std::rc::Rc;
use chrono::Datelike;
use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::{Element, KeyboardEvent};

use crate::components::lazy_image::LazyImage;
use crate::components::modal::{Modal, ModalAction, ModalState};
use crate::components::nav::{is_sticky, Nav};
use crate::components::operations::Operations;
use crate::components::reveal::RevealSection;
use crate::components::testimonials::Testimonials;
use crate::config::SiteContent;
use crate::error::{fail_fast, PageError};
use crate::observer::{Observer, ObserverOptions};
use crate::scroll::scroll_to_id;

#[function_component]
pub fn Home() -> Html {
    let site = use_context::<Rc<SiteContent>>().unwrap_or_else(|| fail_fast(PageError::NoContent));
    let settings = &site.settings;

    let header_ref = use_node_ref();
    let nav_ref = use_node_ref();
    let sticky = use_state_eq(|| false);
    let modal = use_reducer(ModalState::default);

    // Escape closes the modal from anywhere on the page
    {
        let modal = modal.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            modal.dispatch(ModalAction::Key(e.key()));
        });
    }

    // Nav goes sticky once the header has scrolled out from under it
    {
        let header_ref = header_ref.clone();
        let nav_ref = nav_ref.clone();
        let sticky = sticky.clone();
        use_effect_with_deps(
            move |_| {
                let nav_height = nav_ref
                    .cast::<Element>()
                    .unwrap_or_else(|| fail_fast(PageError::MissingElement(".nav".to_string())))
                    .get_bounding_client_rect()
                    .height();
                let options = ObserverOptions::threshold(0.0).with_root_margin(format!("-{}px", nav_height));

                let observer = Observer::new(&options, move |entry, _| {
                    sticky.set(is_sticky(entry.is_intersecting()));
                })
                .unwrap_or_else(|err| fail_fast(err));

                let header = header_ref
                    .cast::<Element>()
                    .unwrap_or_else(|| fail_fast(PageError::MissingElement(".header".to_string())));
                observer.observe(&header);

                move || drop(observer)
            },
            (),
        );
    }

    let open_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalAction::Open))
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalAction::Close))
    };

    let on_show_modal = {
        let open_modal = open_modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_modal.emit(());
        })
    };

    let on_learn_more = Callback::from(|_: MouseEvent| {
        if let Err(err) = scroll_to_id("section--1") {
            fail_fast(err);
        }
    });

    let features = site.features.iter().enumerate().map(|(i, feature)| {
        let image = html! {
            <LazyImage
                placeholder={feature.placeholder.clone()}
                src={feature.image.clone()}
                alt={feature.alt.clone()}
                threshold={settings.lazy_threshold}
                root_margin={settings.lazy_root_margin.clone()}
                class={classes!("features__img")}
            />
        };
        let text = html! {
            <div class="features__feature">
                <div class="features__icon">
                    <i class={feature.icon.clone()}></i>
                </div>
                <h5 class="features__header">{feature.title.clone()}</h5>
                <p>{feature.text.clone()}</p>
            </div>
        };
        if i % 2 == 0 {
            html! { <>{image}{text}</> }
        } else {
            html! { <>{text}{image}</> }
        }
    });

    let year = chrono::Local::now().year();

    html! {
        <>
            <header class="header" ref={header_ref}>
                <Nav
                    brand={site.brand.clone()}
                    logo={site.logo.clone()}
                    links={site.nav.clone()}
                    nav_ref={nav_ref}
                    sticky={*sticky}
                    fade_opacity={settings.hover_fade_opacity}
                    on_open_modal={open_modal}
                />
                <div class="header__title">
                    <h1>
                        {format!("{} ", site.hero.title)}
                        <span class="highlight">{site.hero.highlight.clone()}</span>
                        <br/>
                        {site.hero.subtitle.clone()}
                    </h1>
                    <h4>{site.hero.tagline.clone()}</h4>
                    <button class="btn--text btn--scroll-to" onclick={on_learn_more}>{site.hero.learn_more.clone()}</button>
                    <img src={site.hero.image.clone()} class="header__img" alt={site.hero.image_alt.clone()} />
                </div>
            </header>

            <RevealSection
                id="section--1"
                threshold={settings.reveal_threshold}
                description={site.features_section.description.clone()}
                header={site.features_section.header.clone()}
            >
                <div class="features">{for features}</div>
            </RevealSection>

            <RevealSection
                id="section--2"
                threshold={settings.reveal_threshold}
                description={site.operations_section.description.clone()}
                header={site.operations_section.header.clone()}
            >
                <Operations tabs={site.operations.clone()} />
            </RevealSection>

            <RevealSection
                id="section--3"
                threshold={settings.reveal_threshold}
                description={site.testimonials_section.description.clone()}
                header={site.testimonials_section.header.clone()}
            >
                <Testimonials slides={site.testimonials.clone()} />
            </RevealSection>

            <RevealSection id="section--sign-up" threshold={settings.reveal_threshold} class={classes!("section--sign-up")}>
                <div class="section__title">
                    <h3 class="section__header">{site.signup.header.clone()}</h3>
                </div>
                <button class="btn btn--show-modal" onclick={on_show_modal}>{site.signup.button.clone()}</button>
            </RevealSection>

            <footer class="footer">
                <ul class="footer__nav">
                    {
                        for site.footer.links.iter().map(|link| html! {
                            <li class="footer__item">
                                <a class="footer__link" href={link.href.clone()}>{link.label.clone()}</a>
                            </li>
                        })
                    }
                </ul>
                <img src={site.footer.logo.clone()} alt={format!("{} logo", site.brand)} class="footer__logo" />
                <p class="footer__copyright">{format!("© {} {}. All rights reserved.", year, site.brand)}</p>
            </footer>

            <Modal open={modal.open} copy={site.modal.clone()} on_close={close_modal} />
        </>
    }
}
