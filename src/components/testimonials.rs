use yew::prelude::*;
use yew_hooks::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use crate::config::Testimonial;
use crate::error::fail_fast;
use crate::slider::{parse_dot_index, Slider, SliderAction};

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub slides: Vec<Testimonial>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let count = props.slides.len();
    let slider = use_reducer(move || Slider::new(count).unwrap_or_else(|err| fail_fast(err)));

    {
        let slider = slider.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(action) = SliderAction::from_key(&e.key()) {
                slider.dispatch(action);
            }
        });
    }

    let go_next = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| slider.dispatch(SliderAction::Next))
    };

    let go_previous = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| slider.dispatch(SliderAction::Previous))
    };

    // One listener for the whole dot row; the clicked dot says which slide it is.
    let on_dot_click = {
        let slider = slider.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(dot) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if !dot.class_list().contains("dots__dot") {
                return;
            }
            let data_slide = dot.get_attribute("data-slide");
            if let Some(index) = parse_dot_index(data_slide.as_deref(), slider.count()) {
                slider.dispatch(SliderAction::JumpTo(index));
            }
        })
    };

    let frame = slider.frame();

    html! {
        <div class="slider">
            {
                for props.slides.iter().zip(frame.offsets.iter()).enumerate().map(|(i, (slide, offset))| html! {
                    <div
                        class={classes!("slide", format!("slide--{}", i + 1))}
                        style={format!("transform: translateX({}%)", offset)}
                    >
                        <div class="testimonial">
                            <h5 class="testimonial__header">{slide.heading.clone()}</h5>
                            <blockquote class="testimonial__text">
                                <p>{slide.quote.clone()}</p>
                            </blockquote>
                            <address class="testimonial__author">
                                <img src={slide.photo.clone()} alt="" class="testimonial__photo" />
                                <h6 class="testimonial__name">{slide.author.clone()}</h6>
                                <p class="testimonial__location">{slide.location.clone()}</p>
                            </address>
                        </div>
                    </div>
                })
            }
            <button class="slider__btn slider__btn--left" onclick={go_previous}>{"←"}</button>
            <button class="slider__btn slider__btn--right" onclick={go_next}>{"→"}</button>
            <div class="dots" onclick={on_dot_click}>
                {
                    for (0..slider.count()).map(|i| html! {
                        <button
                            class={classes!("dots__dot", (i == frame.active_dot).then(|| "dots__dot--active"))}
                            data-slide={i.to_string()}
                        ></button>
                    })
                }
            </div>
        </div>
    }
}
