use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config::OperationTab;

/// Tab number carried by a clicked tab's `data-tab`, if it names a real tab.
///
/// `None` means the click landed on the strip but not on a tab.
pub fn resolve_tab(data_tab: Option<&str>, tab_count: usize) -> Option<usize> {
    data_tab
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|tab| (1..=tab_count).contains(tab))
}

#[derive(Properties, PartialEq)]
pub struct OperationsProps {
    pub tabs: Vec<OperationTab>,
}

#[function_component(Operations)]
pub fn operations(props: &OperationsProps) -> Html {
    let active = use_state(|| 1usize);

    let on_strip_click = {
        let active = active.clone();
        let tab_count = props.tabs.len();
        Callback::from(move |e: MouseEvent| {
            // Buttons contain spans, so walk up to the tab itself.
            let clicked = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(".operations__tab").ok().flatten());
            let Some(tab) = clicked else {
                return;
            };
            if let Some(n) = resolve_tab(tab.get_attribute("data-tab").as_deref(), tab_count) {
                active.set(n);
            }
        })
    };

    html! {
        <div class="operations">
            <div class="operations__tab-container" onclick={on_strip_click}>
                {
                    for props.tabs.iter().enumerate().map(|(i, tab)| {
                        let n = i + 1;
                        html! {
                            <button
                                class={classes!(
                                    "btn",
                                    "operations__tab",
                                    format!("operations__tab--{}", n),
                                    (n == *active).then(|| "operations__tab--active"),
                                )}
                                data-tab={n.to_string()}
                            >
                                <span>{format!("0{}", n)}</span>{tab.label.clone()}
                            </button>
                        }
                    })
                }
            </div>
            {
                for props.tabs.iter().enumerate().map(|(i, tab)| {
                    let n = i + 1;
                    html! {
                        <div class={classes!(
                            "operations__content",
                            format!("operations__content--{}", n),
                            (n == *active).then(|| "operations__content--active"),
                        )}>
                            <div class={classes!("operations__icon", format!("operations__icon--{}", n))}>
                                <i class={tab.icon.clone()}></i>
                            </div>
                            <h5 class="operations__header">{tab.title.clone()}</h5>
                            <p>{tab.text.clone()}</p>
                        </div>
                    }
                })
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_valid_tabs() {
        assert_eq!(resolve_tab(Some("1"), 3), Some(1));
        assert_eq!(resolve_tab(Some("3"), 3), Some(3));
    }

    #[test]
    fn test_clicks_outside_a_tab_are_ignored() {
        assert_eq!(resolve_tab(None, 3), None);
        assert_eq!(resolve_tab(Some("0"), 3), None);
        assert_eq!(resolve_tab(Some("4"), 3), None);
        assert_eq!(resolve_tab(Some(""), 3), None);
    }
}
