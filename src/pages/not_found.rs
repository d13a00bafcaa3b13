use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <section class="section not-found">
            <div class="section__title">
                <h2 class="section__description">{"404"}</h2>
                <h3 class="section__header">{"There is nothing at this address."}</h3>
            </div>
            <Link<Route> to={Route::Home} classes="btn">
                {"Back to the home page"}
            </Link<Route>>
        </section>
    }
}
