//! Main application component.

use wheel_core::Variant;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{NotFoundPage, PanicPage, WheelPage};
use crate::routes::Route;

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        // Keyed so switching variants remounts the page with fresh state.
        Route::Classic => html! { <WheelPage key="classic" variant={Variant::Classic} /> },
        Route::Polar => html! { <WheelPage key="polar" variant={Variant::Polar} /> },
        Route::Panic => html! { <PanicPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Links between the two wheel variants.
#[function_component(Nav)]
fn nav() -> Html {
    let route = use_route::<Route>();
    let current = route.and_then(Route::variant);

    let link = |variant: Variant, text: &'static str| {
        let active = current == Some(variant);
        html! {
            <Link<Route>
                to={Route::for_variant(variant)}
                classes={classes!(active.then_some("active"))}
            >
                { text }
            </Link<Route>>
        }
    };

    html! {
        <nav class="nav">
            { link(Variant::Classic, "Classic") }
            { link(Variant::Polar, "Polar") }
        </nav>
    }
}

/// Root application component with router.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
