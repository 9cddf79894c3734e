use std::rc::Rc;

use yew::prelude::*;
use log::{error, info};
use web_sys::window;

use portfolio::config;
use portfolio::content::Portfolio;
use portfolio::pages::portfolio::PortfolioPage;

#[function_component]
fn App() -> Html {
    let portfolio = use_state(|| Portfolio::embedded().map(Rc::new));

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    match &*portfolio {
        Ok(portfolio) => html! {
            <PortfolioPage portfolio={portfolio.clone()} />
        },
        Err(err) => {
            error!("{}", err);
            html! {
                <div class="load-error">
                    <p>{"This page could not be loaded."}</p>
                </div>
            }
        }
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
