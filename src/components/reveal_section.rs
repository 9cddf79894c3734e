use yew::prelude::*;
use log::{debug, warn};
use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::config::RevealConfig;
use crate::error::PortfolioError;
use crate::reveal::browser::IntersectionSource;
use crate::reveal::state::Transition;
use crate::reveal::visual::VisualState;
use crate::reveal::watch::RevealController;

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static(""))]
    pub id: AttrValue,
    #[prop_or_default]
    pub config: RevealConfig,
}

fn resolve_target(node: &NodeRef) -> Result<Element, PortfolioError> {
    node.cast::<Element>().ok_or(PortfolioError::MissingTarget)
}

/// Wraps its children and fades/slides them into place the first time they
/// scroll into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let visual = use_state(|| VisualState::hidden(&props.config));

    {
        let node = node.clone();
        let visual = visual.clone();
        let config = props.config.clone();
        let label = if props.id.is_empty() { AttrValue::from("section") } else { props.id.clone() };
        use_effect_with_deps(
            move |_| {
                let mut controller = None;
                let mut fallback = None;

                match resolve_target(&node) {
                    Ok(element) => {
                        let setter = visual.setter();
                        let on_config = config.clone();
                        let mounted = RevealController::mount(&IntersectionSource, &element, &config, move |transition| {
                            if let Transition::Reveal { .. } = transition {
                                debug!("{} revealed", label);
                            }
                            setter.set(VisualState::after(transition, &on_config));
                        });

                        if let Some(after_ms) = config.fallback_after_ms {
                            let timed = mounted.clone();
                            fallback = Some(Timeout::new(after_ms, move || timed.fail_open()));
                        }
                        controller = Some(mounted);
                    }
                    Err(err) => {
                        warn!("{}; showing {} without animation", err, label);
                        visual.set(VisualState::revealed(false));
                    }
                }

                move || {
                    drop(fallback);
                    if let Some(controller) = controller {
                        controller.unmount();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            id={(!props.id.is_empty()).then(|| props.id.clone())}
            class={props.class.clone()}
            style={visual.css(&props.config.motion())}
        >
            { for props.children.iter() }
        </div>
    }
}
