use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::visibility::VisibilityObserver;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    /// Transition delay in ms.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let on_visible = visible.clone();
                let observer = match VisibilityObserver::new(config::REVEAL_THRESHOLD, move |batch| {
                    if batch.iter().any(|entry| entry.is_intersecting) {
                        on_visible.set(true);
                    }
                }) {
                    Ok(observer) => {
                        if let Some(element) = node.cast::<Element>() {
                            observer.observe(&element);
                        }
                        Some(observer)
                    }
                    Err(e) => {
                        warn!("{}; showing content without animation", e);
                        visible.set(true);
                        None
                    }
                };
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*visible).then_some("visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay)}
        >
            { for props.children.iter() }
            <style>
                {r#"
                .reveal {
                    opacity: 0;
                    transform: translateY(3rem);
                    transition: opacity 1s ease-out, transform 1s ease-out;
                }
                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                "#}
            </style>
        </div>
    }
}
