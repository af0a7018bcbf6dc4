use log::debug;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::content::Section;
use crate::error::SiteError;

/// Smooth-scrolls to the section's element.
pub fn scroll_to(section: Section) -> Result<(), SiteError> {
    let document = window()
        .ok_or(SiteError::NoWindow)?
        .document()
        .ok_or(SiteError::NoDocument)?;
    let element = document
        .get_element_by_id(section.id())
        .ok_or_else(|| SiteError::MissingElement(section.id().to_string()))?;
    let mut options = ScrollIntoViewOptions::new();
    #[allow(deprecated)]
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Click handler scrolling to `section`; a missing target does nothing.
pub fn scroll_callback<E: 'static>(section: Section) -> Callback<E> {
    Callback::from(move |_: E| {
        if let Err(e) = scroll_to(section) {
            debug!("Scroll skipped: {}", e);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct TopNavProps {
    pub on_call: Callback<()>,
}

#[function_component(TopNav)]
pub fn top_nav(props: &TopNavProps) -> Html {
    let on_call = props.on_call.reform(|_: MouseEvent| ());

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-brand" onclick={scroll_callback::<MouseEvent>(Section::Home)}>
                    <span class="brand-logo">{"⌂"}</span>
                    <h1>{"DAVIDOFF REAL ESTATE"}</h1>
                </div>
                <div class="nav-links">
                    <button onclick={scroll_callback::<MouseEvent>(Section::Services)}>{"Services"}</button>
                    <button onclick={scroll_callback::<MouseEvent>(Section::Gallery)}>{"Work"}</button>
                    <button onclick={scroll_callback::<MouseEvent>(Section::Reviews)}>{"Reviews"}</button>
                    <div class="nav-divider"></div>
                    <button class="nav-call" onclick={on_call}>{"☎ Call"}</button>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    padding: 1rem 0;
                    pointer-events: none;
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-brand,
                .nav-links {
                    pointer-events: auto;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(12px);
                    border-radius: 999px;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .nav-brand { padding: 0.5rem 1rem; cursor: pointer; }
                .nav-brand h1 {
                    margin: 0;
                    font-family: serif;
                    font-size: 0.75rem;
                    white-space: nowrap;
                    color: #0f172a;
                }
                .brand-logo {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: #0f172a;
                    color: #f59e0b;
                }
                .nav-links { padding: 0.5rem; }
                .nav-links button {
                    padding: 0.4rem 1rem;
                    border: none;
                    border-radius: 999px;
                    background: none;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    cursor: pointer;
                }
                .nav-links button:hover { background: #f1f5f9; }
                .nav-divider { width: 1px; height: 1rem; background: #e2e8f0; }
                .nav-links .nav-call { background: #0f172a; color: #fff; }
                .nav-links .nav-call:hover { background: #1e293b; }
                @media (max-width: 768px) {
                    .nav-links { display: none; }
                }
                "#}
            </style>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct SideNavProps {
    pub active: Section,
}

/// One dot per section, the active one highlighted.
#[function_component(SideNav)]
pub fn side_nav(props: &SideNavProps) -> Html {
    html! {
        <div class="side-nav">
            { for Section::ALL.into_iter().map(|section| {
                let is_active = props.active == section;
                html! {
                    <button
                        key={section.id()}
                        class={classes!("side-dot", is_active.then_some("active"))}
                        onclick={scroll_callback::<MouseEvent>(section)}
                        aria-label={format!("Scroll to {}", section.label())}
                    >
                        <span class="dot"></span>
                        <span class="dot-label">{section.label()}</span>
                    </button>
                }
            }) }
            <style>
                {r#"
                .side-nav {
                    position: fixed;
                    right: 2rem;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 40;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    pointer-events: none;
                }
                .side-dot {
                    pointer-events: auto;
                    display: flex;
                    flex-direction: row-reverse;
                    align-items: center;
                    gap: 0.75rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .side-dot .dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    border: 2px solid rgba(148, 163, 184, 0.5);
                    background: rgba(255, 255, 255, 0.5);
                    transition: all 0.3s;
                }
                .side-dot.active .dot {
                    background: #f59e0b;
                    border-color: #f59e0b;
                    transform: scale(1.25);
                }
                .dot-label {
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.25rem;
                    background: rgba(255, 255, 255, 0.9);
                    font-size: 10px;
                    font-weight: 700;
                    text-transform: uppercase;
                    color: #64748b;
                    opacity: 0;
                    transform: translateX(1rem);
                    transition: all 0.3s;
                }
                .side-dot.active .dot-label,
                .side-dot:hover .dot-label {
                    opacity: 1;
                    transform: translateX(0);
                    color: #0f172a;
                }
                @media (max-width: 768px) {
                    .side-nav { right: 0.75rem; gap: 0.75rem; }
                    .side-dot .dot { width: 0.5rem; height: 0.5rem; }
                    .dot-label { display: none; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn only_the_active_section_dot_is_highlighted() {
        let html = yew::ServerRenderer::<SideNav>::with_props(|| SideNavProps {
            active: Section::Reviews,
        })
        .hydratable(false)
        .render()
        .await;

        assert_eq!(html.matches("side-dot active").count(), 1);
        let start = html.find("side-dot active").unwrap();
        let end = start + html[start..].find("</button>").unwrap();
        assert!(html[start..end].contains("Reviews"));
        assert_eq!(html.matches(r#"class="side-dot""#).count(), Section::ALL.len() - 1);
    }
}
