use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MobileContactBarProps {
    /// Hidden while the contact section itself is on screen.
    pub hidden: bool,
    pub on_sms: Callback<()>,
    pub on_whatsapp: Callback<()>,
}

#[function_component(MobileContactBar)]
pub fn mobile_contact_bar(props: &MobileContactBarProps) -> Html {
    html! {
        <div class={classes!("mobile-bar", props.hidden.then_some("hidden"))} aria-hidden={props.hidden.to_string()}>
            <button class="mobile-sms" onclick={props.on_sms.reform(|_: MouseEvent| ())}>
                <span class="mobile-icon">{"💬"}</span>
                <span>{"iMessage"}</span>
            </button>
            <button class="mobile-whatsapp" onclick={props.on_whatsapp.reform(|_: MouseEvent| ())}>
                <span class="mobile-icon">{"✆"}</span>
                <span>{"WhatsApp"}</span>
            </button>
            <style>
                {r#"
                .mobile-bar {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    box-sizing: border-box;
                    z-index: 90;
                    display: flex;
                    gap: 0.75rem;
                    padding: 0.6rem 0.6rem 1.5rem;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(16px);
                    border-top: 1px solid rgba(226, 232, 240, 0.5);
                    transition: transform 0.5s ease-in-out, opacity 0.5s ease-in-out;
                }
                .mobile-bar.hidden {
                    transform: translateY(100%);
                    opacity: 0;
                    pointer-events: none;
                }
                .mobile-bar button {
                    flex: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.6rem;
                    border: none;
                    border-radius: 0.75rem;
                    color: #fff;
                    font-size: 0.75rem;
                    font-weight: 700;
                    cursor: pointer;
                }
                .mobile-sms { background: linear-gradient(135deg, #007aff, #005ec4); }
                .mobile-whatsapp { background: linear-gradient(135deg, #10b981, #16a34a); }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(hidden: bool) -> String {
        yew::ServerRenderer::<MobileContactBar>::with_props(move || MobileContactBarProps {
            hidden,
            on_sms: Callback::noop(),
            on_whatsapp: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn bar_hides_on_contact_section() {
        assert!(render(true).await.contains(r#"class="mobile-bar hidden""#));

        let shown = render(false).await;
        assert!(shown.contains(r#"class="mobile-bar""#));
        assert!(!shown.contains("mobile-bar hidden"));
    }
}
