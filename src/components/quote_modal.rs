use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{dispatch_with, ContactAction, QuoteRequest, UriLauncher, WindowLauncher};
use crate::content::SERVICE_OPTIONS;

/// Hands the draft to the mail client, then closes no matter what happened.
pub fn submit_quote(launcher: &impl UriLauncher, request: QuoteRequest, close: impl FnOnce()) {
    dispatch_with(launcher, &ContactAction::Quote(request));
    close();
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>().map(|input| input.value()).unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct QuoteModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(QuoteModal)]
pub fn quote_modal(props: &QuoteModalProps) -> Html {
    let name = use_node_ref();
    let phone = use_node_ref();
    let email = use_node_ref();
    let service = use_node_ref();
    let message = use_node_ref();

    if !props.open {
        return html! {};
    }

    let onsubmit = {
        let (name, phone, email, service, message) =
            (name.clone(), phone.clone(), email.clone(), service.clone(), message.clone());
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = QuoteRequest {
                name: input_value(&name),
                phone: input_value(&phone),
                email: input_value(&email),
                service: service
                    .cast::<HtmlSelectElement>()
                    .map(|select| select.value())
                    .unwrap_or_default(),
                message: message
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            };
            submit_quote(&WindowLauncher, request, || on_close.emit(()));
        })
    };
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-backdrop" role="dialog" aria-modal="true" aria-labelledby="quote-modal-title">
            <div class="quote-modal">
                <button class="modal-x" onclick={close} aria-label="Close quote modal">{"✕"}</button>
                <div class="quote-header">
                    <h2 id="quote-modal-title">{"Get a Quote"}</h2>
                    <p>{"Tell us about your property needs."}</p>
                </div>
                <form class="quote-form" {onsubmit}>
                    <div>
                        <label for="name">{"Full Name"}</label>
                        <input ref={name} required=true id="name" name="name" type="text" placeholder="John Doe" />
                    </div>
                    <div class="quote-row">
                        <div>
                            <label for="phone">{"Phone"}</label>
                            <input ref={phone} required=true id="phone" name="phone" type="tel" placeholder="+1 (555)..." />
                        </div>
                        <div>
                            <label for="email">{"Email"}</label>
                            <input ref={email} required=true id="email" name="email" type="email" placeholder="you@email.com" />
                        </div>
                    </div>
                    <div>
                        <label for="service">{"Service Needed"}</label>
                        <select ref={service} id="service" name="service">
                            { for SERVICE_OPTIONS.iter().map(|(value, label)| html! {
                                <option value={*value}>{*label}</option>
                            }) }
                        </select>
                    </div>
                    <div>
                        <label for="message">{"Message"}</label>
                        <textarea ref={message} id="message" name="message" rows="3"
                            placeholder="I have a 3-bedroom apartment in Rehavia..."></textarea>
                    </div>
                    <button type="submit" class="quote-submit">{"Send Request →"}</button>
                    <p class="quote-hint">{"This will open your email client to send the request."}</p>
                </form>
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                }
                .modal-x {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    color: #94a3b8;
                    cursor: pointer;
                }
                .quote-modal {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    background: #fff;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .quote-header {
                    background: #0f172a;
                    color: #fff;
                    padding: 1.5rem;
                }
                .quote-header h2 { margin: 0 0 0.25rem; font-family: serif; }
                .quote-header p { margin: 0; color: #cbd5e1; font-size: 0.875rem; }
                .quote-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem;
                }
                .quote-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .quote-form label {
                    display: block;
                    margin-bottom: 0.25rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #64748b;
                }
                .quote-form input,
                .quote-form select,
                .quote-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.6rem 1rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 0.5rem;
                    background: #fff;
                    resize: none;
                }
                .quote-submit {
                    padding: 0.9rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #f59e0b;
                    color: #0f172a;
                    font-weight: 700;
                    cursor: pointer;
                }
                .quote-submit:hover { background: #d97706; }
                .quote-hint {
                    margin: 0;
                    text-align: center;
                    font-size: 10px;
                    color: #94a3b8;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::tests::RecordingLauncher;
    use std::cell::Cell;

    fn jane() -> QuoteRequest {
        QuoteRequest {
            name: "Jane Doe".to_string(),
            phone: "555-1234".to_string(),
            email: "jane@x.com".to_string(),
            service: "Renovations".to_string(),
            message: "Leak in bathroom".to_string(),
        }
    }

    #[test]
    fn submit_hands_off_once_then_closes() {
        let launcher = RecordingLauncher::default();
        let closed = Cell::new(false);
        submit_quote(&launcher, jane(), || {
            assert_eq!(launcher.launched.borrow().len(), 1);
            closed.set(true);
        });
        assert!(closed.get());
        let (uri, _) = &launcher.launched.borrow()[0];
        assert!(uri.starts_with("mailto:davidoffpm@gmail.com?subject=Quote%20Request%20-%20Jane%20Doe"));
    }

    #[test]
    fn modal_closes_even_when_handoff_fails() {
        let launcher = RecordingLauncher { fail: true, ..Default::default() };
        let closed = Cell::new(false);
        submit_quote(&launcher, jane(), || closed.set(true));
        assert!(closed.get());
    }
}
