use yew::prelude::*;

use crate::legal::{Block, LegalDocument};

#[derive(Properties, PartialEq)]
pub struct LegalModalProps {
    pub document: Option<LegalDocument>,
    pub on_close: Callback<()>,
}

fn render_block(block: &Block) -> Html {
    match block {
        Block::Paragraph(text) => html! { <p>{*text}</p> },
        Block::List(items) => html! {
            <ul>
                { for items.iter().map(|(label, text)| html! {
                    <li>
                        if let Some(label) = label {
                            <strong>{*label}</strong>{" "}
                        }
                        {*text}
                    </li>
                }) }
            </ul>
        },
    }
}

#[function_component(LegalModal)]
pub fn legal_modal(props: &LegalModalProps) -> Html {
    let Some(document) = props.document else {
        return html! {};
    };
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-backdrop legal-backdrop" role="dialog" aria-modal="true" aria-labelledby="modal-title">
            <div class={classes!("legal-modal", format!("legal-{}", document.key()))}>
                <div class="legal-header">
                    <h2 id="modal-title">{document.title()}</h2>
                    <button class="legal-x" onclick={close.clone()} aria-label="Close">{"✕"}</button>
                </div>
                <div class="legal-body">
                    if let Some(note) = document.dated_note() {
                        <p class="legal-note">{note}</p>
                    }
                    { for document.sections().iter().map(|section| html! {
                        <section>
                            <h3>{section.heading}</h3>
                            { for section.blocks.iter().map(render_block) }
                        </section>
                    }) }
                </div>
                <div class="legal-footer">
                    <button class="legal-close" onclick={close}>{"Close"}</button>
                </div>
            </div>
            <style>
                {r#"
                .legal-backdrop { background: rgba(0, 0, 0, 0.5); }
                .legal-modal {
                    width: 100%;
                    max-width: 42rem;
                    max-height: 85vh;
                    display: flex;
                    flex-direction: column;
                    background: #fff;
                    border-radius: 0.5rem;
                    overflow: hidden;
                }
                .legal-header,
                .legal-footer {
                    display: flex;
                    align-items: center;
                    padding: 1.5rem;
                    background: #f8fafc;
                }
                .legal-header {
                    justify-content: space-between;
                    border-bottom: 1px solid #e2e8f0;
                }
                .legal-header h2 { margin: 0; font-size: 1.25rem; color: #0f172a; }
                .legal-x {
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    color: #64748b;
                    cursor: pointer;
                }
                .legal-body {
                    padding: 2rem;
                    overflow-y: auto;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: #334155;
                }
                .legal-body h3 { font-size: 1rem; color: #0f172a; margin: 1.5rem 0 0.5rem; }
                .legal-note { font-style: italic; color: #64748b; }
                .legal-footer {
                    justify-content: flex-end;
                    border-top: 1px solid #e2e8f0;
                }
                .legal-close {
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 0.25rem;
                    background: #0f172a;
                    color: #fff;
                    font-weight: 700;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(document: Option<LegalDocument>) -> String {
        yew::ServerRenderer::<LegalModal>::with_props(move || LegalModalProps {
            document,
            on_close: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn terms_render_only_terms_content() {
        let html = render(Some(LegalDocument::Terms)).await;
        assert!(html.contains("Terms of Service"));
        assert!(html.contains("Limitation of Liability"));
        for other in ["1. Introduction", "Data We Collect", "General Commitment", "Compliance Status"] {
            assert!(!html.contains(other), "terms modal leaked {:?}", other);
        }
    }

    #[tokio::test]
    async fn absent_document_renders_nothing() {
        let html = render(None).await;
        assert!(!html.contains("legal-modal"));
        assert!(!html.contains(r#"role="dialog""#));
    }
}
