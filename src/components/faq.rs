use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FaqEntry;

/// Next expanded index after clicking entry `idx` of a list of `len`.
pub fn toggle_open(open: Option<usize>, idx: usize, len: usize) -> Option<usize> {
    if idx >= len {
        return open;
    }
    if open == Some(idx) {
        None
    } else {
        Some(idx)
    }
}

#[derive(Properties)]
pub struct FaqAccordionProps {
    pub entries: &'static [FaqEntry],
}

impl PartialEq for FaqAccordionProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.entries, other.entries)
    }
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let open = use_state_eq(|| None::<usize>);
    let len = props.entries.len();

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(idx, entry)| {
                let is_open = *open == Some(idx);
                let toggle = {
                    let open = open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open.set(toggle_open(*open, idx, len));
                    })
                };
                html! {
                    <div key={idx} class={classes!("faq-item", is_open.then_some("open"))}>
                        <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                            <span class="question-text">{entry.question}</span>
                            <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                        </button>
                        <div class="faq-answer">
                            <p>{entry.answer}</p>
                        </div>
                    </div>
                }
            }) }
            <style>
                {r#"
                .faq-list {
                    max-width: 42rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    border: 1px solid #e2e8f0;
                    border-radius: 0.5rem;
                    background: #fff;
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem;
                    background: none;
                    border: none;
                    text-align: left;
                    font-weight: 700;
                    color: #1e293b;
                    cursor: pointer;
                }
                .faq-item.open .toggle-icon {
                    color: #f59e0b;
                }
                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    transition: max-height 0.3s ease-in-out, opacity 0.3s ease-in-out;
                }
                .faq-item.open .faq-answer {
                    max-height: 10rem;
                    opacity: 1;
                }
                .faq-answer p {
                    margin: 0;
                    padding: 0 1rem 1rem;
                    font-size: 0.875rem;
                    color: #475569;
                    line-height: 1.6;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_closed_entry_expands_it() {
        assert_eq!(toggle_open(None, 2, 4), Some(2));
    }

    #[test]
    fn clicking_expanded_entry_collapses_it() {
        assert_eq!(toggle_open(Some(1), 1, 4), None);
    }

    #[test]
    fn clicking_another_entry_moves_expansion() {
        assert_eq!(toggle_open(Some(0), 3, 4), Some(3));
    }

    #[test]
    fn at_most_one_entry_open_over_any_click_sequence() {
        let len = 4;
        let clicks = [0, 1, 1, 3, 2, 2, 2, 0, 9, 3];
        let mut open = None;
        for idx in clicks {
            open = toggle_open(open, idx, len);
            let expanded = (0..len).filter(|&i| open == Some(i)).count();
            assert!(expanded <= 1);
        }
        assert_eq!(open, Some(3));
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        assert_eq!(toggle_open(Some(1), 7, 4), Some(1));
        assert_eq!(toggle_open(None, 4, 4), None);
    }
}
