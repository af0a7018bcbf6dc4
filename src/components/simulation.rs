use std::rc::Rc;

use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::simulation::{drive_script, BrowserScheduler, ChatStep};

/// Current step of the chat script; restarts whenever `active` turns on.
#[hook]
pub fn use_chat_script(active: bool) -> ChatStep {
    let step = use_state_eq(|| ChatStep::Idle);
    {
        let step = step.clone();
        use_effect_with_deps(
            move |&active| {
                let timers = drive_script(active, &BrowserScheduler, Rc::new(move |next: ChatStep| step.set(next)));
                move || drop(timers)
            },
            active,
        );
    }
    *step
}

fn activation_handlers(onclick: &Callback<()>) -> (Callback<MouseEvent>, Callback<KeyboardEvent>) {
    let click = onclick.reform(|_: MouseEvent| ());
    let key = {
        let onclick = onclick.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                onclick.emit(());
            }
        })
    };
    (click, key)
}

#[derive(Properties, PartialEq)]
pub struct SimulationProps {
    pub active: bool,
    /// The real contact action. Fires at any step.
    pub onclick: Callback<()>,
}

#[function_component(SmsSimulation)]
pub fn sms_simulation(props: &SimulationProps) -> Html {
    let step = use_chat_script(props.active);
    let (onclick, onkeydown) = activation_handlers(&props.onclick);

    html! {
        <div class="sim sim-sms" data-step={step.index().to_string()} {onclick} {onkeydown} role="button" tabindex="0" aria-label="Open iMessage Direct Chat">
            <div class="sim-sms-header">
                <span class="sim-logo">{"⌂"}</span>
                <p>{"Davidoff RES"}</p>
            </div>
            <div class="sim-body">
                <div class={classes!("bubble", "bubble-out", "sms-out", step.shows_user_message().then_some("shown"))}>
                    {"Hey, can you help manage my place..."}
                </div>
                if step.shows_user_message() {
                    <p class="sms-receipt">{"Delivered"}</p>
                }
                if step.shows_typing() {
                    <div class="typing sms-in">
                        <span></span><span></span><span></span>
                    </div>
                }
                <div class={classes!("bubble", "bubble-in", "sms-in", step.shows_reply().then_some("shown"))}>
                    {"Absolutely! We handle key holding..."}
                </div>
                <div class="sim-input">
                    <span class="sim-input-field">{"iMessage"}</span>
                    <span class="sim-send sms-send">{"↑"}</span>
                </div>
            </div>
            <SimulationStyle />
        </div>
    }
}

#[function_component(WhatsAppSimulation)]
pub fn whatsapp_simulation(props: &SimulationProps) -> Html {
    let step = use_chat_script(props.active);
    let (onclick, onkeydown) = activation_handlers(&props.onclick);
    let status = if step.shows_typing() { "typing..." } else { "online" };

    html! {
        <div class="sim sim-whatsapp" data-step={step.index().to_string()} {onclick} {onkeydown} role="button" tabindex="0" aria-label="Open WhatsApp Support Chat">
            <div class="sim-wa-header">
                <span class="sim-logo">{"⌂"}</span>
                <div>
                    <p class="sim-wa-name">{"Davidoff RES"}</p>
                    <p class="sim-wa-status">{status}</p>
                </div>
            </div>
            <div class="sim-body sim-wa-body">
                <div class={classes!("bubble", "bubble-out", "wa-out", step.shows_user_message().then_some("shown"))}>
                    {"Hi, I have an apartment in Jerusalem..."}
                    <span class="bubble-time">{"10:30 AM ✓"}</span>
                </div>
                if step.shows_typing() {
                    <div class="typing wa-in">
                        <span></span><span></span><span></span>
                    </div>
                }
                <div class={classes!("bubble", "bubble-in", "wa-in", step.shows_reply().then_some("shown"))}>
                    {"Shalom! We'd love to help. We handle everything."}
                    <span class="bubble-time">{"10:31 AM"}</span>
                </div>
                <div class="sim-input">
                    <span class="sim-input-field">{"Start chat..."}</span>
                    <span class="sim-send wa-send">{"➤"}</span>
                </div>
            </div>
            <SimulationStyle />
        </div>
    }
}

#[function_component(SimulationStyle)]
fn simulation_style() -> Html {
    html! {
        <style>
            {r#"
            .sim {
                width: 100%;
                max-width: 240px;
                margin: 0 auto;
                background: #fff;
                border: 1px solid #f1f5f9;
                border-radius: 1rem;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                overflow: hidden;
                cursor: pointer;
                transition: transform 0.2s;
                font-size: 10px;
            }
            .sim:hover { transform: scale(1.05); }
            .sim:focus { outline: 4px solid rgba(59, 130, 246, 0.5); }
            .sim-logo {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                width: 1.5rem;
                height: 1.5rem;
                border-radius: 50%;
                background: #0f172a;
                color: #f59e0b;
            }
            .sim-sms-header {
                display: flex;
                flex-direction: column;
                align-items: center;
                padding: 0.5rem;
                border-bottom: 1px solid #f1f5f9;
                color: #64748b;
            }
            .sim-sms-header p { margin: 0.1rem 0 0; font-size: 9px; }
            .sim-wa-header {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.5rem;
                background: #075e54;
                color: #fff;
            }
            .sim-wa-header p { margin: 0; }
            .sim-wa-name { font-weight: 700; }
            .sim-wa-status { font-size: 8px; opacity: 0.8; }
            .sim-body {
                position: relative;
                display: flex;
                flex-direction: column;
                gap: 0.4rem;
                height: 10rem;
                padding: 0.6rem 0.6rem 2.5rem;
                overflow: hidden;
            }
            .sim-wa-body { background: #ece5dd; }
            .bubble {
                max-width: 90%;
                padding: 0.4rem 0.6rem;
                border-radius: 1rem;
                opacity: 0;
                transform: translateY(1rem);
                transition: opacity 0.5s, transform 0.5s;
            }
            .bubble.shown { opacity: 1; transform: translateY(0); }
            .bubble-out { align-self: flex-end; }
            .bubble-in { align-self: flex-start; }
            .sms-out { background: #007aff; color: #fff; }
            .sms-in { background: #e9e9eb; color: #000; }
            .wa-out { background: #dcf8c6; color: #1e293b; border-radius: 0.5rem; }
            .wa-in { background: #fff; color: #1e293b; border-radius: 0.5rem; }
            .bubble-time { display: block; text-align: right; font-size: 8px; color: #64748b; }
            .sms-receipt { align-self: flex-end; margin: 0; font-size: 8px; color: #94a3b8; }
            .typing {
                align-self: flex-start;
                display: flex;
                gap: 2px;
                padding: 0.5rem;
                border-radius: 1rem;
            }
            .typing span {
                width: 4px;
                height: 4px;
                border-radius: 50%;
                background: #94a3b8;
                animation: typing-bounce 1s infinite;
            }
            .typing span:nth-child(2) { animation-delay: 0.1s; }
            .typing span:nth-child(3) { animation-delay: 0.2s; }
            @keyframes typing-bounce {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-3px); }
            }
            .sim-input {
                position: absolute;
                left: 0.4rem;
                right: 0.4rem;
                bottom: 0.4rem;
                display: flex;
                align-items: center;
                gap: 0.4rem;
            }
            .sim-input-field {
                flex-grow: 1;
                padding: 0.25rem 0.5rem;
                border-radius: 999px;
                background: #f1f5f9;
                color: #94a3b8;
            }
            .sim-send {
                width: 1.5rem;
                height: 1.5rem;
                border-radius: 50%;
                display: inline-flex;
                align-items: center;
                justify-content: center;
                color: #fff;
            }
            .sms-send { background: #007aff; }
            .wa-send { background: #075e54; }
            "#}
        </style>
    }
}
