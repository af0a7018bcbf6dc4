use chrono::Datelike;
use log::warn;
use web_sys::window;
use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::*;

use crate::components::{
    faq::FaqAccordion,
    legal_modal::LegalModal,
    mobile_bar::MobileContactBar,
    nav::{scroll_callback, SideNav, TopNav},
    quote_modal::QuoteModal,
    reveal::Reveal,
    simulation::{SmsSimulation, WhatsAppSimulation},
};
use crate::config;
use crate::contact::{self, ContactAction};
use crate::content::{self, Section, AUDIENCES, FAQS, GALLERY, SERVICES, TESTIMONIALS};
use crate::error::SiteError;
use crate::legal::LegalDocument;
use crate::seo::Seo;
use crate::session::{SessionAction, SessionState};
use crate::visibility::{winning_section, VisibilityObserver};
use crate::Route;

fn contact_callback(action: ContactAction) -> Callback<()> {
    Callback::from(move |_| contact::dispatch(&action))
}

fn stars(count: usize) -> Html {
    html! { <>{ for (0..count).map(|_| html! { <span class="star">{"★"}</span> }) }</> }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    /// Legal document opened by the current route, if any.
    #[prop_or_default]
    pub legal: Option<LegalDocument>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let initial_legal = props.legal;
    let session = use_reducer(move || SessionState::with_legal(initial_legal));
    let loaded = use_state_eq(|| false);
    let navigator = use_navigator();

    {
        let loaded = loaded.clone();
        use_mount(move || loaded.set(true));
    }

    // The route owns which legal document is open.
    {
        let dispatcher = session.dispatcher();
        use_effect_with_deps(
            move |legal| {
                dispatcher.dispatch(match legal {
                    Some(doc) => SessionAction::OpenLegal(*doc),
                    None => SessionAction::CloseLegal,
                });
                || ()
            },
            props.legal,
        );
    }

    {
        let dispatcher = session.dispatcher();
        use_effect_with_deps(
            move |_| {
                let observer = window()
                    .and_then(|w| w.document())
                    .ok_or(SiteError::NoDocument)
                    .and_then(|document| {
                        let observer = VisibilityObserver::new(config::SECTION_VISIBILITY_THRESHOLD, move |batch| {
                            if let Some(section) = winning_section(&batch) {
                                dispatcher.dispatch(SessionAction::SectionVisible(section));
                            }
                        })?;
                        observer.observe_sections(&document);
                        Ok(observer)
                    })
                    .map_err(|e| warn!("Section tracking disabled: {}", e))
                    .ok();
                move || drop(observer)
            },
            (),
        );
    }

    let open_quote = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::OpenQuote))
    };
    let close_quote = {
        let session = session.clone();
        Callback::from(move |_: ()| session.dispatch(SessionAction::CloseQuote))
    };
    let open_legal = |doc: LegalDocument| {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| match &navigator {
            Some(navigator) => navigator.push(&Route::for_legal(doc)),
            None => session.dispatch(SessionAction::OpenLegal(doc)),
        })
    };
    let close_legal = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: ()| match &navigator {
            Some(navigator) => navigator.push(&Route::Home),
            None => session.dispatch(SessionAction::CloseLegal),
        })
    };

    let on_sms = contact_callback(ContactAction::Sms);
    let on_whatsapp = contact_callback(ContactAction::WhatsApp);
    let in_footer = session.is_active(Section::Footer);
    let year = chrono::Local::now().year();

    html! {
        <div class="page">
            <Seo
                title={content::SEO_TITLE}
                description={content::SEO_DESCRIPTION}
                keywords={content::SEO_KEYWORDS}
            />
            <a href="#main-content" class="skip-link">{"Skip to main content"}</a>
            <LegalModal document={session.legal_modal} on_close={close_legal} />
            <QuoteModal open={session.quote_modal_open} on_close={close_quote} />

            <SideNav active={session.active_section} />
            <TopNav on_call={contact_callback(ContactAction::Call)} />

            <main id="main-content">
                <section id="home" class="screen hero">
                    <div class="hero-backdrop">
                        <img
                            src={content::HERO_IMAGE}
                            alt="Jerusalem real estate solutions - Modern apartment buildings in Israel managed by Davidoff Real Estate Solutions"
                            class={classes!("hero-image", (*loaded).then_some("zoomed"))}
                            referrerpolicy="no-referrer"
                        />
                        <div class="hero-shade"></div>
                    </div>
                    <div class="container hero-content">
                        <div class={classes!("hero-copy", (*loaded).then_some("shown"))}>
                            <div class="hero-badge">{"Your Eyes & Ears in Israel"}</div>
                            <h2>{"Your Home,"}<br/><span class="hero-accent">{"Well Managed."}</span></h2>
                            <p>{"We provide end-to-end stewardship for your Israeli asset. From navigating bureaucracy and financials to tenant vetting and renovations."}</p>
                            <button class="quote-cta" onclick={open_quote}>
                                <span class="quote-cta-icon">{"✉"}</span>
                                <span>{"Get a Quote"}</span>
                            </button>
                        </div>
                        <div class="swipe-hint" onclick={scroll_callback::<MouseEvent>(Section::Services)}>
                            <span>{"Swipe Up"}</span>
                            <span class="chevron">{"⌄"}</span>
                        </div>
                    </div>
                </section>

                <section id="services" class="screen services">
                    <div class="container">
                        <Reveal>
                            <div class="section-heading">
                                <h3>{"Our Services"}</h3>
                                <h2>{"Practical Solutions."}</h2>
                            </div>
                        </Reveal>
                        <div class="service-grid">
                            { for SERVICES.iter().enumerate().map(|(idx, service)| html! {
                                <Reveal key={service.title} delay={idx as u32 * 100}>
                                    <div class={classes!("service-card", service.featured.then_some("featured"))}>
                                        if service.featured {
                                            <div class="popular-badge">{"POPULAR"}</div>
                                        }
                                        <h3>{service.title}</h3>
                                        <p>{service.description}</p>
                                        <div class="tags">
                                            { for service.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                                        </div>
                                    </div>
                                </Reveal>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="gallery" class="screen gallery">
                    <div class="container">
                        <Reveal>
                            <div class="section-heading">
                                <h3>{"Our Work"}</h3>
                                <h2>{"Renovations & Interiors"}</h2>
                            </div>
                        </Reveal>
                        <div class="gallery-strip">
                            { for GALLERY.iter().map(|image| html! {
                                <div key={image.url} class="gallery-card">
                                    <img src={image.url} alt={image.alt_text()} />
                                    <div class="gallery-caption">
                                        <h4>{image.title}</h4>
                                        <p>{"⌖ "}{image.location}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="types" class="screen audiences">
                    <div class="container">
                        <Reveal>
                            <div class="section-heading">
                                <h3>{"Who We Help"}</h3>
                                <h2>{"Tailored Service"}</h2>
                            </div>
                        </Reveal>
                        <div class="audience-grid">
                            { for AUDIENCES.iter().enumerate().map(|(idx, audience)| html! {
                                <Reveal key={audience.title} delay={idx as u32 * 100} class={classes!("full-height")}>
                                    <div class="audience-card">
                                        <h4>{audience.title}</h4>
                                        <p>{audience.description}</p>
                                    </div>
                                </Reveal>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="faq" class="screen faq">
                    <div class="container">
                        <Reveal>
                            <div class="section-heading">
                                <h3>{"FAQ"}</h3>
                                <h2>{"Common Questions"}</h2>
                            </div>
                        </Reveal>
                        <div class="scroll-box">
                            <FaqAccordion entries={FAQS} />
                        </div>
                    </div>
                </section>

                <section id="reviews" class="screen reviews">
                    <div class="container">
                        <Reveal>
                            <div class="section-heading">
                                <h2>{"Trusted Service"}</h2>
                                <div class="stars">{stars(5)}</div>
                            </div>
                        </Reveal>
                        <div class="review-strip">
                            { for TESTIMONIALS.iter().map(|review| html! {
                                <div key={review.author} class="review-card">
                                    <div class="stars">{stars(5)}</div>
                                    <blockquote>{format!("\"{}\"", review.text)}</blockquote>
                                    <div class="review-author">
                                        <p class="author">{review.author}</p>
                                        <p class="location">{"⌖ "}{review.location}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="footer" class="screen contact">
                    <div class="container contact-layout">
                        <div class="contact-heading">
                            <h2>{"Let's Connect"}</h2>
                            <p>{"Tap the screens below to start"}</p>
                        </div>
                        <div class="sim-grid">
                            <div class="sim-slot">
                                <SmsSimulation active={in_footer} onclick={on_sms.clone()} />
                                <p class="sim-caption">{"iMessage Direct"}</p>
                            </div>
                            <div class="sim-slot">
                                <WhatsAppSimulation active={in_footer} onclick={on_whatsapp.clone()} />
                                <p class="sim-caption">{"WhatsApp Support"}</p>
                            </div>
                        </div>
                        <div class="footer-links">
                            <div class="socials">
                                <a href="#" aria-label="TikTok">{"TikTok"}</a>
                                <a href="#" aria-label="X">{"X"}</a>
                                <a href="#" aria-label="Facebook">{"Facebook"}</a>
                            </div>
                            <button class="email-link" onclick={contact_callback(ContactAction::Email).reform(|_: MouseEvent| ())}>
                                {config::CONTACT_EMAIL}
                            </button>
                            <div class="legal-links">
                                { for LegalDocument::ALL.into_iter().map(|doc| html! {
                                    <button key={doc.key()} onclick={open_legal(doc)}>{doc.link_label()}</button>
                                }) }
                            </div>
                            <p class="copyright">{format!("© {} {}.", year, config::BUSINESS_NAME)}</p>
                        </div>
                    </div>
                </section>
            </main>

            <MobileContactBar hidden={in_footer} {on_sms} {on_whatsapp} />
            <HomeStyle />
        </div>
    }
}

#[function_component(HomeStyle)]
fn home_style() -> Html {
    html! {
        <style>
            {r#"
            .page {
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                color: #0f172a;
                background: #fafaf9;
                width: 100%;
                height: 100vh;
                overflow-x: hidden;
                overflow-y: scroll;
                scroll-snap-type: y mandatory;
                scroll-behavior: smooth;
            }
            .skip-link {
                position: absolute;
                left: -9999px;
            }
            .skip-link:focus {
                left: 0;
                z-index: 100;
                padding: 1rem;
                background: #f59e0b;
            }
            .container {
                max-width: 80rem;
                margin: 0 auto;
                padding: 4rem 1.5rem 5rem;
                box-sizing: border-box;
            }
            .screen {
                position: relative;
                width: 100%;
                min-height: 100vh;
                scroll-snap-align: start;
                display: flex;
                flex-direction: column;
                justify-content: center;
                overflow: hidden;
            }
            .section-heading {
                text-align: center;
                margin-bottom: 2.5rem;
            }
            .section-heading h3 {
                margin: 0 0 0.5rem;
                font-size: 0.75rem;
                letter-spacing: 0.2em;
                text-transform: uppercase;
                color: #b45309;
            }
            .section-heading h2 {
                margin: 0;
                font-family: serif;
                font-size: 2.25rem;
            }

            .hero { background: #0f172a; }
            .hero-backdrop { position: absolute; inset: 0; }
            .hero-image {
                width: 100%;
                height: 100%;
                object-fit: cover;
                opacity: 0.8;
                transform: scale(1);
                transition: transform 20s ease-in-out;
            }
            .hero-image.zoomed { transform: scale(1.1); }
            .hero-shade {
                position: absolute;
                inset: 0;
                background: linear-gradient(to bottom, rgba(2, 6, 23, 0.7), rgba(15, 23, 42, 0.6), rgba(2, 6, 23, 0.9));
            }
            .hero-content { position: relative; z-index: 10; width: 100%; }
            .hero-copy {
                max-width: 48rem;
                color: #fff;
                opacity: 0;
                transform: translateY(2.5rem);
                transition: all 1s 0.3s;
            }
            .hero-copy.shown { opacity: 1; transform: translateY(0); }
            .hero-badge {
                display: inline-block;
                margin-bottom: 1rem;
                padding: 0.25rem 0.75rem;
                border-radius: 999px;
                background: #f59e0b;
                color: #0f172a;
                font-size: 0.75rem;
                font-weight: 700;
                text-transform: uppercase;
            }
            .hero-copy h2 {
                margin: 0 0 1.5rem;
                font-family: serif;
                font-size: clamp(2.25rem, 7vw, 4.5rem);
                line-height: 1.1;
            }
            .hero-accent {
                background: linear-gradient(to right, #fde68a, #f59e0b);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .hero-copy p { max-width: 36rem; font-size: 1.25rem; line-height: 1.6; color: #f1f5f9; }
            .quote-cta {
                display: inline-flex;
                align-items: center;
                gap: 0.75rem;
                margin-top: 1.5rem;
                padding: 0.75rem 1.5rem;
                border: none;
                border-radius: 999px;
                background: #fff;
                color: #0f172a;
                font-weight: 700;
                cursor: pointer;
                box-shadow: 0 0 20px rgba(255, 255, 255, 0.2);
                transition: transform 0.2s;
            }
            .quote-cta:hover { transform: scale(1.05); }
            .quote-cta-icon {
                display: inline-flex;
                padding: 0.5rem;
                border-radius: 50%;
                background: #f1f5f9;
            }
            .swipe-hint {
                position: absolute;
                bottom: 6rem;
                left: 50%;
                transform: translateX(-50%);
                display: flex;
                flex-direction: column;
                align-items: center;
                color: rgba(255, 255, 255, 0.8);
                font-size: 10px;
                font-weight: 700;
                letter-spacing: 0.2em;
                text-transform: uppercase;
                cursor: pointer;
                animation: hint-bounce 1s infinite;
            }
            .chevron { font-size: 1.5rem; color: #fff; }
            @keyframes hint-bounce {
                0%, 100% { transform: translate(-50%, 0); }
                50% { transform: translate(-50%, -25%); }
            }

            .services { background: #fff; }
            .service-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                gap: 2rem;
            }
            .service-card {
                position: relative;
                padding: 2rem;
                border: 1px solid #f5f5f4;
                border-radius: 0.75rem;
                background: #fafaf9;
                overflow: hidden;
            }
            .service-card.featured { background: #fffbeb; border-color: #fef3c7; }
            .service-card h3 { margin: 0 0 0.75rem; font-family: serif; font-size: 1.25rem; }
            .service-card p { margin: 0 0 1rem; font-size: 0.875rem; color: #475569; }
            .popular-badge {
                position: absolute;
                top: 0;
                right: 0;
                padding: 0.1rem 0.5rem;
                background: #f59e0b;
                color: #fff;
                font-size: 10px;
                font-weight: 700;
            }
            .tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
            .tag {
                padding: 0.25rem 0.5rem;
                border: 1px solid #e2e8f0;
                border-radius: 999px;
                background: #fff;
                font-size: 10px;
                font-weight: 700;
                color: #475569;
            }

            .gallery { background: #0f172a; }
            .gallery .section-heading h2 { color: #fff; }
            .gallery .section-heading h3 { color: #f59e0b; }
            .gallery-strip {
                display: flex;
                gap: 1rem;
                overflow-x: auto;
                scroll-snap-type: x mandatory;
                padding-bottom: 1rem;
            }
            .gallery-card {
                position: relative;
                min-width: min(80vw, 30rem);
                height: 50vh;
                scroll-snap-align: center;
                border: 1px solid #334155;
                border-radius: 0.75rem;
                overflow: hidden;
            }
            .gallery-card img {
                width: 100%;
                height: 100%;
                object-fit: cover;
                transition: transform 0.7s;
            }
            .gallery-card:hover img { transform: scale(1.1); }
            .gallery-caption {
                position: absolute;
                inset: 0;
                display: flex;
                flex-direction: column;
                justify-content: flex-end;
                padding: 1.5rem;
                background: linear-gradient(to top, rgba(15, 23, 42, 0.9), transparent);
            }
            .gallery-caption h4 { margin: 0; color: #fff; font-size: 1.125rem; }
            .gallery-caption p { margin: 0; color: #fbbf24; font-size: 0.75rem; text-transform: uppercase; }

            .audiences { background: #f5f5f4; }
            .audience-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                gap: 1.5rem;
            }
            .full-height { height: 100%; }
            .audience-card {
                height: 100%;
                box-sizing: border-box;
                padding: 2rem;
                border-radius: 0.5rem;
                background: #fff;
                border-bottom: 4px solid transparent;
                transition: border-color 0.2s;
            }
            .audience-card:hover { border-bottom-color: #f59e0b; }
            .audience-card h4 { margin: 0 0 0.25rem; font-size: 1.125rem; }
            .audience-card p { margin: 0; font-size: 0.875rem; color: #475569; }

            .faq { background: #fff; }
            .scroll-box { max-height: 60vh; overflow-y: auto; padding: 0.25rem; }

            .reviews { background: #f8fafc; }
            .stars { display: flex; justify-content: center; gap: 0.25rem; color: #f59e0b; }
            .review-strip {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                gap: 1rem;
            }
            .review-card {
                display: flex;
                flex-direction: column;
                padding: 1.5rem;
                border: 1px solid #e2e8f0;
                border-radius: 0.75rem;
                background: #fff;
            }
            .review-card .stars { justify-content: flex-start; margin-bottom: 1rem; }
            .review-card blockquote {
                flex-grow: 1;
                margin: 0 0 1rem;
                font-style: italic;
                line-height: 1.6;
                color: #475569;
            }
            .review-author { border-top: 1px solid #f1f5f9; padding-top: 0.75rem; }
            .review-author p { margin: 0; }
            .author { font-weight: 700; font-size: 0.875rem; }
            .location { font-size: 0.75rem; color: #64748b; text-transform: uppercase; }

            .contact { background: #fff; }
            .contact-layout { display: flex; flex-direction: column; padding-bottom: 1.5rem; }
            .contact-heading { text-align: center; margin-bottom: 2rem; }
            .contact-heading h2 { margin: 0 0 0.5rem; font-family: serif; font-size: 3rem; }
            .contact-heading p { margin: 0; color: #64748b; font-size: 0.875rem; }
            .sim-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                gap: 2rem;
                max-width: 56rem;
                margin: 0 auto;
                width: 100%;
            }
            .sim-slot { display: flex; flex-direction: column; align-items: center; }
            .sim-caption {
                margin: 1rem 0 0;
                font-size: 0.75rem;
                font-weight: 700;
                letter-spacing: 0.2em;
                text-transform: uppercase;
                color: #94a3b8;
            }
            .footer-links { text-align: center; margin-top: 1.5rem; font-size: 0.75rem; color: #94a3b8; }
            .socials, .legal-links { display: flex; justify-content: center; gap: 1.5rem; margin-bottom: 1rem; }
            .socials a { color: #94a3b8; text-decoration: none; }
            .socials a:hover { color: #000; }
            .email-link,
            .legal-links button {
                background: none;
                border: none;
                color: inherit;
                text-decoration: underline;
                cursor: pointer;
            }
            .copyright { margin: 0; }
            "#}
        </style>
    }
}
