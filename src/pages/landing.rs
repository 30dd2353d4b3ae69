use chrono::Datelike;
use futures::future::{abortable, AbortHandle};
use gloo_timers::callback::Timeout;
use log::{debug, error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, KeyboardEvent, MouseEvent};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::carousel::{Carousel, Direction};
use crate::components::contact_form::{ContactFormView, FormLayout};
use crate::components::modals::{ContactPanel, SuccessModal};
use crate::components::nav::Nav;
use crate::config::LandingConfig;
use crate::contact::form::FormField;
use crate::contact::submit::SubmitterHandle;
use crate::content::{
    ABOUT_IMAGE, AWARDS, BRAND, BRAND_INITIALS, CERTIFICATES, COMPANIES, CONTACT_ADDRESS,
    CONTACT_EMAIL, CONTACT_PHONE, FOOTER_IMAGE, HERO_IMAGE, SERVICES, STATS,
};
use crate::dom::{self, WindowListener};
use crate::pages::landing_state::{LandingAction, LandingState, Overlay};
use crate::pages::sections::{section_at_probe, Section};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub submitter: SubmitterHandle,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let state = use_reducer(LandingState::default);

    // Scroll spy, registered once for the lifetime of the page
    {
        let dispatcher = state.dispatcher();
        let probe_line = config.probe_line;
        use_effect_with_deps(
            move |_| {
                let report = move || {
                    let hit = section_at_probe(probe_line, dom::section_bounds);
                    dispatcher.dispatch(LandingAction::Scrolled { offset: dom::scroll_y(), hit });
                };
                // Initial check, the page may load already scrolled.
                report();
                let listener = WindowListener::passive("scroll", move |_: Event| report());
                move || drop(listener)
            },
            (),
        );
    }

    // Escape closes every overlay
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("keydown", move |e: Event| {
                    let is_escape = e
                        .dyn_ref::<KeyboardEvent>()
                        .map_or(false, |key| key.key() == "Escape");
                    if is_escape {
                        dispatcher.dispatch(LandingAction::EscapePressed);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    // Lock page scrolling while an overlay is up
    use_effect_with_deps(
        move |locked| {
            dom::set_body_scroll_locked(*locked);
            || dom::set_body_scroll_locked(false)
        },
        state.scroll_locked(),
    );

    // Run the submission the form just validated
    {
        let dispatcher = state.dispatcher();
        let submitter = props.submitter.clone();
        let data = state.form.data.clone();
        use_effect_with_deps(
            move |in_flight| {
                let mut abort: Option<AbortHandle> = None;
                if let Some(ticket) = *in_flight {
                    info!("Submitting contact message (ticket {})", ticket);
                    let (submission, handle) = abortable(submitter.0.submit(data));
                    abort = Some(handle);
                    spawn_local(async move {
                        let Ok(result) = submission.await else {
                            debug!("Submission {} abandoned", ticket);
                            return;
                        };
                        match &result {
                            Ok(()) => info!("Contact message {} accepted", ticket),
                            Err(e) => error!("Submission error: {}", e),
                        }
                        dispatcher.dispatch(LandingAction::SubmitFinished { ticket, result });
                    });
                }
                move || {
                    if let Some(handle) = abort {
                        handle.abort();
                    }
                }
            },
            state.form.in_flight(),
        );
    }

    // Close the success dialog and panel a while after a successful submit
    {
        let dispatcher = state.dispatcher();
        let delay = config.auto_dismiss_ms;
        use_effect_with_deps(
            move |pending| {
                let timeout = (*pending).map(|ticket| {
                    Timeout::new(delay, move || {
                        debug!("Auto-dismissing confirmation for ticket {}", ticket);
                        dispatcher.dispatch(LandingAction::AutoDismiss { ticket });
                    })
                });
                // Dropping an unfired Timeout cancels it.
                move || drop(timeout)
            },
            state.pending_dismiss,
        );
    }

    let dispatch = |action: fn() -> LandingAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(action()))
    };

    let on_navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |section: Section| {
            dom::scroll_to_section(section);
            dispatcher.dispatch(LandingAction::Navigated);
        })
    };
    let scroll_to = |section: Section| on_navigate.reform(move |_: MouseEvent| section);

    let on_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, value): (FormField, String)| {
            dispatcher.dispatch(LandingAction::EditField(field, value));
        })
    };
    let on_submit = dispatch(|| LandingAction::SubmitRequested);
    let on_press = dispatch(|| LandingAction::CarouselPressed);
    let on_release = dispatch(|| LandingAction::CarouselReleased);

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <style>{ STYLES }</style>

            if config.shows_scroll_to_top(state.scroll_offset) {
                <button class="scroll-top-button" onclick={Callback::from(|_: MouseEvent| dom::scroll_to_top())} aria-label="Scroll to top">
                    {"↑"}
                </button>
            }

            <Nav
                active={state.active_section}
                scrolled={state.scroll_offset > 0.0}
                menu_open={state.mobile_menu_open}
                on_navigate={on_navigate.clone()}
                on_toggle_menu={dispatch(|| LandingAction::ToggleMobileMenu)}
                on_contact={dispatch(|| LandingAction::ToggleContact)}
                on_menu_contact={dispatch(|| LandingAction::ContactFromMenu)}
            />

            <section id={Section::Home.id()} class="hero">
                <div class="hero-background" style={format!("background-image: url({});", HERO_IMAGE)}></div>
                <div class="hero-shade"></div>
                <div class="hero-content">
                    <h1>{"Looking for a new business Location?"}</h1>
                    <p class="hero-subtitle">{"I've got your back!"}</p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={scroll_to(Section::Services)}>{"Explore Properties"}</button>
                        <button class="hero-cta ghost" onclick={scroll_to(Section::Contact)}>{"Contact Us"}</button>
                    </div>
                </div>
                <button class="scroll-down" onclick={scroll_to(Section::About)} aria-label="Scroll down">{"↓"}</button>
            </section>

            <section class="stats">
                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat">
                            <div class="stat-icon">{ stat.icon }</div>
                            <div class="stat-number">{ stat.number }</div>
                            <div class="stat-label">{ stat.label }</div>
                        </div>
                    }) }
                </div>
            </section>

            <section id={Section::About.id()} class="about">
                <div class="about-text">
                    <h2>{"14+ Years of Real Estate Excellence"}</h2>
                    <p>
                        {"DGrealtor has been in the real estate business for over 14 years, serving some of the industry's most prominent businesses. "}
                        {"Our expertise in commercial real estate and business location consulting has helped countless clients find the perfect locations for their ventures."}
                    </p>
                    <p>{"With our deep market knowledge and extensive network, we provide tailored solutions that align with your business goals and vision."}</p>
                </div>
                <div class="about-image">
                    <img src={ABOUT_IMAGE} alt="Professional Real Estate" loading="lazy" />
                </div>
            </section>

            <section id={Section::Services.id()} class="services">
                <h2>{"Our Services"}</h2>
                <p class="section-subtitle">{"Comprehensive real estate solutions for your business needs"}</p>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="service-card">
                            <div class="service-icon">{ service.icon }</div>
                            <h3>{ service.title }</h3>
                            <p>{ service.description }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id={Section::Awards.id()} class="awards">
                <h2>{"Awards & Certificates"}</h2>
                <p class="section-subtitle">{"Recognition of our excellence in real estate"}</p>
                <Carousel
                    title="Awards"
                    caption="DGrealtor Excellence"
                    items={AWARDS}
                    direction={Direction::Forward}
                    card_class={classes!("award")}
                    animating={state.animating}
                    on_press={on_press.clone()}
                    on_release={on_release.clone()}
                />
                <Carousel
                    title="Certificates"
                    caption="Professional Certification"
                    items={CERTIFICATES}
                    direction={Direction::Backward}
                    card_class={classes!("certificate")}
                    animating={state.animating}
                    {on_press}
                    {on_release}
                />
            </section>

            <section class="companies">
                <h2>{"Companies We've Worked With"}</h2>
                <div class="companies-grid">
                    { for COMPANIES.iter().map(|company| html! {
                        <div class="company-logo">
                            <img src={company.logo} alt={company.name} loading="lazy" />
                        </div>
                    }) }
                </div>
            </section>

            <section id={Section::Contact.id()} class="contact">
                <h2>{"Get In Touch"}</h2>
                <p class="section-subtitle">{"Ready to find your perfect business location? Let's talk!"}</p>
                <div class="contact-card">
                    <ContactFormView
                        form={state.form.clone()}
                        layout={FormLayout::Section}
                        on_edit={on_edit.clone()}
                        on_submit={on_submit.clone()}
                    />
                </div>
            </section>

            <ContactPanel
                open={state.contact_open}
                form={state.form.clone()}
                on_backdrop={dispatch(|| LandingAction::BackdropClicked(Overlay::ContactPanel))}
                on_close={dispatch(|| LandingAction::CloseContact)}
                {on_edit}
                {on_submit}
            />
            <SuccessModal
                open={state.success_open}
                on_backdrop={dispatch(|| LandingAction::BackdropClicked(Overlay::Success))}
            />

            <footer class="site-footer" style={format!("background-image: url({});", FOOTER_IMAGE)}>
                <div class="footer-shade" aria-hidden="true"></div>
                <div class="footer-content">
                    <div class="footer-brand">
                        <div class="nav-logo">
                            <div class="brand-badge">{ BRAND_INITIALS }</div>
                            <h3>{ BRAND }</h3>
                        </div>
                        <p>{"Your trusted partner in commercial real estate and business location consulting."}</p>
                    </div>
                    <div class="footer-links">
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            { for Section::ALL.iter().map(|section| {
                                let section = *section;
                                let onclick = on_navigate.reform(move |e: MouseEvent| {
                                    e.prevent_default();
                                    section
                                });
                                html! {
                                    <li><a href={section.href()} {onclick}>{ section.label() }</a></li>
                                }
                            }) }
                        </ul>
                    </div>
                    <div class="footer-contact">
                        <h4>{"Contact Info"}</h4>
                        <p>{"✉️ "}{ CONTACT_EMAIL }</p>
                        <p>{"📞 "}{ CONTACT_PHONE }</p>
                        <p>{"📍 "}{ CONTACT_ADDRESS }</p>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{ format!("© {} {}. 14+ Years of experience in real estate excellence.", year, BRAND) }</p>
                </div>
            </footer>
        </div>
    }
}

const STYLES: &str = r#"
.landing-page {
    min-height: 100vh;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    background: #f9fafb;
    color: #1f2937;
}
.landing-page section h2 {
    font-size: 2.25rem;
    font-weight: 700;
    text-align: center;
    margin-bottom: 1rem;
}
.section-subtitle {
    text-align: center;
    font-size: 1.25rem;
    color: #4b5563;
    max-width: 48rem;
    margin: 0 auto 4rem;
}
.scroll-top-button {
    position: fixed;
    bottom: 5rem;
    right: 1.5rem;
    z-index: 50;
    background: #2563eb;
    color: #fff;
    border: none;
    border-radius: 9999px;
    width: 3rem;
    height: 3rem;
    font-size: 1.5rem;
    cursor: pointer;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
    animation: fadeUp 0.3s ease-out;
}
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}
.hero-background {
    position: absolute;
    inset: 0;
    background-size: cover;
    background-position: center;
    filter: brightness(0.7);
}
.hero-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.2), rgba(0, 0, 0, 0.5));
}
.hero-content {
    position: relative;
    z-index: 10;
    text-align: center;
    color: #fff;
    padding: 0 1rem;
    max-width: 56rem;
    animation: fadeUp 0.8s ease-out;
}
.hero-content h1 {
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    font-weight: 700;
    margin-bottom: 1.5rem;
}
.hero-subtitle {
    font-size: 1.5rem;
    margin-bottom: 2.5rem;
}
.hero-cta-group {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    justify-content: center;
}
.hero-cta {
    padding: 1rem 2rem;
    border-radius: 9999px;
    border: none;
    background: #2563eb;
    color: #fff;
    font-weight: 700;
    font-size: 1.125rem;
    cursor: pointer;
    transition: transform 0.3s ease, background 0.3s ease;
}
.hero-cta:hover { transform: scale(1.05); background: #1d4ed8; }
.hero-cta.ghost { background: rgba(255, 255, 255, 0.2); backdrop-filter: blur(4px); }
.scroll-down {
    position: absolute;
    bottom: 2.5rem;
    left: 50%;
    transform: translateX(-50%);
    z-index: 20;
    background: rgba(255, 255, 255, 0.2);
    color: #fff;
    border: none;
    border-radius: 9999px;
    width: 3rem;
    height: 3rem;
    font-size: 1.5rem;
    cursor: pointer;
}
.stats, .about, .awards, .contact { background: #fff; }
.stats { padding: 4rem 1rem; }
.stats-grid {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
    text-align: center;
}
.stat-icon { font-size: 2rem; margin-bottom: 0.5rem; }
.stat-number { font-size: 1.875rem; font-weight: 700; }
.stat-label { color: #4b5563; }
.about {
    padding: 5rem 1rem;
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
}
.about-text h2 { text-align: left !important; }
.about-text p { font-size: 1.125rem; color: #4b5563; line-height: 1.75; margin-bottom: 1.5rem; }
.about-image img { width: 100%; height: 24rem; object-fit: cover; border-radius: 0.75rem; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); }
.services { padding: 5rem 1rem; background: linear-gradient(to bottom, #f9fafb, #fff); }
.services-grid {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}
.service-card {
    background: #fff;
    padding: 2rem;
    border-radius: 1rem;
    border: 1px solid #f3f4f6;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
    transition: transform 0.3s ease;
}
.service-card:hover { transform: translateY(-10px); }
.service-icon { font-size: 2rem; margin-bottom: 1.5rem; }
.service-card h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
.awards { padding: 5rem 1rem; }
.carousel { max-width: 80rem; margin: 0 auto 4rem; }
.carousel-title { font-size: 1.5rem; font-weight: 700; text-align: center; margin-bottom: 2rem; }
.carousel-track {
    display: flex;
    overflow-x: auto;
    padding: 1rem 0;
    cursor: grab;
    scrollbar-width: none;
    -ms-overflow-style: none;
    user-select: none;
}
.carousel-track::-webkit-scrollbar { display: none; }
.carousel-track.grabbing { cursor: grabbing; }
.carousel-card {
    flex-shrink: 0;
    min-width: 300px;
    margin: 0 0.75rem;
    padding: 1.5rem;
    border-radius: 0.75rem;
    color: #fff;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    transition: transform 0.2s ease;
}
.carousel-card:hover { transform: scale(1.03); }
.carousel-card h4 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }
.carousel-card p { opacity: 0.9; }
.carousel-card.award { background: linear-gradient(to right, #3b82f6, #9333ea); }
.carousel-card.certificate { background: linear-gradient(to right, #22c55e, #0d9488); }
.companies { padding: 5rem 1rem; background: #f9fafb; }
.companies-grid {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(5, 1fr);
    gap: 2rem;
    justify-items: center;
}
.company-logo { padding: 1rem; background: #fff; border-radius: 0.75rem; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); }
.company-logo img { height: 3rem; filter: grayscale(1); transition: filter 0.3s ease; }
.company-logo img:hover { filter: grayscale(0); }
.contact { padding: 5rem 1rem; }
.contact-card { max-width: 56rem; margin: 0 auto; background: #f9fafb; border-radius: 1rem; padding: 2rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08); }
.contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
.contact-form.compact { gap: 1rem; }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.form-field label { display: block; font-size: 0.875rem; font-weight: 500; color: #374151; margin-bottom: 0.5rem; }
.form-field input, .form-field textarea {
    width: 100%;
    box-sizing: border-box;
    padding: 0.75rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 0.5rem;
    font: inherit;
}
.form-field.has-error input, .form-field.has-error textarea { border-color: #ef4444; }
.field-error { color: #ef4444; font-size: 0.875rem; margin-top: 0.25rem; }
.send-button {
    width: 100%;
    padding: 0.75rem 1.5rem;
    border: none;
    border-radius: 0.5rem;
    background: #2563eb;
    color: #fff;
    font-weight: 600;
    cursor: pointer;
}
.send-button:disabled { opacity: 0.6; cursor: wait; }
.overlay {
    position: fixed;
    inset: 0;
    z-index: 60;
    background: rgba(0, 0, 0, 0.5);
    display: flex;
    animation: fadeIn 0.3s ease-out;
}
.overlay-panel { align-items: flex-start; justify-content: flex-end; }
.overlay-center { align-items: center; justify-content: center; padding: 1rem; }
.contact-panel {
    background: #fff;
    height: 100%;
    width: 100%;
    max-width: 28rem;
    padding: 1.5rem;
    box-sizing: border-box;
    overflow-y: auto;
    animation: slideIn 0.3s ease-out;
}
.panel-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.5rem; }
.panel-header h3 { font-size: 1.5rem; font-weight: 700; }
.close-button { background: none; border: none; font-size: 1.5rem; color: #6b7280; cursor: pointer; }
.success-card {
    background: #fff;
    border-radius: 1rem;
    padding: 2rem;
    text-align: center;
    max-width: 28rem;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    animation: popIn 0.3s ease-out;
}
.success-icon { font-size: 3.75rem; margin-bottom: 1rem; }
.success-card img { width: 8rem; height: 8rem; border-radius: 0.5rem; }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0, 0, 0, 0); }
.site-footer { position: relative; background-size: cover; background-position: center; color: #fff; padding: 4rem 1rem; }
.footer-shade { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.6); }
.footer-content {
    position: relative;
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}
.site-footer p, .site-footer a { color: #e5e7eb; text-decoration: none; }
.site-footer ul { list-style: none; padding: 0; }
.site-footer li a { display: block; padding: 0.25rem 0; }
.footer-bottom { position: relative; border-top: 1px solid #4b5563; margin-top: 2rem; padding-top: 2rem; text-align: center; }
@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
@keyframes fadeUp { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
@keyframes slideIn { from { transform: translateX(100%); } to { transform: translateX(0); } }
@keyframes popIn { from { transform: scale(0.8); opacity: 0; } to { transform: scale(1); opacity: 1; } }
@media (max-width: 768px) {
    .stats-grid { grid-template-columns: repeat(2, 1fr); }
    .about, .services-grid, .footer-content, .form-row { grid-template-columns: 1fr; }
    .companies-grid { grid-template-columns: repeat(2, 1fr); }
}
"#;
