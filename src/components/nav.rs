use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{BRAND, BRAND_INITIALS};
use crate::pages::sections::Section;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Section,
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_navigate: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
    pub on_contact: Callback<()>,
    pub on_menu_contact: Callback<()>,
}

/// Anchor that scrolls smoothly instead of jumping.
fn section_link(section: Section, class: Classes, on_navigate: &Callback<Section>) -> Html {
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };
    html! {
        <a href={section.href()} {class} {onclick}>{ section.label() }</a>
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, scrolled, menu_open, on_navigate, on_toggle_menu, on_contact, on_menu_contact } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    html! {
        <header class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">
                    <div class="brand-badge">{ BRAND_INITIALS }</div>
                    <span class="brand-name">{ BRAND }</span>
                </div>

                <nav class="nav-right">
                    { for Section::ALL.iter().map(|section| {
                        let class = classes!("nav-link", (*section == *active).then(|| "active"));
                        section_link(*section, class, on_navigate)
                    }) }
                    <button class="nav-contact-button" onclick={on_contact.reform(|_: MouseEvent| ())}>
                        {"Contact"}
                    </button>
                </nav>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { for Section::ALL.iter().map(|section| {
                        let class = classes!("mobile-link", (*section == *active).then(|| "active"));
                        section_link(*section, class, on_navigate)
                    }) }
                    <button class="mobile-contact-button" onclick={on_menu_contact.reform(|_: MouseEvent| ())}>
                        {"Contact"}
                    </button>
                </div>
            }
        </header>
    }
}
