use yew::prelude::*;

use crate::content::NAV_LINKS;
use crate::icons::{Glyph, Icon};
use crate::state::NavMenuState;

fn nav_links() -> Html {
    html! {
        <>
            { for NAV_LINKS.iter().map(|l| html! {
                <a class="nav-link" href={l.href()}>{ l.label }</a>
            })}
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub brand: AttrValue,
    pub menu: NavMenuState,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let open = props.menu.is_open;
    html! {
        <nav class="nav">
            <div class="container">
                <div class="nav-bar">
                    <div class="brand">{ props.brand.clone() }</div>

                    <div class="nav-links desktop-only">
                        { nav_links() }
                    </div>

                    <button
                        class="menu-button mobile-only"
                        aria-label={ if open { "Close menu" } else { "Open menu" } }
                        aria-expanded={ open.to_string() }
                        onclick={props.on_toggle.clone()}
                    >
                        <Glyph icon={ if open { Icon::Close } else { Icon::Menu } } />
                    </button>
                </div>

                if open {
                    <div class="nav-panel mobile-only">
                        { nav_links() }
                    </div>
                }
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub brand: AttrValue,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let menu = use_state(NavMenuState::default);

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };

    html! {
        <NavBar brand={props.brand.clone()} menu={*menu} on_toggle={on_toggle} />
    }
}
