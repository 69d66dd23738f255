use yew::prelude::*;

use crate::icons::{Glyph, Icon};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: AttrValue,
    pub github_url: AttrValue,
    pub linkedin_url: AttrValue,
    pub mailto: AttrValue,
    pub year: u32,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-row">
                    <div class="brand">{ props.brand.clone() }</div>
                    <div class="footer-links">
                        <a class="footer-link" href={props.github_url.clone()} target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                            <Glyph icon={Icon::Github} />
                        </a>
                        <a class="footer-link" href={props.linkedin_url.clone()} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                            <Glyph icon={Icon::Linkedin} />
                        </a>
                        <a class="footer-link" href={props.mailto.clone()} aria-label="Email">
                            <Glyph icon={Icon::Mail} />
                        </a>
                    </div>
                </div>
                <div class="footer-legal">
                    <p>{ format!("© {} {}. All rights reserved.", props.year, props.brand) }</p>
                </div>
            </div>
        </footer>
    }
}
