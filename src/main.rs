// src/main.rs — AudioAI landing page (Rust + Yew + WASM)
//
// One page, top to bottom: nav, hero (canvas point cloud), how it works,
// scripted demo, features, team, footer. No network, no storage.

mod config;
mod content;
mod icons;
mod particles;
mod reveal;
mod sections;
mod state;
mod surface;

use yew::prelude::*;

use crate::config::{load_site_config, SiteConfig};
use crate::sections::{
    demo::DemoSection, features::FeaturesSection, footer::Footer, hero::HeroSection,
    how_it_works::HowItWorksSection, navigation::Navigation, team::TeamSection,
};

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[function_component(App)]
fn app() -> Html {
    // Read once; the host page never changes it afterwards.
    let cfg = use_state(|| match load_site_config() {
        Ok(c) => c,
        Err(e) => {
            gloo::console::warn!(format!("site-config ignored: {e}"));
            SiteConfig::default()
        }
    });
    let year = use_state(current_year);

    html! {
        <div class="page">
            <Navigation brand={cfg.brand.clone()} />
            <HeroSection particle_count={cfg.particle_count} />
            <HowItWorksSection />
            <DemoSection />
            <FeaturesSection />
            <TeamSection />
            <Footer
                brand={cfg.brand.clone()}
                github_url={cfg.github_url.clone()}
                linkedin_url={cfg.linkedin_url.clone()}
                mailto={cfg.mailto()}
                year={*year}
            />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
