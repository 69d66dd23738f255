use yew::prelude::*;

use crate::icons::{Glyph, Icon};
use crate::sections::backdrop::WaveformBackdrop;

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub particle_count: usize,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    html! {
        <section class="hero">
            <div class="hero-gradient">
                <div class="hero-gradient-pulse"></div>
            </div>

            <WaveformBackdrop particle_count={props.particle_count} />

            <div class="hero-content">
                <h1 class="hero-title fade-up">
                    { "From Speech to " }
                    <span class="gradient-text">{ "Insight" }</span>
                    { " — Instantly" }
                </h1>

                <p class="hero-subtitle fade-up delay-1">
                    { "Identify speakers, detect languages, transcribe & translate in seconds, even in noisy, multilingual audio." }
                </p>

                <div class="hero-actions fade-up delay-2">
                    <a class="btn btn-primary" href="#demo">{ "Try the Demo" }</a>
                    <button class="btn btn-outline" type="button">
                        <Glyph icon={Icon::Upload} size={20} />
                        { "Upload Audio" }
                    </button>
                </div>
            </div>

            <div class="scroll-indicator">
                <div class="scroll-indicator-dot"></div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn renders_copy_and_canvas_slot() {
        let html = ServerRenderer::<HeroSection>::with_props(|| HeroSectionProps {
            particle_count: 2000,
        })
        .render()
        .await;

        assert!(html.contains("Insight"));
        assert!(html.contains("Try the Demo"));
        assert!(html.contains("Upload Audio"));
        assert!(html.contains("<canvas"));
    }
}
