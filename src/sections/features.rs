use yew::prelude::*;

use crate::content::{Feature, FEATURES};
use crate::icons::Glyph;
use crate::reveal::{settle_ms_for, stagger_style, use_reveal_once, RevealPhase};
use crate::sections::common::SectionHeader;

const STAGGER_SECS: f64 = 0.1;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
    pub index: usize,
    pub phase: RevealPhase,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let f = &props.feature;
    html! {
        <div
            class={classes!("reveal-card", "lift-sm", props.phase.class())}
            style={stagger_style(props.index, STAGGER_SECS)}
        >
            <div class="card feature-card">
                <div class="icon-badge square">
                    <Glyph icon={f.icon} />
                </div>
                <h3 class="card-title">{ f.title }</h3>
                <p class="card-text">{ f.description }</p>
            </div>
        </div>
    }
}

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    let sentinel = use_node_ref();
    let phase = use_reveal_once(sentinel.clone(), settle_ms_for(FEATURES.len(), STAGGER_SECS));

    html! {
        <section id="features" class="section section-tinted-light">
            <div class="container">
                <SectionHeader
                    sentinel={sentinel}
                    phase={phase}
                    title="Powerful Features"
                    subtitle="Everything you need for comprehensive audio analysis"
                />
                <div class="grid grid-2-3">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <FeatureCard key={index} feature={*feature} index={index} phase={phase} />
                    })}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn six_cards_with_verbatim_copy() {
        let html = ServerRenderer::<FeaturesSection>::new().render().await;

        assert_eq!(html.matches("card feature-card").count(), 6);
        assert!(html.contains("id=\"features\""));
        for f in FEATURES {
            assert!(html.contains(f.title), "{}", f.title);
            assert!(html.contains(f.description), "{}", f.description);
        }
    }

    #[tokio::test]
    async fn stagger_steps_by_a_tenth() {
        let html = ServerRenderer::<FeatureCard>::with_props(|| FeatureCardProps {
            feature: FEATURES[5],
            index: 5,
            phase: RevealPhase::Revealed,
        })
        .render()
        .await;

        assert!(html.contains("transition-delay: 0.5s;"));
        assert!(html.contains("is-revealed"));
        assert!(html.contains("AI-Powered"));
    }
}
