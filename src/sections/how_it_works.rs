use yew::prelude::*;

use crate::content::{Step, STEPS};
use crate::icons::Glyph;
use crate::reveal::{settle_ms_for, stagger_style, use_reveal_once, RevealPhase};
use crate::sections::common::SectionHeader;

const STAGGER_SECS: f64 = 0.2;

#[derive(Properties, PartialEq)]
pub struct StepCardProps {
    pub step: Step,
    pub index: usize,
    pub phase: RevealPhase,
}

#[function_component(StepCard)]
pub fn step_card(props: &StepCardProps) -> Html {
    let step = &props.step;
    html! {
        <div
            class={classes!("reveal-card", "lift-lg", props.phase.class())}
            style={stagger_style(props.index, STAGGER_SECS)}
        >
            <div class="card step-card">
                <div class="icon-badge round">
                    <Glyph icon={step.icon} size={32} />
                </div>
                <h3 class="card-title">{ step.title }</h3>
                <p class="card-text">{ step.description }</p>
            </div>
        </div>
    }
}

#[function_component(HowItWorksSection)]
pub fn how_it_works_section() -> Html {
    let sentinel = use_node_ref();
    let phase = use_reveal_once(sentinel.clone(), settle_ms_for(STEPS.len(), STAGGER_SECS));

    html! {
        <section id="how-it-works" class="section section-tinted">
            <div class="container">
                <SectionHeader
                    sentinel={sentinel}
                    phase={phase}
                    title="How It Works"
                    subtitle="Three simple steps to transform your audio into actionable insights"
                />
                <div class="grid grid-3">
                    { for STEPS.iter().enumerate().map(|(index, step)| html! {
                        <StepCard key={index} step={*step} index={index} phase={phase} />
                    })}
                </div>
            </div>
        </section>
    }
}
