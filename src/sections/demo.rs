// Scripted demo. The button only flips Idle/Playing; the text is canned and
// there is no audio capture or transcription behind it.

use yew::prelude::*;

use crate::content::{TranscriptLine, TRANSCRIPT, TRANSLATION};
use crate::icons::{Glyph, Icon};
use crate::reveal::{settle_ms_for, use_reveal_once};
use crate::sections::common::SectionHeader;
use crate::state::DemoPlayback;

#[derive(Properties, PartialEq)]
pub struct TranscriptPanelProps {
    pub icon: Icon,
    pub heading: AttrValue,
    pub lines: &'static [TranscriptLine],
    pub playback: DemoPlayback,
}

#[function_component(TranscriptPanel)]
pub fn transcript_panel(props: &TranscriptPanelProps) -> Html {
    let visible = props.playback.visible_lines(props.lines, |l| l.extra);
    html! {
        <div class="demo-panel">
            <h3 class="demo-panel-heading">
                <Glyph icon={props.icon} size={20} />
                { props.heading.clone() }
            </h3>
            <div class="demo-feed">
                { for visible.into_iter().map(|l| html! {
                    <div class={classes!("demo-line", l.tone.class(), l.extra.then_some("fade-in"))}>
                        <span class="speaker">{ l.speaker }</span>
                        <span class="utterance">{ l.text }</span>
                    </div>
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DemoControlProps {
    pub playback: DemoPlayback,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(DemoControl)]
pub fn demo_control(props: &DemoControlProps) -> Html {
    let playing = props.playback.is_playing();
    html! {
        <div class="demo-control">
            <button
                class="demo-button"
                aria-pressed={ playing.to_string() }
                onclick={props.on_toggle.clone()}
            >
                if playing {
                    <Glyph icon={Icon::Mic} size={48} class={classes!("pulse")} />
                } else {
                    <Glyph icon={Icon::Play} size={48} class={classes!("play-offset")} />
                }
            </button>
            <p class="demo-caption">{ props.playback.caption() }</p>
        </div>
    }
}

#[function_component(DemoSection)]
pub fn demo_section() -> Html {
    let playback = use_state(DemoPlayback::default);
    let sentinel = use_node_ref();
    // Header and panel only; the panel waits 0.2s.
    let phase = use_reveal_once(sentinel.clone(), settle_ms_for(2, 0.2));

    let on_toggle = {
        let playback = playback.clone();
        Callback::from(move |_: MouseEvent| playback.set(playback.toggled()))
    };

    html! {
        <section id="demo" class="section">
            <div class="container">
                <SectionHeader
                    sentinel={sentinel}
                    phase={phase}
                    title="See It In Action"
                    subtitle="Experience the power of AI-driven audio analysis"
                />

                <div class={classes!("demo-stage", "reveal-scale", phase.class())}>
                    <div class="demo-grid">
                        <DemoControl playback={*playback} on_toggle={on_toggle} />
                        <TranscriptPanel
                            icon={Icon::MessageSquare}
                            heading="Live Transcript"
                            lines={TRANSCRIPT}
                            playback={*playback}
                        />
                        <TranscriptPanel
                            icon={Icon::Globe}
                            heading="Translation"
                            lines={TRANSLATION}
                            playback={*playback}
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
