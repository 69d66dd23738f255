use yew::prelude::*;

use crate::reveal::RevealPhase;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    /// Observed for reveal-on-scroll; the cards below follow its phase.
    pub sentinel: NodeRef,
    pub phase: RevealPhase,
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div ref={props.sentinel.clone()} class={classes!("section-header", "reveal", props.phase.class())}>
            <h2 class="section-title">{ props.title.clone() }</h2>
            <p class="section-subtitle">{ props.subtitle.clone() }</p>
        </div>
    }
}
