use yew::prelude::*;

use crate::content::{TeamMember, TEAM};
use crate::reveal::{settle_ms_for, stagger_style, use_reveal_once, RevealPhase};
use crate::sections::common::SectionHeader;

const STAGGER_SECS: f64 = 0.2;
const PORTRAIT_PX: u32 = 200;

#[derive(Properties, PartialEq)]
pub struct TeamCardProps {
    pub member: TeamMember,
    pub index: usize,
    pub phase: RevealPhase,
}

#[function_component(TeamCard)]
pub fn team_card(props: &TeamCardProps) -> Html {
    let m = &props.member;
    html! {
        <div
            class={classes!("reveal-card", "lift-lg", props.phase.class())}
            style={stagger_style(props.index, STAGGER_SECS)}
        >
            <div class="card team-card">
                <div class="portrait">
                    <img
                        class="portrait-img"
                        src={m.portrait_src()}
                        alt={m.name}
                        width={PORTRAIT_PX.to_string()}
                        height={PORTRAIT_PX.to_string()}
                    />
                    <div class="portrait-glow"></div>
                </div>
                <h3 class="card-title">{ m.name }</h3>
                <p class="member-role">{ m.role }</p>
                <p class="card-text small">{ m.bio }</p>
            </div>
        </div>
    }
}

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    let sentinel = use_node_ref();
    let phase = use_reveal_once(sentinel.clone(), settle_ms_for(TEAM.len(), STAGGER_SECS));

    html! {
        <section id="team" class="section">
            <div class="container">
                <SectionHeader
                    sentinel={sentinel}
                    phase={phase}
                    title="Meet Our Team"
                    subtitle="World-class experts in AI, speech recognition, and natural language processing"
                />
                <div class="grid grid-3">
                    { for TEAM.iter().enumerate().map(|(index, member)| html! {
                        <TeamCard key={index} member={member.clone()} index={index} phase={phase} />
                    })}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PLACEHOLDER_PORTRAIT;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn three_profiles_with_verbatim_copy() {
        let html = ServerRenderer::<TeamSection>::new().render().await;

        assert_eq!(html.matches("card team-card").count(), 3);
        assert!(html.contains("id=\"team\""));
        for m in TEAM {
            assert!(html.contains(m.name), "{}", m.name);
            assert!(html.contains(m.bio), "{}", m.bio);
            assert!(html.contains(&format!("src=\"{}\"", m.image.unwrap_or_default())));
        }
        assert!(!html.contains(PLACEHOLDER_PORTRAIT));
    }

    #[tokio::test]
    async fn missing_portrait_uses_placeholder() {
        let html = ServerRenderer::<TeamCard>::with_props(|| TeamCardProps {
            member: TeamMember {
                name: "Nobody Yet",
                role: "Open Role",
                bio: "We are hiring",
                image: None,
            },
            index: 0,
            phase: RevealPhase::Hidden,
        })
        .render()
        .await;

        assert!(html.contains(&format!("src=\"{PLACEHOLDER_PORTRAIT}\"")));
        assert!(html.contains("alt=\"Nobody Yet\""));
    }

    #[tokio::test]
    async fn blank_portrait_uses_placeholder() {
        let html = ServerRenderer::<TeamCard>::with_props(|| TeamCardProps {
            member: TeamMember { image: Some(""), ..TEAM[1].clone() },
            index: 1,
            phase: RevealPhase::Revealing,
        })
        .render()
        .await;

        assert!(html.contains(&format!("src=\"{PLACEHOLDER_PORTRAIT}\"")));
        assert!(!html.contains("src=\"\""));
    }
}
