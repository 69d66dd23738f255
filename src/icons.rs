// Inline line-art glyphs (24x24 viewBox, stroked), so the page needs no icon font.

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Upload,
    Cpu,
    MessageSquare,
    Mic,
    Globe,
    Shield,
    Zap,
    Users,
    Play,
    Github,
    Linkedin,
    Mail,
    Menu,
    Close,
}

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Upload => &[
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
                "m17 8-5-5-5 5",
                "M12 3v12",
            ],
            Icon::Cpu => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M9 9h6v6H9z",
                "M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2",
            ],
            Icon::MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            Icon::Mic => &[
                "M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3Z",
                "M19 10v2a7 7 0 0 1-14 0v-2",
                "M12 19v3",
            ],
            Icon::Globe => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 1 1 20 0z",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Icon::Shield => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            ],
            Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0 4 4 0 1 1 8 0z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Icon::Play => &["M6 3l14 9-14 9V3z"],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M6 4a2 2 0 1 1-4 0 2 2 0 1 1 4 0z",
            ],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Icon::Upload => "upload",
            Icon::Cpu => "cpu",
            Icon::MessageSquare => "message",
            Icon::Mic => "microphone",
            Icon::Globe => "globe",
            Icon::Shield => "shield",
            Icon::Zap => "zap",
            Icon::Users => "users",
            Icon::Play => "play",
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Mail => "mail",
            Icon::Menu => "menu",
            Icon::Close => "close",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GlyphProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Glyph)]
pub fn glyph(props: &GlyphProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class={classes!("glyph", format!("glyph-{}", props.icon.label()), props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
