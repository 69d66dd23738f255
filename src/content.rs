// Static page copy. Nothing here is fetched or mutated at runtime.

use crate::icons::Icon;

pub const PLACEHOLDER_PORTRAIT: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "How It Works", anchor: "how-it-works" },
    NavLink { label: "Demo", anchor: "demo" },
    NavLink { label: "Features", anchor: "features" },
    NavLink { label: "Team", anchor: "team" },
];

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        icon: Icon::Upload,
        title: "Upload Audio",
        description: "Drop your audio file or record directly in the browser. Supports all major formats.",
    },
    Step {
        icon: Icon::Cpu,
        title: "AI Processing",
        description: "Our advanced AI analyzes speech patterns, identifies speakers, and detects languages.",
    },
    Step {
        icon: Icon::MessageSquare,
        title: "Speaker-Aware Transcript & Translation",
        description: "Get accurate transcripts with speaker identification and real-time translation.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Globe,
        title: "Language-Agnostic",
        description: "Supports 100+ languages with automatic detection",
    },
    Feature {
        icon: Icon::Shield,
        title: "Noise Robust",
        description: "Advanced filtering handles background noise and poor audio quality",
    },
    Feature {
        icon: Icon::Zap,
        title: "Real-Time Ready",
        description: "Process audio streams in real-time with minimal latency",
    },
    Feature {
        icon: Icon::Users,
        title: "Speaker Identification",
        description: "Distinguish between multiple speakers automatically",
    },
    Feature {
        icon: Icon::MessageSquare,
        title: "Multilingual Translation",
        description: "Instant translation between any supported language pairs",
    },
    Feature {
        icon: Icon::Cpu,
        title: "AI-Powered",
        description: "State-of-the-art neural networks for maximum accuracy",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: Option<&'static str>,
}

impl TeamMember {
    /// Falls back to the placeholder when the image ref is absent or blank.
    pub fn portrait_src(&self) -> &'static str {
        match self.image {
            Some(src) if !src.trim().is_empty() => src,
            _ => PLACEHOLDER_PORTRAIT,
        }
    }
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Alex Chen",
        role: "CEO & Co-founder",
        bio: "Former Google AI researcher with 10+ years in speech recognition",
        image: Some("/professional-headshot-alex-chen.png"),
    },
    TeamMember {
        name: "Sarah Rodriguez",
        role: "CTO & Co-founder",
        bio: "Ex-OpenAI engineer specializing in multilingual NLP systems",
        image: Some("/sarah-rodriguez-headshot.png"),
    },
    TeamMember {
        name: "David Kim",
        role: "Head of AI",
        bio: "PhD in Machine Learning from Stanford, expert in audio processing",
        image: Some("/david-kim-headshot.png"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Purple,
    Green,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Blue => "tone-blue",
            Tone::Purple => "tone-purple",
            Tone::Green => "tone-green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranscriptLine {
    pub speaker: &'static str,
    pub text: &'static str,
    pub tone: Tone,
    /// Only shown while the demo is playing.
    pub extra: bool,
}

pub const TRANSCRIPT: &[TranscriptLine] = &[
    TranscriptLine { speaker: "Speaker 1:", text: "Hello, how are you today?", tone: Tone::Blue, extra: false },
    TranscriptLine { speaker: "Speaker 2:", text: "¡Hola! Estoy muy bien, gracias.", tone: Tone::Purple, extra: false },
    TranscriptLine { speaker: "Speaker 1:", text: "That's great to hear...", tone: Tone::Green, extra: true },
];

pub const TRANSLATION: &[TranscriptLine] = &[
    TranscriptLine { speaker: "Speaker 1 (EN):", text: "Hello, how are you today?", tone: Tone::Blue, extra: false },
    TranscriptLine { speaker: "Speaker 2 (ES→EN):", text: "Hello! I'm very well, thank you.", tone: Tone::Purple, extra: false },
    TranscriptLine { speaker: "Speaker 1 (EN):", text: "That's great to hear...", tone: Tone::Green, extra: true },
];
