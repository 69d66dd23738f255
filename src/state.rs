// The two click-driven flags. Each is owned by its own section.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenuState {
    pub is_open: bool,
}

impl NavMenuState {
    pub fn toggled(self) -> Self {
        Self { is_open: !self.is_open }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DemoPlayback {
    #[default]
    Idle,
    Playing,
}

impl DemoPlayback {
    /// Same control drives both directions; there is no terminal state.
    pub fn toggled(self) -> Self {
        match self {
            DemoPlayback::Idle => DemoPlayback::Playing,
            DemoPlayback::Playing => DemoPlayback::Idle,
        }
    }

    pub fn is_playing(self) -> bool {
        self == DemoPlayback::Playing
    }

    pub fn caption(self) -> &'static str {
        match self {
            DemoPlayback::Idle => "Click to start demo",
            DemoPlayback::Playing => "Recording...",
        }
    }

    /// Lines of a panel visible in this state, in order.
    pub fn visible_lines<'a, T>(self, lines: &'a [T], is_extra: impl Fn(&T) -> bool) -> Vec<&'a T> {
        lines
            .iter()
            .filter(|l| self.is_playing() || !is_extra(*l))
            .collect()
    }
}
