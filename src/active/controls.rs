use bitflags::bitflags;
use twilight_http::request::channel::reaction::RequestReactionType;
use twilight_model::channel::message::ReactionType;

/// A reaction button of a menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    First,
    Previous,
    Stop,
    Next,
    Last,
    Select,
    Jump,
}

impl Control {
    /// All controls in the order they are added to a message.
    pub const ALL: [Self; 7] = [
        Self::First,
        Self::Previous,
        Self::Stop,
        Self::Next,
        Self::Last,
        Self::Select,
        Self::Jump,
    ];

    pub fn emoji(self) -> &'static str {
        match self {
            Self::First => "⏮️",
            Self::Previous => "◀",
            Self::Stop => "❌",
            Self::Next => "▶",
            Self::Last => "⏭️",
            Self::Select => "✅",
            Self::Jump => "🔍",
        }
    }

    /// Variation selectors are ignored since discord does not consistently
    /// include them.
    pub fn from_emoji(emoji: &str) -> Option<Self> {
        let emoji = emoji.trim_end_matches('\u{fe0f}');

        Self::ALL
            .into_iter()
            .find(|control| control.emoji().trim_end_matches('\u{fe0f}') == emoji)
    }

    pub fn from_reaction(reaction: &ReactionType) -> Option<Self> {
        match reaction {
            ReactionType::Unicode { name } => Self::from_emoji(name),
            _ => None,
        }
    }

    pub fn request_reaction_type(self) -> RequestReactionType<'static> {
        RequestReactionType::Unicode { name: self.emoji() }
    }

    pub fn flag(self) -> Controls {
        match self {
            Self::First => Controls::FIRST,
            Self::Previous => Controls::PREVIOUS,
            Self::Stop => Controls::STOP,
            Self::Next => Controls::NEXT,
            Self::Last => Controls::LAST,
            Self::Select => Controls::SELECT,
            Self::Jump => Controls::JUMP,
        }
    }
}

bitflags! {
    /// Set of controls that are shown on a menu.
    pub struct Controls: u8 {
        const FIRST = 1 << 0;
        const PREVIOUS = 1 << 1;
        const STOP = 1 << 2;
        const NEXT = 1 << 3;
        const LAST = 1 << 4;
        const SELECT = 1 << 5;
        const JUMP = 1 << 6;

        const SINGLE_STEP = Self::PREVIOUS.bits | Self::NEXT.bits;
        const JUMP_ENDS = Self::FIRST.bits | Self::LAST.bits;
        const SKIP = Self::SINGLE_STEP.bits | Self::JUMP_ENDS.bits;
    }
}

impl Controls {
    pub fn shows(self, control: Control) -> bool {
        self.contains(control.flag())
    }

    /// The contained controls in reaction order.
    pub fn iter(self) -> impl Iterator<Item = Control> {
        Control::ALL
            .into_iter()
            .filter(move |control| self.shows(*control))
    }
}

/// Which page-skipping controls make sense for the given amount of pages.
///
/// An unknown amount hides all of them.
pub fn visible_controls(total_pages: Option<usize>) -> Controls {
    let Some(total_pages) = total_pages else {
        return Controls::empty();
    };

    let mut controls = Controls::SKIP;

    if total_pages <= 1 {
        controls.remove(Controls::SINGLE_STEP);
    }

    if total_pages <= 2 {
        controls.remove(Controls::JUMP_ENDS);
    }

    controls
}
