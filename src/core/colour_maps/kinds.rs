#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMapKinds {
    #[default]
    FireGradient,
    Greyscale,
}

impl ColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::FireGradient, Self::Greyscale];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FireGradient => "Fire gradient",
            Self::Greyscale => "Greyscale",
        }
    }
}
