//! Named drawing routines

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Which shapes a sprite is made of.
///
/// Tags are parsed leniently: anything outside the known set becomes
/// [`Pattern::Blank`], which renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Pattern {
    /// Flat fill with the sprite color
    Solid,
    /// Sprite color with darker blade strokes
    Grass,
    /// Sprite color with darker speckles
    Soil,
    Seed,
    Sprout,
    Growing,
    WheatMature,
    CarrotMature,
    TomatoMature,
    /// Character figure in the sprite color
    Player,
    /// Unrecognized tag; the canvas stays transparent
    Blank,
}

impl Pattern {
    /// Every drawable pattern, in declaration order.
    pub const ALL: [Pattern; 10] = [
        Pattern::Solid,
        Pattern::Grass,
        Pattern::Soil,
        Pattern::Seed,
        Pattern::Sprout,
        Pattern::Growing,
        Pattern::WheatMature,
        Pattern::CarrotMature,
        Pattern::TomatoMature,
        Pattern::Player,
    ];

    pub fn parse(tag: &str) -> Self {
        match tag {
            "solid" => Pattern::Solid,
            "grass" => Pattern::Grass,
            "soil" => Pattern::Soil,
            "seed" => Pattern::Seed,
            "sprout" => Pattern::Sprout,
            "growing" => Pattern::Growing,
            "wheat_mature" => Pattern::WheatMature,
            "carrot_mature" => Pattern::CarrotMature,
            "tomato_mature" => Pattern::TomatoMature,
            "player" => Pattern::Player,
            _ => Pattern::Blank,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Pattern::Solid => "solid",
            Pattern::Grass => "grass",
            Pattern::Soil => "soil",
            Pattern::Seed => "seed",
            Pattern::Sprout => "sprout",
            Pattern::Growing => "growing",
            Pattern::WheatMature => "wheat_mature",
            Pattern::CarrotMature => "carrot_mature",
            Pattern::TomatoMature => "tomato_mature",
            Pattern::Player => "player",
            Pattern::Blank => "blank",
        }
    }
}

impl FromStr for Pattern {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Pattern::parse(s))
    }
}

impl From<String> for Pattern {
    fn from(tag: String) -> Self {
        Pattern::parse(&tag)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
