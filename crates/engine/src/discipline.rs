use crate::EngineError;

/// The thirteen skill-test disciplines a player can be evaluated on.
///
/// Test records store the discipline as a free string; `from_name`
/// matches the canonical spelling exactly, while `FromStr` is the
/// lenient caller-facing parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discipline {
    ShotPower,
    ServeDistance,
    FigureEight,
    PassingGates,
    OneVOne,
    Juggling,
    SkillMoves,
    FiveTenFive,
    ReactionSprint,
    SingleLegHop,
    DoubleLegJumps,
    AnkleDorsiflexion,
    CorePlank,
}

impl Discipline {
    /// Canonical test name as stored on test records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShotPower => "Shot Power",
            Self::ServeDistance => "Serve Distance",
            Self::FigureEight => "Figure 8",
            Self::PassingGates => "Passing Gates",
            Self::OneVOne => "1v1",
            Self::Juggling => "Juggling",
            Self::SkillMoves => "Skill Moves",
            Self::FiveTenFive => "5-10-5 Agility",
            Self::ReactionSprint => "Reaction Sprint",
            Self::SingleLegHop => "Single Leg Hop",
            Self::DoubleLegJumps => "Double Leg Jumps",
            Self::AnkleDorsiflexion => "Ankle Dorsiflexion",
            Self::CorePlank => "Core Plank",
        }
    }

    /// Snake-case key used for this discipline's normalized inputs.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ShotPower => "shot_power",
            Self::ServeDistance => "serve_distance",
            Self::FigureEight => "figure8",
            Self::PassingGates => "passing_gates",
            Self::OneVOne => "one_v_one",
            Self::Juggling => "juggling",
            Self::SkillMoves => "skill_moves",
            Self::FiveTenFive => "five_ten_five",
            Self::ReactionSprint => "reaction_sprint",
            Self::SingleLegHop => "single_leg_hop",
            Self::DoubleLegJumps => "double_leg_jumps",
            Self::AnkleDorsiflexion => "ankle_dorsiflexion",
            Self::CorePlank => "core_plank",
        }
    }

    pub fn all() -> &'static [Discipline] {
        &[
            Self::ShotPower,
            Self::ServeDistance,
            Self::FigureEight,
            Self::PassingGates,
            Self::OneVOne,
            Self::Juggling,
            Self::SkillMoves,
            Self::FiveTenFive,
            Self::ReactionSprint,
            Self::SingleLegHop,
            Self::DoubleLegJumps,
            Self::AnkleDorsiflexion,
            Self::CorePlank,
        ]
    }

    /// Exact match against the canonical test name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|d| d.as_str() == name)
    }

    fn parse_str(s: &str) -> Result<Self, EngineError> {
        let normalized = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|d| {
                d.as_str().to_lowercase() == normalized || d.key() == normalized
            })
            .ok_or_else(|| EngineError::UnknownDiscipline(s.to_string()))
    }
}

impl TryFrom<&str> for Discipline {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for Discipline {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
