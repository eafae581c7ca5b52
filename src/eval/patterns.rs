//! Line pattern categories and their weights
//!
//! Every weight the scorer uses lives here. Weights grow with run length and
//! with end openness, and a five dwarfs everything else.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    // Winning pattern
    /// Five in a row - immediate win.
    /// Large enough that even a minimally weighted block of an opponent five
    /// outranks any non-blocking candidate (see `test_block_five_dominates`).
    pub const FIVE: i64 = 10_000_000;

    // Strong attacking patterns
    /// Open four: _OOOO_
    pub const OPEN_FOUR: i64 = 100_000;
    /// Closed four: XOOOO_ or _OOOOX (one way to extend)
    pub const CLOSED_FOUR: i64 = 50_000;

    // Moderate threats
    /// Open three: _OOO_ (becomes open four if not blocked)
    pub const OPEN_THREE: i64 = 10_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i64 = 1_500;

    // Building patterns
    /// Open two: _OO_
    pub const OPEN_TWO: i64 = 1_000;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i64 = 200;
    /// Lone stone with both sides free
    pub const OPEN_ONE: i64 = 20;
    /// Lone stone against a wall or an opponent stone
    pub const CLOSED_ONE: i64 = 5;

    /// Both ends blocked and shorter than five: can never become a win
    pub const DEAD: i64 = 0;
}

/// How many ends of a run are free to extend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Openness {
    /// Both ends empty
    Open,
    /// Exactly one end empty
    Closed,
    /// Both ends blocked by the opponent or the board edge
    Dead,
}

impl Openness {
    pub fn from_ends(before_open: bool, after_open: bool) -> Self {
        match (before_open, after_open) {
            (true, true) => Openness::Open,
            (false, false) => Openness::Dead,
            _ => Openness::Closed,
        }
    }
}

/// Contiguous run of one player's stones along a single direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinePattern {
    /// Run length, capped at 5
    pub length: u8,
    pub openness: Openness,
}

impl LinePattern {
    pub fn new(length: u8, openness: Openness) -> Self {
        Self {
            length: length.min(5),
            openness,
        }
    }

    pub fn kind(self) -> PatternKind {
        use Openness::*;
        match (self.length, self.openness) {
            (5..=u8::MAX, _) => PatternKind::Five,
            (_, Dead) => PatternKind::Dead,
            (4, Open) => PatternKind::OpenFour,
            (4, Closed) => PatternKind::ClosedFour,
            (3, Open) => PatternKind::OpenThree,
            (3, Closed) => PatternKind::ClosedThree,
            (2, Open) => PatternKind::OpenTwo,
            (2, Closed) => PatternKind::ClosedTwo,
            (_, Open) => PatternKind::OpenOne,
            (_, Closed) => PatternKind::ClosedOne,
        }
    }

    #[inline]
    pub fn weight(self) -> i64 {
        self.kind().weight()
    }
}

/// Pattern category, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatternKind {
    Dead,
    ClosedOne,
    OpenOne,
    ClosedTwo,
    OpenTwo,
    ClosedThree,
    OpenThree,
    ClosedFour,
    OpenFour,
    Five,
}

impl PatternKind {
    /// All categories, weakest first
    pub const ALL: [PatternKind; 10] = [
        PatternKind::Dead,
        PatternKind::ClosedOne,
        PatternKind::OpenOne,
        PatternKind::ClosedTwo,
        PatternKind::OpenTwo,
        PatternKind::ClosedThree,
        PatternKind::OpenThree,
        PatternKind::ClosedFour,
        PatternKind::OpenFour,
        PatternKind::Five,
    ];

    pub const fn weight(self) -> i64 {
        match self {
            PatternKind::Five => PatternScore::FIVE,
            PatternKind::OpenFour => PatternScore::OPEN_FOUR,
            PatternKind::ClosedFour => PatternScore::CLOSED_FOUR,
            PatternKind::OpenThree => PatternScore::OPEN_THREE,
            PatternKind::ClosedThree => PatternScore::CLOSED_THREE,
            PatternKind::OpenTwo => PatternScore::OPEN_TWO,
            PatternKind::ClosedTwo => PatternScore::CLOSED_TWO,
            PatternKind::OpenOne => PatternScore::OPEN_ONE,
            PatternKind::ClosedOne => PatternScore::CLOSED_ONE,
            PatternKind::Dead => PatternScore::DEAD,
        }
    }
}
