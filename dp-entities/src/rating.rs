use std::fmt;

/// Personal rating of a visited place in stars.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct StarRating(f32);

impl StarRating {
    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn new(stars: f32) -> Self {
        let new = Self(stars);
        debug_assert!(new.is_valid());
        new
    }

    pub fn try_new(stars: f32) -> Option<Self> {
        let new = Self(stars);
        new.is_valid().then_some(new)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    pub fn is_unrated(self) -> bool {
        self == Self::min()
    }

    pub const fn stars(self) -> f32 {
        self.0
    }
}

impl From<StarRating> for f32 {
    fn from(from: StarRating) -> Self {
        from.0
    }
}

impl From<StarRating> for f64 {
    fn from(from: StarRating) -> Self {
        f64::from(from.0)
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1}/5", self.0)
    }
}
