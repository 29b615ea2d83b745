#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Strand of an edge: the sequence as written, or its reverse
/// complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum Orientation {
    Forward,
    Backward,
}

impl Orientation {
    /// Parse an orientation from a single-element, where + is
    /// Forward, - is Backward
    #[inline]
    pub fn from_bytes_plus_minus<T: AsRef<[u8]>>(bs: T) -> Option<Self> {
        match bs.as_ref() {
            b"+" => Some(Orientation::Forward),
            b"-" => Some(Orientation::Backward),
            _ => None,
        }
    }

    /// Orientation of a signed contig number; zero counts as forward.
    #[inline]
    pub fn from_sign(number: i64) -> Self {
        if number < 0 {
            Orientation::Backward
        } else {
            Orientation::Forward
        }
    }

    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    #[inline]
    pub fn is_reverse(&self) -> bool {
        matches!(self, Self::Backward)
    }

    #[inline]
    pub fn plus_minus_as_byte(&self) -> u8 {
        match self {
            Self::Forward => b'+',
            Self::Backward => b'-',
        }
    }
}

/// Default orientation is forward
impl Default for Orientation {
    #[inline]
    fn default() -> Orientation {
        Orientation::Forward
    }
}

impl std::str::FromStr for Orientation {
    type Err = &'static str;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::from_bytes_plus_minus(s.as_bytes())
            .ok_or("Could not parse orientation (was not + or -)")
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(self.plus_minus_as_byte()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_is_involution() {
        use Orientation::*;
        assert_eq!(Forward.flip(), Backward);
        assert_eq!(Backward.flip().flip(), Backward);
    }

    #[test]
    fn sign_and_symbols() {
        assert_eq!(Orientation::from_sign(-4), Orientation::Backward);
        assert_eq!(Orientation::from_sign(4), Orientation::Forward);
        assert_eq!("-".parse::<Orientation>(), Ok(Orientation::Backward));
        assert!("x".parse::<Orientation>().is_err());
        assert_eq!(format!("{}", Orientation::Forward), "+");
    }
}
