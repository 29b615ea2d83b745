use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use super::Orientation;

/// Internal identifier of one strand of an assembler contig.
///
/// The forward and reverse-complement strands of contig `n` are two
/// distinct ids sharing the same `number`; `matching` maps one to the
/// other without a lookup. Displayed as `e<n>` for the forward strand
/// and `rc<n>` for the reverse complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct EdgeId {
    number: u64,
    orient: Orientation,
}

impl EdgeId {
    /// `None` for numbers outside the signed range that `decode`
    /// maps back to.
    #[inline]
    pub fn new(number: u64, orient: Orientation) -> Option<Self> {
        if number > i64::MAX as u64 {
            return None;
        }
        Some(EdgeId { number, orient })
    }

    /// Encode an assembler-native signed contig number; negative
    /// numbers denote the reverse-complement strand.
    #[inline]
    pub fn encode(signed: i64) -> Self {
        EdgeId {
            number: signed.unsigned_abs(),
            orient: Orientation::from_sign(signed),
        }
    }

    /// Inverse of `encode`. The reverse strand of contig 0 decodes to
    /// 0, so only that one id does not round-trip.
    #[inline]
    pub fn decode(&self) -> i64 {
        // numbers never exceed 2^63, which only `encode(i64::MIN)` reaches
        let n = self.number as i64;
        if self.orient.is_reverse() {
            n.wrapping_neg()
        } else {
            n
        }
    }

    /// The id of the opposite strand of the same contig.
    #[inline]
    pub fn matching(&self) -> Self {
        EdgeId {
            number: self.number,
            orient: self.orient.flip(),
        }
    }

    /// The signed label of this strand, `-` prefixed when reversed.
    pub fn label(&self) -> String {
        if self.orient.is_reverse() {
            format!("-{}", self.number)
        } else {
            self.number.to_string()
        }
    }

    #[inline]
    pub fn number(&self) -> u64 {
        self.number
    }

    #[inline]
    pub fn orient(&self) -> Orientation {
        self.orient
    }

    #[inline]
    pub fn is_reverse(&self) -> bool {
        self.orient.is_reverse()
    }

    /// Resolve an assembler label to the id of the given strand.
    pub fn from_label(label: &str, orient: Orientation) -> Option<Self> {
        let id = Self::encode(contig_number(label)?);
        if orient.is_reverse() {
            Some(id.matching())
        } else {
            Some(id)
        }
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.orient {
            Orientation::Forward => write!(f, "e{}", self.number),
            Orientation::Backward => write!(f, "rc{}", self.number),
        }
    }
}

impl std::str::FromStr for EdgeId {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (orient, digits) = if let Some(rest) = s.strip_prefix("rc") {
            (Orientation::Backward, rest)
        } else if let Some(rest) = s.strip_prefix('e') {
            (Orientation::Forward, rest)
        } else {
            return Err("Edge id must start with 'e' or 'rc'");
        };
        digits
            .parse()
            .ok()
            .and_then(|number| EdgeId::new(number, orient))
            .ok_or("Edge id number is invalid")
    }
}

/// Extract the signed contig number from an assembler label such as
/// `12`, `-12`, `edge_12`, `tig00000012` or `utg000012l`: the first
/// run of digits, negated if the label starts with `-`.
pub fn contig_number(label: &str) -> Option<i64> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^(-)?\D*?(\d+)").unwrap();
    }
    let caps = RE.captures(label.trim())?;
    let number: i64 = caps.get(2)?.as_str().parse().ok()?;
    if caps.get(1).is_some() {
        Some(-number)
    } else {
        Some(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        for n in [-1000i64, -17, -1, 1, 2, 42, 123_456_789].iter() {
            let id = EdgeId::encode(*n);
            assert_eq!(id.decode(), *n);
            assert_eq!(id.matching().matching(), id);
            assert_ne!(id.matching(), id);
            assert_eq!(id.matching().decode(), -n);
        }
    }

    #[test]
    fn strands_never_collide() {
        let fwd = EdgeId::encode(0);
        assert_ne!(fwd, fwd.matching());
        assert_eq!(fwd.matching().number(), 0);
        assert_eq!(fwd.matching().label(), "-0");
    }

    #[test]
    fn numbers_stay_in_signed_range() {
        assert!(EdgeId::new(u64::MAX, Orientation::Forward).is_none());
        let max = EdgeId::new(i64::MAX as u64, Orientation::Backward).unwrap();
        assert_eq!(max.decode(), -i64::MAX);
        assert_eq!(EdgeId::encode(i64::MIN).decode(), i64::MIN);
        assert!("e18446744073709551615".parse::<EdgeId>().is_err());
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(EdgeId::encode(7).to_string(), "e7");
        assert_eq!(EdgeId::encode(-7).to_string(), "rc7");
        assert_eq!("rc7".parse::<EdgeId>(), Ok(EdgeId::encode(-7)));
        assert_eq!("e7".parse::<EdgeId>(), Ok(EdgeId::encode(7)));
        assert!("x7".parse::<EdgeId>().is_err());
        assert!("e".parse::<EdgeId>().is_err());
    }

    #[test]
    fn contig_numbers_from_labels() {
        assert_eq!(contig_number("12"), Some(12));
        assert_eq!(contig_number("-12"), Some(-12));
        assert_eq!(contig_number("edge_12"), Some(12));
        assert_eq!(contig_number("tig00000012"), Some(12));
        assert_eq!(contig_number("utg000012l"), Some(12));
        assert_eq!(contig_number("NODE_3_length_99_cov_4.5"), Some(3));
        assert_eq!(contig_number("unnamed"), None);
    }

    #[test]
    fn labels_with_strand() {
        let id = EdgeId::from_label("5", Orientation::Backward).unwrap();
        assert_eq!(id, EdgeId::encode(-5));
        let id = EdgeId::from_label("-5", Orientation::Backward).unwrap();
        assert_eq!(id, EdgeId::encode(5));
    }
}
