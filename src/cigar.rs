//! Alignment operator strings attached to links, e.g. `47M` or
//! `10M5I2D`. Only the overlap they describe is kept.

use bytemuck::Contiguous;

use nom::{
    bytes::complete::take,
    character::complete::digit1,
    combinator::{map, map_opt, map_res},
    multi::many1,
    sequence::pair,
    IResult,
};

#[repr(u8)]
#[derive(Contiguous, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CIGAROp {
    M = 0,
    I = 1,
    D = 2,
    N = 3,
    S = 4,
    H = 5,
    P = 6,
    E = 7,
    X = 8,
}

impl CIGAROp {
    fn from_letter(byte: u8) -> Option<Self> {
        let op = match byte {
            b'M' => CIGAROp::M,
            b'I' => CIGAROp::I,
            b'D' => CIGAROp::D,
            b'N' => CIGAROp::N,
            b'S' => CIGAROp::S,
            b'H' => CIGAROp::H,
            b'P' => CIGAROp::P,
            b'=' => CIGAROp::E,
            b'X' => CIGAROp::X,
            _ => return None,
        };
        Some(op)
    }

    /// Match and insertion spans are shared by both sides of a link.
    #[inline]
    pub fn counts_as_overlap(&self) -> bool {
        matches!(self, CIGAROp::M | CIGAROp::I)
    }
}

/// An operator and its count, packed into a u32: the count in the
/// high 28 bits, the operator in the low 4.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CIGARPair(u32);

impl CIGARPair {
    /// `None` if the count does not fit in 28 bits.
    pub fn new(count: u32, op: CIGAROp) -> Option<Self> {
        if count < (1 << 28) {
            Some(CIGARPair((count << 4) | u32::from(op.into_integer())))
        } else {
            None
        }
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.0 >> 4
    }

    #[inline]
    pub fn op(&self) -> Option<CIGAROp> {
        CIGAROp::from_integer((self.0 & 0xF) as u8)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct CIGAR(pub Vec<CIGARPair>);

impl CIGAR {
    fn op_letter(input: &[u8]) -> IResult<&[u8], CIGAROp> {
        map_opt(take(1usize), |b: &[u8]| CIGAROp::from_letter(b[0]))(input)
    }

    fn count(input: &[u8]) -> IResult<&[u8], u32> {
        map_res(digit1, |digits: &[u8]| {
            std::str::from_utf8(digits)
                .ok()
                .and_then(|s| s.parse::<u32>().ok())
                .ok_or(())
        })(input)
    }

    /// Consumes as many (count, operator) pairs as possible; fails
    /// unless there is at least one.
    pub(crate) fn parser_bytestring(i: &[u8]) -> IResult<&[u8], Self> {
        map(
            many1(map_opt(pair(Self::count, Self::op_letter), |(n, op)| {
                CIGARPair::new(n, op)
            })),
            CIGAR,
        )(i)
    }

    /// Parse the leading well-formed part of an operator string.
    /// `None` for the `*` placeholder and other strings without a
    /// single pair.
    pub fn from_bytestring(i: &[u8]) -> Option<Self> {
        Self::parser_bytestring(i).ok().map(|(_, cg)| cg)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, CIGAROp)> + '_ {
        self.0
            .iter()
            .filter_map(|pair| pair.op().map(|op| (pair.count(), op)))
    }

    /// Sum of the match and insertion counts.
    pub fn overlap_len(&self) -> usize {
        self.iter()
            .filter(|(_, op)| op.counts_as_overlap())
            .map(|(count, _)| count as usize)
            .sum()
    }
}

/// Overlap length of a raw operator string, 0 if it does not parse.
pub fn overlap_len(input: &[u8]) -> usize {
    CIGAR::from_bytestring(input).map_or(0, |cg| cg.overlap_len())
}
