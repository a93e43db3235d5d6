use crate::num::PrimUInt;

/// `Op` represents a single column of a pairwise alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// A gap symbol in the first sequence, consumes one symbol of the second sequence (v)
    GapFirst,
    /// A gap symbol in the second sequence, consumes one symbol of the first sequence (^)
    GapSecond,
    /// Identical symbols in both sequences (=)
    Match,
    /// Different symbols in both sequences (X)
    Mismatch,
}

impl Op {
    /// Returns the RLE symbol of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }

    /// Returns the same column seen from the other sequence's point of view.
    pub fn swapped(&self) -> Self {
        match self {
            Op::GapFirst => Op::GapSecond,
            Op::GapSecond => Op::GapFirst,
            x => *x,
        }
    }

    /// Advances the sequence positions by `len` columns of this operation.
    pub fn apply<Len, Seq1Idx, Seq2Idx>(&self, seq1: &mut Seq1Idx, seq2: &mut Seq2Idx, len: Len)
    where
        Len: PrimUInt + Into<Seq1Idx> + Into<Seq2Idx>,
        Seq1Idx: PrimUInt,
        Seq2Idx: PrimUInt,
    {
        match self {
            Op::GapFirst => *seq2 = *seq2 + len.into(),
            Op::GapSecond => *seq1 = *seq1 + len.into(),
            Op::Match | Op::Mismatch => {
                *seq1 = *seq1 + len.into();
                *seq2 = *seq2 + len.into();
            }
        };
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    /// Parses an RLE symbol.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'v' => Ok(Op::GapFirst),
            '^' => Ok(Op::GapSecond),
            '=' => Ok(Op::Match),
            'X' => Ok(Op::Mismatch),
            _ => Err(()),
        }
    }
}
