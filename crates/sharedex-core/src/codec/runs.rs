// crates/sharedex-core/src/codec/runs.rs
//
// Pair-only run-length stage. Two adjacent equal ids collapse into one
// `Pair`; a third repeat starts a new entry (no 3-way collapse).

use crate::catalog::CardId;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunEntry {
    /// One copy of the card at this position.
    Single(CardId),
    /// Two adjacent copies of the card.
    Pair(CardId),
}

impl RunEntry {
    #[inline]
    pub fn id(self) -> CardId {
        match self {
            RunEntry::Single(id) | RunEntry::Pair(id) => id,
        }
    }

    #[inline]
    pub fn is_pair(self) -> bool {
        matches!(self, RunEntry::Pair(_))
    }

    #[inline]
    pub fn copies(self) -> u32 {
        if self.is_pair() {
            2
        } else {
            1
        }
    }

    /// Signed form: positive for a single, negated id for a pair.
    pub fn to_signed(self) -> i64 {
        match self {
            RunEntry::Single(id) => id.0 as i64,
            RunEntry::Pair(id) => -(id.0 as i64),
        }
    }
}

pub fn collapse(ids: &[CardId]) -> Vec<RunEntry> {
    let mut out = Vec::with_capacity(ids.len());
    let Some((&first, rest)) = ids.split_first() else {
        return out;
    };

    let mut prev = first;
    let mut repeated = false;

    for &curr in rest {
        if curr == prev && !repeated {
            repeated = true;
        } else {
            out.push(emit(prev, repeated));
            prev = curr;
            repeated = false;
        }
    }
    out.push(emit(prev, repeated));
    out
}

pub fn expand(entries: &[RunEntry]) -> Vec<CardId> {
    let mut out = Vec::with_capacity(entries.len() * 2);
    for e in entries {
        match *e {
            RunEntry::Single(id) => out.push(id),
            RunEntry::Pair(id) => {
                out.push(id);
                out.push(id);
            }
        }
    }
    out
}

#[inline]
fn emit(id: CardId, repeated: bool) -> RunEntry {
    if repeated {
        RunEntry::Pair(id)
    } else {
        RunEntry::Single(id)
    }
}
