use std::borrow::Borrow;
use std::fmt::Display;

use derive_getters::{Dissolve, Getters};
use eyre::{Result, eyre};

use crate::num::PrimUInt;

use super::op::Op;

/// A run of identical alignment columns
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step<Len: PrimUInt = u32> {
    /// The alignment operation
    op: Op,
    /// The number of consequent columns with the same operation.
    /// Guaranteed to be greater than zero.
    len: Len,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(eyre!("Step length must be greater than zero"));
        }
        Ok(Self { op, len })
    }

    /// Appends a single column to the run-length encoded steps.
    pub fn push(steps: &mut Vec<Step<Len>>, op: Op) {
        match steps.last_mut() {
            Some(last) if last.op == op && last.len < Len::max_value() => {
                last.len = last.len + Len::one();
            }
            _ => steps.push(Step { op, len: Len::one() }),
        }
    }

    /// Run-length encodes a column-wise sequence of operations.
    pub fn from_ops(ops: impl IntoIterator<Item = Op>) -> Vec<Step<Len>> {
        let mut steps = Vec::new();
        for op in ops {
            Self::push(&mut steps, op);
        }
        steps
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        let hint = match steps.size_hint() {
            (_, Some(upper)) => upper * 3,
            (lower, _) => lower * 3,
        };

        let mut result = String::with_capacity(hint);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len.to_string());
            result.push(step.op.symbol());
        }
        result
    }

    /// Parses an RLE string such as `3=1X2v`.
    pub fn parse_rle(rle: &str) -> Result<Vec<Step<Len>>> {
        let mut steps = Vec::new();
        let mut len = String::new();
        for symbol in rle.chars() {
            if symbol.is_ascii_digit() {
                len.push(symbol);
                continue;
            }
            let op = Op::try_from(symbol)
                .map_err(|_| eyre!("Unknown alignment operation '{symbol}' in '{rle}'"))?;
            let parsed = Len::from_str_radix(&len, 10)
                .map_err(|_| eyre!("Invalid step length '{len}' in '{rle}'"))?;
            steps.push(Step::new(op, parsed)?);
            len.clear();
        }
        if !len.is_empty() {
            return Err(eyre!("Dangling step length '{len}' in '{rle}'"));
        }
        Ok(steps)
    }
}
