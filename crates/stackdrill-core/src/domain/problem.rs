//! Problem synthesis
//!
//! This module provides the problem model and the random synthesis rules.
//! The random source is always passed in so a fixed seed reproduces the
//! same sequence of problems.

use crate::constants::{
    MAX_OPERANDS, MIN_OPERANDS, MULTI_OPERAND_RANGE, SUBTRACTION_BUMP_RANGE,
    TWO_OPERAND_FIRST_RANGE, TWO_OPERAND_SECOND_RANGE,
};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Requested kind of problems
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Addition only
    Add,
    /// Subtraction for two-operand problems
    Subtract,
    /// Coin flip between addition and subtraction for two-operand problems
    Mixed,
}

impl FromStr for Operation {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plus" | "add" => Ok(Self::Add),
            "minus" | "subtract" => Ok(Self::Subtract),
            "mix" | "mixed" => Ok(Self::Mixed),
            other => Err(ProblemError::UnknownOperation(other.to_string())),
        }
    }
}

/// Binary operator between operands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
}

impl Operator {
    /// Sign character used in markup
    pub fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }

    /// Parse a sign character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            _ => None,
        }
    }
}

/// Problem errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemError {
    #[error("Unknown operation '{0}' (expected plus, minus or mix)")]
    UnknownOperation(String),
    #[error("Operand count {0} is outside 2..=4")]
    OperandCountOutOfRange(usize),
}

/// One arithmetic stack problem
///
/// `operators.len() == operands.len() - 1`. The last operator is the one
/// shown next to the last operand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    operands: Vec<u32>,
    operators: Vec<Operator>,
}

impl Problem {
    /// Create a problem from operands and operators
    ///
    /// Returns `None` when the operand count is outside [2, 4] or the
    /// operator count does not match.
    pub fn new(operands: Vec<u32>, operators: Vec<Operator>) -> Option<Self> {
        let count = operands.len();
        if !(MIN_OPERANDS..=MAX_OPERANDS).contains(&count) || operators.len() != count - 1 {
            return None;
        }
        Some(Self {
            operands,
            operators,
        })
    }

    pub fn operands(&self) -> &[u32] {
        &self.operands
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// Operator printed in front of the last operand
    pub fn final_operator(&self) -> Operator {
        // operators is never empty, see Problem::new
        self.operators
            .last()
            .copied()
            .unwrap_or(Operator::Plus)
    }

    /// Evaluate left to right
    pub fn answer(&self) -> i64 {
        let mut total = self.operands[0] as i64;
        for (operand, op) in self.operands[1..].iter().zip(&self.operators) {
            match op {
                Operator::Plus => total += *operand as i64,
                Operator::Minus => total -= *operand as i64,
            }
        }
        total
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operands[0])?;
        for (operand, op) in self.operands[1..].iter().zip(&self.operators) {
            write!(f, " {} {}", op.as_char(), operand)?;
        }
        Ok(())
    }
}

/// Synthesize one problem
///
/// Draws the operand count uniformly from `[2, max_operands]`.
///
/// Two operands: the first from 10..=999, the second from 1..=99. For
/// subtraction, a first operand not larger than the second is replaced by
/// `second + 10..=50` and the old first becomes the subtrahend, so the
/// minuend always ends up strictly larger.
///
/// Three or four operands: each from 1..=99, always added regardless of
/// `operation`.
pub fn synthesize<R: Rng + ?Sized>(
    rng: &mut R,
    operation: Operation,
    max_operands: usize,
) -> Result<Problem, ProblemError> {
    if !(MIN_OPERANDS..=MAX_OPERANDS).contains(&max_operands) {
        return Err(ProblemError::OperandCountOutOfRange(max_operands));
    }

    let count = rng.gen_range(MIN_OPERANDS..=max_operands);

    if count == 2 {
        let mut first = rng.gen_range(TWO_OPERAND_FIRST_RANGE);
        let mut second = rng.gen_range(TWO_OPERAND_SECOND_RANGE);

        let subtract = match operation {
            Operation::Subtract => true,
            Operation::Mixed => rng.gen_bool(0.5),
            Operation::Add => false,
        };

        let operator = if subtract {
            if first <= second {
                let bumped = second + rng.gen_range(SUBTRACTION_BUMP_RANGE);
                second = first;
                first = bumped;
            }
            Operator::Minus
        } else {
            Operator::Plus
        };

        return Ok(Problem {
            operands: vec![first, second],
            operators: vec![operator],
        });
    }

    let operands = (0..count)
        .map(|_| rng.gen_range(MULTI_OPERAND_RANGE))
        .collect();

    Ok(Problem {
        operands,
        operators: vec![Operator::Plus; count - 1],
    })
}

/// Clamp a requested stack height into the supported range
pub fn clamp_max_operands(requested: usize) -> usize {
    requested.clamp(MIN_OPERANDS, MAX_OPERANDS)
}

/// Clamp a signed, user-supplied stack height into the supported range
///
/// Zero and negative heights clamp to the minimum like any other
/// out-of-range value.
pub fn clamp_stack_height(requested: i64) -> usize {
    usize::try_from(requested).map_or(MIN_OPERANDS, clamp_max_operands)
}
