use rand::SeedableRng;
use rand::rngs::StdRng;
use stackdrill_core::constants::{MAX_OPERANDS, MIN_OPERANDS};
use stackdrill_core::{Operation, Operator, synthesize};

const SEED: u64 = 2024;
const SAMPLES: usize = 3000;

#[test]
fn test_operand_and_operator_counts() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for operation in [Operation::Add, Operation::Subtract, Operation::Mixed] {
        for max_operands in MIN_OPERANDS..=MAX_OPERANDS {
            for _ in 0..SAMPLES / 10 {
                let problem = synthesize(&mut rng, operation, max_operands).unwrap();
                let count = problem.operands().len();
                assert!((MIN_OPERANDS..=max_operands).contains(&count));
                assert_eq!(problem.operators().len(), count - 1);
            }
        }
    }
}

#[test]
fn test_two_operand_subtraction_minuend_not_smaller() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for operation in [Operation::Subtract, Operation::Mixed] {
        for _ in 0..SAMPLES {
            let problem = synthesize(&mut rng, operation, MAX_OPERANDS).unwrap();
            if problem.operands().len() == 2 && problem.final_operator() == Operator::Minus {
                assert!(problem.operands()[0] >= problem.operands()[1]);
            }
        }
    }
}

#[test]
fn test_subtract_mode_with_more_operands_adds() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut seen_multi = false;
    for _ in 0..SAMPLES {
        let problem = synthesize(&mut rng, Operation::Subtract, MAX_OPERANDS).unwrap();
        if problem.operands().len() > 2 {
            seen_multi = true;
            assert!(problem.operators().iter().all(|&op| op == Operator::Plus));
        }
    }
    assert!(seen_multi);
}

#[test]
fn test_every_operand_count_reachable() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut seen = [false; MAX_OPERANDS + 1];
    for _ in 0..SAMPLES {
        let problem = synthesize(&mut rng, Operation::Mixed, MAX_OPERANDS).unwrap();
        seen[problem.operands().len()] = true;
    }
    assert_eq!(&seen[MIN_OPERANDS..], &[true, true, true]);
}
