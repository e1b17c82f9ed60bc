use rand::SeedableRng;
use rand::rngs::StdRng;
use stackdrill_core::app::generator::GenerateOptions;
use stackdrill_core::{Operation, Operator, Problem, assemble, extract, generate_worksheet, serialize};

fn blocks(count: u32) -> Vec<stackdrill_core::SerializedBlock> {
    (0..count)
        .map(|i| {
            let problem = Problem::new(vec![100 + i, 1 + i], vec![Operator::Plus]).unwrap();
            serialize(&problem)
        })
        .collect()
}

#[test]
fn test_extract_assembled_document_returns_blocks_in_order() {
    let blocks = blocks(12);
    let document = assemble(&blocks, 5);

    let expected: Vec<String> = blocks
        .iter()
        .map(|b| b.array_environment().to_string())
        .collect();
    assert_eq!(extract(document.as_str()), expected);
}

#[test]
fn test_extract_generated_worksheet() {
    let mut rng = StdRng::seed_from_u64(5);
    let worksheet =
        generate_worksheet(&mut rng, &GenerateOptions::new(Operation::Mixed)).unwrap();

    let extracted = extract(worksheet.document.as_str());
    assert_eq!(extracted.len(), worksheet.problems.len());
    for (raw, problem) in extracted.iter().zip(&worksheet.problems) {
        assert_eq!(raw, serialize(problem).array_environment());
    }
}

#[test]
fn test_extract_skips_malformed_span() {
    let good = blocks(2);
    let malformed = "$ \\begin{array}{r}\n 10  \\\\\n +5  \\\\\n \\hline \n $";
    let text = format!(
        "\\begin{{document}}\n\\begin{{tabular}}{{*{{3}}{{c}}}}\n{} & {} & {}\n\\end{{tabular}}\n\\end{{document}}",
        good[0].as_str(),
        malformed,
        good[1].as_str()
    );

    assert_eq!(
        extract(&text),
        vec![
            good[0].array_environment().to_string(),
            good[1].array_environment().to_string()
        ]
    );
}

#[test]
fn test_extract_skips_stray_math() {
    let good = blocks(1);
    let text = format!("$x + y$ {} $\\frac{{1}}{{2}}$", good[0].as_str());
    assert_eq!(extract(&text), vec![good[0].array_environment().to_string()]);
}

#[test]
fn test_extract_nothing_found() {
    let document = assemble(&[], 5);
    assert!(extract(document.as_str()).is_empty());
}
