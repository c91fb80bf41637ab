use super::types::{Grade, StudentInput, StudentResult};

/// Computes the full result for a single student.
///
/// Pure and infallible: empty `marks` is valid input and yields an average
/// of 0 (grade F). Calling this twice on identical input produces identical
/// output.
pub fn compute(input: StudentInput) -> StudentResult {
    let StudentInput { name, marks } = input;

    let average = if marks.is_empty() {
        0.0
    } else {
        marks.iter().map(|&m| i64::from(m)).sum::<i64>() as f64 / marks.len() as f64
    };

    // First strict maximum wins; an empty list leaves index 0, which is
    // reported as "Subject 1".
    let mut best_index = 0;
    let mut best = i32::MIN;
    for (i, &mark) in marks.iter().enumerate() {
        if mark > best {
            best = mark;
            best_index = i;
        }
    }

    let grade = Grade::from_average(average);

    StudentResult {
        name,
        average,
        grade,
        best_subject: format!("Subject {}", best_index + 1),
        remark: grade.remark().to_string(),
        marks,
    }
}
