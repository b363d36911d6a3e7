use super::domain::EnglishTest;

const TOEFL_OFFSET: f64 = 31.0;
const TOEFL_DIVISOR: f64 = 10.0;

/// Convert a raw test score onto the IELTS band scale.
///
/// TOEFL uses a linear approximation rounded to one decimal place. Nothing is clamped,
/// and non-finite scores come back unchanged so comparisons downstream simply fail.
pub fn ielts_equivalent(score: f64, test: EnglishTest) -> f64 {
    match test {
        EnglishTest::Ielts => score,
        EnglishTest::Toefl => round_to_tenth((score - TOEFL_OFFSET) / TOEFL_DIVISOR),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
