//! Cosine similarity between word-frequency vectors.
//!
//! Vectors are indexed by the union of both vocabularies; a word missing from
//! one side contributes a zero component:
//!   cos(a, b) = Σ a_w × b_w / (‖a‖ × ‖b‖)

use std::collections::HashMap;

/// Cosine similarity of two frequency tables, in `[0, 1]`.
///
/// Returns 0.0 when either table is empty or all-zero.
pub fn cosine(a: &HashMap<String, usize>, b: &HashMap<String, usize>) -> f64 {
    // Only shared words contribute to the dot product.
    let dot: f64 = a
        .iter()
        .filter_map(|(word, &count)| b.get(word).map(|&other| count as f64 * other as f64))
        .sum();

    let norm_a = norm(a);
    let norm_b = norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn norm(v: &HashMap<String, usize>) -> f64 {
    v.values()
        .map(|&count| (count as f64) * (count as f64))
        .sum::<f64>()
        .sqrt()
}
