//! Multi-point crossover between the two strands of a sexual organism.
//!
//! A gamete is built by drawing between 1 and `MAX_CROSSOVERS` distinct cut
//! points inside the shorter parent, then copying alternating segments from
//! each parent. Two complementary candidates are assembled and one of them
//! is returned at random.

use rand::seq::index;
use rand::Rng;

/// Upper bound (inclusive) on the number of crossover points per gamete.
pub const MAX_CROSSOVERS: usize = 5;

/// Draw the sorted crossover points for parents of lengths `len1` and `len2`.
///
/// Points are distinct and lie strictly inside `(0, min(len1, len2))`. The
/// count is drawn uniformly from `1..=MAX_CROSSOVERS` and clamped to the
/// number of interior positions available. Returns an empty list when the
/// shorter parent has fewer than two symbols.
pub fn crossover_points<R: Rng + ?Sized>(len1: usize, len2: usize, rng: &mut R) -> Vec<usize> {
    let k = rng.random_range(1..=MAX_CROSSOVERS);
    let min_len = len1.min(len2);
    if min_len < 2 {
        return Vec::new();
    }

    let interior = min_len - 1;
    let mut points: Vec<usize> = index::sample(rng, interior, k.min(interior))
        .into_iter()
        .map(|i| i + 1)
        .collect();
    points.sort_unstable();
    points
}

/// Recombine two parent sequences into a single gamete.
///
/// When the shorter parent has fewer than two symbols there is nowhere to
/// cut, and one parent is copied whole (50/50).
pub fn recombine<R: Rng + ?Sized>(seq1: &[char], seq2: &[char], rng: &mut R) -> Vec<char> {
    let points = crossover_points(seq1.len(), seq2.len(), rng);
    if points.is_empty() {
        return if rng.random_bool(0.5) {
            seq1.to_vec()
        } else {
            seq2.to_vec()
        };
    }

    let (gamete1, gamete2) = crossover_at(seq1, seq2, &points);
    if rng.random_bool(0.5) {
        gamete1
    } else {
        gamete2
    }
}

/// Build both complementary crossover products for the given cut points.
///
/// Segment boundaries are `[0, points.., max(len1, len2)]`. Segments alternate
/// between the parents starting with `seq1` for the first product, and each
/// segment is clipped to the length of the parent it is copied from.
pub fn crossover_at(seq1: &[char], seq2: &[char], points: &[usize]) -> (Vec<char>, Vec<char>) {
    let end = seq1.len().max(seq2.len());
    let mut boundaries = Vec::with_capacity(points.len() + 2);
    boundaries.push(0);
    boundaries.extend_from_slice(points);
    boundaries.push(end);

    let mut gamete1 = Vec::with_capacity(seq1.len());
    let mut gamete2 = Vec::with_capacity(seq2.len());
    let mut use_first = true;

    for window in boundaries.windows(2) {
        let (start, stop) = (window[0], window[1]);
        let (a, b) = if use_first { (seq1, seq2) } else { (seq2, seq1) };
        gamete1.extend_from_slice(clip(a, start, stop));
        gamete2.extend_from_slice(clip(b, start, stop));
        use_first = !use_first;
    }

    (gamete1, gamete2)
}

#[inline]
fn clip(seq: &[char], start: usize, stop: usize) -> &[char] {
    let stop = stop.min(seq.len());
    let start = start.min(stop);
    &seq[start..stop]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn seq(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn text(v: &[char]) -> String {
        v.iter().collect()
    }

    #[test]
    fn test_crossover_points_bounds() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        for _ in 0..200 {
            let points = crossover_points(20, 12, &mut rng);
            assert!(!points.is_empty());
            assert!(points.len() <= MAX_CROSSOVERS);
            assert!(points.windows(2).all(|w| w[0] < w[1]));
            assert!(points.iter().all(|&p| p > 0 && p < 12));
        }
    }

    #[test]
    fn test_crossover_points_clamped_to_available() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        for _ in 0..100 {
            // Only position 1 and 2 are interior to a length-3 parent
            let points = crossover_points(3, 10, &mut rng);
            assert!(!points.is_empty() && points.len() <= 2);
            assert!(points.iter().all(|&p| p == 1 || p == 2));
        }
        for _ in 0..20 {
            assert_eq!(crossover_points(2, 2, &mut rng), vec![1]);
        }
    }

    #[test]
    fn test_crossover_points_too_short() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        assert!(crossover_points(1, 10, &mut rng).is_empty());
        assert!(crossover_points(0, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_crossover_at_single_point() {
        let (g1, g2) = crossover_at(&seq("AAAAAA"), &seq("TTTTTT"), &[2]);
        assert_eq!(text(&g1), "AATTTT");
        assert_eq!(text(&g2), "TTAAAA");
    }

    #[test]
    fn test_crossover_at_multiple_points() {
        let (g1, g2) = crossover_at(&seq("AAAAAAAA"), &seq("TTTTTTTT"), &[2, 5, 7]);
        assert_eq!(text(&g1), "AATTTAAT");
        assert_eq!(text(&g2), "TTAAATTA");
    }

    #[test]
    fn test_crossover_at_unequal_lengths() {
        // Tail beyond the shorter parent comes only from the longer one
        let (g1, g2) = crossover_at(&seq("AAAAAAAAAA"), &seq("TTTT"), &[2]);
        assert_eq!(text(&g1), "AATT");
        assert_eq!(text(&g2), "TTAAAAAAAA");

        let (g1, g2) = crossover_at(&seq("AAAAAAAAAA"), &seq("TTTT"), &[1, 3]);
        assert_eq!(text(&g1), "ATTAAAAAAA");
        assert_eq!(text(&g2), "TAAT");
    }

    #[test]
    fn test_recombine_identical_parents() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let parent = seq("ATCGGCTAAGCT");
        for _ in 0..100 {
            assert_eq!(recombine(&parent, &parent, &mut rng), parent);
        }
    }

    #[test]
    fn test_recombine_short_parent_picks_whole() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);
        let long = seq("AAAAAA");
        let short = seq("T");

        let mut saw_long = false;
        let mut saw_short = false;
        for _ in 0..100 {
            let gamete = recombine(&long, &short, &mut rng);
            if gamete == long {
                saw_long = true;
            } else if gamete == short {
                saw_short = true;
            } else {
                panic!("unexpected gamete {}", text(&gamete));
            }
        }
        assert!(saw_long && saw_short);
    }

    #[test]
    fn test_recombine_preserves_symbol_count_for_equal_lengths() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(21);
        let a = seq("AAAAAAAAAAAAAAAAAAAA");
        let t = seq("TTTTTTTTTTTTTTTTTTTT");
        for _ in 0..50 {
            let gamete = recombine(&a, &t, &mut rng);
            assert_eq!(gamete.len(), 20);
            assert!(gamete.contains(&'A') && gamete.contains(&'T'));
        }
    }
}
