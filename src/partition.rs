//! Line ownership across the worker group.
//!
//! The source file is never physically split; every worker reads the whole file
//! and processes only the lines it owns.

/// A worker owns a line when the line index falls on its rank modulo the group
/// size. For any index and any group size >= 1 exactly one rank owns the line,
/// so the scan needs no coordination.
#[inline]
pub fn owns(line_index: usize, rank: u32, workers: u32) -> bool {
    line_index % workers as usize == rank as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_owner_per_line() {
        for workers in 1..=6 {
            for line_index in 0..100 {
                let owners = (0..workers)
                    .filter(|&rank| owns(line_index, rank, workers))
                    .count();

                assert_eq!(owners, 1);
            }
        }
    }

    #[test]
    fn test_single_worker_owns_everything() {
        for line_index in 0..32 {
            assert!(owns(line_index, 0, 1));
        }
    }
}
