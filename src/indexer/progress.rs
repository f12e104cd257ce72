use crate::models::{Difficulty, ProgressStats, SolutionRecord};

/// Count solutions per difficulty
///
/// Every record counts toward `total`. Records of unknown difficulty appear in
/// no other field.
pub fn calculate_progress(solutions: &[SolutionRecord]) -> ProgressStats {
    let mut stats = ProgressStats { total: solutions.len(), ..ProgressStats::default() };

    for solution in solutions {
        match solution.difficulty {
            Difficulty::Easy => stats.easy += 1,
            Difficulty::Medium => stats.medium += 1,
            Difficulty::Hard => stats.hard += 1,
            Difficulty::Unknown => {}
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn record(number: u32, difficulty: Difficulty) -> SolutionRecord {
        SolutionRecord {
            number,
            title: format!("Problem {}", number),
            slug: format!("problem-{}", number),
            file_name: format!("{:04}-problem-{}.js", number, number),
            source_path: PathBuf::from(format!("solutions/{:04}-problem-{}.js", number, number)),
            difficulty,
        }
    }

    #[test]
    fn test_empty_list() {
        let stats = calculate_progress(&[]);
        assert_eq!(stats, ProgressStats::default());
        assert_eq!(stats.unknown(), 0);
    }

    #[test]
    fn test_counts_per_difficulty() {
        let solutions = vec![
            record(1, Difficulty::Easy),
            record(2, Difficulty::Medium),
            record(3, Difficulty::Medium),
            record(4, Difficulty::Hard),
            record(5, Difficulty::Easy),
        ];

        let stats = calculate_progress(&solutions);

        assert_eq!(stats, ProgressStats { total: 5, easy: 2, medium: 2, hard: 1 });
        assert_eq!(stats.unknown(), 0);
    }

    #[test]
    fn test_unknown_counts_only_toward_total() {
        let solutions = vec![record(1, Difficulty::Easy), record(3, Difficulty::Unknown)];

        let stats = calculate_progress(&solutions);

        assert_eq!(stats.total, 2);
        assert_eq!(stats.easy + stats.medium + stats.hard, 1);
        assert_eq!(stats.unknown(), 1);
    }

    #[test]
    fn test_named_counts_never_exceed_total() {
        let levels = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Unknown];
        for n in 0..20u32 {
            let solutions: Vec<_> =
                (0..n).map(|i| record(i, levels[(i as usize * 7 + 3) % levels.len()])).collect();
            let stats = calculate_progress(&solutions);
            let named = stats.easy + stats.medium + stats.hard;
            assert!(stats.total >= named);
            let has_unknown = solutions.iter().any(|s| s.difficulty == Difficulty::Unknown);
            assert_eq!(stats.total == named, !has_unknown);
        }
    }
}
