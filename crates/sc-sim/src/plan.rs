//! Study plan bias lookup.

use sc_core::{Real, Subject};

/// Study-time allocation policy selected by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StudyPlan {
    /// Equal study time for both subjects.
    #[default]
    Balanced,
    /// Extra study time for subject 1, at subject 2's expense.
    FavorSubject1,
    /// Extra study time for subject 2, at subject 1's expense.
    FavorSubject2,
}

/// Per-subject weekly growth multipliers for a plan.
///
/// Invariant: the pair sums to 2.0 — favoring one subject trades growth
/// away from the other rather than creating it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanBias {
    pub subject1: Real,
    pub subject2: Real,
}

impl PlanBias {
    pub fn get(&self, subject: Subject) -> Real {
        match subject {
            Subject::Subject1 => self.subject1,
            Subject::Subject2 => self.subject2,
        }
    }
}

impl StudyPlan {
    /// Fixed bias table.
    pub fn bias(self) -> PlanBias {
        match self {
            StudyPlan::Balanced => PlanBias {
                subject1: 1.0,
                subject2: 1.0,
            },
            StudyPlan::FavorSubject1 => PlanBias {
                subject1: 1.2,
                subject2: 0.8,
            },
            StudyPlan::FavorSubject2 => PlanBias {
                subject1: 0.8,
                subject2: 1.2,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bias_table_is_exact() {
        assert_eq!(StudyPlan::Balanced.bias().subject1, 1.0);
        assert_eq!(StudyPlan::Balanced.bias().subject2, 1.0);
        assert_eq!(StudyPlan::FavorSubject1.bias().subject1, 1.2);
        assert_eq!(StudyPlan::FavorSubject1.bias().subject2, 0.8);
        assert_eq!(StudyPlan::FavorSubject2.bias().subject1, 0.8);
        assert_eq!(StudyPlan::FavorSubject2.bias().subject2, 1.2);
    }

    #[test]
    fn bias_pairs_sum_to_two() {
        for plan in [
            StudyPlan::Balanced,
            StudyPlan::FavorSubject1,
            StudyPlan::FavorSubject2,
        ] {
            let bias = plan.bias();
            assert!((bias.subject1 + bias.subject2 - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn get_keys_by_subject() {
        let bias = StudyPlan::FavorSubject2.bias();
        assert_eq!(bias.get(Subject::Subject1), 0.8);
        assert_eq!(bias.get(Subject::Subject2), 1.2);
    }
}
