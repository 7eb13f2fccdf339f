//! Factor-group averaging.

use betalens_primitives::FactorGroups;

/// Reduce raw factor values to one mean per group.
///
/// Each group averages the values at its 1-based indices; an index past the
/// end of `values` contributes 0.0. An empty group yields 0.0 rather than NaN.
///
/// # Arguments
/// * `values` - Raw factor values, index 0 is factor 1
/// * `groups` - Group table defining the output order
///
/// # Returns
/// One value per group, in table order.
#[must_use]
pub fn group_factors(values: &[f64], groups: &FactorGroups) -> Vec<f64> {
    groups
        .iter()
        .map(|group| {
            let indices = group.indices();
            if indices.is_empty() {
                return 0.0;
            }
            let sum: f64 = indices
                .iter()
                .map(|&idx| idx.checked_sub(1).and_then(|i| values.get(i)).copied().unwrap_or(0.0))
                .sum();
            sum / indices.len() as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use betalens_primitives::{FACTOR_COUNT, FactorGroup};

    use super::*;

    #[test]
    fn constant_input_gives_constant_groups() {
        let groups = FactorGroups::reference();
        let out = group_factors(&[2.5; FACTOR_COUNT], &groups);
        assert_eq!(out.len(), groups.len());
        for v in out {
            assert_relative_eq!(v, 2.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn averages_listed_indices_only() {
        let groups = FactorGroups::new(vec![
            FactorGroup::new("A", "#000", vec![1, 3], ""),
            FactorGroup::new("B", "#111", vec![2], ""),
        ])
        .unwrap();
        let out = group_factors(&[10.0, 20.0, 30.0], &groups);
        assert_relative_eq!(out[0], 20.0);
        assert_relative_eq!(out[1], 20.0);
    }

    #[test]
    fn missing_indices_count_as_zero() {
        let groups = FactorGroups::new(vec![FactorGroup::new("A", "#000", vec![1, 2, 10], "")])
            .unwrap();
        let out = group_factors(&[3.0, 6.0], &groups);
        assert_relative_eq!(out[0], 3.0);
    }

    #[test]
    fn sector_group_uses_tail_factors() {
        let groups = FactorGroups::reference();
        let values: Vec<f64> = (1..=FACTOR_COUNT).map(|i| i as f64).collect();
        let out = group_factors(&values, &groups);
        // Sector covers 79..=88
        let sector = groups.position("Sector").unwrap();
        assert_relative_eq!(out[sector], 83.5);
        // Growth covers 8, 24..=28
        let growth = groups.position("Growth").unwrap();
        assert_relative_eq!(out[growth], (8.0 + 24.0 + 25.0 + 26.0 + 27.0 + 28.0) / 6.0);
    }
}
