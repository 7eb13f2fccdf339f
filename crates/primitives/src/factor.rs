//! Factor-group definitions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::PrimitivesError;

/// Category reported for a factor index that belongs to no group.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// A named set of raw factor indices that are averaged together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorGroup {
    name: String,
    color: String,
    indices: Vec<usize>,
    description: String,
}

impl FactorGroup {
    /// Create a new factor group.
    ///
    /// # Arguments
    /// * `name` - Display name, also the series column name
    /// * `color` - Chart color (CSS hex string)
    /// * `indices` - 1-based raw factor indices
    /// * `description` - Human-readable description
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        indices: Vec<usize>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            indices,
            description: description.into(),
        }
    }

    /// Group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chart color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// 1-based factor indices, in declaration order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Group description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the group contains the given 1-based factor index.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}

/// Ordered, validated table of factor groups.
///
/// Grouped rows store one value per group in table order, so the table is
/// the schema for every series built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FactorGroup>", into = "Vec<FactorGroup>")]
pub struct FactorGroups {
    groups: Vec<FactorGroup>,
}

impl FactorGroups {
    /// Build a table, checking that groups are non-empty, indices are
    /// 1-based, no index is shared between groups and names are unique.
    ///
    /// # Errors
    /// Returns `PrimitivesError` describing the first violation found.
    pub fn new(groups: Vec<FactorGroup>) -> Result<Self, PrimitivesError> {
        validate(&groups)?;
        Ok(Self { groups })
    }

    /// The eight-group reference table.
    ///
    /// Covers indices 1..=88 except 69, which reports as [`UNKNOWN_CATEGORY`].
    #[must_use]
    pub fn reference() -> Self {
        let groups = vec![
            FactorGroup::new(
                "Value",
                "#3B82F6",
                vec![1, 2, 3, 4, 5, 6, 7, 29, 64, 65, 66, 67, 68],
                "Value-oriented factors and strategies",
            ),
            FactorGroup::new(
                "Growth",
                "#10B981",
                vec![8, 24, 25, 26, 27, 28],
                "Growth-focused investment factors",
            ),
            FactorGroup::new(
                "Volatility",
                "#F59E0B",
                vec![9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 42, 70, 71, 72],
                "Volatility and risk-related measures",
            ),
            FactorGroup::new(
                "Commodities",
                "#8B5CF6",
                vec![30, 31, 73, 74, 75, 76, 77, 78],
                "Commodity and natural resource exposure",
            ),
            FactorGroup::new(
                "Fixed Income",
                "#EF4444",
                vec![32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 54, 55, 56],
                "Bond and fixed income factors",
            ),
            FactorGroup::new(
                "Index",
                "#06B6D4",
                vec![43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53],
                "Broad market index exposures",
            ),
            FactorGroup::new(
                "Macro",
                "#84CC16",
                vec![57, 58, 59, 60, 61, 62, 63],
                "Macroeconomic factors and indicators",
            ),
            FactorGroup::new(
                "Sector",
                "#F97316",
                vec![79, 80, 81, 82, 83, 84, 85, 86, 87, 88],
                "Sector-specific exposures",
            ),
        ];
        Self { groups }
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if empty. Always false for a validated table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate groups in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, FactorGroup> {
        self.groups.iter()
    }

    /// Group names in table order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.groups.iter().map(FactorGroup::name).collect()
    }

    /// Position of a group by name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name == name)
    }

    /// Look up a group by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FactorGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// The first group containing a 1-based factor index.
    #[must_use]
    pub fn group_of(&self, index: usize) -> Option<&FactorGroup> {
        self.groups.iter().find(|g| g.contains(index))
    }

    /// Category name for a 1-based factor index, [`UNKNOWN_CATEGORY`] if ungrouped.
    #[must_use]
    pub fn category_of(&self, index: usize) -> &str {
        self.group_of(index).map_or(UNKNOWN_CATEGORY, FactorGroup::name)
    }
}

fn validate(groups: &[FactorGroup]) -> Result<(), PrimitivesError> {
    if groups.is_empty() {
        return Err(PrimitivesError::EmptyTable);
    }

    let mut names = HashSet::new();
    let mut owners: HashMap<usize, &str> = HashMap::new();

    for group in groups {
        if !names.insert(group.name()) {
            return Err(PrimitivesError::DuplicateName(group.name.clone()));
        }
        if group.indices.is_empty() {
            return Err(PrimitivesError::EmptyGroup(group.name.clone()));
        }
        for &index in &group.indices {
            if index == 0 {
                return Err(PrimitivesError::ZeroIndex(group.name.clone()));
            }
            if let Some(first) = owners.insert(index, group.name()) {
                return Err(PrimitivesError::DuplicateIndex {
                    index,
                    first: first.to_string(),
                    second: group.name.clone(),
                });
            }
        }
    }

    Ok(())
}

impl Default for FactorGroups {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<Vec<FactorGroup>> for FactorGroups {
    type Error = PrimitivesError;

    fn try_from(groups: Vec<FactorGroup>) -> Result<Self, Self::Error> {
        Self::new(groups)
    }
}

impl From<FactorGroups> for Vec<FactorGroup> {
    fn from(table: FactorGroups) -> Self {
        table.groups
    }
}

impl<'a> IntoIterator for &'a FactorGroups {
    type Item = &'a FactorGroup;
    type IntoIter = std::slice::Iter<'a, FactorGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FACTOR_COUNT;

    #[test]
    fn reference_table_validates() {
        let reference = FactorGroups::reference();
        let rebuilt = FactorGroups::new(reference.clone().into()).unwrap();
        assert_eq!(rebuilt, reference);
        assert_eq!(reference.len(), 8);
    }

    #[test]
    fn reference_table_partitions_without_overlap() {
        let reference = FactorGroups::reference();
        let mut seen = HashSet::new();
        for group in &reference {
            for &index in group.indices() {
                assert!(seen.insert(index), "index {index} appears twice");
                assert!((1..=FACTOR_COUNT).contains(&index));
            }
        }
        // 69 is the only ungrouped factor
        let missing: Vec<usize> = (1..=FACTOR_COUNT).filter(|i| !seen.contains(i)).collect();
        assert_eq!(missing, vec![69]);
    }

    #[test]
    fn category_lookup() {
        let reference = FactorGroups::reference();
        assert_eq!(reference.category_of(1), "Value");
        assert_eq!(reference.category_of(42), "Volatility");
        assert_eq!(reference.category_of(88), "Sector");
        assert_eq!(reference.category_of(69), UNKNOWN_CATEGORY);
        assert_eq!(reference.category_of(500), UNKNOWN_CATEGORY);
    }

    #[test]
    fn position_and_names() {
        let reference = FactorGroups::reference();
        assert_eq!(reference.position("Fixed Income"), Some(4));
        assert_eq!(reference.position("Nope"), None);
        assert_eq!(reference.names()[0], "Value");
    }

    #[test]
    fn rejects_empty_group() {
        let err = FactorGroups::new(vec![FactorGroup::new("A", "#000", vec![], "")]).unwrap_err();
        assert_eq!(err, PrimitivesError::EmptyGroup("A".to_string()));
    }

    #[test]
    fn rejects_overlap() {
        let err = FactorGroups::new(vec![
            FactorGroup::new("A", "#000", vec![1, 2], ""),
            FactorGroup::new("B", "#111", vec![2, 3], ""),
        ])
        .unwrap_err();
        assert!(matches!(err, PrimitivesError::DuplicateIndex { index: 2, .. }));
    }

    #[test]
    fn rejects_zero_index_and_duplicate_names() {
        assert!(matches!(
            FactorGroups::new(vec![FactorGroup::new("A", "#000", vec![0], "")]),
            Err(PrimitivesError::ZeroIndex(_))
        ));
        assert!(matches!(
            FactorGroups::new(vec![
                FactorGroup::new("A", "#000", vec![1], ""),
                FactorGroup::new("A", "#111", vec![2], ""),
            ]),
            Err(PrimitivesError::DuplicateName(_))
        ));
        assert_eq!(FactorGroups::new(vec![]), Err(PrimitivesError::EmptyTable));
    }

    #[test]
    fn deserialize_validates() {
        let json = r##"[{"name":"A","color":"#000","indices":[1,1],"description":""}]"##;
        assert!(serde_json::from_str::<FactorGroups>(json).is_err());

        let json = r##"[{"name":"A","color":"#000","indices":[1,2],"description":"a"}]"##;
        let table: FactorGroups = serde_json::from_str(json).unwrap();
        assert_eq!(table.get("A").unwrap().indices(), &[1, 2]);
    }
}
