use serde::{Deserialize, Serialize};

/// One named dimension of a rubric with its point cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionSpec {
    pub name: String,
    pub max_score: u32,
}

/// Ordered set of weighted scoring dimensions for one document type.
///
/// Dimension caps sum to 100 for every registered document type; the
/// ordering here is the reporting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    pub dimensions: Vec<DimensionSpec>,
}

impl Rubric {
    /// Builds a rubric from `(name, max_score)` pairs in reporting order.
    pub fn from_pairs(pairs: &[(&str, u32)]) -> Self {
        Self {
            dimensions: pairs
                .iter()
                .map(|(name, max_score)| DimensionSpec {
                    name: (*name).to_string(),
                    max_score: *max_score,
                })
                .collect(),
        }
    }

    /// Total points available across all dimensions.
    pub fn total_points(&self) -> u32 {
        self.dimensions.iter().map(|d| d.max_score).sum()
    }

    pub fn dimension(&self, name: &str) -> Option<&DimensionSpec> {
        self.dimensions.iter().find(|d| d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_preserves_order_and_points() {
        let rubric = Rubric::from_pairs(&[("structure", 25), ("clarity", 20)]);
        assert_eq!(rubric.dimensions[0].name, "structure");
        assert_eq!(rubric.dimensions[1].name, "clarity");
        assert_eq!(rubric.total_points(), 45);
        assert_eq!(rubric.dimension("clarity").unwrap().max_score, 20);
        assert!(rubric.dimension("missing").is_none());
    }
}
