//! Labeled instances and the dataset they live in.

use std::collections::HashSet;
use std::fmt;

use crate::error::KnnError;

/// Class key of an instance.
///
/// Labels are compared for equality only; they carry no ordering or
/// arithmetic meaning, even when the underlying text is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    /// Creates a label from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A feature vector paired with its class label.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    features: Vec<f64>,
    label: Label,
}

impl Instance {
    /// Creates a new instance.
    pub fn new(features: impl Into<Vec<f64>>, label: impl Into<Label>) -> Self {
        Self {
            features: features.into(),
            label: label.into(),
        }
    }

    /// Returns the feature vector.
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Returns the class label.
    pub fn label(&self) -> &Label {
        &self.label
    }
}

/// An ordered, validated collection of instances.
///
/// Every instance shares the same dimensionality and every feature value is
/// finite. Once built the dataset is read-only.
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    instances: Vec<Instance>,
    n_features: usize,
}

impl Dataset {
    /// Builds a dataset, checking dimensionality and finiteness.
    ///
    /// An empty instance list is accepted and yields `n_features() == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::InconsistentDimension`] if an instance's length
    /// differs from the first instance's, or [`KnnError::NonFiniteFeature`]
    /// if any value is NaN or infinite.
    pub fn new(name: impl Into<String>, instances: Vec<Instance>) -> Result<Self, KnnError> {
        let n_features = instances.first().map_or(0, |i| i.features().len());

        for (index, instance) in instances.iter().enumerate() {
            let got = instance.features().len();
            if got != n_features {
                return Err(KnnError::InconsistentDimension {
                    index,
                    expected: n_features,
                    got,
                });
            }
            if instance.features().iter().any(|v| !v.is_finite()) {
                return Err(KnnError::NonFiniteFeature { index });
            }
        }

        Ok(Self {
            name: name.into(),
            instances,
            n_features,
        })
    }

    /// Returns the dataset (relation) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if the dataset holds no instances.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Returns the dimensionality shared by all feature vectors.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Returns the number of distinct labels present.
    pub fn n_classes(&self) -> usize {
        self.instances
            .iter()
            .map(Instance::label)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Returns all instances in dataset order.
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Returns the instance at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Instance> {
        self.instances.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> Vec<Instance> {
        vec![
            Instance::new([0.0, 0.0], "A"),
            Instance::new([0.0, 1.0], "A"),
            Instance::new([10.0, 10.0], "B"),
        ]
    }

    #[test]
    fn test_accessors() {
        let ds = Dataset::new("toy", toy()).unwrap();
        assert_eq!(ds.name(), "toy");
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
        assert_eq!(ds.n_features(), 2);
        assert_eq!(ds.n_classes(), 2);
        assert_eq!(ds.get(2).unwrap().label(), &Label::from("B"));
        assert!(ds.get(3).is_none());
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::new("empty", Vec::new()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.n_features(), 0);
        assert_eq!(ds.n_classes(), 0);
    }

    #[test]
    fn test_inconsistent_dimension() {
        let mut instances = toy();
        instances.push(Instance::new([1.0, 2.0, 3.0], "B"));
        let err = Dataset::new("bad", instances).unwrap_err();
        assert_eq!(
            err,
            KnnError::InconsistentDimension {
                index: 3,
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn test_non_finite_feature() {
        let mut instances = toy();
        instances[1] = Instance::new([f64::NAN, 1.0], "A");
        let err = Dataset::new("bad", instances).unwrap_err();
        assert_eq!(err, KnnError::NonFiniteFeature { index: 1 });
    }

    #[test]
    fn test_label_is_opaque_text() {
        // "1" and "1.0" are different classes even though both parse as 1.
        assert_ne!(Label::from("1"), Label::from("1.0"));
        assert_eq!(Label::new(String::from("x")).to_string(), "x");
        assert_eq!(Label::from("iris").as_str(), "iris");
    }
}
