use super::GeoFeature;

/// An ordered list of features.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureCollection {
	pub features: Vec<GeoFeature>,
	pub bbox: Option<Vec<f64>>,
}

impl FeatureCollection {
	#[must_use]
	pub fn new(features: Vec<GeoFeature>) -> Self {
		FeatureCollection { features, bbox: None }
	}

	pub fn push(&mut self, feature: GeoFeature) {
		self.features.push(feature);
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}
}

impl FromIterator<GeoFeature> for FeatureCollection {
	fn from_iter<I: IntoIterator<Item = GeoFeature>>(iter: I) -> Self {
		FeatureCollection::new(iter.into_iter().collect())
	}
}
