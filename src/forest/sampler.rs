//! Defines the resampling primitives behind bagging.

use fixedbitset::FixedBitSet;
use rand::prelude::*;

use crate::sample::{Dataset, FeatureSpec};


/// One bootstrap draw: the resampled dataset plus the indices of the
/// source rows that the draw never picked (out-of-bag rows).
#[derive(Debug, Clone)]
pub struct BootstrapSample {
    data: Dataset,
    oob: Vec<usize>,
}


impl BootstrapSample {
    /// Returns the resampled dataset.
    #[inline]
    pub fn data(&self) -> &Dataset {
        &self.data
    }


    /// Consume `self`, returning the resampled dataset.
    #[inline]
    pub fn into_data(self) -> Dataset {
        self.data
    }


    /// Returns the source-row indices left out of the draw,
    /// in ascending order.
    #[inline]
    pub fn oob(&self) -> &[usize] {
        &self.oob[..]
    }
}


/// Draw a bootstrap sample of `size` rows from `data`, uniformly
/// with replacement. Rows may repeat and some rows are typically
/// left out; the draw order follows `rng` so a seeded generator
/// reproduces the sample exactly.
pub fn bootstrap<R>(data: &Dataset, size: usize, rng: &mut R)
    -> BootstrapSample
    where R: Rng + ?Sized,
{
    let n_sample = data.len();
    let mut in_bag = FixedBitSet::with_capacity(n_sample);

    let indices = (0..size)
        .map(|_| {
            let i = rng.gen_range(0..n_sample);
            in_bag.insert(i);
            i
        })
        .collect::<Vec<_>>();

    let oob = (0..n_sample)
        .filter(|&i| !in_bag.contains(i))
        .collect::<Vec<_>>();

    BootstrapSample { data: data.take(&indices), oob }
}


/// Choose `k` distinct features from `features` uniformly without
/// replacement. The chosen subset is returned in declared order,
/// so the split search over it stays deterministic.
pub fn feature_subset<R>(features: &[FeatureSpec], k: usize, rng: &mut R)
    -> Vec<FeatureSpec>
    where R: Rng + ?Sized,
{
    let mut chosen = rand::seq::index::sample(rng, features.len(), k)
        .into_vec();
    chosen.sort_unstable();

    chosen.into_iter()
        .map(|i| features[i].clone())
        .collect()
}
