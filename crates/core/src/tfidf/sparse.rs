//! Sparse term-weight vectors.
//!
//! Entries are stored as parallel `indices`/`values` arrays sorted by term id,
//! which keeps the dot product a single merge pass.

/// Sparse vector over the vocabulary. Indices are strictly increasing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    indices: Vec<u32>,
    values: Vec<f32>,
}

impl SparseVector {
    /// Build a vector from `(term id, weight)` pairs in any order.
    ///
    /// Duplicate ids are summed and zero weights are dropped.
    pub fn from_pairs(mut pairs: Vec<(u32, f32)>) -> Self {
        pairs.sort_unstable_by_key(|&(id, _)| id);
        let mut indices: Vec<u32> = Vec::with_capacity(pairs.len());
        let mut values: Vec<f32> = Vec::with_capacity(pairs.len());
        for (id, weight) in pairs {
            if indices.last() == Some(&id) {
                if let Some(last) = values.last_mut() {
                    *last += weight;
                }
            } else {
                indices.push(id);
                values.push(weight);
            }
        }
        let mut v = Self { indices, values };
        v.drop_zeros();
        v
    }

    /// Create an empty vector.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of non-zero entries.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the vector has no entries.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate `(term id, weight)` in increasing id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f32)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Euclidean (L2) norm.
    pub fn norm(&self) -> f32 {
        self.values.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    /// Scale to unit L2 norm. A zero vector is left untouched.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for v in &mut self.values {
                *v /= norm;
            }
        }
    }

    /// Dot product via a merge over the sorted indices.
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f32;
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn drop_zeros(&mut self) {
        if self.values.iter().all(|&v| v != 0.0) {
            return;
        }
        let (indices, values): (Vec<u32>, Vec<f32>) =
            self.iter().filter(|&(_, v)| v != 0.0).unzip();
        self.indices = indices;
        self.values = values;
    }
}
