use crate::algebra::*;
use num_traits::float::TotalOrder;
use std::ops::Index;

/// An eigenvalue together with its eigenvector
#[derive(Debug, Clone, PartialEq)]
pub struct Eigenpair<T = f64> {
    pub eigenvalue: T,
    /// unit eigenvector
    pub eigenvector: ColumnVector<T>,
}

/// Ordering policies for [`EigenpairCollection::sort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    /// most negative eigenvalue first
    ValueAscending,
    /// most positive eigenvalue first
    ValueDescending,
    /// eigenvalue nearest zero first
    MagnitudeAscending,
    /// eigenvalue farthest from zero first
    MagnitudeDescending,
}

/// An ordered list of eigenpairs
#[derive(Debug, Clone, PartialEq)]
pub struct EigenpairCollection<T = f64> {
    pairs: Vec<Eigenpair<T>>,
}

impl<T> EigenpairCollection<T>
where
    T: FloatT,
{
    pub(crate) fn new(pairs: Vec<Eigenpair<T>>) -> Self {
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Eigenpair<T>> {
        self.pairs.iter()
    }

    /// Eigenvalues in the current order of the collection
    pub fn eigenvalues(&self) -> Vec<T> {
        self.pairs.iter().map(|p| p.eigenvalue).collect()
    }

    /// Reorder the collection.  Pairs are moved as a unit and never
    /// recomputed.  The sort is stable, and eigenvalues are compared
    /// in the IEEE 754 total order, so a positive NaN sorts above `+∞`.
    pub fn sort(&mut self, order: OrderBy) {
        let values = self.eigenvalues();
        let mut p = vec![0; values.len()];

        match order {
            OrderBy::ValueAscending => sortperm_by(&mut p, &values, |a, b| a.total_cmp(b)),
            OrderBy::ValueDescending => sortperm_by(&mut p, &values, |a, b| b.total_cmp(a)),
            OrderBy::MagnitudeAscending => {
                sortperm_by(&mut p, &values, |a, b| a.abs().total_cmp(&b.abs()))
            }
            OrderBy::MagnitudeDescending => {
                sortperm_by(&mut p, &values, |a, b| b.abs().total_cmp(&a.abs()))
            }
        }

        self.pairs = permute(&self.pairs, &p);
    }

    pub fn into_vec(self) -> Vec<Eigenpair<T>> {
        self.pairs
    }
}

impl<T> Index<usize> for EigenpairCollection<T> {
    type Output = Eigenpair<T>;
    fn index(&self, i: usize) -> &Eigenpair<T> {
        &self.pairs[i]
    }
}

impl<'a, T> IntoIterator for &'a EigenpairCollection<T> {
    type Item = &'a Eigenpair<T>;
    type IntoIter = std::slice::Iter<'a, Eigenpair<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_collection() -> EigenpairCollection<f64> {
        let values = [2.0, -3.0, 0.5, -1.0];
        let pairs = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let mut x = ColumnVector::zeros(4);
                x[i] = 1.0;
                Eigenpair {
                    eigenvalue: v,
                    eigenvector: x,
                }
            })
            .collect();
        EigenpairCollection::new(pairs)
    }

    #[test]
    fn test_sort_policies() {
        let mut pairs = test_collection();

        pairs.sort(OrderBy::ValueAscending);
        assert_eq!(pairs.eigenvalues(), vec![-3.0, -1.0, 0.5, 2.0]);
        pairs.sort(OrderBy::ValueDescending);
        assert_eq!(pairs.eigenvalues(), vec![2.0, 0.5, -1.0, -3.0]);
        pairs.sort(OrderBy::MagnitudeAscending);
        assert_eq!(pairs.eigenvalues(), vec![0.5, -1.0, 2.0, -3.0]);
        pairs.sort(OrderBy::MagnitudeDescending);
        assert_eq!(pairs.eigenvalues(), vec![-3.0, 2.0, -1.0, 0.5]);
    }

    #[test]
    fn test_sort_keeps_pairs_together() {
        let original = test_collection();
        let mut pairs = original.clone();
        pairs.sort(OrderBy::MagnitudeDescending);

        assert_eq!(pairs.len(), original.len());
        for pair in &pairs {
            assert!(original.iter().any(|p| p == pair));
        }
    }

    #[test]
    fn test_sort_with_nan() {
        let pairs = [1.0, f64::NAN, -2.0, 0.5]
            .iter()
            .map(|&v| Eigenpair {
                eigenvalue: v,
                eigenvector: ColumnVector::from(vec![v]),
            })
            .collect();
        let mut pairs = EigenpairCollection::new(pairs);

        pairs.sort(OrderBy::ValueAscending);
        let vals = pairs.eigenvalues();
        assert_eq!(&vals[..3], &[-2.0, 0.5, 1.0]);
        assert!(vals[3].is_nan());

        pairs.sort(OrderBy::MagnitudeAscending);
        let vals = pairs.eigenvalues();
        assert_eq!(&vals[..3], &[0.5, 1.0, -2.0]);
        assert!(vals[3].is_nan());
    }

    #[test]
    fn test_sort_is_stable() {
        let pairs = [1.0, -1.0, 1.0]
            .iter()
            .enumerate()
            .map(|(i, &v)| Eigenpair {
                eigenvalue: v,
                eigenvector: ColumnVector::from(vec![i as f64]),
            })
            .collect();
        let mut pairs = EigenpairCollection::new(pairs);

        pairs.sort(OrderBy::MagnitudeAscending);
        let order: Vec<f64> = pairs.iter().map(|p| p.eigenvector[0]).collect();
        assert_eq!(order, vec![0.0, 1.0, 2.0]);

        pairs.sort(OrderBy::ValueDescending);
        let order: Vec<f64> = pairs.iter().map(|p| p.eigenvector[0]).collect();
        assert_eq!(order, vec![0.0, 2.0, 1.0]);
    }
}
