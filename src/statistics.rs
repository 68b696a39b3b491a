//! Order statistics over a list of applicant ages.

use std::fmt;

/// Median of a list of whole numbers, stored as twice its value so the
/// half produced by averaging two central elements stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Median {
    doubled: u128,
}

impl Median {
    fn single(value: u64) -> Self {
        Self {
            doubled: u128::from(value) * 2,
        }
    }

    fn midpoint(lower: u64, upper: u64) -> Self {
        Self {
            doubled: u128::from(lower) + u128::from(upper),
        }
    }

    pub fn is_whole(&self) -> bool {
        self.doubled % 2 == 0
    }
}

impl fmt::Display for Median {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.doubled / 2)
        } else {
            write!(f, "{}.5", self.doubled / 2)
        }
    }
}

/// A structure to hold the descriptive statistics of an age list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub min: u64,
    pub max: u64,
    pub range: u64,
    pub median: Median,
}

/// Calculate descriptive statistics for a list of ages, sorting it in place.
///
/// # Arguments
///
/// * `ages` - Ages to analyze; left sorted ascending on return
///
/// # Returns
///
/// * `Option<Statistics>` - `None` when there are no ages to summarize
pub fn calculate_statistics(ages: &mut [u64]) -> Option<Statistics> {
    ages.sort_unstable();

    let min = *ages.first()?;
    let max = *ages.last()?;

    let len = ages.len();
    let median = if len % 2 == 0 {
        Median::midpoint(ages[len / 2 - 1], ages[len / 2])
    } else {
        Median::single(ages[len / 2])
    };

    Some(Statistics {
        min,
        max,
        range: max - min,
        median,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    impl Median {
        fn as_f64(&self) -> f64 {
            self.doubled as f64 / 2.0
        }
    }

    #[test]
    fn test_odd_count_takes_middle_element() {
        let mut ages = vec![35, 25, 30];
        let stats = calculate_statistics(&mut ages).unwrap();

        assert_eq!(stats.min, 25);
        assert_eq!(stats.max, 35);
        assert_eq!(stats.range, 10);
        assert_eq!(stats.median.to_string(), "30");
        assert_eq!(ages, vec![25, 30, 35]);
    }

    #[test]
    fn test_even_count_averages_central_pair() {
        let mut ages = vec![40, 20];
        let stats = calculate_statistics(&mut ages).unwrap();

        assert_eq!(stats.range, 20);
        assert!(stats.median.is_whole());
        assert_eq!(stats.median.to_string(), "30");

        let mut ages = vec![30, 31, 18, 64];
        let stats = calculate_statistics(&mut ages).unwrap();
        assert!(!stats.median.is_whole());
        assert_eq!(stats.median.to_string(), "30.5");
        assert_eq!(stats.median.as_f64(), 30.5);
    }

    #[test]
    fn test_single_value() {
        let mut ages = vec![17];
        let stats = calculate_statistics(&mut ages).unwrap();

        assert_eq!(stats.min, 17);
        assert_eq!(stats.max, 17);
        assert_eq!(stats.range, 0);
        assert_eq!(stats.median.to_string(), "17");
    }

    #[test]
    fn test_empty_list_has_no_statistics() {
        let mut ages: Vec<u64> = Vec::new();
        assert_eq!(calculate_statistics(&mut ages), None);
    }

    #[test]
    fn test_duplicates_and_extremes() {
        let mut ages = vec![u64::MAX, 0, u64::MAX, 0];
        let stats = calculate_statistics(&mut ages).unwrap();

        assert_eq!(stats.range, u64::MAX);
        assert_eq!(stats.median.to_string(), format!("{}.5", u64::MAX / 2));
    }

    #[test]
    fn test_sorted_input_is_idempotent() {
        let mut ages = vec![52, 19, 33, 33, 70, 41];
        let first = calculate_statistics(&mut ages).unwrap();
        let sorted = ages.clone();
        let second = calculate_statistics(&mut ages).unwrap();

        assert_eq!(first, second);
        assert_eq!(ages, sorted);
    }

    #[test]
    fn test_matches_conventional_median_and_range() {
        let lists: [&[u64]; 5] = [&[1], &[1, 2], &[9, 3, 7], &[4, 4, 4, 4], &[100, 0, 50, 25, 75, 10]];

        for list in lists {
            let mut ages = list.to_vec();
            let stats = calculate_statistics(&mut ages).unwrap();

            let mut sorted = list.to_vec();
            sorted.sort();
            let n = sorted.len();
            let expected = if n % 2 == 1 {
                sorted[n / 2] as f64
            } else {
                (sorted[n / 2 - 1] + sorted[n / 2]) as f64 / 2.0
            };

            assert_eq!(stats.median.as_f64(), expected);
            assert_eq!(stats.range, stats.max - stats.min);
            assert_eq!(stats.min, *sorted.iter().min().unwrap());
            assert_eq!(stats.max, *sorted.iter().max().unwrap());
        }
    }
}
