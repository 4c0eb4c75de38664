use crate::types::{Frequency, Token, TokenRef};
use crate::utils::dedup_vector;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Paired sequences of distinct values and their counts.
///
/// `distinct_values[i]` is counted by `frequencies[i]`. Values are unique and
/// kept in first-seen order; no other ordering is implied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFrequencyTable")]
pub struct FrequencyTable {
    #[serde(rename = "distinct values")]
    distinct_values: Vec<Token>,
    frequencies: Vec<Frequency>,
}

#[derive(Deserialize)]
struct RawFrequencyTable {
    #[serde(rename = "distinct values")]
    distinct_values: Vec<Token>,
    frequencies: Vec<Frequency>,
}

impl TryFrom<RawFrequencyTable> for FrequencyTable {
    type Error = Error;

    fn try_from(raw: RawFrequencyTable) -> Result<Self, Self::Error> {
        FrequencyTable::from_parts(raw.distinct_values, raw.frequencies)
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from already-paired sequences, checking both invariants.
    pub fn from_parts(
        distinct_values: Vec<Token>,
        frequencies: Vec<Frequency>,
    ) -> Result<Self, Error> {
        if distinct_values.len() != frequencies.len() {
            return Err(Error::InvariantViolation(format!(
                "{} distinct values paired with {} frequencies",
                distinct_values.len(),
                frequencies.len()
            )));
        }

        if dedup_vector(&distinct_values).len() != distinct_values.len() {
            return Err(Error::InvariantViolation(
                "Frequency table contains duplicate values".to_string(),
            ));
        }

        Ok(Self {
            distinct_values,
            frequencies,
        })
    }

    /// Counts occurrences of each token, keeping the order tokens were first seen.
    ///
    /// # Example
    /// ```
    /// use elite_profiler::FrequencyTable;
    ///
    /// let tokens = vec!["vote".to_string(), "today".to_string(), "vote".to_string()];
    /// let table = FrequencyTable::from_tokens(&tokens);
    /// assert_eq!(table.distinct_values(), ["vote", "today"]);
    /// assert_eq!(table.frequencies(), [2.0, 1.0]);
    /// ```
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut counts: HashMap<&TokenRef, Frequency> = HashMap::new();

        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
        }

        let distinct_values = dedup_vector(tokens);
        let frequencies = distinct_values
            .iter()
            .map(|value| counts.get(value.as_str()).copied().unwrap_or_default())
            .collect();

        Self {
            distinct_values,
            frequencies,
        }
    }

    pub fn distinct_values(&self) -> &[Token] {
        &self.distinct_values
    }

    pub fn frequencies(&self) -> &[Frequency] {
        &self.frequencies
    }

    pub fn len(&self) -> usize {
        self.distinct_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distinct_values.is_empty()
    }

    pub fn get(&self, value: &TokenRef) -> Option<Frequency> {
        self.position(value).map(|index| self.frequencies[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TokenRef, Frequency)> {
        self.distinct_values
            .iter()
            .map(|value| value.as_str())
            .zip(self.frequencies.iter().copied())
    }

    /// Adds `frequency` to `value`, appending it at the end if unseen.
    ///
    /// Returns `true` if the value was newly appended.
    pub fn increment(&mut self, value: &TokenRef, frequency: Frequency) -> bool {
        match self.position(value) {
            Some(index) => {
                self.frequencies[index] += frequency;
                false
            }
            None => {
                self.distinct_values.push(value.to_string());
                self.frequencies.push(frequency);
                true
            }
        }
    }

    /// Folds another table into this one.
    ///
    /// Counts of values already present are summed; new values are appended
    /// in the order `other` lists them.
    pub fn merge(&mut self, other: &FrequencyTable) {
        let mut index: HashMap<Token, usize> = self
            .distinct_values
            .iter()
            .enumerate()
            .map(|(position, value)| (value.clone(), position))
            .collect();

        for (value, frequency) in other.iter() {
            match index.get(value) {
                Some(&position) => self.frequencies[position] += frequency,
                None => {
                    index.insert(value.to_string(), self.distinct_values.len());
                    self.distinct_values.push(value.to_string());
                    self.frequencies.push(frequency);
                }
            }
        }
    }

    /// Like `merge`, but from raw parallel sequences that have not been checked yet.
    pub fn merge_parts(
        &mut self,
        distinct_values: &[Token],
        frequencies: &[Frequency],
    ) -> Result<(), Error> {
        let other = FrequencyTable::from_parts(distinct_values.to_vec(), frequencies.to_vec())?;
        self.merge(&other);
        Ok(())
    }

    /// Keeps only the entries for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&TokenRef, Frequency) -> bool,
    {
        let (distinct_values, frequencies): (Vec<Token>, Vec<Frequency>) = self
            .distinct_values
            .drain(..)
            .zip(self.frequencies.drain(..))
            .filter(|(value, frequency)| keep(value.as_str(), *frequency))
            .unzip();

        self.distinct_values = distinct_values;
        self.frequencies = frequencies;
    }

    /// Returns the `n` most and `n` least frequent values.
    ///
    /// Values are stable-sorted by ascending frequency; the top list is the
    /// tail of that order reversed, the bottom list its head. Either list holds
    /// fewer than `n` values when the table is smaller.
    pub fn extremes(&self, n: usize) -> (Vec<Token>, Vec<Token>) {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| {
            self.frequencies[a]
                .partial_cmp(&self.frequencies[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let top = order
            .iter()
            .rev()
            .take(n)
            .map(|&index| self.distinct_values[index].clone())
            .collect();

        let bottom = order
            .iter()
            .take(n)
            .map(|&index| self.distinct_values[index].clone())
            .collect();

        (top, bottom)
    }

    fn position(&self, value: &TokenRef) -> Option<usize> {
        self.distinct_values.iter().position(|v| v == value)
    }
}
