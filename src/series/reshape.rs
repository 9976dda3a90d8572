use crate::error::{Error, Result};
use crate::index::Index;

use super::Series;

impl<T, R> Series<T, R>
where
    T: Clone,
    R: Clone + PartialEq,
{
    /// 先頭からn個の要素を取得（nが長さを超える場合は全要素）
    pub fn head(&self, n: usize) -> Result<Self> {
        let len = self.take_len(n, "head")?;
        Ok(Series::from_parts(
            self.name.clone(),
            self.values[..len].to_vec(),
            Index::new(self.index.values()[..len].to_vec()),
        ))
    }

    /// 末尾からn個の要素を取得（nが長さを超える場合は全要素）
    pub fn tail(&self, n: usize) -> Result<Self> {
        let len = self.take_len(n, "tail")?;
        let start = self.len() - len;
        Ok(Series::from_parts(
            self.name.clone(),
            self.values[start..].to_vec(),
            Index::new(self.index.values()[start..].to_vec()),
        ))
    }

    fn take_len(&self, n: usize, op: &str) -> Result<usize> {
        if n == 0 {
            return Err(Error::EmptyData(format!(
                "{}(0)は空のSeriesになります",
                op
            )));
        }
        Ok(n.min(self.len()))
    }

    /// 別のSeriesを末尾に連結
    pub fn append(&mut self, other: &Series<T, R>) {
        self.values.extend(other.values.iter().cloned());
        self.index.extend_from(&other.index);
    }

    /// 別のSeriesを先頭に連結
    pub fn prepend(&mut self, other: &Series<T, R>) {
        let mut values = Vec::with_capacity(other.len() + self.len());
        values.extend(other.values.iter().cloned());
        values.append(&mut self.values);
        self.values = values;
        self.index.prepend_from(&other.index);
    }

    /// インデックスを0..n-1にリセットした新しいSeriesを返す
    pub fn reset_index(&self) -> Series<T, usize> {
        Series::from_parts(
            self.name.clone(),
            self.values.clone(),
            Index::from_range(self.len()),
        )
    }

    /// 新しいインデックスを設定したSeriesを返す
    pub fn set_index<S>(&self, new_index: Vec<S>) -> Result<Series<T, S>>
    where
        S: Clone + PartialEq,
    {
        if new_index.len() != self.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                actual: new_index.len(),
            });
        }
        Ok(Series::from_parts(
            self.name.clone(),
            self.values.clone(),
            Index::new(new_index),
        ))
    }

    /// 値が含まれているかどうか
    pub fn is_in(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.values.contains(value)
    }
}
