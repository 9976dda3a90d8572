use crate::error::{Error, Result};
use crate::index::Index;
use crate::numeric::Numeric;

use super::Series;

// 数値型のSeriesに対する特化実装
impl<T, R> Series<T, R>
where
    T: Numeric,
    R: Clone + PartialEq,
{
    /// 合計を計算（先頭から順に加算、整数型はラップアラウンド）
    pub fn sum(&self) -> T {
        self.values.iter().fold(T::zero(), |acc, &v| acc.wrapping_add(v))
    }

    /// 平均を計算
    pub fn mean(&self) -> f64 {
        self.sum().as_f64() / self.len() as f64
    }

    /// 最小値を計算（同値は最初の要素）
    pub fn min(&self) -> Result<T> {
        let pos = self.arg_min()?;
        Ok(self.values[pos])
    }

    /// 最大値を計算（同値は最初の要素）
    pub fn max(&self) -> Result<T> {
        let pos = self.max_position()?;
        Ok(self.values[pos])
    }

    /// 最大値のラベルを取得
    pub fn arg_max(&self) -> Result<&R> {
        let pos = self.max_position()?;
        Ok(&self.index.values()[pos])
    }

    /// 最小値の位置を取得
    ///
    /// `arg_max`とは異なりラベルではなく位置を返す。ラベルは`idx_min`で取得する。
    pub fn arg_min(&self) -> Result<usize> {
        self.extremum_position("最小値", |candidate, current| candidate < current)
    }

    /// 最小値のラベルを取得
    pub fn idx_min(&self) -> Result<&R> {
        let pos = self.arg_min()?;
        Ok(&self.index.values()[pos])
    }

    fn max_position(&self) -> Result<usize> {
        self.extremum_position("最大値", |candidate, current| candidate > current)
    }

    fn extremum_position<F>(&self, what: &str, better: F) -> Result<usize>
    where
        F: Fn(T, T) -> bool,
    {
        let first = match self.values.first() {
            Some(&v) => v,
            None => {
                return Err(Error::EmptyData(format!(
                    "空のSeriesの{}は計算できません",
                    what
                )))
            }
        };

        let mut best_pos = 0;
        let mut best = first;
        for (i, &v) in self.values.iter().enumerate().skip(1) {
            if better(v, best) {
                best = v;
                best_pos = i;
            }
        }
        Ok(best_pos)
    }

    /// 累積和のSeriesを返す
    pub fn cum_sum(&self) -> Self {
        let mut running = T::zero();
        let values = self
            .values
            .iter()
            .map(|&v| {
                running = running.wrapping_add(v);
                running
            })
            .collect();

        Series::from_parts(format!("{}_cumsum", self.name), values, self.index.clone())
    }

    /// NaNを含むかどうか
    pub fn has_na(&self) -> bool {
        self.values.iter().any(|v| v.is_nan())
    }

    /// NaNの個数を取得
    pub fn na_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }

    /// NaNを除去したSeriesを返す
    pub fn drop_na(&self) -> Result<Self> {
        let (values, labels): (Vec<T>, Vec<R>) = self
            .iter()
            .filter(|(_, v)| !v.is_nan())
            .map(|(label, &v)| (v, label.clone()))
            .unzip();

        if values.is_empty() {
            return Err(Error::EmptyData(
                "NaNを除去すると値がなくなります".to_string(),
            ));
        }

        let dropped = self.len() - values.len();
        if dropped > 0 {
            log::debug!("drop_na: removed {} NaN values from '{}'", dropped, self.name);
        }

        Ok(Series::from_parts(
            self.name.clone(),
            values,
            Index::new(labels),
        ))
    }

    /// NaNを指定した値で埋めたSeriesを返す
    pub fn fill_na(&self, fill_value: T) -> Self {
        let values = self
            .values
            .iter()
            .map(|&v| if v.is_nan() { fill_value } else { v })
            .collect();

        Series::from_parts(self.name.clone(), values, self.index.clone())
    }
}
