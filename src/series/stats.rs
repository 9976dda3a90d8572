use crate::error::{Error, Result};
use crate::numeric::Numeric;

use super::Series;

// 分散・共分散・相関係数
//
// dofは自由度の補正: 0で母集団、1で標本。n == dofの場合はゼロ除算となり
// 浮動小数点の規則どおりInf/NaNを返す。
impl<T, R> Series<T, R>
where
    T: Numeric,
    R: Clone + PartialEq,
{
    /// 分散を計算
    pub fn variance(&self, dof: usize) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::EmptyData(
                "空のSeriesの分散は計算できません".to_string(),
            ));
        }

        let mean = self.mean();
        let sum_squared_diff = self
            .values
            .iter()
            .map(|&v| {
                let diff = v.as_f64() - mean;
                diff * diff
            })
            .sum::<f64>();

        Ok(sum_squared_diff / (self.len() as f64 - dof as f64))
    }

    /// 標準偏差を計算
    pub fn std_dev(&self, dof: usize) -> Result<f64> {
        Ok(self.variance(dof)?.sqrt())
    }

    /// 共分散を計算
    pub fn covariance<S>(&self, other: &Series<T, S>, dof: usize) -> Result<f64>
    where
        S: Clone + PartialEq,
    {
        if self.len() != other.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        let mean_x = self.mean();
        let mean_y = other.mean();

        // 分子: Σ(xi - x̄)(yi - ȳ)
        let numerator = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(&x, &y)| (x.as_f64() - mean_x) * (y.as_f64() - mean_y))
            .sum::<f64>();

        Ok(numerator / (self.len() as f64 - dof as f64))
    }

    /// ピアソンの相関係数を計算
    ///
    /// どちらかのSeriesが定数で標準偏差の積が0になる場合は0.0を返す。
    pub fn correlation<S>(&self, other: &Series<T, S>) -> Result<f64>
    where
        S: Clone + PartialEq,
    {
        let covariance = self.covariance(other, 0)?;
        let denominator = self.std_dev(0)? * other.std_dev(0)?;

        if denominator == 0.0 {
            log::warn!(
                "correlation: zero standard deviation in '{}' or '{}', returning 0.0",
                self.name,
                other.name
            );
            return Ok(0.0);
        }

        Ok(covariance / denominator)
    }
}
