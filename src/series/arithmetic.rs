use crate::error::{Error, Result};
use crate::numeric::Numeric;

use super::Series;

// 数値型Seriesの要素ごとの演算
//
// 名前に空文字列を渡すと "<左の名前>_<演算>_<右の名前>" が使われる。
impl<T, R> Series<T, R>
where
    T: Numeric,
    R: Clone + PartialEq,
{
    /// 任意の二項関数を要素ごとに適用
    pub fn operation<S, F>(&self, other: &Series<T, S>, f: F, name: &str) -> Result<Self>
    where
        S: Clone + PartialEq,
        F: Fn(T, T) -> T,
    {
        self.try_operation(other, "op", name, |_, a, b| Ok(f(a, b)))
    }

    /// 要素ごとの加算
    pub fn add<S>(&self, other: &Series<T, S>, name: &str) -> Result<Self>
    where
        S: Clone + PartialEq,
    {
        self.try_operation(other, "add", name, |_, a, b| Ok(a + b))
    }

    /// 要素ごとの減算
    pub fn subtract<S>(&self, other: &Series<T, S>, name: &str) -> Result<Self>
    where
        S: Clone + PartialEq,
    {
        self.try_operation(other, "sub", name, |_, a, b| Ok(a - b))
    }

    /// 要素ごとの乗算
    pub fn multiply<S>(&self, other: &Series<T, S>, name: &str) -> Result<Self>
    where
        S: Clone + PartialEq,
    {
        self.try_operation(other, "mul", name, |_, a, b| Ok(a * b))
    }

    /// 要素ごとの除算
    ///
    /// 整数型は切り捨て除算。整数のゼロ除算はエラーになる。
    pub fn divide<S>(&self, other: &Series<T, S>, name: &str) -> Result<Self>
    where
        S: Clone + PartialEq,
    {
        self.try_operation(other, "div", name, |position, a, b| {
            a.checked_quotient(b)
                .ok_or(Error::DivisionByZero { position })
        })
    }

    /// 要素ごとの剰余（整数型のみ）
    pub fn modulo<S>(&self, other: &Series<T, S>, name: &str) -> Result<Self>
    where
        S: Clone + PartialEq,
    {
        if T::is_float_kind() {
            return Err(Error::InvalidOperation(
                "浮動小数点数のSeriesには剰余演算を適用できません".to_string(),
            ));
        }

        self.try_operation(other, "mod", name, |position, a, b| {
            a.checked_remainder(b)
                .ok_or(Error::DivisionByZero { position })
        })
    }

    /// 要素ごとのべき乗
    ///
    /// f64で計算して元の型に戻すため、整数型では小数部が切り捨てられる。
    pub fn pow(&self, power: f64, name: &str) -> Self {
        let values = self
            .values
            .iter()
            .map(|&v| T::from_f64_truncating(v.as_f64().powf(power)))
            .collect();

        let name = if name.is_empty() {
            format!("{}_pow_{}", self.name, power)
        } else {
            name.to_string()
        };

        Series::from_parts(name, values, self.index.clone())
    }

    /// 絶対値のSeriesを返す
    pub fn abs(&self) -> Self {
        let values = self.values.iter().map(|&v| v.magnitude()).collect();
        Series::from_parts(self.name.clone(), values, self.index.clone())
    }

    fn try_operation<S, F>(&self, other: &Series<T, S>, op: &str, name: &str, f: F) -> Result<Self>
    where
        S: Clone + PartialEq,
        F: Fn(usize, T, T) -> Result<T>,
    {
        if self.len() != other.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .enumerate()
            .map(|(i, (&a, &b))| f(i, a, b))
            .collect::<Result<Vec<T>>>()?;

        let name = if name.is_empty() {
            format!("{}_{}_{}", self.name, op, other.name)
        } else {
            name.to_string()
        };

        Ok(Series::from_parts(name, values, self.index.clone()))
    }
}
