mod arithmetic;
mod numeric;
mod reshape;
mod sort;
mod stats;

use std::fmt::{self, Debug, Display, Write};

use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use crate::index::Index;

/// Series構造体: ラベル付きの一次元の値の配列
///
/// `values[i]`には`index[i]`のラベルが対応する。値とラベルの長さは常に等しく、
/// 空のSeriesは作成できない。
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T, R = usize> {
    /// 名前（空文字列も可）
    name: String,

    /// Seriesのデータ値
    values: Vec<T>,

    /// インデックスラベル
    index: Index<R>,
}

/// 数値型のSeries
///
/// 値の型が[`Numeric`](crate::Numeric)を満たすSeriesには算術・統計演算が追加される。
pub type NumericSeries<T, R = usize> = Series<T, R>;

// 基本実装
impl<T, R> Series<T, R>
where
    T: Clone,
    R: Clone + PartialEq,
{
    /// 値とインデックスからSeriesを作成
    pub fn new(name: impl Into<String>, values: Vec<T>, index: Vec<R>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyData(
                "値のないSeriesは作成できません".to_string(),
            ));
        }

        if index.len() != values.len() {
            return Err(Error::LengthMismatch {
                expected: values.len(),
                actual: index.len(),
            });
        }

        Ok(Series {
            name: name.into(),
            values,
            index: Index::new(index),
        })
    }

    /// Seriesの長さを取得
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Seriesが空かどうか
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 名前を取得
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 名前を設定
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// 名前を設定（所有権を移動）
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 値の配列のコピーを取得
    pub fn values(&self) -> Vec<T> {
        self.values.clone()
    }

    /// インデックスのコピーを取得
    pub fn index(&self) -> Vec<R> {
        self.index.values().to_vec()
    }

    /// ラベルから値を取得（重複時は最初の一致）
    pub fn get(&self, label: &R) -> Result<&T>
    where
        R: Debug,
    {
        match self.index.get_loc(label) {
            Some(pos) => Ok(&self.values[pos]),
            None => Err(Error::KeyNotFound(format!("{:?}", label))),
        }
    }

    /// 位置から値を取得
    pub fn at(&self, pos: usize) -> Result<&T> {
        self.values.get(pos).ok_or(Error::IndexOutOfBounds {
            index: pos,
            size: self.len(),
        })
    }

    /// 位置からラベルと値を取得
    pub fn at_index(&self, pos: usize) -> Result<(&R, &T)> {
        match (self.index.get_value(pos), self.values.get(pos)) {
            (Some(label), Some(value)) => Ok((label, value)),
            _ => Err(Error::IndexOutOfBounds {
                index: pos,
                size: self.len(),
            }),
        }
    }

    /// (ラベル, 値)の組を順に返すイテレータ
    pub fn iter(&self) -> impl Iterator<Item = (&R, &T)> + '_ {
        self.index.iter().zip(self.values.iter())
    }

    /// 名前・値・インデックスに分解
    pub fn into_parts(self) -> (String, Vec<T>, Vec<R>) {
        (self.name, self.values, self.index.into_vec())
    }

    /// 検証済みの値とインデックスから組み立てる
    fn from_parts(name: String, values: Vec<T>, index: Index<R>) -> Self {
        debug_assert!(!values.is_empty() && values.len() == index.len());
        Series {
            name,
            values,
            index,
        }
    }
}

impl<T> Series<T, usize>
where
    T: Clone,
{
    /// 0..n-1の整数インデックス付きでSeriesを作成
    pub fn with_default_index(name: impl Into<String>, values: Vec<T>) -> Result<Self> {
        let index = Index::from_range(values.len()).into_vec();
        Series::new(name, values, index)
    }
}

impl<T, R> Series<T, R>
where
    T: Clone + Display,
    R: Clone + PartialEq + Display,
{
    /// 表示設定を指定して文字列化
    pub fn to_string_with(&self, config: &DisplayConfig) -> String {
        let mut out = String::new();

        if config.show_name && !self.name.is_empty() {
            let _ = writeln!(out, "{}", self.name);
        }

        for (label, value) in self.iter().take(config.max_rows) {
            let _ = writeln!(out, "{}: {}", label, value);
        }

        if self.len() > config.max_rows {
            let _ = writeln!(out, "... ({} more)", self.len() - config.max_rows);
        }

        out
    }
}

impl<T, R> Display for Series<T, R>
where
    T: Clone + Display,
    R: Clone + PartialEq + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&DisplayConfig::default()))
    }
}
