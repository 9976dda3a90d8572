use std::fmt::Debug;

/// インデックス構造体
///
/// Seriesの各値に対応するラベル列を表現する。
/// ラベルの一意性は要求せず、検索は先頭から最初に一致した位置を返す。
#[derive(Debug, Clone, PartialEq)]
pub struct Index<R> {
    /// インデックス値
    values: Vec<R>,
}

impl<R> Index<R>
where
    R: PartialEq,
{
    /// 新しいインデックスを作成
    pub fn new(values: Vec<R>) -> Self {
        Index { values }
    }

    /// インデックス長を取得
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// インデックスが空かどうか
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 値から位置を取得（重複時は最初の位置）
    pub fn get_loc(&self, key: &R) -> Option<usize> {
        self.values.iter().position(|v| v == key)
    }

    /// 位置から値を取得
    pub fn get_value(&self, pos: usize) -> Option<&R> {
        self.values.get(pos)
    }

    /// 全ての値を取得
    pub fn values(&self) -> &[R] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.values.iter()
    }

    pub(crate) fn into_vec(self) -> Vec<R> {
        self.values
    }

    /// 末尾にラベルを連結
    pub(crate) fn extend_from(&mut self, other: &Index<R>)
    where
        R: Clone,
    {
        self.values.extend(other.values.iter().cloned());
    }

    /// 先頭にラベルを連結
    pub(crate) fn prepend_from(&mut self, other: &Index<R>)
    where
        R: Clone,
    {
        let mut values = Vec::with_capacity(other.len() + self.len());
        values.extend(other.values.iter().cloned());
        values.append(&mut self.values);
        self.values = values;
    }
}

impl Index<usize> {
    /// 0..nの整数範囲からインデックスを作成
    pub fn from_range(len: usize) -> Index<usize> {
        Index::new((0..len).collect())
    }
}

/// 整数インデックス型のエイリアス
pub type RangeIndex = Index<usize>;

/// 文字列インデックス型のエイリアス
pub type StringIndex = Index<String>;
