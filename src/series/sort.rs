use std::cmp::Ordering;

use crate::index::Index;

use super::Series;

impl<T, R> Series<T, R>
where
    T: Clone,
    R: Clone + PartialEq,
{
    /// ラベル順に並べ替えた新しいSeriesを返す（安定ソート）
    pub fn sort_by_index(&self, ascending: bool) -> Self
    where
        R: PartialOrd,
    {
        log::trace!("sort_by_index: len={}, ascending={}", self.len(), ascending);
        let labels = self.index.values();
        self.reorder(|&a, &b| directed(&labels[a], &labels[b], ascending))
    }

    /// 値の順に並べ替えた新しいSeriesを返す（安定ソート）
    pub fn sort_by_value(&self, ascending: bool) -> Self
    where
        T: PartialOrd,
    {
        log::trace!("sort_by_value: len={}, ascending={}", self.len(), ascending);
        let values = &self.values;
        self.reorder(|&a, &b| directed(&values[a], &values[b], ascending))
    }

    /// 位置の並べ替え順に従ってラベルと値の組を並べ直す
    fn reorder<F>(&self, compare: F) -> Self
    where
        F: FnMut(&usize, &usize) -> Ordering,
    {
        let mut order: Vec<usize> = (0..self.len()).collect();
        // sort_byは安定ソートなので等しい要素は入力順を保つ
        order.sort_by(compare);

        let labels = self.index.values();
        let values = order.iter().map(|&i| self.values[i].clone()).collect();
        let index = order.iter().map(|&i| labels[i].clone()).collect();

        Series::from_parts(self.name.clone(), values, Index::new(index))
    }
}

// 自身と比較できない値（NaNなど）は方向によらず末尾に置く
fn directed<K: PartialOrd>(a: &K, b: &K, ascending: bool) -> Ordering {
    match (is_unordered(a), is_unordered(b)) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.partial_cmp(b).unwrap_or(Ordering::Equal);
            if ascending {
                ordering
            } else {
                ordering.reverse()
            }
        }
    }
}

fn is_unordered<K: PartialOrd>(key: &K) -> bool {
    key.partial_cmp(key).is_none()
}
