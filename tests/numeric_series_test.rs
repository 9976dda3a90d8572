use pango::{Error, NumericSeries, Series};

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_series_numeric_operations() {
    // 整数型シリーズでの集約
    let series = Series::with_default_index("numbers", vec![10, 20, 30, 40, 50]).unwrap();

    assert_eq!(series.sum(), 150);
    assert!((series.mean() - 30.0).abs() < 1e-10);
    assert_eq!(series.min().unwrap(), 10);
    assert_eq!(series.max().unwrap(), 50);
}

#[test]
fn test_mean_is_floating() {
    // 整数の平均は浮動小数点で返る
    let series = Series::with_default_index("odd", vec![1_u8, 2]).unwrap();
    assert!((series.mean() - 1.5).abs() < 1e-10);
}

#[test]
fn test_integer_sum_wraps_on_overflow() {
    // 整数の合計はラップアラウンドする
    let series = Series::with_default_index("small", vec![200_u8, 100]).unwrap();
    assert_eq!(series.sum(), 44);
    assert!((series.mean() - 22.0).abs() < 1e-10);
}

#[test]
fn test_cum_sum_wraps_on_overflow() {
    let series = Series::with_default_index("big", vec![i32::MAX, 1, 1]).unwrap();
    assert_eq!(series.cum_sum().values(), vec![i32::MAX, i32::MIN, i32::MIN + 1]);
}

#[test]
fn test_std_dev() {
    let series: NumericSeries<f64> =
        Series::with_default_index("s", vec![2.0, 4.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();

    assert!((series.std_dev(0).unwrap() - 1.9116).abs() < 0.01);
    assert!((series.std_dev(1).unwrap() - 2.0276).abs() < 0.01);
    assert!((series.variance(0).unwrap() - 3.654321).abs() < 1e-5);
}

#[test]
fn test_std_dev_with_dof_equal_to_len() {
    // n == dofはゼロ除算となり浮動小数点の規則に従う
    let series = Series::with_default_index("s", vec![1.0, 3.0]).unwrap();
    assert!(series.std_dev(2).unwrap().is_infinite());

    let constant = Series::with_default_index("c", vec![4, 4]).unwrap();
    assert!(constant.std_dev(2).unwrap().is_nan());
}

#[test]
fn test_extremum_ties_use_first_occurrence() {
    let series = Series::new("s", vec![5, 9, 8, 9, 1], labels(&["a", "b", "c", "d", "e"])).unwrap();
    assert_eq!(series.arg_max().unwrap(), "b");
    assert_eq!(series.max().unwrap(), 9);

    let mins = Series::new("m", vec![3, 1, 2, 1], labels(&["a", "b", "c", "d"])).unwrap();
    assert_eq!(mins.arg_min().unwrap(), 1);
    assert_eq!(mins.idx_min().unwrap(), "b");
    assert_eq!(mins.min().unwrap(), 1);
}

#[test]
fn test_arg_min_returns_position() {
    // arg_minは位置、idx_minはラベルを返す
    let series = Series::new("s", vec![4.0, -2.0, 7.0], vec![100, 200, 300]).unwrap();
    assert_eq!(series.arg_min().unwrap(), 1);
    assert_eq!(series.idx_min().unwrap(), &200);
    assert_eq!(series.arg_max().unwrap(), &300);
}

#[test]
fn test_cum_sum() {
    let series = Series::new("vals", vec![1, 2, 3, 4, 5], labels(&["a", "b", "c", "d", "e"])).unwrap();
    let cumulative = series.cum_sum();

    assert_eq!(cumulative.values(), vec![1, 3, 6, 10, 15]);
    assert_eq!(cumulative.name(), "vals_cumsum");
    assert_eq!(cumulative.index(), series.index());
}

#[test]
fn test_drop_na() {
    let series = Series::new(
        "s",
        vec![1.0, f64::NAN, 3.0, f64::NAN, 5.0],
        labels(&["a", "b", "c", "d", "e"]),
    )
    .unwrap();

    assert!(series.has_na());
    assert_eq!(series.na_count(), 2);

    let dropped = series.drop_na().unwrap();
    assert_eq!(dropped.values(), vec![1.0, 3.0, 5.0]);
    assert_eq!(dropped.index(), labels(&["a", "c", "e"]));
    assert!(!dropped.has_na());
}

#[test]
fn test_drop_na_integers_pass_through() {
    let series = Series::with_default_index("ints", vec![1_i64, 2, 3]).unwrap();
    assert_eq!(series.drop_na().unwrap(), series);
}

#[test]
fn test_drop_na_all_nan() {
    let series = Series::with_default_index("nan", vec![f32::NAN, f32::NAN]).unwrap();
    assert!(matches!(series.drop_na(), Err(Error::EmptyData(_))));
}

#[test]
fn test_fill_na() {
    let series = Series::with_default_index("s", vec![1.0, f64::NAN, 3.0]).unwrap();
    assert_eq!(series.fill_na(0.0).values(), vec![1.0, 0.0, 3.0]);
}

#[test]
fn test_elementwise_arithmetic() {
    let a = Series::new("a", vec![10, 20, 30], labels(&["x", "y", "z"])).unwrap();
    let b = Series::with_default_index("b", vec![3, 4, 7]).unwrap();

    let sum = a.add(&b, "").unwrap();
    assert_eq!(sum.values(), vec![13, 24, 37]);
    assert_eq!(sum.name(), "a_add_b");
    // 結果は左辺のラベルを使う
    assert_eq!(sum.index(), labels(&["x", "y", "z"]));

    assert_eq!(a.subtract(&b, "").unwrap().values(), vec![7, 16, 23]);
    assert_eq!(a.subtract(&b, "").unwrap().name(), "a_sub_b");
    assert_eq!(a.multiply(&b, "prod").unwrap().values(), vec![30, 80, 210]);
    assert_eq!(a.multiply(&b, "prod").unwrap().name(), "prod");

    // 整数の除算は切り捨て
    let quotient = a.divide(&b, "").unwrap();
    assert_eq!(quotient.values(), vec![3, 5, 4]);
    assert_eq!(quotient.name(), "a_div_b");
}

#[test]
fn test_custom_operation() {
    let a = Series::with_default_index("a", vec![1.0, 5.0, 3.0]).unwrap();
    let b = Series::with_default_index("b", vec![4.0, 2.0, 3.0]).unwrap();

    let maxed = a.operation(&b, |x, y| if x > y { x } else { y }, "").unwrap();
    assert_eq!(maxed.values(), vec![4.0, 5.0, 3.0]);
    assert_eq!(maxed.name(), "a_op_b");
}

#[test]
fn test_length_mismatch() {
    let a = Series::with_default_index("a", vec![1, 2, 3]).unwrap();
    let b = Series::with_default_index("b", vec![1, 2]).unwrap();

    assert!(matches!(
        a.add(&b, ""),
        Err(Error::LengthMismatch {
            expected: 3,
            actual: 2
        })
    ));
    assert!(a.operation(&b, |x, y| x + y, "").is_err());
    assert!(a.covariance(&b, 0).is_err());
    assert!(a.correlation(&b).is_err());
}

#[test]
fn test_integer_division_by_zero() {
    let a = Series::with_default_index("a", vec![1, 2, 3]).unwrap();
    let b = Series::with_default_index("b", vec![1, 0, 1]).unwrap();

    assert!(matches!(
        a.divide(&b, ""),
        Err(Error::DivisionByZero { position: 1 })
    ));
    assert!(a.modulo(&b, "").is_err());

    // 浮動小数点の除算はInfになる
    let x = Series::with_default_index("x", vec![1.0_f64]).unwrap();
    let zero = Series::with_default_index("zero", vec![0.0]).unwrap();
    assert!(x.divide(&zero, "").unwrap().at(0).unwrap().is_infinite());
}

#[test]
fn test_modulo() {
    let a = Series::with_default_index("a", vec![7, -7, 9]).unwrap();
    let b = Series::with_default_index("b", vec![3, 3, 4]).unwrap();

    let remainder = a.modulo(&b, "").unwrap();
    assert_eq!(remainder.values(), vec![1, -1, 1]);
    assert_eq!(remainder.name(), "a_mod_b");

    // 浮動小数点のシリーズには適用できない
    let f = Series::with_default_index("f", vec![7.0, 8.0]).unwrap();
    assert!(matches!(f.modulo(&f, ""), Err(Error::InvalidOperation(_))));
}

#[test]
fn test_pow() {
    let floats = Series::with_default_index("f", vec![2.0, 3.0, 4.0]).unwrap();
    let squared = floats.pow(2.0, "");
    assert_eq!(squared.values(), vec![4.0, 9.0, 16.0]);
    assert_eq!(squared.name(), "f_pow_2");

    // 整数型では小数部が切り捨てられる
    let ints = Series::with_default_index("i", vec![2, 3, 10]).unwrap();
    let roots = ints.pow(0.5, "roots");
    assert_eq!(roots.values(), vec![1, 1, 3]);
    assert_eq!(roots.name(), "roots");
}

#[test]
fn test_abs() {
    let series = Series::new("s", vec![-3, 0, 4, -1], labels(&["a", "b", "c", "d"])).unwrap();
    let absolute = series.abs();
    assert_eq!(absolute.values(), vec![3, 0, 4, 1]);
    assert_eq!(absolute.name(), "s");
    assert_eq!(absolute.index(), series.index());

    let floats = Series::with_default_index("f", vec![-1.5_f32, 2.5]).unwrap();
    assert_eq!(floats.abs().values(), vec![1.5, 2.5]);

    let unsigned = Series::with_default_index("u", vec![3_u16, 0]).unwrap();
    assert_eq!(unsigned.abs().values(), vec![3, 0]);
}

#[test]
fn test_covariance() {
    let x = Series::with_default_index("x", vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    let y = Series::with_default_index("y", vec![5.0, 4.0, 3.0, 2.0, 1.0]).unwrap();

    assert!((x.covariance(&x, 1).unwrap() - 2.5).abs() < 1e-10);
    assert!((x.covariance(&y, 1).unwrap() + 2.5).abs() < 1e-10);
    assert!((x.covariance(&y, 0).unwrap() + 2.0).abs() < 1e-10);
}

#[test]
fn test_correlation() {
    let x = Series::with_default_index("x", vec![1, 2, 3, 4, 5]).unwrap();
    let y = Series::with_default_index("y", vec![5, 4, 3, 2, 1]).unwrap();
    assert!((x.correlation(&y).unwrap() + 1.0).abs() < 1e-4);
    assert!((x.correlation(&x).unwrap() - 1.0).abs() < 1e-4);
}

#[test]
fn test_correlation_with_constant_series() {
    // 定数のシリーズとの相関は0.0
    let x = Series::with_default_index("x", vec![1.0, 2.0, 3.0]).unwrap();
    let constant = Series::with_default_index("c", vec![2.0, 2.0, 2.0]).unwrap();
    assert_eq!(x.correlation(&constant).unwrap(), 0.0);
}

#[test]
fn test_numeric_ops_after_reshape() {
    // 並べ替えや切り出しの後も数値演算が使える
    let series = Series::new("s", vec![4, 1, 3, 2], labels(&["d", "a", "c", "b"])).unwrap();
    let top = series.sort_by_value(false).head(2).unwrap();
    assert_eq!(top.sum(), 7);
    assert_eq!(top.arg_max().unwrap(), "d");
}
