use pango::{Error, Series};

fn main() -> Result<(), Error> {
    println!("=== Pango 基本使用例 ===");

    // カスタムインデックス付きのSeries
    let ages = Series::new(
        "Age",
        vec![25, 30, 35],
        vec!["Alice".to_string(), "Bob".to_string(), "Charlie".to_string()],
    )?;

    println!("{}", ages);
    println!("{}", ages.head(2)?);
    println!("{}", ages.tail(2)?);

    // 数値シリーズの統計
    println!("=== 年齢シリーズの統計 ===");
    println!("合計: {}", ages.sum());
    println!("平均: {}", ages.mean());
    println!("最小: {}", ages.min()?);
    println!("最大: {} ({})", ages.max()?, ages.arg_max()?);
    println!("標準偏差: {:.4}", ages.std_dev(1)?);

    let heights = Series::with_default_index("Height", vec![160, 176, 182])?;
    println!("相関係数: {:.4}", ages.correlation(&heights)?);

    Ok(())
}
