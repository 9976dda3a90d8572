//! 数値型の制約
//!
//! `Numeric`はSeriesの数値演算で利用できる値の型を表すシールドトレイトです。
//! 実装は符号付き整数、符号なし整数、浮動小数点数の各プリミティブ型に限られ、
//! NaN判定や剰余演算などの型ごとの差異はコンパイル時に解決されます。

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;

mod private {
    pub trait Sealed {}
}

/// 数値型の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    /// 符号付き整数
    SignedInt,
    /// 符号なし整数
    UnsignedInt,
    /// 浮動小数点数
    Float,
}

/// Seriesの数値演算で利用できる値の型
pub trait Numeric:
    private::Sealed
    + Copy
    + Debug
    + Display
    + PartialOrd
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// 型の種別
    const KIND: NumericKind;

    /// NaNかどうか（整数型は常にfalse）
    fn is_nan(self) -> bool;

    /// 符号比較による絶対値
    ///
    /// 符号付き整数の最小値はラップアラウンドしてそのまま返る。
    fn magnitude(self) -> Self;

    /// 加算（整数型はオーバーフロー時にラップアラウンド）
    fn wrapping_add(self, rhs: Self) -> Self;

    /// 除算（整数のゼロ除算・オーバーフロー時はNone）
    fn checked_quotient(self, rhs: Self) -> Option<Self>;

    /// 剰余（整数のみ。浮動小数点数とゼロ除算はNone）
    fn checked_remainder(self, rhs: Self) -> Option<Self>;

    /// f64へ変換
    fn as_f64(self) -> f64;

    /// f64から変換（整数型はゼロ方向へ切り捨て、範囲外は飽和）
    fn from_f64_truncating(v: f64) -> Self;

    /// 浮動小数点型かどうか
    fn is_float_kind() -> bool {
        Self::KIND == NumericKind::Float
    }
}

macro_rules! impl_numeric_signed {
    ($($ty:ty),*) => {
        $(
            impl private::Sealed for $ty {}

            impl Numeric for $ty {
                const KIND: NumericKind = NumericKind::SignedInt;

                #[inline]
                fn is_nan(self) -> bool {
                    false
                }
                #[inline]
                fn magnitude(self) -> Self {
                    if self < 0 {
                        self.wrapping_neg()
                    } else {
                        self
                    }
                }
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }
                #[inline]
                fn checked_quotient(self, rhs: Self) -> Option<Self> {
                    self.checked_div(rhs)
                }
                #[inline]
                fn checked_remainder(self, rhs: Self) -> Option<Self> {
                    self.checked_rem(rhs)
                }
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
                #[inline]
                fn from_f64_truncating(v: f64) -> Self {
                    v as Self
                }
            }
        )*
    };
}

macro_rules! impl_numeric_unsigned {
    ($($ty:ty),*) => {
        $(
            impl private::Sealed for $ty {}

            impl Numeric for $ty {
                const KIND: NumericKind = NumericKind::UnsignedInt;

                #[inline]
                fn is_nan(self) -> bool {
                    false
                }
                #[inline]
                fn magnitude(self) -> Self {
                    self
                }
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }
                #[inline]
                fn checked_quotient(self, rhs: Self) -> Option<Self> {
                    self.checked_div(rhs)
                }
                #[inline]
                fn checked_remainder(self, rhs: Self) -> Option<Self> {
                    self.checked_rem(rhs)
                }
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
                #[inline]
                fn from_f64_truncating(v: f64) -> Self {
                    v as Self
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($ty:ty),*) => {
        $(
            impl private::Sealed for $ty {}

            impl Numeric for $ty {
                const KIND: NumericKind = NumericKind::Float;

                #[inline]
                fn is_nan(self) -> bool {
                    <$ty>::is_nan(self)
                }
                #[inline]
                fn magnitude(self) -> Self {
                    if self < 0.0 {
                        -self
                    } else {
                        self
                    }
                }
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }
                #[inline]
                fn checked_quotient(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }
                #[inline]
                fn checked_remainder(self, _rhs: Self) -> Option<Self> {
                    None
                }
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
                #[inline]
                fn from_f64_truncating(v: f64) -> Self {
                    v as Self
                }
            }
        )*
    };
}

impl_numeric_signed!(i8, i16, i32, i64, i128, isize);
impl_numeric_unsigned!(u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);
