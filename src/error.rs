use thiserror::Error;

/// エラー型の定義
#[derive(Error, Debug)]
pub enum Error {
    #[error("データがありません: {0}")]
    EmptyData(String),

    #[error("長さが一致しません: 期待値 {expected}, 実際 {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("ラベルが見つかりません: {0}")]
    KeyNotFound(String),

    #[error("インデックスが範囲外です: インデックス {index}, サイズ {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("無効な操作です: {0}")]
    InvalidOperation(String),

    #[error("無効な入力です: {0}")]
    InvalidInput(String),

    #[error("ゼロ除算です: 位置 {position}")]
    DivisionByZero { position: usize },

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("入出力エラー")]
    Io(#[source] std::io::Error),
}

/// Resultの型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
