use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Blank/whitespace-only title on add or update.
    /// Message ini yang ditampilkan di alert dialog user.
    #[error("Please Insert Title")]
    EmptyTitle,
    #[error("Menu item {0} not found")]
    NotFound(i32),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
