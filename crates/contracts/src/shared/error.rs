use thiserror::Error;

/// Uzak depo erişim hataları.
///
/// `Config` ölümcüldür ve init çağıranına yükselir; `Fetch` ile
/// `NotFound` kontrolcü sınırında yakalanıp yerelleştirilmiş yer
/// tutuculara çevrilir.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("store configuration invalid: {0}")]
    Config(String),

    #[error("store read failed: {0}")]
    Fetch(String),

    #[error("no matching row: {0}")]
    NotFound(String),
}
