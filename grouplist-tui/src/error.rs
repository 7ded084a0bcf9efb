use thiserror::Error;

use grouplist::WidgetError;

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Widget(#[from] WidgetError),
}
