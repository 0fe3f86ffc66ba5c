use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurveTreeError {
    #[error("not implemented: {0}")]
    NotImplemented(String),
    #[error("invalid parameter \"{name}\": {message}")]
    InvalidParameter { name: String, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CurveTreeError {
    pub fn not_implemented(msg: &str) -> Self {
        return CurveTreeError::NotImplemented(String::from(msg));
    }

    pub fn invalid_parameter(name: &str, message: &str) -> Self {
        return CurveTreeError::InvalidParameter {
            name: String::from(name),
            message: String::from(message),
        };
    }
}
