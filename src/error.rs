use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("signature cannot be empty")]
    EmptySignature,

    #[error("invalid RSA private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid RSA public key: {0}")]
    InvalidPublicKey(String),

    #[error("malformed armor: {0}")]
    MalformedArmor(String),

    #[error("malformed signature encoding: {0}")]
    MalformedSignatureEncoding(#[from] base64::DecodeError),

    #[error("public key is neither a PKCS#1 nor a SubjectPublicKeyInfo structure")]
    UnsupportedKeyFormat,

    #[error("parsed public key is not RSA")]
    NotRsaKey,

    #[error("malformed PKCS#1 private key: {0}")]
    MalformedPrivateKey(String),

    #[error("Signature invalid")]
    SignatureInvalid,

    #[error("relay queue is full")]
    RelayBusy,

    #[error("failed to deliver envelope: {0}")]
    Delivery(String),

    #[error("crypto error: {0}")]
    Crypto(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rsa::Error> for Error {
    fn from(err: rsa::Error) -> Self {
        Error::Crypto(err.to_string())
    }
}

/// Broad category of a failure, used to pick a response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The request was malformed; the caller can fix it.
    Input,
    /// The check ran and the answer is "no".
    Mismatch,
    /// Transient backpressure; the caller may retry.
    Capacity,
    /// The remote peer could not be reached or refused the envelope.
    Delivery,
    Internal,
}

impl Error {
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::InvalidRequest(_)
            | Error::EmptyMessage
            | Error::EmptySignature
            | Error::InvalidPrivateKey(_)
            | Error::InvalidPublicKey(_)
            | Error::MalformedArmor(_)
            | Error::MalformedSignatureEncoding(_)
            | Error::UnsupportedKeyFormat
            | Error::NotRsaKey
            | Error::MalformedPrivateKey(_) => ErrorClass::Input,
            Error::SignatureInvalid => ErrorClass::Mismatch,
            Error::RelayBusy => ErrorClass::Capacity,
            Error::Delivery(_) => ErrorClass::Delivery,
            Error::Crypto(_) | Error::Json(_) | Error::Io(_) => ErrorClass::Internal,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidRequest(_) => ErrorCode::InvalidRequest,
            Error::EmptyMessage => ErrorCode::EmptyMessage,
            Error::EmptySignature => ErrorCode::EmptySignature,
            Error::InvalidPrivateKey(_) => ErrorCode::InvalidPrivateKey,
            Error::InvalidPublicKey(_) => ErrorCode::InvalidPublicKey,
            Error::MalformedArmor(_) => ErrorCode::MalformedArmor,
            Error::MalformedSignatureEncoding(_) => ErrorCode::MalformedSignatureEncoding,
            Error::UnsupportedKeyFormat => ErrorCode::UnsupportedKeyFormat,
            Error::NotRsaKey => ErrorCode::NotRsaKey,
            Error::MalformedPrivateKey(_) => ErrorCode::MalformedPrivateKey,
            Error::SignatureInvalid => ErrorCode::SignatureInvalid,
            Error::RelayBusy => ErrorCode::RelayBusy,
            Error::Delivery(_) => ErrorCode::DeliveryFailed,
            Error::Crypto(_) | Error::Json(_) | Error::Io(_) => ErrorCode::Internal,
        }
    }
}

/// Stable, machine-checkable reason codes carried in error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidRequest,
    EmptyMessage,
    EmptySignature,
    InvalidPrivateKey,
    InvalidPublicKey,
    MalformedArmor,
    MalformedSignatureEncoding,
    UnsupportedKeyFormat,
    NotRsaKey,
    MalformedPrivateKey,
    SignatureInvalid,
    RelayBusy,
    DeliveryFailed,
    Internal,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::EmptyMessage => "EMPTY_MESSAGE",
            ErrorCode::EmptySignature => "EMPTY_SIGNATURE",
            ErrorCode::InvalidPrivateKey => "INVALID_PRIVATE_KEY",
            ErrorCode::InvalidPublicKey => "INVALID_PUBLIC_KEY",
            ErrorCode::MalformedArmor => "MALFORMED_ARMOR",
            ErrorCode::MalformedSignatureEncoding => "MALFORMED_SIGNATURE_ENCODING",
            ErrorCode::UnsupportedKeyFormat => "UNSUPPORTED_KEY_FORMAT",
            ErrorCode::NotRsaKey => "NOT_RSA_KEY",
            ErrorCode::MalformedPrivateKey => "MALFORMED_PRIVATE_KEY",
            ErrorCode::SignatureInvalid => "SIGNATURE_INVALID",
            ErrorCode::RelayBusy => "RELAY_BUSY",
            ErrorCode::DeliveryFailed => "DELIVERY_FAILED",
            ErrorCode::Internal => "INTERNAL",
        };
        write!(f, "{}", s)
    }
}
