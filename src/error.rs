use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SendError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("MissingField: {field} must be set before a send message can be built.")]
    MissingField { field: String },

    #[error("UnknownTokenType: {token_type} is not a supported token standard.")]
    UnknownTokenType { token_type: String },

    #[error("UnknownFieldKind: {kind} is not a draft field.")]
    UnknownFieldKind { kind: String },
}
