// src/error.rs

use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMsgKind {
    Success,
    Warn,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct UserMsg {
    pub kind: UserMsgKind,
    pub short: &'static str,
    pub detail: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    // --------------------------------------------------
    // generic / plumbing
    // --------------------------------------------------
    Msg(String),

    // --------------------------------------------------
    // token decoding
    // --------------------------------------------------
    InvalidBase64(String),
    InvalidUtf8(String),
    InvalidJson(String),
    RecordShape(String),

    // --------------------------------------------------
    // record access
    // --------------------------------------------------
    UnknownField { section: String, field: String },

    // --------------------------------------------------
    // export / clipboard
    // --------------------------------------------------
    ExportSerialize(String),
    ExportWriteFailed(String),
    ExportRenameFailed(String),
    ExportCancelled,
    ClipboardUnavailable(String),
}

impl AppError {
    pub fn user_msg(&self) -> UserMsg {
        use AppError::*;

        let mut kind = UserMsgKind::Error;
        let detail = Some(self.to_string());

        let short: &'static str = match self {
            Msg(_) => "A operação falhou.",

            InvalidBase64(_) | InvalidUtf8(_) | InvalidJson(_) | RecordShape(_) => {
                "Link de respostas inválido."
            }

            UnknownField { .. } => "Campo desconhecido.",

            ExportSerialize(_) | ExportWriteFailed(_) | ExportRenameFailed(_) => {
                "Falha ao salvar o arquivo de respostas."
            }
            ExportCancelled => {
                kind = UserMsgKind::Info;
                "Download cancelado."
            }
            ClipboardUnavailable(_) => {
                kind = UserMsgKind::Warn;
                "Não foi possível copiar."
            }
        };

        UserMsg {
            kind,
            short,
            detail,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AppError::*;

        match self {
            Msg(s) => write!(f, "{s}"),

            InvalidBase64(s) => write!(f, "invalid base64 token: {s}"),
            InvalidUtf8(s) => write!(f, "invalid utf-8 in token: {s}"),
            InvalidJson(s) => write!(f, "invalid json in token: {s}"),
            RecordShape(s) => write!(f, "record shape mismatch: {s}"),

            UnknownField { section, field } => {
                write!(f, "unknown field: {section}.{field}")
            }

            ExportSerialize(s) => write!(f, "export serialize failed: {s}"),
            ExportWriteFailed(s) => write!(f, "export write failed: {s}"),
            ExportRenameFailed(s) => write!(f, "export rename failed: {s}"),
            ExportCancelled => write!(f, "export cancelled"),
            ClipboardUnavailable(s) => write!(f, "clipboard unavailable: {s}"),
        }
    }
}

impl std::error::Error for AppError {}
