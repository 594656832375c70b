use wasm_bindgen::{JsCast, JsValue};

/// The error returned by the `try_*` operations.
///
/// The chainable operations never return it: they log it and do nothing instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The tag name is rejected by `document.createElement`.
    InvalidTagName { tag: String, msg: String },
    /// The attribute name is rejected by `setAttribute`.
    InvalidAttributeName { name: String, msg: String },
    /// The selector is rejected by `querySelector` or `querySelectorAll`.
    InvalidSelector { selector: String, msg: String },
    /// Any other exception thrown by the host.
    BackendError { msg: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidTagName { tag, msg } => {
                write!(f, "Cannot create element {:?}: {}", tag, msg)?;
            }
            Error::InvalidAttributeName { name, msg } => {
                write!(f, "Cannot set attribute {:?}: {}", name, msg)?;
            }
            Error::InvalidSelector { selector, msg } => {
                write!(f, "Cannot query selector {:?}: {}", selector, msg)?;
            }
            Error::BackendError { msg } => {
                write!(f, "DOM operation failed: {}", msg)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl Error {
    pub(crate) fn backend(err: &JsValue) -> Self {
        Error::BackendError {
            msg: js_error_message(err),
        }
    }

    pub(crate) fn tag_name(tag: &str, err: &JsValue) -> Self {
        Error::InvalidTagName {
            tag: tag.to_string(),
            msg: js_error_message(err),
        }
    }

    pub(crate) fn attribute_name(name: &str, err: &JsValue) -> Self {
        Error::InvalidAttributeName {
            name: name.to_string(),
            msg: js_error_message(err),
        }
    }

    pub(crate) fn selector(selector: &str, err: &JsValue) -> Self {
        Error::InvalidSelector {
            selector: selector.to_string(),
            msg: js_error_message(err),
        }
    }
}

pub(crate) fn js_error_message(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        err.message().into()
    } else if let Some(s) = err.as_string() {
        s
    } else {
        "(JavaScript Error)".to_string()
    }
}

pub(crate) fn log_error(err: &Error) {
    log::error!("{}", err);
}
