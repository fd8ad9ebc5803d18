use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("email request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("email API error ({status}): {message}")]
    Api { status: u16, message: String },
}
