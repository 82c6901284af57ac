/// Failure surface shared by every engine call. Each call is fire-once:
/// nothing here is retried, and no cause inference happens on top of what
/// the transport reported.
#[derive(Debug)]
pub enum ClientError {
    /// Operator-entered JSON failed to parse; no request was sent.
    Parse(String),
    /// The request did not complete (connect, I/O, decode).
    Transport(String),
    /// The engine answered with a non-2xx status.
    Rejected(u16),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Transport(e) => write!(f, "transport: {e}"),
            Self::Rejected(code) => write!(f, "rejected with status {code}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

pub(crate) fn check_status(resp: &reqwest::Response) -> Result<(), ClientError> {
    let status = resp.status().as_u16();
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ClientError::Rejected(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert!(ClientError::Rejected(503).to_string().contains("503"));
        assert!(ClientError::Parse("bad".into()).to_string().contains("bad"));
        assert!(ClientError::Transport("refused".into())
            .to_string()
            .starts_with("transport"));
    }
}
