//! Database error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// Whether the failure looks like a database that is not ready yet.
    ///
    /// Connection, pool and server-side errors are transient: a starting
    /// MariaDB refuses connections and rejects logins until its init scripts
    /// finish. Configuration, protocol and decode errors will not go away on
    /// their own.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Sqlx(e) => matches!(
                e,
                sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::WorkerCrashed
                    | sqlx::Error::Database(_)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn connection_refused_is_transient() {
        let err = DbError::from(sqlx::Error::Io(io::Error::from(io::ErrorKind::ConnectionRefused)));
        assert!(err.is_transient());
    }

    #[test]
    fn pool_timeout_is_transient() {
        assert!(DbError::from(sqlx::Error::PoolTimedOut).is_transient());
    }

    #[test]
    fn protocol_error_is_not_transient() {
        let err = DbError::from(sqlx::Error::Protocol("unexpected packet".into()));
        assert!(!err.is_transient());
    }

    #[test]
    fn missing_row_is_not_transient() {
        assert!(!DbError::from(sqlx::Error::RowNotFound).is_transient());
    }
}
