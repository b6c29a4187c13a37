//! Utilities for error handling of the driver.
//!
//! Errors of other crates are not converted directly: they are wrapped
//! with a message describing what the driver was doing, using [`Context`].

use std::error::Error as StdError;
use std::fmt;

/// Result of any operation which can return an error.
pub type Result<T> = std::result::Result<T, Error>;

type Source = Box<dyn StdError + Send + Sync + 'static>;

/// General error type of the driver.
///
/// `{}` prints the message only. `{:#}` and `{:?}` print it followed by every
/// error of the source chain, separated by `": "`.
pub struct Error {
    message: String,
    source: Option<Source>,
}

impl Error {
    /// Creates an error which has no source.
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display,
    {
        Self {
            message: message.to_string(),
            source: None,
        }
    }

    /// Message of this error, without its source chain.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Iterates over the causes of this error, nearest first.
    pub fn causes(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        std::iter::successors(self.source(), |&cause| cause.source())
    }

    fn wrap<M>(message: M, source: Source) -> Self
    where
        M: fmt::Display,
    {
        Self {
            message: message.to_string(),
            source: Some(source),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)?;
        if f.alternate() {
            self.causes().try_for_each(|cause| write!(f, ": {}", cause))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#}", self)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_deref().map(|source| source as _)
    }
}

/// Extension which attaches a message to failures of other crates.
pub trait Context<T> {
    /// Wraps the failure, if any, into [`Error`] with the given message.
    fn context<M>(self, message: M) -> Result<T>
    where
        M: fmt::Display;

    /// Same as [`Context::context`], but builds the message only on failure.
    fn with_context<M, F>(self, message: F) -> Result<T>
    where
        M: fmt::Display,
        F: FnOnce() -> M;
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<M>(self, message: M) -> Result<T>
    where
        M: fmt::Display,
    {
        self.map_err(|error| Error::wrap(message, Box::new(error)))
    }

    fn with_context<M, F>(self, message: F) -> Result<T>
    where
        M: fmt::Display,
        F: FnOnce() -> M,
    {
        self.map_err(|error| Error::wrap(message(), Box::new(error)))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<M>(self, message: M) -> Result<T>
    where
        M: fmt::Display,
    {
        self.ok_or_else(|| Error::msg(message))
    }

    fn with_context<M, F>(self, message: F) -> Result<T>
    where
        M: fmt::Display,
        F: FnOnce() -> M,
    {
        self.ok_or_else(|| Error::msg(message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let error = Error::msg("no source");
        assert_eq!(error.to_string(), "no source");
        assert!(error.source().is_none());
        assert_eq!(error.causes().count(), 0);

        let source = "x".parse::<u64>().unwrap_err();
        let error = Err::<(), _>(source.clone())
            .context("invalid frame count")
            .unwrap_err();
        assert_eq!(error.message(), "invalid frame count");
        assert_eq!(error.to_string(), "invalid frame count");
        assert_eq!(format!("{:#}", error), format!("invalid frame count: {}", source));
        assert_eq!(format!("{:?}", error), format!("{:#}", error));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_chain() {
        let inner = "x".parse::<u64>().unwrap_err();
        let middle = Err::<(), _>(inner.clone()).context("bad number").unwrap_err();
        let outer = Err::<(), _>(middle).context("bad settings").unwrap_err();

        assert_eq!(outer.causes().count(), 2);
        assert_eq!(outer.to_string(), "bad settings");
        assert_eq!(
            format!("{:#}", outer),
            format!("bad settings: bad number: {}", inner),
        );
    }

    #[test]
    fn test_context() {
        let ok: std::result::Result<u64, std::num::ParseIntError> = "7".parse();
        assert_eq!(ok.context("unused").unwrap(), 7);

        let error = "seven".parse::<u64>().context("cannot parse").unwrap_err();
        assert_eq!(error.message(), "cannot parse");
        assert!(format!("{:#}", error).starts_with("cannot parse: "));

        let mut built = false;
        let ok = "8".parse::<u64>().with_context(|| {
            built = true;
            "unused"
        });
        assert_eq!(ok.unwrap(), 8);
        assert!(!built);
    }

    #[test]
    fn test_option_context() {
        assert_eq!(Some(3).context("missing").unwrap(), 3);

        let error = None::<u8>.with_context(|| format!("missing {}", "value")).unwrap_err();
        assert_eq!(error.to_string(), "missing value");
        assert!(error.source().is_none());
    }
}
