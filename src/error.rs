//! Errors returned by the Pokémon API, and helpers to attach context to them.
//!
//! Every fallible function in the crate returns [`Result`]. When the service answers an HTTP
//! request with an error, the variant decides the status code (see [`api::errors`](crate::api::errors)).

use std::env;
use std::ffi::OsString;
use std::num::ParseIntError;

use diesel_async::pooled_connection::deadpool::PoolError;

/// Shorthand for a [`Result`](core::result::Result) carrying our [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// All errors that can occur in the Pokémon API.
///
/// Variants that carry a `backtrace` only capture one when the crate is built with a Nightly
/// toolchain and `RUST_BACKTRACE` (or `RUST_LIB_BACKTRACE`) is set.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value read from the environment was missing or invalid.
    #[error("invalid environment configuration: {context}")]
    EnvVar {
        /// What the code was trying to read, set through [`EnvVarContext`].
        context: String,
        /// Cause of the failure.
        source: EnvVarError,
        #[allow(missing_docs)]
        #[cfg(backtrace_support)]
        backtrace: std::backtrace::Backtrace,
    },

    /// A request body or path failed to deserialize or validate.
    #[error("invalid request input")]
    Input {
        /// Rejection reported by the extractor.
        #[from]
        source: actix_web_validator::error::Error,
        #[allow(missing_docs)]
        #[cfg(backtrace_support)]
        backtrace: std::backtrace::Backtrace,
    },

    /// The database connection pool could not be built.
    #[error("failed to build database connection pool: {message}")]
    PoolBuild {
        /// Description of the build failure, as reported by [`deadpool`].
        message: String,
    },

    /// No database connection could be obtained from the pool, usually because the database
    /// is down or unreachable.
    #[error("database unavailable")]
    Pool {
        /// Failure reported by the pool.
        #[from]
        source: PoolError,
        #[allow(missing_docs)]
        #[cfg(backtrace_support)]
        backtrace: std::backtrace::Backtrace,
    },

    /// A [`diesel`] query against the `pokemons` table failed.
    ///
    /// Looking up an id that matches no record (or is not a UUID at all) ends up here with
    /// [`NotFound`](diesel::result::Error::NotFound) as its source.
    #[error("query error: {context}")]
    Query {
        /// The operation that failed, set through [`QueryContext`].
        context: String,
        /// Error returned by [`diesel`].
        source: diesel::result::Error,
        #[allow(missing_docs)]
        #[cfg(backtrace_support)]
        backtrace: std::backtrace::Backtrace,
    },
}

/// Why reading an environment variable failed.
///
/// Mirrors [`VarError`](env::VarError) and adds [`IntExpected`](EnvVarError::IntExpected) for
/// numeric settings such as `MAX_POOL_SIZE` or `HTTP_PORT`.
#[derive(Debug, thiserror::Error)]
pub enum EnvVarError {
    /// Not set.
    #[error("variable is not set")]
    NotFound,

    /// Set, but holding the given non-Unicode value.
    #[error("variable is not valid Unicode")]
    NotUnicode(OsString),

    /// Set, but not parseable as an integer.
    #[error("expected an integer, got {value}")]
    IntExpected {
        /// Raw content of the variable.
        value: String,
        /// Parse failure.
        source: ParseIntError,
    },
}

impl From<env::VarError> for EnvVarError {
    fn from(value: env::VarError) -> Self {
        match value {
            env::VarError::NotPresent => Self::NotFound,
            env::VarError::NotUnicode(os_str) => Self::NotUnicode(os_str),
        }
    }
}

/// Turns an environment lookup failure into an [`EnvVar`](Error::EnvVar) error.
pub trait EnvVarContext {
    /// [`Error`] for a single failure, [`Result`] for a `Result`.
    type Output;

    /// Wraps the failure, describing it with the string returned by `context`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::env;
    ///
    /// use pokemon_api::error::EnvVarContext;
    ///
    /// # fn example() -> pokemon_api::Result<()> {
    /// let db_url = env::var("DATABASE_URL")
    ///     .with_env_var_context(|| "DATABASE_URL environment variable must be set")?;
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn with_env_var_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<E> EnvVarContext for E
where
    E: Into<EnvVarError>,
{
    type Output = Error;

    fn with_env_var_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        Error::EnvVar {
            context: context().into(),
            source: self.into(),
            #[cfg(backtrace_support)]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

impl<T, E> EnvVarContext for core::result::Result<T, E>
where
    E: EnvVarContext<Output = Error>,
{
    type Output = Result<T>;

    fn with_env_var_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| err.with_env_var_context(context))
    }
}

/// Turns a [`diesel`] failure into a [`Query`](Error::Query) error.
pub trait QueryContext {
    /// [`Error`] for a single failure, [`Result`] for a `Result`.
    type Output;

    /// Wraps the failure, describing the failed operation with the string returned by `context`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use diesel::QueryDsl;
    /// use diesel_async::RunQueryDsl;
    /// use pokemon_api::error::QueryContext;
    /// # use pokemon_api::db::get_pool;
    /// use pokemon_api::models::pokemon::Pokemon;
    /// use pokemon_api::schema::pokemons::dsl::*;
    /// use uuid::Uuid;
    ///
    /// # async fn example(pokemon_id: Uuid) -> pokemon_api::Result<()> {
    /// # let pool = get_pool()?;
    /// # let mut connection = pool.get().await?;
    /// #
    /// let found: Pokemon = pokemons
    ///     .find(pokemon_id)
    ///     .first(&mut connection)
    ///     .await
    ///     .with_query_context(|| format!("failed to fetch pokemon with id {}", pokemon_id))?;
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn with_query_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl QueryContext for diesel::result::Error {
    type Output = Error;

    fn with_query_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        Error::Query {
            context: context().into(),
            source: self,
            #[cfg(backtrace_support)]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

impl<T, E> QueryContext for core::result::Result<T, E>
where
    E: QueryContext<Output = Error>,
{
    type Output = Result<T>;

    fn with_query_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| err.with_query_context(context))
    }
}
