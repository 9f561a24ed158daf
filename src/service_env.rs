//! Runtime environment of the Pokémon API service.

// strum's `EnumIs` generates undocumented methods
#![allow(missing_docs)]

use std::env;
use std::sync::{OnceLock, RwLock};

use strum_macros::{AsRefStr, Display, EnumIs, EnumString};

/// Name of the environment variable used to select the [`ServiceEnv`].
pub const SERVICE_ENV_VAR: &str = "POKEMON_API_ENV";

/// Environment in which the service is running.
///
/// Controlled by the `POKEMON_API_ENV` environment variable (see [`current`](ServiceEnv::current)).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, AsRefStr, Display, EnumIs, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ServiceEnv {
    /// Service is running in a development environment.
    ///
    /// Error responses include the internal error chain.
    Development,

    /// Service is running in a production environment.
    ///
    /// Error responses never describe internal errors. This is the default.
    #[default]
    Production,
}

impl ServiceEnv {
    /// Returns the current service runtime environment.
    ///
    /// The value is read from `POKEMON_API_ENV` the first time this is called, then cached.
    /// Missing or unrecognized values resolve to [`Production`](ServiceEnv::Production).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use log::info;
    /// use pokemon_api::service_env::ServiceEnv;
    ///
    /// info!("Service is running in {}", ServiceEnv::current());
    ///
    /// if ServiceEnv::current().is_development() {
    ///     info!("Error responses will include internal error details");
    /// }
    /// ```
    pub fn current() -> Self {
        static CURRENT_ENV: OnceLock<ServiceEnv> = OnceLock::new();

        if cfg!(test) {
            if let Some(test_env) = *TEST_ENV.read().unwrap_or_else(|err| err.into_inner()) {
                return test_env;
            }
        }

        *CURRENT_ENV.get_or_init(ServiceEnv::reload)
    }

    /// Reads the runtime environment from `POKEMON_API_ENV`, bypassing the cache.
    ///
    /// Regular code should use [`current`](ServiceEnv::current) instead.
    pub fn reload() -> Self {
        env::var(SERVICE_ENV_VAR)
            .ok()
            .and_then(|env_var| env_var.as_str().try_into().ok())
            .unwrap_or_default()
    }

    /// Runs an async test while [`ServiceEnv::current`] is forced to return `env`.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use pokemon_api::service_env::ServiceEnv;
    ///
    /// # async fn example() {
    /// ServiceEnv::test(ServiceEnv::Development, async {
    ///     assert_eq!(ServiceEnv::Development, ServiceEnv::current());
    /// })
    /// .await;
    /// # }
    /// ```
    #[cfg(test)]
    pub async fn test<F>(env: ServiceEnv, f: F)
    where
        F: std::future::Future<Output = ()>,
    {
        let prev_test_env = TEST_ENV.write().unwrap().replace(env);

        f.await;

        *TEST_ENV.write().unwrap() = prev_test_env;
    }
}

/// Environment override used by [`ServiceEnv::test`].
static TEST_ENV: RwLock<Option<ServiceEnv>> = RwLock::new(None);
