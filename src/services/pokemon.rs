//! Service used to load and save pokemons. Used by the Pokémon REST API.

use diesel::dsl::now;
use diesel::result::Error::NotFound;
use diesel::{delete, insert_into, update, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use log::debug;
use uuid::Uuid;

use crate::db::{Pool, PooledConnection};
use crate::error::QueryContext;
use crate::models::pokemon::{CreatePokemon, PatchPokemon, Pokemon};

/// Service implementation for [`Pokemon`] entities.
///
/// This type contains the actual business logic to fetch/save pokemons from the database.
/// It is used by the [pokemon REST API endpoint implementations](crate::api::pokemon)
/// to handle operations regarding [`Pokemon`] entities. Each operation borrows one connection
/// from the pool and performs a single statement.
///
/// Operations that target a specific pokemon take its id as a string. An id that is not a valid
/// UUID cannot match any pokemon, so it results in the same [`NotFound`] query error as an
/// unknown id.
#[derive(Clone)]
pub struct Service {
    pool: Pool,
}

impl Service {
    /// Creates a new pokemon service using the provided database connection [`Pool`].
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Creates a new [`Pokemon`] and adds it to the database.
    ///
    /// The pokemon's id and timestamps are generated by the database.
    pub async fn create(&self, new_pokemon: &CreatePokemon) -> crate::Result<Pokemon> {
        use crate::schema::pokemons::dsl::*;

        debug!("Creating pokemon {}", new_pokemon.name);
        let mut connection = self.get_pooled_connection().await?;

        insert_into(pokemons)
            .values(new_pokemon)
            .get_result(&mut connection)
            .await
            .with_query_context(|| "failed to insert new pokemon")
    }

    /// Returns all [`Pokemon`]s stored in the database, oldest first.
    pub async fn find_all(&self) -> crate::Result<Vec<Pokemon>> {
        use crate::schema::pokemons::dsl::*;

        debug!("Loading all pokemons");
        let mut connection = self.get_pooled_connection().await?;

        pokemons
            .order((created_at, id))
            .load(&mut connection)
            .await
            .with_query_context(|| "failed to load pokemons")
    }

    /// Returns the [`Pokemon`] with the given id from the database.
    pub async fn find_one(&self, pokemon_id: &str) -> crate::Result<Pokemon> {
        use crate::schema::pokemons::dsl::*;

        debug!("Fetching pokemon {}", pokemon_id);
        let uuid = parse_pokemon_id(pokemon_id)?;
        let mut connection = self.get_pooled_connection().await?;

        pokemons
            .find(uuid)
            .first(&mut connection)
            .await
            .with_query_context(|| format!("failed to fetch pokemon with id {}", pokemon_id))
    }

    /// Updates the [`Pokemon`] in the database with the given id.
    ///
    /// Only the fields that are specified in `pokemon_patch` (e.g. not set to `None`) are
    /// overwritten. The pokemon's `updated_at` timestamp is always refreshed.
    pub async fn update(
        &self,
        pokemon_id: &str,
        pokemon_patch: &PatchPokemon,
    ) -> crate::Result<Pokemon> {
        use crate::schema::pokemons::dsl::*;

        debug!("Updating pokemon {}", pokemon_id);
        let uuid = parse_pokemon_id(pokemon_id)?;
        let mut connection = self.get_pooled_connection().await?;

        update(pokemons.find(uuid))
            .set((pokemon_patch, updated_at.eq(now)))
            .get_result(&mut connection)
            .await
            .with_query_context(|| format!("failed to update pokemon {}", pokemon_id))
    }

    /// Deletes the [`Pokemon`] with the given id from the database.
    ///
    /// Returns the pokemon as it was just before being deleted.
    pub async fn remove(&self, pokemon_id: &str) -> crate::Result<Pokemon> {
        use crate::schema::pokemons::dsl::*;

        debug!("Deleting pokemon {}", pokemon_id);
        let uuid = parse_pokemon_id(pokemon_id)?;
        let mut connection = self.get_pooled_connection().await?;

        delete(pokemons.find(uuid))
            .get_result(&mut connection)
            .await
            .with_query_context(|| format!("failed to delete pokemon {}", pokemon_id))
    }

    /// Returns a [`PooledConnection`] from our internal database connection pool.
    ///
    /// The connection can then be used to perform DB queries.
    async fn get_pooled_connection(&self) -> crate::Result<PooledConnection> {
        Ok(self.pool.get().await?)
    }
}

/// Parses a pokemon id received from a client.
///
/// Invalid ids are reported as [`NotFound`] query errors.
fn parse_pokemon_id(pokemon_id: &str) -> crate::Result<Uuid> {
    Uuid::parse_str(pokemon_id).map_err(|_| {
        NotFound.with_query_context(|| format!("invalid pokemon id {}", pokemon_id))
    })
}
