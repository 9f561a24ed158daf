//! Implementation of the Pokémon REST API endpoints.
//!
//! # Endpoints
//!
//! | HTTP method | Endpoint        | Usage                                                | See                           |
//! |-------------|-----------------|------------------------------------------------------|-------------------------------|
//! | `POST`      | `/pokemon`      | Adds a new Pokémon in the DB                         | [`create`](struct@create)     |
//! | `GET`       | `/pokemon`      | Lists all Pokémon in the DB                          | [`find_all`](struct@find_all) |
//! | `GET`       | `/pokemon/{id}` | Returns one Pokémon stored in DB, using its id       | [`find_one`](struct@find_one) |
//! | `PATCH`     | `/pokemon/{id}` | Updates some fields of the Pokémon with the given id | [`update`](struct@update)     |
//! | `DELETE`    | `/pokemon/{id}` | Deletes the Pokémon with the given id from the DB    | [`remove`](struct@remove)     |

pub mod doc;

use std::ops::Deref;

use actix_web::web::{Data, ServiceConfig};
use actix_web::{delete, get, patch, post, HttpResponse};
use actix_web_validator::{Json, Path};
use log::trace;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

use crate::api::pokemon::doc::{IdNotFoundResponse, InvalidPokemonBodyResponse, ServerErrorResponse};
use crate::db::Pool;
use crate::models::pokemon::{CreatePokemon, PatchPokemon, Pokemon};
use crate::services::pokemon;

/// Registers the pokemon service and all pokemon REST API endpoints.
///
/// See [module documentation](self) for the entire list of supported endpoints.
/// Called automatically from [`api::configure`](crate::api::configure).
pub fn configure(pool: &Pool) -> impl FnOnce(&mut ServiceConfig) + '_ {
    |config| {
        trace!("Registering Pokemon service app data");
        config.app_data(Data::new(pokemon::Service::new(pool.clone())));

        trace!("Adding API CRUD endpoints for /pokemon");
        config
            .service(create)
            .service(find_all)
            .service(find_one)
            .service(update)
            .service(remove);
    }
}

/// [`Result`](crate::Result) definition used to return [`HttpResponse`]s from API endpoints.
///
/// If an [`Error`](crate::Error) is returned, it is converted to an appropriate [`HttpResponse`]
/// by the error handling code (see [`ErrorResponse::from`](crate::api::errors::ErrorResponse::from)).
pub type HttpResult = crate::Result<HttpResponse>;

/// Path parameter of the endpoints that target a single Pokémon.
///
/// Kept as a string: ids that are not valid UUIDs simply match no Pokémon.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
pub struct Id {
    /// Id of the Pokémon in the database
    #[param(example = "0f8b7d3c-52a2-4f3e-9b53-6a4e8c1f2d10")]
    pub id: String,
}

impl Deref for Id {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.id
    }
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to add a new pokemon to the DB.

        Registered as `POST /pokemon`.

        # Input

        - Request body: the pokemon data, as a JSON-serialized [`CreatePokemon`]. All fields are
                        required.

        # Output

        `201 Created` with the newly-inserted [`Pokemon`], serialized as JSON.
    "
)]
#[cfg_attr(not(doc), doc = "Creates a new Pokémon")]
#[cfg_attr(not(doc), doc = "Creates a new Pokémon with all required stats and properties")]
#[utoipa::path(
    context_path = "/pokemon",
    tag = "Pokemon",
    request_body(
        content = inline(CreatePokemon),
        description = "New Pokémon information",
    ),
    responses(
        (status = CREATED, response = Pokemon),
        InvalidPokemonBodyResponse,
        ServerErrorResponse,
    ),
)]
#[post("", name = "/")]
pub async fn create(
    new_pokemon: Json<CreatePokemon>,
    service: Data<pokemon::Service>,
) -> HttpResult {
    let pokemon = service.get_ref().create(&new_pokemon).await?;

    Ok(HttpResponse::Created().json(pokemon))
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to list all pokemons in the DB.

        Registered as `GET /pokemon`.

        # Output

        A JSON array of [`Pokemon`]s; empty if there are none. Clients should not depend on the
        order of the returned pokemons.
    "
)]
#[cfg_attr(not(doc), doc = "Lists all Pokémon")]
#[cfg_attr(not(doc), doc = "Retrieves a list of all Pokémon in the database")]
#[utoipa::path(
    context_path = "/pokemon",
    tag = "Pokemon",
    responses(
        (status = OK, description = "All Pokémon stored in the database", body = [Pokemon]),
        ServerErrorResponse,
    ),
)]
#[get("", name = "/")]
pub async fn find_all(service: Data<pokemon::Service>) -> HttpResult {
    let pokemons = service.get_ref().find_all().await?;

    Ok(HttpResponse::Ok().json(pokemons))
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to fetch one pokemon from the DB.

        Registered as `GET /pokemon/{id}`.

        # Input

        - `{id}`: id of pokemon to fetch.

        # Output

        A [`Pokemon`], serialized as JSON.
    "
)]
#[cfg_attr(not(doc), doc = "Returns information about a Pokémon")]
#[cfg_attr(not(doc), doc = "Retrieves a specific Pokémon by its id")]
#[utoipa::path(
    context_path = "/pokemon",
    tag = "Pokemon",
    params(Id),
    responses(
        (status = OK, response = Pokemon),
        IdNotFoundResponse,
        ServerErrorResponse,
    ),
)]
#[get("/{id}", name = "/{id}")]
pub async fn find_one(id: Path<Id>, service: Data<pokemon::Service>) -> HttpResult {
    let pokemon = service.get_ref().find_one(&id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(pokemon))
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to update some fields of a pokemon in the DB.

        Any field not specified will not be updated; the pokemon's `updatedAt` timestamp is
        always refreshed. Registered as `PATCH /pokemon/{id}`.

        # Input

        - `{id}`: id of pokemon to update.
        - Request body: the fields to update in the pokemon, as a JSON-serialized [`PatchPokemon`].

        # Output

        The updated [`Pokemon`], serialized as JSON.
    "
)]
#[cfg_attr(not(doc), doc = "Updates specific fields of a Pokémon")]
#[cfg_attr(not(doc), doc = "Updates one or more properties of an existing Pokémon")]
#[utoipa::path(
    context_path = "/pokemon",
    tag = "Pokemon",
    params(Id),
    request_body(
        content = inline(PatchPokemon),
        description = "Pokémon fields to update",
    ),
    responses(
        (status = OK, response = Pokemon),
        InvalidPokemonBodyResponse,
        IdNotFoundResponse,
        ServerErrorResponse,
    ),
)]
#[patch("/{id}", name = "/{id}")]
pub async fn update(
    id: Path<Id>,
    pokemon_patch: Json<PatchPokemon>,
    service: Data<pokemon::Service>,
) -> HttpResult {
    let pokemon = service
        .get_ref()
        .update(&id.into_inner(), &pokemon_patch)
        .await?;

    Ok(HttpResponse::Ok().json(pokemon))
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to delete a pokemon from the DB.

        Registered as `DELETE /pokemon/{id}`.

        # Input

        - `{id}`: id of pokemon to delete.

        # Output

        The deleted [`Pokemon`], as it was just before being deleted, serialized as JSON.
    "
)]
#[cfg_attr(not(doc), doc = "Deletes a Pokémon")]
#[cfg_attr(not(doc), doc = "Permanently deletes a Pokémon from the database")]
#[utoipa::path(
    context_path = "/pokemon",
    tag = "Pokemon",
    params(Id),
    responses(
        (status = OK, response = Pokemon),
        IdNotFoundResponse,
        ServerErrorResponse,
    ),
)]
#[delete("/{id}", name = "/{id}")]
pub async fn remove(id: Path<Id>, service: Data<pokemon::Service>) -> HttpResult {
    let pokemon = service.get_ref().remove(&id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(pokemon))
}
