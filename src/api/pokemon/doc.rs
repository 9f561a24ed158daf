//! [`IntoResponses`] wrappers for the Pokémon REST API endpoints.
//!
//! Used to document the possible error responses in [`utoipa::path`] annotations.

use utoipa::IntoResponses;

use crate::api::errors::ErrorResponse;

/// Documents `400` responses caused by an invalid Pokémon request body.
#[derive(Debug, IntoResponses)]
#[response(
    status = BAD_REQUEST,
    description = "Invalid Pokémon information in request body (missing, unknown or out-of-range fields)",
)]
pub struct InvalidPokemonBodyResponse;

/// Documents `404` responses for ids that match no Pokémon.
#[derive(Debug, IntoResponses)]
#[response(status = NOT_FOUND, description = "No Pokémon found with the given id")]
pub struct IdNotFoundResponse;

/// Documents `5XX` responses, for example when the database is unavailable.
#[derive(Debug, IntoResponses)]
#[response(status = "5XX")]
pub struct ServerErrorResponse(#[to_response] ErrorResponse);
