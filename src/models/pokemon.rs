//! Models used to create/update/load pokemons from the database.
//!
//! All models are (de)serialized with `camelCase` keys (e.g. `spAtk`), and the Pokémon's type is
//! stored in a field named `type_` since `type` is a reserved keyword.

use chrono::{DateTime, Utc};
use diesel_derives::{AsChangeset, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use utoipa::{ToResponse, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::schema::pokemons;

#[cfg_attr(
    doc,
    doc = r"
        Base pokemon entity model.

        Used to validate queries at compile time as well as load pokemons from the database
        (including those returned by insert, update and delete queries).
    "
)]
#[cfg_attr(not(doc), doc = "A Pokémon record")]
#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize, Deserialize, ToSchema, ToResponse,
)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
#[response(
    description = "Pokémon information",
    example = json!({
        "id": "0f8b7d3c-52a2-4f3e-9b53-6a4e8c1f2d10",
        "name": "Pikachu",
        "type": "Electric",
        "hp": 35,
        "attack": 55,
        "defense": 40,
        "spAtk": 50,
        "spDef": 50,
        "speed": 90,
        "createdAt": "2024-10-16T12:00:00Z",
        "updatedAt": "2024-10-16T12:00:00Z"
    }),
)]
pub struct Pokemon {
    /// Unique id of this Pokémon, assigned by the database
    pub id: Uuid,

    /// The name of the Pokémon
    #[schema(example = "Pikachu")]
    pub name: String,

    /// The type of the Pokémon (e.g., Electric, Fire, Water)
    #[serde(rename = "type")]
    #[schema(example = "Electric")]
    pub type_: String,

    /// Hit points (health)
    #[schema(example = 35)]
    pub hp: i32,

    /// Attack power
    #[schema(example = 55)]
    pub attack: i32,

    /// Defense power
    #[schema(example = 40)]
    pub defense: i32,

    /// Special attack power
    #[schema(example = 50)]
    pub sp_atk: i32,

    /// Special defense power
    #[schema(example = 50)]
    pub sp_def: i32,

    /// Speed stat
    #[schema(example = 90)]
    pub speed: i32,

    /// When the Pokémon was created
    pub created_at: DateTime<Utc>,

    /// When the Pokémon was last modified
    pub updated_at: DateTime<Utc>,
}

#[cfg_attr(
    doc,
    doc = r"
        Model used to insert a new pokemon in the database.

        All fields must be specified. The `id` and timestamps are generated by the database.
    "
)]
#[cfg_attr(not(doc), doc = "Information to create a new Pokémon")]
#[derive(Debug, Clone, PartialEq, Eq, Insertable, Serialize, Deserialize, Validate, ToSchema)]
#[diesel(table_name = pokemons)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatePokemon {
    /// The name of the Pokémon
    #[validate(length(min = 1))]
    #[schema(example = "Pikachu")]
    pub name: String,

    /// The type of the Pokémon (e.g., Electric, Fire, Water)
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    #[schema(example = "Electric")]
    pub type_: String,

    /// Hit points (health)
    #[validate(range(min = 1))]
    #[schema(minimum = 1, example = 35)]
    pub hp: i32,

    /// Attack power
    #[validate(range(min = 1))]
    #[schema(minimum = 1, example = 55)]
    pub attack: i32,

    /// Defense power
    #[validate(range(min = 1))]
    #[schema(minimum = 1, example = 40)]
    pub defense: i32,

    /// Special attack power
    #[validate(range(min = 1))]
    #[schema(minimum = 1, example = 50)]
    pub sp_atk: i32,

    /// Special defense power
    #[validate(range(min = 1))]
    #[schema(minimum = 1, example = 50)]
    pub sp_def: i32,

    /// Speed stat
    #[validate(range(min = 1))]
    #[schema(minimum = 1, example = 90)]
    pub speed: i32,
}

impl From<Pokemon> for CreatePokemon {
    fn from(value: Pokemon) -> Self {
        Self {
            name: value.name,
            type_: value.type_,
            hp: value.hp,
            attack: value.attack,
            defense: value.defense,
            sp_atk: value.sp_atk,
            sp_def: value.sp_def,
            speed: value.speed,
        }
    }
}

#[cfg_attr(
    doc,
    doc = r#"
        Model used to "patch" a pokemon in the database, e.g. update some fields only.

        All fields are optional; fields that are not specified will not be updated. An empty
        patch is valid: it only refreshes the pokemon's `updatedAt` timestamp.
    "#
)]
#[cfg_attr(not(doc), doc = "Information to update specific fields of a Pokémon")]
#[derive(
    Debug, Default, Clone, PartialEq, Eq, AsChangeset, Serialize, Deserialize, Validate, ToSchema,
)]
#[diesel(table_name = pokemons)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[schema(example = json!({
    "hp": 999
}))]
pub struct PatchPokemon {
    /// The name of the Pokémon
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    #[schema(example = "Raichu")]
    pub name: Option<String>,

    /// The type of the Pokémon (e.g., Electric, Fire, Water)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    #[schema(example = "Electric")]
    pub type_: Option<String>,

    /// Hit points (health)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    #[schema(minimum = 1, example = 60)]
    pub hp: Option<i32>,

    /// Attack power
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    #[schema(minimum = 1, example = 90)]
    pub attack: Option<i32>,

    /// Defense power
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    #[schema(minimum = 1, example = 55)]
    pub defense: Option<i32>,

    /// Special attack power
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    #[schema(minimum = 1, example = 90)]
    pub sp_atk: Option<i32>,

    /// Special defense power
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    #[schema(minimum = 1, example = 80)]
    pub sp_def: Option<i32>,

    /// Speed stat
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    #[schema(minimum = 1, example = 110)]
    pub speed: Option<i32>,
}
