mod create {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use assert_matches::assert_matches;
    use pokemon_api::api::errors::ErrorResponse;
    use pokemon_api::models::pokemon::{CreatePokemon, Pokemon};
    use serde_json::json;
    use serial_test::file_serial;

    use crate::init_test_service;
    use crate::integration_helpers::factories::pokemon::build_create_pokemon;

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_create_pokemon() {
        init_test_service!(app, service);

        let new_pokemon = build_create_pokemon();

        let req = test::TestRequest::post()
            .uri("/pokemon")
            .set_json(&new_pokemon)
            .to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::CREATED, result.status());
        let api_pokemon: Pokemon = test::read_body_json(result).await;

        assert_eq!(new_pokemon, api_pokemon.clone().into());
        assert_eq!(api_pokemon.created_at, api_pokemon.updated_at);
        assert_matches!(app.find_pokemon(api_pokemon.id), Some(db_pokemon) => {
            assert_eq!(db_pokemon, api_pokemon);
        });
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_create_then_get() {
        init_test_service!(app, service);

        let req = test::TestRequest::post()
            .uri("/pokemon")
            .set_json(json!({
                "name": "Pikachu",
                "type": "Electric",
                "hp": 35,
                "attack": 55,
                "defense": 40,
                "spAtk": 50,
                "spDef": 50,
                "speed": 90
            }))
            .to_request();
        let created_pokemon: Pokemon = test::call_and_read_body_json(&service, req).await;

        let req = test::TestRequest::with_uri(&format!("/pokemon/{}", created_pokemon.id))
            .to_request();
        let fetched_pokemon: Pokemon = test::call_and_read_body_json(&service, req).await;

        assert_eq!(created_pokemon, fetched_pokemon);
        assert_eq!(1, app.count_pokemons());
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_missing_field() {
        init_test_service!(app, service);

        let mut payload = serde_json::to_value(build_create_pokemon()).unwrap();
        payload.as_object_mut().unwrap().remove("speed");

        let req = test::TestRequest::post()
            .uri("/pokemon")
            .set_json(payload)
            .to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::BAD_REQUEST, result.status());
        let error_response: ErrorResponse = test::read_body_json(result).await;
        assert_matches!(error_response.details, Some(details) if details.contains("speed"));
        assert_eq!(0, app.count_pokemons());
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_unknown_field() {
        init_test_service!(app, service);

        let mut payload = serde_json::to_value(build_create_pokemon()).unwrap();
        payload["legendary"] = json!(false);

        let req = test::TestRequest::post()
            .uri("/pokemon")
            .set_json(payload)
            .to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::BAD_REQUEST, result.status());
        assert_eq!(0, app.count_pokemons());
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_invalid_payload_values() {
        init_test_service!(app, service);

        let invalid_payload = json!({
            "name": "Pikachu",
            "type": "Electric",
            "hp": "foobar",
            "attack": "foobar",
            "defense": "foobar",
            "spAtk": "foobar",
            "spDef": "foobar",
            "speed": "foobar"
        });

        let req = test::TestRequest::post()
            .uri("/pokemon")
            .set_json(invalid_payload)
            .to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::BAD_REQUEST, result.status());
        assert_eq!(0, app.count_pokemons());
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_invalid_payload_values_validation() {
        init_test_service!(app, service);

        let invalid_payload =
            CreatePokemon { name: String::new(), hp: 0, ..build_create_pokemon() };

        let req = test::TestRequest::post()
            .uri("/pokemon")
            .set_json(invalid_payload)
            .to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::BAD_REQUEST, result.status());
        let error_response: ErrorResponse = test::read_body_json(result).await;
        assert_matches!(error_response.details, Some(details) => {
            assert!(details.contains("name"));
            assert!(details.contains("hp"));
        });
        assert_eq!(0, app.count_pokemons());
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_invalid_content_type() {
        init_test_service!(app, service);

        let req = test::TestRequest::post()
            .uri("/pokemon")
            .set_payload("name=Pikachu")
            .to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::BAD_REQUEST, result.status());
        assert_eq!(0, app.count_pokemons());
    }
}

mod find_all {
    use actix_web::test;
    use pokemon_api::models::pokemon::Pokemon;
    use serial_test::file_serial;

    use crate::init_test_service;
    use crate::integration_helpers::factories::pokemon::build_create_pokemons;

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_empty_list() {
        init_test_service!(app, service);

        let req = test::TestRequest::with_uri("/pokemon").to_request();
        let api_pokemons: Vec<Pokemon> = test::call_and_read_body_json(&service, req).await;

        assert!(api_pokemons.is_empty());
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_list() {
        init_test_service!(app, service);

        let mut inserted_pokemons: Vec<Pokemon> = build_create_pokemons(3)
            .iter()
            .map(|new_pokemon| app.insert_pokemon(new_pokemon))
            .collect();

        let req = test::TestRequest::with_uri("/pokemon").to_request();
        let mut api_pokemons: Vec<Pokemon> = test::call_and_read_body_json(&service, req).await;

        inserted_pokemons.sort_by_key(|pokemon| pokemon.id);
        api_pokemons.sort_by_key(|pokemon| pokemon.id);
        assert_eq!(inserted_pokemons, api_pokemons);
    }
}

mod find_one {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use pokemon_api::api::errors::ErrorResponse;
    use pokemon_api::models::pokemon::Pokemon;
    use serial_test::file_serial;
    use uuid::Uuid;

    use crate::init_test_service;
    use crate::integration_helpers::factories::pokemon::build_create_pokemon;

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_exists() {
        init_test_service!(app, service);

        let db_pokemon = app.insert_pokemon(&build_create_pokemon());

        let req = test::TestRequest::with_uri(&format!("/pokemon/{}", db_pokemon.id)).to_request();
        let api_pokemon: Pokemon = test::call_and_read_body_json(&service, req).await;

        assert_eq!(db_pokemon, api_pokemon);
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_does_not_exist() {
        init_test_service!(app, service);

        let req = test::TestRequest::with_uri(&format!("/pokemon/{}", Uuid::new_v4())).to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::NOT_FOUND, result.status());
        let error_response: ErrorResponse = test::read_body_json(result).await;
        assert_eq!(StatusCode::NOT_FOUND, error_response.status_code);
        assert_eq!("Not Found", error_response.error);
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_malformed_id() {
        init_test_service!(app, service);

        let req = test::TestRequest::with_uri("/pokemon/foobar").to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::NOT_FOUND, result.status());
    }
}

mod update {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use assert_matches::assert_matches;
    use pokemon_api::models::pokemon::{CreatePokemon, Pokemon};
    use serde_json::json;
    use serial_test::file_serial;
    use uuid::Uuid;

    use crate::init_test_service;
    use crate::integration_helpers::factories::pokemon::{build_create_pokemon, build_hp_patch};

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_update_hp_only() {
        init_test_service!(app, service);

        let db_pokemon = app.insert_pokemon(&build_create_pokemon());

        let req = test::TestRequest::patch()
            .uri(&format!("/pokemon/{}", db_pokemon.id))
            .set_json(build_hp_patch(999))
            .to_request();
        let api_pokemon: Pokemon = test::call_and_read_body_json(&service, req).await;

        let expected_pokemon =
            Pokemon { hp: 999, updated_at: api_pokemon.updated_at, ..db_pokemon.clone() };
        assert_eq!(expected_pokemon, api_pokemon);
        assert_eq!(db_pokemon.created_at, api_pokemon.created_at);
        assert!(api_pokemon.updated_at > db_pokemon.updated_at);
        assert_eq!(Some(api_pokemon), app.find_pokemon(db_pokemon.id));
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_update_several_fields() {
        init_test_service!(app, service);

        let db_pokemon = app.insert_pokemon(&build_create_pokemon());

        let req = test::TestRequest::patch()
            .uri(&format!("/pokemon/{}", db_pokemon.id))
            .set_json(json!({
                "name": "Raichu",
                "spAtk": 90,
                "speed": 110
            }))
            .to_request();
        let api_pokemon: Pokemon = test::call_and_read_body_json(&service, req).await;

        let expected_pokemon = CreatePokemon {
            name: "Raichu".into(),
            sp_atk: 90,
            speed: 110,
            ..build_create_pokemon()
        };
        assert_eq!(expected_pokemon, api_pokemon.into());
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_empty_update() {
        init_test_service!(app, service);

        let db_pokemon = app.insert_pokemon(&build_create_pokemon());

        let req = test::TestRequest::patch()
            .uri(&format!("/pokemon/{}", db_pokemon.id))
            .set_json(json!({}))
            .to_request();
        let api_pokemon: Pokemon = test::call_and_read_body_json(&service, req).await;

        assert_eq!(
            Pokemon { updated_at: api_pokemon.updated_at, ..db_pokemon.clone() },
            api_pokemon
        );
        assert_eq!(db_pokemon.created_at, api_pokemon.created_at);
        assert!(api_pokemon.updated_at > db_pokemon.updated_at);
        assert_eq!(Some(api_pokemon), app.find_pokemon(db_pokemon.id));
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_update_nonexistent() {
        init_test_service!(app, service);

        let req = test::TestRequest::patch()
            .uri(&format!("/pokemon/{}", Uuid::new_v4()))
            .set_json(build_hp_patch(999))
            .to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::NOT_FOUND, result.status());
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_malformed_id() {
        init_test_service!(app, service);

        let req = test::TestRequest::patch()
            .uri("/pokemon/foobar")
            .set_json(build_hp_patch(999))
            .to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::NOT_FOUND, result.status());
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_invalid_payload() {
        init_test_service!(app, service);

        let db_pokemon = app.insert_pokemon(&build_create_pokemon());

        for invalid_payload in [
            json!({ "id": Uuid::new_v4() }),
            json!({ "hp": "foobar" }),
            json!({ "hp": 0 }),
            json!({ "type": "" }),
        ] {
            let req = test::TestRequest::patch()
                .uri(&format!("/pokemon/{}", db_pokemon.id))
                .set_json(&invalid_payload)
                .to_request();
            let result = test::call_service(&service, req).await;

            assert_eq!(StatusCode::BAD_REQUEST, result.status(), "payload: {}", invalid_payload);
        }

        assert_matches!(app.find_pokemon(db_pokemon.id), Some(unchanged) => {
            assert_eq!(db_pokemon, unchanged);
        });
    }
}

mod remove {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use pokemon_api::models::pokemon::Pokemon;
    use serial_test::file_serial;
    use uuid::Uuid;

    use crate::init_test_service;
    use crate::integration_helpers::factories::pokemon::build_create_pokemon;

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_remove_existing() {
        init_test_service!(app, service);

        let db_pokemon = app.insert_pokemon(&build_create_pokemon());

        let req = test::TestRequest::delete()
            .uri(&format!("/pokemon/{}", db_pokemon.id))
            .to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::OK, result.status());
        let removed_pokemon: Pokemon = test::read_body_json(result).await;
        assert_eq!(db_pokemon, removed_pokemon);
        assert_eq!(None, app.find_pokemon(db_pokemon.id));

        let req = test::TestRequest::with_uri(&format!("/pokemon/{}", db_pokemon.id)).to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::NOT_FOUND, result.status());
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_remove_twice() {
        init_test_service!(app, service);

        let db_pokemon = app.insert_pokemon(&build_create_pokemon());
        let uri = format!("/pokemon/{}", db_pokemon.id);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        assert_eq!(StatusCode::OK, test::call_service(&service, req).await.status());

        let req = test::TestRequest::delete().uri(&uri).to_request();
        assert_eq!(StatusCode::NOT_FOUND, test::call_service(&service, req).await.status());
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_remove_nonexistent() {
        init_test_service!(app, service);

        let req = test::TestRequest::delete()
            .uri(&format!("/pokemon/{}", Uuid::new_v4()))
            .to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::NOT_FOUND, result.status());
    }

    #[test_log::test(actix_web::test)]
    #[file_serial(pokemon_api_db)]
    async fn test_malformed_id() {
        init_test_service!(app, service);

        let req = test::TestRequest::delete().uri("/pokemon/foobar").to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::NOT_FOUND, result.status());
    }
}

mod unreachable_db {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use pokemon_api::api::errors::ErrorResponse;
    use uuid::Uuid;

    use crate::init_unreachable_db_service;
    use crate::integration_helpers::factories::pokemon::{build_create_pokemon, build_hp_patch};

    #[test_log::test(actix_web::test)]
    async fn test_all_routes() {
        init_unreachable_db_service!(service);

        let pokemon_uri = format!("/pokemon/{}", Uuid::new_v4());
        let requests = [
            test::TestRequest::post()
                .uri("/pokemon")
                .set_json(build_create_pokemon()),
            test::TestRequest::get().uri("/pokemon"),
            test::TestRequest::get().uri(&pokemon_uri),
            test::TestRequest::patch()
                .uri(&pokemon_uri)
                .set_json(build_hp_patch(999)),
            test::TestRequest::delete().uri(&pokemon_uri),
        ];

        for req in requests {
            let result = test::call_service(&service, req.to_request()).await;

            assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, result.status());
            let error_response: ErrorResponse = test::read_body_json(result).await;
            assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, error_response.status_code);
            assert_eq!(None, error_response.details);
        }
    }
}
