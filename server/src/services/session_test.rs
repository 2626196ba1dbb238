use super::*;

#[test]
fn bytes_to_hex_encodes_lowercase_pairs() {
    assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xff]), "000fff");
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_is_not_repeated() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// Live-DB round trip — requires DATABASE_URL and a migrated schema.
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use shared::RegisterUser;
    use sqlx::postgres::PgPoolOptions;

    async fn live_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for live-db-tests");
        PgPoolOptions::new()
            .connect(&url)
            .await
            .expect("live database connect")
    }

    #[tokio::test]
    async fn session_round_trip_against_live_db() {
        let pool = live_pool().await;
        let reg = RegisterUser {
            username: format!("live_{}", &generate_token()[..12]),
            full_name: None,
            password: "secret".to_owned(),
            role: None,
        };
        let user = crate::services::auth::register(&pool, &reg)
            .await
            .expect("register");

        let token = create_session(&pool, user.id).await.expect("create session");
        let resolved = validate_session(&pool, &token)
            .await
            .expect("validate query")
            .expect("token resolves to a user");
        assert_eq!(resolved.id, user.id);
        assert_eq!(resolved.username, reg.username);

        delete_session(&pool, &token).await.expect("delete session");
        assert!(
            validate_session(&pool, &token)
                .await
                .expect("validate query")
                .is_none(),
            "deleted session must not validate"
        );

        crate::services::admin::delete_user(&pool, user.id)
            .await
            .expect("cleanup user");
    }
}
