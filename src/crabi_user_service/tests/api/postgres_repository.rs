use crabi_adapters::persistence::PostgresUserRepository;
use crabi_core::{Password, User, UserRepository, UserRepositoryError};
use crabi_user_service::get_postgres_pool;
use testcontainers_modules::postgres;
use testcontainers_modules::testcontainers::runners::AsyncRunner;

#[tokio::test]
#[ignore = "requires a running Docker daemon"]
async fn postgres_repository_round_trip() {
    let container = postgres::Postgres::default().start().await.unwrap();
    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();
    let url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

    let pool = get_postgres_pool(&url).await.unwrap();
    PostgresUserRepository::run_migrations(&pool).await.unwrap();
    let repository = PostgresUserRepository::new(pool);

    let dua = User::new("Dua", "Lipa", "dua@lipa.com", "dua123lipa");
    repository.save_user(dua.clone()).await.unwrap();

    let stored = repository
        .get_user_by_email("dua@lipa.com")
        .await
        .unwrap()
        .expect("user was saved");
    assert_eq!(stored.first_name(), "Dua");
    assert_ne!(stored.password(), &Password::from("dua123lipa"));

    assert!(
        repository
            .get_user_by_email_and_password("dua@lipa.com", &Password::from("dua123lipa"))
            .await
            .unwrap()
            .is_some()
    );
    assert!(
        repository
            .get_user_by_email_and_password("dua@lipa.com", &Password::from("wrong"))
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        repository
            .get_user_by_email("missing@x.com")
            .await
            .unwrap()
            .is_none()
    );

    assert_eq!(
        repository.save_user(dua).await,
        Err(UserRepositoryError::UserAlreadyExists)
    );
}
