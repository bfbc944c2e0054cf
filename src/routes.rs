// src/routes.rs

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::AppState,
    docs::ApiDoc,
    handlers,
    middleware::{db_connection::acquire_connection, logging::log_request},
};

// Rotas servidas tanto na raiz quanto sob /api
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::status::status))
        .route("/test-db", get(handlers::status::test_db))
        .route("/login", post(handlers::auth::login))
        .route("/check-email", post(handlers::auth::check_email))
        .route("/funcionarios", get(handlers::funcionario::list_funcionarios))
        .route(
            "/funcionario/{id}",
            get(handlers::funcionario::get_funcionario).put(handlers::funcionario::update_funcionario),
        )
        .route("/funcionario/{id}/foto", put(handlers::funcionario::update_foto))
        .route("/produto", get(handlers::produto::list_produtos))
        .route("/produto/{id}", get(handlers::produto::get_produto))
        .route("/produto/categoria/{categoria}", get(handlers::produto::list_por_categoria))
        .route("/produto/estoque/baixo", get(handlers::produto::list_estoque_baixo))
        .route("/categorias", get(handlers::produto::list_categorias))
        .route("/requisicoes/estatisticas", get(handlers::requisicao::get_estatisticas))
}

pub fn build_router(app_state: AppState) -> Router {
    let rotas = api_routes();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(rotas.clone())
        .nest("/api", rotas)
        .route("/api/requisicoes", get(handlers::requisicao::get_totais_por_mes))
        // Toda rota acima roda com uma conexão da pool já reservada; o fallback (404) não
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            acquire_connection,
        ))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            log_request,
        ))
        .layer(DefaultBodyLimit::max(app_state.json_body_limit))
        // Documentação fica fora do middleware de conexão
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
    use std::time::Duration;
    use tower::ServiceExt;

    // Pool apontando para uma porta sem servidor: toda retirada de conexão falha
    fn estado_sem_banco(json_body_limit: usize) -> AppState {
        let pool = MySqlPoolOptions::new()
            .acquire_timeout(Duration::from_millis(300))
            .connect_lazy("mysql://root@127.0.0.1:1/estoque")
            .unwrap();
        AppState::with_pool(pool, json_body_limit)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn pool_failure_answers_500_envelope() {
        let app = build_router(estado_sem_banco(1024 * 1024));

        let response = app
            .oneshot(Request::builder().uri("/produto").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Erro de conexão com o banco de dados"));
    }

    #[tokio::test]
    async fn route_body_never_runs_without_a_connection() {
        let app = build_router(estado_sem_banco(1024 * 1024));

        // Sem conexão, nem a validação do handler (que daria 400) chega a rodar
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri("/api/funcionario/1")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"email":"invalido"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn oversized_bodies_are_rejected_before_the_pool() {
        let app = build_router(estado_sem_banco(1024));

        let foto = format!("data:image/png;base64,{}", "A".repeat(4096));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri("/funcionario/1/foto")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({ "fotoPerfil": foto }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn cors_preflight_is_open_to_any_origin() {
        let app = build_router(estado_sem_banco(1024 * 1024));

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/funcionario/1")
                    .header(header::ORIGIN, "http://10.0.0.5:8081")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn openapi_document_is_served_without_database() {
        let app = build_router(estado_sem_banco(1024 * 1024));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc = body_json(response).await;
        assert!(doc["paths"].get("/funcionario/{id}").is_some());
        assert!(doc["paths"].get("/produto/estoque/baixo").is_some());
    }

    #[tokio::test]
    async fn unknown_paths_are_404_even_without_database() {
        let app = build_router(estado_sem_banco(1024 * 1024));

        let response = app
            .oneshot(Request::builder().uri("/nao-existe").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // --- Rotas contra um banco real (DATABASE_URL) ---

    fn app_com_banco(pool: &MySqlPool) -> Router {
        build_router(AppState::with_pool(pool.clone(), 1024 * 1024))
    }

    async fn chamar(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        let request = match body {
            Some(body) => request.body(Body::from(body.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        (status, body_json(response).await)
    }

    async fn inserir_funcionario(pool: &MySqlPool) -> i64 {
        sqlx::query(
            r#"
            INSERT INTO funcionarios (nome, NomeCompleto, email, senha, Telefone, Cargo, Departamento)
            VALUES ('Ana', 'Ana Souza', 'ana@empresa.com', '1234', '11 99999-0000', 'Compradora', 'Suprimentos')
            "#,
        )
        .execute(pool)
        .await
        .unwrap()
        .last_insert_id() as i64
    }

    async fn email_e_telefone(pool: &MySqlPool, id: i64) -> (String, String) {
        sqlx::query_as("SELECT email, Telefone FROM funcionarios WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn employee_is_served_with_both_casings(pool: MySqlPool) {
        let id = inserir_funcionario(&pool).await;

        let (status, body) = chamar(app_com_banco(&pool), Method::GET, &format!("/funcionario/{id}"), None).await;

        assert_eq!(status, StatusCode::OK);
        let funcionario = &body["funcionario"];
        assert_eq!(funcionario["nome"], funcionario["Nome"]);
        assert_eq!(funcionario["telefone"], funcionario["Telefone"]);
        assert!(funcionario.get("senha").is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn invalid_email_is_rejected_without_writing(pool: MySqlPool) {
        let id = inserir_funcionario(&pool).await;

        let (status, body) = chamar(
            app_com_banco(&pool),
            Method::PUT,
            &format!("/funcionario/{id}"),
            Some(json!({ "email": "invalido", "telefone": "00 0000-0000" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(
            email_e_telefone(&pool, id).await,
            ("ana@empresa.com".to_string(), "11 99999-0000".to_string())
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn mistyped_json_and_bad_ids_use_the_error_envelope(pool: MySqlPool) {
        let id = inserir_funcionario(&pool).await;

        let (status, body) = chamar(
            app_com_banco(&pool),
            Method::PUT,
            &format!("/funcionario/{id}"),
            Some(json!({ "email": 123 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Corpo da requisição inválido"));

        let (status, body) = chamar(app_com_banco(&pool), Method::GET, "/produto/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Parâmetro de rota inválido"));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn phone_update_over_http_keeps_other_fields(pool: MySqlPool) {
        let id = inserir_funcionario(&pool).await;

        let (status, body) = chamar(
            app_com_banco(&pool),
            Method::PUT,
            &format!("/api/funcionario/{id}"),
            Some(json!({ "telefone": "11 3333-4444", "senha": "•••••••" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["funcionario"]["Telefone"], json!("11 3333-4444"));
        assert_eq!(body["funcionario"]["email"], json!("ana@empresa.com"));
        assert_eq!(body["funcionario"]["cargo"], json!("Compradora"));

        let senha: String = sqlx::query_scalar("SELECT senha FROM funcionarios WHERE id = ?")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(senha, "1234");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn login_answers_200_or_401(pool: MySqlPool) {
        inserir_funcionario(&pool).await;

        let (status, body) = chamar(
            app_com_banco(&pool),
            Method::POST,
            "/api/login",
            Some(json!({ "email": "ana@empresa.com", "senha": "1234" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["usuario"]["email"], json!("ana@empresa.com"));

        for credenciais in [
            json!({ "email": "outra@empresa.com", "senha": "1234" }),
            json!({ "email": "ana@empresa.com", "senha": "errada" }),
        ] {
            let (status, body) = chamar(app_com_banco(&pool), Method::POST, "/login", Some(credenciais)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body["success"], json!(false));
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn low_stock_route_is_a_subset_of_the_listing(pool: MySqlPool) {
        sqlx::query(
            r#"
            INSERT INTO produto (nome, categoria, preco, quantidade, minimo, status) VALUES
                ('Luva', 'EPI', 10.50, 3, 5, 'ativo'),
                ('Óculos', 'EPI', 25.00, 10, 5, 'ativo'),
                ('Bota', 'EPI', 99.90, 1, 5, 'inativo')
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        let (_, todos) = chamar(app_com_banco(&pool), Method::GET, "/produto", None).await;
        let (_, baixo) = chamar(app_com_banco(&pool), Method::GET, "/produto/estoque/baixo", None).await;

        let todos = todos["produtos"].as_array().unwrap().clone();
        assert_eq!(todos.len(), 2);
        assert!(todos.iter().all(|p| p["status"] == "ativo"));

        let esperado: Vec<Value> = todos
            .into_iter()
            .filter(|p| p["quantidade"].as_i64() <= p["minimo"].as_i64())
            .collect();
        assert_eq!(baixo["produtos"], Value::Array(esperado));
        assert_eq!(baixo["produtos"][0]["estoqueStatus"], json!("baixo"));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn legacy_requisition_route_is_reachable(pool: MySqlPool) {
        sqlx::query("INSERT INTO requisicoes (mes, status) VALUES ('Março', 'pendente'), ('Fevereiro', 'atendida')")
            .execute(&pool)
            .await
            .unwrap();

        let (status, body) = chamar(app_com_banco(&pool), Method::GET, "/api/requisicoes", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["mes"], json!("Fevereiro"));
        assert_eq!(body["data"][1]["mes"], json!("Março"));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_db_route_runs_select_one(pool: MySqlPool) {
        let (status, body) = chamar(app_com_banco(&pool), Method::GET, "/test-db", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["test"]["test"], json!(1));
    }
}
