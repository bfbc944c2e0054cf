// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Status ---
        handlers::status::status,
        handlers::status::test_db,

        // --- Auth ---
        handlers::auth::login,
        handlers::auth::check_email,

        // --- Funcionários ---
        handlers::funcionario::list_funcionarios,
        handlers::funcionario::get_funcionario,
        handlers::funcionario::update_funcionario,
        handlers::funcionario::update_foto,

        // --- Produtos ---
        handlers::produto::list_produtos,
        handlers::produto::get_produto,
        handlers::produto::list_por_categoria,
        handlers::produto::list_estoque_baixo,
        handlers::produto::list_categorias,

        // --- Requisições ---
        handlers::requisicao::get_estatisticas,
        handlers::requisicao::get_totais_por_mes,
    ),
    components(
        schemas(
            models::status::StatusResponse,
            models::status::TestDbResponse,
            models::status::TesteBanco,
            models::status::MensagemResponse,

            models::funcionario::FuncionarioPublico,
            models::funcionario::AtualizarFuncionarioPayload,
            models::funcionario::AtualizarFotoPayload,
            models::funcionario::LoginPayload,
            models::funcionario::CheckEmailPayload,
            models::funcionario::FuncionarioResponse,
            models::funcionario::FuncionariosResponse,
            models::funcionario::LoginResponse,
            models::funcionario::CheckEmailResponse,

            models::produto::EstoqueStatus,
            models::produto::ProdutoView,
            models::produto::ProdutoResponse,
            models::produto::ProdutosResponse,
            models::produto::CategoriasResponse,

            models::requisicao::EstatisticaMensal,
            models::requisicao::TotalPorMes,
            models::requisicao::EstatisticasResponse,
            models::requisicao::TotaisPorMesResponse,
        )
    ),
    tags(
        (name = "Status", description = "Saúde da API e do banco"),
        (name = "Auth", description = "Login e checagem de e-mail"),
        (name = "Funcionários", description = "Consulta e atualização de funcionários"),
        (name = "Produtos", description = "Catálogo de produtos ativos e alerta de estoque"),
        (name = "Requisições", description = "Estatísticas agregadas de requisições")
    )
)]
pub struct ApiDoc;
