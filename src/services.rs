pub mod funcionario_service;
pub use funcionario_service::FuncionarioService;
pub mod produto_service;
pub use produto_service::ProdutoService;
pub mod requisicao_service;
pub use requisicao_service::RequisicaoService;
