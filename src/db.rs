pub mod funcionario_repo;
pub use funcionario_repo::FuncionarioRepository;
pub mod produto_repo;
pub use produto_repo::ProdutoRepository;
pub mod requisicao_repo;
pub use requisicao_repo::RequisicaoRepository;
