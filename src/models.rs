pub mod funcionario;
pub mod produto;
pub mod requisicao;
pub mod status;
