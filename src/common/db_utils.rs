// src/common/db_utils.rs

use sqlx::{mysql::MySqlRow, Column, Decode, MySql, Row, Type};

/// Lê uma coluna ignorando maiúsculas/minúsculas no nome.
///
/// A base legada tem colunas como `Nome` e `nome` conforme a versão do
/// schema. Cada alias é tentado em ordem e o primeiro valor não nulo vence.
pub(crate) fn coluna<'r, T>(row: &'r MySqlRow, aliases: &[&str]) -> Result<Option<T>, sqlx::Error>
where
    T: Decode<'r, MySql> + Type<MySql>,
{
    for alias in aliases {
        let encontradas = row
            .columns()
            .iter()
            .filter(|c| c.name().eq_ignore_ascii_case(alias));

        for col in encontradas {
            let valor: Option<T> = row.try_get(col.ordinal())?;
            if valor.is_some() {
                return Ok(valor);
            }
        }
    }
    Ok(None)
}

/// Igual a [`coluna`], mas a ausência de valor é erro.
pub(crate) fn coluna_obrigatoria<'r, T>(row: &'r MySqlRow, aliases: &[&str]) -> Result<T, sqlx::Error>
where
    T: Decode<'r, MySql> + Type<MySql>,
{
    coluna(row, aliases)?.ok_or_else(|| sqlx::Error::ColumnNotFound(aliases.join("|")))
}
