pub mod db_connection;
pub mod logging;
