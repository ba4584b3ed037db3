use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("database engine not recognized: '{0}' (expected one of: mssql, postgres, mysql, mariadb, oracle)")]
    UnknownEngine(String),
}
