//! Passive per-dialect tables: keyword sets, quoting rules, comment and
//! placeholder syntaxes. These modules carry data only; all control flow
//! lives in the tokenizer and formatter engine.

pub mod bigquery;
pub mod db2;
pub mod hive;
pub mod mariadb;
pub mod mysql;
pub mod n1ql;
pub mod plsql;
pub mod postgresql;
pub mod redshift;
pub mod spark;
pub mod standard;
pub mod tsql;
