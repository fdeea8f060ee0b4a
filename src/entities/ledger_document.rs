//! Ledger document entity - one stored movement record inside a user's collection.
//!
//! Rows are partitioned by `collection` (`historico_<username>`), so several users can
//! share one database without seeing each other's ledgers. Field names follow the
//! document schema (`descricao`, `quantidade`, `movimento`, `data`, `setor`).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ledger document database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ledger_documents")]
pub struct Model {
    /// Insertion-ordered identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Collection the document belongs to, e.g. `historico_maria`
    pub collection: String,
    /// Product description
    pub descricao: String,
    /// Quantity as typed
    pub quantidade: i64,
    /// `Entrada` or `Saída`
    pub movimento: String,
    /// Timestamp text, `YYYY-MM-DD HH:MM:SS`
    pub data: String,
    /// `Almoxarifado` or `Farmácia`
    pub setor: String,
}

/// Ledger documents have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
