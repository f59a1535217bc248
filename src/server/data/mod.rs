//! Database repository layer for all domain entities.
//!
//! Each repository wraps a borrowed connection and owns the SeaORM queries for one
//! entity. List operations run the query-feature pipeline and return projected JSON
//! records; single-record operations return entity models. Writes that must happen
//! together with an activity feed entry run inside one transaction.

use sea_orm::sea_query::{Expr, ExprTrait, IntoColumnRef, SimpleExpr};

pub mod activity;
pub mod city;
pub mod complaint;
pub mod department;
pub mod zone;

#[cfg(test)]
mod test;

/// `column + 1`, evaluated by the database.
pub(crate) fn incremented<C: IntoColumnRef>(column: C) -> SimpleExpr {
    Expr::col(column).add(1)
}
