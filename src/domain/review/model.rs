//! Review domain entity

use crate::domain::{User, UserSummary};

/// A rating one user gives another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    /// The user giving the rating
    pub calificador: UserSummary,
    /// The user being rated
    pub objetivo: UserSummary,
    pub calificacion: i32,
    pub comentario: String,
}

impl Review {
    pub fn new(
        id: i64,
        calificador: &User,
        objetivo: &User,
        calificacion: i32,
        comentario: impl Into<String>,
    ) -> Self {
        Self {
            id,
            calificador: calificador.summary(),
            objetivo: objetivo.summary(),
            calificacion,
            comentario: comentario.into(),
        }
    }
}
