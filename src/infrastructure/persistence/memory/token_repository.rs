use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::identity::{
  entities::Token,
  errors::{IdentityError, RepositoryError},
  ports::TokenRepository,
};

/// In-memory implementation of the TokenRepository trait.
///
/// Tokens are append-only: superseded ones stay stored in deactivated form.
#[derive(Default)]
pub struct InMemoryTokenRepository {
  rows: RwLock<HashMap<Uuid, Token>>,
}

impl InMemoryTokenRepository {
  /// Creates an empty repository
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of stored tokens, deactivated ones included
  pub async fn len(&self) -> usize {
    self.rows.read().await.len()
  }

  /// Number of stored tokens still active
  pub async fn active_count(&self) -> usize {
    self.rows.read().await.values().filter(|t| t.is_active()).count()
  }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
  async fn add(&self, token: Token) -> Result<Token, IdentityError> {
    let mut rows = self.rows.write().await;
    if rows.contains_key(&token.id) {
      return Err(RepositoryError::DuplicateKey(token.id.to_string()).into());
    }
    rows.insert(token.id, token.clone());
    Ok(token)
  }

  async fn update(&self, token: Token) -> Result<Token, IdentityError> {
    let mut rows = self.rows.write().await;
    if !rows.contains_key(&token.id) {
      return Err(RepositoryError::NotFound.into());
    }
    rows.insert(token.id, token.clone());
    Ok(token)
  }
}
