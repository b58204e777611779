//! Domain event dispatch
//!
//! An explicitly constructed, per-application-lifetime dispatcher instance.
//! Handlers subscribe by event type before the dispatcher is shared; raising
//! an event awaits every subscriber for that type, in subscription order, in
//! the raising task. There is no global registry and no external bus; tests
//! build a fresh dispatcher per case.

use async_trait::async_trait;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;

/// Handler of one domain event type.
///
/// Runs after the originating command's unit of work committed, so it must
/// not fail the command: report problems through logging instead.
#[async_trait]
pub trait EventHandler<E>: Send + Sync {
  async fn handle(&self, event: &E);
}

#[async_trait]
trait ErasedHandler: Send + Sync {
  async fn call(&self, event: &(dyn Any + Send + Sync));
}

struct Subscription<E, H> {
  handler: H,
  _event: PhantomData<fn(&E)>,
}

#[async_trait]
impl<E, H> ErasedHandler for Subscription<E, H>
where
  E: Any + Send + Sync,
  H: EventHandler<E>,
{
  async fn call(&self, event: &(dyn Any + Send + Sync)) {
    if let Some(event) = event.downcast_ref::<E>() {
      self.handler.handle(event).await;
    }
  }
}

/// Synchronous in-process publisher of domain events
#[derive(Default)]
pub struct EventDispatcher {
  subscriptions: HashMap<TypeId, Vec<Box<dyn ErasedHandler>>>,
}

impl EventDispatcher {
  /// Creates a dispatcher with no subscriptions
  pub fn new() -> Self {
    Self::default()
  }

  /// Subscribes a handler to every raised event of type `E`
  pub fn subscribe<E, H>(&mut self, handler: H)
  where
    E: Any + Send + Sync,
    H: EventHandler<E> + 'static,
  {
    self
      .subscriptions
      .entry(TypeId::of::<E>())
      .or_default()
      .push(Box::new(Subscription {
        handler,
        _event: PhantomData,
      }));
  }

  /// Delivers an event to every subscriber of its type, in order
  pub async fn raise<E: Any + Send + Sync>(&self, event: E) {
    if let Some(handlers) = self.subscriptions.get(&TypeId::of::<E>()) {
      for handler in handlers {
        handler.call(&event).await;
      }
    }
  }
}
