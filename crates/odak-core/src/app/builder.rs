//! DispatcherBuilder - パイプラインの構築とワイヤリング
//!
//! # Fail-fast 設計
//! - DocumentStore と PushGateway は必須。無ければ build() が BuildError を返す
//! - EventSink / Clock / RunIdGenerator は省略可（tracing / system clock / ULID）
//! - DispatchConfig は build() 時に検証する

use std::sync::Arc;

use crate::app::AssignmentChangeDetector;
use crate::config::{ConfigError, DispatchConfig};
use crate::impls::TracingEventSink;
use crate::notify::{DeliveryGateway, NotificationComposer};
use crate::ports::{
    Clock, DocumentStore, EventSink, PushGateway, RunIdGenerator, SystemClock, UlidRunIdGenerator,
};
use crate::resolve::{EntitlementResolver, TokenResolver};

/// # 使用例
/// ```ignore
/// let detector = DispatcherBuilder::new()
///     .store(Arc::new(store))
///     .push_gateway(Arc::new(gateway))
///     .build()?;
/// ```
#[derive(Default)]
pub struct DispatcherBuilder {
    store: Option<Arc<dyn DocumentStore>>,
    push: Option<Arc<dyn PushGateway>>,
    events: Option<Arc<dyn EventSink>>,
    clock: Option<Arc<dyn Clock>>,
    run_ids: Option<Arc<dyn RunIdGenerator>>,
    config: DispatchConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing ports: {0:?}. These must be provided before build().")]
    MissingPorts(Vec<&'static str>),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn push_gateway(mut self, push: Arc<dyn PushGateway>) -> Self {
        self.push = Some(push);
        self
    }

    pub fn event_sink(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn run_id_generator(mut self, run_ids: Arc<dyn RunIdGenerator>) -> Self {
        self.run_ids = Some(run_ids);
        self
    }

    pub fn config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<AssignmentChangeDetector, BuildError> {
        let (store, push) = match (self.store, self.push) {
            (Some(store), Some(push)) => (store, push),
            (store, push) => {
                let mut missing = Vec::new();
                if store.is_none() {
                    missing.push("DocumentStore");
                }
                if push.is_none() {
                    missing.push("PushGateway");
                }
                return Err(BuildError::MissingPorts(missing));
            }
        };
        self.config.validate()?;

        let clock: Arc<dyn Clock> = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let run_ids = self
            .run_ids
            .unwrap_or_else(|| Arc::new(UlidRunIdGenerator::new(clock.clone())));

        Ok(AssignmentChangeDetector {
            entitlements: EntitlementResolver::new(store.clone()),
            tokens: TokenResolver::new(store),
            composer: NotificationComposer::new(&self.config),
            gateway: DeliveryGateway::new(push),
            events: self.events.unwrap_or_else(|| Arc::new(TracingEventSink)),
            clock,
            run_ids,
        })
    }
}
